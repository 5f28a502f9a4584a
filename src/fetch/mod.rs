mod basic;
mod client;

pub use basic::BasicClient;
pub use client::HttpClient;

use anyhow::{Result, anyhow};

/// Builds a GET request for `url` with `params` appended to its query string.
pub fn get_request(url: &str, params: &[(&str, String)]) -> Result<reqwest::Request> {
    let mut req = reqwest::Request::new(reqwest::Method::GET, url.parse()?);
    if !params.is_empty() {
        let mut pairs = req.url_mut().query_pairs_mut();
        for (name, value) in params {
            pairs.append_pair(name, value);
        }
    }
    Ok(req)
}

/// Sends `req` and returns the body, failing on a non-2xx status.
pub async fn execute_bytes<C: HttpClient>(client: &C, req: reqwest::Request) -> Result<Vec<u8>> {
    let resp = client.execute(req).await?;

    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(anyhow!("Upstream returned status {}: {}", status, body));
    }

    Ok(resp.bytes().await?.to_vec())
}

pub async fn fetch_bytes<C: HttpClient>(client: &C, url: &str) -> Result<Vec<u8>> {
    execute_bytes(client, get_request(url, &[])?).await
}
