use async_trait::async_trait;
use reqwest::{Request, Response};

/// Sends a prepared request. Implemented by [`super::BasicClient`]; tests
/// and callers can supply their own transport.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn execute(&self, req: Request) -> reqwest::Result<Response>;
}
