use anyhow::{Context, Result};
use aqi_reporter::config::StationConfig;
use aqi_reporter::fetch::{BasicClient, HttpClient, execute_bytes, get_request};
use aqi_reporter::parser::parse_readings;
use aqi_reporter::reading::Reading;
use async_trait::async_trait;
use tracing::debug;

use crate::services::reading_source::ReadingSource;

/// Reads the reporting areas around one station's coordinates.
pub struct AirNowClient<C = BasicClient> {
    client: C,
    config: StationConfig,
}

impl AirNowClient<BasicClient> {
    pub fn new(config: StationConfig) -> Result<Self> {
        let client = BasicClient::with_timeouts()?;
        Ok(Self::with_client(client, config))
    }
}

impl<C: HttpClient> AirNowClient<C> {
    pub fn with_client(client: C, config: StationConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &StationConfig {
        &self.config
    }

    fn request(&self) -> Result<reqwest::Request> {
        get_request(&self.config.endpoint, &self.config.query_params())
    }
}

#[async_trait]
impl<C: HttpClient> ReadingSource for AirNowClient<C> {
    #[tracing::instrument(skip(self), fields(endpoint = %self.config.endpoint))]
    async fn readings(&self) -> Result<Vec<Reading>> {
        let req = self.request()?;
        let bytes = execute_bytes(&self.client, req)
            .await
            .context("Reporting-area request failed")?;
        debug!(bytes = bytes.len(), "Reporting-area body received, parsing");

        parse_readings(&bytes)
    }
}
