//! Station configuration.
//!
//! Stored as a JSON object on disk; every field is optional and falls back
//! to the Redwood City defaults:
//! ```json
//! {
//!   "area_name": "Redwood City",
//!   "pollutant": "O",
//!   "latitude": 37.38029000000006,
//!   "longitude": -122.08058499999999,
//!   "state_code": "CA",
//!   "max_distance": 50
//! }
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;

pub const DEFAULT_ENDPOINT: &str = "https://airnowgovapi.com/reportingarea/get";

/// Which readings count as "ours": the reporting area and pollutant code.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StationFilter {
    pub area_name: String,
    pub pollutant: String,
}

impl StationFilter {
    pub fn new(area_name: impl Into<String>, pollutant: impl Into<String>) -> Self {
        Self {
            area_name: area_name.into(),
            pollutant: pollutant.into(),
        }
    }
}

impl Default for StationFilter {
    fn default() -> Self {
        Self::new("Redwood City", "O")
    }
}

/// Everything needed to query and filter one station.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StationConfig {
    #[serde(flatten)]
    pub filter: StationFilter,
    pub latitude: f64,
    pub longitude: f64,
    pub state_code: String,
    /// Search radius around the coordinates, in miles.
    pub max_distance: u32,
    pub endpoint: String,
}

impl Default for StationConfig {
    fn default() -> Self {
        Self {
            filter: StationFilter::default(),
            latitude: 37.38029000000006,
            longitude: -122.08058499999999,
            state_code: "CA".to_string(),
            max_distance: 50,
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

impl StationConfig {
    /// Loads the config from a JSON file at `path`.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read station config '{path}'"))?;
        Self::from_json(&content).with_context(|| format!("Invalid station config '{path}'"))
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Replaces the endpoint when `endpoint` is set.
    pub fn with_endpoint(mut self, endpoint: Option<String>) -> Self {
        if let Some(endpoint) = endpoint {
            self.endpoint = endpoint;
        }
        self
    }

    /// Query parameters for the reporting-area endpoint, in request order.
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("latitude", self.latitude.to_string()),
            ("longitude", self.longitude.to_string()),
            ("stateCode", self.state_code.clone()),
            ("maxDistance", self.max_distance.to_string()),
        ]
    }
}
