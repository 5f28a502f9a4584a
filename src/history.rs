//! CSV history rows for the polling loop.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::config::StationFilter;
use crate::report::Assessment;

/// One poll result, written as a CSV row.
#[derive(Debug, Default, Serialize)]
pub struct Sample {
    pub timestamp: DateTime<Utc>,
    pub area: Option<String>,
    pub pollutant: Option<String>,

    // selected reading
    pub issued_at: Option<String>,
    pub aqi: Option<u32>,
    pub category: Option<String>,
    pub color: Option<String>,

    // error tracking
    pub error_type: Option<String>,
    pub error_message: Option<String>,
}

impl Sample {
    pub fn from_assessment(assessment: &Assessment) -> Self {
        Sample {
            timestamp: Utc::now(),
            issued_at: Some(assessment.issued_on.format("%Y-%m-%d").to_string()),
            aqi: Some(assessment.value),
            category: Some(assessment.category.label().to_string()),
            color: Some(assessment.category.color().to_string()),
            ..Default::default()
        }
    }

    /// Create an error record with timestamp and error information
    pub fn from_error(error_type: &str, error_message: &str) -> Self {
        Sample {
            timestamp: Utc::now(),
            error_type: Some(error_type.to_string()),
            error_message: Some(error_message.to_string()),
            ..Default::default()
        }
    }

    /// Set station metadata (area and pollutant)
    pub fn with_station(mut self, filter: &StationFilter) -> Self {
        self.area = Some(filter.area_name.clone());
        self.pollutant = Some(filter.pollutant.clone());
        self
    }
}
