//! Evaluation of a batch into the value shown to users.

use chrono::NaiveDate;
use serde::Serialize;

use crate::category::{Category, classify};
use crate::config::StationFilter;
use crate::error::AqiError;
use crate::reading::Reading;
use crate::select::{freshest, primary_readings};

/// The selected reading's value and its category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assessment {
    pub value: u32,
    pub category: Category,
    pub issued_on: NaiveDate,
}

/// Runs filter, freshest-pick and classification over one batch.
pub fn evaluate(readings: &[Reading], filter: &StationFilter) -> Result<Assessment, AqiError> {
    let primary = primary_readings(readings, filter)?;
    let latest = freshest(&primary)?;

    Ok(Assessment {
        value: latest.value,
        category: classify(i64::from(latest.value)),
        issued_on: latest.issue_date()?,
    })
}

/// JSON body served to clients.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    #[serde(rename = "AQI")]
    pub aqi: Option<u32>,
    #[serde(rename = "Desc")]
    pub desc: &'static str,
    #[serde(rename = "Color")]
    pub color: &'static str,
}

impl Report {
    /// Report for a bare value, with no reading behind it.
    pub fn for_value(value: u32) -> Self {
        let category = classify(i64::from(value));
        Self {
            aqi: Some(value),
            desc: category.label(),
            color: category.color(),
        }
    }

    /// Report shown when no reading could be selected.
    pub fn unavailable() -> Self {
        Self {
            aqi: None,
            desc: Category::Error.label(),
            color: Category::Error.color(),
        }
    }
}

impl From<&Assessment> for Report {
    fn from(a: &Assessment) -> Self {
        Self {
            aqi: Some(a.value),
            desc: a.category.label(),
            color: a.category.color(),
        }
    }
}
