//! A single reporting-area reading as published by AirNow.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::AqiError;

/// Format of `issueDate` in the upstream feed, e.g. `01/02/21`.
pub const ISSUE_DATE_FORMAT: &str = "%m/%d/%y";

/// One reported measurement for a reporting area.
///
/// Field names follow the upstream JSON; anything else in the payload
/// (category objects, coordinates, discussion text) is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Reading {
    #[serde(rename = "issueDate")]
    pub issued_at: String,
    #[serde(rename = "validDate", default)]
    pub valid_date: Option<String>,
    #[serde(rename = "isPrimary")]
    pub is_primary: bool,
    #[serde(rename = "aqi")]
    pub value: u32,
    #[serde(rename = "reportingArea")]
    pub area_name: String,
    #[serde(rename = "dataType")]
    pub kind: String,
}

impl Reading {
    /// Parses `issued_at` into a comparable calendar date.
    ///
    /// # Errors
    ///
    /// Returns [`AqiError::DateParse`] if the text is not `MM/DD/YY`.
    pub fn issue_date(&self) -> Result<NaiveDate, AqiError> {
        NaiveDate::parse_from_str(self.issued_at.trim(), ISSUE_DATE_FORMAT).map_err(|source| {
            AqiError::DateParse {
                date: self.issued_at.clone(),
                source,
            }
        })
    }
}
