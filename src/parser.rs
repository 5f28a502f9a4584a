//! JSON parser for AirNow reporting-area responses.

use anyhow::{Context, Result};

use crate::reading::Reading;

/// Decodes a reporting-area response body into readings, keeping the
/// upstream order.
///
/// # Errors
///
/// Returns an error if the bytes are not a JSON array of readings.
pub fn parse_readings(bytes: &[u8]) -> Result<Vec<Reading>> {
    serde_json::from_slice(bytes).context("Failed to decode reporting-area readings")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_array() {
        let readings = parse_readings(b"[]").unwrap();
        assert!(readings.is_empty());
    }

    #[test]
    fn test_parse_invalid_bytes() {
        let invalid_bytes = vec![0xFF, 0xFE, 0x00, 0x01];
        assert!(parse_readings(&invalid_bytes).is_err());
    }

    #[test]
    fn test_parse_object_instead_of_array() {
        assert!(parse_readings(br#"{"aqi": 10}"#).is_err());
    }

    #[test]
    fn test_parse_preserves_order() {
        let body = br#"[
            {"issueDate":"01/01/21","isPrimary":true,"aqi":40,"reportingArea":"Redwood City","dataType":"O"},
            {"issueDate":"01/02/21","isPrimary":false,"aqi":55,"reportingArea":"Redwood City","dataType":"F"}
        ]"#;
        let readings = parse_readings(body).unwrap();
        assert_eq!(readings.len(), 2);
        assert_eq!(readings[0].value, 40);
        assert_eq!(readings[1].kind, "F");
        assert!(!readings[1].is_primary);
    }
}
