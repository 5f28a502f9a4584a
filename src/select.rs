//! Picks the current reading for a station out of an upstream batch.

use tracing::debug;

use crate::config::StationFilter;
use crate::error::AqiError;
use crate::reading::Reading;

/// Returns the primary readings for the filter's area and pollutant, in
/// their original order.
///
/// # Errors
///
/// Returns [`AqiError::NoPrimarySource`] when nothing matches.
pub fn primary_readings<'a>(
    readings: &'a [Reading],
    filter: &StationFilter,
) -> Result<Vec<&'a Reading>, AqiError> {
    let primary: Vec<&Reading> = readings
        .iter()
        .filter(|r| r.is_primary && r.area_name == filter.area_name && r.kind == filter.pollutant)
        .collect();

    debug!(
        total = readings.len(),
        matched = primary.len(),
        area = %filter.area_name,
        pollutant = %filter.pollutant,
        "Filtered primary readings"
    );

    if primary.is_empty() {
        return Err(AqiError::NoPrimarySource {
            area_name: filter.area_name.clone(),
            pollutant: filter.pollutant.clone(),
        });
    }
    Ok(primary)
}

/// Returns the most recently issued candidate. On equal dates the first
/// one seen wins.
///
/// # Errors
///
/// Returns [`AqiError::DateParse`] if any candidate's date is unreadable,
/// and [`AqiError::NoPrimarySource`] for an empty slice.
pub fn freshest<'a>(candidates: &[&'a Reading]) -> Result<&'a Reading, AqiError> {
    let (first, rest) = candidates
        .split_first()
        .ok_or_else(|| AqiError::NoPrimarySource {
            area_name: String::new(),
            pollutant: String::new(),
        })?;

    let mut best = *first;
    let mut best_date = best.issue_date()?;

    for candidate in rest {
        let date = candidate.issue_date()?;
        if date > best_date {
            best = *candidate;
            best_date = date;
        }
    }

    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(area: &str, kind: &str, primary: bool, issued_at: &str, value: u32) -> Reading {
        Reading {
            issued_at: issued_at.to_string(),
            valid_date: None,
            is_primary: primary,
            value,
            area_name: area.to_string(),
            kind: kind.to_string(),
        }
    }

    #[test]
    fn test_filter_keeps_only_matching_in_order() {
        let batch = vec![
            reading("Redwood City", "O", true, "01/01/21", 10),
            reading("Redwood City", "F", true, "01/01/21", 20),
            reading("San Jose", "O", true, "01/01/21", 30),
            reading("Redwood City", "O", false, "01/01/21", 40),
            reading("Redwood City", "O", true, "01/03/21", 50),
        ];
        let primary = primary_readings(&batch, &StationFilter::default()).unwrap();
        let values: Vec<u32> = primary.iter().map(|r| r.value).collect();
        assert_eq!(values, vec![10, 50]);
    }

    #[test]
    fn test_filter_empty_batch() {
        let err = primary_readings(&[], &StationFilter::default()).unwrap_err();
        assert!(matches!(err, AqiError::NoPrimarySource { .. }));
    }

    #[test]
    fn test_filter_no_matching_kind() {
        let batch = vec![
            reading("Redwood City", "F", true, "01/01/21", 10),
            reading("Redwood City", "F", true, "01/02/21", 20),
        ];
        let err = primary_readings(&batch, &StationFilter::default()).unwrap_err();
        assert_eq!(
            err,
            AqiError::NoPrimarySource {
                area_name: "Redwood City".to_string(),
                pollutant: "O".to_string(),
            }
        );
    }

    #[test]
    fn test_filter_uses_given_station() {
        let batch = vec![
            reading("Redwood City", "O", true, "01/01/21", 10),
            reading("San Jose", "O", true, "01/01/21", 30),
        ];
        let primary = primary_readings(&batch, &StationFilter::new("San Jose", "O")).unwrap();
        assert_eq!(primary.len(), 1);
        assert_eq!(primary[0].value, 30);
    }

    #[test]
    fn test_freshest_picks_latest() {
        let a = reading("Redwood City", "O", true, "01/01/21", 40);
        let b = reading("Redwood City", "O", true, "01/03/21", 90);
        let c = reading("Redwood City", "O", true, "01/02/21", 60);
        let picked = freshest(&[&a, &b, &c]).unwrap();
        assert_eq!(picked.value, 90);
    }

    #[test]
    fn test_freshest_tie_keeps_first_seen() {
        let a = reading("Redwood City", "O", true, "01/01/21", 40);
        let b = reading("Redwood City", "O", true, "01/02/21", 70);
        let c = reading("Redwood City", "O", true, "01/02/21", 80);
        let picked = freshest(&[&a, &b, &c]).unwrap();
        assert_eq!(picked.value, 70);
    }

    #[test]
    fn test_freshest_bad_date_is_fatal() {
        let a = reading("Redwood City", "O", true, "01/01/21", 40);
        let b = reading("Redwood City", "O", true, "2021-01-02", 90);
        let err = freshest(&[&a, &b]).unwrap_err();
        assert!(matches!(err, AqiError::DateParse { ref date, .. } if date == "2021-01-02"));
    }

    #[test]
    fn test_freshest_single_bad_date() {
        let a = reading("Redwood City", "O", true, "", 40);
        assert!(matches!(freshest(&[&a]), Err(AqiError::DateParse { .. })));
    }

    #[test]
    fn test_freshest_empty() {
        assert!(matches!(freshest(&[]), Err(AqiError::NoPrimarySource { .. })));
    }
}
