//! Errors raised while selecting a reading.

/// Errors that can arise when picking the current reading out of a batch.
#[derive(Debug, Clone, PartialEq)]
pub enum AqiError {
    /// No primary reading matched the configured area and pollutant.
    NoPrimarySource { area_name: String, pollutant: String },
    /// A candidate's issue date could not be parsed.
    DateParse {
        date: String,
        source: chrono::ParseError,
    },
}

impl std::fmt::Display for AqiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AqiError::NoPrimarySource {
                area_name,
                pollutant,
            } => write!(
                f,
                "No primary data source found for {} ({})",
                area_name, pollutant
            ),
            AqiError::DateParse { date, source } => {
                write!(f, "Invalid issue date {:?}: {}", date, source)
            }
        }
    }
}

impl std::error::Error for AqiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AqiError::NoPrimarySource { .. } => None,
            AqiError::DateParse { source, .. } => Some(source),
        }
    }
}
