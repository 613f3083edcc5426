//! Error handling for METAR parsing operations.
//!
//! One variant per failure kind. Every variant raised by a group extractor
//! carries the offending token so callers can log and skip the report.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MetarError {
    #[error("Empty report: no text to parse")]
    EmptyInput,

    #[error("Missing day/time group (DDHHMMZ)")]
    MissingDayTime,

    #[error("Ambiguous day/time: found both '{first}' and '{second}'")]
    AmbiguousDayTime { first: String, second: String },

    #[error("Malformed day/time group '{token}': {reason}")]
    MalformedDayTime { token: String, reason: String },

    #[error("Malformed wind group '{token}': {reason}")]
    MalformedWind { token: String, reason: String },

    #[error("Malformed visibility group '{token}': {reason}")]
    MalformedVisibility { token: String, reason: String },

    #[error("Malformed temperature/dew point group '{token}': {reason}")]
    MalformedTempDew { token: String, reason: String },

    #[error("Malformed pressure group '{token}': {reason}")]
    MalformedPressure { token: String, reason: String },

    #[error("Invalid station identifier '{token}': expected 4 alphanumeric characters")]
    InvalidStation { token: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl MetarError {
    /// Create a day/time decoding error
    pub fn malformed_day_time(token: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedDayTime {
            token: token.into(),
            reason: reason.into(),
        }
    }

    /// Create a wind decoding error
    pub fn malformed_wind(token: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedWind {
            token: token.into(),
            reason: reason.into(),
        }
    }

    /// Create a visibility decoding error
    pub fn malformed_visibility(token: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedVisibility {
            token: token.into(),
            reason: reason.into(),
        }
    }

    /// Create a temperature/dew point decoding error
    pub fn malformed_temp_dew(token: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedTempDew {
            token: token.into(),
            reason: reason.into(),
        }
    }

    /// Create a pressure decoding error
    pub fn malformed_pressure(token: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedPressure {
            token: token.into(),
            reason: reason.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Name of the report group that failed, for log lines
    pub fn group(&self) -> &'static str {
        match self {
            Self::EmptyInput => "report",
            Self::MissingDayTime | Self::AmbiguousDayTime { .. } | Self::MalformedDayTime { .. } => {
                "day/time"
            }
            Self::MalformedWind { .. } => "wind",
            Self::MalformedVisibility { .. } => "visibility",
            Self::MalformedTempDew { .. } => "temperature/dew point",
            Self::MalformedPressure { .. } => "pressure",
            Self::InvalidStation { .. } => "station",
            Self::Configuration { .. } => "configuration",
            Self::Io(_) => "io",
        }
    }

    /// The token that failed to decode, if the error is tied to one
    pub fn token(&self) -> Option<&str> {
        match self {
            Self::AmbiguousDayTime { second, .. } => Some(second),
            Self::MalformedDayTime { token, .. }
            | Self::MalformedWind { token, .. }
            | Self::MalformedVisibility { token, .. }
            | Self::MalformedTempDew { token, .. }
            | Self::MalformedPressure { token, .. }
            | Self::InvalidStation { token } => Some(token),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, MetarError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_token() {
        let err = MetarError::malformed_wind("ABCKT", "not numeric");
        assert_eq!(err.to_string(), "Malformed wind group 'ABCKT': not numeric");
        assert_eq!(err.group(), "wind");
        assert_eq!(err.token(), Some("ABCKT"));
    }

    #[test]
    fn test_errors_without_token() {
        assert_eq!(MetarError::EmptyInput.token(), None);
        assert_eq!(MetarError::MissingDayTime.group(), "day/time");
        assert_eq!(MetarError::configuration("bad").group(), "configuration");
    }

    #[test]
    fn test_ambiguous_day_time_reports_second_token() {
        let err = MetarError::AmbiguousDayTime {
            first: "210051Z".to_string(),
            second: "210151Z".to_string(),
        };
        assert_eq!(err.token(), Some("210151Z"));
        assert!(err.to_string().contains("210051Z"));
    }
}
