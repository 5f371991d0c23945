//! Error types for the AQI engine

use thiserror::Error;

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, AqiError>;

/// Errors that can occur around the AQI engine.
///
/// The conversion, classification, history and forecast operations are total
/// and never produce these; they come from the session, configuration and
/// strict input validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AqiError {
    /// Air pollution response carried no readings
    #[error("Air pollution response contains no readings")]
    EmptyResponse,

    /// A concentration is negative or not a finite number
    #[error("Invalid {pollutant} concentration: {value}")]
    InvalidConcentration { pollutant: &'static str, value: f64 },

    /// An acquisition cycle was superseded or has already completed
    #[error("Stale acquisition cycle: generation {given}, current is {current}")]
    StaleCycle { current: u64, given: u64 },

    /// City key not present in the city table
    #[error("Unknown city: {0}")]
    UnknownCity(String),

    /// Configuration value out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl AqiError {
    /// Create a new `InvalidConcentration` error
    #[must_use]
    pub fn invalid_concentration(pollutant: &'static str, value: f64) -> Self {
        Self::InvalidConcentration { pollutant, value }
    }

    /// Create a new `InvalidConfig` error for a specific field
    #[must_use]
    pub fn invalid_config(field: &str, value: &str) -> Self {
        Self::InvalidConfig(format!("{field} cannot be {value}"))
    }
}
