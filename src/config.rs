//! Engine configuration
//!
//! The host may expose these as user settings. Missing fields fall back to
//! the defaults when deserialized.

use serde::{Deserialize, Serialize};

use crate::error::{AqiError, Result};
use crate::score::AqiScore;

/// Seven days, in seconds
pub const DEFAULT_RETENTION_SECS: i64 = 7 * 24 * 60 * 60;
/// Forecast samples considered for predictive summaries
pub const DEFAULT_FORECAST_HORIZON: usize = 24;
/// Alerts trigger for AQI strictly above this value
pub const DEFAULT_ALERT_THRESHOLD: u16 = 150;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// How long history samples are kept, in seconds
    pub retention_secs: i64,
    /// Number of forecast samples ahead used for "tomorrow" and the average
    pub forecast_horizon: usize,
    pub alert_threshold: u16,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            retention_secs: DEFAULT_RETENTION_SECS,
            forecast_horizon: DEFAULT_FORECAST_HORIZON,
            alert_threshold: DEFAULT_ALERT_THRESHOLD,
        }
    }
}

impl EngineConfig {
    /// Check that every value is usable.
    ///
    /// # Errors
    ///
    /// * `AqiError::InvalidConfig` - retention or horizon is not positive, or
    ///   the alert threshold lies outside the AQI scale
    pub fn validate(&self) -> Result<()> {
        validate_retention(self.retention_secs)?;
        if self.forecast_horizon == 0 {
            return Err(AqiError::invalid_config("forecast_horizon", "0"));
        }
        if self.alert_threshold > AqiScore::MAX.value() {
            return Err(AqiError::invalid_config(
                "alert_threshold",
                &self.alert_threshold.to_string(),
            ));
        }
        Ok(())
    }
}

/// Check that a retention period is positive.
///
/// # Errors
///
/// * `AqiError::InvalidConfig` - `retention_secs` is zero or negative
pub fn validate_retention(retention_secs: i64) -> Result<()> {
    if retention_secs <= 0 {
        return Err(AqiError::invalid_config(
            "retention_secs",
            &retention_secs.to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.retention_secs, 604_800);
        assert_eq!(config.forecast_horizon, 24);
        assert_eq!(config.alert_threshold, 150);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: EngineConfig = serde_json::from_str(r#"{ "alert_threshold": 100 }"#).unwrap();
        assert_eq!(config.alert_threshold, 100);
        assert_eq!(config.retention_secs, DEFAULT_RETENTION_SECS);
        assert_eq!(config.forecast_horizon, DEFAULT_FORECAST_HORIZON);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = EngineConfig {
            retention_secs: 0,
            ..EngineConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(AqiError::InvalidConfig("retention_secs cannot be 0".into()))
        );

        let config = EngineConfig {
            forecast_horizon: 0,
            ..EngineConfig::default()
        };
        assert!(config.validate().is_err());

        let config = EngineConfig {
            alert_threshold: 501,
            ..EngineConfig::default()
        };
        assert!(matches!(config.validate(), Err(AqiError::InvalidConfig(_))));
    }
}
