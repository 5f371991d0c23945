//! Pollutant readings
//!
//! These types match the OpenWeatherMap air pollution response:
//!
//! ```json
//! { "list": [ { "dt": 1760860800, "components": { "pm2_5": 41.2, "pm10": 60.0, ... } } ] }
//! ```
//!
//! Every component defaults to zero when it is absent from the payload.

use serde::{Deserialize, Serialize};

use crate::error::{AqiError, Result};

/// Pollutant concentrations of one sample, in µg/m³.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Components {
    /// Fine particulate matter (≤2.5 µm)
    pub pm2_5: f64,
    /// Coarse particulate matter (≤10 µm)
    pub pm10: f64,
    /// Nitrogen dioxide
    pub no2: f64,
    /// Ozone
    pub o3: f64,
    /// Sulphur dioxide
    pub so2: f64,
    /// Carbon monoxide, still in µg/m³ here
    pub co: f64,
}

impl Components {
    fn named(&self) -> [(&'static str, f64); 6] {
        [
            ("pm2_5", self.pm2_5),
            ("pm10", self.pm10),
            ("no2", self.no2),
            ("o3", self.o3),
            ("so2", self.so2),
            ("co", self.co),
        ]
    }
}

/// A single timestamped pollutant sample
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PollutantReading {
    /// Seconds since epoch
    pub dt: i64,
    #[serde(default)]
    pub components: Components,
}

impl PollutantReading {
    #[must_use]
    pub fn new(dt: i64, components: Components) -> Self {
        Self { dt, components }
    }

    /// Reading with only a PM2.5 value; other components are zero
    #[must_use]
    pub fn pm25(dt: i64, pm2_5: f64) -> Self {
        Self::new(
            dt,
            Components {
                pm2_5,
                ..Components::default()
            },
        )
    }

    /// Strict check for callers that want to reject bad input.
    ///
    /// # Errors
    ///
    /// * `AqiError::InvalidConcentration` - a component is negative, `NaN` or infinite
    pub fn validate(&self) -> Result<()> {
        for (pollutant, value) in self.components.named() {
            if !value.is_finite() || value < 0.0 {
                return Err(AqiError::invalid_concentration(pollutant, value));
            }
        }
        Ok(())
    }

    /// Display values for the pollutant table
    #[must_use]
    pub fn breakdown(&self) -> PollutantBreakdown {
        PollutantBreakdown::from(&self.components)
    }
}

/// Forecast series, soonest sample first
pub type ForecastSeries = Vec<PollutantReading>;

/// Air pollution API response envelope
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AirPollutionResponse {
    #[serde(default)]
    pub list: Vec<PollutantReading>,
}

impl AirPollutionResponse {
    /// The current reading, i.e. the first entry of the list
    ///
    /// # Errors
    ///
    /// * `AqiError::EmptyResponse` - the list is empty
    pub fn current(&self) -> Result<&PollutantReading> {
        self.list.first().ok_or(AqiError::EmptyResponse)
    }

    /// The whole list as a forecast series
    #[must_use]
    pub fn into_series(self) -> ForecastSeries {
        self.list
    }
}

/// Pollutant values in display units: µg/m³, except CO in mg/m³.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PollutantBreakdown {
    pub pm2_5: f64,
    pub pm10: f64,
    pub no2: f64,
    pub o3: f64,
    pub so2: f64,
    /// mg/m³
    pub co_mg: f64,
}

impl PollutantBreakdown {
    /// Chart labels matching [`PollutantBreakdown::values`]
    pub const LABELS: [&'static str; 6] = ["PM2.5", "PM10", "NO₂", "O₃", "SO₂", "CO"];

    /// Values in chart order
    #[must_use]
    pub fn values(&self) -> [f64; 6] {
        [
            self.pm2_5, self.pm10, self.no2, self.o3, self.so2, self.co_mg,
        ]
    }

    /// Formatted table cells in chart order, e.g. `"41.2 µg/m³"` and `"0.35 mg/m³"`
    #[must_use]
    pub fn formatted(&self) -> [String; 6] {
        let ug = |value: f64| format!("{value:.1} µg/m³");
        [
            ug(self.pm2_5),
            ug(self.pm10),
            ug(self.no2),
            ug(self.o3),
            ug(self.so2),
            format!("{:.2} mg/m³", self.co_mg),
        ]
    }
}

impl From<&Components> for PollutantBreakdown {
    fn from(components: &Components) -> Self {
        Self {
            pm2_5: components.pm2_5,
            pm10: components.pm10,
            no2: components.no2,
            o3: components.o3,
            so2: components.so2,
            co_mg: components.co / 1000.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESPONSE: &str = r#"{
        "coord": { "lon": 80.95, "lat": 26.85 },
        "list": [
            {
                "main": { "aqi": 4 },
                "components": {
                    "co": 520.7, "no": 0.1, "no2": 14.2, "o3": 60.1,
                    "so2": 7.9, "pm2_5": 41.2, "pm10": 63.5, "nh3": 9.3
                },
                "dt": 1760860800
            }
        ]
    }"#;

    #[test]
    fn test_parse_response() {
        let response: AirPollutionResponse = serde_json::from_str(RESPONSE).unwrap();
        let current = response.current().unwrap();
        assert_eq!(current.dt, 1_760_860_800);
        assert!((current.components.pm2_5 - 41.2).abs() < f64::EPSILON);
        assert!((current.components.co - 520.7).abs() < f64::EPSILON);
    }

    #[test]
    fn test_missing_components_default_to_zero() {
        let reading: PollutantReading =
            serde_json::from_str(r#"{ "dt": 10, "components": { "pm10": 12.0 } }"#).unwrap();
        assert!(reading.components.pm2_5.abs() < f64::EPSILON);
        assert!((reading.components.pm10 - 12.0).abs() < f64::EPSILON);

        let reading: PollutantReading = serde_json::from_str(r#"{ "dt": 10 }"#).unwrap();
        assert_eq!(reading.components, Components::default());
    }

    #[test]
    fn test_empty_response() {
        let response: AirPollutionResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response.current(), Err(AqiError::EmptyResponse));
        assert!(response.into_series().is_empty());
    }

    #[test]
    fn test_validate() {
        assert!(PollutantReading::pm25(0, 12.0).validate().is_ok());

        let err = PollutantReading::pm25(0, -1.0).validate().unwrap_err();
        assert!(matches!(
            err,
            AqiError::InvalidConcentration {
                pollutant: "pm2_5",
                ..
            }
        ));

        let mut reading = PollutantReading::pm25(0, 5.0);
        reading.components.co = f64::NAN;
        assert!(matches!(
            reading.validate(),
            Err(AqiError::InvalidConcentration { pollutant: "co", .. })
        ));
    }

    #[test]
    fn test_breakdown_converts_co() {
        let response: AirPollutionResponse = serde_json::from_str(RESPONSE).unwrap();
        let breakdown = response.current().unwrap().breakdown();
        assert!((breakdown.co_mg - 0.5207).abs() < 1e-9);

        let cells = breakdown.formatted();
        assert_eq!(cells[0], "41.2 µg/m³");
        assert_eq!(cells[1], "63.5 µg/m³");
        assert_eq!(cells[5], "0.52 mg/m³");
        assert_eq!(PollutantBreakdown::LABELS.len(), breakdown.values().len());
    }
}
