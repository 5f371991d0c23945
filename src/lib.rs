//! AQI engine for air-quality dashboards
//!
//! This crate turns raw pollutant readings into the numbers an air-quality
//! dashboard shows:
//! - US EPA PM2.5 based AQI conversion ([`convert_to_aqi`])
//! - Category bands with labels and colors ([`classify`])
//! - A rolling seven day AQI history ([`HistoryStore`])
//! - Forecast summaries for "tomorrow" and the next 24 hours ([`summarize_forecast`])
//!
//! Fetching data is left to the host. [`Dashboard`] ties the pieces together
//! for one session.
//!
//! # Example
//!
//! ```rust
//! use aqi_engine::{AqiCategory, AirPollutionResponse, classify, convert_to_aqi};
//!
//! let json = r#"{ "list": [ { "dt": 1760860800, "components": { "pm2_5": 55.4 } } ] }"#;
//! let response: AirPollutionResponse = serde_json::from_str(json).unwrap();
//!
//! let aqi = convert_to_aqi(response.current().unwrap());
//! assert_eq!(aqi.value(), 150);
//! assert_eq!(classify(aqi), AqiCategory::UnhealthySensitive);
//! ```

pub mod category;
pub mod city;
pub mod config;
pub mod converter;
pub mod error;
pub mod forecast;
pub mod history;
pub mod reading;
pub mod score;
pub mod session;

pub use category::{AlertLevel, AqiCategory, classify};
pub use city::{City, Coordinates};
pub use config::EngineConfig;
pub use converter::{convert_to_aqi, pm25_to_aqi};
pub use error::{AqiError, Result};
pub use forecast::{ForecastPoint, ForecastSummary, summarize_forecast};
pub use history::{HistoricalSample, HistoryStore, TrendPoint};
pub use reading::{
    AirPollutionResponse, Components, ForecastSeries, PollutantBreakdown, PollutantReading,
};
pub use score::AqiScore;
pub use session::{AcquiredData, CurrentConditions, CycleTicket, Dashboard, DashboardUpdate};
