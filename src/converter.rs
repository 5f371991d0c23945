//! PM2.5 to US AQI conversion
//!
//! Piecewise linear interpolation over the US EPA PM2.5 breakpoints:
//!
//! ```text
//! AQI = AQIlo + (AQIhi - AQIlo) / (Chi - Clo) * (C - Clo)
//! ```
//!
//! Only PM2.5 drives the score. PM10 is carried in the reading but ignored.

use tracing::warn;

use crate::reading::PollutantReading;
use crate::score::AqiScore;

/// One segment of the conversion: concentration range mapped onto an AQI range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakpoint {
    pub conc_low: f64,
    pub conc_high: f64,
    pub aqi_low: f64,
    pub aqi_high: f64,
}

impl Breakpoint {
    const fn new(conc_low: f64, conc_high: f64, aqi_low: f64, aqi_high: f64) -> Self {
        Self {
            conc_low,
            conc_high,
            aqi_low,
            aqi_high,
        }
    }

    fn interpolate(&self, concentration: f64) -> f64 {
        self.aqi_low
            + (self.aqi_high - self.aqi_low) / (self.conc_high - self.conc_low)
                * (concentration - self.conc_low)
    }
}

/// PM2.5 breakpoints in µg/m³. Upper bounds are inclusive.
pub const PM25_BREAKPOINTS: [Breakpoint; 7] = [
    Breakpoint::new(0.0, 12.0, 0.0, 50.0),      // Good
    Breakpoint::new(12.0, 35.4, 50.0, 100.0),   // Moderate
    Breakpoint::new(35.4, 55.4, 100.0, 150.0),  // Unhealthy for Sensitive Groups
    Breakpoint::new(55.4, 150.4, 150.0, 200.0), // Unhealthy
    Breakpoint::new(150.4, 250.4, 200.0, 300.0), // Very Unhealthy
    Breakpoint::new(250.4, 350.4, 300.0, 400.0), // Hazardous
    Breakpoint::new(350.4, 500.4, 400.0, 500.0), // Hazardous
];

/// Convert a reading to its AQI score. Missing PM2.5 has already defaulted to 0.
#[must_use]
pub fn convert_to_aqi(reading: &PollutantReading) -> AqiScore {
    pm25_to_aqi(reading.components.pm2_5)
}

/// Convert a PM2.5 concentration in µg/m³ to an AQI score.
///
/// Negative and `NaN` concentrations are treated as zero and logged.
/// Anything above the last breakpoint scores 500.
#[must_use]
pub fn pm25_to_aqi(pm2_5: f64) -> AqiScore {
    let concentration = sanitize(pm2_5);

    let raw = PM25_BREAKPOINTS
        .iter()
        .find(|bp| concentration <= bp.conc_high)
        .map_or(f64::from(AqiScore::MAX.value()), |bp| {
            bp.interpolate(concentration)
        });

    AqiScore::from_raw(raw)
}

fn sanitize(pm2_5: f64) -> f64 {
    if pm2_5.is_nan() {
        warn!("PM2.5 concentration is NaN, treating as 0");
        return 0.0;
    }
    if pm2_5 < 0.0 {
        warn!(pm2_5, "negative PM2.5 concentration, clamping to 0");
        return 0.0;
    }
    pm2_5
}
