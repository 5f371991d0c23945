//! Forecast summaries
//!
//! Forecast series are assumed to be hourly and sorted by time. Neither is
//! checked: `series[24]` is taken as "tomorrow" whatever its timestamp says.

use chrono::{DateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::category::AqiCategory;
use crate::config::DEFAULT_FORECAST_HORIZON;
use crate::converter::convert_to_aqi;
use crate::reading::PollutantReading;
use crate::score::AqiScore;

/// Prediction values; `None` means no forecast data was available
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ForecastSummary {
    /// AQI about one horizon ahead
    pub tomorrow: Option<AqiScore>,
    /// Mean AQI over the first horizon of samples
    pub avg_24h: Option<AqiScore>,
}

/// One bar of the forecast chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub timestamp: i64,
    /// UTC hour, e.g. `"13:00"`
    pub hour_label: String,
    pub aqi: AqiScore,
    pub category: AqiCategory,
}

/// Summarize a forecast series with the default 24 sample horizon
#[must_use]
pub fn summarize_forecast(series: &[PollutantReading]) -> ForecastSummary {
    summarize_forecast_with_horizon(series, DEFAULT_FORECAST_HORIZON)
}

/// Summarize a forecast series.
///
/// * `tomorrow` - AQI of `series[horizon]` when the series is longer than
///   `horizon`, otherwise of the last sample
/// * `avg_24h` - rounded mean AQI of the first `min(horizon, len)` samples
///
/// Both are `None` for an empty series. A zero horizon behaves like 1.
#[must_use]
pub fn summarize_forecast_with_horizon(
    series: &[PollutantReading],
    horizon: usize,
) -> ForecastSummary {
    let Some(last) = series.last() else {
        return ForecastSummary::default();
    };
    let horizon = horizon.max(1);

    let tomorrow = convert_to_aqi(series.get(horizon).unwrap_or(last));

    let window = &series[..horizon.min(series.len())];
    let total: f64 = window
        .iter()
        .map(|reading| f64::from(convert_to_aqi(reading).value()))
        .sum();
    // Window length is at most the horizon, well within f64 precision
    #[allow(clippy::cast_precision_loss)]
    let avg = AqiScore::from_raw(total / window.len() as f64);

    ForecastSummary {
        tomorrow: Some(tomorrow),
        avg_24h: Some(avg),
    }
}

/// Chart points for the first `horizon` forecast samples
#[must_use]
pub fn forecast_points(series: &[PollutantReading], horizon: usize) -> Vec<ForecastPoint> {
    series
        .iter()
        .take(horizon)
        .map(|reading| {
            let aqi = convert_to_aqi(reading);
            ForecastPoint {
                timestamp: reading.dt,
                hour_label: hour_label(reading.dt),
                aqi,
                category: aqi.category(),
            }
        })
        .collect()
}

fn hour_label(timestamp: i64) -> String {
    DateTime::from_timestamp(timestamp, 0)
        .map(|dt| format!("{}:00", dt.hour()))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use insta::assert_debug_snapshot;
    use rstest::rstest;

    use super::*;

    const START: i64 = 1_760_832_000;
    const HOUR: i64 = 3600;

    /// Hourly series where sample `i` has PM2.5 `pm(i)`
    fn series(len: usize, pm: impl Fn(usize) -> f64) -> Vec<PollutantReading> {
        (0..len)
            .map(|i| PollutantReading::pm25(START + i64::try_from(i).unwrap() * HOUR, pm(i)))
            .collect()
    }

    #[test]
    fn test_empty_series() {
        assert_eq!(
            summarize_forecast(&[]),
            ForecastSummary {
                tomorrow: None,
                avg_24h: None,
            }
        );
        assert!(forecast_points(&[], 24).is_empty());
    }

    #[test]
    fn test_long_series_uses_sample_24() {
        // Samples 0..=24 score 50, the tail scores 100
        let data = series(30, |i| if i <= 24 { 12.0 } else { 35.4 });
        let summary = summarize_forecast(&data);
        assert_eq!(summary.tomorrow, Some(AqiScore::from(50)));
        assert_eq!(summary.avg_24h, Some(AqiScore::from(50)));

        // Change only sample 24 and the tail: the average is unaffected
        let data = series(30, |i| if i < 24 { 0.0 } else { 55.4 });
        let summary = summarize_forecast(&data);
        assert_eq!(summary.tomorrow, Some(AqiScore::from(150)));
        assert_eq!(summary.avg_24h, Some(AqiScore::from(0)));
    }

    #[test]
    fn test_short_series_uses_last_sample() {
        // Ten samples alternating 0 and 100 AQI, last one is 100
        let data = series(10, |i| if i % 2 == 0 { 0.0 } else { 35.4 });
        let summary = summarize_forecast(&data);
        assert_eq!(summary.tomorrow, Some(AqiScore::from(100)));
        assert_eq!(summary.avg_24h, Some(AqiScore::from(50)));
    }

    #[rstest]
    #[case::exactly_horizon(24, 23)]
    #[case::one_past_horizon(25, 24)]
    #[case::single(1, 0)]
    fn test_tomorrow_index(#[case] len: usize, #[case] expected_index: usize) {
        // PM2.5 of 1.2 per index makes every sample score distinct
        let data = series(len, |i| 1.2 * f64::from(u32::try_from(i).unwrap()));
        let summary = summarize_forecast(&data);
        assert_eq!(summary.tomorrow, Some(convert_to_aqi(&data[expected_index])));
    }

    #[test]
    fn test_average_rounds() {
        // AQI 0 and 1 average to 0.5, which rounds up
        let data = vec![
            PollutantReading::pm25(START, 0.0),
            PollutantReading::pm25(START + HOUR, 0.24),
        ];
        assert_eq!(convert_to_aqi(&data[1]).value(), 1);
        let summary = summarize_forecast(&data);
        assert_eq!(summary.avg_24h, Some(AqiScore::from(1)));
    }

    #[test]
    fn test_custom_horizon() {
        let data = series(6, |i| if i < 3 { 12.0 } else { 55.4 });
        let summary = summarize_forecast_with_horizon(&data, 3);
        assert_debug_snapshot!(summary, @r"
        ForecastSummary {
            tomorrow: Some(
                AqiScore(
                    150,
                ),
            ),
            avg_24h: Some(
                AqiScore(
                    50,
                ),
            ),
        }
        ");
    }

    #[test]
    fn test_forecast_points() {
        let data = series(30, |i| if i == 13 { 200.4 } else { 6.0 });
        let points = forecast_points(&data, 24);
        assert_eq!(points.len(), 24);
        assert_eq!(points[0].hour_label, "0:00");
        assert_eq!(points[13].hour_label, "13:00");
        assert_eq!(points[13].aqi.value(), 250);
        assert_eq!(points[13].category, AqiCategory::VeryUnhealthy);
        assert_eq!(points[0].category, AqiCategory::Good);
    }
}
