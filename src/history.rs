//! Rolling window of past AQI samples for trend charts

use std::collections::VecDeque;

use chrono::DateTime;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::{DEFAULT_RETENTION_SECS, validate_retention};
use crate::error::Result;
use crate::score::AqiScore;

/// One recorded AQI value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoricalSample {
    /// Seconds since epoch
    pub timestamp: i64,
    pub aqi: AqiScore,
}

/// Trend chart point with a short date label such as `"Oct 19"`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub label: String,
    pub aqi: AqiScore,
}

/// Chronological, append-only buffer of AQI samples.
///
/// Samples older than the retention period are dropped from the front.
/// Not synchronized: callers serialize acquisition cycles, or wrap the store
/// in a mutex when cycles can overlap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryStore {
    samples: VecDeque<HistoricalSample>,
    retention_secs: i64,
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self {
            samples: VecDeque::new(),
            retention_secs: DEFAULT_RETENTION_SECS,
        }
    }
}

impl HistoryStore {
    /// Create an empty store keeping samples for `retention_secs` seconds.
    ///
    /// # Errors
    ///
    /// * `AqiError::InvalidConfig` - `retention_secs` is not positive
    pub fn new(retention_secs: i64) -> Result<Self> {
        validate_retention(retention_secs)?;
        Ok(Self {
            samples: VecDeque::new(),
            retention_secs,
        })
    }

    /// Retention period in seconds
    #[must_use]
    pub fn retention_secs(&self) -> i64 {
        self.retention_secs
    }

    /// Append a sample, then prune relative to its timestamp.
    ///
    /// A timestamp older than the newest stored sample is raised to that
    /// sample's timestamp so the buffer stays chronological.
    ///
    /// Returns how many samples were pruned.
    pub fn record(&mut self, timestamp: i64, aqi: AqiScore) -> usize {
        let timestamp = match self.samples.back() {
            Some(latest) if timestamp < latest.timestamp => {
                warn!(
                    latest = latest.timestamp,
                    given = timestamp,
                    "history sample predates latest, using latest timestamp"
                );
                latest.timestamp
            }
            _ => timestamp,
        };

        self.samples.push_back(HistoricalSample { timestamp, aqi });
        self.prune(timestamp)
    }

    /// Drop every sample with `timestamp <= now - retention`.
    ///
    /// Returns how many samples were removed.
    pub fn prune(&mut self, now: i64) -> usize {
        let cutoff = now.saturating_sub(self.retention_secs);
        let before = self.samples.len();
        while self
            .samples
            .front()
            .is_some_and(|sample| sample.timestamp <= cutoff)
        {
            self.samples.pop_front();
        }
        let removed = before - self.samples.len();
        if removed > 0 {
            debug!(removed, cutoff, "pruned history samples");
        }
        removed
    }

    /// Current contents, oldest first
    #[must_use]
    pub fn snapshot(&self) -> Vec<HistoricalSample> {
        self.samples.iter().copied().collect()
    }

    /// Iterate samples oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = &HistoricalSample> {
        self.samples.iter()
    }

    /// Most recent sample
    #[must_use]
    pub fn latest(&self) -> Option<&HistoricalSample> {
        self.samples.back()
    }

    /// Number of samples held
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Chart points labelled with the UTC date, oldest first
    #[must_use]
    pub fn trend_points(&self) -> Vec<TrendPoint> {
        self.samples
            .iter()
            .map(|sample| TrendPoint {
                label: date_label(sample.timestamp),
                aqi: sample.aqi,
            })
            .collect()
    }
}

fn date_label(timestamp: i64) -> String {
    DateTime::from_timestamp(timestamp, 0)
        .map(|dt| dt.format("%b %-d").to_string())
        .unwrap_or_default()
}
