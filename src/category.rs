//! AQI category bands and health alerts
//!
//! Bands follow the US EPA AQI reporting scale. Each band owns a fixed
//! label, CSS class and display color, stored in a lookup table indexed by
//! [`AqiCategory`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::score::AqiScore;

/// AQI category, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AqiCategory {
    /// 0..=50
    Good,
    /// 51..=100
    Moderate,
    /// 101..=150
    UnhealthySensitive,
    /// 151..=200
    Unhealthy,
    /// 201..=300
    VeryUnhealthy,
    /// 301..=500
    Hazardous,
}

/// Display attributes of one category band
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryInfo {
    /// Inclusive upper AQI bound of the band
    pub upper: u16,
    /// Human readable label
    pub label: &'static str,
    /// CSS class name used by the dashboard
    pub class: &'static str,
    /// `#rrggbb` color
    pub color: &'static str,
}

static BANDS: [CategoryInfo; 6] = [
    CategoryInfo {
        upper: 50,
        label: "Good",
        class: "good",
        color: "#00e400",
    },
    CategoryInfo {
        upper: 100,
        label: "Moderate",
        class: "moderate",
        color: "#ffff00",
    },
    CategoryInfo {
        upper: 150,
        label: "Unhealthy for Sensitive Groups",
        class: "unhealthy-sensitive",
        color: "#ff7e00",
    },
    CategoryInfo {
        upper: 200,
        label: "Unhealthy",
        class: "unhealthy",
        color: "#ff0000",
    },
    CategoryInfo {
        upper: 300,
        label: "Very Unhealthy",
        class: "very-unhealthy",
        color: "#8f3f97",
    },
    CategoryInfo {
        upper: 500,
        label: "Hazardous",
        class: "hazardous",
        color: "#7e0023",
    },
];

impl AqiCategory {
    /// All categories in severity order
    pub const ALL: [Self; 6] = [
        Self::Good,
        Self::Moderate,
        Self::UnhealthySensitive,
        Self::Unhealthy,
        Self::VeryUnhealthy,
        Self::Hazardous,
    ];

    /// Classify a raw integer AQI.
    ///
    /// Negative values classify as `Good` and values above 500 as
    /// `Hazardous`, matching what a clamped [`AqiScore`] would give.
    #[must_use]
    pub fn from_value(aqi: i64) -> Self {
        Self::ALL
            .into_iter()
            .find(|category| aqi <= i64::from(category.info().upper))
            .unwrap_or(Self::Hazardous)
    }

    /// Lookup table entry for this category
    #[must_use]
    pub fn info(self) -> &'static CategoryInfo {
        &BANDS[self as usize]
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        self.info().label
    }

    #[must_use]
    pub fn css_class(self) -> &'static str {
        self.info().class
    }

    #[must_use]
    pub fn color(self) -> &'static str {
        self.info().color
    }

    /// Band color with a `99` alpha suffix, as used for forecast bars
    #[must_use]
    pub fn translucent_color(self) -> String {
        format!("{}99", self.color())
    }
}

impl fmt::Display for AqiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Map an AQI score to its category band
#[must_use]
pub fn classify(aqi: AqiScore) -> AqiCategory {
    AqiCategory::from_value(i64::from(aqi.value()))
}

/// Health alert raised when the AQI passes the alert threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertLevel {
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
}

impl AlertLevel {
    /// Alert for `aqi`, or `None` when it does not exceed `threshold`
    #[must_use]
    pub fn for_score(aqi: AqiScore, threshold: u16) -> Option<Self> {
        if !aqi.exceeds(threshold) {
            return None;
        }
        let level = match aqi.value() {
            301.. => Self::Hazardous,
            201..=300 => Self::VeryUnhealthy,
            _ => Self::Unhealthy,
        };
        Some(level)
    }

    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Hazardous => "☠️",
            Self::VeryUnhealthy | Self::Unhealthy => "⚠️",
        }
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Hazardous => {
                "HAZARDOUS AIR QUALITY! Stay indoors and avoid all outdoor activities."
            }
            Self::VeryUnhealthy => "Very Unhealthy Air! Everyone should avoid outdoor activities.",
            Self::Unhealthy => {
                "Unhealthy Air Quality! Sensitive groups should limit outdoor exposure."
            }
        }
    }
}
