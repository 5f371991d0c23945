//! Cities the dashboard can show

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AqiError;

/// Supported cities, keyed by their lowercase name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum City {
    Delhi,
    Mumbai,
    Bangalore,
    Kolkata,
    Chennai,
    #[default]
    Lucknow,
}

/// Latitude and longitude in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl City {
    /// Every supported city
    pub const ALL: [Self; 6] = [
        Self::Delhi,
        Self::Mumbai,
        Self::Bangalore,
        Self::Kolkata,
        Self::Chennai,
        Self::Lucknow,
    ];

    /// Lowercase key used in settings and selectors
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Delhi => "delhi",
            Self::Mumbai => "mumbai",
            Self::Bangalore => "bangalore",
            Self::Kolkata => "kolkata",
            Self::Chennai => "chennai",
            Self::Lucknow => "lucknow",
        }
    }

    /// Display name
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Delhi => "Delhi",
            Self::Mumbai => "Mumbai",
            Self::Bangalore => "Bangalore",
            Self::Kolkata => "Kolkata",
            Self::Chennai => "Chennai",
            Self::Lucknow => "Lucknow",
        }
    }

    /// City center used for API lookups
    #[must_use]
    pub fn coordinates(self) -> Coordinates {
        let (lat, lon) = match self {
            Self::Delhi => (28.6139, 77.2090),
            Self::Mumbai => (19.0760, 72.8777),
            Self::Bangalore => (12.9716, 77.5946),
            Self::Kolkata => (22.5726, 88.3639),
            Self::Chennai => (13.0827, 80.2707),
            Self::Lucknow => (26.85, 80.95),
        };
        Coordinates { lat, lon }
    }
}

impl FromStr for City {
    type Err = AqiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|city| city.key() == key)
            .ok_or(AqiError::UnknownCity(key))
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("delhi".parse::<City>(), Ok(City::Delhi));
        assert_eq!(" Mumbai ".parse::<City>(), Ok(City::Mumbai));
        assert_eq!(
            "paris".parse::<City>(),
            Err(AqiError::UnknownCity("paris".into()))
        );
    }

    #[test]
    fn test_keys_round_trip() {
        for city in City::ALL {
            assert_eq!(city.key().parse::<City>(), Ok(city));
            let json = serde_json::to_string(&city).unwrap();
            assert_eq!(json, format!("\"{}\"", city.key()));
        }
    }

    #[test]
    fn test_default_city() {
        let city = City::default();
        assert_eq!(city, City::Lucknow);
        assert_eq!(city.to_string(), "Lucknow");
        assert_eq!(city.coordinates(), Coordinates { lat: 26.85, lon: 80.95 });
    }
}
