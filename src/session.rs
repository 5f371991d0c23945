//! Dashboard session state
//!
//! [`Dashboard`] owns everything that persists between acquisition cycles:
//! the selected city, configuration and the AQI history. The host fetches
//! data asynchronously and hands it back through [`Dashboard::complete_cycle`].
//!
//! Each cycle is identified by a [`CycleTicket`]. Starting a new cycle or
//! switching city supersedes every outstanding ticket. A ticket is retired
//! once it completes, and completing a superseded or retired ticket records
//! nothing.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::category::{AlertLevel, AqiCategory};
use crate::city::City;
use crate::config::EngineConfig;
use crate::converter::convert_to_aqi;
use crate::error::{AqiError, Result};
use crate::forecast::{
    ForecastPoint, ForecastSummary, forecast_points, summarize_forecast_with_horizon,
};
use crate::history::{HistoricalSample, HistoryStore, TrendPoint};
use crate::reading::{AirPollutionResponse, ForecastSeries, PollutantBreakdown};
use crate::score::AqiScore;

/// Handle for one in-flight acquisition cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleTicket {
    pub city: City,
    generation: u64,
}

/// Data fetched by the host for one cycle
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AcquiredData {
    /// Current air pollution response
    pub air: AirPollutionResponse,
    /// Forecast readings, soonest first
    pub forecast: ForecastSeries,
}

/// Current air quality for the selected city
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub aqi: AqiScore,
    pub category: AqiCategory,
    /// Set when the AQI is above the configured alert threshold
    pub alert: Option<AlertLevel>,
}

/// Everything the presentation layer renders after a cycle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardUpdate {
    pub city: City,
    pub current: CurrentConditions,
    pub pollutants: PollutantBreakdown,
    pub forecast: ForecastSummary,
    pub forecast_points: Vec<ForecastPoint>,
    /// Pollutant mix of the first forecast sample, for the doughnut chart
    pub forecast_pollutants: Option<PollutantBreakdown>,
    pub trend: Vec<TrendPoint>,
}

/// Session state for one dashboard: selected city, configuration and history
#[derive(Debug, Clone)]
pub struct Dashboard {
    config: EngineConfig,
    city: City,
    generation: u64,
    history: HistoryStore,
}

impl Dashboard {
    /// Create a session for the default city.
    ///
    /// # Errors
    ///
    /// * `AqiError::InvalidConfig` - the configuration does not validate
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        let history = HistoryStore::new(config.retention_secs)?;
        Ok(Self {
            config,
            city: City::default(),
            generation: 0,
            history,
        })
    }

    /// Active configuration
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Selected city
    #[must_use]
    pub fn city(&self) -> City {
        self.city
    }

    /// AQI history across completed cycles
    #[must_use]
    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    /// Switch city. Any cycle started before the switch becomes stale.
    pub fn select_city(&mut self, city: City) {
        debug!(from = %self.city, to = %city, "city selected");
        self.city = city;
        self.generation += 1;
    }

    /// Start a cycle for the current city, superseding earlier ones
    pub fn begin_cycle(&mut self) -> CycleTicket {
        self.generation += 1;
        CycleTicket {
            city: self.city,
            generation: self.generation,
        }
    }

    /// Whether `ticket` still belongs to the newest cycle
    #[must_use]
    pub fn is_current(&self, ticket: &CycleTicket) -> bool {
        ticket.generation == self.generation && ticket.city == self.city
    }

    /// Finish a cycle: derive every display value, then record one history
    /// sample at `now` (seconds since epoch) and retire the ticket.
    ///
    /// Nothing is recorded unless the whole update could be built.
    ///
    /// # Errors
    ///
    /// * `AqiError::StaleCycle` - the ticket was superseded or already completed
    /// * `AqiError::EmptyResponse` - the air pollution response has no reading
    pub fn complete_cycle(
        &mut self,
        ticket: CycleTicket,
        data: &AcquiredData,
        now: i64,
    ) -> Result<DashboardUpdate> {
        if !self.is_current(&ticket) {
            warn!(
                city = %ticket.city,
                given = ticket.generation,
                current = self.generation,
                "discarding superseded acquisition cycle"
            );
            return Err(AqiError::StaleCycle {
                current: self.generation,
                given: ticket.generation,
            });
        }

        let reading = data.air.current()?;
        let aqi = convert_to_aqi(reading);
        let current = CurrentConditions {
            aqi,
            category: aqi.category(),
            alert: AlertLevel::for_score(aqi, self.config.alert_threshold),
        };

        let horizon = self.config.forecast_horizon;
        let forecast = summarize_forecast_with_horizon(&data.forecast, horizon);
        let points = forecast_points(&data.forecast, horizon);
        let forecast_pollutants = data.forecast.first().map(|r| r.breakdown());

        self.history.record(now, aqi);
        self.generation += 1;

        info!(
            city = %ticket.city,
            aqi = aqi.value(),
            category = %current.category,
            samples = self.history.len(),
            "acquisition cycle applied"
        );

        Ok(DashboardUpdate {
            city: ticket.city,
            current,
            pollutants: reading.breakdown(),
            forecast,
            forecast_points: points,
            forecast_pollutants,
            trend: self.history.trend_points(),
        })
    }

    /// History contents, oldest first
    #[must_use]
    pub fn snapshot(&self) -> Vec<HistoricalSample> {
        self.history.snapshot()
    }

    /// Prune history relative to `now` without recording anything
    pub fn prune(&mut self, now: i64) -> usize {
        self.history.prune(now)
    }
}
