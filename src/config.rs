use crate::{
    core::{AllocationPolicy, FlightRateTable},
    error::{PlannerError, Result},
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_MAPS_BASE_URL: &str = "https://maps.googleapis.com/maps/api";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Numeric policy for the calculator: fare tiers and budget percentages.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    pub flight_rates: FlightRateTable,
    pub allocation: AllocationPolicy,
}

impl PlannerConfig {
    /// Load a policy from JSON; omitted sections keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self> {
        let mut deserializer = serde_json::Deserializer::from_str(raw);
        let config: Self = serde_path_to_error::deserialize(&mut deserializer).map_err(|err| {
            PlannerError::Config(format!(
                "invalid planner config at {}: {}",
                err.path(),
                err.inner()
            ))
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.flight_rates.validate()?;
        self.allocation.validate()
    }

    pub fn with_flight_rates(mut self, flight_rates: FlightRateTable) -> Self {
        self.flight_rates = flight_rates;
        self
    }

    pub fn with_allocation(mut self, allocation: AllocationPolicy) -> Self {
        self.allocation = allocation;
        self
    }
}

/// Settings for the external geocoding/places service.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub maps_api_key: Option<String>,
    pub maps_base_url: String,
    pub timeout: Duration,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            maps_api_key: None,
            maps_base_url: DEFAULT_MAPS_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ServiceConfig {
    /// Read `GOOGLE_MAPS_API_KEY`, `GOOGLE_MAPS_BASE_URL` and
    /// `TRIPPLAN_HTTP_TIMEOUT_SECS`, loading a `.env` file first if present.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let mut config = Self {
            maps_api_key: std::env::var("GOOGLE_MAPS_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty()),
            ..Self::default()
        };

        if let Ok(base_url) = std::env::var("GOOGLE_MAPS_BASE_URL") {
            config.maps_base_url = base_url;
        }

        if let Ok(raw) = std::env::var("TRIPPLAN_HTTP_TIMEOUT_SECS") {
            let secs = raw.trim().parse::<u64>().map_err(|_| {
                PlannerError::Config(format!(
                    "TRIPPLAN_HTTP_TIMEOUT_SECS must be a whole number of seconds, got `{}`",
                    raw
                ))
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.maps_api_key = Some(api_key.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.maps_base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn has_maps_access(&self) -> bool {
        self.maps_api_key.is_some()
    }
}
