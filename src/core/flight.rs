use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};

/// Per-kilometer fare applied from `min_distance_km` up to the next tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateTier {
    pub min_distance_km: f64,
    pub rate_per_km: Decimal,
}

/// Distance-banded flight fare model.
///
/// Tiers are kept sorted by `min_distance_km`; a distance falls in the last
/// tier whose lower bound it reaches, so upper bounds are exclusive and the
/// final tier is open-ended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightRateTable {
    tiers: Vec<RateTier>,
}

impl Default for FlightRateTable {
    fn default() -> Self {
        Self::new(vec![
            RateTier {
                min_distance_km: 0.0,
                rate_per_km: Decimal::new(20, 2),
            },
            RateTier {
                min_distance_km: 500.0,
                rate_per_km: Decimal::new(15, 2),
            },
            RateTier {
                min_distance_km: 2000.0,
                rate_per_km: Decimal::new(12, 2),
            },
            RateTier {
                min_distance_km: 8000.0,
                rate_per_km: Decimal::new(10, 2),
            },
        ])
    }
}

impl FlightRateTable {
    pub fn new(mut tiers: Vec<RateTier>) -> Self {
        tiers.sort_by(|a, b| a.min_distance_km.total_cmp(&b.min_distance_km));
        Self { tiers }
    }

    pub fn tiers(&self) -> &[RateTier] {
        &self.tiers
    }

    /// Reject tiers with a negative rate or a lower bound that is not a
    /// finite, non-negative distance.
    pub fn validate(&self) -> Result<()> {
        for (index, tier) in self.tiers.iter().enumerate() {
            if !tier.min_distance_km.is_finite() || tier.min_distance_km < 0.0 {
                return Err(PlannerError::Config(format!(
                    "flight_rates.tiers[{}].min_distance_km must be a non-negative distance, got {}",
                    index, tier.min_distance_km
                )));
            }
            if tier.rate_per_km.is_sign_negative() {
                return Err(PlannerError::Config(format!(
                    "flight_rates.tiers[{}].rate_per_km must not be negative, got {}",
                    index, tier.rate_per_km
                )));
            }
        }
        Ok(())
    }

    /// Rate for a distance, or zero if the table has no tier covering it.
    pub fn rate_for(&self, distance_km: f64) -> Decimal {
        // tables loaded from config may arrive unsorted
        self.tiers
            .iter()
            .filter(|tier| distance_km >= tier.min_distance_km)
            .max_by(|a, b| a.min_distance_km.total_cmp(&b.min_distance_km))
            .map(|tier| tier.rate_per_km)
            .unwrap_or(Decimal::ZERO)
    }

    /// Estimated fare, rounded to cents half away from zero.
    ///
    /// A zero (unknown) distance yields a zero fare.
    pub fn estimate(&self, distance_km: f64) -> Decimal {
        if !(distance_km > 0.0) {
            return Decimal::ZERO;
        }
        let distance = Decimal::from_f64(distance_km).unwrap_or(Decimal::ZERO);
        distance
            .checked_mul(self.rate_for(distance_km))
            .unwrap_or(Decimal::MAX)
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries() {
        let table = FlightRateTable::default();
        assert_eq!(table.rate_for(10.0), Decimal::new(20, 2));
        assert_eq!(table.rate_for(499.99), Decimal::new(20, 2));
        assert_eq!(table.rate_for(500.0), Decimal::new(15, 2));
        assert_eq!(table.rate_for(1999.0), Decimal::new(15, 2));
        assert_eq!(table.rate_for(2000.0), Decimal::new(12, 2));
        assert_eq!(table.rate_for(7999.9), Decimal::new(12, 2));
        assert_eq!(table.rate_for(8000.0), Decimal::new(10, 2));
        assert_eq!(table.rate_for(20000.0), Decimal::new(10, 2));
    }

    #[test]
    fn test_zero_distance_is_free() {
        let table = FlightRateTable::default();
        assert_eq!(table.estimate(0.0), Decimal::ZERO);
        assert_eq!(table.estimate(-5.0), Decimal::ZERO);
        assert_eq!(table.estimate(f64::NAN), Decimal::ZERO);
    }

    #[test]
    fn test_estimate_rounds_half_up() {
        let table = FlightRateTable::default();
        // 10.125 km * 0.20 = 2.025
        assert_eq!(table.estimate(10.125), Decimal::new(203, 2));
        // 513.5 km * 0.15 = 77.025
        assert_eq!(table.estimate(513.5), Decimal::new(7703, 2));
        assert_eq!(table.estimate(12.3125), Decimal::new(246, 2));
        assert_eq!(table.estimate(12000.0), Decimal::new(1200, 0));
    }

    #[test]
    fn test_monotonic_within_tier() {
        let table = FlightRateTable::default();
        let tiers = [(10.0, 490.0), (600.0, 1900.0), (2100.0, 7900.0), (8100.0, 15000.0)];
        for (near, far) in tiers {
            assert!(table.estimate(near) < table.estimate(far));
        }
    }

    #[test]
    fn test_custom_table_is_sorted() {
        let table = FlightRateTable::new(vec![
            RateTier {
                min_distance_km: 1000.0,
                rate_per_km: Decimal::new(5, 2),
            },
            RateTier {
                min_distance_km: 0.0,
                rate_per_km: Decimal::ONE,
            },
        ]);
        assert_eq!(table.tiers()[0].min_distance_km, 0.0);
        assert_eq!(table.estimate(100.0), Decimal::new(100, 0));
        assert_eq!(table.estimate(2000.0), Decimal::new(100, 0));
    }

    #[test]
    fn test_oversized_fare_saturates() {
        let table = FlightRateTable::new(vec![RateTier {
            min_distance_km: 0.0,
            rate_per_km: Decimal::MAX,
        }]);
        assert_eq!(table.estimate(20000.0), Decimal::MAX);
    }

    #[test]
    fn test_validate_rejects_bad_tiers() {
        assert!(FlightRateTable::default().validate().is_ok());
        let table = FlightRateTable::new(vec![RateTier {
            min_distance_km: f64::NAN,
            rate_per_km: Decimal::ONE,
        }]);
        assert_eq!(table.validate().unwrap_err().error_code(), "CONFIG_ERROR");
    }
}
