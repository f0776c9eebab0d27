use crate::error::{PlannerError, Result};
use crate::types::BudgetAllocation;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Percentages used to split a trip budget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AllocationPolicy {
    /// Flights never take more than this share of the budget
    pub max_flight_fraction: Decimal,
    /// Above this flight share the reduced split applies
    pub high_flight_threshold: Decimal,
    pub accommodation_fraction: Decimal,
    pub activity_fraction: Decimal,
    pub reduced_accommodation_fraction: Decimal,
    pub reduced_activity_fraction: Decimal,
}

impl Default for AllocationPolicy {
    fn default() -> Self {
        Self {
            max_flight_fraction: Decimal::new(40, 2),
            high_flight_threshold: Decimal::new(30, 2),
            accommodation_fraction: Decimal::new(35, 2),
            activity_fraction: Decimal::new(25, 2),
            reduced_accommodation_fraction: Decimal::new(25, 2),
            reduced_activity_fraction: Decimal::new(20, 2),
        }
    }
}

impl AllocationPolicy {
    /// Check that every fraction lies in `[0, 1]` and that neither split,
    /// combined with the full flight cap, hands out more than the budget.
    pub fn validate(&self) -> Result<()> {
        let fractions = [
            ("max_flight_fraction", self.max_flight_fraction),
            ("high_flight_threshold", self.high_flight_threshold),
            ("accommodation_fraction", self.accommodation_fraction),
            ("activity_fraction", self.activity_fraction),
            ("reduced_accommodation_fraction", self.reduced_accommodation_fraction),
            ("reduced_activity_fraction", self.reduced_activity_fraction),
        ];
        for (name, value) in fractions {
            if value < Decimal::ZERO || value > Decimal::ONE {
                return Err(PlannerError::Config(format!(
                    "allocation.{} must be between 0 and 1, got {}",
                    name, value
                )));
            }
        }

        let splits = [
            ("base", self.accommodation_fraction, self.activity_fraction),
            (
                "reduced",
                self.reduced_accommodation_fraction,
                self.reduced_activity_fraction,
            ),
        ];
        for (name, accommodation, activity) in splits {
            let committed = self.max_flight_fraction + accommodation + activity;
            if committed > Decimal::ONE {
                return Err(PlannerError::Config(format!(
                    "allocation {} split commits {} of the budget alongside the flight cap",
                    name, committed
                )));
            }
        }
        Ok(())
    }

    /// Split `total_budget` given an estimated flight cost.
    ///
    /// Callers must reject non-positive budgets beforehand; such input yields
    /// an all-zero allocation rather than an error. `days_count == 0` yields a
    /// zero daily budget.
    pub fn allocate(
        &self,
        total_budget: Decimal,
        days_count: u32,
        flight_cost: Decimal,
    ) -> BudgetAllocation {
        if total_budget <= Decimal::ZERO {
            return BudgetAllocation::default();
        }

        // A quotient too large for Decimal is far above any cap.
        let flight_fraction = flight_cost
            .max(Decimal::ZERO)
            .checked_div(total_budget)
            .map_or(self.max_flight_fraction, |fraction| {
                fraction.min(self.max_flight_fraction)
            });

        let (accommodation_fraction, activity_fraction) =
            if flight_fraction > self.high_flight_threshold {
                (
                    self.reduced_accommodation_fraction,
                    self.reduced_activity_fraction,
                )
            } else {
                (self.accommodation_fraction, self.activity_fraction)
            };

        let flight_budget = total_budget * flight_fraction;
        let accommodation_budget = total_budget * accommodation_fraction;
        let activity_budget = total_budget * activity_fraction;
        let buffer_budget =
            (total_budget - flight_budget - accommodation_budget - activity_budget)
                .max(Decimal::ZERO);

        let daily_budget = if days_count == 0 {
            Decimal::ZERO
        } else {
            (total_budget - flight_budget) / Decimal::from(days_count)
        };

        BudgetAllocation {
            total_budget,
            flight_fraction,
            accommodation_fraction,
            activity_fraction,
            flight_budget,
            accommodation_budget,
            activity_budget,
            buffer_budget,
            daily_budget,
        }
    }
}
