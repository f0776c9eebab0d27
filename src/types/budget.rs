use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// How a trip's total budget is split across spending categories.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct BudgetAllocation {
    pub total_budget: Decimal,
    /// Share of the total reserved for flights, capped by policy
    pub flight_fraction: Decimal,
    pub accommodation_fraction: Decimal,
    pub activity_fraction: Decimal,
    pub flight_budget: Decimal,
    pub accommodation_budget: Decimal,
    pub activity_budget: Decimal,
    /// Unallocated remainder kept for miscellaneous spend
    pub buffer_budget: Decimal,
    /// Non-flight spend available per trip day
    pub daily_budget: Decimal,
}

impl BudgetAllocation {
    /// Sum of the three named categories, excluding the buffer.
    pub fn allocated_total(&self) -> Decimal {
        self.flight_budget + self.accommodation_budget + self.activity_budget
    }
}
