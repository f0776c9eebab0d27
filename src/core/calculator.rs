use super::{distance::great_circle_distance_km, itinerary::synthesize_itinerary};
use crate::{
    config::PlannerConfig,
    types::{trip::days_between_inclusive, Coordinates, Currency, TripPlan, TripRequest},
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

/// Pure budget and itinerary calculator.
///
/// Holds only immutable policy, so one instance can be shared freely across
/// threads and requests.
#[derive(Debug, Clone, Default)]
pub struct TripCalculator {
    config: PlannerConfig,
}

impl TripCalculator {
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    pub fn plan_trip(&self, request: &TripRequest) -> TripPlan {
        self.plan(
            request.total_budget,
            request.currency,
            request.start_date,
            request.end_date,
            request.departure_coordinates,
            request.destination_coordinates,
            &request.destination_label,
        )
    }

    /// Distance, fare estimate, allocation and itinerary in one step.
    ///
    /// Preconditions (`total_budget > 0`, `end_date > start_date`) are the
    /// caller's to check; see [`TripRequest::builder`].
    #[allow(clippy::too_many_arguments)]
    pub fn plan(
        &self,
        total_budget: Decimal,
        currency: Currency,
        start_date: NaiveDate,
        end_date: NaiveDate,
        departure: Option<Coordinates>,
        destination: Option<Coordinates>,
        destination_label: &str,
    ) -> TripPlan {
        let days_count = days_between_inclusive(start_date, end_date);
        let distance_km = great_circle_distance_km(departure, destination);
        let flight_cost_estimate = self.config.flight_rates.estimate(distance_km);
        let allocation =
            self.config
                .allocation
                .allocate(total_budget, days_count, flight_cost_estimate);
        let days = synthesize_itinerary(
            start_date,
            days_count,
            allocation.daily_budget,
            destination_label,
        );

        debug!(
            distance_km,
            %flight_cost_estimate,
            daily_budget = %allocation.daily_budget,
            days_count,
            "computed trip plan"
        );

        TripPlan {
            currency,
            distance_km,
            flight_cost_estimate,
            allocation,
            days,
        }
    }
}
