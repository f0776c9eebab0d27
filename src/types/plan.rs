use super::{
    budget::BudgetAllocation,
    itinerary::DaySchedule,
    places::{GeocodedLocation, HotelSuggestion, PointOfInterest},
    trip::{Currency, TripRequest},
};
use rust_decimal::{Decimal, RoundingStrategy};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Output of the calculator: budget split and day-by-day itinerary, always produced together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TripPlan {
    pub currency: Currency,
    /// Great-circle distance between departure and destination, 0 when unknown
    pub distance_km: f64,
    pub flight_cost_estimate: Decimal,
    pub allocation: BudgetAllocation,
    pub days: Vec<DaySchedule>,
}

impl TripPlan {
    pub fn days_count(&self) -> usize {
        self.days.len()
    }

    /// Human-readable rendering of the budget and itinerary
    pub fn summary(&self) -> String {
        let mut lines = Vec::new();
        let money = |amount: Decimal| format_money(self.currency, amount);
        let allocation = &self.allocation;

        lines.push("=== Budget ===".to_string());
        lines.push(format!("Total: {}", money(allocation.total_budget)));
        if self.distance_km > 0.0 {
            lines.push(format!(
                "Flight distance: {:.0} km (estimated fare {})",
                self.distance_km,
                money(self.flight_cost_estimate)
            ));
        }
        lines.push(format!(
            "Flights: {} ({}%)",
            money(allocation.flight_budget),
            percent(allocation.flight_fraction)
        ));
        lines.push(format!(
            "Accommodation: {} ({}%)",
            money(allocation.accommodation_budget),
            percent(allocation.accommodation_fraction)
        ));
        lines.push(format!(
            "Activities: {} ({}%)",
            money(allocation.activity_budget),
            percent(allocation.activity_fraction)
        ));
        lines.push(format!("Buffer: {}", money(allocation.buffer_budget)));
        lines.push(format!("Per day: {}", money(allocation.daily_budget)));

        lines.push(String::new());
        lines.push("=== Itinerary ===".to_string());
        for day in &self.days {
            lines.push(format!(
                "{} ({}) est. {}",
                day.title,
                day.date,
                money(day.estimated_cost)
            ));
            for activity in &day.activities {
                lines.push(format!(
                    "  {} {} @ {} ({} min) {}",
                    activity.time.format("%H:%M"),
                    activity.label,
                    activity.location,
                    activity.duration_minutes,
                    money(activity.cost)
                ));
            }
        }

        lines.join("\n")
    }
}

/// A plan enriched with resolved locations, hotels and nearby attractions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PlannedTrip {
    /// The request with any geocoded coordinates filled in
    pub request: TripRequest,
    pub departure: Option<GeocodedLocation>,
    pub destination: Option<GeocodedLocation>,
    pub plan: TripPlan,
    pub hotels: Vec<HotelSuggestion>,
    pub points_of_interest: Vec<PointOfInterest>,
}

impl PlannedTrip {
    pub fn summary(&self) -> String {
        let mut lines = Vec::new();

        let from = self
            .departure
            .as_ref()
            .and_then(|location| location.city.clone())
            .or_else(|| self.request.departure_label.clone())
            .unwrap_or_else(|| "Unknown location".to_string());
        lines.push(format!(
            "{}: {} -> {}",
            self.request.title, from, self.request.destination_label
        ));
        lines.push(format!(
            "{} to {} ({} days)",
            self.request.start_date,
            self.request.end_date,
            self.plan.days_count()
        ));
        if !self.request.interests.is_empty() {
            lines.push(format!("Interests: {}", self.request.interests.join(", ")));
        }
        lines.push(String::new());
        lines.push(self.plan.summary());

        if !self.hotels.is_empty() {
            lines.push(String::new());
            lines.push("=== Hotels ===".to_string());
            for hotel in &self.hotels {
                let rating = hotel
                    .rating
                    .map(|rating| format!(" [{:.1}]", rating))
                    .unwrap_or_default();
                let price = hotel
                    .price_per_night
                    .map(|price| format!(" {}/night", format_money(self.plan.currency, price)))
                    .unwrap_or_default();
                lines.push(format!("- {}{}{} ({})", hotel.name, rating, price, hotel.address));
            }
        }

        if !self.points_of_interest.is_empty() {
            lines.push(String::new());
            lines.push("=== Points of interest ===".to_string());
            for poi in &self.points_of_interest {
                lines.push(format!("- {} [{:?}] {}", poi.name, poi.category, poi.address));
            }
        }

        lines.join("\n")
    }
}

/// Round to cents, half away from zero, for display and storage.
pub fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

fn format_money(currency: Currency, amount: Decimal) -> String {
    format!("{}{:.2}", currency.symbol(), round_currency(amount))
}

fn percent(fraction: Decimal) -> Decimal {
    round_currency(fraction * Decimal::ONE_HUNDRED).normalize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_currency_half_up() {
        assert_eq!(round_currency(Decimal::new(2675, 3)), Decimal::new(268, 2));
        assert_eq!(round_currency(Decimal::new(-2675, 3)), Decimal::new(-268, 2));
        assert_eq!(round_currency(Decimal::new(2674, 3)), Decimal::new(267, 2));
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(Currency::Ngn, Decimal::new(3323333, 4)), "₦332.33");
        assert_eq!(format_money(Currency::Usd, Decimal::new(5, 0)), "$5.00");
    }
}
