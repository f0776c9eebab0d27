pub mod budget;
pub mod itinerary;
pub mod places;
pub mod plan;
pub mod trip;

pub use budget::BudgetAllocation;
pub use itinerary::{ActivityEntry, DaySchedule};
pub use places::{
    GeocodedLocation, HotelSuggestion, PlaceCandidate, PlaceKind, PoiCategory, PointOfInterest,
};
pub use plan::{round_currency, PlannedTrip, TripPlan};
pub use trip::{parse_interests, Coordinates, Currency, TripRequest, TripRequestBuilder};
