pub mod allocation;
pub mod calculator;
pub mod distance;
pub mod flight;
pub mod itinerary;

pub use allocation::AllocationPolicy;
pub use calculator::TripCalculator;
pub use distance::{great_circle_distance_km, haversine_km, EARTH_RADIUS_KM};
pub use flight::{FlightRateTable, RateTier};
pub use itinerary::synthesize_itinerary;
