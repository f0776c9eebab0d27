//! Enrichment services around the pure calculator

pub mod google_maps;
pub mod hotels;
pub mod places;
pub mod planner;

pub use google_maps::GoogleMapsClient;
pub use places::PlacesProvider;
pub use planner::TripPlanner;
