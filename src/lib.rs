//! trip-planner: budget allocation and day-by-day itineraries for trips
//!
//! The [`TripCalculator`] turns a [`TripRequest`] into a [`TripPlan`]: a
//! budget split across flights, accommodation, activities and a buffer, plus
//! a fixed-template schedule for every day of the trip. It is pure and
//! synchronous. [`TripPlanner`] wraps it with optional geocoding and places
//! lookups that fill in missing coordinates, hotels and attractions.
//!
//! # Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use rust_decimal::Decimal;
//! use trip_planner::{Coordinates, Currency, TripCalculator, TripRequest};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let request = TripRequest::builder(
//!     "Abuja",
//!     NaiveDate::from_ymd_opt(2026, 11, 2).unwrap(),
//!     NaiveDate::from_ymd_opt(2026, 11, 5).unwrap(),
//!     Decimal::from(1200),
//! )
//! .currency(Currency::Ngn)
//! .departure_coordinates(Some(Coordinates::new(6.5244, 3.3792)?))
//! .destination_coordinates(Some(Coordinates::new(9.0765, 7.3986)?))
//! .build()?;
//!
//! let plan = TripCalculator::default().plan_trip(&request);
//! assert_eq!(plan.days.len(), 4);
//! println!("{}", plan.summary());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod services;
pub mod types;

pub use config::{PlannerConfig, ServiceConfig};
pub use crate::core::{
    great_circle_distance_km, synthesize_itinerary, AllocationPolicy, FlightRateTable, RateTier,
    TripCalculator,
};
pub use error::{PlannerError, Result};
pub use services::{GoogleMapsClient, PlacesProvider, TripPlanner};
pub use types::{
    ActivityEntry, BudgetAllocation, Coordinates, Currency, DaySchedule, GeocodedLocation,
    HotelSuggestion, PlaceCandidate, PlaceKind, PlannedTrip, PoiCategory, PointOfInterest,
    TripPlan, TripRequest,
};

#[cfg(feature = "cli")]
pub mod cli;
