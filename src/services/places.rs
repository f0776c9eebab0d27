use crate::{
    error::Result,
    types::{Coordinates, GeocodedLocation, PlaceCandidate, PlaceKind},
};
use async_trait::async_trait;

/// Source of geocoding and nearby-place data used to enrich a plan.
#[async_trait]
pub trait PlacesProvider: Send + Sync + std::fmt::Debug {
    /// Resolve free text to a location. `Ok(None)` means nothing matched.
    async fn geocode(&self, query: &str) -> Result<Option<GeocodedLocation>>;

    /// Resolve coordinates to a city and country.
    async fn reverse_geocode(&self, coordinates: Coordinates) -> Result<Option<GeocodedLocation>>;

    /// Places of `kind` within `radius_m` meters of `center`, best match first.
    async fn nearby(
        &self,
        center: Coordinates,
        kind: PlaceKind,
        radius_m: u32,
    ) -> Result<Vec<PlaceCandidate>>;
}
