use std::sync::Arc;

use tracing::{info, warn};

use super::{
    google_maps::GoogleMapsClient,
    hotels::{hotels_from_places, sample_hotels},
    places::PlacesProvider,
};
use crate::{
    config::{PlannerConfig, ServiceConfig},
    core::TripCalculator,
    error::Result,
    types::{
        Coordinates, GeocodedLocation, HotelSuggestion, PlaceKind, PlannedTrip, PointOfInterest,
        TripRequest,
    },
};

const DEFAULT_SEARCH_RADIUS_M: u32 = 5000;
const DEFAULT_RESULT_LIMIT: usize = 10;

/// Plans a trip and enriches it with places data when a provider is configured.
///
/// Provider failures never fail the plan: they are logged and the affected
/// data is treated as absent.
#[derive(Debug, Clone)]
pub struct TripPlanner {
    calculator: TripCalculator,
    places: Option<Arc<dyn PlacesProvider>>,
    search_radius_m: u32,
    result_limit: usize,
}

impl Default for TripPlanner {
    fn default() -> Self {
        Self::new(TripCalculator::default())
    }
}

impl TripPlanner {
    pub fn new(calculator: TripCalculator) -> Self {
        Self {
            calculator,
            places: None,
            search_radius_m: DEFAULT_SEARCH_RADIUS_M,
            result_limit: DEFAULT_RESULT_LIMIT,
        }
    }

    /// Offline when the service config carries no maps API key.
    pub fn from_config(config: PlannerConfig, service: &ServiceConfig) -> Result<Self> {
        let planner = Self::new(TripCalculator::new(config));
        if !service.has_maps_access() {
            info!("no maps API key configured; planning offline");
            return Ok(planner);
        }
        Ok(planner.with_places(Arc::new(GoogleMapsClient::from_config(service)?)))
    }

    pub fn with_places(mut self, provider: Arc<dyn PlacesProvider>) -> Self {
        self.places = Some(provider);
        self
    }

    pub fn with_search_radius(mut self, radius_m: u32) -> Self {
        self.search_radius_m = radius_m;
        self
    }

    pub fn with_result_limit(mut self, limit: usize) -> Self {
        self.result_limit = limit;
        self
    }

    pub fn calculator(&self) -> &TripCalculator {
        &self.calculator
    }

    pub async fn plan(&self, mut request: TripRequest) -> PlannedTrip {
        let destination = self.resolve_destination(&request).await;
        if let Some(location) = &destination {
            request.destination_coordinates = Some(location.coordinates);
        }

        let departure = self.resolve_departure(&request).await;
        if request.departure_coordinates.is_none() {
            request.departure_coordinates = departure.as_ref().map(|location| location.coordinates);
        }

        let label = destination
            .as_ref()
            .and_then(|location| location.city.clone())
            .unwrap_or_else(|| request.destination_label.clone());

        let plan = self.calculator.plan(
            request.total_budget,
            request.currency,
            request.start_date,
            request.end_date,
            request.departure_coordinates,
            request.destination_coordinates,
            &label,
        );

        let (hotels, points_of_interest) = tokio::join!(
            self.find_hotels(request.destination_coordinates),
            self.find_points_of_interest(request.destination_coordinates),
        );
        let hotels = hotels.unwrap_or_else(|| {
            sample_hotels(&label, &request.destination_label, plan.allocation.daily_budget)
        });

        info!(
            destination = %request.destination_label,
            days = plan.days_count(),
            distance_km = plan.distance_km,
            hotels = hotels.len(),
            points_of_interest = points_of_interest.len(),
            "trip planned"
        );

        PlannedTrip {
            request,
            departure,
            destination,
            plan,
            hotels,
            points_of_interest,
        }
    }

    async fn resolve_destination(&self, request: &TripRequest) -> Option<GeocodedLocation> {
        if request.destination_coordinates.is_some() {
            return None;
        }
        let places = self.places.as_ref()?;
        match places.geocode(&request.destination_label).await {
            Ok(location) => location,
            Err(err) => {
                warn!(destination = %request.destination_label, error = %err, "failed to geocode destination");
                None
            }
        }
    }

    /// Geocode the departure text when coordinates are missing, otherwise
    /// reverse geocode the coordinates to learn city and country.
    async fn resolve_departure(&self, request: &TripRequest) -> Option<GeocodedLocation> {
        let places = self.places.as_ref()?;
        let result = match (request.departure_coordinates, &request.departure_label) {
            (Some(coordinates), _) => places.reverse_geocode(coordinates).await,
            (None, Some(label)) => places.geocode(label).await,
            (None, None) => return None,
        };
        match result {
            Ok(location) => location,
            Err(err) => {
                warn!(error = %err, "failed to resolve departure location");
                None
            }
        }
    }

    /// `None` means no places data was available and samples should be used.
    async fn find_hotels(&self, center: Option<Coordinates>) -> Option<Vec<HotelSuggestion>> {
        let (places, center) = (self.places.as_ref()?, center?);
        match places
            .nearby(center, PlaceKind::Lodging, self.search_radius_m)
            .await
        {
            Ok(candidates) => Some(hotels_from_places(candidates, self.result_limit)),
            Err(err) => {
                warn!(error = %err, "failed to fetch hotel suggestions");
                None
            }
        }
    }

    async fn find_points_of_interest(&self, center: Option<Coordinates>) -> Vec<PointOfInterest> {
        let (Some(places), Some(center)) = (self.places.as_ref(), center) else {
            return Vec::new();
        };
        match places
            .nearby(center, PlaceKind::TouristAttraction, self.search_radius_m)
            .await
        {
            Ok(candidates) => candidates
                .into_iter()
                .take(self.result_limit)
                .map(PointOfInterest::from)
                .collect(),
            Err(err) => {
                warn!(error = %err, "failed to fetch points of interest");
                Vec::new()
            }
        }
    }
}
