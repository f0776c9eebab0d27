use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::{debug, warn};

use super::places::PlacesProvider;
use crate::{
    config::{ServiceConfig, DEFAULT_MAPS_BASE_URL},
    error::{PlannerError, Result},
    types::{Coordinates, GeocodedLocation, PlaceCandidate, PlaceKind},
};

const MAX_RETRIES: usize = 3;

/// Client for the Google Geocoding and Places Nearby Search JSON APIs.
#[derive(Clone, Debug)]
pub struct GoogleMapsClient {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl GoogleMapsClient {
    pub fn new(api_key: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| PlannerError::Config(format!("Failed to build HTTP client: {err}")))?;

        Ok(Self {
            api_key: api_key.into(),
            base_url: DEFAULT_MAPS_BASE_URL.to_string(),
            client,
        })
    }

    pub fn from_config(config: &ServiceConfig) -> Result<Self> {
        let api_key = config.maps_api_key.clone().ok_or_else(|| {
            PlannerError::Config("GOOGLE_MAPS_API_KEY is not set".to_string())
        })?;
        Ok(Self::new(api_key, config.timeout)?.with_base_url(config.maps_base_url.clone()))
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    async fn get_text(&self, endpoint: &str, query: &[(&str, String)]) -> Result<String> {
        let url = build_url(&self.base_url, endpoint);
        let mut attempt = 0;
        let mut backoff = Duration::from_millis(250);

        loop {
            let response = self
                .client
                .get(&url)
                .query(query)
                .query(&[("key", self.api_key.as_str())])
                .send()
                .await?;

            let status = response.status();

            if status == StatusCode::TOO_MANY_REQUESTS {
                let retry_after = response
                    .headers()
                    .get(reqwest::header::RETRY_AFTER)
                    .and_then(|value| value.to_str().ok())
                    .and_then(|value| value.parse::<u64>().ok())
                    .map(Duration::from_secs)
                    .unwrap_or(backoff);

                if attempt < MAX_RETRIES {
                    warn!(endpoint, attempt, "rate limited by maps API, retrying");
                    tokio::time::sleep(retry_after).await;
                    attempt += 1;
                    backoff *= 2;
                    continue;
                }

                return Err(PlannerError::RateLimit {
                    retry_after: retry_after.as_secs().max(1),
                });
            }

            if status.is_server_error() && attempt < MAX_RETRIES {
                warn!(endpoint, attempt, %status, "maps API server error, retrying");
                tokio::time::sleep(backoff).await;
                attempt += 1;
                backoff *= 2;
                continue;
            }

            let body = response.text().await?;

            if !status.is_success() {
                return Err(PlannerError::Http(format!("HTTP {} from {}: {}", status, endpoint, body)));
            }

            debug!(endpoint, bytes = body.len(), "maps API response");
            return Ok(body);
        }
    }
}

#[async_trait]
impl PlacesProvider for GoogleMapsClient {
    async fn geocode(&self, query: &str) -> Result<Option<GeocodedLocation>> {
        let body = self
            .get_text("geocode/json", &[("address", query.to_string())])
            .await?;
        parse_geocode_response(&body)
    }

    async fn reverse_geocode(&self, coordinates: Coordinates) -> Result<Option<GeocodedLocation>> {
        let body = self
            .get_text("geocode/json", &[("latlng", coordinates.to_string())])
            .await?;
        parse_geocode_response(&body)
    }

    async fn nearby(
        &self,
        center: Coordinates,
        kind: PlaceKind,
        radius_m: u32,
    ) -> Result<Vec<PlaceCandidate>> {
        let body = self
            .get_text(
                "place/nearbysearch/json",
                &[
                    ("location", center.to_string()),
                    ("radius", radius_m.to_string()),
                    ("type", kind.as_api_type().to_string()),
                ],
            )
            .await?;
        parse_nearby_response(&body)
    }
}

fn build_url(base_url: &str, endpoint: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), endpoint)
}

#[derive(Debug, Deserialize)]
struct LatLng {
    lat: f64,
    lng: f64,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    location: LatLng,
}

#[derive(Debug, Deserialize)]
struct AddressComponent {
    long_name: String,
    #[serde(default)]
    types: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    geometry: Geometry,
    #[serde(default)]
    address_components: Vec<AddressComponent>,
    formatted_address: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    status: String,
    #[serde(default)]
    results: Vec<GeocodeResult>,
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct NearbyResult {
    name: String,
    vicinity: Option<String>,
    rating: Option<f32>,
    price_level: Option<u8>,
    geometry: Option<Geometry>,
    place_id: Option<String>,
    #[serde(default)]
    types: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct NearbyResponse {
    status: String,
    #[serde(default)]
    results: Vec<NearbyResult>,
    error_message: Option<String>,
}

fn decode<T: serde::de::DeserializeOwned>(raw: &str, what: &str) -> Result<T> {
    let mut deserializer = serde_json::Deserializer::from_str(raw);
    serde_path_to_error::deserialize(&mut deserializer).map_err(|err| {
        let path = err.path().to_string();
        let location = if path.is_empty() || path == "." {
            "<root>".to_string()
        } else {
            path
        };
        PlannerError::Http(format!(
            "malformed {} response at {}: {}",
            what,
            location,
            err.inner()
        ))
    })
}

fn status_message(status: &str, error_message: Option<String>) -> String {
    match error_message {
        Some(message) => format!("{}: {}", status, message),
        None => status.to_string(),
    }
}

fn to_coordinates(location: &LatLng) -> Option<Coordinates> {
    Coordinates::new(location.lat, location.lng).ok()
}

pub(crate) fn parse_geocode_response(raw: &str) -> Result<Option<GeocodedLocation>> {
    let response: GeocodeResponse = decode(raw, "geocode")?;

    match response.status.as_str() {
        "OK" => {}
        "ZERO_RESULTS" => return Ok(None),
        other => {
            return Err(PlannerError::Geocoding(status_message(
                other,
                response.error_message,
            )))
        }
    }

    let Some(first) = response.results.into_iter().next() else {
        return Ok(None);
    };

    let coordinates = to_coordinates(&first.geometry.location).ok_or_else(|| {
        PlannerError::Geocoding(format!(
            "coordinates out of range: {},{}",
            first.geometry.location.lat, first.geometry.location.lng
        ))
    })?;

    let mut city = None;
    let mut country = None;
    for component in first.address_components {
        if component.types.iter().any(|t| t == "locality") {
            city.get_or_insert(component.long_name);
        } else if component.types.iter().any(|t| t == "country") {
            country.get_or_insert(component.long_name);
        }
    }

    Ok(Some(GeocodedLocation {
        coordinates,
        city,
        country,
        formatted_address: first.formatted_address,
    }))
}

pub(crate) fn parse_nearby_response(raw: &str) -> Result<Vec<PlaceCandidate>> {
    let response: NearbyResponse = decode(raw, "nearby search")?;

    match response.status.as_str() {
        "OK" => {}
        "ZERO_RESULTS" => return Ok(Vec::new()),
        other => {
            return Err(PlannerError::Places(status_message(
                other,
                response.error_message,
            )))
        }
    }

    Ok(response
        .results
        .into_iter()
        .map(|place| PlaceCandidate {
            name: place.name,
            address: place.vicinity.unwrap_or_default(),
            rating: place.rating,
            price_level: place.price_level,
            coordinates: place
                .geometry
                .as_ref()
                .and_then(|geometry| to_coordinates(&geometry.location)),
            place_id: place.place_id,
            types: place.types,
        })
        .collect())
}
