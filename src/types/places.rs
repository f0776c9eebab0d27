use super::trip::Coordinates;
use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Result of resolving a free-text location or a coordinate pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct GeocodedLocation {
    pub coordinates: Coordinates,
    pub city: Option<String>,
    pub country: Option<String>,
    pub formatted_address: Option<String>,
}

/// Kind of place requested from a places provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum PlaceKind {
    Lodging,
    TouristAttraction,
}

impl PlaceKind {
    /// Type tag understood by the places API
    pub fn as_api_type(&self) -> &'static str {
        match self {
            PlaceKind::Lodging => "lodging",
            PlaceKind::TouristAttraction => "tourist_attraction",
        }
    }
}

/// Raw place returned by a nearby search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PlaceCandidate {
    pub name: String,
    pub address: String,
    pub rating: Option<f32>,
    /// Provider price tier (0 = free .. 4 = very expensive)
    pub price_level: Option<u8>,
    pub coordinates: Option<Coordinates>,
    pub place_id: Option<String>,
    /// Provider type tags, most specific first
    #[serde(default)]
    pub types: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct HotelSuggestion {
    pub name: String,
    pub address: String,
    pub rating: Option<f32>,
    pub price_per_night: Option<Decimal>,
    pub coordinates: Option<Coordinates>,
    pub place_id: Option<String>,
}

impl From<PlaceCandidate> for HotelSuggestion {
    fn from(place: PlaceCandidate) -> Self {
        Self {
            name: place.name,
            address: place.address,
            rating: place.rating,
            price_per_night: None,
            coordinates: place.coordinates,
            place_id: place.place_id,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum PoiCategory {
    Restaurant,
    TouristAttraction,
    Museum,
    Park,
    Shopping,
    Entertainment,
    Nightlife,
    Cultural,
    Adventure,
    Religious,
    Historical,
    Nature,
    Other,
}

impl PoiCategory {
    /// Map a single places-API type tag to a category.
    pub fn from_place_type(tag: &str) -> Option<Self> {
        let category = match tag {
            "restaurant" | "cafe" | "bakery" | "food" => PoiCategory::Restaurant,
            "tourist_attraction" | "point_of_interest" => PoiCategory::TouristAttraction,
            "museum" | "art_gallery" => PoiCategory::Museum,
            "park" | "zoo" | "aquarium" => PoiCategory::Park,
            "shopping_mall" | "store" | "clothing_store" | "market" => PoiCategory::Shopping,
            "amusement_park" | "movie_theater" | "stadium" | "casino" => {
                PoiCategory::Entertainment
            }
            "night_club" | "bar" => PoiCategory::Nightlife,
            "library" | "city_hall" => PoiCategory::Cultural,
            "campground" | "rv_park" => PoiCategory::Adventure,
            "church" | "mosque" | "synagogue" | "hindu_temple" | "place_of_worship" => {
                PoiCategory::Religious
            }
            "natural_feature" => PoiCategory::Nature,
            "historical_landmark" | "monument" => PoiCategory::Historical,
            _ => return None,
        };
        Some(category)
    }

    /// Pick the most specific category from a list of type tags. Generic
    /// attraction tags only win when nothing more specific is present.
    pub fn from_place_types(tags: &[String]) -> Self {
        let mut fallback = None;
        for tag in tags {
            match PoiCategory::from_place_type(tag) {
                Some(PoiCategory::TouristAttraction) => {
                    fallback.get_or_insert(PoiCategory::TouristAttraction);
                }
                Some(category) => return category,
                None => {}
            }
        }
        fallback.unwrap_or(PoiCategory::Other)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PointOfInterest {
    pub name: String,
    pub category: PoiCategory,
    pub address: String,
    pub rating: Option<f32>,
    pub coordinates: Option<Coordinates>,
    pub place_id: Option<String>,
}

impl From<PlaceCandidate> for PointOfInterest {
    fn from(place: PlaceCandidate) -> Self {
        Self {
            category: PoiCategory::from_place_types(&place.types),
            name: place.name,
            address: place.address,
            rating: place.rating,
            coordinates: place.coordinates,
            place_id: place.place_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_prefers_specific_tags() {
        let tags = vec![
            "tourist_attraction".to_string(),
            "museum".to_string(),
            "point_of_interest".to_string(),
        ];
        assert_eq!(PoiCategory::from_place_types(&tags), PoiCategory::Museum);

        let generic = vec!["point_of_interest".to_string(), "establishment".to_string()];
        assert_eq!(
            PoiCategory::from_place_types(&generic),
            PoiCategory::TouristAttraction
        );

        assert_eq!(PoiCategory::from_place_types(&[]), PoiCategory::Other);
    }
}
