use crate::error::{PlannerError, Result};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Budget currencies accepted for a trip. Purely a display tag; amounts are never converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Usd,
    Eur,
    Gbp,
    Ngn,
    Inr,
    Cad,
    Aud,
}

impl Currency {
    pub const ALL: [Currency; 7] = [
        Currency::Usd,
        Currency::Eur,
        Currency::Gbp,
        Currency::Ngn,
        Currency::Inr,
        Currency::Cad,
        Currency::Aud,
    ];

    /// ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
            Currency::Ngn => "NGN",
            Currency::Inr => "INR",
            Currency::Cad => "CAD",
            Currency::Aud => "AUD",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Eur => "€",
            Currency::Gbp => "£",
            Currency::Ngn => "₦",
            Currency::Inr => "₹",
            Currency::Cad => "C$",
            Currency::Aud => "A$",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Currency::Usd => "US Dollar",
            Currency::Eur => "Euro",
            Currency::Gbp => "British Pound",
            Currency::Ngn => "Nigerian Naira",
            Currency::Inr => "Indian Rupee",
            Currency::Cad => "Canadian Dollar",
            Currency::Aud => "Australian Dollar",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self> {
        let code = s.trim();
        Currency::ALL
            .into_iter()
            .find(|currency| currency.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| PlannerError::Validation(format!("Unsupported currency: {}", code)))
    }
}

/// A point on the globe in decimal degrees.
///
/// Deserialized values go through [`Coordinates::new`], so out-of-range
/// input is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(try_from = "RawCoordinates")]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Deserialize, JsonSchema)]
struct RawCoordinates {
    latitude: f64,
    longitude: f64,
}

impl TryFrom<RawCoordinates> for Coordinates {
    type Error = PlannerError;

    fn try_from(raw: RawCoordinates) -> Result<Self> {
        Coordinates::new(raw.latitude, raw.longitude)
    }
}

impl Coordinates {
    /// Build a coordinate pair, rejecting values outside the valid lat/lon ranges.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(PlannerError::Validation(format!(
                "Latitude {} is outside [-90, 90]",
                latitude
            )));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(PlannerError::Validation(format!(
                "Longitude {} is outside [-180, 180]",
                longitude
            )));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

/// Parses `"lat,lon"`.
impl FromStr for Coordinates {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self> {
        let (lat, lon) = s.split_once(',').ok_or_else(|| {
            PlannerError::Validation(format!("Expected coordinates as LAT,LON, got `{}`", s))
        })?;
        let parse = |part: &str| {
            part.trim().parse::<f64>().map_err(|err| {
                PlannerError::Validation(format!("Invalid coordinate `{}`: {}", part.trim(), err))
            })
        };
        Coordinates::new(parse(lat)?, parse(lon)?)
    }
}

/// Input for a single planning run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TripRequest {
    /// Short title for the trip
    pub title: String,
    /// Free-text destination, e.g. "Lisbon, Portugal"
    pub destination_label: String,
    /// Free-text starting location
    pub departure_label: Option<String>,
    pub departure_coordinates: Option<Coordinates>,
    pub destination_coordinates: Option<Coordinates>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_budget: Decimal,
    pub currency: Currency,
    /// Traveller interests, already split and trimmed
    pub interests: Vec<String>,
    pub notes: Option<String>,
}

impl TripRequest {
    pub fn builder(
        destination_label: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        total_budget: Decimal,
    ) -> TripRequestBuilder {
        TripRequestBuilder {
            title: None,
            destination_label: destination_label.into(),
            departure_label: None,
            departure_coordinates: None,
            destination_coordinates: None,
            start_date,
            end_date,
            total_budget,
            currency: Currency::default(),
            interests: Vec::new(),
            notes: None,
        }
    }

    /// Inclusive number of calendar days covered by the trip.
    pub fn days_count(&self) -> u32 {
        days_between_inclusive(self.start_date, self.end_date)
    }
}

pub(crate) fn days_between_inclusive(start_date: NaiveDate, end_date: NaiveDate) -> u32 {
    let days = (end_date - start_date).num_days() + 1;
    u32::try_from(days).unwrap_or(0)
}

/// Split a comma-separated interests string, dropping blanks.
pub fn parse_interests(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|interest| !interest.is_empty())
        .map(str::to_string)
        .collect()
}

/// Builder that enforces the request preconditions in `build`.
#[derive(Debug, Clone)]
pub struct TripRequestBuilder {
    title: Option<String>,
    destination_label: String,
    departure_label: Option<String>,
    departure_coordinates: Option<Coordinates>,
    destination_coordinates: Option<Coordinates>,
    start_date: NaiveDate,
    end_date: NaiveDate,
    total_budget: Decimal,
    currency: Currency,
    interests: Vec<String>,
    notes: Option<String>,
}

impl TripRequestBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn departure_label(mut self, label: impl Into<String>) -> Self {
        self.departure_label = Some(label.into());
        self
    }

    pub fn departure_coordinates(mut self, coordinates: Option<Coordinates>) -> Self {
        self.departure_coordinates = coordinates;
        self
    }

    pub fn destination_coordinates(mut self, coordinates: Option<Coordinates>) -> Self {
        self.destination_coordinates = coordinates;
        self
    }

    pub fn currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    pub fn interests(mut self, raw: &str) -> Self {
        self.interests = parse_interests(raw);
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Validate and build. Every violated rule is reported in a single error.
    pub fn build(self) -> Result<TripRequest> {
        let mut errors = Vec::new();

        let destination_label = self.destination_label.trim().to_string();
        if destination_label.is_empty() {
            errors.push("Destination is required".to_string());
        }
        if self.end_date <= self.start_date {
            errors.push("End date must be after start date".to_string());
        }
        if self.total_budget <= Decimal::ZERO {
            errors.push("Budget must be greater than 0".to_string());
        }

        if !errors.is_empty() {
            return Err(PlannerError::Validation(errors.join("; ")));
        }

        let departure_label = self
            .departure_label
            .map(|label| label.trim().to_string())
            .filter(|label| !label.is_empty());
        let title = self
            .title
            .map(|title| title.trim().to_string())
            .filter(|title| !title.is_empty())
            .unwrap_or_else(|| format!("Trip to {}", destination_label));

        Ok(TripRequest {
            title,
            destination_label,
            departure_label,
            departure_coordinates: self.departure_coordinates,
            destination_coordinates: self.destination_coordinates,
            start_date: self.start_date,
            end_date: self.end_date,
            total_budget: self.total_budget,
            currency: self.currency,
            interests: self.interests,
            notes: self.notes.filter(|notes| !notes.trim().is_empty()),
        })
    }
}
