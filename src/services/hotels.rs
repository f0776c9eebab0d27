use crate::types::{round_currency, HotelSuggestion, PlaceCandidate};
use rust_decimal::Decimal;
use std::cmp::Ordering;

/// Placeholder hotels used when no places data is available, priced as a
/// share of the daily budget.
pub fn sample_hotels(
    city: &str,
    destination_label: &str,
    daily_budget: Decimal,
) -> Vec<HotelSuggestion> {
    let samples = [
        ("Grand Hotel", "123 Main Street", 4.5, 40),
        ("Budget Inn", "456 Budget Ave", 3.8, 20),
        ("Luxury Resort", "789 Luxury Blvd", 4.8, 60),
    ];

    let mut hotels: Vec<HotelSuggestion> = samples
        .into_iter()
        .map(|(name, street, rating, price_percent)| HotelSuggestion {
            name: format!("{} {}", name, city),
            address: format!("{}, {}", street, destination_label),
            rating: Some(rating),
            price_per_night: Some(round_currency(daily_budget * Decimal::new(price_percent, 2))),
            coordinates: None,
            place_id: None,
        })
        .collect();
    sort_hotels(&mut hotels);
    hotels
}

pub fn hotels_from_places(places: Vec<PlaceCandidate>, limit: usize) -> Vec<HotelSuggestion> {
    let mut hotels: Vec<HotelSuggestion> = places
        .into_iter()
        .take(limit)
        .map(HotelSuggestion::from)
        .collect();
    sort_hotels(&mut hotels);
    hotels
}

/// Highest rating first, then cheapest; unknown ratings and prices sort last.
pub fn sort_hotels(hotels: &mut [HotelSuggestion]) {
    hotels.sort_by(|a, b| {
        let by_rating = match (a.rating, b.rating) {
            (Some(x), Some(y)) => y.total_cmp(&x),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        };
        by_rating.then_with(|| match (a.price_per_night, b.price_per_night) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        })
    });
}
