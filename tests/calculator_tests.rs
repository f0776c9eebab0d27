use chrono::NaiveDate;
use rust_decimal::Decimal;
use trip_planner::{
    great_circle_distance_km, AllocationPolicy, Coordinates, Currency, FlightRateTable,
    PlannerConfig, PlannerError, RateTier, TripCalculator, TripRequest,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn point(lat: f64, lon: f64) -> Coordinates {
    Coordinates::new(lat, lon).unwrap()
}

fn close(a: Decimal, b: Decimal) -> bool {
    (a - b).abs() < Decimal::new(1, 6)
}

#[test]
fn test_domestic_short_trip() {
    let request = TripRequest::builder("Lagos Island", date(2026, 6, 1), date(2026, 6, 3), Decimal::from(1000))
        .currency(Currency::Ngn)
        .departure_coordinates(Some(point(6.5, 3.3)))
        .destination_coordinates(Some(point(6.6, 3.4)))
        .build()
        .unwrap();

    let plan = TripCalculator::default().plan_trip(&request);

    assert!(plan.distance_km > 14.0 && plan.distance_km < 17.0, "distance {}", plan.distance_km);
    assert!(plan.flight_cost_estimate > Decimal::new(28, 1));
    assert!(plan.flight_cost_estimate < Decimal::new(34, 1));

    let allocation = &plan.allocation;
    assert_eq!(allocation.flight_budget, plan.flight_cost_estimate);
    assert_eq!(allocation.accommodation_fraction, Decimal::new(35, 2));
    assert_eq!(allocation.activity_fraction, Decimal::new(25, 2));
    assert!(close(
        allocation.daily_budget,
        (Decimal::from(1000) - allocation.flight_budget) / Decimal::from(3)
    ));
    assert!(allocation.daily_budget > Decimal::from(332));
    assert!(allocation.daily_budget < Decimal::new(3325, 1));
    assert_eq!(plan.days.len(), 3);
}

#[test]
fn test_no_coordinates() {
    let request = TripRequest::builder("Nowhere", date(2026, 6, 1), date(2026, 6, 5), Decimal::from(2000))
        .build()
        .unwrap();

    let plan = TripCalculator::default().plan_trip(&request);

    assert_eq!(plan.distance_km, 0.0);
    assert_eq!(plan.flight_cost_estimate, Decimal::ZERO);
    assert_eq!(plan.allocation.flight_budget, Decimal::ZERO);
    assert_eq!(plan.allocation.accommodation_budget, Decimal::from(700));
    assert_eq!(plan.allocation.activity_budget, Decimal::from(500));
    assert_eq!(plan.allocation.daily_budget, Decimal::from(400));
}

#[test]
fn test_long_haul_flight_dominates_budget() {
    // Lagos to Los Angeles is roughly 12,400 km
    let calculator = TripCalculator::default();
    let plan = calculator.plan(
        Decimal::from(500),
        Currency::Usd,
        date(2026, 7, 1),
        date(2026, 7, 4),
        Some(point(6.5244, 3.3792)),
        Some(point(34.0522, -118.2437)),
        "Los Angeles",
    );

    assert!(plan.distance_km > 8000.0);
    assert!(plan.flight_cost_estimate > Decimal::from(1000));

    let allocation = &plan.allocation;
    assert_eq!(allocation.flight_fraction, Decimal::new(40, 2));
    assert_eq!(allocation.flight_budget, Decimal::from(200));
    assert_eq!(allocation.accommodation_budget, Decimal::from(125));
    assert_eq!(allocation.activity_budget, Decimal::from(100));
    assert_eq!(allocation.buffer_budget, Decimal::from(75));
    assert_eq!(allocation.daily_budget, Decimal::from(75));
}

#[test]
fn test_single_day_plan() {
    let start = date(2026, 8, 10);
    let plan = TripCalculator::default().plan(
        Decimal::from(300),
        Currency::Eur,
        start,
        start,
        None,
        None,
        "Porto",
    );

    assert_eq!(plan.days.len(), 1);
    let day = &plan.days[0];
    assert_eq!(day.day_number, 1);
    assert_eq!(day.date, start);
    assert_eq!(day.activities[0].label, "Arrival and hotel check-in");
    assert_eq!(day.estimated_cost, Decimal::from(300));
}

#[test]
fn test_reversed_dates_produce_empty_itinerary() {
    let plan = TripCalculator::default().plan(
        Decimal::from(300),
        Currency::Usd,
        date(2026, 8, 10),
        date(2026, 8, 8),
        None,
        None,
        "Porto",
    );
    assert!(plan.days.is_empty());
    assert_eq!(plan.allocation.daily_budget, Decimal::ZERO);
}

#[test]
fn test_trip_ending_on_last_date_has_every_day() {
    let end = NaiveDate::MAX;
    let start = end - chrono::Duration::days(3);
    let plan = TripCalculator::default().plan(
        Decimal::from(400),
        Currency::Usd,
        start,
        end,
        None,
        None,
        "Porto",
    );
    assert_eq!(plan.days.len(), 4);
    assert_eq!(plan.days[3].date, end);
    assert_eq!(plan.allocation.daily_budget, Decimal::from(100));
}

#[test]
fn test_tiny_budget_plans_without_overflow() {
    let budget = Decimal::new(1, 28);
    let request = TripRequest::builder("Los Angeles", date(2026, 7, 1), date(2026, 7, 4), budget)
        .departure_coordinates(Some(point(6.5244, 3.3792)))
        .destination_coordinates(Some(point(34.0522, -118.2437)))
        .build()
        .unwrap();

    let plan = TripCalculator::default().plan_trip(&request);

    assert_eq!(plan.allocation.flight_fraction, Decimal::new(40, 2));
    assert!(plan.allocation.allocated_total() <= budget);
    assert_eq!(plan.days.len(), 4);
}

#[test]
fn test_itinerary_costs_match_daily_budget() {
    let request = TripRequest::builder("Delhi", date(2026, 2, 26), date(2026, 3, 3), Decimal::new(123457, 2))
        .currency(Currency::Inr)
        .departure_coordinates(Some(point(19.076, 72.8777)))
        .destination_coordinates(Some(point(28.7041, 77.1025)))
        .build()
        .unwrap();

    let plan = TripCalculator::default().plan_trip(&request);

    assert_eq!(plan.days.len() as u32, request.days_count());
    for (index, day) in plan.days.iter().enumerate() {
        assert_eq!(day.day_number as usize, index + 1);
        assert_eq!(day.date, request.start_date + chrono::Duration::days(index as i64));
        assert_eq!(day.estimated_cost, plan.allocation.daily_budget);
        assert!(close(day.activities_cost(), plan.allocation.daily_budget));
        assert_eq!(day.title, format!("Day {} in Delhi", index + 1));
    }
}

#[test]
fn test_flight_cost_increases_within_each_tier() {
    let table = FlightRateTable::default();
    let tiers = [(1.0, 499.0), (500.0, 1999.0), (2000.0, 7999.0), (8000.0, 20000.0)];
    for (low, high) in tiers {
        let mut previous = table.estimate(low);
        let mut distance = low;
        while distance + 25.0 <= high {
            distance += 25.0;
            let cost = table.estimate(distance);
            assert!(cost > previous, "{} km: {} <= {}", distance, cost, previous);
            previous = cost;
        }
    }
}

#[test]
fn test_cheaper_rate_applies_from_tier_start() {
    let table = FlightRateTable::default();
    // the per-km rate drops at each boundary, so the fare does too
    assert_eq!(table.estimate(499.0), Decimal::new(9980, 2));
    assert_eq!(table.estimate(500.0), Decimal::new(7500, 2));
    assert_eq!(table.estimate(8000.0), Decimal::new(80000, 2));
}

#[test]
fn test_distance_is_symmetric() {
    let a = Some(point(-33.9249, 18.4241));
    let b = Some(point(51.5074, -0.1278));
    let ab = great_circle_distance_km(a, b);
    assert!((ab - great_circle_distance_km(b, a)).abs() < 1e-9);
    assert_eq!(great_circle_distance_km(a, a), 0.0);
}

#[test]
fn test_custom_config_is_honored() {
    let config = PlannerConfig::default()
        .with_flight_rates(FlightRateTable::new(vec![RateTier {
            min_distance_km: 0.0,
            rate_per_km: Decimal::ONE,
        }]))
        .with_allocation(AllocationPolicy {
            max_flight_fraction: Decimal::new(10, 2),
            ..AllocationPolicy::default()
        });

    let plan = TripCalculator::new(config).plan(
        Decimal::from(1000),
        Currency::Usd,
        date(2026, 1, 1),
        date(2026, 1, 2),
        Some(point(0.0, 0.0)),
        Some(point(0.0, 1.0)),
        "East",
    );

    // 111 km at 1.00/km is capped at 10% of 1000
    assert_eq!(plan.allocation.flight_budget, Decimal::from(100));
    assert_eq!(plan.allocation.daily_budget, Decimal::from(450));
}

#[test]
fn test_allocation_invariants_hold_broadly() {
    let calculator = TripCalculator::default();
    let destinations = [
        None,
        Some(point(6.6, 3.4)),
        Some(point(9.0765, 7.3986)),
        Some(point(51.5074, -0.1278)),
        Some(point(-33.8688, 151.2093)),
    ];
    for budget in [1, 75, 999, 4000, 100_000] {
        for destination in destinations {
            for days in [0i64, 1, 6] {
                let start = date(2026, 4, 1);
                let plan = calculator.plan(
                    Decimal::from(budget),
                    Currency::Gbp,
                    start,
                    start + chrono::Duration::days(days),
                    Some(point(6.5, 3.3)),
                    destination,
                    "Anywhere",
                );
                let allocation = &plan.allocation;
                assert!(allocation.flight_fraction <= Decimal::new(40, 2));
                assert!(allocation.allocated_total() <= Decimal::from(budget));
                assert_eq!(plan.days.len() as i64, days + 1);
                assert!(close(
                    allocation.daily_budget,
                    (Decimal::from(budget) - allocation.flight_budget) / Decimal::from(days + 1)
                ));
            }
        }
    }
}

#[test]
fn test_plan_serializes_times_and_currency() {
    let plan = TripCalculator::default().plan(
        Decimal::from(100),
        Currency::Aud,
        date(2026, 1, 1),
        date(2026, 1, 2),
        None,
        None,
        "Perth",
    );
    let value = serde_json::to_value(&plan).unwrap();
    assert_eq!(value["currency"], "AUD");
    assert_eq!(value["days"][1]["activities"][4]["time"], "19:00");
    assert_eq!(value["days"][1]["date"], "2026-01-02");
    assert!(plan.summary().contains("Day 2 in Perth"));
}

#[test]
fn test_error_handling() {
    let error = PlannerError::Validation("Budget must be greater than 0".to_string());
    assert_eq!(error.error_code(), "VALIDATION_ERROR");
    assert!(!error.is_retryable());

    let payload = error.to_error_payload();
    assert_eq!(payload["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(payload["error"]["retryable"], false);

    let limited = PlannerError::RateLimit { retry_after: 3 };
    assert!(limited.is_retryable());
    assert!(limited.to_string().contains("3s"));
}
