use crate::types::{ActivityEntry, DaySchedule};
use chrono::{Days, NaiveDate, NaiveTime};
use rust_decimal::Decimal;

struct ActivitySlot {
    hour: u32,
    label: &'static str,
    location: &'static str,
    duration_minutes: u32,
    /// Share of the daily budget, in percent
    cost_percent: i64,
}

const ARRIVAL_LABEL: &str = "Arrival and hotel check-in";
const CHECKOUT_LABEL: &str = "Breakfast and hotel check-out";

// Percentages sum to 100 so a day's activities cost exactly its budget.
const DAY_TEMPLATE: [ActivitySlot; 5] = [
    ActivitySlot {
        hour: 9,
        label: CHECKOUT_LABEL,
        location: "Hotel",
        duration_minutes: 60,
        cost_percent: 10,
    },
    ActivitySlot {
        hour: 11,
        label: "Explore local attractions",
        location: "City Center",
        duration_minutes: 180,
        cost_percent: 40,
    },
    ActivitySlot {
        hour: 14,
        label: "Lunch at local restaurant",
        location: "Downtown",
        duration_minutes: 90,
        cost_percent: 20,
    },
    ActivitySlot {
        hour: 16,
        label: "Afternoon sightseeing",
        location: "Tourist Area",
        duration_minutes: 120,
        cost_percent: 20,
    },
    ActivitySlot {
        hour: 19,
        label: "Dinner and evening leisure",
        location: "Restaurant District",
        duration_minutes: 120,
        cost_percent: 10,
    },
];

/// Build one schedule per trip day from the fixed daily template.
///
/// Day 1 opens with hotel check-in, later days with check-out; every other
/// slot is identical and scaled by `daily_budget`.
///
/// Dates stop at [`NaiveDate::MAX`]: a `days_count` running past the last
/// representable date yields only the days up to it. Counts derived from a
/// start and end date never reach that limit.
pub fn synthesize_itinerary(
    start_date: NaiveDate,
    days_count: u32,
    daily_budget: Decimal,
    destination_label: &str,
) -> Vec<DaySchedule> {
    let mut days = Vec::with_capacity(days_count as usize);
    let mut date = start_date;

    for day_number in 1..=days_count {
        days.push(DaySchedule {
            day_number,
            date,
            title: format!("Day {} in {}", day_number, destination_label),
            activities: day_activities(day_number, daily_budget),
            estimated_cost: daily_budget,
        });

        match date.checked_add_days(Days::new(1)) {
            Some(next) => date = next,
            None => break,
        }
    }

    days
}

fn day_activities(day_number: u32, daily_budget: Decimal) -> Vec<ActivityEntry> {
    DAY_TEMPLATE
        .iter()
        .enumerate()
        .map(|(index, slot)| {
            let label = if index == 0 && day_number == 1 {
                ARRIVAL_LABEL
            } else {
                slot.label
            };
            ActivityEntry {
                time: NaiveTime::from_hms_opt(slot.hour, 0, 0).unwrap_or_default(),
                label: label.to_string(),
                location: slot.location.to_string(),
                duration_minutes: slot.duration_minutes,
                cost: daily_budget * Decimal::new(slot.cost_percent, 2),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 12, 30).unwrap()
    }

    #[test]
    fn test_template_sums_to_whole_budget() {
        let total: i64 = DAY_TEMPLATE.iter().map(|slot| slot.cost_percent).sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn test_single_day() {
        let days = synthesize_itinerary(start(), 1, Decimal::from(200), "Accra");
        assert_eq!(days.len(), 1);
        assert_eq!(days[0].day_number, 1);
        assert_eq!(days[0].date, start());
        assert_eq!(days[0].title, "Day 1 in Accra");
        assert_eq!(days[0].activities[0].label, "Arrival and hotel check-in");
        assert_eq!(days[0].activities[0].cost, Decimal::from(20));
    }

    #[test]
    fn test_days_are_contiguous_across_year_end() {
        let days = synthesize_itinerary(start(), 4, Decimal::from(100), "Rome");
        let numbers: Vec<u32> = days.iter().map(|day| day.day_number).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4]);
        assert_eq!(days[3].date, NaiveDate::from_ymd_opt(2027, 1, 2).unwrap());
        for pair in days.windows(2) {
            assert_eq!(pair[1].date - pair[0].date, chrono::Duration::days(1));
        }
    }

    #[test]
    fn test_trip_ending_on_last_date_is_complete() {
        let start = NaiveDate::MAX - chrono::Duration::days(2);
        let days = synthesize_itinerary(start, 3, Decimal::from(100), "Rome");
        assert_eq!(days.len(), 3);
        assert_eq!(days[2].date, NaiveDate::MAX);
    }

    #[test]
    fn test_days_stop_at_last_date() {
        let start = NaiveDate::MAX - chrono::Duration::days(1);
        let days = synthesize_itinerary(start, 5, Decimal::from(100), "Rome");
        assert_eq!(days.len(), 2);
        assert_eq!(days[1].date, NaiveDate::MAX);
        assert_eq!(days[1].day_number, 2);
    }

    #[test]
    fn test_only_first_slot_varies() {
        let days = synthesize_itinerary(start(), 3, Decimal::from(100), "Rome");
        assert_eq!(days[1].activities[0].label, "Breakfast and hotel check-out");
        assert_eq!(days[2].activities[0].label, "Breakfast and hotel check-out");
        assert_eq!(days[0].activities[1..], days[1].activities[1..]);

        let times: Vec<String> = days[0]
            .activities
            .iter()
            .map(|activity| activity.time.format("%H:%M").to_string())
            .collect();
        assert_eq!(times, vec!["09:00", "11:00", "14:00", "16:00", "19:00"]);
    }

    #[test]
    fn test_zero_days_is_empty() {
        assert!(synthesize_itinerary(start(), 0, Decimal::from(100), "Rome").is_empty());
    }
}
