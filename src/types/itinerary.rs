use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One scheduled activity within a day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ActivityEntry {
    /// Local start time, serialized as `HH:MM`
    #[serde(with = "hh_mm")]
    #[schemars(with = "String")]
    pub time: NaiveTime,
    pub label: String,
    pub location: String,
    pub duration_minutes: u32,
    pub cost: Decimal,
}

/// Planned activities for one calendar day of a trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DaySchedule {
    /// 1-based day counter within the trip
    pub day_number: u32,
    pub date: NaiveDate,
    pub title: String,
    /// Activities in chronological order
    pub activities: Vec<ActivityEntry>,
    pub estimated_cost: Decimal,
}

impl DaySchedule {
    pub fn activities_cost(&self) -> Decimal {
        self.activities.iter().map(|activity| activity.cost).sum()
    }
}

mod hh_mm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&time.format(FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, FORMAT).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_time_serializes_as_hh_mm() {
        let entry = ActivityEntry {
            time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            label: "Arrival and hotel check-in".to_string(),
            location: "Hotel".to_string(),
            duration_minutes: 60,
            cost: Decimal::new(1050, 2),
        };

        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["time"], "09:00");

        let back: ActivityEntry = serde_json::from_value(value).unwrap();
        assert_eq!(back, entry);
    }
}
