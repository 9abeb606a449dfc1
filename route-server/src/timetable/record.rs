//! Timetable record format.
//!
//! Records are the on-disk (and over-the-wire) shape of a leg. They are
//! loosely typed strings until validated into a [`Leg`].

use serde::{Deserialize, Serialize};

use crate::domain::{Availability, DomainError, Leg, StationId, TimeOfDay};

/// A leg as it appears in a timetable JSON file.
///
/// Unknown fields are ignored so richer timetables still load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegRecord {
    pub train_id: String,
    pub train_name: String,
    pub source: String,
    pub destination: String,
    pub departure_time: String,
    pub arrival_time: String,
    pub days_available: Vec<String>,
    pub seats_available: u32,
}

impl TryFrom<LegRecord> for Leg {
    type Error = DomainError;

    fn try_from(record: LegRecord) -> Result<Self, Self::Error> {
        let source = StationId::parse(&record.source)
            .map_err(|_| DomainError::InvalidLeg("source must not be blank"))?;
        let destination = StationId::parse(&record.destination)
            .map_err(|_| DomainError::InvalidLeg("destination must not be blank"))?;
        let departure = TimeOfDay::parse_hhmm(&record.departure_time).map_err(|source| {
            DomainError::InvalidTime {
                field: "departure_time",
                source,
            }
        })?;
        let arrival = TimeOfDay::parse_hhmm(&record.arrival_time).map_err(|source| {
            DomainError::InvalidTime {
                field: "arrival_time",
                source,
            }
        })?;
        let days = Availability::parse(&record.days_available)?;

        Ok(Leg::new(record.train_id, source, destination, departure, arrival)?
            .with_name(record.train_name)
            .with_days(days)
            .with_seats(record.seats_available))
    }
}

impl From<&Leg> for LegRecord {
    fn from(leg: &Leg) -> Self {
        Self {
            train_id: leg.id.clone(),
            train_name: leg.name.clone(),
            source: leg.source.to_string(),
            destination: leg.destination.to_string(),
            departure_time: leg.departure.to_string(),
            arrival_time: leg.arrival.to_string(),
            days_available: leg.days.names(),
            seats_available: leg.seats_available,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn record() -> LegRecord {
        LegRecord {
            train_id: "DEL-KOL-01".into(),
            train_name: "Delhi Kolkata Rajdhani".into(),
            source: "Delhi".into(),
            destination: "Kolkata".into(),
            departure_time: "16:30".into(),
            arrival_time: "08:30".into(),
            days_available: vec!["Daily".into()],
            seats_available: 45,
        }
    }

    #[test]
    fn valid_record_converts() {
        let leg = Leg::try_from(record()).unwrap();
        assert_eq!(leg.id, "DEL-KOL-01");
        assert_eq!(leg.name, "Delhi Kolkata Rajdhani");
        assert_eq!(leg.source.as_str(), "Delhi");
        assert_eq!(leg.destination.as_str(), "Kolkata");
        assert_eq!(leg.departure.to_string(), "16:30");
        assert_eq!(leg.arrival.to_string(), "08:30");
        assert!(leg.runs_on(Weekday::Tue));
        assert_eq!(leg.seats_available, 45);
        assert_eq!(leg.duration_mins(), 960);
    }

    #[test]
    fn malformed_time_rejected() {
        let mut bad = record();
        bad.arrival_time = "8:30".into();
        let err = Leg::try_from(bad).unwrap_err();
        assert_eq!(err.to_string(), "arrival_time: invalid time: expected HH:MM format");
    }

    #[test]
    fn blank_station_rejected() {
        let mut bad = record();
        bad.destination = "".into();
        assert_eq!(
            Leg::try_from(bad).unwrap_err(),
            DomainError::InvalidLeg("destination must not be blank")
        );
    }

    #[test]
    fn unknown_day_rejected() {
        let mut bad = record();
        bad.days_available = vec!["Mon".into(), "Xyz".into()];
        assert_eq!(
            Leg::try_from(bad).unwrap_err(),
            DomainError::UnknownWeekday("Xyz".into())
        );
    }

    #[test]
    fn leg_to_record_roundtrip() {
        let original = record();
        let leg = Leg::try_from(original.clone()).unwrap();
        assert_eq!(LegRecord::from(&leg), original);
    }

    #[test]
    fn ignores_unknown_fields() {
        let json = r#"{
            "train_id": "DEL-MUM-01",
            "train_name": "Delhi Mumbai Express",
            "source": "Delhi",
            "destination": "Mumbai",
            "departure_time": "08:00",
            "arrival_time": "20:00",
            "days_available": ["Mon", "Wed", "Fri"],
            "seats_available": 50,
            "popularity": 0.8
        }"#;
        let record: LegRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.train_id, "DEL-MUM-01");
        assert_eq!(record.days_available, vec!["Mon", "Wed", "Fri"]);
    }
}
