//! Train leg type.
//!
//! A `Leg` is one scheduled, single-train journey between two stations.
//! Legs are immutable once loaded; itineraries share them via `Arc`.

use chrono::Weekday;
use std::fmt;

use super::{DomainError, StationId, TimeOfDay, duration};

/// Days of the week on which a leg runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Availability {
    /// Runs every day.
    Daily,
    /// Runs only on the listed days, in Monday-first order without repeats.
    Days(Vec<Weekday>),
}

impl Availability {
    /// Parse availability from day names such as `["Mon", "Wed"]` or `["Daily"]`.
    ///
    /// "Daily" anywhere in the list makes the leg run every day. Day names
    /// accept anything `chrono::Weekday` parses ("Mon", "monday", ...).
    ///
    /// # Examples
    ///
    /// ```
    /// use route_server::domain::Availability;
    /// use chrono::Weekday;
    ///
    /// let days = Availability::parse(&["Wed", "Mon"]).unwrap();
    /// assert!(days.runs_on(Weekday::Mon));
    /// assert!(!days.runs_on(Weekday::Tue));
    /// assert_eq!(days.names(), vec!["Mon", "Wed"]);
    ///
    /// assert_eq!(Availability::parse(&["Daily"]).unwrap(), Availability::Daily);
    /// assert!(Availability::parse::<&str>(&[]).is_err());
    /// ```
    pub fn parse<S: AsRef<str>>(names: &[S]) -> Result<Self, DomainError> {
        if names.is_empty() {
            return Err(DomainError::NoDaysAvailable);
        }

        let mut days = Vec::with_capacity(names.len());
        for name in names {
            let name = name.as_ref();
            if name.eq_ignore_ascii_case("daily") {
                return Ok(Availability::Daily);
            }
            let day: Weekday = name
                .parse()
                .map_err(|_| DomainError::UnknownWeekday(name.to_string()))?;
            if !days.contains(&day) {
                days.push(day);
            }
        }

        days.sort_by_key(|d| d.num_days_from_monday());
        Ok(Availability::Days(days))
    }

    /// Returns true if the leg runs on `day`.
    pub fn runs_on(&self, day: Weekday) -> bool {
        match self {
            Availability::Daily => true,
            Availability::Days(days) => days.contains(&day),
        }
    }

    /// Day names in the timetable's own format.
    pub fn names(&self) -> Vec<String> {
        match self {
            Availability::Daily => vec!["Daily".to_string()],
            Availability::Days(days) => days.iter().map(|d| d.to_string()).collect(),
        }
    }
}

/// One scheduled train journey between two stations.
///
/// Departure and arrival are wall-clock times. An arrival earlier than the
/// departure means the train arrives the next day.
#[derive(Clone, PartialEq, Eq)]
pub struct Leg {
    /// Train identifier, e.g. "DEL-MUM-01"
    pub id: String,
    /// Human-readable train name
    pub name: String,
    /// Departure station
    pub source: StationId,
    /// Arrival station
    pub destination: StationId,
    /// Departure time at `source`
    pub departure: TimeOfDay,
    /// Arrival time at `destination`
    pub arrival: TimeOfDay,
    /// Days on which the train runs
    pub days: Availability,
    /// Seats left
    pub seats_available: u32,
}

impl Leg {
    /// Create a leg that runs daily with no name and no seats.
    ///
    /// Use the `with_*` methods to fill in the remaining fields.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `id` is blank.
    ///
    /// # Examples
    ///
    /// ```
    /// use route_server::domain::{Leg, StationId, TimeOfDay};
    ///
    /// let leg = Leg::new(
    ///     "DEL-MUM-01",
    ///     StationId::parse("Delhi").unwrap(),
    ///     StationId::parse("Mumbai").unwrap(),
    ///     TimeOfDay::parse_hhmm("08:00").unwrap(),
    ///     TimeOfDay::parse_hhmm("20:00").unwrap(),
    /// )
    /// .unwrap()
    /// .with_name("Delhi Mumbai Express")
    /// .with_seats(50);
    ///
    /// assert_eq!(leg.duration_mins(), 720);
    /// ```
    pub fn new(
        id: impl Into<String>,
        source: StationId,
        destination: StationId,
        departure: TimeOfDay,
        arrival: TimeOfDay,
    ) -> Result<Self, DomainError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(DomainError::InvalidLeg("train id must not be blank"));
        }

        Ok(Leg {
            id,
            name: String::new(),
            source,
            destination,
            departure,
            arrival,
            days: Availability::Daily,
            seats_available: 0,
        })
    }

    /// Set the train name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the days on which the train runs.
    pub fn with_days(mut self, days: Availability) -> Self {
        self.days = days;
        self
    }

    /// Set the number of seats available.
    pub fn with_seats(mut self, seats: u32) -> Self {
        self.seats_available = seats;
        self
    }

    /// Travel time from departure to arrival, in minutes.
    pub fn duration_mins(&self) -> u32 {
        duration(self.departure, self.arrival)
    }

    /// Returns true if the leg arrives on the day after it departs.
    pub fn is_overnight(&self) -> bool {
        self.arrival < self.departure
    }

    /// Returns true if the train runs on `day`.
    pub fn runs_on(&self, day: Weekday) -> bool {
        self.days.runs_on(day)
    }
}

impl fmt::Debug for Leg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Leg({} {} {} -> {} {})",
            self.id, self.source, self.departure, self.destination, self.arrival
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn station(s: &str) -> StationId {
        StationId::parse(s).unwrap()
    }

    fn time(s: &str) -> TimeOfDay {
        TimeOfDay::parse_hhmm(s).unwrap()
    }

    fn make_leg(dep: &str, arr: &str) -> Leg {
        Leg::new("MUM-BLR-01", station("Mumbai"), station("Bangalore"), time(dep), time(arr))
            .unwrap()
    }

    #[test]
    fn leg_defaults() {
        let leg = make_leg("14:30", "06:30");
        assert_eq!(leg.id, "MUM-BLR-01");
        assert_eq!(leg.name, "");
        assert_eq!(leg.days, Availability::Daily);
        assert_eq!(leg.seats_available, 0);
    }

    #[test]
    fn leg_builders() {
        let leg = make_leg("14:30", "06:30")
            .with_name("Mumbai Bangalore Express")
            .with_days(Availability::parse(&["Tue", "Thu", "Sat"]).unwrap())
            .with_seats(55);

        assert_eq!(leg.name, "Mumbai Bangalore Express");
        assert_eq!(leg.seats_available, 55);
        assert!(leg.runs_on(Weekday::Thu));
        assert!(!leg.runs_on(Weekday::Fri));
    }

    #[test]
    fn reject_blank_id() {
        let err = Leg::new("  ", station("A"), station("B"), time("10:00"), time("11:00"))
            .unwrap_err();
        assert_eq!(err, DomainError::InvalidLeg("train id must not be blank"));
    }

    #[test]
    fn leg_duration() {
        assert_eq!(make_leg("08:00", "20:00").duration_mins(), 720);
        assert_eq!(make_leg("14:30", "06:30").duration_mins(), 960);
        assert_eq!(make_leg("10:00", "10:00").duration_mins(), 0);
    }

    #[test]
    fn overnight_detection() {
        assert!(make_leg("14:30", "06:30").is_overnight());
        assert!(!make_leg("08:00", "20:00").is_overnight());
        assert!(!make_leg("10:00", "10:00").is_overnight());
    }

    #[test]
    fn debug_format() {
        let leg = make_leg("14:30", "06:30");
        assert_eq!(
            format!("{:?}", leg),
            "Leg(MUM-BLR-01 Mumbai 14:30 -> Bangalore 06:30)"
        );
    }

    #[test]
    fn availability_daily_wins() {
        let days = Availability::parse(&["Mon", "Daily"]).unwrap();
        assert_eq!(days, Availability::Daily);
        assert!(days.runs_on(Weekday::Sun));
        assert_eq!(days.names(), vec!["Daily"]);
    }

    #[test]
    fn availability_sorted_and_deduplicated() {
        let days = Availability::parse(&["Sun", "Mon", "Sun", "Fri"]).unwrap();
        assert_eq!(
            days,
            Availability::Days(vec![Weekday::Mon, Weekday::Fri, Weekday::Sun])
        );
        assert_eq!(days.names(), vec!["Mon", "Fri", "Sun"]);
    }

    #[test]
    fn availability_rejects_unknown_day() {
        let err = Availability::parse(&["Mon", "Someday"]).unwrap_err();
        assert_eq!(err, DomainError::UnknownWeekday("Someday".into()));
    }

    #[test]
    fn availability_rejects_empty() {
        let err = Availability::parse::<String>(&[]).unwrap_err();
        assert_eq!(err, DomainError::NoDaysAvailable);
    }
}
