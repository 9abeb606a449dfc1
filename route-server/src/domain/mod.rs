//! Domain types for the route planner.
//!
//! This module contains the core domain model types that represent
//! validated timetable data. All types enforce their invariants at
//! construction time, so code that receives these types can trust their
//! validity.

mod error;
mod itinerary;
mod leg;
mod station;
mod time;

pub use error::DomainError;
pub use itinerary::Itinerary;
pub use leg::{Availability, Leg};
pub use station::{InvalidStationId, StationId};
pub use time::{MINUTES_PER_DAY, TimeError, TimeOfDay, duration, format_duration, wait_time};
