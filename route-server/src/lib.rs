//! Train route search server.
//!
//! Answers: "which trains, possibly with changes, get me from this station
//! to that one, and how long will it take?"

pub mod domain;
pub mod nearby;
pub mod planner;
pub mod timetable;
pub mod web;
