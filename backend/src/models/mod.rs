//! Domain types: school structure and timetable records.

pub mod school;
pub mod timetable;

pub use school::*;
pub use timetable::*;
