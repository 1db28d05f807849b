//! Volunteer timesheet calculations: hour/minute/second to decimal-hours
//! conversion and graded points previews.

pub mod config;
pub mod hours;
pub mod output;
pub mod points;
pub mod timesheet;
