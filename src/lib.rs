//! Timetable Conflict Engine
//!
//! This crate checks candidate class sessions against a weekly timetable of
//! five teaching days and six one-hour start times. It detects faculty,
//! class-group and room double bookings, warns about approved faculty leave,
//! enforces a weekly workload ceiling, and finds the next slot free for a
//! faculty member, class-group and room together.
//!
//! Persistence is supplied by the caller through the traits in [`store`];
//! in-memory implementations are included.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod models;
pub mod scheduling;
pub mod store;
