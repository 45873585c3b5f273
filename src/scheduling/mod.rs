//! Scheduling logic for the timetable engine.
//!
//! This module contains the slot occupancy primitive, workload calculation
//! and classification, the conflict checker, the next-free-slot finder, the
//! booking accept path, and the daily and weekly timetable views.

mod availability;
mod booking;
mod conflict_check;
mod daily_schedule;
mod slot_finder;
mod weekly_grid;
mod workload;

pub use availability::{all_free, is_free, occupant};
pub use booking::{BookingOutcome, book_session, cancel_session};
pub use conflict_check::{ENGINE_VERSION, check_conflicts};
pub use daily_schedule::{DailyEntry, DailySchedule, daily_schedule};
pub use slot_finder::{find_first_free, find_next_available};
pub use weekly_grid::{GridCell, GridFilter, WeeklyGrid, weekly_grid};
pub use workload::{
    WorkloadEntry, WorkloadStatus, classify_workload, compute_workload, rank_workloads,
};
