//! Core data models for the timetable engine.
//!
//! This module contains the grid, session, leave, calendar and report types used
//! throughout the engine.

mod calendar;
mod conflict_report;
mod leave;
mod session;
mod time_slot;

pub use calendar::{CalendarEvent, CalendarEventType};
pub use conflict_report::{
    AcceptPolicy, AuditStep, Conflict, ConflictKind, ConflictReport, Severity,
};
pub use leave::{LeaveRecord, LeaveStatus};
pub use session::{ScheduledSession, SessionRequest, SlotClaim};
pub use time_slot::{Day, StartTime, TimeSlot};
