//! YAML snapshots of schedule, leave and calendar data.
//!
//! A snapshot seeds the in-memory stores from a fixture file. Session ids
//! may be omitted and are generated on load.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{MemoryLeaveStore, MemoryScheduleStore};
use crate::config::load_yaml;
use crate::error::EngineResult;
use crate::models::{CalendarEvent, LeaveRecord, ScheduledSession};

/// Sessions, leave records and calendar events as stored on disk.
///
/// ```text
/// sessions:
///   - faculty_id: F1
///     subject_id: MATH101
///     class_group_id: CSE-A
///     room_id: R101
///     slot: { day: Monday, start: "09:00" }
/// leaves:
///   - faculty_id: F2
///     start_date: 2026-10-20
///     end_date: 2026-10-21
///     reason: Conference
///     status: Approved
/// calendar:
///   - date: 2026-10-21
///     description: Founders' Day
///     type: Holiday
///     is_holiday: true
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreSnapshot {
    /// Committed sessions.
    #[serde(default)]
    pub sessions: Vec<ScheduledSession>,
    /// Leave records of every status.
    #[serde(default)]
    pub leaves: Vec<LeaveRecord>,
    /// Academic calendar, one event per date.
    #[serde(default)]
    pub calendar: Vec<CalendarEvent>,
}

impl StoreSnapshot {
    /// Reads a snapshot from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        load_yaml(path.as_ref())
    }

    /// Builds the two in-memory stores, rejecting sessions or calendar
    /// events that break a uniqueness constraint.
    pub fn into_stores(self) -> EngineResult<(MemoryScheduleStore, MemoryLeaveStore)> {
        let schedule = MemoryScheduleStore::from_sessions(self.sessions)?;
        let leaves = MemoryLeaveStore::new(self.leaves).with_events(self.calendar)?;
        Ok((schedule, leaves))
    }
}
