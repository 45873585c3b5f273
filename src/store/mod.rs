//! Store contracts consumed by the engine.
//!
//! Persistence lives outside the engine. These traits describe the lookups
//! the checker, slot finder and views need, and the write side the booking
//! flow uses. Implementations must report failures as
//! [`EngineError::LookupFailed`](crate::error::EngineError::LookupFailed)
//! rather than an empty answer.

mod memory;
mod snapshot;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::error::EngineResult;
use crate::models::{
    CalendarEvent, Day, LeaveRecord, ScheduledSession, SessionRequest, SlotClaim, TimeSlot,
};

pub use memory::{MemoryLeaveStore, MemoryScheduleStore};
pub use snapshot::StoreSnapshot;

/// Read access to committed sessions.
pub trait ScheduleStore {
    /// Returns the session holding `claim` in `slot`, if any.
    fn find_session(
        &self,
        slot: TimeSlot,
        claim: SlotClaim<'_>,
    ) -> EngineResult<Option<ScheduledSession>>;

    /// Returns every session taught by the faculty member.
    fn sessions_for_faculty(&self, faculty_id: &str) -> EngineResult<Vec<ScheduledSession>>;

    /// Returns every session on the given day.
    fn sessions_on(&self, day: Day) -> EngineResult<Vec<ScheduledSession>>;

    /// Returns every session.
    fn all_sessions(&self) -> EngineResult<Vec<ScheduledSession>>;
}

/// Write access to committed sessions.
///
/// Implementations must enforce the three slot uniqueness invariants at
/// insert time, so a losing concurrent writer fails instead of double
/// booking.
pub trait SessionWriter {
    /// Commits a new session built from an accepted request.
    fn insert_session(&mut self, request: &SessionRequest) -> EngineResult<ScheduledSession>;

    /// Removes a session by id, returning it.
    fn delete_session(&mut self, id: Uuid) -> EngineResult<ScheduledSession>;
}

/// Read access to leave records.
pub trait LeaveStore {
    /// Approved leave for the faculty member whose end date is on or after `today`.
    fn outstanding_leaves(
        &self,
        faculty_id: &str,
        today: NaiveDate,
    ) -> EngineResult<Vec<LeaveRecord>>;

    /// Approved leave of any faculty member whose range contains `date`.
    fn approved_leaves_on(&self, date: NaiveDate) -> EngineResult<Vec<LeaveRecord>>;
}

/// Read access to the academic calendar.
pub trait CalendarStore {
    /// The event recorded for `date`, if any.
    fn event_on(&self, date: NaiveDate) -> EngineResult<Option<CalendarEvent>>;
}
