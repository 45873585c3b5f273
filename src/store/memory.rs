//! In-memory stores.
//!
//! [`MemoryScheduleStore`] and [`MemoryLeaveStore`] back tests, benchmarks
//! and small deployments. The schedule store enforces the same uniqueness
//! constraints a database would.

use chrono::NaiveDate;
use tracing::debug;
use uuid::Uuid;

use super::{CalendarStore, LeaveStore, ScheduleStore, SessionWriter};
use crate::error::{EngineError, EngineResult};
use crate::models::{
    CalendarEvent, Day, LeaveRecord, ScheduledSession, SessionRequest, SlotClaim, TimeSlot,
};

/// Sessions held in a vector, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct MemoryScheduleStore {
    sessions: Vec<ScheduledSession>,
}

impl MemoryScheduleStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from existing sessions, enforcing uniqueness.
    pub fn from_sessions(sessions: Vec<ScheduledSession>) -> EngineResult<Self> {
        let mut store = Self::new();
        for session in sessions {
            store.check_unique(&session)?;
            store.sessions.push(session);
        }
        Ok(store)
    }

    /// Number of sessions held.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Returns true if the store holds no sessions.
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    fn check_unique(&self, session: &ScheduledSession) -> EngineResult<()> {
        let claims = [
            SlotClaim::Faculty(&session.faculty_id),
            SlotClaim::ClassGroup(&session.class_group_id),
            SlotClaim::Room(&session.room_id),
        ];
        for claim in claims {
            if self.lookup(session.slot, claim).is_some() {
                return Err(EngineError::ConstraintViolation {
                    constraint: claim.constraint().to_string(),
                    slot: session.slot.to_string(),
                    entity: claim.entity().to_string(),
                });
            }
        }
        Ok(())
    }

    fn lookup(&self, slot: TimeSlot, claim: SlotClaim<'_>) -> Option<&ScheduledSession> {
        self.sessions
            .iter()
            .find(|s| s.slot == slot && s.holds(claim))
    }
}

impl ScheduleStore for MemoryScheduleStore {
    fn find_session(
        &self,
        slot: TimeSlot,
        claim: SlotClaim<'_>,
    ) -> EngineResult<Option<ScheduledSession>> {
        Ok(self.lookup(slot, claim).cloned())
    }

    fn sessions_for_faculty(&self, faculty_id: &str) -> EngineResult<Vec<ScheduledSession>> {
        Ok(self
            .sessions
            .iter()
            .filter(|s| s.faculty_id == faculty_id)
            .cloned()
            .collect())
    }

    fn sessions_on(&self, day: Day) -> EngineResult<Vec<ScheduledSession>> {
        Ok(self
            .sessions
            .iter()
            .filter(|s| s.slot.day == day)
            .cloned()
            .collect())
    }

    fn all_sessions(&self) -> EngineResult<Vec<ScheduledSession>> {
        Ok(self.sessions.clone())
    }
}

impl SessionWriter for MemoryScheduleStore {
    fn insert_session(&mut self, request: &SessionRequest) -> EngineResult<ScheduledSession> {
        request.validate()?;
        let session = ScheduledSession::from_request(request);
        self.check_unique(&session)?;
        debug!(session_id = %session.id, slot = %session.slot, "Inserted session");
        self.sessions.push(session.clone());
        Ok(session)
    }

    fn delete_session(&mut self, id: Uuid) -> EngineResult<ScheduledSession> {
        let index = self
            .sessions
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| EngineError::SessionNotFound { id: id.to_string() })?;
        debug!(session_id = %id, "Deleted session");
        Ok(self.sessions.remove(index))
    }
}

/// Leave records and academic calendar events held in vectors.
#[derive(Debug, Clone, Default)]
pub struct MemoryLeaveStore {
    leaves: Vec<LeaveRecord>,
    events: Vec<CalendarEvent>,
}

impl MemoryLeaveStore {
    /// Creates a store over the given records, with an empty calendar.
    pub fn new(leaves: Vec<LeaveRecord>) -> Self {
        Self {
            leaves,
            events: Vec::new(),
        }
    }

    /// Replaces the calendar, one event per date.
    pub fn with_events(mut self, events: Vec<CalendarEvent>) -> EngineResult<Self> {
        self.events.clear();
        for event in events {
            self.push_event(event)?;
        }
        Ok(self)
    }

    /// Adds a record.
    pub fn push(&mut self, leave: LeaveRecord) {
        self.leaves.push(leave);
    }

    /// Adds a calendar event, rejecting a second event on the same date.
    pub fn push_event(&mut self, event: CalendarEvent) -> EngineResult<()> {
        if let Some(existing) = self.events.iter().find(|e| e.date == event.date) {
            return Err(EngineError::ConstraintViolation {
                constraint: "uq_calendar_date".to_string(),
                slot: event.date.to_string(),
                entity: existing.description.clone(),
            });
        }
        debug!(date = %event.date, event_type = ?event.event_type, "Added calendar event");
        self.events.push(event);
        Ok(())
    }
}

impl LeaveStore for MemoryLeaveStore {
    fn outstanding_leaves(
        &self,
        faculty_id: &str,
        today: NaiveDate,
    ) -> EngineResult<Vec<LeaveRecord>> {
        Ok(self
            .leaves
            .iter()
            .filter(|l| l.faculty_id == faculty_id && l.is_outstanding(today))
            .cloned()
            .collect())
    }

    fn approved_leaves_on(&self, date: NaiveDate) -> EngineResult<Vec<LeaveRecord>> {
        Ok(self
            .leaves
            .iter()
            .filter(|l| l.is_approved() && l.covers(date))
            .cloned()
            .collect())
    }
}

impl CalendarStore for MemoryLeaveStore {
    fn event_on(&self, date: NaiveDate) -> EngineResult<Option<CalendarEvent>> {
        Ok(self.events.iter().find(|e| e.date == date).cloned())
    }
}
