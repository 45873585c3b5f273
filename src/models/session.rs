//! Scheduled sessions and booking requests.
//!
//! A [`ScheduledSession`] is a committed assignment of faculty, subject,
//! class-group and room to one [`TimeSlot`]. A [`SessionRequest`] is the
//! candidate a caller wants checked before it becomes one.

use std::fmt;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Day, StartTime, TimeSlot};
use crate::error::{EngineError, EngineResult};

/// The entity whose occupancy of a slot is being asked about.
///
/// Each variant corresponds to one of the three uniqueness invariants on
/// scheduled sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotClaim<'a> {
    /// A faculty member teaching in the slot.
    Faculty(&'a str),
    /// A class-group attending in the slot.
    ClassGroup(&'a str),
    /// A room in use during the slot.
    Room(&'a str),
}

impl SlotClaim<'_> {
    /// Name of the store constraint guarding this claim.
    pub fn constraint(&self) -> &'static str {
        match self {
            SlotClaim::Faculty(_) => "uq_faculty_slot",
            SlotClaim::ClassGroup(_) => "uq_class_slot",
            SlotClaim::Room(_) => "uq_classroom_slot",
        }
    }

    /// The id of the claimed entity.
    pub fn entity(&self) -> &str {
        match self {
            SlotClaim::Faculty(id) | SlotClaim::ClassGroup(id) | SlotClaim::Room(id) => id,
        }
    }
}

impl fmt::Display for SlotClaim<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotClaim::Faculty(id) => write!(f, "faculty '{}'", id),
            SlotClaim::ClassGroup(id) => write!(f, "class-group '{}'", id),
            SlotClaim::Room(id) => write!(f, "room '{}'", id),
        }
    }
}

/// A committed session on the weekly timetable.
///
/// Sessions are never edited in place; moving one is a delete followed by a
/// new booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledSession {
    /// Unique identifier for the session. Generated when absent from input.
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    /// The faculty member teaching.
    pub faculty_id: String,
    /// The subject taught.
    pub subject_id: String,
    /// The class-group attending.
    pub class_group_id: String,
    /// The room used.
    pub room_id: String,
    /// The grid cell the session occupies.
    pub slot: TimeSlot,
}

impl ScheduledSession {
    /// Creates a session with a fresh id from an accepted request.
    pub fn from_request(request: &SessionRequest) -> Self {
        Self {
            id: Uuid::new_v4(),
            faculty_id: request.faculty_id.clone(),
            subject_id: request.subject_id.clone(),
            class_group_id: request.class_group_id.clone(),
            room_id: request.room_id.clone(),
            slot: request.slot(),
        }
    }

    /// Returns true if this session holds the given claim.
    ///
    /// The slot itself is not compared; callers match on slot separately.
    ///
    /// ```
    /// use timetable_engine::models::{ScheduledSession, SessionRequest, SlotClaim, TimeSlot};
    ///
    /// let slot = TimeSlot::parse("Monday", "09:00").unwrap();
    /// let request = SessionRequest::new(slot, "F1", "MATH101", "CSE-A", "R101");
    /// let session = ScheduledSession::from_request(&request);
    ///
    /// assert!(session.holds(SlotClaim::Room("R101")));
    /// assert!(!session.holds(SlotClaim::Faculty("F2")));
    /// ```
    pub fn holds(&self, claim: SlotClaim<'_>) -> bool {
        match claim {
            SlotClaim::Faculty(id) => self.faculty_id == id,
            SlotClaim::ClassGroup(id) => self.class_group_id == id,
            SlotClaim::Room(id) => self.room_id == id,
        }
    }

    /// Returns the wall-clock end of the session.
    pub fn end_time(&self) -> NaiveTime {
        self.slot.end_time()
    }
}

/// A candidate assignment to be checked for conflicts.
///
/// `end_time` is carried explicitly because callers often supply it from
/// form input; [`SessionRequest::validate`] rejects anything other than
/// start plus one hour.
///
/// # Example
///
/// ```
/// use timetable_engine::models::{SessionRequest, TimeSlot};
///
/// let slot = TimeSlot::parse("Tuesday", "11:00").unwrap();
/// let request = SessionRequest::new(slot, "F1", "PHY201", "ECE-B", "LAB2");
/// assert!(request.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRequest {
    /// The teaching day.
    pub day: Day,
    /// The grid start time.
    pub start: StartTime,
    /// The wall-clock end time.
    pub end_time: NaiveTime,
    /// The faculty member to teach.
    pub faculty_id: String,
    /// The class-group to attend.
    pub class_group_id: String,
    /// The room to use.
    pub room_id: String,
    /// The subject to teach.
    pub subject_id: String,
}

impl SessionRequest {
    /// Builds a request for a grid slot, with the end time derived from it.
    pub fn new(
        slot: TimeSlot,
        faculty_id: impl Into<String>,
        subject_id: impl Into<String>,
        class_group_id: impl Into<String>,
        room_id: impl Into<String>,
    ) -> Self {
        Self {
            day: slot.day,
            start: slot.start,
            end_time: slot.end_time(),
            faculty_id: faculty_id.into(),
            class_group_id: class_group_id.into(),
            room_id: room_id.into(),
            subject_id: subject_id.into(),
        }
    }

    /// Returns the grid slot requested.
    pub fn slot(&self) -> TimeSlot {
        TimeSlot::new(self.day, self.start)
    }

    /// Checks that the end time sits exactly one hour after the start.
    pub fn validate(&self) -> EngineResult<()> {
        if self.end_time != self.start.end_time() {
            return Err(EngineError::InvalidSlot {
                field: "end_time".to_string(),
                value: self.end_time.format("%H:%M").to_string(),
                message: format!(
                    "sessions last one hour; expected {} for a {} start",
                    self.start.end_time().format("%H:%M"),
                    self.start
                ),
            });
        }
        Ok(())
    }
}
