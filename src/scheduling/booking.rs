//! Booking and cancelling sessions.
//!
//! [`book_session`] is the accept path: it checks a candidate, applies the
//! configured accept policy and either commits the session or hands back the
//! report together with the next free slot for the same participants.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use super::conflict_check::check_conflicts;
use super::slot_finder::find_next_available;
use crate::config::SchedulerConfig;
use crate::error::EngineResult;
use crate::models::{ConflictReport, ScheduledSession, SessionRequest, TimeSlot};
use crate::store::{LeaveStore, ScheduleStore, SessionWriter};

/// What happened to a booking attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum BookingOutcome {
    /// The session was committed.
    Booked {
        /// The new session.
        session: ScheduledSession,
        /// The check it passed. May hold advisory conflicts under a lenient policy.
        report: ConflictReport,
    },
    /// The accept policy refused the candidate.
    Rejected {
        /// The check that refused it.
        report: ConflictReport,
        /// First slot free for the same faculty, class-group and room.
        suggestion: Option<TimeSlot>,
    },
}

impl BookingOutcome {
    /// Returns true if a session was committed.
    pub fn is_booked(&self) -> bool {
        matches!(self, BookingOutcome::Booked { .. })
    }

    /// The conflict report behind the outcome.
    pub fn report(&self) -> &ConflictReport {
        match self {
            BookingOutcome::Booked { report, .. } | BookingOutcome::Rejected { report, .. } => {
                report
            }
        }
    }
}

/// Checks a candidate and commits it if the accept policy allows.
///
/// The workload ceiling and the accept policy come from `config`. A
/// rejected candidate gets a suggestion from
/// [`find_next_available`], which ignores leave and workload.
///
/// # Errors
///
/// * `InvalidSlot` if the request is malformed
/// * `LookupFailed` if a store cannot answer
/// * `ConstraintViolation` if another writer took the slot between the
///   check and the insert
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use timetable_engine::config::SchedulerConfig;
/// use timetable_engine::models::{SessionRequest, TimeSlot};
/// use timetable_engine::scheduling::{book_session, BookingOutcome};
/// use timetable_engine::store::{MemoryLeaveStore, MemoryScheduleStore};
///
/// let mut schedule = MemoryScheduleStore::new();
/// let leaves = MemoryLeaveStore::default();
/// let config = SchedulerConfig::default();
/// let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
/// let slot = TimeSlot::parse("Monday", "09:00").unwrap();
///
/// let first = SessionRequest::new(slot, "F1", "MATH101", "CSE-A", "R101");
/// assert!(book_session(&mut schedule, &leaves, &first, &config, today).unwrap().is_booked());
///
/// let second = SessionRequest::new(slot, "F1", "MATH101", "CSE-B", "R102");
/// match book_session(&mut schedule, &leaves, &second, &config, today).unwrap() {
///     BookingOutcome::Rejected { suggestion, .. } => {
///         assert_eq!(suggestion, Some(TimeSlot::parse("Monday", "10:00").unwrap()));
///     }
///     other => panic!("unexpected outcome: {:?}", other),
/// }
/// ```
pub fn book_session<S, L>(
    schedule: &mut S,
    leaves: &L,
    request: &SessionRequest,
    config: &SchedulerConfig,
    today: NaiveDate,
) -> EngineResult<BookingOutcome>
where
    S: ScheduleStore + SessionWriter,
    L: LeaveStore + ?Sized,
{
    let report = check_conflicts(
        request,
        &*schedule,
        leaves,
        config.workload.max_weekly_hours,
        today,
    )?;

    if report.is_schedulable(config.booking.accept_policy) {
        let session = schedule.insert_session(request)?;
        info!(
            session_id = %session.id,
            slot = %session.slot,
            faculty_id = %session.faculty_id,
            advisories = report.conflicts.len(),
            "Session booked"
        );
        return Ok(BookingOutcome::Booked { session, report });
    }

    let suggestion = find_next_available(
        &*schedule,
        &request.faculty_id,
        &request.class_group_id,
        &request.room_id,
    )?;
    warn!(
        slot = %request.slot(),
        faculty_id = %request.faculty_id,
        conflicts = ?report.kinds(),
        suggestion = ?suggestion.map(|s| s.to_string()),
        "Booking rejected"
    );
    Ok(BookingOutcome::Rejected { report, suggestion })
}

/// Removes a committed session.
///
/// # Errors
///
/// `SessionNotFound` if no session has the id.
pub fn cancel_session<S>(schedule: &mut S, id: Uuid) -> EngineResult<ScheduledSession>
where
    S: SessionWriter + ?Sized,
{
    let session = schedule.delete_session(id)?;
    info!(session_id = %id, slot = %session.slot, "Session cancelled");
    Ok(session)
}
