//! Slot occupancy lookups.
//!
//! Every "is this slot taken" question in the engine goes through
//! [`occupant`], so the conflict checker and the slot finder always agree on
//! what counts as a double booking.

use crate::error::EngineResult;
use crate::models::{ScheduledSession, SlotClaim, TimeSlot};
use crate::store::ScheduleStore;

/// Returns the session already holding `claim` in `slot`, if any.
pub fn occupant<S>(
    schedule: &S,
    slot: TimeSlot,
    claim: SlotClaim<'_>,
) -> EngineResult<Option<ScheduledSession>>
where
    S: ScheduleStore + ?Sized,
{
    schedule.find_session(slot, claim)
}

/// Returns true if nothing holds `claim` in `slot`.
///
/// # Example
///
/// ```
/// use timetable_engine::models::{SessionRequest, SlotClaim, TimeSlot};
/// use timetable_engine::scheduling::is_free;
/// use timetable_engine::store::{MemoryScheduleStore, SessionWriter};
///
/// let slot = TimeSlot::parse("Monday", "09:00").unwrap();
/// let mut schedule = MemoryScheduleStore::new();
/// schedule.insert_session(&SessionRequest::new(slot, "F1", "S1", "C1", "R1")).unwrap();
///
/// assert!(!is_free(&schedule, slot, SlotClaim::Room("R1")).unwrap());
/// assert!(is_free(&schedule, slot, SlotClaim::Room("R2")).unwrap());
/// ```
pub fn is_free<S>(schedule: &S, slot: TimeSlot, claim: SlotClaim<'_>) -> EngineResult<bool>
where
    S: ScheduleStore + ?Sized,
{
    Ok(occupant(schedule, slot, claim)?.is_none())
}

/// Returns true if every claim is free in `slot`.
///
/// Stops at the first taken claim.
pub fn all_free<S>(schedule: &S, slot: TimeSlot, claims: &[SlotClaim<'_>]) -> EngineResult<bool>
where
    S: ScheduleStore + ?Sized,
{
    for claim in claims {
        if !is_free(schedule, slot, *claim)? {
            return Ok(false);
        }
    }
    Ok(true)
}
