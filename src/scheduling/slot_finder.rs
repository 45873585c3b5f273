//! Next-free-slot search.
//!
//! The finder walks the grid Monday 09:00 first and returns the first slot
//! where none of the given claims is taken. It only guards against double
//! booking: leave and workload are not consulted, so a suggested slot can
//! still draw conflicts from [`check_conflicts`](super::check_conflicts).

use super::availability::all_free;
use crate::error::EngineResult;
use crate::models::{SlotClaim, TimeSlot};
use crate::store::ScheduleStore;

/// Finds the first grid slot where every claim is free.
///
/// At most 30 slots are examined; `None` means the grid is exhausted.
pub fn find_first_free<S>(schedule: &S, claims: &[SlotClaim<'_>]) -> EngineResult<Option<TimeSlot>>
where
    S: ScheduleStore + ?Sized,
{
    for slot in TimeSlot::grid() {
        if all_free(schedule, slot, claims)? {
            return Ok(Some(slot));
        }
    }
    Ok(None)
}

/// Finds the first slot free for a faculty member, a class-group and a room.
///
/// # Example
///
/// ```
/// use timetable_engine::models::{Day, SessionRequest, StartTime, TimeSlot};
/// use timetable_engine::scheduling::find_next_available;
/// use timetable_engine::store::{MemoryScheduleStore, SessionWriter};
///
/// let mut schedule = MemoryScheduleStore::new();
/// assert_eq!(
///     find_next_available(&schedule, "F1", "C1", "R1").unwrap(),
///     Some(TimeSlot::new(Day::Monday, StartTime::Nine))
/// );
///
/// // Room R1 is taken at Monday 09:00 by someone else
/// let monday_nine = TimeSlot::new(Day::Monday, StartTime::Nine);
/// schedule.insert_session(&SessionRequest::new(monday_nine, "F2", "S1", "C2", "R1")).unwrap();
/// assert_eq!(
///     find_next_available(&schedule, "F1", "C1", "R1").unwrap(),
///     Some(TimeSlot::new(Day::Monday, StartTime::Ten))
/// );
/// ```
pub fn find_next_available<S>(
    schedule: &S,
    faculty_id: &str,
    class_group_id: &str,
    room_id: &str,
) -> EngineResult<Option<TimeSlot>>
where
    S: ScheduleStore + ?Sized,
{
    find_first_free(
        schedule,
        &[
            SlotClaim::Faculty(faculty_id),
            SlotClaim::ClassGroup(class_group_id),
            SlotClaim::Room(room_id),
        ],
    )
}
