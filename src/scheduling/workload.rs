//! Faculty workload calculation.
//!
//! Every grid slot lasts exactly one hour, so a faculty member's weekly
//! workload in hours is simply the number of sessions they teach.

use serde::{Deserialize, Serialize};

use crate::config::WorkloadSettings;
use crate::error::EngineResult;
use crate::store::ScheduleStore;

/// Counts the weekly teaching hours of a faculty member.
///
/// # Errors
///
/// Propagates the store's `LookupFailed` error unchanged.
///
/// # Example
///
/// ```
/// use timetable_engine::models::{SessionRequest, TimeSlot};
/// use timetable_engine::scheduling::compute_workload;
/// use timetable_engine::store::{MemoryScheduleStore, SessionWriter};
///
/// let mut schedule = MemoryScheduleStore::new();
/// for (day, start) in [("Monday", "09:00"), ("Monday", "10:00"), ("Friday", "15:00")] {
///     let slot = TimeSlot::parse(day, start).unwrap();
///     schedule.insert_session(&SessionRequest::new(slot, "F1", "S1", "C1", "R1")).unwrap();
/// }
///
/// assert_eq!(compute_workload(&schedule, "F1").unwrap(), 3);
/// assert_eq!(compute_workload(&schedule, "F2").unwrap(), 0);
/// ```
pub fn compute_workload<S>(schedule: &S, faculty_id: &str) -> EngineResult<u32>
where
    S: ScheduleStore + ?Sized,
{
    let sessions = schedule.sessions_for_faculty(faculty_id)?;
    Ok(u32::try_from(sessions.len()).unwrap_or(u32::MAX))
}

/// How a faculty member's load compares with the configured bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkloadStatus {
    /// Fewer hours than `underutilized_below`.
    Underutilized,
    /// Within the bands.
    Normal,
    /// More hours than `max_weekly_hours`.
    Overloaded,
}

/// Classifies a weekly hour count against the workload bands.
///
/// A faculty member sitting exactly at the ceiling is `Normal`; only hours
/// strictly above it are `Overloaded`.
pub fn classify_workload(hours: u32, settings: &WorkloadSettings) -> WorkloadStatus {
    if hours > settings.max_weekly_hours {
        WorkloadStatus::Overloaded
    } else if hours < settings.underutilized_below {
        WorkloadStatus::Underutilized
    } else {
        WorkloadStatus::Normal
    }
}

/// One row of a workload ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadEntry {
    /// The faculty member.
    pub faculty_id: String,
    /// Weekly teaching hours.
    pub hours: u32,
    /// Band the hours fall in.
    pub status: WorkloadStatus,
}

/// Ranks a roster of faculty by weekly hours, busiest first.
///
/// Ties are broken by faculty id so the ranking is stable. At most `top_n`
/// entries are returned.
pub fn rank_workloads<S>(
    schedule: &S,
    roster: &[&str],
    top_n: usize,
    settings: &WorkloadSettings,
) -> EngineResult<Vec<WorkloadEntry>>
where
    S: ScheduleStore + ?Sized,
{
    let mut entries = roster
        .iter()
        .map(|faculty_id| {
            let hours = compute_workload(schedule, faculty_id)?;
            Ok(WorkloadEntry {
                faculty_id: faculty_id.to_string(),
                hours,
                status: classify_workload(hours, settings),
            })
        })
        .collect::<EngineResult<Vec<_>>>()?;

    entries.sort_by(|a, b| {
        b.hours
            .cmp(&a.hours)
            .then_with(|| a.faculty_id.cmp(&b.faculty_id))
    });
    entries.truncate(top_n);
    Ok(entries)
}
