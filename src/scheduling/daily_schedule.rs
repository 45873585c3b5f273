//! Per-date timetable view.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::{CalendarEvent, Day, ScheduledSession};
use crate::store::{CalendarStore, LeaveStore, ScheduleStore};

/// One session on a date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyEntry {
    /// The weekly session falling on the date.
    pub session: ScheduledSession,
    /// Set when the faculty member is on approved leave that day.
    pub is_blocked: bool,
}

/// The sessions a calendar date resolves to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailySchedule {
    /// The date asked for.
    pub date: NaiveDate,
    /// Its grid day, or `None` on a weekend.
    pub day: Option<Day>,
    /// True on Saturday and Sunday.
    pub is_weekend: bool,
    /// The academic calendar event for the date. Weekends without a
    /// recorded event carry a "Weekend" holiday.
    pub event: Option<CalendarEvent>,
    /// Sessions ordered by start time, then room.
    pub entries: Vec<DailyEntry>,
}

impl DailySchedule {
    /// Entries whose faculty member is on leave.
    pub fn blocked(&self) -> impl Iterator<Item = &DailyEntry> {
        self.entries.iter().filter(|e| e.is_blocked)
    }

    /// True when the calendar marks the date as a holiday.
    pub fn is_holiday(&self) -> bool {
        self.event.as_ref().is_some_and(|e| e.is_holiday)
    }

    /// True when the calendar marks the date as an examination day.
    pub fn is_exam(&self) -> bool {
        self.event.as_ref().is_some_and(|e| e.is_exam)
    }
}

/// Resolves a calendar date to the weekly sessions taught on it.
///
/// Holidays and exam days still list the weekly sessions; the calendar
/// event is attached for the caller to act on.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use timetable_engine::models::{SessionRequest, TimeSlot};
/// use timetable_engine::scheduling::daily_schedule;
/// use timetable_engine::store::{MemoryLeaveStore, MemoryScheduleStore, SessionWriter};
///
/// let mut schedule = MemoryScheduleStore::new();
/// let slot = TimeSlot::parse("Monday", "09:00").unwrap();
/// schedule.insert_session(&SessionRequest::new(slot, "F1", "S1", "C1", "R1")).unwrap();
///
/// let monday = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
/// let view = daily_schedule(&schedule, &MemoryLeaveStore::default(), monday).unwrap();
/// assert_eq!(view.entries.len(), 1);
///
/// let saturday = NaiveDate::from_ymd_opt(2026, 10, 24).unwrap();
/// let weekend = daily_schedule(&schedule, &MemoryLeaveStore::default(), saturday).unwrap();
/// assert!(weekend.is_weekend);
/// assert!(weekend.is_holiday());
/// ```
pub fn daily_schedule<S, L>(
    schedule: &S,
    leaves: &L,
    date: NaiveDate,
) -> EngineResult<DailySchedule>
where
    S: ScheduleStore + ?Sized,
    L: LeaveStore + CalendarStore + ?Sized,
{
    let event = match leaves.event_on(date)? {
        Some(event) => Some(event),
        None => CalendarEvent::weekend(date),
    };

    let Some(day) = Day::for_date(date) else {
        return Ok(DailySchedule {
            date,
            day: None,
            is_weekend: true,
            event,
            entries: Vec::new(),
        });
    };

    let on_leave: HashSet<String> = leaves
        .approved_leaves_on(date)?
        .into_iter()
        .map(|l| l.faculty_id)
        .collect();

    let mut sessions = schedule.sessions_on(day)?;
    sessions.sort_by(|a, b| {
        a.slot
            .start
            .cmp(&b.slot.start)
            .then_with(|| a.room_id.cmp(&b.room_id))
    });

    let entries = sessions
        .into_iter()
        .map(|session| DailyEntry {
            is_blocked: on_leave.contains(&session.faculty_id),
            session,
        })
        .collect();

    Ok(DailySchedule {
        date,
        day: Some(day),
        is_weekend: false,
        event,
        entries,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        CalendarEventType, LeaveRecord, LeaveStatus, SessionRequest, StartTime, TimeSlot,
    };
    use crate::store::{MemoryLeaveStore, MemoryScheduleStore, SessionWriter};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn seeded() -> MemoryScheduleStore {
        let mut schedule = MemoryScheduleStore::new();
        for (start, faculty, room) in [
            (StartTime::Fourteen, "F1", "R1"),
            (StartTime::Nine, "F2", "R2"),
            (StartTime::Nine, "F3", "R1"),
        ] {
            schedule
                .insert_session(&SessionRequest::new(
                    TimeSlot::new(Day::Tuesday, start),
                    faculty,
                    "SUB",
                    format!("C-{}", faculty),
                    room,
                ))
                .unwrap();
        }
        schedule
    }

    #[test]
    fn test_entries_sorted_by_start_then_room() {
        let schedule = seeded();
        let view = daily_schedule(&schedule, &MemoryLeaveStore::default(), date(2026, 10, 20))
            .unwrap();

        assert_eq!(view.day, Some(Day::Tuesday));
        let order: Vec<&str> = view
            .entries
            .iter()
            .map(|e| e.session.faculty_id.as_str())
            .collect();
        assert_eq!(order, vec!["F3", "F2", "F1"]);
    }

    #[test]
    fn test_only_approved_covering_leave_blocks() {
        let schedule = seeded();
        let leaves = MemoryLeaveStore::new(vec![
            LeaveRecord {
                faculty_id: "F1".to_string(),
                start_date: date(2026, 10, 19),
                end_date: date(2026, 10, 20),
                reason: "Conference".to_string(),
                status: LeaveStatus::Approved,
            },
            LeaveRecord {
                faculty_id: "F2".to_string(),
                start_date: date(2026, 10, 20),
                end_date: date(2026, 10, 20),
                reason: "Personal".to_string(),
                status: LeaveStatus::Pending,
            },
            LeaveRecord {
                faculty_id: "F3".to_string(),
                start_date: date(2026, 10, 21),
                end_date: date(2026, 10, 22),
                reason: "Medical".to_string(),
                status: LeaveStatus::Approved,
            },
        ]);

        let view = daily_schedule(&schedule, &leaves, date(2026, 10, 20)).unwrap();
        let blocked: Vec<&str> = view
            .blocked()
            .map(|e| e.session.faculty_id.as_str())
            .collect();
        assert_eq!(blocked, vec!["F1"]);
    }

    #[test]
    fn test_weekend_is_empty() {
        let view = daily_schedule(&seeded(), &MemoryLeaveStore::default(), date(2026, 10, 25))
            .unwrap();
        assert!(view.is_weekend);
        assert_eq!(view.day, None);
        assert!(view.entries.is_empty());
    }

    #[test]
    fn test_day_without_sessions() {
        let view = daily_schedule(&seeded(), &MemoryLeaveStore::default(), date(2026, 10, 23))
            .unwrap();
        assert_eq!(view.day, Some(Day::Friday));
        assert!(!view.is_weekend);
        assert!(view.entries.is_empty());
        assert_eq!(view.event, None);
    }

    #[test]
    fn test_weekday_holiday_keeps_sessions_and_carries_event() {
        let holiday =
            CalendarEvent::new(date(2026, 10, 20), "Founders' Day", CalendarEventType::Holiday);
        let leaves = MemoryLeaveStore::default()
            .with_events(vec![holiday.clone()])
            .unwrap();

        let view = daily_schedule(&seeded(), &leaves, date(2026, 10, 20)).unwrap();
        assert_eq!(view.day, Some(Day::Tuesday));
        assert!(!view.is_weekend);
        assert!(view.is_holiday());
        assert!(!view.is_exam());
        assert_eq!(view.event, Some(holiday));
        assert_eq!(view.entries.len(), 3);
    }

    #[test]
    fn test_exam_day_is_flagged() {
        let exams =
            CalendarEvent::new(date(2026, 10, 27), "Mid-semester exams", CalendarEventType::Exam);
        let leaves = MemoryLeaveStore::default().with_events(vec![exams]).unwrap();

        let view = daily_schedule(&seeded(), &leaves, date(2026, 10, 27)).unwrap();
        assert!(view.is_exam());
        assert!(!view.is_holiday());
        match view.event {
            Some(event) => {
                assert_eq!(event.description, "Mid-semester exams");
                assert_eq!(event.event_type, CalendarEventType::Exam);
            }
            other => panic!("Expected exam event, got {:?}", other),
        }
        assert_eq!(view.entries.len(), 3);
    }

    #[test]
    fn test_weekend_without_event_is_a_weekend_holiday() {
        let view = daily_schedule(&seeded(), &MemoryLeaveStore::default(), date(2026, 10, 24))
            .unwrap();
        assert!(view.is_weekend);
        assert!(view.is_holiday());
        match view.event {
            Some(event) => {
                assert_eq!(event.description, "Weekend");
                assert_eq!(event.event_type, CalendarEventType::Holiday);
            }
            other => panic!("Expected weekend holiday, got {:?}", other),
        }
    }

    #[test]
    fn test_recorded_weekend_event_wins() {
        let fair = CalendarEvent::new(date(2026, 10, 24), "Project fair", CalendarEventType::Event);
        let leaves = MemoryLeaveStore::default()
            .with_events(vec![fair.clone()])
            .unwrap();

        let view = daily_schedule(&seeded(), &leaves, date(2026, 10, 24)).unwrap();
        assert!(view.is_weekend);
        assert!(!view.is_holiday());
        assert_eq!(view.event, Some(fair));
        assert!(view.entries.is_empty());
    }
}
