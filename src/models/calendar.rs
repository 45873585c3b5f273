//! Academic calendar events.
//!
//! At most one event is recorded per date. Weekends without a recorded
//! event are treated as a "Weekend" holiday.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Day;

/// The category an academic calendar entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CalendarEventType {
    /// No teaching.
    Holiday,
    /// Examination day.
    Exam,
    /// Any other dated event.
    Event,
}

/// A dated entry in the academic calendar.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use timetable_engine::models::{CalendarEvent, CalendarEventType};
///
/// let date = NaiveDate::from_ymd_opt(2026, 11, 9).unwrap();
/// let event = CalendarEvent::new(date, "Founders' Day", CalendarEventType::Holiday);
/// assert!(event.is_holiday);
/// assert!(!event.is_exam);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    /// The date the event falls on.
    pub date: NaiveDate,
    /// Free-text description shown with the day's schedule.
    pub description: String,
    /// Set for holidays.
    #[serde(default)]
    pub is_holiday: bool,
    /// Set for examination days.
    #[serde(default)]
    pub is_exam: bool,
    /// Event category.
    #[serde(rename = "type")]
    pub event_type: CalendarEventType,
}

impl CalendarEvent {
    /// Creates an event with its holiday and exam flags derived from the type.
    pub fn new(
        date: NaiveDate,
        description: impl Into<String>,
        event_type: CalendarEventType,
    ) -> Self {
        Self {
            date,
            description: description.into(),
            is_holiday: event_type == CalendarEventType::Holiday,
            is_exam: event_type == CalendarEventType::Exam,
            event_type,
        }
    }

    /// The holiday implied by a Saturday or Sunday, or `None` on a teaching day.
    pub fn weekend(date: NaiveDate) -> Option<Self> {
        match Day::for_date(date) {
            Some(_) => None,
            None => Some(Self::new(date, "Weekend", CalendarEventType::Holiday)),
        }
    }
}
