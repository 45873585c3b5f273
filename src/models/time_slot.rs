//! The fixed weekly teaching grid.
//!
//! This module defines [`Day`], [`StartTime`] and [`TimeSlot`]. The grid is
//! closed: five teaching days and six one-hour start times, 30 slots in all.
//! Anything outside it is rejected when parsed.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A teaching day of the week.
///
/// Variants are declared in scan order, so the derived `Ord` matches the
/// order the slot finder walks the grid.
///
/// # Example
///
/// ```
/// use timetable_engine::models::Day;
///
/// let day: Day = "Wednesday".parse().unwrap();
/// assert_eq!(day, Day::Wednesday);
/// assert!("Saturday".parse::<Day>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Day {
    /// Monday.
    Monday,
    /// Tuesday.
    Tuesday,
    /// Wednesday.
    Wednesday,
    /// Thursday.
    Thursday,
    /// Friday.
    Friday,
}

impl Day {
    /// All teaching days in scan order.
    pub const ALL: [Day; 5] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
    ];

    /// Returns the name used in messages and serialized data.
    pub fn as_str(&self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
        }
    }

    /// Maps a chrono weekday onto the grid. Weekends have no grid day.
    pub fn from_weekday(weekday: Weekday) -> Option<Day> {
        match weekday {
            Weekday::Mon => Some(Day::Monday),
            Weekday::Tue => Some(Day::Tuesday),
            Weekday::Wed => Some(Day::Wednesday),
            Weekday::Thu => Some(Day::Thursday),
            Weekday::Fri => Some(Day::Friday),
            Weekday::Sat | Weekday::Sun => None,
        }
    }

    /// Returns the grid day a calendar date falls on, if any.
    ///
    /// ```
    /// use timetable_engine::models::Day;
    /// use chrono::NaiveDate;
    ///
    /// // 2026-10-19 is a Monday, 2026-10-24 a Saturday
    /// let monday = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
    /// let saturday = NaiveDate::from_ymd_opt(2026, 10, 24).unwrap();
    /// assert_eq!(Day::for_date(monday), Some(Day::Monday));
    /// assert_eq!(Day::for_date(saturday), None);
    /// ```
    pub fn for_date(date: NaiveDate) -> Option<Day> {
        Self::from_weekday(date.weekday())
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Day {
    type Err = EngineError;

    fn from_str(s: &str) -> EngineResult<Self> {
        Day::ALL
            .into_iter()
            .find(|day| day.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| EngineError::InvalidSlot {
                field: "day".to_string(),
                value: s.to_string(),
                message: "expected a teaching day from Monday to Friday".to_string(),
            })
    }
}

impl TryFrom<String> for Day {
    type Error = EngineError;

    fn try_from(value: String) -> EngineResult<Self> {
        value.parse()
    }
}

/// One of the six start times on the grid.
///
/// There is no 13:00 slot; the grid breaks for lunch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum StartTime {
    /// 09:00 to 10:00.
    #[serde(rename = "09:00")]
    Nine,
    /// 10:00 to 11:00.
    #[serde(rename = "10:00")]
    Ten,
    /// 11:00 to 12:00.
    #[serde(rename = "11:00")]
    Eleven,
    /// 12:00 to 13:00.
    #[serde(rename = "12:00")]
    Twelve,
    /// 14:00 to 15:00.
    #[serde(rename = "14:00")]
    Fourteen,
    /// 15:00 to 16:00.
    #[serde(rename = "15:00")]
    Fifteen,
}

impl StartTime {
    /// All start times in scan order.
    pub const ALL: [StartTime; 6] = [
        StartTime::Nine,
        StartTime::Ten,
        StartTime::Eleven,
        StartTime::Twelve,
        StartTime::Fourteen,
        StartTime::Fifteen,
    ];

    fn hour(&self) -> u32 {
        match self {
            StartTime::Nine => 9,
            StartTime::Ten => 10,
            StartTime::Eleven => 11,
            StartTime::Twelve => 12,
            StartTime::Fourteen => 14,
            StartTime::Fifteen => 15,
        }
    }

    /// Returns the wall-clock start of the slot.
    pub fn time(&self) -> NaiveTime {
        NaiveTime::from_hms_opt(self.hour(), 0, 0).expect("Valid grid hour")
    }

    /// Returns the wall-clock end of the slot, one hour after the start.
    pub fn end_time(&self) -> NaiveTime {
        NaiveTime::from_hms_opt(self.hour() + 1, 0, 0).expect("Valid grid hour")
    }

    /// Looks up the grid start time matching a wall-clock time.
    ///
    /// ```
    /// use timetable_engine::models::StartTime;
    /// use chrono::NaiveTime;
    ///
    /// let ten = NaiveTime::from_hms_opt(10, 0, 0).unwrap();
    /// assert_eq!(StartTime::from_time(ten).unwrap(), StartTime::Ten);
    ///
    /// let lunch = NaiveTime::from_hms_opt(13, 0, 0).unwrap();
    /// assert!(StartTime::from_time(lunch).is_err());
    /// ```
    pub fn from_time(time: NaiveTime) -> EngineResult<Self> {
        StartTime::ALL
            .into_iter()
            .find(|start| start.time() == time)
            .ok_or_else(|| EngineError::InvalidSlot {
                field: "start_time".to_string(),
                value: time.format("%H:%M").to_string(),
                message: "not a grid start time".to_string(),
            })
    }
}

impl fmt::Display for StartTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:00", self.hour())
    }
}

impl FromStr for StartTime {
    type Err = EngineError;

    fn from_str(s: &str) -> EngineResult<Self> {
        let time = NaiveTime::parse_from_str(s.trim(), "%H:%M").map_err(|e| {
            EngineError::InvalidSlot {
                field: "start_time".to_string(),
                value: s.to_string(),
                message: format!("expected HH:MM ({})", e),
            }
        })?;
        Self::from_time(time)
    }
}

impl TryFrom<String> for StartTime {
    type Error = EngineError;

    fn try_from(value: String) -> EngineResult<Self> {
        value.parse()
    }
}

/// A single cell of the weekly grid.
///
/// # Example
///
/// ```
/// use timetable_engine::models::{Day, StartTime, TimeSlot};
///
/// let slot = TimeSlot::parse("Monday", "09:00").unwrap();
/// assert_eq!(slot, TimeSlot::new(Day::Monday, StartTime::Nine));
/// assert_eq!(slot.to_string(), "Monday 09:00");
/// assert_eq!(TimeSlot::grid().count(), 30);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TimeSlot {
    /// The teaching day.
    pub day: Day,
    /// The start time on that day.
    pub start: StartTime,
}

impl TimeSlot {
    /// Creates a slot from its parts.
    pub fn new(day: Day, start: StartTime) -> Self {
        Self { day, start }
    }

    /// Parses a slot from a day name and an `HH:MM` start time.
    pub fn parse(day: &str, start: &str) -> EngineResult<Self> {
        Ok(Self::new(day.parse()?, start.parse()?))
    }

    /// Returns the wall-clock end of the slot.
    pub fn end_time(&self) -> NaiveTime {
        self.start.end_time()
    }

    /// Iterates every slot on the grid, Monday 09:00 first, day by day.
    pub fn grid() -> impl Iterator<Item = TimeSlot> {
        Day::ALL.into_iter().flat_map(|day| {
            StartTime::ALL
                .into_iter()
                .map(move |start| TimeSlot::new(day, start))
        })
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.day, self.start)
    }
}
