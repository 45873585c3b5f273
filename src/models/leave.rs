//! Faculty leave records.
//!
//! The engine never changes leave records; it only reads the approved ones.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Where a leave request sits in its approval workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LeaveStatus {
    /// Submitted and awaiting a decision.
    Pending,
    /// Approved; the only status the engine acts on.
    Approved,
    /// Turned down.
    Rejected,
}

/// A leave request for a faculty member over an inclusive date range.
///
/// # Example
///
/// ```
/// use timetable_engine::models::{LeaveRecord, LeaveStatus};
/// use chrono::NaiveDate;
///
/// let leave = LeaveRecord {
///     faculty_id: "F1".to_string(),
///     start_date: NaiveDate::from_ymd_opt(2026, 10, 20).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2026, 10, 22).unwrap(),
///     reason: "Conference".to_string(),
///     status: LeaveStatus::Approved,
/// };
///
/// let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
/// assert!(leave.is_outstanding(today));
/// assert!(!leave.covers(today));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRecord {
    /// The faculty member on leave.
    pub faculty_id: String,
    /// First day of leave (inclusive).
    pub start_date: NaiveDate,
    /// Last day of leave (inclusive).
    pub end_date: NaiveDate,
    /// Free-text reason given with the request.
    pub reason: String,
    /// Approval status.
    pub status: LeaveStatus,
}

impl LeaveRecord {
    /// Returns true if the request has been approved.
    pub fn is_approved(&self) -> bool {
        self.status == LeaveStatus::Approved
    }

    /// Approved and not yet fully elapsed as of `today`.
    pub fn is_outstanding(&self, today: NaiveDate) -> bool {
        self.is_approved() && self.end_date >= today
    }

    /// Returns true if `date` falls inside the leave range.
    pub fn covers(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn leave(status: LeaveStatus) -> LeaveRecord {
        LeaveRecord {
            faculty_id: "F1".to_string(),
            start_date: date(2026, 10, 12),
            end_date: date(2026, 10, 19),
            reason: "Medical".to_string(),
            status,
        }
    }

    #[test]
    fn test_leave_ending_today_is_outstanding() {
        assert!(leave(LeaveStatus::Approved).is_outstanding(date(2026, 10, 19)));
    }

    #[test]
    fn test_leave_ended_yesterday_is_not_outstanding() {
        assert!(!leave(LeaveStatus::Approved).is_outstanding(date(2026, 10, 20)));
    }

    #[test]
    fn test_pending_and_rejected_are_never_outstanding() {
        let today = date(2026, 10, 1);
        assert!(!leave(LeaveStatus::Pending).is_outstanding(today));
        assert!(!leave(LeaveStatus::Rejected).is_outstanding(today));
    }

    #[test]
    fn test_covers_is_inclusive() {
        let record = leave(LeaveStatus::Approved);
        assert!(record.covers(date(2026, 10, 12)));
        assert!(record.covers(date(2026, 10, 19)));
        assert!(!record.covers(date(2026, 10, 11)));
        assert!(!record.covers(date(2026, 10, 20)));
    }

    #[test]
    fn test_status_deserialization() {
        let status: LeaveStatus = serde_json::from_str("\"Approved\"").unwrap();
        assert_eq!(status, LeaveStatus::Approved);
        assert!(serde_json::from_str::<LeaveStatus>("\"Cancelled\"").is_err());
    }
}
