//! Conflict report models.
//!
//! This module contains the [`ConflictReport`] type and its associated
//! structures: the tagged [`Conflict`] items a check produces and the
//! [`AuditStep`] trail recording each rule the checker evaluated.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::SessionRequest;

/// How seriously a conflict bears on the booking decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Booking would break a scheduling rule.
    Blocking,
    /// Worth surfacing to the person booking, but not a rule violation.
    Advisory,
}

/// The rule that produced a conflict.
///
/// Variants are declared in the order the checker evaluates them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictKind {
    /// The faculty member already teaches in the slot.
    FacultyClash,
    /// The class-group already has a session in the slot.
    ClassGroupClash,
    /// The room is already in use in the slot.
    RoomClash,
    /// The faculty member has approved leave that has not yet elapsed.
    LeaveExposure,
    /// The faculty member is at or over the weekly workload ceiling.
    WorkloadCeiling,
}

impl ConflictKind {
    /// The severity this kind of conflict always carries.
    pub fn severity(&self) -> Severity {
        match self {
            ConflictKind::LeaveExposure => Severity::Advisory,
            _ => Severity::Blocking,
        }
    }
}

/// One reason a candidate cannot (or should not) be booked.
///
/// # Example
///
/// ```
/// use timetable_engine::models::{Conflict, ConflictKind, Severity};
///
/// let message = "Classroom R101 is occupied by CSE-A (F2).";
/// let conflict = Conflict::new(ConflictKind::RoomClash, message);
/// assert_eq!(conflict.severity, Severity::Blocking);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conflict {
    /// The rule that fired.
    pub kind: ConflictKind,
    /// Blocking or advisory.
    pub severity: Severity,
    /// Human-readable description.
    pub message: String,
}

impl Conflict {
    /// Creates a conflict, taking its severity from the kind.
    pub fn new(kind: ConflictKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            severity: kind.severity(),
            message: message.into(),
        }
    }
}

/// Which conflicts a caller treats as grounds to refuse a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AcceptPolicy {
    /// Refuse on any conflict, advisory ones included.
    #[default]
    RejectOnAny,
    /// Refuse only on blocking conflicts.
    RejectOnBlocking,
}

/// A single step in the audit trace recording a checker decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The complete result of checking one candidate.
///
/// `conflicts` is empty exactly when no rule fired.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictReport {
    /// Unique identifier for this check.
    pub check_id: Uuid,
    /// When the check was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the check.
    pub engine_version: String,
    /// The candidate that was checked.
    pub request: SessionRequest,
    /// Every conflict found, in rule order.
    pub conflicts: Vec<Conflict>,
    /// One step per rule evaluated.
    pub audit_trace: Vec<AuditStep>,
}

impl ConflictReport {
    /// Returns true if no rule fired.
    pub fn is_clear(&self) -> bool {
        self.conflicts.is_empty()
    }

    /// Returns true if any blocking conflict was found.
    pub fn has_blocking(&self) -> bool {
        self.conflicts
            .iter()
            .any(|c| c.severity == Severity::Blocking)
    }

    /// Applies an accept policy to the findings.
    pub fn is_schedulable(&self, policy: AcceptPolicy) -> bool {
        match policy {
            AcceptPolicy::RejectOnAny => self.is_clear(),
            AcceptPolicy::RejectOnBlocking => !self.has_blocking(),
        }
    }

    /// Returns the conflicts of one severity.
    pub fn with_severity(&self, severity: Severity) -> impl Iterator<Item = &Conflict> {
        self.conflicts.iter().filter(move |c| c.severity == severity)
    }

    /// Returns the kinds that fired, in rule order.
    pub fn kinds(&self) -> Vec<ConflictKind> {
        self.conflicts.iter().map(|c| c.kind).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Day, StartTime, TimeSlot};

    fn report_with(conflicts: Vec<Conflict>) -> ConflictReport {
        ConflictReport {
            check_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            engine_version: "0.1.0".to_string(),
            request: SessionRequest::new(
                TimeSlot::new(Day::Monday, StartTime::Nine),
                "F1",
                "S1",
                "C1",
                "R1",
            ),
            conflicts,
            audit_trace: vec![],
        }
    }

    #[test]
    fn test_only_leave_exposure_is_advisory() {
        assert_eq!(ConflictKind::LeaveExposure.severity(), Severity::Advisory);
        for kind in [
            ConflictKind::FacultyClash,
            ConflictKind::ClassGroupClash,
            ConflictKind::RoomClash,
            ConflictKind::WorkloadCeiling,
        ] {
            assert_eq!(kind.severity(), Severity::Blocking);
        }
    }

    #[test]
    fn test_empty_report_is_schedulable_under_both_policies() {
        let report = report_with(vec![]);
        assert!(report.is_clear());
        assert!(report.is_schedulable(AcceptPolicy::RejectOnAny));
        assert!(report.is_schedulable(AcceptPolicy::RejectOnBlocking));
    }

    #[test]
    fn test_advisory_only_report_depends_on_policy() {
        let report = report_with(vec![Conflict::new(
            ConflictKind::LeaveExposure,
            "WARNING: Faculty has approved leave(s)",
        )]);
        assert!(!report.is_schedulable(AcceptPolicy::RejectOnAny));
        assert!(report.is_schedulable(AcceptPolicy::RejectOnBlocking));
    }

    #[test]
    fn test_blocking_report_is_never_schedulable() {
        let report = report_with(vec![Conflict::new(ConflictKind::RoomClash, "occupied")]);
        assert!(report.has_blocking());
        assert!(!report.is_schedulable(AcceptPolicy::RejectOnAny));
        assert!(!report.is_schedulable(AcceptPolicy::RejectOnBlocking));
    }

    #[test]
    fn test_with_severity_filters() {
        let report = report_with(vec![
            Conflict::new(ConflictKind::FacultyClash, "a"),
            Conflict::new(ConflictKind::LeaveExposure, "b"),
            Conflict::new(ConflictKind::WorkloadCeiling, "c"),
        ]);
        assert_eq!(report.with_severity(Severity::Blocking).count(), 2);
        assert_eq!(report.with_severity(Severity::Advisory).count(), 1);
    }

    #[test]
    fn test_conflict_serialization() {
        let conflict = Conflict::new(ConflictKind::ClassGroupClash, "clash");
        let json = serde_json::to_string(&conflict).unwrap();
        assert!(json.contains("\"kind\":\"class_group_clash\""));
        assert!(json.contains("\"severity\":\"blocking\""));
    }

    #[test]
    fn test_accept_policy_default_rejects_on_any() {
        assert_eq!(AcceptPolicy::default(), AcceptPolicy::RejectOnAny);
        let policy: AcceptPolicy = serde_json::from_str("\"reject_on_blocking\"").unwrap();
        assert_eq!(policy, AcceptPolicy::RejectOnBlocking);
    }
}
