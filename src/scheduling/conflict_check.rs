//! Conflict checking for candidate sessions.
//!
//! This module evaluates a [`SessionRequest`] against the committed
//! timetable, the leave records and the workload ceiling. All five rules
//! always run; their findings are collected into a [`ConflictReport`] in
//! rule order, each one recorded as an [`AuditStep`].

use chrono::{NaiveDate, Utc};
use tracing::debug;
use uuid::Uuid;

use super::availability::occupant;
use super::workload::compute_workload;
use crate::error::EngineResult;
use crate::models::{
    AuditStep, Conflict, ConflictKind, ConflictReport, LeaveRecord, ScheduledSession,
    SessionRequest, SlotClaim,
};
use crate::store::{LeaveStore, ScheduleStore};

/// Version string stamped on every report.
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Checks a candidate session for conflicts.
///
/// Rules are evaluated in a fixed order and never short-circuit:
///
/// 1. **Faculty clash**: the faculty member already teaches in the slot.
/// 2. **Class-group clash**: the class-group already has a session in the slot.
/// 3. **Room clash**: the room is already in use in the slot.
/// 4. **Leave exposure** (advisory): the faculty member has approved leave
///    ending on or after `today`. The leave dates are not compared with the
///    candidate's weekday; any outstanding approved leave fires.
/// 5. **Workload ceiling**: the faculty member already carries
///    `workload_limit` or more sessions. The current count is compared, not
///    the count after booking, so the booking that reaches the limit passes.
///
/// # Arguments
///
/// * `request` - The candidate session
/// * `schedule` - Committed sessions
/// * `leaves` - Leave records
/// * `workload_limit` - Maximum weekly sessions per faculty member
/// * `today` - The date leave expiry is judged against
///
/// # Errors
///
/// * `InvalidSlot` if the request's end time is not one hour after its start
/// * `LookupFailed` if either store cannot answer
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use timetable_engine::models::{ConflictKind, SessionRequest, TimeSlot};
/// use timetable_engine::scheduling::check_conflicts;
/// use timetable_engine::store::{MemoryLeaveStore, MemoryScheduleStore, SessionWriter};
///
/// let slot = TimeSlot::parse("Monday", "09:00").unwrap();
/// let mut schedule = MemoryScheduleStore::new();
/// schedule.insert_session(&SessionRequest::new(slot, "F1", "MATH101", "CSE-A", "R101")).unwrap();
///
/// let candidate = SessionRequest::new(slot, "F1", "MATH102", "CSE-B", "R102");
/// let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
/// let leaves = MemoryLeaveStore::default();
/// let report = check_conflicts(&candidate, &schedule, &leaves, 18, today).unwrap();
///
/// assert_eq!(report.kinds(), vec![ConflictKind::FacultyClash]);
/// assert_eq!(report.conflicts[0].message, "Faculty F1 is already booked in R101 for CSE-A.");
/// ```
pub fn check_conflicts<S, L>(
    request: &SessionRequest,
    schedule: &S,
    leaves: &L,
    workload_limit: u32,
    today: NaiveDate,
) -> EngineResult<ConflictReport>
where
    S: ScheduleStore + ?Sized,
    L: LeaveStore + ?Sized,
{
    request.validate()?;

    let mut conflicts: Vec<Conflict> = Vec::new();
    let mut audit_trace: Vec<AuditStep> = Vec::new();

    for rule in ClashRule::ALL {
        let step_number = next_step(&audit_trace);
        let (conflict, step) = check_clash(request, schedule, rule, step_number)?;
        conflicts.extend(conflict);
        audit_trace.push(step);
    }

    let step_number = next_step(&audit_trace);
    let (conflict, step) = check_leave_exposure(request, leaves, today, step_number)?;
    conflicts.extend(conflict);
    audit_trace.push(step);

    let step_number = next_step(&audit_trace);
    let (conflict, step) = check_workload(request, schedule, workload_limit, step_number)?;
    conflicts.extend(conflict);
    audit_trace.push(step);

    debug!(
        slot = %request.slot(),
        faculty_id = %request.faculty_id,
        conflicts = conflicts.len(),
        "Conflict check completed"
    );

    Ok(ConflictReport {
        check_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: ENGINE_VERSION.to_string(),
        request: request.clone(),
        conflicts,
        audit_trace,
    })
}

fn next_step(trace: &[AuditStep]) -> u32 {
    u32::try_from(trace.len()).unwrap_or(u32::MAX).saturating_add(1)
}

/// The three double-booking rules, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ClashRule {
    Faculty,
    ClassGroup,
    Room,
}

impl ClashRule {
    const ALL: [ClashRule; 3] = [ClashRule::Faculty, ClashRule::ClassGroup, ClashRule::Room];

    fn claim(self, request: &SessionRequest) -> SlotClaim<'_> {
        match self {
            ClashRule::Faculty => SlotClaim::Faculty(&request.faculty_id),
            ClashRule::ClassGroup => SlotClaim::ClassGroup(&request.class_group_id),
            ClashRule::Room => SlotClaim::Room(&request.room_id),
        }
    }

    fn kind(self) -> ConflictKind {
        match self {
            ClashRule::Faculty => ConflictKind::FacultyClash,
            ClashRule::ClassGroup => ConflictKind::ClassGroupClash,
            ClashRule::Room => ConflictKind::RoomClash,
        }
    }

    fn rule_id(self) -> &'static str {
        match self {
            ClashRule::Faculty => "faculty_clash",
            ClashRule::ClassGroup => "class_group_clash",
            ClashRule::Room => "room_clash",
        }
    }

    fn rule_name(self) -> &'static str {
        match self {
            ClashRule::Faculty => "Faculty Double Booking",
            ClashRule::ClassGroup => "Class-Group Double Booking",
            ClashRule::Room => "Room Double Booking",
        }
    }

    /// Describes the session already holding the slot.
    fn message(self, request: &SessionRequest, held: &ScheduledSession) -> String {
        match self {
            ClashRule::Faculty => format!(
                "Faculty {} is already booked in {} for {}.",
                request.faculty_id, held.room_id, held.class_group_id
            ),
            ClashRule::ClassGroup => format!(
                "Class {} already has a class in {} with {}.",
                held.class_group_id, held.room_id, held.faculty_id
            ),
            ClashRule::Room => format!(
                "Classroom {} is occupied by {} ({}).",
                held.room_id, held.class_group_id, held.faculty_id
            ),
        }
    }
}

fn check_clash<S>(
    request: &SessionRequest,
    schedule: &S,
    rule: ClashRule,
    step_number: u32,
) -> EngineResult<(Option<Conflict>, AuditStep)>
where
    S: ScheduleStore + ?Sized,
{
    let slot = request.slot();
    let claim = rule.claim(request);
    let held = occupant(schedule, slot, claim)?;

    let conflict = held
        .as_ref()
        .map(|session| Conflict::new(rule.kind(), rule.message(request, session)));

    let reasoning = match &held {
        Some(session) => format!("{} already holds {} (session {})", claim, slot, session.id),
        None => format!("{} is free at {}", claim, slot),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: rule.rule_id().to_string(),
        rule_name: rule.rule_name().to_string(),
        input: serde_json::json!({
            "slot": slot.to_string(),
            "entity": claim.entity(),
        }),
        output: serde_json::json!({
            "clash": held.is_some(),
            "held_by_session": held.as_ref().map(|s| s.id.to_string()),
        }),
        reasoning,
    };

    Ok((conflict, audit_step))
}

fn describe_leave(leave: &LeaveRecord) -> String {
    format!("{} to {} ({})", leave.start_date, leave.end_date, leave.reason)
}

fn check_leave_exposure<L>(
    request: &SessionRequest,
    leaves: &L,
    today: NaiveDate,
    step_number: u32,
) -> EngineResult<(Option<Conflict>, AuditStep)>
where
    L: LeaveStore + ?Sized,
{
    let outstanding = leaves.outstanding_leaves(&request.faculty_id, today)?;

    let conflict = if outstanding.is_empty() {
        None
    } else {
        let ranges: Vec<String> = outstanding.iter().map(describe_leave).collect();
        Some(Conflict::new(
            ConflictKind::LeaveExposure,
            format!(
                "WARNING: Faculty {} has approved leave(s): {}",
                request.faculty_id,
                ranges.join(", ")
            ),
        ))
    };

    let ranges_json: Vec<serde_json::Value> = outstanding
        .iter()
        .map(|l| {
            serde_json::json!({
                "start_date": l.start_date.to_string(),
                "end_date": l.end_date.to_string(),
            })
        })
        .collect();

    let reasoning = if outstanding.is_empty() {
        format!(
            "No approved leave for {} ends on or after {}",
            request.faculty_id, today
        )
    } else {
        format!(
            "{} approved leave record(s) for {} not yet elapsed as of {}",
            outstanding.len(),
            request.faculty_id,
            today
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "leave_exposure".to_string(),
        rule_name: "Approved Leave Exposure".to_string(),
        input: serde_json::json!({
            "faculty_id": request.faculty_id,
            "today": today.to_string(),
        }),
        output: serde_json::json!({ "outstanding_leaves": ranges_json }),
        reasoning,
    };

    Ok((conflict, audit_step))
}

fn check_workload<S>(
    request: &SessionRequest,
    schedule: &S,
    workload_limit: u32,
    step_number: u32,
) -> EngineResult<(Option<Conflict>, AuditStep)>
where
    S: ScheduleStore + ?Sized,
{
    let current = compute_workload(schedule, &request.faculty_id)?;
    let at_ceiling = current >= workload_limit;

    let conflict = at_ceiling.then(|| {
        Conflict::new(
            ConflictKind::WorkloadCeiling,
            format!(
                "Faculty {} has reached maximum weekly workload ({}/{} hours).",
                request.faculty_id, current, workload_limit
            ),
        )
    });

    let reasoning = if at_ceiling {
        format!(
            "{} hours already scheduled meets the {} hour ceiling",
            current, workload_limit
        )
    } else {
        format!(
            "{} hours already scheduled is under the {} hour ceiling",
            current, workload_limit
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "workload_ceiling".to_string(),
        rule_name: "Weekly Workload Ceiling".to_string(),
        input: serde_json::json!({
            "faculty_id": request.faculty_id,
            "workload_limit": workload_limit,
        }),
        output: serde_json::json!({
            "current_hours": current,
            "at_ceiling": at_ceiling,
        }),
        reasoning,
    };

    Ok((conflict, audit_step))
}
