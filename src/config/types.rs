//! Configuration types for the scheduler.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from `scheduler.yaml`. Every field has a default, so a
//! missing section falls back to the standard limits.

use serde::{Deserialize, Serialize};

use crate::models::AcceptPolicy;

/// Default ceiling on weekly one-hour sessions per faculty member.
pub const DEFAULT_MAX_WEEKLY_HOURS: u32 = 18;

/// Default threshold below which a faculty member counts as underutilized.
pub const DEFAULT_UNDERUTILIZED_BELOW: u32 = 10;

/// Workload limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkloadSettings {
    /// Maximum weekly sessions a faculty member may carry.
    pub max_weekly_hours: u32,
    /// Below this many hours a faculty member is reported as underutilized.
    pub underutilized_below: u32,
}

impl Default for WorkloadSettings {
    fn default() -> Self {
        Self {
            max_weekly_hours: DEFAULT_MAX_WEEKLY_HOURS,
            underutilized_below: DEFAULT_UNDERUTILIZED_BELOW,
        }
    }
}

/// Booking behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BookingSettings {
    /// Which conflicts refuse a booking.
    pub accept_policy: AcceptPolicy,
}

/// The complete scheduler configuration.
///
/// # Example
///
/// ```
/// use timetable_engine::config::SchedulerConfig;
/// use timetable_engine::models::AcceptPolicy;
///
/// let config = SchedulerConfig::default();
/// assert_eq!(config.workload.max_weekly_hours, 18);
/// assert_eq!(config.booking.accept_policy, AcceptPolicy::RejectOnAny);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Workload limits.
    pub workload: WorkloadSettings,
    /// Booking behaviour.
    pub booking: BookingSettings,
}
