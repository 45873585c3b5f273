//! Configuration loading and management for the timetable engine.
//!
//! This module loads the scheduler's workload limits and booking policy
//! from YAML.
//!
//! # Example
//!
//! ```no_run
//! use timetable_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Accept policy: {:?}", config.config().booking.accept_policy);
//! ```

mod loader;
mod types;

pub(crate) use loader::load_yaml;
pub use loader::ConfigLoader;
pub use types::{
    BookingSettings, DEFAULT_MAX_WEEKLY_HOURS, DEFAULT_UNDERUTILIZED_BELOW, SchedulerConfig,
    WorkloadSettings,
};
