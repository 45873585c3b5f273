//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading scheduler
//! configuration from YAML files, and the shared YAML helper the store
//! snapshot loader reuses.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::SchedulerConfig;

/// Loads and validates scheduler configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// └── scheduler.yaml   # Workload limits and booking policy
/// ```
///
/// # Example
///
/// ```no_run
/// use timetable_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default")?;
/// println!("Workload ceiling: {}", loader.config().workload.max_weekly_hours);
/// # Ok::<(), timetable_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: SchedulerConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - `scheduler.yaml` is missing (`ConfigNotFound`)
    /// - the file contains invalid YAML (`ConfigParseError`)
    /// - a value is out of range (`InvalidConfig`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let scheduler_path = path.as_ref().join("scheduler.yaml");
        let config = load_yaml::<SchedulerConfig>(&scheduler_path)?;
        Self::from_config(config)
    }

    /// Wraps an in-memory configuration after validating it.
    pub fn from_config(config: SchedulerConfig) -> EngineResult<Self> {
        validate(&config)?;
        Ok(Self { config })
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }
}

fn validate(config: &SchedulerConfig) -> EngineResult<()> {
    let workload = &config.workload;
    if workload.max_weekly_hours == 0 {
        return Err(EngineError::InvalidConfig {
            field: "workload.max_weekly_hours".to_string(),
            message: "must be greater than zero".to_string(),
        });
    }
    if workload.underutilized_below > workload.max_weekly_hours {
        return Err(EngineError::InvalidConfig {
            field: "workload.underutilized_below".to_string(),
            message: format!(
                "{} exceeds max_weekly_hours {}",
                workload.underutilized_below, workload.max_weekly_hours
            ),
        });
    }
    Ok(())
}

/// Loads and parses a YAML file.
pub(crate) fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
    let path_str = path.display().to_string();

    let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
        path: path_str.clone(),
    })?;

    serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
        path: path_str,
        message: e.to_string(),
    })
}
