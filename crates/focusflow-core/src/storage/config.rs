//! TOML-based user settings.
//!
//! The settings collaborator's persisted form: focus duration, scheduled
//! breaks, and the notifications preference that notification
//! collaborators read. Stored at `~/.config/focusflow/settings.toml`.
//!
//! Settings are raw user input; [`Settings::to_plan`] is the validation
//! gate that turns them into a [`SchedulePlan`] the scheduler will accept.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::data_dir;
use crate::error::{ConfigError, CoreError, Result, ValidationError};
use crate::timer::{BreakRule, SchedulePlan};

/// User settings.
///
/// Serialized to/from TOML at `~/.config/focusflow/settings.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Focus budget in seconds.
    #[serde(default = "default_focus_duration")]
    pub focus_duration: u64,
    #[serde(default)]
    pub breaks: Vec<BreakRule>,
    #[serde(default = "default_true")]
    pub notifications_enabled: bool,
}

fn default_focus_duration() -> u64 {
    1500
}
fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            focus_duration: default_focus_duration(),
            breaks: Vec::new(),
            notifications_enabled: true,
        }
    }
}

impl Settings {
    fn path() -> Result<PathBuf> {
        Ok(data_dir()?.join("settings.toml"))
    }

    /// Load from disk, or return the defaults when no file exists yet.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    pub(crate) fn load_from(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                let settings = toml::from_str(&content).map_err(|e| {
                    CoreError::Config(ConfigError::LoadFailed {
                        path: path.to_path_buf(),
                        message: e.to_string(),
                    })
                })?;
                Ok(settings)
            }
            Err(_) => Ok(Self::default()),
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    pub(crate) fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).map_err(|e| {
            CoreError::Config(ConfigError::SaveFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            })
        })?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Turn these settings into a validated schedule plan.
    pub fn to_plan(&self) -> std::result::Result<SchedulePlan, ValidationError> {
        let plan = SchedulePlan::new(self.focus_duration, self.breaks.clone());
        plan.validate()?;
        Ok(plan)
    }
}
