//! Configuration System
//!
//! Layered configuration for enrollment runs and logging. Sources merge in
//! order: built-in defaults, the global user file, the workspace files, then
//! `SOCIALQ__*` environment variables. Tests included.

use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SocialqConfig {
    /// Queue thresholds and friendship measures for enrollment
    #[serde(default)]
    pub enrollment: EnrollmentConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Enrollment settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrollmentConfig {
    /// A measure must score strictly above this for friendship
    #[serde(default = "default_friendship_threshold")]
    pub friendship_threshold: i32,

    /// The mean score must fall strictly below this for rivalry
    #[serde(default)]
    pub rivalry_threshold: i32,

    /// Score of a declared hacker friend; its negation marks a declared rival
    #[serde(default = "default_hacker_bond")]
    pub hacker_bond: i32,

    /// Register the first-name distance measure
    #[serde(default = "default_true")]
    pub name_distance: bool,

    /// Register the student-id distance measure
    #[serde(default = "default_true")]
    pub id_distance: bool,

    /// Fold ASCII case before summing first names
    #[serde(default)]
    pub case_insensitive_names: bool,
}

fn default_friendship_threshold() -> i32 {
    20
}

fn default_hacker_bond() -> i32 {
    20
}

fn default_true() -> bool {
    true
}

impl Default for EnrollmentConfig {
    fn default() -> Self {
        Self {
            friendship_threshold: default_friendship_threshold(),
            rivalry_threshold: 0,
            hacker_bond: default_hacker_bond(),
            name_distance: true,
            id_distance: true,
            case_insensitive_names: false,
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone)]
pub enum ValidationError {
    Enrollment(String),
    Logging(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Enrollment(msg) => write!(f, "Enrollment: {}", msg),
            ValidationError::Logging(msg) => write!(f, "Logging: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl EnrollmentConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.hacker_bond <= 0 {
            return Err(format!(
                "hacker_bond must be positive, got {}",
                self.hacker_bond
            ));
        }
        Ok(())
    }
}

impl SocialqConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = self.enrollment.validate() {
            errors.push(ValidationError::Enrollment(e));
        }
        if let Err(e) = self.logging.validate() {
            errors.push(ValidationError::Logging(e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Effective configuration as TOML
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
