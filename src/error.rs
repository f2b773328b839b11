//! Error types for the social queue and the enrollment layer built on it.

use std::collections::TryReserveError;
use std::path::PathBuf;
use thiserror::Error;

/// Queue-level errors
#[derive(Debug, Error)]
pub enum QueueError {
    #[error("Bad parameter: {0}")]
    BadParam(String),

    #[error("Allocation failed: {0}")]
    AllocFailed(#[from] TryReserveError),

    #[error("Queue state inconsistent: {0}")]
    Inconsistent(String),
}

/// Which record file a parse error came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Students,
    Courses,
    Hackers,
    Queues,
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RecordKind::Students => "students",
            RecordKind::Courses => "courses",
            RecordKind::Hackers => "hackers",
            RecordKind::Queues => "queues",
        };
        f.write_str(name)
    }
}

/// Enrollment-related errors
#[derive(Debug, Error)]
pub enum EnrollmentError {
    #[error("Malformed {kind} record at line {line}: {reason}")]
    Parse {
        kind: RecordKind,
        line: usize,
        reason: String,
    },

    #[error("Unknown student: {0}")]
    UnknownStudent(u64),

    #[error("Unknown course: {0}")]
    UnknownCourse(u64),

    #[error("Duplicate {kind} record for {id}")]
    Duplicate { kind: RecordKind, id: u64 },

    #[error("Cannot read {}: {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Queue error: {0}")]
    Queue(#[from] QueueError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Output encoding failed: {0}")]
    Encode(String),
}

impl From<config::ConfigError> for EnrollmentError {
    fn from(err: config::ConfigError) -> Self {
        EnrollmentError::ConfigError(err.to_string())
    }
}

impl From<serde_json::Error> for EnrollmentError {
    fn from(err: serde_json::Error) -> Self {
        EnrollmentError::Encode(err.to_string())
    }
}

impl From<toml::ser::Error> for EnrollmentError {
    fn from(err: toml::ser::Error) -> Self {
        EnrollmentError::Encode(err.to_string())
    }
}
