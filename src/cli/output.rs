//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::EnrollmentError;

/// Map domain errors to a string for CLI output, adding the likely fix for
/// input problems.
pub fn map_error(e: &EnrollmentError) -> String {
    match e {
        EnrollmentError::Parse { .. } | EnrollmentError::Duplicate { .. } => {
            format!("{}\nCheck the record file format.", e)
        }
        EnrollmentError::UnknownStudent(_) | EnrollmentError::UnknownCourse(_) => {
            format!("{}\nEvery referenced id must appear in the students or courses file.", e)
        }
        _ => e.to_string(),
    }
}
