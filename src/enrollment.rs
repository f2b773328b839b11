//! Course enrollment on top of social queues.
//!
//! Students wait in one queue per course. Hackers then push themselves into
//! the courses they want, helped by friends and held back by rivals, and the
//! run reports either the final queues or the first hacker left out.

pub mod measures;
pub mod records;
pub mod report;
pub mod system;

pub use records::{Course, HackerProfile, Student};
pub use report::{QueueSummary, ReportFormat};
pub use system::{CourseQueue, EnrollmentSystem, HackOutcome};

use crate::config::EnrollmentConfig;
use crate::error::EnrollmentError;
use std::path::PathBuf;

/// Paths of the four record files.
#[derive(Debug, Clone)]
pub struct EnrollmentFiles {
    pub students: PathBuf,
    pub courses: PathBuf,
    pub hackers: PathBuf,
    pub queues: PathBuf,
}

impl EnrollmentFiles {
    /// Read all four files and build the system with its course queues.
    pub fn load(&self, settings: EnrollmentConfig) -> Result<EnrollmentSystem, EnrollmentError> {
        let mut system = EnrollmentSystem::create(
            &records::read_file(&self.students)?,
            &records::read_file(&self.courses)?,
            &records::read_file(&self.hackers)?,
            settings,
        )?;
        system.read_queues(&records::read_file(&self.queues)?)?;
        Ok(system)
    }
}
