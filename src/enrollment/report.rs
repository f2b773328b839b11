//! Rendering of enrollment results: the plain text output file, JSON, and
//! an inspection table of the course queues.

use super::system::{EnrollmentSystem, HackOutcome};
use crate::error::EnrollmentError;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use serde::Serialize;

/// Output format for `enroll` and `inspect`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
}

impl std::str::FromStr for ReportFormat {
    type Err = EnrollmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            other => Err(EnrollmentError::ConfigError(format!(
                "Invalid output format: {} (must be 'text' or 'json')",
                other
            ))),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
enum EnrollmentReport {
    Satisfied { courses: Vec<CourseLine> },
    Unsatisfied { hacker: u64 },
}

#[derive(Debug, Serialize)]
struct CourseLine {
    course: u64,
    students: Vec<u64>,
}

/// Summary row of one course queue.
#[derive(Debug, Clone, Serialize)]
pub struct QueueSummary {
    pub course: u64,
    pub capacity: usize,
    pub queued: usize,
    /// Hackers standing within capacity.
    pub hackers_placed: usize,
}

fn course_lines(system: &EnrollmentSystem) -> Vec<CourseLine> {
    system
        .queues()
        .iter()
        .map(|q| CourseLine {
            course: q.course.number,
            students: q.student_ids(),
        })
        .collect()
}

/// `Cannot satisfy constraints for <id>`, or one `<course> <id>*` line per
/// course queue.
pub fn render_text(system: &EnrollmentSystem, outcome: HackOutcome) -> String {
    match outcome {
        HackOutcome::Unsatisfied(id) => format!("Cannot satisfy constraints for {}\n", id),
        HackOutcome::Satisfied => {
            let mut out = String::new();
            for line in course_lines(system) {
                out.push_str(&line.course.to_string());
                for id in line.students {
                    out.push(' ');
                    out.push_str(&id.to_string());
                }
                out.push('\n');
            }
            out
        }
    }
}

pub fn render_json(system: &EnrollmentSystem, outcome: HackOutcome) -> Result<String, EnrollmentError> {
    let report = match outcome {
        HackOutcome::Unsatisfied(hacker) => EnrollmentReport::Unsatisfied { hacker },
        HackOutcome::Satisfied => EnrollmentReport::Satisfied {
            courses: course_lines(system),
        },
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

pub fn summarize(system: &EnrollmentSystem) -> Vec<QueueSummary> {
    system
        .queues()
        .iter()
        .map(|q| QueueSummary {
            course: q.course.number,
            capacity: q.course.size,
            queued: q.queue.len(),
            hackers_placed: system
                .hackers()
                .iter()
                .filter(|h| q.admits(h.id))
                .count(),
        })
        .collect()
}

pub fn render_inspect_table(summaries: &[QueueSummary]) -> String {
    if summaries.is_empty() {
        return "No course queues.".to_string();
    }
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Course", "Capacity", "Queued", "Hackers placed"]);
    for s in summaries {
        table.add_row(vec![
            s.course.to_string(),
            s.capacity.to_string(),
            s.queued.to_string(),
            s.hackers_placed.to_string(),
        ]);
    }
    table.to_string()
}

pub fn render_inspect_json(summaries: &[QueueSummary]) -> Result<String, EnrollmentError> {
    Ok(serde_json::to_string_pretty(summaries)?)
}
