//! Record files: students, courses, hackers and initial course queues.
//!
//! All formats are whitespace separated, one record per line. Parsers take
//! the file contents so callers decide where the text comes from.

use crate::error::{EnrollmentError, RecordKind};
use serde::Serialize;
use std::collections::HashSet;
use std::path::Path;
use std::str::FromStr;

/// One line of the students file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Student {
    pub id: u64,
    pub credits: u32,
    pub gpa: f64,
    pub first_name: String,
    pub last_name: String,
    pub city: String,
    pub department: String,
    /// Present when the student also appears in the hackers file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hacker: Option<HackerProfile>,
}

impl Student {
    pub fn is_hacker(&self) -> bool {
        self.hacker.is_some()
    }
}

/// What a hacker asks for: courses, plus students they like or resent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HackerProfile {
    pub desired_courses: Vec<u64>,
    pub friends: Vec<u64>,
    pub rivals: Vec<u64>,
}

impl HackerProfile {
    pub fn befriends(&self, id: u64) -> bool {
        self.friends.contains(&id)
    }

    pub fn resents(&self, id: u64) -> bool {
        self.rivals.contains(&id)
    }
}

/// One four-line block of the hackers file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HackerRecord {
    pub id: u64,
    pub profile: HackerProfile,
}

/// One line of the courses file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Course {
    pub number: u64,
    pub size: usize,
}

/// One line of the queues file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueRecord {
    pub course: u64,
    pub students: Vec<u64>,
}

/// Read a record file, keeping the path in the error.
pub fn read_file(path: &Path) -> Result<String, EnrollmentError> {
    std::fs::read_to_string(path).map_err(|source| EnrollmentError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn malformed(kind: RecordKind, line: usize, reason: impl Into<String>) -> EnrollmentError {
    EnrollmentError::Parse {
        kind,
        line,
        reason: reason.into(),
    }
}

fn field<T: FromStr>(
    kind: RecordKind,
    line: usize,
    name: &str,
    token: Option<&str>,
) -> Result<T, EnrollmentError> {
    let token = token.ok_or_else(|| malformed(kind, line, format!("missing {}", name)))?;
    token
        .parse()
        .map_err(|_| malformed(kind, line, format!("invalid {} '{}'", name, token)))
}

fn text(
    kind: RecordKind,
    line: usize,
    name: &str,
    token: Option<&str>,
) -> Result<String, EnrollmentError> {
    token
        .map(str::to_string)
        .ok_or_else(|| malformed(kind, line, format!("missing {}", name)))
}

fn id_list(kind: RecordKind, line: usize, name: &str, raw: &str) -> Result<Vec<u64>, EnrollmentError> {
    raw.split_whitespace()
        .map(|token| field(kind, line, name, Some(token)))
        .collect()
}

/// Non-blank lines with their 1-based line numbers.
fn records(contents: &str) -> impl Iterator<Item = (usize, &str)> {
    contents
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l))
        .filter(|(_, l)| !l.trim().is_empty())
}

/// `<id> <credits> <gpa> <first> <last> <city> <department>`
pub fn parse_students(contents: &str) -> Result<Vec<Student>, EnrollmentError> {
    let kind = RecordKind::Students;
    let mut seen = HashSet::new();
    let mut students = Vec::new();

    for (line, raw) in records(contents) {
        let mut tokens = raw.split_whitespace();
        let student = Student {
            id: field(kind, line, "student id", tokens.next())?,
            credits: field(kind, line, "credits", tokens.next())?,
            gpa: field(kind, line, "gpa", tokens.next())?,
            first_name: text(kind, line, "first name", tokens.next())?,
            last_name: text(kind, line, "last name", tokens.next())?,
            city: text(kind, line, "city", tokens.next())?,
            department: text(kind, line, "department", tokens.next())?,
            hacker: None,
        };
        if let Some(extra) = tokens.next() {
            return Err(malformed(kind, line, format!("unexpected token '{}'", extra)));
        }
        if !seen.insert(student.id) {
            return Err(EnrollmentError::Duplicate {
                kind,
                id: student.id,
            });
        }
        students.push(student);
    }

    Ok(students)
}

/// `<number> <size>`
pub fn parse_courses(contents: &str) -> Result<Vec<Course>, EnrollmentError> {
    let kind = RecordKind::Courses;
    let mut seen = HashSet::new();
    let mut courses = Vec::new();

    for (line, raw) in records(contents) {
        let mut tokens = raw.split_whitespace();
        let course = Course {
            number: field(kind, line, "course number", tokens.next())?,
            size: field(kind, line, "course size", tokens.next())?,
        };
        if let Some(extra) = tokens.next() {
            return Err(malformed(kind, line, format!("unexpected token '{}'", extra)));
        }
        if !seen.insert(course.number) {
            return Err(EnrollmentError::Duplicate {
                kind,
                id: course.number,
            });
        }
        courses.push(course);
    }

    Ok(courses)
}

/// Four-line blocks: id, desired courses, friend ids, rival ids.
///
/// List lines may be empty, so blank lines are significant here. Trailing
/// blank lines are dropped and a short final block reads its missing lists
/// as empty. A course listed twice is desired once.
pub fn parse_hackers(contents: &str) -> Result<Vec<HackerRecord>, EnrollmentError> {
    let kind = RecordKind::Hackers;
    let mut lines: Vec<&str> = contents.lines().collect();
    while lines.last().is_some_and(|l| l.trim().is_empty()) {
        lines.pop();
    }

    let mut seen = HashSet::new();
    let mut hackers = Vec::new();

    for (block, chunk) in lines.chunks(4).enumerate() {
        let first = block * 4 + 1;
        let list = |offset: usize| chunk.get(offset).copied().unwrap_or("");

        let mut id_tokens = chunk[0].split_whitespace();
        let id = field(kind, first, "hacker id", id_tokens.next())?;
        if let Some(extra) = id_tokens.next() {
            return Err(malformed(kind, first, format!("unexpected token '{}'", extra)));
        }

        let mut desired_courses = Vec::new();
        for course in id_list(kind, first + 1, "course number", list(1))? {
            if !desired_courses.contains(&course) {
                desired_courses.push(course);
            }
        }

        let profile = HackerProfile {
            desired_courses,
            friends: id_list(kind, first + 2, "friend id", list(2))?,
            rivals: id_list(kind, first + 3, "rival id", list(3))?,
        };
        if !seen.insert(id) {
            return Err(EnrollmentError::Duplicate { kind, id });
        }
        hackers.push(HackerRecord { id, profile });
    }

    Ok(hackers)
}

/// `<course> <student id>*`
pub fn parse_queues(contents: &str) -> Result<Vec<QueueRecord>, EnrollmentError> {
    let kind = RecordKind::Queues;
    let mut seen = HashSet::new();
    let mut queues = Vec::new();

    for (line, raw) in records(contents) {
        let mut tokens = raw.split_whitespace();
        let course = field(kind, line, "course number", tokens.next())?;
        let students = tokens
            .map(|token| field(kind, line, "student id", Some(token)))
            .collect::<Result<Vec<u64>, _>>()?;
        if !seen.insert(course) {
            return Err(EnrollmentError::Duplicate { kind, id: course });
        }
        queues.push(QueueRecord { course, students });
    }

    Ok(queues)
}
