//! Shared fixtures for integration tests

use std::path::Path;
use tempfile::TempDir;

pub const STUDENTS: &str = "\
100 30 85 Dana Levi Haifa CS
200 45 90 Omer Cohen Haifa CS
300 12 70 Noa Mizrahi Eilat EE
400 60 95 Yael Peretz Haifa CS
500 20 80 Avi Biton Akko ME
";

pub const COURSES: &str = "\
234 2
236 3
";

/// 400 wants both courses and counts 100 and 200 as friends; 500 wants
/// nothing and resents 400.
pub const HACKERS: &str = "\
400
234 236
100 200

500


400
";

pub const QUEUES: &str = "\
234 100 300
236 200 300 100
";

/// Config that leaves only the declared hacker bonds in play.
pub const BOND_ONLY_CONFIG: &str = "\
[enrollment]
hacker_bond = 50
name_distance = false
id_distance = false
";

/// Workspace holding the sample record files.
pub fn sample_workspace() -> TempDir {
    let temp = TempDir::new().unwrap();
    write_records(temp.path(), STUDENTS, COURSES, HACKERS, QUEUES);
    std::fs::write(temp.path().join("bond.toml"), BOND_ONLY_CONFIG).unwrap();
    temp
}

pub fn write_records(root: &Path, students: &str, courses: &str, hackers: &str, queues: &str) {
    std::fs::write(root.join("students.txt"), students).unwrap();
    std::fs::write(root.join("courses.txt"), courses).unwrap();
    std::fs::write(root.join("hackers.txt"), hackers).unwrap();
    std::fs::write(root.join("queues.txt"), queues).unwrap();
}
