//! Enrollment runs over record files on disk

use super::test_utils::{sample_workspace, write_records, COURSES, HACKERS, STUDENTS};
use socialq::config::{ConfigLoader, EnrollmentConfig};
use socialq::enrollment::report;
use socialq::enrollment::{EnrollmentFiles, HackOutcome};
use socialq::error::{EnrollmentError, RecordKind};
use std::path::Path;
use tempfile::TempDir;

fn files(root: &Path) -> EnrollmentFiles {
    EnrollmentFiles {
        students: root.join("students.txt"),
        courses: root.join("courses.txt"),
        hackers: root.join("hackers.txt"),
        queues: root.join("queues.txt"),
    }
}

fn bond_only(root: &Path) -> EnrollmentConfig {
    ConfigLoader::load_from_file(&root.join("bond.toml"))
        .unwrap()
        .enrollment
}

#[test]
fn test_hackers_follow_friends_into_courses() {
    let temp = sample_workspace();
    let mut system = files(temp.path()).load(bond_only(temp.path())).unwrap();

    let outcome = system.hack_enrollment().unwrap();
    assert_eq!(outcome, HackOutcome::Satisfied);
    assert_eq!(
        report::render_text(&system, outcome),
        "234 100 400 300\n236 200 400 300 100\n"
    );
}

#[test]
fn test_rival_in_line_leaves_hacker_unsatisfied() {
    let temp = TempDir::new().unwrap();
    write_records(
        temp.path(),
        STUDENTS,
        COURSES,
        HACKERS,
        "234 100 500 300\n236 200 300 100\n",
    );
    let settings = EnrollmentConfig {
        hacker_bond: 50,
        name_distance: false,
        id_distance: false,
        ..EnrollmentConfig::default()
    };
    let mut system = files(temp.path()).load(settings).unwrap();

    let outcome = system.hack_enrollment().unwrap();
    assert_eq!(outcome, HackOutcome::Unsatisfied(400));
    assert_eq!(
        report::render_text(&system, outcome),
        "Cannot satisfy constraints for 400\n"
    );
    let line: Vec<u64> = system.queues()[0].student_ids();
    assert_eq!(line, vec![100, 500, 300, 400]);
}

#[test]
fn test_queue_order_before_hack_pass_is_file_order() {
    let temp = sample_workspace();
    let system = files(temp.path()).load(EnrollmentConfig::default()).unwrap();
    let summaries = report::summarize(&system);
    assert_eq!(summaries[0].course, 234);
    assert_eq!(summaries[0].queued, 2);
    assert_eq!(summaries[1].course, 236);
    assert_eq!(summaries[1].queued, 3);
    assert_eq!(system.queues()[1].student_ids(), vec![200, 300, 100]);
}

#[test]
fn test_malformed_queue_file_reports_location() {
    let temp = TempDir::new().unwrap();
    write_records(temp.path(), STUDENTS, COURSES, HACKERS, "234 100\n236 2x0\n");
    let err = files(temp.path())
        .load(EnrollmentConfig::default())
        .err()
        .unwrap();
    match err {
        EnrollmentError::Parse { kind, line, reason } => {
            assert_eq!(kind, RecordKind::Queues);
            assert_eq!(line, 2);
            assert!(reason.contains("2x0"));
        }
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn test_missing_file_is_reported_with_path() {
    let temp = TempDir::new().unwrap();
    let err = files(temp.path())
        .load(EnrollmentConfig::default())
        .err()
        .unwrap();
    assert!(matches!(err, EnrollmentError::Read { .. }));
    assert!(err.to_string().contains("students.txt"));
}
