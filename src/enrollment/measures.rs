//! Friendship measures and the comparison function over student handles.

use super::records::Student;
use crate::config::EnrollmentConfig;
use crate::queue::{comparison, measure, ComparisonFn, FriendshipFn};
use std::rc::Rc;

pub type StudentRef = Rc<Student>;

/// `+bond` when a hacker names the other student as friend, `-bond` when as
/// rival. The queued student's profile is consulted first.
pub fn hacker_bond(bond: i32) -> FriendshipFn<StudentRef> {
    measure(move |queued: &StudentRef, incoming: &StudentRef| {
        bond_from(queued, incoming, bond)
            .or_else(|| bond_from(incoming, queued, bond))
            .unwrap_or(0)
    })
}

fn bond_from(hacker: &Student, other: &Student, bond: i32) -> Option<i32> {
    let profile = hacker.hacker.as_ref()?;
    if profile.befriends(other.id) {
        Some(bond)
    } else if profile.resents(other.id) {
        Some(-bond)
    } else {
        None
    }
}

/// Distance between the ASCII sums of the two first names.
pub fn name_distance(case_insensitive: bool) -> FriendshipFn<StudentRef> {
    measure(move |queued: &StudentRef, incoming: &StudentRef| {
        let a = ascii_sum(&queued.first_name, case_insensitive);
        let b = ascii_sum(&incoming.first_name, case_insensitive);
        saturate(a.abs_diff(b))
    })
}

fn ascii_sum(name: &str, case_insensitive: bool) -> u64 {
    name.bytes()
        .map(|b| {
            if case_insensitive {
                b.to_ascii_lowercase()
            } else {
                b
            }
        })
        .map(u64::from)
        .sum()
}

/// Distance between the two student ids.
pub fn id_distance() -> FriendshipFn<StudentRef> {
    measure(|queued: &StudentRef, incoming: &StudentRef| saturate(queued.id.abs_diff(incoming.id)))
}

fn saturate(distance: u64) -> i32 {
    i32::try_from(distance).unwrap_or(i32::MAX)
}

/// Orders students by id; `0` means the same student.
pub fn by_id() -> ComparisonFn<StudentRef> {
    comparison(|a: &StudentRef, b: &StudentRef| match a.id.cmp(&b.id) {
        std::cmp::Ordering::Less => -1,
        std::cmp::Ordering::Equal => 0,
        std::cmp::Ordering::Greater => 1,
    })
}

/// Measures switched on by the enrollment settings, in registration order.
pub fn configured(settings: &EnrollmentConfig) -> Vec<FriendshipFn<StudentRef>> {
    let mut measures = vec![hacker_bond(settings.hacker_bond)];
    if settings.name_distance {
        measures.push(name_distance(settings.case_insensitive_names));
    }
    if settings.id_distance {
        measures.push(id_distance());
    }
    measures
}
