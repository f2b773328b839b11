//! Public contract of SocialQueue, driven through the crate root

use socialq::queue::{comparison, measure, ComparisonFn, FRIEND_QUOTA, RIVAL_QUOTA};
use socialq::{QueueError, SocialQueue};
use std::rc::Rc;

#[derive(Debug, PartialEq)]
struct Person {
    id: u32,
}

type Handle = Rc<Person>;

fn people(ids: &[u32]) -> Vec<Handle> {
    ids.iter().map(|&id| Rc::new(Person { id })).collect()
}

fn by_id() -> ComparisonFn<Handle> {
    comparison(|a: &Handle, b: &Handle| a.id as i32 - b.id as i32)
}

fn ids(queue: &SocialQueue<Handle>) -> Vec<u32> {
    queue.iter().map(|p| p.id).collect()
}

#[test]
fn test_friend_of_first_lands_behind_it() {
    let f = measure(|existing: &Handle, incoming: &Handle| {
        if existing.id == 1 && incoming.id == 2 {
            100
        } else {
            0
        }
    });
    let mut queue = SocialQueue::new(vec![f], Some(by_id()), 50, 0);
    for p in people(&[1, 3, 2]) {
        queue.enqueue(p);
    }

    let order: Vec<u32> = std::iter::from_fn(|| queue.dequeue()).map(|p| p.id).collect();
    assert_eq!(order, vec![1, 2, 3]);
    assert!(queue.dequeue().is_none());
    assert_eq!(queue.len(), 0);
}

#[test]
fn test_merge_round_robin_and_thresholds() {
    let [a, b, c, d]: [Handle; 4] = people(&[1, 2, 3, 4]).try_into().unwrap();
    let mut q1 = SocialQueue::new(vec![], None, 10, -2);
    let mut q2 = SocialQueue::new(vec![], None, 30, -8);
    q1.enqueue(a);
    q1.enqueue(b);
    q2.enqueue(c);
    q2.enqueue(d);

    let merged = SocialQueue::merge(&mut [&mut q1, &mut q2], by_id()).unwrap();
    assert_eq!(merged.friendship_threshold(), 20);
    assert_eq!(merged.rivalry_threshold(), 4);
    assert_eq!(ids(&merged), vec![1, 3, 2, 4]);
    assert!(q1.is_empty() && q2.is_empty());
}

#[test]
fn test_merge_without_sources_is_bad_param() {
    let result = SocialQueue::<Handle>::merge(&mut [], by_id());
    assert!(matches!(result, Err(QueueError::BadParam(_))));
}

#[test]
fn test_clone_drains_independently() {
    let mut source = SocialQueue::new(vec![], Some(by_id()), 0, 0);
    for p in people(&[5, 6, 7]) {
        source.enqueue(p);
    }
    let mut copy = source.clone();

    let from_copy: Vec<u32> = std::iter::from_fn(|| copy.dequeue()).map(|p| p.id).collect();
    assert_eq!(ids(&source), vec![5, 6, 7]);
    let from_source: Vec<u32> = std::iter::from_fn(|| source.dequeue()).map(|p| p.id).collect();
    assert_eq!(from_copy, from_source);
}

#[test]
fn test_quota_bounds_hold_under_pressure() {
    let everyone_likes_first = measure(|existing: &Handle, _: &Handle| match existing.id {
        0 => 100,
        1 => -100,
        _ => 0,
    });
    let mut queue = SocialQueue::new(vec![everyone_likes_first], None, 50, -50);
    for p in people(&(0..40).collect::<Vec<_>>()) {
        queue.enqueue(p);
    }
    queue.improve_positions().unwrap();

    for standing in queue.standings() {
        assert!(standing.friends_passed <= FRIEND_QUOTA);
        assert!(standing.rivals_blocked <= RIVAL_QUOTA);
    }
    assert_eq!(queue.len(), 40);
}

#[test]
fn test_improve_without_measures_is_a_no_op() {
    let mut queue = SocialQueue::new(vec![], None, -100, 100);
    for p in people(&[9, 8, 7, 6]) {
        queue.enqueue(p);
    }
    for _ in 0..3 {
        queue.improve_positions().unwrap();
        assert_eq!(ids(&queue), vec![9, 8, 7, 6]);
    }
}

#[test]
fn test_dropping_queue_keeps_elements_alive() {
    let handles = people(&[1, 2]);
    let mut queue = SocialQueue::new(vec![], None, 0, 0);
    for p in &handles {
        queue.enqueue(Rc::clone(p));
    }
    let copy = queue.clone();
    drop(queue);
    drop(copy);
    assert!(handles.iter().all(|h| Rc::strong_count(h) == 1));
    assert_eq!(handles[1].id, 2);
}

#[test]
fn test_contains_requires_comparison() {
    let handles = people(&[1, 2]);
    let mut with_cmp = SocialQueue::new(vec![], Some(by_id()), 0, 0);
    let mut without = SocialQueue::new(vec![], None, 0, 0);
    with_cmp.enqueue(Rc::clone(&handles[0]));
    without.enqueue(Rc::clone(&handles[0]));

    let lookalike = Rc::new(Person { id: 1 });
    assert!(with_cmp.contains(&lookalike));
    assert!(!with_cmp.contains(&handles[1]));
    assert!(!without.contains(&lookalike));
    assert!(matches!(
        without.try_contains(&lookalike),
        Err(QueueError::BadParam(_))
    ));
}
