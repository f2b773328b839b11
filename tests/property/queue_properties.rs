//! Property-based tests for queue invariants

use proptest::prelude::*;
use socialq::queue::{measure, FriendshipFn, FRIEND_QUOTA, RIVAL_QUOTA};
use socialq::SocialQueue;

/// Deterministic pseudo-random score for a pair, seeded per test case.
fn scored(seed: u64) -> FriendshipFn<u32> {
    measure(move |a: &u32, b: &u32| {
        let mut x = seed ^ (u64::from(*a) << 32) ^ u64::from(*b);
        x ^= x >> 33;
        x = x.wrapping_mul(0xff51_afd7_ed55_8ccd);
        x ^= x >> 33;
        (x % 201) as i32 - 100
    })
}

proptest! {
    #[test]
    fn prop_size_counts_every_enqueue(
        items in prop::collection::vec(0u32..1000, 0..60),
        seed in any::<u64>(),
        friendship in -100i32..100,
        rivalry in -100i32..100,
    ) {
        let mut queue = SocialQueue::new(vec![scored(seed)], None, friendship, rivalry);
        for &item in &items {
            queue.enqueue(item);
        }
        prop_assert_eq!(queue.len(), items.len());

        let mut drained: Vec<u32> = std::iter::from_fn(|| queue.dequeue()).collect();
        let mut expected = items.clone();
        drained.sort_unstable();
        expected.sort_unstable();
        prop_assert_eq!(drained, expected);
    }

    #[test]
    fn prop_clone_round_trip(
        items in prop::collection::vec(0u32..1000, 0..40),
        seed in any::<u64>(),
    ) {
        let mut source = SocialQueue::new(vec![scored(seed)], None, 30, -30);
        for &item in &items {
            source.enqueue(item);
        }
        let mut copy = source.clone();

        let from_copy: Vec<u32> = std::iter::from_fn(|| copy.dequeue()).collect();
        prop_assert_eq!(source.len(), items.len());
        let from_source: Vec<u32> = std::iter::from_fn(|| source.dequeue()).collect();
        prop_assert_eq!(from_copy, from_source);
    }

    #[test]
    fn prop_quotas_never_exceeded(
        items in prop::collection::vec(0u32..50, 0..60),
        seed in any::<u64>(),
        passes in 0usize..4,
    ) {
        let mut queue = SocialQueue::new(vec![scored(seed)], None, 0, 0);
        for &item in &items {
            queue.enqueue(item);
        }
        for _ in 0..passes {
            queue.improve_positions().unwrap();
        }
        prop_assert_eq!(queue.len(), items.len());
        for standing in queue.standings() {
            prop_assert!(standing.friends_passed <= FRIEND_QUOTA);
            prop_assert!(standing.rivals_blocked <= RIVAL_QUOTA);
        }
    }

    #[test]
    fn prop_improve_without_measures_keeps_order(
        items in prop::collection::vec(any::<u32>(), 0..40),
        passes in 1usize..4,
    ) {
        let mut queue = SocialQueue::new(vec![], None, 0, 0);
        for &item in &items {
            queue.enqueue(item);
        }
        for _ in 0..passes {
            queue.improve_positions().unwrap();
        }
        prop_assert_eq!(queue.iter().copied().collect::<Vec<_>>(), items);
    }

    #[test]
    fn prop_merge_preserves_every_element(
        left in prop::collection::vec(0u32..100, 0..20),
        right in prop::collection::vec(100u32..200, 0..20),
    ) {
        let mut q1 = SocialQueue::new(vec![], None, 10, 3);
        let mut q2 = SocialQueue::new(vec![], None, 20, 12);
        for &x in &left { q1.enqueue(x); }
        for &x in &right { q2.enqueue(x); }

        let cmp = socialq::queue::comparison(|a: &u32, b: &u32| (*a as i64 - *b as i64).signum() as i32);
        let merged = SocialQueue::merge(&mut [&mut q1, &mut q2], cmp).unwrap();
        prop_assert_eq!(merged.len(), left.len() + right.len());
        prop_assert_eq!(merged.friendship_threshold(), 15);
        prop_assert_eq!(merged.rivalry_threshold(), 6);
        prop_assert!(q1.is_empty() && q2.is_empty());
    }
}
