//! N-way round-robin merge of independently configured queues.

use super::relation::FriendshipFn;
use super::{ComparisonFn, SocialQueue};
use crate::error::QueueError;
use tracing::debug;

impl<E> SocialQueue<E> {
    /// Drain `sources` into one new queue.
    ///
    /// The merged queue gets every source's measures in source order, the
    /// truncated mean of the friendship thresholds, and the integer ceiling
    /// n-th root of the product of the absolute rivalry thresholds. Sources
    /// take turns handing over their front element, which goes through the
    /// merged queue's regular enqueue, until all of them are empty.
    pub fn merge(
        sources: &mut [&mut SocialQueue<E>],
        comparison: ComparisonFn<E>,
    ) -> Result<Self, QueueError> {
        if sources.is_empty() {
            return Err(QueueError::BadParam("no queues to merge".to_string()));
        }

        let total: usize = sources.iter().map(|q| q.relations.measures().len()).sum();
        let mut measures: Vec<FriendshipFn<E>> = Vec::new();
        measures.try_reserve_exact(total)?;
        for source in sources.iter() {
            measures.extend(source.relations.measures().iter().cloned());
        }

        let friendship: Vec<i32> = sources.iter().map(|q| q.friendship_threshold()).collect();
        let rivalry: Vec<i32> = sources.iter().map(|q| q.rivalry_threshold()).collect();
        let friendship_threshold = merged_friendship_threshold(&friendship);
        let rivalry_threshold = merged_rivalry_threshold(&rivalry);

        let mut merged = SocialQueue::new(
            measures,
            Some(comparison),
            friendship_threshold,
            rivalry_threshold,
        );

        let mut moved = 0usize;
        loop {
            let mut round = 0usize;
            for source in sources.iter_mut() {
                if let Some(element) = source.dequeue() {
                    merged.enqueue(element);
                    round += 1;
                }
            }
            if round == 0 {
                break;
            }
            moved += round;
        }

        debug!(
            sources = sources.len(),
            moved,
            friendship_threshold,
            rivalry_threshold,
            "Merged queues"
        );
        Ok(merged)
    }
}

/// Truncated mean. Empty input yields 0.
pub(crate) fn merged_friendship_threshold(thresholds: &[i32]) -> i32 {
    if thresholds.is_empty() {
        return 0;
    }
    let sum: i64 = thresholds.iter().map(|&t| i64::from(t)).sum();
    (sum / thresholds.len() as i64) as i32
}

/// Smallest `r` with `r^n >= |t1| * .. * |tn|`, the product taken in
/// wrapping 32-bit unsigned arithmetic.
pub(crate) fn merged_rivalry_threshold(thresholds: &[i32]) -> i32 {
    let product = thresholds
        .iter()
        .fold(1u32, |acc, t| acc.wrapping_mul(t.unsigned_abs()));
    let root = ceil_nth_root(u64::from(product), thresholds.len() as u32);
    i32::try_from(root).unwrap_or(i32::MAX)
}

fn ceil_nth_root(value: u64, n: u32) -> u64 {
    if n == 0 || value <= 1 {
        return if n == 0 { 0 } else { value };
    }
    let reaches = |r: u64| r.checked_pow(n).map_or(true, |p| p >= value);

    let (mut lo, mut hi) = (0u64, value);
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if reaches(mid) {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }
    lo
}
