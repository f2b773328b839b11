//! Relationship evaluator: friendship measures and the threshold pair.

use crate::error::QueueError;
use std::rc::Rc;

/// Scores an ordered pair `(queued, incoming)`. Higher means friendlier.
pub type FriendshipFn<E> = Rc<dyn Fn(&E, &E) -> i32>;

/// Compares two elements; equal elements compare the same way an element
/// compares with itself.
pub type ComparisonFn<E> = Rc<dyn Fn(&E, &E) -> i32>;

/// Wrap a closure as a [`FriendshipFn`].
pub fn measure<E, F>(f: F) -> FriendshipFn<E>
where
    F: Fn(&E, &E) -> i32 + 'static,
{
    Rc::new(f)
}

/// Wrap a closure as a [`ComparisonFn`].
pub fn comparison<E, F>(f: F) -> ComparisonFn<E>
where
    F: Fn(&E, &E) -> i32 + 'static,
{
    Rc::new(f)
}

pub(crate) struct Relations<E> {
    measures: Vec<FriendshipFn<E>>,
    pub(crate) friendship_threshold: i32,
    pub(crate) rivalry_threshold: i32,
}

impl<E> Clone for Relations<E> {
    fn clone(&self) -> Self {
        Self {
            measures: self.measures.clone(),
            friendship_threshold: self.friendship_threshold,
            rivalry_threshold: self.rivalry_threshold,
        }
    }
}

impl<E> Relations<E> {
    pub(crate) fn new(
        measures: Vec<FriendshipFn<E>>,
        friendship_threshold: i32,
        rivalry_threshold: i32,
    ) -> Self {
        Self {
            measures,
            friendship_threshold,
            rivalry_threshold,
        }
    }

    pub(crate) fn measures(&self) -> &[FriendshipFn<E>] {
        &self.measures
    }

    pub(crate) fn add_measure(&mut self, measure: FriendshipFn<E>) -> Result<(), QueueError> {
        self.measures.try_reserve(1)?;
        self.measures.push(measure);
        Ok(())
    }

    /// Any single measure above the friendship threshold makes a friend.
    pub(crate) fn is_friend(&self, queued: &E, incoming: &E) -> bool {
        self.measures
            .iter()
            .any(|f| f(queued, incoming) > self.friendship_threshold)
    }

    /// Not a friend, and the truncated mean of all measures falls below the
    /// rivalry threshold. No measures means no rivals.
    pub(crate) fn is_rival(&self, queued: &E, incoming: &E) -> bool {
        if self.measures.is_empty() || self.is_friend(queued, incoming) {
            return false;
        }
        let sum: i64 = self
            .measures
            .iter()
            .map(|f| i64::from(f(queued, incoming)))
            .sum();
        let mean = sum / self.measures.len() as i64;
        mean < i64::from(self.rivalry_threshold)
    }
}
