//! Social Queue
//!
//! An ordered queue where a newcomer's place depends on who is already in
//! line. A friend may let the newcomer cut in right behind them (at most
//! [`FRIEND_QUOTA`] times), and a rival standing between that spot and the
//! back of the line can revoke the favor (at most [`RIVAL_QUOTA`] times).
//!
//! Elements are handles supplied by the caller (`Rc<T>`, `&T`, ids). The queue
//! moves or clones the handle only; it never touches what the handle points
//! to.

mod merge;
mod node;
mod position;
mod relation;
mod reorder;

pub use position::{FRIEND_QUOTA, RIVAL_QUOTA};
pub use relation::{comparison, measure, ComparisonFn, FriendshipFn};

use crate::error::QueueError;
use node::{Node, NodeStore};
use relation::Relations;
use tracing::trace;

/// Quota counters of one queued node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Standing {
    pub friends_passed: u32,
    pub rivals_blocked: u32,
}

/// Relationship-ordered queue over element handles `E`.
pub struct SocialQueue<E> {
    nodes: NodeStore<E>,
    relations: Relations<E>,
    comparison: Option<ComparisonFn<E>>,
}

impl<E> SocialQueue<E> {
    /// Create an empty queue with the given measures, optional comparison
    /// function and threshold pair.
    pub fn new<I>(
        measures: I,
        comparison: Option<ComparisonFn<E>>,
        friendship_threshold: i32,
        rivalry_threshold: i32,
    ) -> Self
    where
        I: IntoIterator<Item = FriendshipFn<E>>,
    {
        Self {
            nodes: NodeStore::new(),
            relations: Relations::new(
                measures.into_iter().collect(),
                friendship_threshold,
                rivalry_threshold,
            ),
            comparison,
        }
    }

    /// Place `item` at the foremost position it is entitled to.
    pub fn enqueue(&mut self, item: E) {
        let anchor = position::find_anchor(&mut self.nodes, &self.relations, &item);
        match anchor {
            Some(anchor) => {
                position::pass(&mut self.nodes, anchor);
                self.nodes.insert_after(anchor, Node::new(item));
                trace!(anchor, "Enqueued behind a friend");
            }
            None => {
                self.nodes.push_back(Node::new(item));
                trace!("Enqueued at the back");
            }
        }
    }

    /// Remove and return the front element, `None` when empty.
    pub fn dequeue(&mut self) -> Option<E> {
        self.nodes.pop_front().map(|node| node.element)
    }

    /// Number of queued elements, counted by walking the line.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether some queued element compares equal to `element`.
    ///
    /// Always false for a queue built without a comparison function.
    pub fn contains(&self, element: &E) -> bool {
        self.try_contains(element).unwrap_or(false)
    }

    /// Like [`contains`](Self::contains) but reports a missing comparison
    /// function as `BadParam`.
    pub fn try_contains(&self, element: &E) -> Result<bool, QueueError> {
        let compare = self.comparison.as_ref().ok_or_else(|| {
            QueueError::BadParam("queue has no comparison function".to_string())
        })?;
        let same = compare(element, element);
        Ok(self.iter().any(|queued| compare(queued, element) == same))
    }

    /// Register one more friendship measure, consulted by all later
    /// evaluations.
    pub fn add_measure(&mut self, measure: FriendshipFn<E>) -> Result<(), QueueError> {
        self.relations.add_measure(measure)
    }

    pub fn update_friendship_threshold(&mut self, threshold: i32) {
        self.relations.friendship_threshold = threshold;
    }

    pub fn update_rivalry_threshold(&mut self, threshold: i32) {
        self.relations.rivalry_threshold = threshold;
    }

    pub fn friendship_threshold(&self) -> i32 {
        self.relations.friendship_threshold
    }

    pub fn rivalry_threshold(&self) -> i32 {
        self.relations.rivalry_threshold
    }

    pub fn measure_count(&self) -> usize {
        self.relations.measures().len()
    }

    /// Whether `incoming` counts as a friend of `queued`.
    pub fn is_friend(&self, queued: &E, incoming: &E) -> bool {
        self.relations.is_friend(queued, incoming)
    }

    /// Whether `incoming` counts as a rival of `queued`.
    pub fn is_rival(&self, queued: &E, incoming: &E) -> bool {
        self.relations.is_rival(queued, incoming)
    }

    /// Front-to-back element references.
    pub fn iter(&self) -> Iter<'_, E> {
        Iter {
            queue: self,
            keys: self.nodes.keys(),
        }
    }

    /// Front-to-back quota counters.
    pub fn standings(&self) -> Vec<Standing> {
        self.nodes
            .keys()
            .filter_map(|key| self.nodes.get(key))
            .map(|node| Standing {
                friends_passed: node.friends_passed,
                rivals_blocked: node.rivals_blocked,
            })
            .collect()
    }
}

impl<E: std::fmt::Debug> std::fmt::Debug for SocialQueue<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SocialQueue")
            .field("elements", &self.iter().collect::<Vec<_>>())
            .field("measures", &self.measure_count())
            .field("friendship_threshold", &self.friendship_threshold())
            .field("rivalry_threshold", &self.rivalry_threshold())
            .field("has_comparison", &self.comparison.is_some())
            .finish()
    }
}

/// Iterator over queued elements, front to back.
pub struct Iter<'a, E> {
    queue: &'a SocialQueue<E>,
    keys: node::Keys<'a, E>,
}

impl<'a, E> Iterator for Iter<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<&'a E> {
        let key = self.keys.next()?;
        self.queue.nodes.get(key).map(|node| &node.element)
    }
}

impl<'a, E> IntoIterator for &'a SocialQueue<E> {
    type Item = &'a E;
    type IntoIter = Iter<'a, E>;

    fn into_iter(self) -> Iter<'a, E> {
        self.iter()
    }
}
