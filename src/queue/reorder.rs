//! Structural operations over a whole queue: cloning and repositioning.

use super::{position, SocialQueue};
use crate::error::QueueError;
use tracing::debug;

impl<E: Clone> Clone for SocialQueue<E> {
    /// Independent node sequence over the same element handles, with every
    /// counter copied. Measures and the comparison function are shared.
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes.clone(),
            relations: self.relations.clone(),
            comparison: self.comparison.clone(),
        }
    }
}

impl<E> SocialQueue<E> {
    /// Re-derive every node's place, from the back of the line to the front.
    ///
    /// Each node is visited once, in the order the line had before the pass.
    /// A visited node is lifted out and the rest of the line is scanned for an
    /// anchor, exactly as on enqueue. With an anchor it moves in right behind
    /// it; without one it goes back where it was. Counters are never reset, so a
    /// later pass may see quotas an earlier pass had available already spent.
    pub fn improve_positions(&mut self) -> Result<(), QueueError> {
        let order: Vec<usize> = self.nodes.keys().collect();
        let mut moved = 0usize;

        for &key in order.iter().rev() {
            let detached = self.nodes.detach(key).ok_or_else(|| {
                QueueError::Inconsistent(format!("node {} left the line mid-pass", key))
            })?;
            let node = detached.node;

            let anchor = position::find_anchor(&mut self.nodes, &self.relations, &node.element);

            match anchor {
                Some(anchor) => {
                    position::pass(&mut self.nodes, anchor);
                    self.nodes.insert_after(anchor, node);
                    moved += 1;
                }
                None => match detached.prev {
                    Some(prev) => {
                        self.nodes.insert_after(prev, node);
                    }
                    None => {
                        self.nodes.push_front(node);
                    }
                },
            }
        }

        debug!(nodes = order.len(), moved, "Improved positions");
        Ok(())
    }
}
