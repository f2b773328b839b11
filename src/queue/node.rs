//! Node store: a doubly-linked sequence of nodes living in a slab.
//!
//! Keys are stable for as long as a node stays in the store, so links never
//! dangle after a removal. Counters belong to the node, not to its position.

use slab::Slab;

/// A queued element plus its quota counters.
#[derive(Debug, Clone)]
pub(crate) struct Node<E> {
    pub(crate) element: E,
    pub(crate) friends_passed: u32,
    pub(crate) rivals_blocked: u32,
    prev: Option<usize>,
    next: Option<usize>,
}

impl<E> Node<E> {
    pub(crate) fn new(element: E) -> Self {
        Self::with_counters(element, 0, 0)
    }

    pub(crate) fn with_counters(element: E, friends_passed: u32, rivals_blocked: u32) -> Self {
        Self {
            element,
            friends_passed,
            rivals_blocked,
            prev: None,
            next: None,
        }
    }
}

/// A node taken out of the sequence, with the predecessor it had.
pub(crate) struct Detached<E> {
    pub(crate) node: Node<E>,
    pub(crate) prev: Option<usize>,
}

#[derive(Debug, Clone)]
pub(crate) struct NodeStore<E> {
    slab: Slab<Node<E>>,
    head: Option<usize>,
    last: Option<usize>,
}

impl<E> Default for NodeStore<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> NodeStore<E> {
    pub(crate) fn new() -> Self {
        NodeStore {
            slab: Slab::new(),
            head: None,
            last: None,
        }
    }

    pub(crate) fn head(&self) -> Option<usize> {
        self.head
    }

    pub(crate) fn last(&self) -> Option<usize> {
        self.last
    }

    pub(crate) fn get(&self, key: usize) -> Option<&Node<E>> {
        self.slab.get(key)
    }

    pub(crate) fn get_mut(&mut self, key: usize) -> Option<&mut Node<E>> {
        self.slab.get_mut(key)
    }

    pub(crate) fn next_of(&self, key: usize) -> Option<usize> {
        self.slab.get(key).and_then(|n| n.next)
    }

    /// Count nodes by walking the links.
    pub(crate) fn len(&self) -> usize {
        self.keys().count()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Keys in front-to-back order.
    pub(crate) fn keys(&self) -> Keys<'_, E> {
        Keys {
            store: self,
            cursor: self.head,
        }
    }

    pub(crate) fn push_back(&mut self, node: Node<E>) -> usize {
        let key = self.slab.insert(node);
        let last = self.last;
        self.splice(last, key, None);
        key
    }

    pub(crate) fn push_front(&mut self, node: Node<E>) -> usize {
        let key = self.slab.insert(node);
        let head = self.head;
        self.splice(None, key, head);
        key
    }

    /// Insert `node` immediately after `anchor`. Falls back to the back of
    /// the sequence if `anchor` is not a live key.
    pub(crate) fn insert_after(&mut self, anchor: usize, node: Node<E>) -> usize {
        if !self.slab.contains(anchor) {
            return self.push_back(node);
        }
        let key = self.slab.insert(node);
        let next = self.next_of(anchor);
        self.splice(Some(anchor), key, next);
        key
    }

    /// Remove the node at `key` from the sequence and the slab.
    pub(crate) fn detach(&mut self, key: usize) -> Option<Detached<E>> {
        let node = self.slab.try_remove(key)?;
        let (prev, next) = (node.prev, node.next);

        match prev {
            Some(p) => {
                if let Some(n) = self.slab.get_mut(p) {
                    n.next = next;
                }
            }
            None => self.head = next,
        }
        match next {
            Some(n) => {
                if let Some(node) = self.slab.get_mut(n) {
                    node.prev = prev;
                }
            }
            None => self.last = prev,
        }

        Some(Detached { node, prev })
    }

    pub(crate) fn pop_front(&mut self) -> Option<Node<E>> {
        let head = self.head?;
        self.detach(head).map(|d| d.node)
    }

    fn splice(&mut self, prev: Option<usize>, key: usize, next: Option<usize>) {
        if let Some(node) = self.slab.get_mut(key) {
            node.prev = prev;
            node.next = next;
        }
        match prev {
            Some(p) => {
                if let Some(node) = self.slab.get_mut(p) {
                    node.next = Some(key);
                }
            }
            None => self.head = Some(key),
        }
        match next {
            Some(n) => {
                if let Some(node) = self.slab.get_mut(n) {
                    node.prev = Some(key);
                }
            }
            None => self.last = Some(key),
        }
    }
}

/// Front-to-back key iterator.
pub(crate) struct Keys<'a, E> {
    store: &'a NodeStore<E>,
    cursor: Option<usize>,
}

impl<E> Iterator for Keys<'_, E> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let key = self.cursor?;
        self.cursor = self.store.next_of(key);
        Some(key)
    }
}
