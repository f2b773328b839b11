//! Position finder: where an incoming element is entitled to stand.

use super::node::NodeStore;
use super::relation::Relations;

/// How many times a node may let a newcomer cut in right behind it.
pub const FRIEND_QUOTA: u32 = 5;

/// How many times a node may revoke a cut-in happening ahead of it.
pub const RIVAL_QUOTA: u32 = 3;

/// Scan from the head and return the anchor `item` may be inserted after,
/// or `None` for the back of the line.
///
/// The first friend with quota left becomes the anchor. A rival with quota
/// left, anywhere after that, revokes it and spends one block. The whole
/// line is scanned, last node included.
pub(crate) fn find_anchor<E>(
    nodes: &mut NodeStore<E>,
    relations: &Relations<E>,
    item: &E,
) -> Option<usize> {
    let mut anchor = None;
    let mut cursor = nodes.head();

    while let Some(key) = cursor {
        cursor = nodes.next_of(key);
        let Some(node) = nodes.get_mut(key) else {
            break;
        };

        if anchor.is_none()
            && node.friends_passed < FRIEND_QUOTA
            && relations.is_friend(&node.element, item)
        {
            anchor = Some(key);
        }
        if node.rivals_blocked < RIVAL_QUOTA && relations.is_rival(&node.element, item) {
            node.rivals_blocked += 1;
            anchor = None;
        }
    }

    anchor
}

/// Count one more newcomer passing the node at `key`.
pub(crate) fn pass<E>(nodes: &mut NodeStore<E>, key: usize) {
    if let Some(node) = nodes.get_mut(key) {
        node.friends_passed = (node.friends_passed + 1).min(FRIEND_QUOTA);
    }
}
