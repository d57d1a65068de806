//! Doubly-linked traversal order over all leaves.
//!
//! Links are [`LeafId`] handles into the arena, never ownership. Following
//! `next` from the first leaf visits every leaf once, in the order of a
//! quadrant 0 to 3 pre-order descent.

use std::iter::FusedIterator;

use crate::node::{LeafArena, LeafId, LeafNode};
use crate::partition::Partition;

impl<P: Partition> LeafArena<P> {
    /// Makes `prev` and `next` adjacent. Either side may be the list end.
    pub(crate) fn link(&mut self, prev: Option<LeafId>, next: Option<LeafId>) {
        if let Some(prev) = prev {
            self[prev].next = next;
        }
        if let Some(next) = next {
            self[next].prev = prev;
        }
    }
}

/// Iterator walking the leaf list from a starting leaf via `next` links.
///
/// Created by [`QuadTree::stream_leaves`](crate::QuadTree::stream_leaves).
#[derive(Debug)]
pub struct LeafIter<'a, P> {
    arena: &'a LeafArena<P>,
    next: Option<LeafId>,
}

impl<'a, P: Partition> LeafIter<'a, P> {
    pub(crate) fn new(arena: &'a LeafArena<P>, first: Option<LeafId>) -> Self {
        Self { arena, next: first }
    }
}

impl<'a, P: Partition> Iterator for LeafIter<'a, P> {
    type Item = &'a LeafNode<P>;

    fn next(&mut self) -> Option<Self::Item> {
        let leaf = &self.arena[self.next?];
        self.next = leaf.next;
        Some(leaf)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.next {
            Some(_) => (1, Some(self.arena.len())),
            None => (0, Some(0)),
        }
    }
}

impl<P: Partition> FusedIterator for LeafIter<'_, P> {}
