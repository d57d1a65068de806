//! The point quadtree.

use tracing::trace;

use crate::envelope::Envelope;
use crate::error::{ConfigError, QuadTreeError};
use crate::leaf_list::LeafIter;
use crate::node::{invariant_violation, split_leaf, Inserted, LeafArena, LeafId, LeafNode, Node};
use crate::partition::Partition;
use crate::value::PointValue;
use crate::vec_partition::{PartitionConfig, VecPartition};

/// Adaptive quadtree over point values.
///
/// Starts as a single leaf covering the root bounds. A leaf whose partition
/// fills up is split into four quadrant leaves and its values are
/// redistributed. All leaves are additionally threaded into a doubly-linked
/// list in quadrant pre-order, which [`QuadTree::stream_leaves`] walks
/// without descending the tree.
///
/// The tree is append-only and not synchronized. It is `Send` and `Sync`
/// whenever its partitions are, so it can be queried from several threads
/// through an `Arc`; inserts need exclusive access (`&mut self`).
///
/// # Example
///
/// ```
/// use pointquad::prelude::*;
///
/// let config = PartitionConfig::default().with_capacity(4);
/// let mut tree = QuadTree::with_config(Envelope::new(0.0, 0.0, 100.0, 100.0), config).unwrap();
///
/// for i in 1..=5 {
///     let v = i as f64;
///     tree.insert(Coordinate::new(v, v)).unwrap();
/// }
///
/// let hits: Vec<_> = tree.query(&Envelope::new(0.0, 0.0, 10.0, 10.0)).collect();
/// assert_eq!(hits.len(), 5);
/// assert_eq!(tree.query(&Envelope::new(50.0, 50.0, 100.0, 100.0)).count(), 0);
/// ```
#[derive(Debug)]
pub struct QuadTree<P: Partition> {
    root_bounds: Envelope,
    root: Node,
    arena: LeafArena<P>,
}

impl<P: Partition> QuadTree<P> {
    /// Creates an empty tree covering `bounds`.
    ///
    /// `factory` builds the partition of every leaf, including the ones
    /// created by later splits; it receives the new leaf's cell.
    pub fn new(
        bounds: Envelope,
        factory: impl Fn(&Envelope) -> P + Send + Sync + 'static,
    ) -> Self {
        let mut arena = LeafArena::new(Box::new(factory));
        let root = Node::Leaf(arena.push(bounds));
        Self::from_parts(bounds, root, arena)
    }

    pub(crate) fn from_parts(root_bounds: Envelope, root: Node, arena: LeafArena<P>) -> Self {
        Self {
            root_bounds,
            root,
            arena,
        }
    }

    pub(crate) fn arena(&self) -> &LeafArena<P> {
        &self.arena
    }

    /// Bounds of the root cell
    pub fn root_bounds(&self) -> &Envelope {
        &self.root_bounds
    }

    /// Root node, a leaf until the first split
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Looks up a leaf by handle
    pub fn leaf(&self, id: LeafId) -> Option<&LeafNode<P>> {
        self.arena.get(id)
    }

    /// Inserts a value and returns the leaf it was stored in.
    ///
    /// # Errors
    /// - [`QuadTreeError::TooBigValue`] if an empty partition refuses the value.
    /// - [`QuadTreeError::IndivisibleCell`] if the target leaf is full and its
    ///   cell is too small to split further.
    ///
    /// The tree stays valid after either error.
    ///
    /// # Panics
    /// Panics if the value lies outside [`QuadTree::root_bounds`], or if a
    /// split cannot place a value into any quadrant.
    pub fn insert(&mut self, value: P::Value) -> Result<LeafId, QuadTreeError> {
        let coord = value.coordinate();
        if !self.root_bounds.contains_coordinate(&coord) {
            invariant_violation(format_args!(
                "value at {coord} lies outside the root bounds {}",
                self.root_bounds
            ));
        }
        trace!("insert {}", coord);

        let mut value = value;
        loop {
            let id = match &mut self.root {
                Node::NonLeaf(root) => return root.insert(&mut self.arena, value),
                Node::Leaf(id) => *id,
            };
            match self.arena[id].insert(value)? {
                Inserted::Stored => return Ok(id),
                Inserted::Full(rejected) => {
                    value = rejected;
                    self.root = Node::NonLeaf(split_leaf(&mut self.arena, id)?);
                }
            }
        }
    }

    /// Total number of stored values
    pub fn len(&self) -> usize {
        self.root.value_count(&self.arena)
    }

    /// Returns true if no value has been stored
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of leaves
    pub fn leaf_count(&self) -> usize {
        self.arena.len()
    }

    /// Height of the tree; 1 while the root is a leaf
    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    /// Head of the leaf list
    pub fn first_leaf(&self) -> &LeafNode<P> {
        &self.arena[self.root.first_leaf()]
    }

    /// Tail of the leaf list
    pub fn last_leaf(&self) -> &LeafNode<P> {
        &self.arena[self.root.last_leaf()]
    }

    /// First leaf in traversal order whose cell touches `query`
    pub fn first_intersecting_leaf(&self, query: &Envelope) -> Option<&LeafNode<P>> {
        let id = match &self.root {
            Node::Leaf(id) => self.arena[*id].bounds().intersects(query).then_some(*id),
            Node::NonLeaf(root) => root.first_intersecting_leaf(&self.arena, query),
        }?;
        Some(&self.arena[id])
    }

    /// Leaves whose cell touches `query`, in traversal order.
    ///
    /// Only cell bounds are tested, so a returned leaf may hold no value
    /// inside `query`.
    pub fn query_leaves(&self, query: &Envelope) -> Vec<&LeafNode<P>> {
        let mut ids = Vec::new();
        match &self.root {
            Node::Leaf(id) => {
                if self.arena[*id].bounds().intersects(query) {
                    ids.push(*id);
                }
            }
            Node::NonLeaf(root) => root.collect_intersecting_leaves(&self.arena, query, &mut ids),
        }
        ids.into_iter().map(|id| &self.arena[id]).collect()
    }

    /// Values whose coordinate lies inside `query`, grouped by leaf
    pub fn query(&self, query: &Envelope) -> impl Iterator<Item = &P::Value> {
        self.query_leaves(query)
            .into_iter()
            .flat_map(move |leaf| leaf.query(query))
    }

    /// Every leaf, following the leaf list from [`QuadTree::first_leaf`]
    pub fn stream_leaves(&self) -> LeafIter<'_, P> {
        LeafIter::new(&self.arena, Some(self.root.first_leaf()))
    }

    /// Every stored value, leaf by leaf in leaf-list order
    pub fn stream_values(&self) -> impl Iterator<Item = &P::Value> {
        self.stream_leaves().flat_map(|leaf| leaf.values())
    }
}

impl<V: PointValue> QuadTree<VecPartition<V>> {
    /// Creates an empty tree whose leaves use [`VecPartition`] sized by `config`.
    ///
    /// # Errors
    /// Returns the [`ConfigError`] reported by [`PartitionConfig::validate`].
    pub fn with_config(bounds: Envelope, config: PartitionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(bounds, config.factory()))
    }
}
