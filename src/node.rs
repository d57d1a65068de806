//! Tree nodes: leaves owning partitions and non-leaves owning four quadrants.
//!
//! Leaves live in a [`LeafArena`] and are addressed by [`LeafId`]. The node
//! tree only stores handles to them, which lets the leaf list link leaves by
//! position without any ownership between neighbours. Insert and split are
//! free functions over the arena so a parent can swap a child slot while the
//! arena is being mutated.

use std::fmt;
use std::ops::{Index, IndexMut};

use tracing::{debug, error};

use crate::envelope::Envelope;
use crate::error::QuadTreeError;
use crate::partition::Partition;
use crate::value::PointValue;

/// Number of children of a [`NonLeafNode`]
pub const QUAD: usize = 4;

/// Builds the partition for a freshly created leaf cell
pub type PartitionFactory<P> = Box<dyn Fn(&Envelope) -> P + Send + Sync>;

/// Stable handle of a leaf inside its tree.
///
/// When a leaf splits, its handle is taken over by the new bottom-left child.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LeafId(usize);

impl LeafId {
    /// Position in the leaf arena
    pub fn index(self) -> usize {
        self.0
    }
}

/// Leaf cell: fixed bounds, one partition and its leaf-list neighbours.
#[derive(Clone, Debug)]
pub struct LeafNode<P> {
    bounds: Envelope,
    partition: P,
    pub(crate) prev: Option<LeafId>,
    pub(crate) next: Option<LeafId>,
}

/// Outcome of offering a value to a single leaf
#[derive(Debug)]
pub(crate) enum Inserted<V> {
    Stored,
    /// Partition is full but non-empty; the caller must split.
    Full(V),
}

impl<P: Partition> LeafNode<P> {
    pub(crate) fn new(bounds: Envelope, partition: P) -> Self {
        Self {
            bounds,
            partition,
            prev: None,
            next: None,
        }
    }

    /// Cell covered by this leaf
    pub fn bounds(&self) -> &Envelope {
        &self.bounds
    }

    /// Storage of this leaf
    pub fn partition(&self) -> &P {
        &self.partition
    }

    /// Number of values stored in this leaf
    pub fn value_count(&self) -> usize {
        self.partition.size()
    }

    /// Every value of this leaf
    pub fn values(&self) -> impl Iterator<Item = &P::Value> {
        self.partition.values()
    }

    /// Values inside `query`, empty if the cell does not touch it
    pub fn query(&self, query: &Envelope) -> impl Iterator<Item = &P::Value> {
        let query = *query;
        self.bounds
            .intersects(&query)
            .then(move || self.partition.intersects(query))
            .into_iter()
            .flatten()
    }

    /// Previous leaf in traversal order
    pub fn prev(&self) -> Option<LeafId> {
        self.prev
    }

    /// Next leaf in traversal order
    pub fn next(&self) -> Option<LeafId> {
        self.next
    }

    pub(crate) fn insert(&mut self, value: P::Value) -> Result<Inserted<P::Value>, QuadTreeError> {
        match self.partition.add(value, true) {
            Ok(()) => Ok(Inserted::Stored),
            Err(value) if self.partition.is_empty() => Err(QuadTreeError::TooBigValue {
                coordinate: value.coordinate(),
                cell: self.bounds,
            }),
            Err(value) => Ok(Inserted::Full(value)),
        }
    }
}

/// Owner of every leaf of one tree plus the strategy for creating new ones.
pub(crate) struct LeafArena<P> {
    leaves: Vec<LeafNode<P>>,
    factory: PartitionFactory<P>,
}

impl<P> fmt::Debug for LeafArena<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LeafArena")
            .field("leaves", &self.leaves.len())
            .finish_non_exhaustive()
    }
}

impl<P: Partition> LeafArena<P> {
    pub(crate) fn new(factory: PartitionFactory<P>) -> Self {
        Self {
            leaves: Vec::new(),
            factory,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.leaves.len()
    }

    pub(crate) fn get(&self, id: LeafId) -> Option<&LeafNode<P>> {
        self.leaves.get(id.0)
    }

    /// Allocates an unlinked leaf with a partition from the factory
    pub(crate) fn push(&mut self, bounds: Envelope) -> LeafId {
        let partition = (self.factory)(&bounds);
        self.push_with(bounds, partition)
    }

    /// Allocates an unlinked leaf around an existing partition
    pub(crate) fn push_with(&mut self, bounds: Envelope, partition: P) -> LeafId {
        self.leaves.push(LeafNode::new(bounds, partition));
        LeafId(self.leaves.len() - 1)
    }
}

impl<P> Index<LeafId> for LeafArena<P> {
    type Output = LeafNode<P>;

    fn index(&self, id: LeafId) -> &LeafNode<P> {
        &self.leaves[id.0]
    }
}

impl<P> IndexMut<LeafId> for LeafArena<P> {
    fn index_mut(&mut self, id: LeafId) -> &mut LeafNode<P> {
        &mut self.leaves[id.0]
    }
}

/// A tree node: either a leaf handle or a non-leaf with four quadrants.
#[derive(Clone, Debug)]
pub enum Node {
    /// Leaf cell stored in the tree's arena
    Leaf(LeafId),
    /// Subdivided cell
    NonLeaf(Box<NonLeafNode>),
}

impl Node {
    pub(crate) fn bounds<P: Partition>(&self, arena: &LeafArena<P>) -> Envelope {
        match self {
            Self::Leaf(id) => arena[*id].bounds,
            Self::NonLeaf(node) => node.bounds,
        }
    }

    /// Leftmost leaf reached by always descending into quadrant 0
    pub fn first_leaf(&self) -> LeafId {
        match self {
            Self::Leaf(id) => *id,
            Self::NonLeaf(node) => node.first_leaf(),
        }
    }

    /// Rightmost leaf reached by always descending into quadrant 3
    pub fn last_leaf(&self) -> LeafId {
        match self {
            Self::Leaf(id) => *id,
            Self::NonLeaf(node) => node.last_leaf(),
        }
    }

    /// Levels below and including this node; a leaf has depth 1
    pub fn depth(&self) -> usize {
        match self {
            Self::Leaf(_) => 1,
            Self::NonLeaf(node) => 1 + node.children.iter().map(Self::depth).max().unwrap_or(0),
        }
    }

    pub(crate) fn value_count<P: Partition>(&self, arena: &LeafArena<P>) -> usize {
        match self {
            Self::Leaf(id) => arena[*id].value_count(),
            Self::NonLeaf(node) => node.children.iter().map(|c| c.value_count(arena)).sum(),
        }
    }
}

/// Cell split into bottom-left, bottom-right, top-left and top-right children.
#[derive(Clone, Debug)]
pub struct NonLeafNode {
    bounds: Envelope,
    children: [Node; QUAD],
}

impl NonLeafNode {
    pub(crate) fn new(bounds: Envelope, children: [Node; QUAD]) -> Self {
        Self { bounds, children }
    }

    /// Cell covered by this node
    pub fn bounds(&self) -> &Envelope {
        &self.bounds
    }

    /// The four quadrant children in index order
    pub fn children(&self) -> &[Node; QUAD] {
        &self.children
    }

    /// First leaf of this subtree in traversal order
    pub fn first_leaf(&self) -> LeafId {
        let mut node = &self.children[0];
        loop {
            match node {
                Node::Leaf(id) => return *id,
                Node::NonLeaf(inner) => node = &inner.children[0],
            }
        }
    }

    /// Last leaf of this subtree in traversal order
    pub fn last_leaf(&self) -> LeafId {
        let mut node = &self.children[QUAD - 1];
        loop {
            match node {
                Node::Leaf(id) => return *id,
                Node::NonLeaf(inner) => node = &inner.children[QUAD - 1],
            }
        }
    }

    /// Depth-first collection of the leaves whose cell touches `query`
    pub(crate) fn collect_intersecting_leaves<P: Partition>(
        &self,
        arena: &LeafArena<P>,
        query: &Envelope,
        collected: &mut Vec<LeafId>,
    ) {
        for child in &self.children {
            if !child.bounds(arena).intersects(query) {
                continue;
            }
            match child {
                Node::Leaf(id) => collected.push(*id),
                Node::NonLeaf(inner) => inner.collect_intersecting_leaves(arena, query, collected),
            }
        }
    }

    /// First leaf in traversal order whose cell touches `query`
    pub(crate) fn first_intersecting_leaf<P: Partition>(
        &self,
        arena: &LeafArena<P>,
        query: &Envelope,
    ) -> Option<LeafId> {
        let child = self
            .children
            .iter()
            .find(|child| child.bounds(arena).intersects(query))?;
        match child {
            Node::Leaf(id) => Some(*id),
            Node::NonLeaf(inner) => inner.first_intersecting_leaf(arena, query),
        }
    }

    /// Inserts below this node, splitting the target leaf when it is full.
    ///
    /// Returns the leaf the value ended up in.
    pub(crate) fn insert<P: Partition>(
        &mut self,
        arena: &mut LeafArena<P>,
        value: P::Value,
    ) -> Result<LeafId, QuadTreeError> {
        let coord = value.coordinate();
        let Some(slot) = self
            .children
            .iter()
            .position(|child| child.bounds(arena).contains_coordinate(&coord))
        else {
            invariant_violation(format_args!(
                "no child of {} contains {coord} during insert",
                self.bounds
            ));
        };

        let id = match &mut self.children[slot] {
            Node::NonLeaf(child) => return child.insert(arena, value),
            Node::Leaf(id) => *id,
        };

        match arena[id].insert(value)? {
            Inserted::Stored => Ok(id),
            Inserted::Full(value) => {
                let mut split = split_leaf(arena, id)?;
                let result = split.insert(arena, value);
                self.children[slot] = Node::NonLeaf(split);
                result
            }
        }
    }
}

/// Replaces a full leaf by four quadrant leaves and redistributes its values.
///
/// The bottom-left child reuses the slot (and handle) of the split leaf,
/// so the leaf before it in traversal order keeps pointing at the right
/// place. The other three are appended to the arena and spliced in after it.
pub(crate) fn split_leaf<P: Partition>(
    arena: &mut LeafArena<P>,
    id: LeafId,
) -> Result<Box<NonLeafNode>, QuadTreeError> {
    let bounds = arena[id].bounds;
    if !bounds.is_divisible() {
        return Err(QuadTreeError::IndivisibleCell { cell: bounds });
    }

    let quadrants = bounds.quadrants();
    let old_next = arena[id].next;
    let fresh = (arena.factory)(&quadrants[0]);
    let old = std::mem::replace(&mut arena[id].partition, fresh);
    arena[id].bounds = quadrants[0];

    let children = [
        id,
        arena.push(quadrants[1]),
        arena.push(quadrants[2]),
        arena.push(quadrants[3]),
    ];
    for pair in children.windows(2) {
        arena.link(Some(pair[0]), Some(pair[1]));
    }
    arena.link(Some(children[QUAD - 1]), old_next);

    let before = old.size();
    for value in old.into_values() {
        let coord = value.coordinate();
        let Some(slot) = quadrants.iter().position(|q| q.contains_coordinate(&coord)) else {
            invariant_violation(format_args!("no quadrant of {bounds} contains {coord} during split"));
        };
        if arena[children[slot]].partition.add(value, false).is_err() {
            invariant_violation(format_args!(
                "quadrant {} rejected {coord} while splitting {bounds}",
                quadrants[slot]
            ));
        }
    }

    let counts = children.map(|child| arena[child].value_count());
    debug!("split {}: {} -> {:?}", bounds, before, counts);

    Ok(Box::new(NonLeafNode::new(bounds, children.map(Node::Leaf))))
}

#[cold]
#[track_caller]
pub(crate) fn invariant_violation(details: fmt::Arguments<'_>) -> ! {
    error!("quadtree invariant violated: {}", details);
    panic!("quadtree invariant violated: {details}");
}
