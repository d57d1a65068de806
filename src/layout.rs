//! Owned, quadrant-ordered snapshot of a tree.
//!
//! A [`NodeLayout`] is how a pre-built root is handed to
//! [`QuadTree::from_layout`], e.g. after loading it from storage, and what
//! [`QuadTree::to_layout`] exports. With the `serde` feature it can be
//! serialized directly.

use tracing::debug;

use crate::envelope::Envelope;
use crate::error::QuadTreeError;
use crate::node::{LeafArena, LeafId, Node, NonLeafNode, QUAD};
use crate::partition::Partition;
use crate::quadtree::QuadTree;
use crate::value::PointValue;

/// Serializable mirror of [`Node`] with partitions stored inline.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeLayout<P> {
    /// Leaf cell and its values
    Leaf {
        /// Cell bounds
        bounds: Envelope,
        /// Values of the cell
        partition: P,
    },
    /// Cell split into four quadrants
    NonLeaf {
        /// Cell bounds
        bounds: Envelope,
        /// Bottom-left, bottom-right, top-left, top-right
        children: Box<[NodeLayout<P>; QUAD]>,
    },
}

impl<P> NodeLayout<P> {
    /// Cell bounds of this node
    pub fn bounds(&self) -> &Envelope {
        match self {
            Self::Leaf { bounds, .. } | Self::NonLeaf { bounds, .. } => bounds,
        }
    }
}

impl<P: Partition> QuadTree<P> {
    /// Rebuilds a tree from a pre-built root.
    ///
    /// Leaves are linked in quadrant pre-order. `factory` is used for the
    /// leaves of later splits only; the given partitions are kept as they are.
    ///
    /// # Errors
    /// - [`QuadTreeError::InvalidLayout`] if some non-leaf's children do not
    ///   match the midpoint quadrants of its bounds.
    /// - [`QuadTreeError::MisplacedValue`] if a leaf holds a value outside
    ///   its cell.
    pub fn from_layout(
        layout: NodeLayout<P>,
        factory: impl Fn(&Envelope) -> P + Send + Sync + 'static,
    ) -> Result<Self, QuadTreeError> {
        let root_bounds = *layout.bounds();
        let mut arena = LeafArena::new(Box::new(factory));
        let mut last = None;
        let root = rebuild(layout, &mut arena, &mut last)?;
        debug!("rebuilt tree {} with {} leaves", root_bounds, arena.len());
        Ok(Self::from_parts(root_bounds, root, arena))
    }

    /// Snapshot of the current structure and values
    pub fn to_layout(&self) -> NodeLayout<P>
    where
        P: Clone,
    {
        export(self.root(), self.arena())
    }
}

fn rebuild<P: Partition>(
    layout: NodeLayout<P>,
    arena: &mut LeafArena<P>,
    last: &mut Option<LeafId>,
) -> Result<Node, QuadTreeError> {
    match layout {
        NodeLayout::Leaf { bounds, partition } => {
            if let Some(value) = partition
                .values()
                .find(|v| !bounds.contains_coordinate(&v.coordinate()))
            {
                return Err(QuadTreeError::MisplacedValue {
                    coordinate: value.coordinate(),
                    cell: bounds,
                });
            }
            let id = arena.push_with(bounds, partition);
            arena.link(*last, Some(id));
            *last = Some(id);
            Ok(Node::Leaf(id))
        }
        NodeLayout::NonLeaf { bounds, children } => {
            let quadrants = bounds.quadrants();
            for (index, (child, expected)) in children.iter().zip(quadrants).enumerate() {
                if *child.bounds() != expected {
                    return Err(QuadTreeError::InvalidLayout {
                        parent: bounds,
                        index,
                        expected,
                        found: *child.bounds(),
                    });
                }
            }
            let [bl, br, tl, tr] = *children;
            let children = [
                rebuild(bl, arena, last)?,
                rebuild(br, arena, last)?,
                rebuild(tl, arena, last)?,
                rebuild(tr, arena, last)?,
            ];
            Ok(Node::NonLeaf(Box::new(NonLeafNode::new(bounds, children))))
        }
    }
}

fn export<P: Partition + Clone>(node: &Node, arena: &LeafArena<P>) -> NodeLayout<P> {
    match node {
        Node::Leaf(id) => {
            let leaf = &arena[*id];
            NodeLayout::Leaf {
                bounds: *leaf.bounds(),
                partition: leaf.partition().clone(),
            }
        }
        Node::NonLeaf(inner) => NodeLayout::NonLeaf {
            bounds: *inner.bounds(),
            children: Box::new(inner.children().each_ref().map(|child| export(child, arena))),
        },
    }
}
