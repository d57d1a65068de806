//! # pointquad - Adaptive Point Quadtree
//!
//! A spatial index for 2D point values that grows by splitting full cells
//! into quadrants, and answers axis-aligned rectangular range queries.
//!
//! ## Features
//!
//! - **Incremental Inserts**: Values are added one at a time, no build step
//! - **Pluggable Partitions**: Each leaf stores its values in a [`Partition`];
//!   [`VecPartition`] is the bounded default
//! - **Leaf List**: All leaves are linked in quadrant pre-order for
//!   allocation-free full scans
//! - **Snapshots**: [`NodeLayout`] exports and rebuilds a tree (serializable
//!   with the `serde` feature)
//!
//! ## Quick Start
//!
//! ```rust
//! use pointquad::prelude::*;
//!
//! // Root cell (min_x, min_y, max_x, max_y) with 4 values per leaf
//! let bounds = Envelope::new(0.0, 0.0, 100.0, 100.0);
//! let config = PartitionConfig::default().with_capacity(4);
//! let mut tree = QuadTree::with_config(bounds, config).unwrap();
//!
//! for (x, y) in [(10.0, 10.0), (20.0, 80.0), (75.0, 30.0), (60.0, 60.0), (12.0, 14.0)] {
//!     tree.insert(Coordinate::new(x, y)).unwrap();
//! }
//!
//! // The fifth value forced the root to split
//! assert_eq!(tree.leaf_count(), 4);
//!
//! // Range query over the bottom-left corner
//! let found: Vec<_> = tree.query(&Envelope::new(0.0, 0.0, 25.0, 25.0)).collect();
//! assert_eq!(found.len(), 2);
//!
//! // Walk every leaf through the leaf list
//! assert_eq!(tree.stream_leaves().count(), tree.leaf_count());
//! assert_eq!(tree.stream_values().count(), 5);
//! ```
//!
//! ## How It Works
//!
//! The tree starts as one leaf covering the root bounds. When a leaf's
//! partition refuses a value, the leaf is replaced by four children covering
//! the bottom-left, bottom-right, top-left and top-right quadrants of its cell
//! and its values are moved into whichever child contains them. The new
//! children take the old leaf's place in the leaf list, so the list always
//! matches a quadrant-ordered pre-order walk of the tree.
//!
//! Queries descend only into cells that touch the query rectangle and then
//! filter each leaf's partition by coordinate.

pub mod envelope;
pub mod error;
pub mod layout;
pub mod leaf_list;
pub mod node;
pub mod partition;
pub mod prelude;
pub mod quadtree;
pub mod value;
pub mod vec_partition;


pub use envelope::{Coordinate, Envelope};
pub use error::{ConfigError, QuadTreeError};
pub use layout::NodeLayout;
pub use leaf_list::LeafIter;
pub use node::{LeafId, LeafNode, Node, NonLeafNode, PartitionFactory, QUAD};
pub use partition::Partition;
pub use quadtree::QuadTree;
pub use value::PointValue;
pub use vec_partition::{PartitionConfig, VecPartition};
