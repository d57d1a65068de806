//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types from the crate.
//! Users can import everything they need with:
//!
//! ```
//! use pointquad::prelude::*;
//! ```

pub use crate::{
    Coordinate, Envelope, LeafId, LeafNode, NodeLayout, Partition, PartitionConfig, PointValue,
    QuadTree, QuadTreeError, VecPartition,
};
