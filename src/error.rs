//! Error types.

use thiserror::Error;

use crate::envelope::{Coordinate, Envelope};

/// Failures surfaced by [`QuadTree`](crate::QuadTree) operations.
///
/// None of these leave the tree in an inconsistent state; the failed value is
/// simply not stored.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum QuadTreeError {
    /// An empty partition refused the value, so no amount of splitting helps.
    #[error("value at {coordinate} does not fit into the empty partition of cell {cell}")]
    TooBigValue {
        /// Location of the rejected value
        coordinate: Coordinate,
        /// Cell of the leaf that refused it
        cell: Envelope,
    },

    /// A full leaf needs to split but its cell can no longer be bisected.
    #[error("cell {cell} is full and cannot be subdivided further")]
    IndivisibleCell {
        /// Cell of the leaf that could not split
        cell: Envelope,
    },

    /// A pre-built node's children do not quadrisect its bounds.
    #[error("child {index} of node {parent} has bounds {found}, expected {expected}")]
    InvalidLayout {
        /// Bounds of the offending non-leaf node
        parent: Envelope,
        /// Quadrant index of the mismatching child
        index: usize,
        /// Bounds implied by midpoint bisection
        expected: Envelope,
        /// Bounds the child actually declares
        found: Envelope,
    },

    /// A pre-built leaf holds a value outside its own cell.
    #[error("value at {coordinate} lies outside its leaf cell {cell}")]
    MisplacedValue {
        /// Location of the stray value
        coordinate: Coordinate,
        /// Cell of the leaf holding it
        cell: Envelope,
    },
}

/// Rejected [`PartitionConfig`](crate::PartitionConfig) values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// Capacity must allow at least one value per leaf.
    #[error("partition capacity must be at least 1")]
    ZeroCapacity,

    /// Reserved headroom has to leave room for at least one value.
    #[error("reserve {reserve} must be smaller than capacity {capacity}")]
    ReserveTooLarge {
        /// Configured reserve
        reserve: usize,
        /// Configured capacity
        capacity: usize,
    },

    /// Growth limit below the starting capacity.
    #[error("max capacity {max_capacity} is below capacity {capacity}")]
    MaxBelowCapacity {
        /// Configured growth limit
        max_capacity: usize,
        /// Configured capacity
        capacity: usize,
    },
}
