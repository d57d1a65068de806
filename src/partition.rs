//! Per-leaf value storage.

use crate::envelope::Envelope;
use crate::value::PointValue;

/// Capacity-bounded container for the values of one leaf cell.
///
/// A partition is owned by exactly one leaf. Capacity exhaustion is reported
/// through [`Partition::add`] handing the value back, never by panicking.
/// Implementations must accept at least one value while empty unless the
/// value can never be stored; the tree treats a rejection by an empty
/// partition as [`QuadTreeError::TooBigValue`](crate::QuadTreeError::TooBigValue).
pub trait Partition {
    /// Stored value type
    type Value: PointValue;

    /// Number of stored values
    fn size(&self) -> usize;

    /// Returns true if nothing is stored
    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Bounding box of the stored values, `None` when empty.
    ///
    /// This is informational and unrelated to the cell bounds of the leaf.
    fn bounds(&self) -> Option<Envelope> {
        let mut values = self.values();
        let first = values.next()?.envelope();
        Some(values.fold(first, |env, v| env.expand_to_include(&v.coordinate())))
    }

    /// All stored values in a stable, unspecified order
    fn values(&self) -> impl Iterator<Item = &Self::Value>;

    /// Stored values whose coordinate lies inside `query`
    fn intersects(&self, query: Envelope) -> impl Iterator<Item = &Self::Value> {
        self.values()
            .filter(move |v| query.contains_coordinate(&v.coordinate()))
    }

    /// Tries to store `value`.
    ///
    /// With `reserve_for_speed` set, an implementation may refuse early to
    /// keep spare room for cheaper future inserts. Without it the partition
    /// must pack up to its real capacity; leaf splitting relies on this.
    ///
    /// # Errors
    /// Returns the value back when the partition is full.
    fn add(&mut self, value: Self::Value, reserve_for_speed: bool) -> Result<(), Self::Value>;

    /// Attempts to grow capacity. Returns true if it grew.
    fn expand(&mut self) -> bool {
        false
    }

    /// Consumes the partition, yielding every stored value
    fn into_values(self) -> impl Iterator<Item = Self::Value>
    where
        Self: Sized;
}
