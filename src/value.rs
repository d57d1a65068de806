//! The capability a value needs to be stored in a [`QuadTree`](crate::QuadTree).

use crate::envelope::{Coordinate, Envelope};

/// Anything with a 2D location.
///
/// The tree only ever looks at [`PointValue::coordinate`]; the envelope is
/// derived from it and is always degenerate. The remaining methods are
/// conveniences over [`PointValue::envelope`].
pub trait PointValue {
    /// Location used for cell assignment and range filtering
    fn coordinate(&self) -> Coordinate;

    /// Zero-area envelope at [`PointValue::coordinate`]
    fn envelope(&self) -> Envelope {
        Envelope::from_coordinate(self.coordinate())
    }

    /// Returns true if this value's envelope touches `query`
    fn intersects(&self, query: &Envelope) -> bool {
        self.envelope().intersects(query)
    }

    /// Returns true if the envelopes of both values touch
    fn intersects_value<O: PointValue + ?Sized>(&self, other: &O) -> bool {
        self.envelope().intersects(&other.envelope())
    }

    /// Returns true if this value's envelope covers `other`'s.
    ///
    /// For two points this only holds when they coincide.
    fn contains<O: PointValue + ?Sized>(&self, other: &O) -> bool {
        self.envelope().contains(&other.envelope())
    }

    /// Returns true if `other`'s envelope covers this value's
    fn contained_by<O: PointValue + ?Sized>(&self, other: &O) -> bool {
        other.envelope().contains(&self.envelope())
    }
}

impl PointValue for Coordinate {
    fn coordinate(&self) -> Coordinate {
        *self
    }
}

impl<V: PointValue + ?Sized> PointValue for &V {
    fn coordinate(&self) -> Coordinate {
        (**self).coordinate()
    }
}
