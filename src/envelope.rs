//! Axis-aligned rectangles and 2D coordinates.
//!
//! All containment and intersection tests treat boundaries as closed, so a
//! coordinate lying exactly on a shared quadrant edge is contained by every
//! cell that touches it. Callers that need a single owner resolve ties by
//! scanning quadrants in index order.

use std::fmt;

/// A 2D point.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    /// Horizontal position
    pub x: f64,
    /// Vertical position
    pub y: f64,
}

impl Coordinate {
    /// Creates a coordinate at `(x, y)`
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Axis-aligned rectangle: min_x, min_y, max_x, max_y
///
/// Immutable once constructed. A degenerate (zero-area) envelope is valid and
/// is how point values describe their extent.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Envelope {
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
}

impl Envelope {
    /// Creates an envelope from two corners.
    ///
    /// Arguments follow the `(min_x, min_y, max_x, max_y)` order. Swapped
    /// bounds are normalized, so `Envelope::new(10.0, 0.0, 0.0, 10.0)` covers
    /// the same area as `Envelope::new(0.0, 0.0, 10.0, 10.0)`.
    ///
    /// # Example
    /// ```
    /// use pointquad::Envelope;
    /// let env = Envelope::new(0.0, 0.0, 100.0, 50.0);
    /// assert_eq!(env.width(), 100.0);
    /// assert_eq!(env.height(), 50.0);
    /// ```
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x: min_x.min(max_x),
            min_y: min_y.min(max_y),
            max_x: min_x.max(max_x),
            max_y: min_y.max(max_y),
        }
    }

    /// Zero-area envelope covering exactly one coordinate
    pub fn from_coordinate(coord: Coordinate) -> Self {
        Self {
            min_x: coord.x,
            min_y: coord.y,
            max_x: coord.x,
            max_y: coord.y,
        }
    }

    /// Left edge
    pub fn min_x(&self) -> f64 {
        self.min_x
    }

    /// Bottom edge
    pub fn min_y(&self) -> f64 {
        self.min_y
    }

    /// Right edge
    pub fn max_x(&self) -> f64 {
        self.max_x
    }

    /// Top edge
    pub fn max_y(&self) -> f64 {
        self.max_y
    }

    /// Extent along the x axis
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Extent along the y axis
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Split point used by [`Envelope::quadrants`]
    pub fn center(&self) -> Coordinate {
        // Halving first keeps the midpoint finite for edges near f64::MAX
        Coordinate::new(
            self.min_x / 2.0 + self.max_x / 2.0,
            self.min_y / 2.0 + self.max_y / 2.0,
        )
    }

    /// Returns true if the two rectangles share at least one point
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        !(other.min_x > self.max_x
            || other.max_x < self.min_x
            || other.min_y > self.max_y
            || other.max_y < self.min_y)
    }

    /// Returns true if `other` lies entirely inside this envelope
    #[inline]
    pub fn contains(&self, other: &Self) -> bool {
        other.min_x >= self.min_x
            && other.max_x <= self.max_x
            && other.min_y >= self.min_y
            && other.max_y <= self.max_y
    }

    /// Coordinate-in-rectangle test, boundaries included
    #[inline]
    pub fn contains_coordinate(&self, coord: &Coordinate) -> bool {
        coord.x >= self.min_x
            && coord.x <= self.max_x
            && coord.y >= self.min_y
            && coord.y <= self.max_y
    }

    /// Smallest envelope covering both `self` and `coord`
    #[must_use]
    pub fn expand_to_include(&self, coord: &Coordinate) -> Self {
        Self {
            min_x: self.min_x.min(coord.x),
            min_y: self.min_y.min(coord.y),
            max_x: self.max_x.max(coord.x),
            max_y: self.max_y.max(coord.y),
        }
    }

    /// The four quadrants produced by midpoint bisection on both axes.
    ///
    /// Order: bottom-left, bottom-right, top-left, top-right. The quadrants
    /// share their inner edges and together cover exactly `self`.
    pub fn quadrants(&self) -> [Self; 4] {
        let mid = self.center();
        [
            Self::new(self.min_x, self.min_y, mid.x, mid.y),
            Self::new(mid.x, self.min_y, self.max_x, mid.y),
            Self::new(self.min_x, mid.y, mid.x, self.max_y),
            Self::new(mid.x, mid.y, self.max_x, self.max_y),
        ]
    }

    /// Returns false once bisection no longer yields a strictly smaller cell
    /// on either axis (zero extent or floating-point exhaustion).
    pub fn is_divisible(&self) -> bool {
        let mid = self.center();
        let x_divisible = mid.x > self.min_x && mid.x < self.max_x;
        let y_divisible = mid.y > self.min_y && mid.y < self.max_y;
        x_divisible || y_divisible
    }
}

impl fmt::Display for Envelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Env[{} : {}, {} : {}]",
            self.min_x, self.max_x, self.min_y, self.max_y
        )
    }
}
