//! Closed axis-aligned query rectangle.

use crate::Point;

/// Query rectangle with inclusive bounds: minX, minY, maxX, maxY.
///
/// Queries take the bounds as given and never swap them. A rectangle with
/// `min_x > max_x` matches nothing. One with `min_y > max_y` matches nothing
/// under [`RangeIndex::query_strict`](crate::RangeIndex::query_strict) and
/// [`Rect::contains`], but [`RangeIndex::query`](crate::RangeIndex::query)
/// still returns a whole bucket when the x-range selects exactly one. Use
/// [`Rect::from_corners`] to build one from two arbitrary corners.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rect {
    /// Left edge
    pub min_x: i32,
    /// Bottom edge
    pub min_y: i32,
    /// Right edge
    pub max_x: i32,
    /// Top edge
    pub max_y: i32,
}

impl Rect {
    /// Creates a rectangle from its bounds, in (`min_x`, `min_y`, `max_x`, `max_y`) order.
    ///
    /// # Example
    /// ```
    /// use rangetree::{Point, Rect};
    /// let rect = Rect::new(2, 1, 8, 7);
    /// assert!(rect.contains(&Point::new(2, 7)));
    /// assert!(!rect.contains(&Point::new(9, 7)));
    /// ```
    pub fn new(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Builds the rectangle spanned by two opposite corners, in any order.
    pub fn from_corners(a: &Point, b: &Point) -> Self {
        Self::new(a.x.min(b.x), a.y.min(b.y), a.x.max(b.x), a.y.max(b.y))
    }

    /// Whether the point lies inside or on the boundary.
    pub fn contains(&self, p: &Point) -> bool {
        self.contains_x(p.x) && self.contains_y(p.y)
    }

    /// Whether `x` lies in `[min_x, max_x]`.
    pub fn contains_x(&self, x: i32) -> bool {
        self.min_x <= x && x <= self.max_x
    }

    /// Whether `y` lies in `[min_y, max_y]`.
    pub fn contains_y(&self, y: i32) -> bool {
        self.min_y <= y && y <= self.max_y
    }

    /// Whether `other` lies completely inside this rectangle.
    pub fn contains_rect(&self, other: &Self) -> bool {
        self.min_x <= other.min_x
            && other.max_x <= self.max_x
            && self.min_y <= other.min_y
            && other.max_y <= self.max_y
    }
}
