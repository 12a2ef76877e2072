//! Integer 2D point with an optional display label.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A 2D point with integer coordinates.
///
/// Identity is the coordinate pair only: equality, hashing and ordering ignore
/// the label. Points order lexicographically by `(x, y)`.
///
/// # Example
/// ```
/// use rangetree::Point;
/// let a = Point::with_label(3, 3, "B");
/// let b = Point::new(3, 3);
/// assert_eq!(a, b);
/// assert!(Point::new(1, 9) < Point::new(3, 0));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Point {
    /// Horizontal coordinate
    pub x: i32,
    /// Vertical coordinate
    pub y: i32,
    label: Option<String>,
}

impl Point {
    /// Creates an unlabeled point.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y, label: None }
    }

    /// Creates a point carrying a display label.
    pub fn with_label(x: i32, y: i32, label: impl Into<String>) -> Self {
        Self {
            x,
            y,
            label: Some(label.into()),
        }
    }

    /// Display label, if one was assigned.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Assigns a display label. Has no effect on equality or ordering.
    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = Some(label.into());
    }

    /// Coordinate pair
    pub fn coords(&self) -> (i32, i32) {
        (self.x, self.y)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.coords() == other.coords()
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.coords().hash(state);
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> Ordering {
        self.coords().cmp(&other.coords())
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}
