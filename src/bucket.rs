//! Grouping points into x-coordinate buckets, and locating query x-ranges
//! within the bucket sequence.
//!
//! The bucket sequence is the coordinate system the [`RangeTree`](crate::RangeTree)
//! is built over: bucket `i` holds every point whose x equals the i-th smallest
//! distinct x value, sorted by y.

use tracing::debug;

use crate::Point;

/// Ordered sequence of x-buckets.
///
/// Invariants:
/// - every bucket is non-empty and all its points share one x value
/// - buckets are strictly increasing in x
/// - points inside a bucket are sorted by y
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Buckets {
    buckets: Vec<Vec<Point>>,
}

/// Closed range of bucket indices `[lo, hi]` produced by [`locate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BucketRange {
    /// First bucket index in range
    pub lo: usize,
    /// Last bucket index in range (inclusive)
    pub hi: usize,
}

impl BucketRange {
    /// Whether the range covers exactly one bucket.
    pub fn is_single(&self) -> bool {
        self.lo == self.hi
    }
}

impl Buckets {
    /// Groups points into x-buckets. Labels are left as they are.
    ///
    /// # Example
    /// ```
    /// use rangetree::{Buckets, Point};
    /// let buckets = Buckets::build(vec![
    ///     Point::new(3, 3),
    ///     Point::new(1, 5),
    ///     Point::new(3, 1),
    /// ]);
    /// assert_eq!(buckets.len(), 2);
    /// assert_eq!(buckets.x_at(1), Some(3));
    /// assert_eq!(buckets.get(1).map(|b| b[0].y), Some(1));
    /// ```
    pub fn build(points: impl IntoIterator<Item = Point>) -> Self {
        Self::build_with(points, false)
    }

    /// Groups points into x-buckets and relabels every point in `(x, y)` order:
    /// `A`, `B`, ..., `Z`, `AA`, `AB`, ...
    ///
    /// # Example
    /// ```
    /// use rangetree::{Buckets, Point};
    /// let buckets = Buckets::build_labeled(vec![Point::new(3, 3), Point::new(1, 5)]);
    /// let labels: Vec<_> = buckets.points().filter_map(Point::label).collect();
    /// assert_eq!(labels, vec!["A", "B"]);
    /// ```
    pub fn build_labeled(points: impl IntoIterator<Item = Point>) -> Self {
        Self::build_with(points, true)
    }

    fn build_with(points: impl IntoIterator<Item = Point>, relabel: bool) -> Self {
        let mut points: Vec<Point> = points.into_iter().collect();
        // stable: equal coordinates keep their input order
        points.sort();

        let total = points.len();
        let mut buckets: Vec<Vec<Point>> = Vec::new();
        for (i, mut p) in points.into_iter().enumerate() {
            if relabel {
                p.set_label(sequential_label(i));
            }
            match buckets.last_mut() {
                Some(bucket) if bucket[0].x == p.x => bucket.push(p),
                _ => buckets.push(vec![p]),
            }
        }

        debug!(points = total, buckets = buckets.len(), "bucketized points");
        Self { buckets }
    }

    /// Number of buckets (distinct x values)
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Whether there are no buckets
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Total number of points across all buckets
    pub fn point_count(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    /// Bucket at `index`
    pub fn get(&self, index: usize) -> Option<&[Point]> {
        self.buckets.get(index).map(Vec::as_slice)
    }

    /// Shared x value of bucket `index`
    pub fn x_at(&self, index: usize) -> Option<i32> {
        self.buckets.get(index).map(|bucket| bucket[0].x)
    }

    /// Buckets in ascending x order
    pub fn iter(&self) -> impl Iterator<Item = &[Point]> {
        self.buckets.iter().map(Vec::as_slice)
    }

    /// All points in `(x, y)` order
    pub fn points(&self) -> impl Iterator<Item = &Point> {
        self.buckets.iter().flatten()
    }

    pub(crate) fn as_slice(&self) -> &[Vec<Point>] {
        &self.buckets
    }

    /// Maps an x-range onto bucket indices. See [`locate`].
    pub fn locate(&self, x1: i32, x2: i32) -> Option<BucketRange> {
        locate(self, x1, x2)
    }
}

/// Finds the closed bucket-index range covering the x-range `[x1, x2]`.
///
/// `lo` is the first bucket with `x >= x1`, `hi` the last bucket with
/// `x <= x2`. Returns `None` when no bucket qualifies on either side or when
/// `lo > hi`, which includes reversed ranges.
///
/// # Example
/// ```
/// use rangetree::{locate, BucketRange, Buckets, Point};
/// let buckets = Buckets::build((1..=5).map(|x| Point::new(x * 2, 0)));
/// assert_eq!(locate(&buckets, 3, 8), Some(BucketRange { lo: 1, hi: 3 }));
/// assert_eq!(locate(&buckets, 5, 5), None);
/// ```
pub fn locate(buckets: &Buckets, x1: i32, x2: i32) -> Option<BucketRange> {
    let slice = buckets.as_slice();
    let lo = slice.partition_point(|bucket| bucket[0].x < x1);
    let past_hi = slice.partition_point(|bucket| bucket[0].x <= x2);

    if lo == slice.len() || past_hi == 0 {
        return None;
    }
    let hi = past_hi - 1;
    if lo > hi {
        return None;
    }
    Some(BucketRange { lo, hi })
}

/// Spreadsheet-style column name for a zero-based index.
fn sequential_label(mut index: usize) -> String {
    let mut bytes = Vec::new();
    loop {
        let digit = u8::try_from(index % 26).unwrap_or(0);
        bytes.push(b'A' + digit);
        if index < 26 {
            break;
        }
        index = index / 26 - 1;
    }
    bytes.reverse();
    String::from_utf8_lossy(&bytes).into_owned()
}

#[cfg(test)]
mod tests {
    use crate::bucket::sequential_label;
    use crate::{BucketRange, Buckets, Point, locate};

    fn sample() -> Buckets {
        Buckets::build(vec![
            Point::new(5, 2),
            Point::new(1, 1),
            Point::new(5, -3),
            Point::new(9, 0),
            Point::new(5, 2),
        ])
    }

    #[test]
    fn test_build_empty() {
        let buckets = Buckets::build(Vec::new());
        assert!(buckets.is_empty(), "no points, no buckets");
        assert_eq!(buckets.point_count(), 0, "no points");
    }

    #[test]
    fn test_build_groups_by_x() {
        let buckets = sample();
        assert_eq!(buckets.len(), 3, "three distinct x values");
        assert_eq!(buckets.point_count(), 5, "every point kept, duplicates included");

        let xs: Vec<_> = (0..buckets.len()).filter_map(|i| buckets.x_at(i)).collect();
        assert_eq!(xs, vec![1, 5, 9], "buckets ascend in x");

        let middle: Vec<_> = buckets.get(1).unwrap_or_default().iter().map(|p| p.y).collect();
        assert_eq!(middle, vec![-3, 2, 2], "bucket sorted by y");
        for bucket in buckets.iter() {
            assert!(bucket.iter().all(|p| p.x == bucket[0].x), "one x per bucket");
        }
    }

    #[test]
    fn test_build_keeps_labels_unless_relabeled() {
        let points = vec![Point::with_label(2, 0, "q"), Point::with_label(1, 0, "p")];
        let kept = Buckets::build(points.clone());
        let labels: Vec<_> = kept.points().filter_map(Point::label).collect();
        assert_eq!(labels, vec!["p", "q"], "existing labels survive");

        let relabeled = Buckets::build_labeled(points);
        let labels: Vec<_> = relabeled.points().filter_map(Point::label).collect();
        assert_eq!(labels, vec!["A", "B"], "relabeled in sorted order");
    }

    #[test]
    fn test_sequential_labels() {
        assert_eq!(sequential_label(0), "A");
        assert_eq!(sequential_label(25), "Z");
        assert_eq!(sequential_label(26), "AA");
        assert_eq!(sequential_label(27), "AB");
        assert_eq!(sequential_label(51), "AZ");
        assert_eq!(sequential_label(52), "BA");
        assert_eq!(sequential_label(701), "ZZ");
        assert_eq!(sequential_label(702), "AAA");
    }

    #[test]
    fn test_locate_ranges() {
        let buckets = sample();
        assert_eq!(locate(&buckets, 0, 10), Some(BucketRange { lo: 0, hi: 2 }), "everything");
        assert_eq!(locate(&buckets, 1, 5), Some(BucketRange { lo: 0, hi: 1 }), "inclusive ends");
        assert_eq!(locate(&buckets, 2, 8), Some(BucketRange { lo: 1, hi: 1 }), "single bucket");
        assert_eq!(locate(&buckets, 6, 8), None, "gap between buckets");
        assert_eq!(locate(&buckets, 10, 20), None, "right of all buckets");
        assert_eq!(locate(&buckets, -5, 0), None, "left of all buckets");
        assert_eq!(locate(&buckets, 9, 1), None, "reversed range");
        assert_eq!(locate(&Buckets::default(), 0, 0), None, "empty sequence");
    }
}
