//! Rectangle queries: bucket location, canonical decomposition, y-filtering.

use std::collections::HashSet;

use tracing::{debug, trace};

use crate::error::Result;
use crate::{Buckets, Point, RangeTree, Rect, locate};

/// Returns every point of `buckets` inside `rect`.
///
/// 1. [`locate`] maps `[rect.min_x, rect.max_x]` onto bucket indices; no
///    bucket means an empty result.
/// 2. If exactly one bucket is located, that whole bucket is returned
///    **without checking y**. This reproduces the reference behavior and is a
///    known inconsistency with every other path; use
///    [`RangeIndex::query_strict`] to have it filtered.
/// 3. Otherwise the index range is decomposed into canonical tree nodes and
///    each node's y-sorted points are filtered by `[rect.min_y, rect.max_y]`.
///
/// Points with equal coordinates collapse into one entry.
///
/// `rect` must be normalized (`min <= max` per axis); the bounds are not
/// swapped here.
///
/// # Example
/// ```
/// use rangetree::{execute, Buckets, Point, RangeTree, Rect};
/// let buckets = Buckets::build(vec![Point::new(1, 1), Point::new(2, 5), Point::new(3, 2)]);
/// let tree = RangeTree::build(&buckets).unwrap();
/// let found = execute(&buckets, &tree, &Rect::new(1, 0, 3, 3));
/// assert_eq!(found.len(), 2);
/// assert!(found.contains(&Point::new(3, 2)));
/// ```
pub fn execute(buckets: &Buckets, tree: &RangeTree, rect: &Rect) -> HashSet<Point> {
    search(buckets, Some(tree), rect, false)
}

fn search(
    buckets: &Buckets,
    tree: Option<&RangeTree>,
    rect: &Rect,
    filter_single: bool,
) -> HashSet<Point> {
    let Some(range) = locate(buckets, rect.min_x, rect.max_x) else {
        trace!(?rect, "no bucket in x-range");
        return HashSet::new();
    };

    if range.is_single() {
        let bucket = buckets.get(range.lo).unwrap_or_default();
        if filter_single {
            return bucket
                .iter()
                .filter(|p| rect.contains_y(p.y))
                .cloned()
                .collect();
        }
        if bucket.iter().any(|p| !rect.contains_y(p.y)) {
            debug!(
                ?rect,
                bucket = range.lo,
                "single-bucket query returns points outside the y-range"
            );
        }
        return bucket.iter().cloned().collect();
    }

    let Some(tree) = tree else {
        return HashSet::new();
    };

    let canonical = tree.canonical_nodes(range);
    trace!(
        ?rect,
        lo = range.lo,
        hi = range.hi,
        canonical = canonical.len(),
        "decomposed query"
    );

    let mut hits = Vec::new();
    for id in canonical {
        tree.node(id).filter_y(rect.min_y, rect.max_y, &mut hits);
    }
    hits.into_iter().collect()
}

/// Bucket sequence plus range tree, ready for repeated queries.
///
/// Handles the inputs tree construction rejects: with no points every query
/// is empty, and a single x-bucket is served without a tree.
///
/// # Example
/// ```
/// use rangetree::{Point, RangeIndex, Rect};
/// let index = RangeIndex::new(vec![
///     Point::new(1, 5),
///     Point::new(3, 3),
///     Point::new(4, 6),
///     Point::new(6, 2),
/// ]);
///
/// let found = index.query(&Rect::new(2, 1, 8, 7));
/// assert_eq!(found.len(), 3);
///
/// let mut results = Vec::new();
/// index.query_into(&Rect::new(2, 1, 4, 4), &mut results);
/// assert_eq!(results, vec![Point::new(3, 3)]);
/// ```
#[derive(Clone, Debug)]
pub struct RangeIndex {
    buckets: Buckets,
    tree: Option<RangeTree>,
}

impl RangeIndex {
    /// Bucketizes `points`, labels them `A`, `B`, ... in `(x, y)` order and
    /// builds the tree.
    pub fn new(points: impl IntoIterator<Item = Point>) -> Self {
        Self::from_buckets(Buckets::build_labeled(points))
    }

    /// Builds the tree over an existing bucket sequence.
    pub fn from_buckets(buckets: Buckets) -> Self {
        let tree = match RangeTree::build(&buckets) {
            Ok(tree) => Some(tree),
            Err(_) => None,
        };
        Self { buckets, tree }
    }

    /// Like [`from_buckets`](Self::from_buckets) but requires a tree.
    ///
    /// # Errors
    /// Returns [`Error::EmptyOrSingletonInput`](crate::Error::EmptyOrSingletonInput)
    /// when there are fewer than two buckets.
    pub fn try_from_buckets(buckets: Buckets) -> Result<Self> {
        let tree = RangeTree::build(&buckets)?;
        Ok(Self {
            buckets,
            tree: Some(tree),
        })
    }

    /// The bucket sequence
    pub fn buckets(&self) -> &Buckets {
        &self.buckets
    }

    /// The tree, absent for fewer than two buckets
    pub fn tree(&self) -> Option<&RangeTree> {
        self.tree.as_ref()
    }

    /// Number of indexed points
    pub fn len(&self) -> usize {
        self.buckets.point_count()
    }

    /// Whether no points are indexed
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Points inside `rect`, with the single-bucket shortcut of [`execute`].
    pub fn query(&self, rect: &Rect) -> HashSet<Point> {
        search(&self.buckets, self.tree.as_ref(), rect, false)
    }

    /// Points inside `rect`, y-filtering the single-bucket case as well.
    ///
    /// The result is exactly `{p : rect.contains(p)}`, deduplicated by
    /// coordinates.
    pub fn query_strict(&self, rect: &Rect) -> HashSet<Point> {
        search(&self.buckets, self.tree.as_ref(), rect, true)
    }

    /// Same as [`query`](Self::query), written into a reusable vector.
    ///
    /// `results` is cleared first and receives the points sorted by `(x, y)`.
    pub fn query_into(&self, rect: &Rect, results: &mut Vec<Point>) {
        results.clear();
        results.extend(self.query(rect));
        results.sort();
    }
}
