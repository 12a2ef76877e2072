//! Interval tree over bucket indices.
//!
//! Every node covers a closed range of bucket indices `[begin, end]` and owns a
//! copy of all points in those buckets, sorted by y. Nodes are split at
//! `m = (begin + end) / 2` into `[begin, m]` and `[m, end]`; the children share
//! bucket `m`. Recursion stops at two-bucket leaves (`end - begin == 1`).
//!
//! Nodes live in a single arena vector and refer to their children by index.
//! The root is always node 0.

use tracing::debug;

use crate::bucket::BucketRange;
use crate::error::{Error, Result};
use crate::{Buckets, Point};

/// Index of a node inside a [`RangeTree`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Position in the node arena
    pub fn index(self) -> usize {
        self.0
    }
}

/// One node of the tree.
#[derive(Clone, Debug)]
pub struct Node {
    begin: usize,
    end: usize,
    points: Vec<Point>,
    left: Option<NodeId>,
    right: Option<NodeId>,
}

impl Node {
    /// First covered bucket index
    pub fn begin(&self) -> usize {
        self.begin
    }

    /// Last covered bucket index (inclusive)
    pub fn end(&self) -> usize {
        self.end
    }

    /// Every point of the covered buckets, ascending by y
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Left child, covering `[begin, mid]`
    pub fn left(&self) -> Option<NodeId> {
        self.left
    }

    /// Right child, covering `[mid, end]`
    pub fn right(&self) -> Option<NodeId> {
        self.right
    }

    /// Whether this node covers exactly two adjacent buckets
    pub fn is_leaf(&self) -> bool {
        self.end - self.begin == 1
    }

    /// Split index shared by both children
    pub fn mid(&self) -> usize {
        (self.begin + self.end) / 2
    }

    /// Whether `[begin, end]` lies inside `range`.
    pub fn is_within(&self, range: BucketRange) -> bool {
        range.lo <= self.begin && self.end <= range.hi
    }

    /// Appends the points with `min_y <= y <= max_y` to `out`.
    ///
    /// Binary-searches the first candidate and stops at the first point above
    /// `max_y`, so the cost is `O(log k + r)` for `r` reported points.
    pub fn filter_y(&self, min_y: i32, max_y: i32, out: &mut Vec<Point>) {
        let start = self.points.partition_point(|p| p.y < min_y);
        out.extend(
            self.points[start..]
                .iter()
                .take_while(|p| p.y <= max_y)
                .cloned(),
        );
    }
}

/// Balanced binary tree over the indices of a [`Buckets`] sequence.
///
/// Immutable once built; queries only need `&self`, so a tree can be shared
/// across threads freely.
///
/// # Example
/// ```
/// use rangetree::{Buckets, Point, RangeTree};
/// let buckets = Buckets::build((0..4).map(|x| Point::new(x, 3 - x)));
/// let tree = RangeTree::build(&buckets).unwrap();
/// let root = tree.root();
/// assert_eq!((root.begin(), root.end()), (0, 3));
/// assert_eq!(root.points().first().map(|p| p.y), Some(0));
/// ```
#[derive(Clone, Debug)]
pub struct RangeTree {
    nodes: Vec<Node>,
}

impl RangeTree {
    /// Builds the tree over all buckets.
    ///
    /// # Errors
    /// Returns [`Error::EmptyOrSingletonInput`] when there are fewer than two
    /// buckets; such inputs need no tree (see [`RangeIndex`](crate::RangeIndex)).
    pub fn build(buckets: &Buckets) -> Result<Self> {
        let count = buckets.len();
        if count < 2 {
            return Err(Error::EmptyOrSingletonInput { buckets: count });
        }

        // a tree over k buckets has 2k - 3 nodes
        let mut tree = Self {
            nodes: Vec::with_capacity(2 * count - 3),
        };
        let root = tree.build_node(0, count - 1, buckets.as_slice());
        debug_assert_eq!(root.index(), 0, "root must be the first node in the arena");

        debug!(
            buckets = count,
            nodes = tree.nodes.len(),
            stored_points = tree.nodes.iter().map(|n| n.points.len()).sum::<usize>(),
            "built range tree"
        );
        Ok(tree)
    }

    /// Builds the node for `[begin, end]`. `buckets[0]` is bucket `begin`.
    fn build_node(&mut self, begin: usize, end: usize, buckets: &[Vec<Point>]) -> NodeId {
        // reserve the slot first so parents precede their children
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            begin,
            end,
            points: Vec::new(),
            left: None,
            right: None,
        });

        let points = if end - begin == 1 {
            merge_by_y(&buckets[0], &buckets[1])
        } else {
            let mid = (begin + end) / 2;
            let split = mid - begin;
            let left = self.build_node(begin, mid, &buckets[..=split]);
            let right = self.build_node(mid, end, &buckets[split..]);

            let node = &mut self.nodes[id.0];
            node.left = Some(left);
            node.right = Some(right);

            // bucket `mid` already sits in the left child; take the rest from
            // the buckets right of it so it is stored once
            let mut tail: Vec<Point> = buckets[split + 1..].iter().flatten().cloned().collect();
            tail.sort_by_key(|p| p.y);
            merge_by_y(&self.nodes[left.0].points, &tail)
        };

        self.nodes[id.0].points = points;
        id
    }

    /// Root node, covering every bucket
    pub fn root(&self) -> &Node {
        &self.nodes[0]
    }

    /// Node with the given id
    ///
    /// # Panics
    /// Panics if `id` comes from a different tree with more nodes.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Number of nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: a built tree has at least its root.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of buckets the tree was built over
    pub fn bucket_count(&self) -> usize {
        self.root().end + 1
    }

    /// Decomposes a bucket-index range into canonical nodes: maximal nodes
    /// whose range lies inside `range`. Their union covers every bucket of
    /// `range`; neighbouring nodes may share one boundary bucket.
    ///
    /// `range` should span at least two buckets. A single-bucket range has no
    /// covering node and yields nothing.
    pub fn canonical_nodes(&self, range: BucketRange) -> Vec<NodeId> {
        let mut canonical = Vec::new();
        let mut stack = vec![NodeId(0)];

        while let Some(id) = stack.pop() {
            let node = self.node(id);
            if node.is_within(range) {
                canonical.push(id);
                continue;
            }

            let mid = node.mid();
            if range.hi > mid {
                if let Some(right) = node.right {
                    stack.push(right);
                }
            }
            if range.lo < mid {
                if let Some(left) = node.left {
                    stack.push(left);
                }
            }
        }

        canonical
    }
}

/// Merges two y-sorted runs into one y-sorted vector; ties keep `a` first.
fn merge_by_y(a: &[Point], b: &[Point]) -> Vec<Point> {
    let mut merged = Vec::with_capacity(a.len() + b.len());
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        if b[j].y < a[i].y {
            merged.push(b[j].clone());
            j += 1;
        } else {
            merged.push(a[i].clone());
            i += 1;
        }
    }
    merged.extend_from_slice(&a[i..]);
    merged.extend_from_slice(&b[j..]);
    merged
}
