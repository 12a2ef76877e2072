//! # rangetree - Static 2D Range Tree
//!
//! Orthogonal range queries over a fixed set of integer points: given an
//! axis-aligned rectangle, return every point inside it (edges included).
//!
//! ## Features
//!
//! - **x-Bucketing**: Points sharing an x value form one bucket; buckets are the unit the tree indexes
//! - **Interval Tree over Buckets**: Every node caches its points pre-sorted by y
//! - **O(log n) Canonical Decomposition**: An x-range maps to a handful of nodes, each filtered by y with early exit
//! - **Static Optimization**: Built once, queried many times, shareable across threads
//!
//! ## Quick Start
//!
//! ```rust
//! use rangetree::prelude::*;
//!
//! // Build the index once
//! let index = RangeIndex::new(vec![
//!     Point::new(1, 5),
//!     Point::new(3, 3),
//!     Point::new(4, 6),
//!     Point::new(6, 2),
//!     Point::new(9, 4),
//! ]);
//!
//! // Query with (min_x, min_y, max_x, max_y)
//! let found = index.query(&Rect::new(2, 1, 8, 7));
//! assert_eq!(found.len(), 3);
//!
//! // Or reuse a results vector, sorted by (x, y)
//! let mut results = Vec::new();
//! index.query_into(&Rect::new(2, 1, 4, 4), &mut results);
//! assert_eq!(results, vec![Point::new(3, 3)]);
//! ```
//!
//! ## How It Works
//!
//! Points are sorted by `(x, y)` and grouped into buckets of equal x. A
//! balanced binary tree is built over bucket *indices*: a node covering
//! `[begin, end]` splits at `m = (begin + end) / 2` into `[begin, m]` and
//! `[m, end]`, down to two-bucket leaves, and stores the y-sorted union of all
//! its points.
//!
//! A query first locates the bucket-index range of its x-interval, walks the
//! tree to find the nodes lying completely inside that range, and scans each
//! node's y-sorted points from the lower y bound until the upper one is
//! passed.
//!
//! When the x-interval hits exactly one bucket, [`RangeIndex::query`] returns
//! that bucket as-is, without looking at y. This matches the reference
//! behavior the crate reproduces; [`RangeIndex::query_strict`] filters it.

pub mod bucket;
pub mod error;
pub mod io;
pub mod point;
pub mod prelude;
pub mod query;
pub mod range_tree;
pub mod rect;
pub mod svg;


pub use bucket::{BucketRange, Buckets, locate};
pub use error::{Error, Result};
pub use io::{ReadOptions, read_points, read_points_from_path, read_region};
pub use point::Point;
pub use query::{RangeIndex, execute};
pub use range_tree::{Node, NodeId, RangeTree};
pub use rect::Rect;
pub use svg::{SvgStyle, render_svg};
