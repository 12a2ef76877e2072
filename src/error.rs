//! Error type shared by tree construction and the point reader.

use thiserror::Error;

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by this crate.
///
/// An x-range that matches no bucket is not an error: [`locate`](crate::locate)
/// returns `None` and queries return an empty set.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Tree construction needs at least two buckets.
    #[error("range tree needs at least 2 x-buckets, got {buckets}")]
    EmptyOrSingletonInput {
        /// Number of buckets that was supplied
        buckets: usize,
    },

    /// A row of delimited input could not be turned into a point.
    #[error("line {line}: {message}")]
    Parse {
        /// One-based line number of the offending row
        line: usize,
        /// What was wrong with it
        message: String,
    },

    /// A region source did not hold two corner rows.
    #[error("region needs exactly 2 corner points, found {found}")]
    MissingRegionCorner {
        /// Number of corner rows that were read
        found: usize,
    },

    /// Underlying read failure.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
