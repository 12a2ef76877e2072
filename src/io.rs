//! Reading points and query regions from delimited text.
//!
//! One point per row, `x<delim>y`, integer coordinates. Blank rows are
//! skipped. Any malformed row fails the whole read; no partial point list is
//! ever returned.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};
use crate::{Point, Rect};

/// Options for the delimited point reader.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReadOptions {
    /// Field separator
    pub delimiter: char,
    /// Skip the first non-blank row
    pub has_header: bool,
    /// Strip whitespace around fields
    pub trim: bool,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            delimiter: ',',
            has_header: false,
            trim: true,
        }
    }
}

/// Reads all points from `reader`.
///
/// # Errors
/// [`Error::Parse`] for a row without exactly two integer fields,
/// [`Error::Io`] if reading fails.
///
/// # Example
/// ```
/// use rangetree::{read_points, ReadOptions};
/// let input = "1,5\n3, 3\n\n4,6\n";
/// let points = read_points(input.as_bytes(), &ReadOptions::default()).unwrap();
/// assert_eq!(points.len(), 3);
/// assert_eq!(points[1].coords(), (3, 3));
/// ```
pub fn read_points<R: BufRead>(reader: R, options: &ReadOptions) -> Result<Vec<Point>> {
    let mut points = Vec::new();
    let mut header_pending = options.has_header;

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        if header_pending {
            header_pending = false;
            continue;
        }
        points.push(parse_row(&line, idx + 1, options)?);
    }

    debug!(points = points.len(), "read points");
    Ok(points)
}

/// Reads points from a file. See [`read_points`].
///
/// # Errors
/// Same as [`read_points`], plus [`Error::Io`] if the file cannot be opened.
pub fn read_points_from_path(path: impl AsRef<Path>, options: &ReadOptions) -> Result<Vec<Point>> {
    let file = File::open(path.as_ref())?;
    read_points(BufReader::new(file), options)
}

/// Reads a query region given as two opposite corner rows and normalizes it.
///
/// # Errors
/// [`Error::MissingRegionCorner`] unless exactly two rows are present, and
/// everything [`read_points`] returns.
///
/// # Example
/// ```
/// use rangetree::{read_region, ReadOptions, Rect};
/// let rect = read_region("8,7\n2,1\n".as_bytes(), &ReadOptions::default()).unwrap();
/// assert_eq!(rect, Rect::new(2, 1, 8, 7));
/// ```
pub fn read_region<R: BufRead>(reader: R, options: &ReadOptions) -> Result<Rect> {
    match read_points(reader, options)?.as_slice() {
        [a, b] => Ok(Rect::from_corners(a, b)),
        other => Err(Error::MissingRegionCorner { found: other.len() }),
    }
}

fn parse_row(line: &str, line_no: usize, options: &ReadOptions) -> Result<Point> {
    let fields: Vec<&str> = line
        .split(options.delimiter)
        .map(|f| if options.trim { f.trim() } else { f })
        .collect();

    let [x, y] = fields.as_slice() else {
        return Err(Error::Parse {
            line: line_no,
            message: format!("expected 2 fields, found {}", fields.len()),
        });
    };
    Ok(Point::new(
        parse_coord(x, line_no)?,
        parse_coord(y, line_no)?,
    ))
}

fn parse_coord(field: &str, line_no: usize) -> Result<i32> {
    field.parse().map_err(|e| Error::Parse {
        line: line_no,
        message: format!("invalid coordinate {field:?}: {e}"),
    })
}

#[cfg(test)]
mod tests {
    use crate::{Error, Point, ReadOptions, Rect, read_points, read_region};

    #[test]
    fn test_custom_delimiter_and_header() {
        let options = ReadOptions {
            delimiter: ';',
            has_header: true,
            ..ReadOptions::default()
        };
        let points = read_points("x;y\n-1;2\n3;-4\n".as_bytes(), &options).unwrap();
        assert_eq!(points, vec![Point::new(-1, 2), Point::new(3, -4)], "header skipped");
    }

    #[test]
    fn test_non_numeric_fails_with_line() {
        let err = read_points("1,2\n3,x\n5,6\n".as_bytes(), &ReadOptions::default()).unwrap_err();
        assert!(matches!(err, Error::Parse { line: 2, .. }), "got {err}");
    }

    #[test]
    fn test_truncated_row_fails() {
        let err = read_points("1,2\n3\n".as_bytes(), &ReadOptions::default()).unwrap_err();
        assert!(matches!(err, Error::Parse { line: 2, .. }), "got {err}");

        let err = read_points("1,2,3\n".as_bytes(), &ReadOptions::default()).unwrap_err();
        assert!(matches!(err, Error::Parse { line: 1, .. }), "extra column, got {err}");
    }

    #[test]
    fn test_untrimmed_rejects_spaces() {
        let options = ReadOptions {
            trim: false,
            ..ReadOptions::default()
        };
        assert!(read_points("1, 2\n".as_bytes(), &options).is_err(), "space is not a digit");
    }

    #[test]
    fn test_region_needs_two_corners() {
        let err = read_region("1,1\n".as_bytes(), &ReadOptions::default()).unwrap_err();
        assert!(matches!(err, Error::MissingRegionCorner { found: 1 }), "got {err}");

        let rect = read_region("2,1\n2,1\n".as_bytes(), &ReadOptions::default()).unwrap();
        assert_eq!(rect, Rect::new(2, 1, 2, 1), "degenerate region is fine");
    }
}
