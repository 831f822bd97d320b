//! Error types for the flatgrid library.

use crate::geometry::{Coord2D, Size2D};

/// Error returned when a container or view contract is violated.
///
/// Every violation is detected at the offending call, before any mutation
/// takes place; no operation is ever partially applied. "Not found" from a
/// search is not an error and is reported as `None` by the search itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// A coordinate lies outside a container's logical bounds.
    OutOfBounds {
        /// The offending coordinate.
        coord: Coord2D,
        /// The bounds it was checked against.
        bounds: Size2D,
    },
    /// A 1D axis index (row/column selector or view index) is out of range.
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// The extent along that axis.
        len: usize,
    },
    /// An insert/remove range violates the extent along its axis.
    RangeOutOfBounds {
        /// Start of the range.
        at: usize,
        /// Length of the range.
        n: usize,
        /// The extent along that axis.
        len: usize,
    },
    /// A sub-rectangle does not lie within a container's bounds.
    SectorOutOfBounds {
        /// Top-left corner of the requested sector.
        origin: Coord2D,
        /// Extent of the requested sector.
        size: Size2D,
        /// The bounds it was checked against.
        bounds: Size2D,
    },
    /// A capacity request is smaller than the current capacity on some axis.
    CapacityShrink {
        /// The current capacity.
        current: Size2D,
        /// The rejected request.
        requested: Size2D,
    },
    /// A copy between containers of incompatible shapes.
    ShapeMismatch {
        /// The shape the destination requires.
        expected: Size2D,
        /// The shape that was supplied.
        actual: Size2D,
    },
}

impl std::fmt::Display for GridError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GridError::OutOfBounds { coord, bounds } => {
                write!(f, "coordinate {} out of bounds {}", coord, bounds)
            }
            GridError::IndexOutOfRange { index, len } => {
                write!(f, "index {} out of range (len {})", index, len)
            }
            GridError::RangeOutOfBounds { at, n, len } => {
                write!(f, "range {}..{} out of bounds (len {})", at, at + n, len)
            }
            GridError::SectorOutOfBounds {
                origin,
                size,
                bounds,
            } => write!(
                f,
                "sector of size {} at {} exceeds bounds {}",
                size, origin, bounds
            ),
            GridError::CapacityShrink { current, requested } => write!(
                f,
                "cannot shrink capacity {} to {}",
                current, requested
            ),
            GridError::ShapeMismatch { expected, actual } => {
                write!(f, "shape mismatch: expected {}, got {}", expected, actual)
            }
        }
    }
}

impl std::error::Error for GridError {}

/// Result type for fallible container operations.
pub type Result<T> = std::result::Result<T, GridError>;
