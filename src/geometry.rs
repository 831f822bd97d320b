//! Extent and position value types for rectangular containers.
//!
//! `Size2D` is the (rows, columns) extent of a container; `Coord2D` is a
//! signed cell position. A coordinate has no validity on its own: it is valid
//! only relative to some `Size2D` via `0 <= row < rows && 0 <= col < cols`,
//! which is what [`Size2D::contains`] checks.

use std::fmt;
use std::ops::Add;

use serde::{Deserialize, Serialize};

/// The (rows, columns) extent of a rectangular container.
///
/// Both axes are `usize`, so non-negativity holds by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Size2D {
    /// Number of rows.
    pub rows: usize,
    /// Number of columns.
    pub cols: usize,
}

impl Size2D {
    /// The zero extent on both axes.
    pub const EMPTY: Size2D = Size2D { rows: 0, cols: 0 };

    /// Creates a new extent.
    #[must_use]
    pub const fn new(rows: usize, cols: usize) -> Self {
        Size2D { rows, cols }
    }

    /// Total number of cells covered by this extent.
    #[must_use]
    pub const fn area(&self) -> usize {
        self.rows * self.cols
    }

    /// True if this extent covers no cells.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.area() == 0
    }

    /// True if `coord` is a valid cell position within this extent.
    #[must_use]
    pub fn contains(&self, coord: Coord2D) -> bool {
        coord.row >= 0
            && coord.col >= 0
            && (coord.row as usize) < self.rows
            && (coord.col as usize) < self.cols
    }

    /// True if `other` fits within this extent on both axes (axis-wise `<=`).
    #[must_use]
    pub fn contains_size(&self, other: Size2D) -> bool {
        other.rows <= self.rows && other.cols <= self.cols
    }

    /// True if the sub-rectangle at `origin` with extent `size` lies entirely
    /// within this extent.
    #[must_use]
    pub fn contains_sector(&self, origin: Coord2D, size: Size2D) -> bool {
        if origin.row < 0 || origin.col < 0 {
            return false;
        }
        let row_end = (origin.row as usize).checked_add(size.rows);
        let col_end = (origin.col as usize).checked_add(size.cols);
        matches!((row_end, col_end), (Some(r), Some(c)) if r <= self.rows && c <= self.cols)
    }

    /// Axis-wise maximum of two extents.
    #[must_use]
    pub fn max(self, other: Size2D) -> Size2D {
        Size2D::new(self.rows.max(other.rows), self.cols.max(other.cols))
    }

    /// Axis-wise minimum of two extents.
    #[must_use]
    pub fn min(self, other: Size2D) -> Size2D {
        Size2D::new(self.rows.min(other.rows), self.cols.min(other.cols))
    }
}

impl fmt::Display for Size2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// A signed (row, column) cell position.
///
/// Components are unrestricted; validity is always relative to a [`Size2D`].
/// Ordering is lexicographic (row first), matching row-major traversal order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct Coord2D {
    /// Row position.
    pub row: isize,
    /// Column position.
    pub col: isize,
}

impl Coord2D {
    /// The origin position (0, 0).
    pub const ZERO: Coord2D = Coord2D { row: 0, col: 0 };

    /// Creates a new position.
    #[must_use]
    pub const fn new(row: isize, col: isize) -> Self {
        Coord2D { row, col }
    }

    /// Row-major linear offset of this coordinate against a row stride.
    ///
    /// Precondition: both components are non-negative (i.e. the coordinate is
    /// valid for some extent whose row width is `stride`).
    #[inline]
    #[must_use]
    pub fn linear_index(self, stride: usize) -> usize {
        debug_assert!(self.row >= 0 && self.col >= 0);
        (self.row as usize) * stride + self.col as usize
    }

    /// Inverse of [`linear_index`](Self::linear_index): recovers the
    /// coordinate of a row-major offset against a non-zero row stride.
    #[inline]
    #[must_use]
    pub fn from_linear(index: usize, stride: usize) -> Self {
        debug_assert!(stride > 0);
        Coord2D::new((index / stride) as isize, (index % stride) as isize)
    }
}

impl Add for Coord2D {
    type Output = Coord2D;

    fn add(self, rhs: Coord2D) -> Coord2D {
        Coord2D::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl fmt::Display for Coord2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
