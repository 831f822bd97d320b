//! The rectangular-indexing capability contract.
//!
//! Any type that can report an extent and hand out references to cells at
//! valid coordinates receives the whole generic algorithm layer (the
//! [`Scan`](crate::scan::Scan) extension trait) and the row/column/sector
//! view types for free. Algorithms and views call only this contract; they
//! never touch a container's internals.

use crate::geometry::{Coord2D, Size2D};

/// Read access to a rectangular container.
///
/// `cell` has a validity precondition rather than a checked return so that
/// scan loops, which establish validity once per traversal, pay no per-cell
/// branching. The containers in this crate expose checked `get`/`get_mut`
/// methods on top of it for callers holding untrusted coordinates.
pub trait Rect {
    /// The element type stored in each cell.
    type Item;

    /// The logical extent of the container.
    fn size(&self) -> Size2D;

    /// Returns a reference to the cell at `coord`.
    ///
    /// Precondition: `self.is_valid(coord)`. Implementations may panic
    /// otherwise.
    fn cell(&self, coord: Coord2D) -> &Self::Item;

    /// True if `coord` addresses a cell within the container.
    #[inline]
    fn is_valid(&self, coord: Coord2D) -> bool {
        self.size().contains(coord)
    }
}

/// Mutable access to a rectangular container.
pub trait RectMut: Rect {
    /// Returns a mutable reference to the cell at `coord`.
    ///
    /// Precondition: `self.is_valid(coord)`. Implementations may panic
    /// otherwise.
    fn cell_mut(&mut self, coord: Coord2D) -> &mut Self::Item;

    /// Exchanges the contents of two cells.
    ///
    /// Required rather than provided because two simultaneous `cell_mut`
    /// borrows cannot be expressed; flat-buffer containers implement this
    /// with a single `slice::swap`. Precondition: both coordinates valid.
    fn swap(&mut self, a: Coord2D, b: Coord2D);
}

impl<G: Rect + ?Sized> Rect for &G {
    type Item = G::Item;

    #[inline]
    fn size(&self) -> Size2D {
        (**self).size()
    }

    #[inline]
    fn cell(&self, coord: Coord2D) -> &Self::Item {
        (**self).cell(coord)
    }
}

impl<G: Rect + ?Sized> Rect for &mut G {
    type Item = G::Item;

    #[inline]
    fn size(&self) -> Size2D {
        (**self).size()
    }

    #[inline]
    fn cell(&self, coord: Coord2D) -> &Self::Item {
        (**self).cell(coord)
    }
}

impl<G: RectMut + ?Sized> RectMut for &mut G {
    #[inline]
    fn cell_mut(&mut self, coord: Coord2D) -> &mut Self::Item {
        (**self).cell_mut(coord)
    }

    #[inline]
    fn swap(&mut self, a: Coord2D, b: Coord2D) {
        (**self).swap(a, b)
    }
}

impl<G: Rect + ?Sized> Rect for Box<G> {
    type Item = G::Item;

    #[inline]
    fn size(&self) -> Size2D {
        (**self).size()
    }

    #[inline]
    fn cell(&self, coord: Coord2D) -> &Self::Item {
        (**self).cell(coord)
    }
}

impl<G: RectMut + ?Sized> RectMut for Box<G> {
    #[inline]
    fn cell_mut(&mut self, coord: Coord2D) -> &mut Self::Item {
        (**self).cell_mut(coord)
    }

    #[inline]
    fn swap(&mut self, a: Coord2D, b: Coord2D) {
        (**self).swap(a, b)
    }
}
