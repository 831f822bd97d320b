//! Zero-copy row, column, and sector projections over a backing container.
//!
//! A view borrows its backing container through the [`Rect`]/[`RectMut`]
//! capability contract plus an axis index (or a sub-rectangle origin and
//! extent); it never owns storage. The borrow ties the view's validity to
//! the backing container: resizing the container while a view is alive is a
//! compile error, so no runtime invalidation guard is needed.
//!
//! Shared views (`RowView`, `ColumnView`, `SectorView`) read cells; the
//! exclusive variants add direct mutable access to backing storage, which
//! also serves element types that cannot usefully be replaced by value
//! alone. Sector *views* are aliases like row and column views; the
//! independent-copy operation is
//! [`GrowableGrid::sector`](crate::growable::GrowableGrid::sector).

use std::ops::{Index, IndexMut};

use crate::error::{GridError, Result};
use crate::geometry::{Coord2D, Size2D};
use crate::rect::{Rect, RectMut};

fn check_axis_index(index: usize, len: usize) -> Result<()> {
    if index >= len {
        return Err(GridError::IndexOutOfRange { index, len });
    }
    Ok(())
}

/// Shared zero-copy view of one row of a backing container.
#[derive(Debug)]
pub struct RowView<'a, G: Rect> {
    grid: &'a G,
    row: usize,
}

impl<'a, G: Rect> RowView<'a, G> {
    /// Creates a view of row `row`, or [`GridError::IndexOutOfRange`].
    pub fn new(grid: &'a G, row: usize) -> Result<Self> {
        check_axis_index(row, grid.size().rows)?;
        Ok(RowView { grid, row })
    }

    /// Number of cells in the row (the backing container's column extent).
    #[must_use]
    pub fn len(&self) -> usize {
        self.grid.size().cols
    }

    /// True if the row has no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    fn coord(&self, index: usize) -> Coord2D {
        Coord2D::new(self.row as isize, index as isize)
    }

    /// Returns the cell at `index`, or [`GridError::IndexOutOfRange`].
    pub fn get(&self, index: usize) -> Result<&'a G::Item> {
        check_axis_index(index, self.len())?;
        Ok(self.grid.cell(self.coord(index)))
    }

    /// Iterates over the row's cells left to right.
    pub fn iter(&self) -> impl Iterator<Item = &'a G::Item> + 'a {
        let grid = self.grid;
        let row = self.row as isize;
        (0..grid.size().cols).map(move |c| grid.cell(Coord2D::new(row, c as isize)))
    }
}

impl<'a, G: Rect> Index<usize> for RowView<'a, G> {
    type Output = G::Item;

    fn index(&self, index: usize) -> &G::Item {
        match self.get(index) {
            Ok(cell) => cell,
            Err(err) => panic!("{err}"),
        }
    }
}

/// Exclusive zero-copy view of one row, with direct mutable access to the
/// backing cells.
#[derive(Debug)]
pub struct RowViewMut<'a, G: RectMut> {
    grid: &'a mut G,
    row: usize,
}

impl<'a, G: RectMut> RowViewMut<'a, G> {
    /// Creates a mutable view of row `row`, or [`GridError::IndexOutOfRange`].
    pub fn new(grid: &'a mut G, row: usize) -> Result<Self> {
        check_axis_index(row, grid.size().rows)?;
        Ok(RowViewMut { grid, row })
    }

    /// Number of cells in the row.
    #[must_use]
    pub fn len(&self) -> usize {
        self.grid.size().cols
    }

    /// True if the row has no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    fn coord(&self, index: usize) -> Coord2D {
        Coord2D::new(self.row as isize, index as isize)
    }

    /// Returns the cell at `index`, or [`GridError::IndexOutOfRange`].
    pub fn get(&self, index: usize) -> Result<&G::Item> {
        check_axis_index(index, self.len())?;
        Ok(self.grid.cell(self.coord(index)))
    }

    /// Returns the cell at `index` mutably.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut G::Item> {
        check_axis_index(index, self.len())?;
        let coord = self.coord(index);
        Ok(self.grid.cell_mut(coord))
    }

    /// Replaces the cell at `index`, dropping the previous value.
    pub fn set(&mut self, index: usize, value: G::Item) -> Result<()> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    /// Applies `f` to every cell of the row, left to right.
    pub fn for_each_mut<F>(&mut self, mut f: F)
    where
        F: FnMut(&mut G::Item),
    {
        for index in 0..self.len() {
            let coord = self.coord(index);
            f(self.grid.cell_mut(coord));
        }
    }

    /// Writes `value` into every backing cell of the row.
    pub fn fill(&mut self, value: G::Item)
    where
        G::Item: Clone,
    {
        self.for_each_mut(|cell| *cell = value.clone());
    }

    /// Reverses the backing cells of the row in place.
    pub fn reverse(&mut self) {
        let len = self.len();
        for i in 0..len / 2 {
            let (a, b) = (self.coord(i), self.coord(len - 1 - i));
            self.grid.swap(a, b);
        }
    }
}

impl<'a, G: RectMut> Index<usize> for RowViewMut<'a, G> {
    type Output = G::Item;

    fn index(&self, index: usize) -> &G::Item {
        match self.get(index) {
            Ok(cell) => cell,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<'a, G: RectMut> IndexMut<usize> for RowViewMut<'a, G> {
    fn index_mut(&mut self, index: usize) -> &mut G::Item {
        match self.get_mut(index) {
            Ok(cell) => cell,
            Err(err) => panic!("{err}"),
        }
    }
}

/// Shared zero-copy view of one column of a backing container.
#[derive(Debug)]
pub struct ColumnView<'a, G: Rect> {
    grid: &'a G,
    col: usize,
}

impl<'a, G: Rect> ColumnView<'a, G> {
    /// Creates a view of column `col`, or [`GridError::IndexOutOfRange`].
    pub fn new(grid: &'a G, col: usize) -> Result<Self> {
        check_axis_index(col, grid.size().cols)?;
        Ok(ColumnView { grid, col })
    }

    /// Number of cells in the column (the backing container's row extent).
    #[must_use]
    pub fn len(&self) -> usize {
        self.grid.size().rows
    }

    /// True if the column has no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    fn coord(&self, index: usize) -> Coord2D {
        Coord2D::new(index as isize, self.col as isize)
    }

    /// Returns the cell at `index`, or [`GridError::IndexOutOfRange`].
    pub fn get(&self, index: usize) -> Result<&'a G::Item> {
        check_axis_index(index, self.len())?;
        Ok(self.grid.cell(self.coord(index)))
    }

    /// Iterates over the column's cells top to bottom.
    pub fn iter(&self) -> impl Iterator<Item = &'a G::Item> + 'a {
        let grid = self.grid;
        let col = self.col as isize;
        (0..grid.size().rows).map(move |r| grid.cell(Coord2D::new(r as isize, col)))
    }
}

impl<'a, G: Rect> Index<usize> for ColumnView<'a, G> {
    type Output = G::Item;

    fn index(&self, index: usize) -> &G::Item {
        match self.get(index) {
            Ok(cell) => cell,
            Err(err) => panic!("{err}"),
        }
    }
}

/// Exclusive zero-copy view of one column, with direct mutable access to the
/// backing cells.
#[derive(Debug)]
pub struct ColumnViewMut<'a, G: RectMut> {
    grid: &'a mut G,
    col: usize,
}

impl<'a, G: RectMut> ColumnViewMut<'a, G> {
    /// Creates a mutable view of column `col`, or
    /// [`GridError::IndexOutOfRange`].
    pub fn new(grid: &'a mut G, col: usize) -> Result<Self> {
        check_axis_index(col, grid.size().cols)?;
        Ok(ColumnViewMut { grid, col })
    }

    /// Number of cells in the column.
    #[must_use]
    pub fn len(&self) -> usize {
        self.grid.size().rows
    }

    /// True if the column has no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    fn coord(&self, index: usize) -> Coord2D {
        Coord2D::new(index as isize, self.col as isize)
    }

    /// Returns the cell at `index`, or [`GridError::IndexOutOfRange`].
    pub fn get(&self, index: usize) -> Result<&G::Item> {
        check_axis_index(index, self.len())?;
        Ok(self.grid.cell(self.coord(index)))
    }

    /// Returns the cell at `index` mutably.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut G::Item> {
        check_axis_index(index, self.len())?;
        let coord = self.coord(index);
        Ok(self.grid.cell_mut(coord))
    }

    /// Replaces the cell at `index`, dropping the previous value.
    pub fn set(&mut self, index: usize, value: G::Item) -> Result<()> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    /// Applies `f` to every cell of the column, top to bottom.
    pub fn for_each_mut<F>(&mut self, mut f: F)
    where
        F: FnMut(&mut G::Item),
    {
        for index in 0..self.len() {
            let coord = self.coord(index);
            f(self.grid.cell_mut(coord));
        }
    }

    /// Writes `value` into every backing cell of the column.
    pub fn fill(&mut self, value: G::Item)
    where
        G::Item: Clone,
    {
        self.for_each_mut(|cell| *cell = value.clone());
    }

    /// Reverses the backing cells of the column in place.
    pub fn reverse(&mut self) {
        let len = self.len();
        for i in 0..len / 2 {
            let (a, b) = (self.coord(i), self.coord(len - 1 - i));
            self.grid.swap(a, b);
        }
    }
}

impl<'a, G: RectMut> Index<usize> for ColumnViewMut<'a, G> {
    type Output = G::Item;

    fn index(&self, index: usize) -> &G::Item {
        match self.get(index) {
            Ok(cell) => cell,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<'a, G: RectMut> IndexMut<usize> for ColumnViewMut<'a, G> {
    fn index_mut(&mut self, index: usize) -> &mut G::Item {
        match self.get_mut(index) {
            Ok(cell) => cell,
            Err(err) => panic!("{err}"),
        }
    }
}

/// Shared zero-copy view of a sub-rectangle of a backing container.
///
/// Implements [`Rect`] itself, so the whole algorithm layer and the row and
/// column views compose over it.
#[derive(Debug)]
pub struct SectorView<'a, G: Rect> {
    grid: &'a G,
    origin: Coord2D,
    size: Size2D,
}

impl<'a, G: Rect> SectorView<'a, G> {
    /// Creates a view of the sub-rectangle at `origin` with extent `size`,
    /// or [`GridError::SectorOutOfBounds`].
    pub fn new(grid: &'a G, origin: Coord2D, size: Size2D) -> Result<Self> {
        if !grid.size().contains_sector(origin, size) {
            return Err(GridError::SectorOutOfBounds {
                origin,
                size,
                bounds: grid.size(),
            });
        }
        Ok(SectorView { grid, origin, size })
    }

    /// The top-left corner of the sector on the backing container.
    #[must_use]
    pub fn origin(&self) -> Coord2D {
        self.origin
    }
}

impl<'a, G: Rect> Rect for SectorView<'a, G> {
    type Item = G::Item;

    #[inline]
    fn size(&self) -> Size2D {
        self.size
    }

    #[inline]
    fn cell(&self, coord: Coord2D) -> &G::Item {
        debug_assert!(self.size.contains(coord));
        self.grid.cell(self.origin + coord)
    }
}

/// Exclusive zero-copy view of a sub-rectangle, implementing [`RectMut`].
#[derive(Debug)]
pub struct SectorViewMut<'a, G: RectMut> {
    grid: &'a mut G,
    origin: Coord2D,
    size: Size2D,
}

impl<'a, G: RectMut> SectorViewMut<'a, G> {
    /// Creates a mutable view of the sub-rectangle at `origin` with extent
    /// `size`, or [`GridError::SectorOutOfBounds`].
    pub fn new(grid: &'a mut G, origin: Coord2D, size: Size2D) -> Result<Self> {
        if !grid.size().contains_sector(origin, size) {
            return Err(GridError::SectorOutOfBounds {
                origin,
                size,
                bounds: grid.size(),
            });
        }
        Ok(SectorViewMut { grid, origin, size })
    }

    /// The top-left corner of the sector on the backing container.
    #[must_use]
    pub fn origin(&self) -> Coord2D {
        self.origin
    }
}

impl<'a, G: RectMut> Rect for SectorViewMut<'a, G> {
    type Item = G::Item;

    #[inline]
    fn size(&self) -> Size2D {
        self.size
    }

    #[inline]
    fn cell(&self, coord: Coord2D) -> &G::Item {
        debug_assert!(self.size.contains(coord));
        self.grid.cell(self.origin + coord)
    }
}

impl<'a, G: RectMut> RectMut for SectorViewMut<'a, G> {
    #[inline]
    fn cell_mut(&mut self, coord: Coord2D) -> &mut G::Item {
        debug_assert!(self.size.contains(coord));
        self.grid.cell_mut(self.origin + coord)
    }

    #[inline]
    fn swap(&mut self, a: Coord2D, b: Coord2D) {
        self.grid.swap(self.origin + a, self.origin + b);
    }
}
