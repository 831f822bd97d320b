//! Fixed-shape rectangular container over one flat buffer.

use std::ops::{Index, IndexMut};

use crate::error::{GridError, Result};
use crate::geometry::{Coord2D, Size2D};
use crate::rect::{Rect, RectMut};
use crate::views::{ColumnView, ColumnViewMut, RowView, RowViewMut, SectorView, SectorViewMut};

/// A rectangular container whose shape is immutable after construction.
///
/// Cells are stored row-major in a single buffer of exactly
/// `size.rows * size.cols` elements; the linear offset of a cell is
/// `row * cols + col`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedGrid<T> {
    cells: Vec<T>,
    size: Size2D,
}

impl<T> FixedGrid<T> {
    /// Creates a grid with every cell default-initialized.
    #[must_use]
    pub fn new(size: Size2D) -> Self
    where
        T: Default,
    {
        FixedGrid {
            cells: (0..size.area()).map(|_| T::default()).collect(),
            size,
        }
    }

    /// Creates a grid by evaluating `f` at every coordinate, row-major.
    #[must_use]
    pub fn from_fn<F>(size: Size2D, mut f: F) -> Self
    where
        F: FnMut(Coord2D) -> T,
    {
        let mut cells = Vec::with_capacity(size.area());
        for row in 0..size.rows {
            for col in 0..size.cols {
                cells.push(f(Coord2D::new(row as isize, col as isize)));
            }
        }
        FixedGrid { cells, size }
    }

    /// Creates a grid from nested row vectors.
    ///
    /// All rows must have the same length; a ragged input fails with
    /// [`GridError::ShapeMismatch`] naming the offending row's width.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, Vec::len);
        let expected = Size2D::new(nrows, ncols);
        let mut cells = Vec::with_capacity(expected.area());
        for row in rows {
            if row.len() != ncols {
                return Err(GridError::ShapeMismatch {
                    expected,
                    actual: Size2D::new(nrows, row.len()),
                });
            }
            cells.extend(row);
        }
        Ok(FixedGrid {
            cells,
            size: expected,
        })
    }

    /// Copies every cell of an external rectangular source.
    #[must_use]
    pub fn from_rect<G>(source: &G) -> Self
    where
        G: Rect<Item = T>,
        T: Clone,
    {
        Self::from_fn(source.size(), |coord| source.cell(coord).clone())
    }

    /// The shape of the grid.
    #[inline]
    #[must_use]
    pub fn size(&self) -> Size2D {
        self.size
    }

    #[inline]
    fn offset(&self, coord: Coord2D) -> usize {
        coord.linear_index(self.size.cols)
    }

    /// Returns the cell at `coord`, or [`GridError::OutOfBounds`].
    pub fn get(&self, coord: Coord2D) -> Result<&T> {
        if !self.size.contains(coord) {
            return Err(GridError::OutOfBounds {
                coord,
                bounds: self.size,
            });
        }
        Ok(&self.cells[self.offset(coord)])
    }

    /// Returns the cell at `coord` mutably, or [`GridError::OutOfBounds`].
    pub fn get_mut(&mut self, coord: Coord2D) -> Result<&mut T> {
        if !self.size.contains(coord) {
            return Err(GridError::OutOfBounds {
                coord,
                bounds: self.size,
            });
        }
        let idx = self.offset(coord);
        Ok(&mut self.cells[idx])
    }

    /// Replaces the cell at `coord`, dropping the previous value.
    pub fn set(&mut self, coord: Coord2D, value: T) -> Result<()> {
        *self.get_mut(coord)? = value;
        Ok(())
    }

    /// Writes `value` into every cell.
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        for cell in &mut self.cells {
            *cell = value.clone();
        }
    }

    /// Zero-copy view of row `index`, or [`GridError::IndexOutOfRange`].
    pub fn row(&self, index: usize) -> Result<RowView<'_, Self>> {
        RowView::new(self, index)
    }

    /// Mutable zero-copy view of row `index`.
    pub fn row_mut(&mut self, index: usize) -> Result<RowViewMut<'_, Self>> {
        RowViewMut::new(self, index)
    }

    /// Zero-copy view of column `index`, or [`GridError::IndexOutOfRange`].
    pub fn column(&self, index: usize) -> Result<ColumnView<'_, Self>> {
        ColumnView::new(self, index)
    }

    /// Mutable zero-copy view of column `index`.
    pub fn column_mut(&mut self, index: usize) -> Result<ColumnViewMut<'_, Self>> {
        ColumnViewMut::new(self, index)
    }

    /// Zero-copy view of the sub-rectangle at `origin` with extent `size`.
    pub fn sector_view(&self, origin: Coord2D, size: Size2D) -> Result<SectorView<'_, Self>> {
        SectorView::new(self, origin, size)
    }

    /// Mutable zero-copy view of the sub-rectangle at `origin`.
    pub fn sector_view_mut(
        &mut self,
        origin: Coord2D,
        size: Size2D,
    ) -> Result<SectorViewMut<'_, Self>> {
        SectorViewMut::new(self, origin, size)
    }

    /// Iterates over all cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.cells.iter()
    }

    /// Iterates mutably over all cells in row-major order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.cells.iter_mut()
    }

    /// Iterates over `(coordinate, cell)` pairs in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Coord2D, &T)> {
        let cols = self.size.cols.max(1);
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, v)| (Coord2D::from_linear(i, cols), v))
    }
}

impl<T> Rect for FixedGrid<T> {
    type Item = T;

    #[inline]
    fn size(&self) -> Size2D {
        self.size
    }

    #[inline]
    fn cell(&self, coord: Coord2D) -> &T {
        debug_assert!(self.size.contains(coord));
        &self.cells[self.offset(coord)]
    }
}

impl<T> RectMut for FixedGrid<T> {
    #[inline]
    fn cell_mut(&mut self, coord: Coord2D) -> &mut T {
        debug_assert!(self.size.contains(coord));
        let idx = self.offset(coord);
        &mut self.cells[idx]
    }

    #[inline]
    fn swap(&mut self, a: Coord2D, b: Coord2D) {
        let (ia, ib) = (self.offset(a), self.offset(b));
        self.cells.swap(ia, ib);
    }
}

impl<T> Index<Coord2D> for FixedGrid<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `coord` is outside the grid. Use [`FixedGrid::get`] for a
    /// checked lookup.
    fn index(&self, coord: Coord2D) -> &T {
        match self.get(coord) {
            Ok(cell) => cell,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> IndexMut<Coord2D> for FixedGrid<T> {
    fn index_mut(&mut self, coord: Coord2D) -> &mut T {
        match self.get_mut(coord) {
            Ok(cell) => cell,
            Err(err) => panic!("{err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_default_initializes() {
        let grid: FixedGrid<u32> = FixedGrid::new(Size2D::new(3, 4));
        assert_eq!(grid.size(), Size2D::new(3, 4));
        assert!(grid.iter().all(|v| *v == 0));
        assert_eq!(grid.iter().count(), 12);
    }

    #[test]
    fn get_set_round_trip() {
        let mut grid: FixedGrid<u32> = FixedGrid::new(Size2D::new(2, 2));
        grid.set(Coord2D::new(1, 0), 7).unwrap();
        assert_eq!(*grid.get(Coord2D::new(1, 0)).unwrap(), 7);
        assert_eq!(grid[Coord2D::new(1, 0)], 7);
    }

    #[test]
    fn get_out_of_bounds_is_an_error() {
        let grid: FixedGrid<u32> = FixedGrid::new(Size2D::new(2, 2));
        let err = grid.get(Coord2D::new(0, 2)).unwrap_err();
        assert_eq!(
            err,
            GridError::OutOfBounds {
                coord: Coord2D::new(0, 2),
                bounds: Size2D::new(2, 2),
            }
        );
        assert!(grid.get(Coord2D::new(-1, 0)).is_err());
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn index_panics_out_of_bounds() {
        let grid: FixedGrid<u32> = FixedGrid::new(Size2D::new(2, 2));
        let _ = grid[Coord2D::new(5, 0)];
    }

    #[test]
    fn from_rows_checks_shape() {
        let grid = FixedGrid::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        assert_eq!(grid[Coord2D::new(1, 1)], 4);

        let err = FixedGrid::from_rows(vec![vec![1, 2], vec![3]]).unwrap_err();
        assert!(matches!(err, GridError::ShapeMismatch { .. }));
    }

    #[test]
    fn from_rect_copies_every_cell() {
        let src = FixedGrid::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        let copy = FixedGrid::from_rect(&src);
        assert_eq!(src, copy);
    }

    #[test]
    fn cells_yield_row_major_coords() {
        let grid = FixedGrid::from_rows(vec![vec![10, 20], vec![30, 40]]).unwrap();
        let collected: Vec<_> = grid.cells().map(|(c, v)| (c, *v)).collect();
        assert_eq!(
            collected,
            vec![
                (Coord2D::new(0, 0), 10),
                (Coord2D::new(0, 1), 20),
                (Coord2D::new(1, 0), 30),
                (Coord2D::new(1, 1), 40),
            ]
        );
    }

    #[test]
    fn fill_overwrites_all_cells() {
        let mut grid: FixedGrid<u32> = FixedGrid::new(Size2D::new(2, 3));
        grid.fill(9);
        assert!(grid.iter().all(|v| *v == 9));
    }
}
