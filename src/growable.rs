//! Growable rectangular container with independent capacity and logical
//! bounds per axis.
//!
//! `GrowableGrid` is the 2D analogue of a dynamic array. It owns one flat
//! buffer sized to its *capacity*; the logical *bounds* grow and shrink
//! within it. The linear offset of a logical cell is
//! `row * capacity.cols + col` -- the stride is the **capacity** width, not
//! the logical width, so growing rows never invalidates column offsets and
//! vice versa.
//!
//! Buffer invariant: the buffer always holds exactly `capacity.area()`
//! elements, and every slack cell (inside capacity, outside bounds) holds
//! `T::default()`. Mutations that vacate logical cells reset them to the
//! default, so an element that owns a resource (an `Rc`, a `String`, a
//! handle) drops it at logical removal rather than lingering in slack.

use std::mem;
use std::ops::{Index, IndexMut};

use log::trace;

use crate::error::{GridError, Result};
use crate::fixed::FixedGrid;
use crate::geometry::{Coord2D, Size2D};
use crate::rect::{Rect, RectMut};
use crate::views::{ColumnView, ColumnViewMut, RowView, RowViewMut, SectorView, SectorViewMut};

/// A growable rectangular container over one flat buffer.
///
/// Structural mutation while an iterator or view is alive is rejected at
/// compile time, which replaces the runtime "modified during enumeration"
/// guard a garbage-collected container would need:
///
/// ```compile_fail
/// use flatgrid::{GrowableGrid, Size2D};
///
/// let mut grid: GrowableGrid<u32> = GrowableGrid::with_capacity(Size2D::new(2, 2));
/// grid.add_rows(2);
/// let mut cells = grid.iter();
/// grid.add_rows(1); // error: `grid` is borrowed by `cells`
/// cells.next();
/// ```
#[derive(Debug, Clone)]
pub struct GrowableGrid<T> {
    cells: Vec<T>,
    capacity: Size2D,
    bounds: Size2D,
}

impl<T> GrowableGrid<T> {
    /// Creates an empty grid with no capacity on either axis.
    #[must_use]
    pub fn new() -> Self {
        GrowableGrid {
            cells: Vec::new(),
            capacity: Size2D::EMPTY,
            bounds: Size2D::EMPTY,
        }
    }

    /// Creates an empty grid over a pre-allocated buffer of `capacity`.
    ///
    /// Mutations that stay within `capacity` on both axes perform no
    /// further allocation.
    #[must_use]
    pub fn with_capacity(capacity: Size2D) -> Self
    where
        T: Default,
    {
        GrowableGrid {
            cells: (0..capacity.area()).map(|_| T::default()).collect(),
            capacity,
            bounds: Size2D::EMPTY,
        }
    }

    /// Creates a grid from nested row vectors, with capacity equal to the
    /// resulting bounds.
    ///
    /// A ragged input fails with [`GridError::ShapeMismatch`].
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, Vec::len);
        let shape = Size2D::new(nrows, ncols);
        let mut cells = Vec::with_capacity(shape.area());
        for row in rows {
            if row.len() != ncols {
                return Err(GridError::ShapeMismatch {
                    expected: shape,
                    actual: Size2D::new(nrows, row.len()),
                });
            }
            cells.extend(row);
        }
        Ok(GrowableGrid {
            cells,
            capacity: shape,
            bounds: shape,
        })
    }

    /// Copies every cell of an external rectangular source; capacity equals
    /// the source's extent.
    #[must_use]
    pub fn from_rect<G>(source: &G) -> Self
    where
        G: Rect<Item = T>,
        T: Clone,
    {
        let shape = source.size();
        let mut cells = Vec::with_capacity(shape.area());
        for row in 0..shape.rows {
            for col in 0..shape.cols {
                cells.push(source.cell(Coord2D::new(row as isize, col as isize)).clone());
            }
        }
        GrowableGrid {
            cells,
            capacity: shape,
            bounds: shape,
        }
    }

    /// The logical extent of the grid.
    #[inline]
    #[must_use]
    pub fn bounds(&self) -> Size2D {
        self.bounds
    }

    /// The allocated extent of the backing buffer; always `>=` bounds on
    /// both axes.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> Size2D {
        self.capacity
    }

    /// True if the grid holds no logical cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bounds.is_empty()
    }

    #[inline]
    fn offset(&self, coord: Coord2D) -> usize {
        coord.linear_index(self.capacity.cols)
    }

    /// Returns the cell at `coord`, or [`GridError::OutOfBounds`] when the
    /// coordinate is outside the logical bounds (slack cells are not
    /// addressable).
    pub fn get(&self, coord: Coord2D) -> Result<&T> {
        if !self.bounds.contains(coord) {
            return Err(GridError::OutOfBounds {
                coord,
                bounds: self.bounds,
            });
        }
        Ok(&self.cells[self.offset(coord)])
    }

    /// Returns the cell at `coord` mutably, or [`GridError::OutOfBounds`].
    pub fn get_mut(&mut self, coord: Coord2D) -> Result<&mut T> {
        if !self.bounds.contains(coord) {
            return Err(GridError::OutOfBounds {
                coord,
                bounds: self.bounds,
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
    ///
    /// An alias, not a copy; see [`GrowableGrid::sector`] for the
    /// independent-copy form.
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

    /// Iterates over the logical cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        let width = self.bounds.cols;
        let stride = self.capacity.cols.max(1);
        self.cells
            .chunks(stride)
            .take(self.bounds.rows)
            .flat_map(move |row| row[..width].iter())
    }

    /// Iterates mutably over the logical cells in row-major order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        let width = self.bounds.cols;
        let stride = self.capacity.cols.max(1);
        self.cells
            .chunks_mut(stride)
            .take(self.bounds.rows)
            .flat_map(move |row| row[..width].iter_mut())
    }

    /// Iterates over `(coordinate, cell)` pairs in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Coord2D, &T)> {
        let width = self.bounds.cols;
        let stride = self.capacity.cols.max(1);
        self.cells
            .chunks(stride)
            .take(self.bounds.rows)
            .enumerate()
            .flat_map(move |(r, row)| {
                row[..width]
                    .iter()
                    .enumerate()
                    .map(move |(c, v)| (Coord2D::new(r as isize, c as isize), v))
            })
    }

    /// Extracts a copy of the sub-rectangle at `origin` with extent `size`
    /// into a new grid whose capacity exactly equals `size` (no slack).
    pub fn sector(&self, origin: Coord2D, size: Size2D) -> Result<GrowableGrid<T>>
    where
        T: Clone,
    {
        if !self.bounds.contains_sector(origin, size) {
            return Err(GridError::SectorOutOfBounds {
                origin,
                size,
                bounds: self.bounds,
            });
        }
        let mut cells = Vec::with_capacity(size.area());
        for row in 0..size.rows {
            for col in 0..size.cols {
                let coord = origin + Coord2D::new(row as isize, col as isize);
                cells.push(self.cells[self.offset(coord)].clone());
            }
        }
        Ok(GrowableGrid {
            cells,
            capacity: size,
            bounds: size,
        })
    }

    /// Copies the logical cells into a same-shaped [`FixedGrid`].
    #[must_use]
    pub fn to_fixed(&self) -> FixedGrid<T>
    where
        T: Clone,
    {
        FixedGrid::from_rect(self)
    }
}

impl<T: Default> GrowableGrid<T> {
    /// Grows the capacity to exactly `new_capacity`.
    ///
    /// Fails with [`GridError::CapacityShrink`] if either axis of
    /// `new_capacity` is smaller than the current capacity's. When the
    /// requested capacity already holds, the backing buffer is untouched:
    /// no reallocation occurs then or for any subsequent mutation that
    /// stays within it. Otherwise a new buffer is allocated and existing
    /// logical rows are moved into it row by row, since the row stride
    /// changes with the capacity width.
    pub fn reserve_exact(&mut self, new_capacity: Size2D) -> Result<()> {
        if new_capacity.rows < self.capacity.rows || new_capacity.cols < self.capacity.cols {
            return Err(GridError::CapacityShrink {
                current: self.capacity,
                requested: new_capacity,
            });
        }
        if new_capacity == self.capacity {
            return Ok(());
        }
        self.realloc(new_capacity);
        Ok(())
    }

    /// Appends `n` rows of default cells at the end of the logical bounds.
    ///
    /// Grows capacity on the row axis only if insufficient, allocating
    /// exactly enough to hold the new bounds; pre-grow with
    /// [`reserve_exact`](Self::reserve_exact) to avoid the allocation.
    pub fn add_rows(&mut self, n: usize) {
        if n == 0 {
            return;
        }
        self.grow_to_fit(Size2D::new(self.bounds.rows + n, self.bounds.cols));
        // The appended rows were slack and already hold defaults.
        self.bounds.rows += n;
        trace!("add_rows({}): bounds now {}", n, self.bounds);
    }

    /// Appends `n` columns of default cells at the end of the logical bounds.
    pub fn add_cols(&mut self, n: usize) {
        if n == 0 {
            return;
        }
        self.grow_to_fit(Size2D::new(self.bounds.rows, self.bounds.cols + n));
        self.bounds.cols += n;
        trace!("add_cols({}): bounds now {}", n, self.bounds);
    }

    /// Inserts `n` default-initialized rows before row `at`, shifting the
    /// rows at index `>= at` forward as whole-row blocks.
    ///
    /// `at` may equal the current row extent (append position). Fails with
    /// [`GridError::RangeOutOfBounds`] otherwise, before any movement.
    pub fn insert_rows(&mut self, at: usize, n: usize) -> Result<()> {
        if at > self.bounds.rows {
            return Err(GridError::RangeOutOfBounds {
                at,
                n,
                len: self.bounds.rows,
            });
        }
        if n == 0 {
            return Ok(());
        }
        self.grow_to_fit(Size2D::new(self.bounds.rows + n, self.bounds.cols));
        let stride = self.capacity.cols;
        // Rotate the trailing slack rows into position `at`; they hold
        // defaults, so the inserted rows come out default-initialized.
        let region = &mut self.cells[at * stride..(self.bounds.rows + n) * stride];
        region.rotate_right(n * stride);
        self.bounds.rows += n;
        trace!("insert_rows(at={}, n={}): bounds now {}", at, n, self.bounds);
        Ok(())
    }

    /// Inserts `n` default-initialized columns before column `at`.
    ///
    /// Unlike row insertion, which moves whole-row blocks, this shifts the
    /// tail of every existing row within its capacity-wide stride -- more
    /// expensive per inserted unit.
    pub fn insert_cols(&mut self, at: usize, n: usize) -> Result<()> {
        if at > self.bounds.cols {
            return Err(GridError::RangeOutOfBounds {
                at,
                n,
                len: self.bounds.cols,
            });
        }
        if n == 0 {
            return Ok(());
        }
        self.grow_to_fit(Size2D::new(self.bounds.rows, self.bounds.cols + n));
        let stride = self.capacity.cols;
        let new_width = self.bounds.cols + n;
        for row in 0..self.bounds.rows {
            let start = row * stride;
            // Same trick as row insertion, one row at a time: the n slack
            // cells at the end of the widened span rotate into `at`.
            self.cells[start + at..start + new_width].rotate_right(n);
        }
        self.bounds.cols += n;
        trace!("insert_cols(at={}, n={}): bounds now {}", at, n, self.bounds);
        Ok(())
    }

    /// Removes `n` rows starting at row `at`, shifting trailing rows back
    /// and shrinking the bounds.
    ///
    /// Every vacated row is reset to default cells, dropping whatever the
    /// removed rows still held.
    pub fn remove_rows(&mut self, at: usize, n: usize) -> Result<()> {
        if at > self.bounds.rows || n > self.bounds.rows - at {
            return Err(GridError::RangeOutOfBounds {
                at,
                n,
                len: self.bounds.rows,
            });
        }
        if n == 0 {
            return Ok(());
        }
        let stride = self.capacity.cols;
        // Rotate the removed rows to the end of the logical region, then
        // clear them there.
        let region = &mut self.cells[at * stride..self.bounds.rows * stride];
        region.rotate_left(n * stride);
        for cell in &mut self.cells[(self.bounds.rows - n) * stride..self.bounds.rows * stride] {
            *cell = T::default();
        }
        self.bounds.rows -= n;
        trace!("remove_rows(at={}, n={}): bounds now {}", at, n, self.bounds);
        Ok(())
    }

    /// Removes `n` columns starting at column `at`, shifting each row's
    /// tail back within its stride and shrinking the bounds.
    ///
    /// Vacated cells are reset to the default value.
    pub fn remove_cols(&mut self, at: usize, n: usize) -> Result<()> {
        if at > self.bounds.cols || n > self.bounds.cols - at {
            return Err(GridError::RangeOutOfBounds {
                at,
                n,
                len: self.bounds.cols,
            });
        }
        if n == 0 {
            return Ok(());
        }
        let stride = self.capacity.cols;
        let width = self.bounds.cols;
        for row in 0..self.bounds.rows {
            let start = row * stride;
            self.cells[start + at..start + width].rotate_left(n);
            for cell in &mut self.cells[start + width - n..start + width] {
                *cell = T::default();
            }
        }
        self.bounds.cols -= n;
        trace!("remove_cols(at={}, n={}): bounds now {}", at, n, self.bounds);
        Ok(())
    }

    /// Resets the logical bounds to zero and every cell up to the current
    /// capacity to the default value. Capacity is retained; nothing is
    /// deallocated.
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = T::default();
        }
        self.bounds = Size2D::EMPTY;
        trace!("clear: capacity {} retained", self.capacity);
    }

    /// Grows capacity just enough to hold `needed`; no-op when it already
    /// fits.
    fn grow_to_fit(&mut self, needed: Size2D) {
        if self.capacity.contains_size(needed) {
            return;
        }
        self.realloc(self.capacity.max(needed));
    }

    /// Replaces the backing buffer with one sized to `new_capacity`, moving
    /// the logical rows over one by one (the stride changes with the
    /// capacity width). Slack cells in the new buffer are defaults.
    fn realloc(&mut self, new_capacity: Size2D) {
        trace!(
            "realloc: capacity {} -> {}, bounds {}",
            self.capacity,
            new_capacity,
            self.bounds
        );
        let old_stride = self.capacity.cols;
        let new_stride = new_capacity.cols;
        let mut old = mem::replace(
            &mut self.cells,
            (0..new_capacity.area()).map(|_| T::default()).collect(),
        );
        for row in 0..self.bounds.rows {
            for col in 0..self.bounds.cols {
                self.cells[row * new_stride + col] = mem::take(&mut old[row * old_stride + col]);
            }
        }
        self.capacity = new_capacity;
    }
}

impl<T> Default for GrowableGrid<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Equality compares logical bounds and cells only; capacity is an
/// allocation detail.
impl<T: PartialEq> PartialEq for GrowableGrid<T> {
    fn eq(&self, other: &Self) -> bool {
        self.bounds == other.bounds && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for GrowableGrid<T> {}

impl<T> Rect for GrowableGrid<T> {
    type Item = T;

    #[inline]
    fn size(&self) -> Size2D {
        self.bounds
    }

    #[inline]
    fn cell(&self, coord: Coord2D) -> &T {
        debug_assert!(self.bounds.contains(coord));
        &self.cells[self.offset(coord)]
    }
}

impl<T> RectMut for GrowableGrid<T> {
    #[inline]
    fn cell_mut(&mut self, coord: Coord2D) -> &mut T {
        debug_assert!(self.bounds.contains(coord));
        let idx = self.offset(coord);
        &mut self.cells[idx]
    }

    #[inline]
    fn swap(&mut self, a: Coord2D, b: Coord2D) {
        let (ia, ib) = (self.offset(a), self.offset(b));
        self.cells.swap(ia, ib);
    }
}

impl<T> Index<Coord2D> for GrowableGrid<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `coord` is outside the logical bounds. Use
    /// [`GrowableGrid::get`] for a checked lookup.
    fn index(&self, coord: Coord2D) -> &T {
        match self.get(coord) {
            Ok(cell) => cell,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> IndexMut<Coord2D> for GrowableGrid<T> {
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

    fn grid_2x3() -> GrowableGrid<u32> {
        GrowableGrid::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap()
    }

    /// Asserts the buffer invariant: every slack cell holds the default.
    fn assert_slack_default<T: Default + PartialEq + std::fmt::Debug>(grid: &GrowableGrid<T>) {
        let stride = grid.capacity.cols;
        for row in 0..grid.capacity.rows {
            for col in 0..grid.capacity.cols {
                let logical = row < grid.bounds.rows && col < grid.bounds.cols;
                if !logical {
                    assert_eq!(
                        grid.cells[row * stride + col],
                        T::default(),
                        "slack cell ({row}, {col}) is not default"
                    );
                }
            }
        }
    }

    #[test]
    fn starts_empty() {
        let grid: GrowableGrid<u32> = GrowableGrid::new();
        assert_eq!(grid.bounds(), Size2D::EMPTY);
        assert_eq!(grid.capacity(), Size2D::EMPTY);
        assert!(grid.is_empty());
        assert_eq!(grid.iter().count(), 0);
    }

    #[test]
    fn reserve_exact_keeps_bounds_and_content() {
        let mut grid = grid_2x3();
        grid.reserve_exact(Size2D::new(4, 5)).unwrap();
        assert_eq!(grid.capacity(), Size2D::new(4, 5));
        assert_eq!(grid.bounds(), Size2D::new(2, 3));
        assert_eq!(grid.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5, 6]);
        assert_slack_default(&grid);
    }

    #[test]
    fn reserve_exact_already_held_does_not_reallocate() {
        let mut grid = grid_2x3();
        grid.reserve_exact(Size2D::new(4, 4)).unwrap();
        let ptr = grid.cells.as_ptr();
        grid.reserve_exact(Size2D::new(4, 4)).unwrap();
        assert_eq!(grid.cells.as_ptr(), ptr, "no-op reserve must not reallocate");
    }

    #[test]
    fn reserve_exact_rejects_shrink_on_either_axis() {
        let mut grid = grid_2x3();
        grid.reserve_exact(Size2D::new(4, 4)).unwrap();
        let err = grid.reserve_exact(Size2D::new(3, 4)).unwrap_err();
        assert_eq!(
            err,
            GridError::CapacityShrink {
                current: Size2D::new(4, 4),
                requested: Size2D::new(3, 4),
            }
        );
        assert!(grid.reserve_exact(Size2D::new(4, 3)).is_err());
        // Rejected requests leave the grid untouched.
        assert_eq!(grid.capacity(), Size2D::new(4, 4));
        assert_eq!(grid.bounds(), Size2D::new(2, 3));
    }

    #[test]
    fn mutations_within_reserved_capacity_do_not_allocate() {
        let mut grid = grid_2x3();
        grid.reserve_exact(Size2D::new(6, 6)).unwrap();
        let ptr = grid.cells.as_ptr();

        grid.add_rows(2);
        grid.add_cols(1);
        grid.insert_rows(1, 2).unwrap();
        grid.insert_cols(0, 2).unwrap();
        grid.remove_rows(0, 3).unwrap();
        grid.clear();

        assert_eq!(grid.cells.as_ptr(), ptr, "pre-grown mutations must not reallocate");
    }

    #[test]
    fn growing_rows_preserves_column_offsets() {
        // The stride is the capacity width, so adding rows must never move
        // cells within their rows.
        let mut grid = grid_2x3();
        grid.add_rows(3);
        assert_eq!(grid.bounds(), Size2D::new(5, 3));
        assert_eq!(grid[Coord2D::new(1, 2)], 6);
        assert_eq!(grid[Coord2D::new(4, 0)], 0);
        assert_slack_default(&grid);
    }

    #[test]
    fn add_cols_grows_the_column_axis_only() {
        let mut grid = grid_2x3();
        grid.add_cols(2);
        assert_eq!(grid.bounds(), Size2D::new(2, 5));
        assert_eq!(grid.capacity(), Size2D::new(2, 5));
        assert_eq!(
            grid.iter().copied().collect::<Vec<_>>(),
            vec![1, 2, 3, 0, 0, 4, 5, 6, 0, 0]
        );
        assert_slack_default(&grid);
    }

    #[test]
    fn add_zero_is_a_no_op() {
        let mut grid = grid_2x3();
        let ptr = grid.cells.as_ptr();
        grid.add_rows(0);
        grid.add_cols(0);
        assert_eq!(grid, grid_2x3());
        assert_eq!(grid.cells.as_ptr(), ptr);
    }

    #[test]
    fn insert_rows_shifts_whole_blocks() {
        let mut grid = grid_2x3();
        grid.insert_rows(1, 2).unwrap();
        assert_eq!(grid.bounds(), Size2D::new(4, 3));
        assert_eq!(
            grid.iter().copied().collect::<Vec<_>>(),
            vec![1, 2, 3, 0, 0, 0, 0, 0, 0, 4, 5, 6]
        );
        assert_slack_default(&grid);
    }

    #[test]
    fn insert_rows_at_extent_appends() {
        let mut grid = grid_2x3();
        grid.insert_rows(2, 1).unwrap();
        assert_eq!(grid.bounds(), Size2D::new(3, 3));
        assert_eq!(grid.row(2).unwrap().iter().copied().collect::<Vec<_>>(), vec![0, 0, 0]);
    }

    #[test]
    fn insert_rows_past_extent_is_rejected() {
        let mut grid = grid_2x3();
        let err = grid.insert_rows(3, 1).unwrap_err();
        assert_eq!(err, GridError::RangeOutOfBounds { at: 3, n: 1, len: 2 });
        assert_eq!(grid, grid_2x3());
    }

    #[test]
    fn insert_cols_shifts_row_tails() {
        let mut grid = grid_2x3();
        grid.insert_cols(1, 1).unwrap();
        assert_eq!(grid.bounds(), Size2D::new(2, 4));
        assert_eq!(
            grid.iter().copied().collect::<Vec<_>>(),
            vec![1, 0, 2, 3, 4, 0, 5, 6]
        );
        assert_slack_default(&grid);
    }

    #[test]
    fn insert_then_remove_rows_restores_the_grid() {
        let original = grid_2x3();
        for at in 0..=2 {
            for n in 0..3 {
                let mut grid = original.clone();
                grid.insert_rows(at, n).unwrap();
                grid.remove_rows(at, n).unwrap();
                assert_eq!(grid, original, "at={at} n={n}");
                assert_slack_default(&grid);
            }
        }
    }

    #[test]
    fn insert_then_remove_cols_restores_the_grid() {
        let original = grid_2x3();
        for at in 0..=3 {
            for n in 0..3 {
                let mut grid = original.clone();
                grid.insert_cols(at, n).unwrap();
                grid.remove_cols(at, n).unwrap();
                assert_eq!(grid, original, "at={at} n={n}");
                assert_slack_default(&grid);
            }
        }
    }

    #[test]
    fn remove_rows_clears_vacated_cells() {
        let mut grid = grid_2x3();
        grid.remove_rows(0, 1).unwrap();
        assert_eq!(grid.bounds(), Size2D::new(1, 3));
        assert_eq!(grid.iter().copied().collect::<Vec<_>>(), vec![4, 5, 6]);
        assert_slack_default(&grid);
    }

    #[test]
    fn remove_range_past_extent_is_rejected() {
        let mut grid = grid_2x3();
        let err = grid.remove_rows(1, 2).unwrap_err();
        assert_eq!(err, GridError::RangeOutOfBounds { at: 1, n: 2, len: 2 });
        let err = grid.remove_cols(2, 2).unwrap_err();
        assert_eq!(err, GridError::RangeOutOfBounds { at: 2, n: 2, len: 3 });
        assert_eq!(grid, grid_2x3());
    }

    #[test]
    fn remove_cols_shifts_tails_back() {
        let mut grid = grid_2x3();
        grid.remove_cols(0, 2).unwrap();
        assert_eq!(grid.bounds(), Size2D::new(2, 1));
        assert_eq!(grid.iter().copied().collect::<Vec<_>>(), vec![3, 6]);
        assert_slack_default(&grid);
    }

    #[test]
    fn clear_retains_capacity_and_clears_all_cells() {
        let mut grid = grid_2x3();
        grid.reserve_exact(Size2D::new(3, 3)).unwrap();
        let ptr = grid.cells.as_ptr();
        grid.clear();
        assert_eq!(grid.bounds(), Size2D::EMPTY);
        assert_eq!(grid.capacity(), Size2D::new(3, 3));
        assert_eq!(grid.cells.as_ptr(), ptr);
        assert!(grid.cells.iter().all(|v| *v == 0));
    }

    #[test]
    fn sector_copy_has_exact_capacity() {
        let grid = GrowableGrid::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        let sector = grid.sector(Coord2D::new(1, 0), Size2D::new(1, 3)).unwrap();
        assert_eq!(sector.bounds(), Size2D::new(1, 3));
        assert_eq!(sector.capacity(), Size2D::new(1, 3));
        assert_eq!(sector.iter().copied().collect::<Vec<_>>(), vec![4, 5, 6]);
    }

    #[test]
    fn sector_outside_bounds_is_rejected() {
        let grid = grid_2x3();
        let err = grid.sector(Coord2D::new(1, 1), Size2D::new(2, 2)).unwrap_err();
        assert!(matches!(err, GridError::SectorOutOfBounds { .. }));
    }

    #[test]
    fn equality_ignores_capacity() {
        let mut a = grid_2x3();
        let b = grid_2x3();
        a.reserve_exact(Size2D::new(8, 8)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn get_rejects_slack_cells() {
        let mut grid = grid_2x3();
        grid.reserve_exact(Size2D::new(4, 4)).unwrap();
        // (2, 0) and (0, 3) are inside capacity but outside bounds.
        assert!(grid.get(Coord2D::new(2, 0)).is_err());
        assert!(grid.get(Coord2D::new(0, 3)).is_err());
    }

    #[test]
    fn string_elements_survive_stride_changes() {
        let mut grid =
            GrowableGrid::from_rows(vec![
                vec!["a".to_string(), "b".to_string()],
                vec!["c".to_string(), "d".to_string()],
            ])
            .unwrap();
        grid.add_cols(1);
        grid.insert_rows(1, 1).unwrap();
        assert_eq!(grid[Coord2D::new(0, 1)], "b");
        assert_eq!(grid[Coord2D::new(2, 0)], "c");
        assert_eq!(grid[Coord2D::new(1, 2)], "");
        assert_slack_default(&grid);
    }
}
