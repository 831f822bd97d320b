//! Generic search, transform, and iterate operations over any [`Rect`].
//!
//! Everything here is written once against the capability contract and is
//! usable by [`FixedGrid`](crate::fixed::FixedGrid),
//! [`GrowableGrid`](crate::growable::GrowableGrid),
//! [`SectorView`](crate::views::SectorView), or any user type implementing
//! [`Rect`].
//!
//! Whole-container scans proceed row-major: row 0 left to right, then row 1,
//! and so on. The `*_last` variants scan in exact reverse. All operations
//! are generic over `FnMut` closures, so every call site monomorphizes to a
//! direct loop with no heap allocation or indirect dispatch; a
//! `Box<dyn FnMut(..)>` flows through the same functions when dynamic
//! dispatch is wanted.
//!
//! Search results distinguish "not found" (`None`, a success shape) from
//! contract violations (`Err`, out-of-range start or sector). Extracting a
//! value from a failed search is `Option::unwrap` on `None`, which panics.

use crate::error::{GridError, Result};
use crate::fixed::FixedGrid;
use crate::geometry::{Coord2D, Size2D};
use crate::rect::Rect;

/// A successful search: the matching cell and its coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit<'a, T> {
    /// Where the match was found.
    pub coord: Coord2D,
    /// The matching cell.
    pub value: &'a T,
}

/// Row-major coordinates of an extent, first to last.
fn coords(size: Size2D) -> impl Iterator<Item = Coord2D> {
    (0..size.rows)
        .flat_map(move |r| (0..size.cols).map(move |c| Coord2D::new(r as isize, c as isize)))
}

/// Row-major coordinates of an extent in exact reverse, last to first.
fn coords_rev(size: Size2D) -> impl Iterator<Item = Coord2D> {
    (0..size.rows).rev().flat_map(move |r| {
        (0..size.cols)
            .rev()
            .map(move |c| Coord2D::new(r as isize, c as isize))
    })
}

/// Search, transform, and iterate operations for rectangular containers.
///
/// Blanket-implemented for every [`Rect`].
pub trait Scan: Rect {
    /// Returns the first cell matching `pred` in row-major order.
    fn find<P>(&self, mut pred: P) -> Option<Hit<'_, Self::Item>>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        for coord in coords(self.size()) {
            if pred(self.cell(coord)) {
                return Some(Hit {
                    coord,
                    value: self.cell(coord),
                });
            }
        }
        None
    }

    /// Returns the last cell matching `pred`, scanning in exact reverse
    /// row-major order.
    fn find_last<P>(&self, mut pred: P) -> Option<Hit<'_, Self::Item>>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        for coord in coords_rev(self.size()) {
            if pred(self.cell(coord)) {
                return Some(Hit {
                    coord,
                    value: self.cell(coord),
                });
            }
        }
        None
    }

    /// Collects every matching cell with its coordinate, in row-major order.
    fn find_all<P>(&self, mut pred: P) -> Vec<Hit<'_, Self::Item>>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        let mut hits = Vec::new();
        for coord in coords(self.size()) {
            if pred(self.cell(coord)) {
                hits.push(Hit {
                    coord,
                    value: self.cell(coord),
                });
            }
        }
        hits
    }

    /// Collects the coordinates of every matching cell, in row-major order.
    fn find_all_coords<P>(&self, mut pred: P) -> Vec<Coord2D>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        coords(self.size())
            .filter(|&coord| pred(self.cell(coord)))
            .collect()
    }

    /// Coordinate of the first cell matching `pred`.
    fn position<P>(&self, pred: P) -> Option<Coord2D>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.find(pred).map(|hit| hit.coord)
    }

    /// Coordinate of the last cell matching `pred`.
    fn position_last<P>(&self, pred: P) -> Option<Coord2D>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.find_last(pred).map(|hit| hit.coord)
    }

    /// Row-major linear offset of the first cell matching `pred`.
    fn linear_position<P>(&self, pred: P) -> Option<usize>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.position(pred)
            .map(|coord| coord.linear_index(self.size().cols))
    }

    /// Row-major linear offset of the last cell matching `pred`.
    fn linear_position_last<P>(&self, pred: P) -> Option<usize>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.position_last(pred)
            .map(|coord| coord.linear_index(self.size().cols))
    }

    /// True if any cell equals `value`.
    fn contains(&self, value: &Self::Item) -> bool
    where
        Self::Item: PartialEq,
    {
        self.index_of(value).is_some()
    }

    /// Coordinate of the first cell equal to `value`.
    fn index_of(&self, value: &Self::Item) -> Option<Coord2D>
    where
        Self::Item: PartialEq,
    {
        self.position(|cell| cell == value)
    }

    /// Coordinate of the last cell equal to `value`.
    fn last_index_of(&self, value: &Self::Item) -> Option<Coord2D>
    where
        Self::Item: PartialEq,
    {
        self.position_last(|cell| cell == value)
    }

    /// [`contains`](Self::contains) with a caller-supplied comparison
    /// instead of `PartialEq`.
    fn contains_by<P>(&self, pred: P) -> bool
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.index_of_by(pred).is_some()
    }

    /// [`index_of`](Self::index_of) with a caller-supplied comparison
    /// instead of `PartialEq`.
    fn index_of_by<P>(&self, pred: P) -> Option<Coord2D>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.position(pred)
    }

    /// [`last_index_of`](Self::last_index_of) with a caller-supplied
    /// comparison instead of `PartialEq`.
    fn last_index_of_by<P>(&self, pred: P) -> Option<Coord2D>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.position_last(pred)
    }

    /// Applies `f` to every cell with its coordinate, in row-major order.
    fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(Coord2D, &Self::Item),
    {
        for coord in coords(self.size()) {
            f(coord, self.cell(coord));
        }
    }

    /// True if every cell matches `pred`; vacuously true when empty.
    fn all<P>(&self, mut pred: P) -> bool
    where
        P: FnMut(&Self::Item) -> bool,
    {
        coords(self.size()).all(|coord| pred(self.cell(coord)))
    }

    /// True if any cell matches `pred`; false when empty.
    fn any<P>(&self, mut pred: P) -> bool
    where
        P: FnMut(&Self::Item) -> bool,
    {
        coords(self.size()).any(|coord| pred(self.cell(coord)))
    }

    /// Maps every cell through `f` into a new same-shaped container.
    fn convert_all<U, F>(&self, mut f: F) -> FixedGrid<U>
    where
        F: FnMut(&Self::Item) -> U,
    {
        FixedGrid::from_fn(self.size(), |coord| f(self.cell(coord)))
    }

    /// Returns the first match among the `count` cells starting at `start`,
    /// advancing in row-major order over the **full** container width.
    ///
    /// The window is linear: it wraps from the end of one row to the start
    /// of the next relative to the whole container, even when the region of
    /// interest is conceptually a sub-rectangle (use
    /// [`find_in_sector`](Self::find_in_sector) for that). A zero `count`
    /// yields `Ok(None)` without inspecting any cell. An invalid `start`
    /// fails with [`GridError::OutOfBounds`] and a window running past the
    /// last cell with [`GridError::RangeOutOfBounds`] -- both distinct from
    /// not-found.
    fn find_from<P>(&self, start: Coord2D, count: usize, mut pred: P) -> Result<Option<Hit<'_, Self::Item>>>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        if count == 0 {
            return Ok(None);
        }
        let size = self.size();
        if !size.contains(start) {
            return Err(GridError::OutOfBounds {
                coord: start,
                bounds: size,
            });
        }
        let stride = size.cols;
        let begin = start.linear_index(stride);
        if count > size.area() - begin {
            return Err(GridError::RangeOutOfBounds {
                at: begin,
                n: count,
                len: size.area(),
            });
        }
        for index in begin..begin + count {
            let coord = Coord2D::from_linear(index, stride);
            if pred(self.cell(coord)) {
                return Ok(Some(Hit {
                    coord,
                    value: self.cell(coord),
                }));
            }
        }
        Ok(None)
    }

    /// Returns the first match inside the sub-rectangle at `origin` with
    /// extent `sector`, scanned row by row.
    ///
    /// A zero-size sector yields `Ok(None)` without inspecting any cell; a
    /// sector that does not fit the container fails with
    /// [`GridError::SectorOutOfBounds`], distinct from not-found.
    fn find_in_sector<P>(
        &self,
        origin: Coord2D,
        sector: Size2D,
        mut pred: P,
    ) -> Result<Option<Hit<'_, Self::Item>>>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        if sector.is_empty() {
            return Ok(None);
        }
        let size = self.size();
        if !size.contains_sector(origin, sector) {
            return Err(GridError::SectorOutOfBounds {
                origin,
                size: sector,
                bounds: size,
            });
        }
        for offset in coords(sector) {
            let coord = origin + offset;
            if pred(self.cell(coord)) {
                return Ok(Some(Hit {
                    coord,
                    value: self.cell(coord),
                }));
            }
        }
        Ok(None)
    }
}

impl<G: Rect + ?Sized> Scan for G {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixed::FixedGrid;

    fn sample_3x3() -> FixedGrid<i32> {
        FixedGrid::from_rows(vec![vec![2, 3, 5], vec![4, 9, 1], vec![8, 2, 3]]).unwrap()
    }

    #[test]
    fn find_scans_row_major() {
        let grid = sample_3x3();
        let hit = grid.find(|v| *v > 5).unwrap();
        assert_eq!(*hit.value, 9);
        assert_eq!(hit.coord, Coord2D::new(1, 1));
    }

    #[test]
    fn find_last_scans_in_exact_reverse() {
        let grid = sample_3x3();
        let hit = grid.find_last(|v| *v > 5).unwrap();
        assert_eq!(*hit.value, 8);
        assert_eq!(hit.coord, Coord2D::new(2, 0));
    }

    #[test]
    fn find_on_no_match_is_none() {
        let grid = sample_3x3();
        assert!(grid.find(|v| *v > 100).is_none());
    }

    #[test]
    fn find_all_collects_in_row_major_order() {
        let grid = sample_3x3();
        let coords: Vec<_> = grid.find_all(|v| *v >= 5).iter().map(|h| h.coord).collect();
        assert_eq!(
            coords,
            vec![Coord2D::new(0, 2), Coord2D::new(1, 1), Coord2D::new(2, 0)]
        );
        assert_eq!(grid.find_all_coords(|v| *v >= 5), coords);
    }

    #[test]
    fn equality_searches() {
        let grid = sample_3x3();
        assert!(grid.contains(&9));
        assert!(!grid.contains(&7));
        assert_eq!(grid.index_of(&3), Some(Coord2D::new(0, 1)));
        assert_eq!(grid.last_index_of(&3), Some(Coord2D::new(2, 2)));
        assert_eq!(grid.index_of(&7), None);
    }

    #[test]
    fn equality_searches_with_caller_supplied_comparison() {
        let grid =
            FixedGrid::from_rows(vec![vec!["Ada", "Bob"], vec!["EVE", "ada"]]).unwrap();
        assert!(grid.contains_by(|s| s.eq_ignore_ascii_case("eve")));
        assert!(!grid.contains_by(|s| s.eq_ignore_ascii_case("mallory")));
        assert_eq!(
            grid.index_of_by(|s| s.eq_ignore_ascii_case("ada")),
            Some(Coord2D::new(0, 0))
        );
        assert_eq!(
            grid.last_index_of_by(|s| s.eq_ignore_ascii_case("ada")),
            Some(Coord2D::new(1, 1))
        );
    }

    #[test]
    fn linear_positions_use_full_width() {
        let grid = sample_3x3();
        assert_eq!(grid.linear_position(|v| *v == 9), Some(4));
        assert_eq!(grid.linear_position_last(|v| *v == 3), Some(8));
    }

    #[test]
    fn find_from_advances_over_full_width() {
        let grid = FixedGrid::from_rows(vec![vec![2, 3, 5], vec![4, 9, 1]]).unwrap();
        let hit = grid
            .find_from(Coord2D::ZERO, 6, |v| *v == 9)
            .unwrap()
            .unwrap();
        assert_eq!(hit.coord, Coord2D::new(1, 1));

        // The window is linear over the whole width: starting mid-row wraps
        // into the next row.
        let hit = grid
            .find_from(Coord2D::new(0, 2), 3, |v| *v == 9)
            .unwrap()
            .unwrap();
        assert_eq!(hit.coord, Coord2D::new(1, 1));
    }

    #[test]
    fn find_from_zero_count_is_not_found_not_an_error() {
        let grid = FixedGrid::from_rows(vec![vec![2, 3, 5], vec![4, 9, 1]]).unwrap();
        let mut visited = 0;
        let outcome = grid.find_from(Coord2D::ZERO, 0, |_| {
            visited += 1;
            true
        });
        assert_eq!(outcome, Ok(None));
        assert_eq!(visited, 0, "zero count must not inspect any cell");
    }

    #[test]
    fn find_from_validates_start_and_window() {
        let grid = sample_3x3();
        assert_eq!(
            grid.find_from(Coord2D::new(3, 0), 1, |_| true),
            Err(GridError::OutOfBounds {
                coord: Coord2D::new(3, 0),
                bounds: Size2D::new(3, 3),
            })
        );
        assert_eq!(
            grid.find_from(Coord2D::new(2, 2), 2, |_| true),
            Err(GridError::RangeOutOfBounds { at: 8, n: 2, len: 9 })
        );
    }

    #[test]
    fn find_in_sector_scans_only_the_rectangle() {
        let grid = sample_3x3();
        // The 2x2 sector at (1, 1) holds [[9, 1], [2, 3]]; 8 at (2, 0) is
        // outside it.
        let hit = grid
            .find_in_sector(Coord2D::new(1, 1), Size2D::new(2, 2), |v| *v > 5)
            .unwrap()
            .unwrap();
        assert_eq!(hit.coord, Coord2D::new(1, 1));
        assert_eq!(*hit.value, 9);

        let miss = grid
            .find_in_sector(Coord2D::new(2, 1), Size2D::new(1, 2), |v| *v > 5)
            .unwrap();
        assert!(miss.is_none());
    }

    #[test]
    fn find_in_sector_zero_size_is_not_found() {
        let grid = sample_3x3();
        let mut visited = 0;
        let outcome = grid.find_in_sector(Coord2D::new(1, 1), Size2D::EMPTY, |_| {
            visited += 1;
            true
        });
        assert_eq!(outcome, Ok(None));
        assert_eq!(visited, 0);
    }

    #[test]
    fn find_in_sector_validates_the_rectangle() {
        let grid = sample_3x3();
        assert!(matches!(
            grid.find_in_sector(Coord2D::new(2, 2), Size2D::new(2, 2), |_| true),
            Err(GridError::SectorOutOfBounds { .. })
        ));
    }

    #[test]
    fn for_each_visits_every_cell_once() {
        let grid = sample_3x3();
        let mut sum = 0;
        let mut count = 0;
        grid.for_each(|_, v| {
            sum += v;
            count += 1;
        });
        assert_eq!(count, 9);
        assert_eq!(sum, 37);
    }

    #[test]
    fn all_and_any() {
        let grid = sample_3x3();
        assert!(grid.all(|v| *v > 0));
        assert!(!grid.all(|v| *v > 1));
        assert!(grid.any(|v| *v == 9));
        assert!(!grid.any(|v| *v == 100));

        let empty: FixedGrid<i32> = FixedGrid::new(Size2D::EMPTY);
        assert!(empty.all(|_| false), "all is vacuously true when empty");
        assert!(!empty.any(|_| true));
    }

    #[test]
    fn convert_all_produces_a_same_shaped_container() {
        let grid = sample_3x3();
        let doubled = grid.convert_all(|v| v * 2);
        assert_eq!(doubled.size(), grid.size());
        assert_eq!(doubled[Coord2D::new(1, 1)], 18);
        let labels = grid.convert_all(|v| v.to_string());
        assert_eq!(labels[Coord2D::new(2, 0)], "8");
    }

    #[test]
    fn boxed_predicates_flow_through_the_same_api() {
        let grid = sample_3x3();
        let pred: Box<dyn FnMut(&i32) -> bool> = Box::new(|v| *v > 5);
        let hit = grid.find(pred).unwrap();
        assert_eq!(hit.coord, Coord2D::new(1, 1));
    }

    #[test]
    fn works_over_growable_grids_too() {
        use crate::growable::GrowableGrid;

        let mut grid = GrowableGrid::from_rows(vec![vec![2, 3, 5], vec![4, 9, 1]]).unwrap();
        grid.add_rows(1);
        assert_eq!(grid.position(|v| *v == 0), Some(Coord2D::new(2, 0)));
        assert_eq!(grid.find_last(|v| *v > 5).unwrap().coord, Coord2D::new(1, 1));
    }
}
