//! Generic two-dimensional containers over flat buffers.
//!
//! The crate provides a fixed-shape rectangular array
//! ([`FixedGrid`]), a growable rectangular list ([`GrowableGrid`]) with
//! independent capacity and logical bounds per axis, zero-copy row, column,
//! and sector views over either, and a generic algorithm layer ([`Scan`])
//! that works against any type exposing the minimal rectangular-indexing
//! capability ([`Rect`]/[`RectMut`]).
//!
//! Algorithms and views never touch a container's internals; they call only
//! the capability contract. All of them are generic over `FnMut` closures
//! and monomorphize per call site, so the hot search/transform paths carry
//! no heap allocation and no indirect dispatch.
//!
//! ```
//! use flatgrid::{Coord2D, GrowableGrid, Scan, Size2D};
//!
//! let mut grid = GrowableGrid::from_rows(vec![
//!     vec![2, 3, 5],
//!     vec![4, 9, 1],
//! ])
//! .unwrap();
//!
//! grid.add_rows(1);
//! grid.set(Coord2D::new(2, 0), 8).unwrap();
//!
//! let hit = grid.find(|v| *v > 5).unwrap();
//! assert_eq!((hit.coord, *hit.value), (Coord2D::new(1, 1), 9));
//!
//! let bottom = grid.sector(Coord2D::new(2, 0), Size2D::new(1, 3)).unwrap();
//! assert_eq!(bottom.capacity(), Size2D::new(1, 3));
//! ```

pub mod error;
pub mod fixed;
pub mod geometry;
pub mod growable;
pub mod rect;
pub mod scan;
pub mod views;

pub use error::{GridError, Result};
pub use fixed::FixedGrid;
pub use geometry::{Coord2D, Size2D};
pub use growable::GrowableGrid;
pub use rect::{Rect, RectMut};
pub use scan::{Hit, Scan};
pub use views::{ColumnView, ColumnViewMut, RowView, RowViewMut, SectorView, SectorViewMut};
