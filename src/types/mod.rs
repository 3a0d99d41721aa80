//! Strongly-typed index-space types.
//!
//! - [`Axis`] and [`SpaceDim`] name directions instead of bare integers
//! - [`IndexBox`] is an inclusive integer region for cells or faces
//! - [`AxisSides`] holds per-edge values with named `lo`/`hi` fields
//!
//! # Example
//!
//! ```
//! use godunov_rs::types::{Axis, IndexBox, SpaceDim};
//!
//! let cells = IndexBox::plane(8, 4);
//! let x_faces = cells.surrounding_nodes(Axis::X);
//! assert_eq!(x_faces.len(Axis::X), 9);
//!
//! let with_halo = cells.grow(SpaceDim::Two, 3);
//! assert!(with_halo.contains_box(&x_faces));
//! ```

mod axis;
mod index_box;
mod sides;

pub use axis::{Axis, SpaceDim};
pub use index_box::IndexBox;
pub use sides::AxisSides;
