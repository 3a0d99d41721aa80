//! Embedded-boundary (cut-cell) geometry.
//!
//! The geometry is built by the caller; this crate only reads it. Kernels
//! that take an [`EbGeometry`] treat covered cells as absent, weight face
//! fluxes by area fraction and scale cell rates by inverse volume fraction.

mod flag;
mod geometry;

pub use flag::{CellKind, EbCellFlag, FlagArray};
pub use geometry::EbGeometry;
