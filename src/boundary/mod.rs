//! Physical boundary handling.
//!
//! Ghost cells outside the domain are filled by the caller. This module
//! decides how the kernels treat them:
//!
//! | Code | Slopes at the edge | Edge states |
//! |------|--------------------|-------------|
//! | `Interior` | centered | unchanged |
//! | `ExtDir` | one-sided | exterior = ghost value (normal velocity: both) |
//! | `HoExtrap` | one-sided | exterior = interior |
//! | `FoExtrap`, `ReflectEven` | centered | exterior = interior |
//! | `ReflectOdd` | centered | both zero |
//!
//! - [`classify`] is the pure per-face/per-component policy
//! - [`ExtrapolationEdges`] tells the slope engine where one-sided
//!   formulas apply
//! - [`set_edge_bcs`] and [`clip_outflow`] enforce the table on state pairs

mod bc;
mod edge;
mod policy;

pub use bc::{BcRec, BcType, velocity_walls};
pub use edge::{FacePair, clip_outflow, set_edge_bcs};
pub use policy::{EdgeClass, EdgeProximity, ExtrapolationEdges, classify, extrapolation_edges};
