//! # godunov-rs
//!
//! Finite-volume convection kernels for incompressible flow on structured
//! patches with optional embedded boundaries.
//!
//! This crate provides the building blocks of the convection term:
//! - Limited slopes (second- and fourth-order, one-sided at domain edges)
//! - Least-squares slopes on cut cells
//! - PLM and PPM characteristic tracing to faces
//! - Corner transport upwind coupling of the traced states
//! - Conservative and advective reduction to a per-cell rate
//! - Method-of-lines face values and fluxes, regular and cut-cell
//!
//! The outer solver owns the mesh hierarchy, ghost cell filling, the time
//! loop and the projection; every function here works on one patch and
//! returns new arrays.
//!
//! # Example
//!
//! ```
//! use godunov_rs::{
//!     AdvectionInput, Array4, Axis, BcRec, FaceData, GodunovConfig, ProblemDomain, SpaceDim,
//!     compute_godunov_advection,
//! };
//!
//! let domain = ProblemDomain::uniform_2d(16, 16, 1.0 / 16.0);
//! let config = GodunovConfig::new();
//! let q = Array4::from_fn(domain.bx.grow(SpaceDim::Two, config.required_halo()), 1, |i, j, _, _| {
//!     if i.rem_euclid(16) == j.rem_euclid(16) { 1.0 } else { 0.0 }
//! });
//! let umac = FaceData::from_fn(&domain.bx, SpaceDim::Two, 1, 1, |axis, _, _, _, _| {
//!     if axis == Axis::X { 1.0 } else { 0.5 }
//! });
//! let bcs = [BcRec::periodic()];
//! let input = AdvectionInput::new(&q, &umac, &bcs, &[true]);
//!
//! let rate = compute_godunov_advection(&domain.bx, 1, &input, &domain, 0.01, &config).unwrap();
//! assert!(rate.sum(&domain.bx, 0).abs() < 1e-10);
//! ```

pub mod boundary;
pub mod config;
pub mod diagnostics;
pub mod eb;
pub mod error;
pub mod field;
pub mod flux;
pub mod godunov;
pub mod mesh;
pub mod mol;
pub mod predict;
pub mod slopes;
pub mod types;

// Re-export main types for convenience
pub use boundary::{BcRec, BcType, FacePair, velocity_walls};
pub use config::GodunovConfig;
pub use diagnostics::SlopeDiagnostics;
pub use eb::{EbCellFlag, EbGeometry};
pub use error::ConvectionError;
pub use field::{Array4, FaceData};
pub use mesh::ProblemDomain;
pub use types::{Axis, IndexBox, SpaceDim};

// Godunov
pub use godunov::{
    AdvectionInput, compute_godunov_advection, make_trans_velocities, predict_edge_states,
    predict_godunov,
};
pub use predict::{Reconstruction, trace_faces};
pub use slopes::SlopeOrder;

// Method of lines
pub use mol::{
    compute_convective_fluxes, compute_convective_fluxes_eb, compute_convective_rate,
    compute_convective_rate_eb, predict_vels_on_faces, predict_vels_on_faces_eb,
};
