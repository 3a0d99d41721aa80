//! Method-of-lines convection.
//!
//! Face values are extrapolated from time `n` cell data with limited
//! slopes and no characteristic tracing; the caller advances the rate with
//! its own multistage integrator.
//!
//! | Operation | Regular grid | Cut cells |
//! |-----------|--------------|-----------|
//! | face-normal velocity | [`predict_vels_on_faces`] | [`predict_vels_on_faces_eb`] |
//! | advective fluxes | [`compute_convective_fluxes`] | [`compute_convective_fluxes_eb`] |
//! | rate | [`compute_convective_rate`] | [`compute_convective_rate_eb`] |
//!
//! Faces on an edge with a prescribed or high-order-extrapolated value take
//! the ghost cell value directly.

mod eb;
mod regular;

pub use eb::{compute_convective_fluxes_eb, compute_convective_rate_eb, predict_vels_on_faces_eb};
pub use regular::{
    MOL_HALO, compute_convective_fluxes, compute_convective_rate, predict_vels_on_faces,
};
