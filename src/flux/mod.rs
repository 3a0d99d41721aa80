//! Face resolution and flux reduction.
//!
//! - [`upwind_state`], [`burgers_state`]: single-valued state at a face from
//!   the two traced states
//! - [`upwind_flux`]: advective flux `u q*` with the upwind state
//! - [`convective_rate`]: conservative or advective rate from face states
//! - [`flux_divergence`], [`flux_divergence_eb`]: rate from face fluxes

mod divergence;
mod upwind;

pub use divergence::{convective_rate, flux_divergence, flux_divergence_eb};
pub use upwind::{SMALL_VEL, burgers_state, upwind_flux, upwind_state};
