//! Upwind resolution of a face state pair.
//!
//! For transport by a given normal velocity `u` the face state is the one
//! carried toward the face:
//! q* = lo if u > 0 (information flows from the low cell)
//! q* = hi if u < 0 (information flows from the high cell)
//!
//! When `u` itself is the transported quantity (velocity prediction) the
//! Riemann problem is Burgers': the face takes `lo` or `hi` according to
//! the sign of their sum, and zero inside a rarefaction fan.

use crate::boundary::FacePair;

/// Speeds below this magnitude are treated as zero.
pub const SMALL_VEL: f64 = 1e-8;

/// Upwind face state for advection by `u`.
///
/// # Arguments
/// * `states` - States arriving from the low and high cell
/// * `u` - Normal velocity at the face
///
/// # Returns
/// `lo` for `u >= 0`, `hi` for `u < 0`, and the average of the two when
/// `|u| < SMALL_VEL`.
#[inline]
pub fn upwind_state(states: FacePair, u: f64) -> f64 {
    let FacePair { lo, hi } = states;
    if u.abs() < SMALL_VEL {
        0.5 * (lo + hi)
    } else if u >= 0.0 {
        lo
    } else {
        hi
    }
}

/// Burgers Riemann solution for the normal velocity at a face.
///
/// Zero inside a rarefaction (`lo <= 0 <= hi`) or when the states cancel;
/// otherwise the state on the side the shock or wave comes from.
#[inline]
pub fn burgers_state(states: FacePair) -> f64 {
    let FacePair { lo, hi } = states;
    let sum = lo + hi;
    let upwind = if sum >= 0.0 { lo } else { hi };
    if (lo <= 0.0 && hi >= 0.0) || sum.abs() < SMALL_VEL {
        0.0
    } else {
        upwind
    }
}

/// Upwind advective flux `u q*` at a face.
#[inline]
pub fn upwind_flux(states: FacePair, u: f64) -> f64 {
    u * upwind_state(states, u)
}
