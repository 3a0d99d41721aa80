//! Scheme options for the Godunov convection operator.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::predict::Reconstruction;
use crate::slopes::SlopeOrder;

/// Options of one Godunov prediction, fixed for a whole level.
///
/// # Example
/// ```
/// use godunov_rs::config::GodunovConfig;
/// use godunov_rs::predict::Reconstruction;
///
/// let config = GodunovConfig::new()
///     .with_reconstruction(Reconstruction::Ppm)
///     .with_forces_in_trans(true);
/// assert!(config.use_forces_in_trans);
/// assert!(!config.is_velocity);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GodunovConfig {
    /// Profile inside each cell
    pub reconstruction: Reconstruction,
    /// Limiter used by the linear reconstruction
    pub slope_order: SlopeOrder,
    /// Add half a step of forcing to the normal traces before the
    /// transverse corrections, instead of to the final edge states
    pub use_forces_in_trans: bool,
    /// The advected field is the velocity (component `d` along axis `d`)
    pub is_velocity: bool,
}

impl Default for GodunovConfig {
    fn default() -> Self {
        Self {
            reconstruction: Reconstruction::Plm,
            slope_order: SlopeOrder::Fourth,
            use_forces_in_trans: false,
            is_velocity: false,
        }
    }
}

impl GodunovConfig {
    /// Linear reconstruction with fourth-order slopes, forces at the end.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the reconstruction.
    pub fn with_reconstruction(mut self, reconstruction: Reconstruction) -> Self {
        self.reconstruction = reconstruction;
        self
    }

    /// Set the limiter used by linear reconstruction.
    pub fn with_slope_order(mut self, order: SlopeOrder) -> Self {
        self.slope_order = order;
        self
    }

    /// Choose where the forcing enters.
    pub fn with_forces_in_trans(mut self, use_forces_in_trans: bool) -> Self {
        self.use_forces_in_trans = use_forces_in_trans;
        self
    }

    /// Mark the advected field as velocity.
    pub fn with_velocity(mut self, is_velocity: bool) -> Self {
        self.is_velocity = is_velocity;
        self
    }

    /// Ghost cells of the advected field required around a patch.
    pub fn required_halo(&self) -> i32 {
        self.reconstruction.stencil_halo(self.slope_order)
    }
}
