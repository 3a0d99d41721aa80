//! Error types for convection operations.

use thiserror::Error;

use crate::types::{Axis, IndexBox};

/// Call-contract violations detected before a kernel runs.
///
/// Numerical degeneracy (singular least-squares systems) is not an error;
/// it is reported through [`SlopeDiagnostics`](crate::diagnostics::SlopeDiagnostics).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConvectionError {
    /// Input data does not cover the stencil of the requested region.
    #[error("{what} covers {available} but the stencil needs {required}")]
    InsufficientHalo {
        what: &'static str,
        required: IndexBox,
        available: IndexBox,
    },

    /// Component counts of the inputs disagree.
    #[error("{what}: expected {expected} components, got {actual}")]
    ComponentMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Time step is not a positive finite number.
    #[error("invalid time step dt = {0}")]
    InvalidTimeStep(f64),

    /// Cell size is not a positive finite number.
    #[error("invalid cell size along {axis}: {value}")]
    InvalidCellSize { axis: Axis, value: f64 },

    /// The requested region is empty or lies outside the domain halo.
    #[error("invalid region {region}")]
    EmptyRegion { region: IndexBox },

    /// Invalid configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ConvectionError {
    /// Create an insufficient-halo error.
    pub fn insufficient_halo(what: &'static str, required: IndexBox, available: IndexBox) -> Self {
        Self::InsufficientHalo {
            what,
            required,
            available,
        }
    }
}

/// Check that `available` covers `required`.
pub(crate) fn require_box(
    what: &'static str,
    required: IndexBox,
    available: &IndexBox,
) -> Result<(), ConvectionError> {
    if available.contains_box(&required) {
        Ok(())
    } else {
        Err(ConvectionError::insufficient_halo(what, required, *available))
    }
}

/// Check a component count.
pub(crate) fn require_ncomp(
    what: &'static str,
    expected: usize,
    actual: usize,
) -> Result<(), ConvectionError> {
    if actual >= expected {
        Ok(())
    } else {
        Err(ConvectionError::ComponentMismatch {
            what,
            expected,
            actual,
        })
    }
}

/// Check the time step.
pub(crate) fn require_dt(dt: f64) -> Result<(), ConvectionError> {
    if dt.is_finite() && dt > 0.0 {
        Ok(())
    } else {
        Err(ConvectionError::InvalidTimeStep(dt))
    }
}
