//! Trait-based slope limiter abstraction.
//!
//! The face predictors are generic over [`SlopeLimiter`], so a limiter
//! can be chosen per call without touching the tracing code.
//!
//! # Example
//! ```
//! use godunov_rs::boundary::ExtrapolationEdges;
//! use godunov_rs::field::Array4;
//! use godunov_rs::slopes::{FourthOrderSlope, SlopeLimiter, SlopeOrder};
//! use godunov_rs::types::{Axis, IndexBox, SpaceDim};
//!
//! let bx = IndexBox::plane(8, 1).grow(SpaceDim::Two, 2);
//! let q = Array4::from_fn(bx, 1, |i, _, _, _| 0.5 * i as f64);
//! let edges = ExtrapolationEdges::none();
//!
//! let s = FourthOrderSlope.slope(&q, [3, 0, 0], 0, Axis::X, &edges);
//! assert!((s - 0.5).abs() < 1e-14);
//!
//! // Runtime selection through the enum
//! let limiter: &dyn SlopeLimiter = &SlopeOrder::Second;
//! assert_eq!(limiter.name(), "slope2");
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::high_order::slope4_extdir_at;
use super::regular::slope2_extdir_at;
use crate::boundary::ExtrapolationEdges;
use crate::field::Array4;
use crate::types::Axis;

// =============================================================================
// Slope Limiter Trait
// =============================================================================

/// A limited one-dimensional slope of a cell field.
///
/// Implementations must never amplify: the result is bounded by twice the
/// smaller one-sided difference and vanishes at a strict extremum.
pub trait SlopeLimiter: Send + Sync {
    /// Slope of component `n` at cell `p` along `axis`, in value per cell.
    ///
    /// `edges` selects the one-sided closures near prescribed or
    /// extrapolated domain edges; [`ExtrapolationEdges::none`] gives the
    /// plain interior stencil.
    fn slope(
        &self,
        q: &Array4,
        p: [i32; 3],
        n: usize,
        axis: Axis,
        edges: &ExtrapolationEdges,
    ) -> f64;

    /// Human-readable name for logging.
    fn name(&self) -> &'static str;

    /// Cells read on each side of `p`.
    fn stencil_radius(&self) -> i32;
}

// =============================================================================
// Concrete Limiters
// =============================================================================

/// Second-order monotonized-central slope on three points.
#[derive(Clone, Copy, Debug, Default)]
pub struct SecondOrderSlope;

impl SlopeLimiter for SecondOrderSlope {
    #[inline]
    fn slope(&self, q: &Array4, p: [i32; 3], n: usize, axis: Axis, edges: &ExtrapolationEdges) -> f64 {
        slope2_extdir_at(q, p, n, axis, edges)
    }

    fn name(&self) -> &'static str {
        "slope2"
    }

    fn stencil_radius(&self) -> i32 {
        1
    }
}

/// Fourth-order limited slope on five points.
#[derive(Clone, Copy, Debug, Default)]
pub struct FourthOrderSlope;

impl SlopeLimiter for FourthOrderSlope {
    #[inline]
    fn slope(&self, q: &Array4, p: [i32; 3], n: usize, axis: Axis, edges: &ExtrapolationEdges) -> f64 {
        slope4_extdir_at(q, p, n, axis, edges)
    }

    fn name(&self) -> &'static str {
        "slope4"
    }

    fn stencil_radius(&self) -> i32 {
        2
    }
}

// =============================================================================
// Slope Order Enum (Zero-Cost Dispatch)
// =============================================================================

/// Built-in limiters selectable at runtime without virtual dispatch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SlopeOrder {
    /// [`SecondOrderSlope`]
    Second,
    /// [`FourthOrderSlope`]
    #[default]
    Fourth,
}

impl SlopeLimiter for SlopeOrder {
    #[inline]
    fn slope(&self, q: &Array4, p: [i32; 3], n: usize, axis: Axis, edges: &ExtrapolationEdges) -> f64 {
        match self {
            SlopeOrder::Second => slope2_extdir_at(q, p, n, axis, edges),
            SlopeOrder::Fourth => slope4_extdir_at(q, p, n, axis, edges),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            SlopeOrder::Second => "slope2",
            SlopeOrder::Fourth => "slope4",
        }
    }

    fn stencil_radius(&self) -> i32 {
        match self {
            SlopeOrder::Second => 1,
            SlopeOrder::Fourth => 2,
        }
    }
}
