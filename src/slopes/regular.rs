//! Second-order monotonized-central slopes.
//!
//! For a three-point stencil `[q-1, q0, q+1]`:
//!
//! ```text
//! dl = 2 (q0 - q-1)      dr = 2 (q+1 - q0)      dc = (q+1 - q-1) / 2
//! slope = sign(dc) * min(|dl|, |dc|, |dr|)   if dl * dr > 0
//!       = 0                                   otherwise
//! ```
//!
//! At a domain edge with a prescribed or extrapolated ghost value the ghost
//! sits on the face, half a cell from the boundary cell center, and `dc`
//! is replaced by the one-sided quadratic
//! `(q+1 + 3 q0 - 4 q-1) / 3` (low edge) or `(4 q+1 - 3 q0 - q-1) / 3`
//! (high edge).

use crate::boundary::{EdgeProximity, ExtrapolationEdges};
use crate::field::Array4;
use crate::types::Axis;

/// Clip `dc` to the one-sided differences; zero when they disagree in sign.
#[inline]
pub(crate) fn limit_centered(dl: f64, dc: f64, dr: f64) -> f64 {
    let slope = dl.abs().min(dc.abs()).min(dr.abs());
    let slope = if dr * dl > 0.0 { slope } else { 0.0 };
    if dc > 0.0 { slope } else { -slope }
}

/// Limited slope from a three-point stencil.
#[inline]
pub fn slope2([qm, q0, qp]: [f64; 3]) -> f64 {
    limit_centered(2.0 * (q0 - qm), 0.5 * (qp - qm), 2.0 * (qp - q0))
}

/// Limited slope with the one-sided centered difference at a domain edge.
///
/// Only [`EdgeProximity::OnEdge`] changes the result; the low edge wins if
/// a single-cell domain is on both.
#[inline]
pub fn slope2_extdir([qm, q0, qp]: [f64; 3], lo: EdgeProximity, hi: EdgeProximity) -> f64 {
    let dc = if lo == EdgeProximity::OnEdge {
        (qp + 3.0 * q0 - 4.0 * qm) / 3.0
    } else if hi == EdgeProximity::OnEdge {
        (4.0 * qp - 3.0 * q0 - qm) / 3.0
    } else {
        0.5 * (qp - qm)
    };
    limit_centered(2.0 * (q0 - qm), dc, 2.0 * (qp - q0))
}

/// [`slope2`] of component `n` at cell `p` along `axis`.
#[inline]
pub fn slope2_at(q: &Array4, p: [i32; 3], n: usize, axis: Axis) -> f64 {
    slope2(q.stencil3(p, axis, n))
}

/// [`slope2_extdir`] of component `n` at cell `p` along `axis`.
#[inline]
pub fn slope2_extdir_at(
    q: &Array4,
    p: [i32; 3],
    n: usize,
    axis: Axis,
    edges: &ExtrapolationEdges,
) -> f64 {
    let i = p[axis.index()];
    slope2_extdir(
        q.stencil3(p, axis, n),
        edges.lo_proximity(i),
        edges.hi_proximity(i),
    )
}
