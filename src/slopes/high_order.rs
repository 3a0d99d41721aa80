//! Fourth-order limited slopes on a five-point stencil.
//!
//! Two one-sided limited differences `dfm` (over cells -2..0) and `dfp`
//! (over 0..2) are blended with the centered difference,
//!
//! ```text
//! dtemp = 4/3 dc - 1/6 (dfp + dfm)
//! ```
//!
//! and the result is clipped to the centered monotonicity bound
//! `dlim = 2 min(|q0 - q-1|, |q+1 - q0|)`.
//!
//! Next to a prescribed or extrapolated edge the boundary cell uses the
//! one-sided cubic `-16/15 q-1 + 1/2 q0 + 2/3 q+1 - 1/10 q+2` (ghost on the
//! face), and the cell one further inside replaces its boundary-side
//! one-sided difference by the same formula evaluated on the boundary cell.

use crate::boundary::{EdgeProximity, ExtrapolationEdges};
use crate::field::Array4;
use crate::types::Axis;

const C_GHOST: f64 = 16.0 / 15.0;
const C_SELF: f64 = 0.5;
const C_NEXT: f64 = 2.0 / 3.0;
const C_FAR: f64 = 0.1;

/// Centered difference, its sign, and the monotonicity bound over three
/// consecutive values.
#[inline]
fn centered(a: f64, b: f64, c: f64) -> (f64, f64, f64) {
    let dlft = b - a;
    let drgt = c - b;
    let dcen = 0.5 * (dlft + drgt);
    let dsgn = 1.0_f64.copysign(dcen);
    let dlim = if dlft * drgt >= 0.0 {
        2.0 * dlft.abs().min(drgt.abs())
    } else {
        0.0
    };
    (dcen, dsgn, dlim)
}

/// Limited centered difference over three consecutive values.
#[inline]
fn limited(a: f64, b: f64, c: f64) -> f64 {
    let (dcen, dsgn, dlim) = centered(a, b, c);
    dsgn * dlim.min(dcen.abs())
}

/// Bound built from undivided one-sided differences `dl`, `dr`.
#[inline]
fn one_sided_bound(dl: f64, dr: f64) -> f64 {
    if dl * dr >= 0.0 {
        dl.abs().min(dr.abs())
    } else {
        0.0
    }
}

/// One-sided cubic slope at a low-edge cell with stencil `[g, q0, q1, q2]`.
#[inline]
fn edge_slope_lo(g: f64, q0: f64, q1: f64, q2: f64) -> f64 {
    -C_GHOST * g + C_SELF * q0 + C_NEXT * q1 - C_FAR * q2
}

/// One-sided cubic slope at a high-edge cell with stencil `[q-2, q-1, q0, g]`.
#[inline]
fn edge_slope_hi(qm2: f64, qm1: f64, q0: f64, g: f64) -> f64 {
    C_GHOST * g - C_SELF * q0 - C_NEXT * qm1 + C_FAR * qm2
}

/// Fourth-order limited slope from a five-point stencil.
#[inline]
pub fn slope4(s: [f64; 5]) -> f64 {
    let dfm = limited(s[0], s[1], s[2]);
    let dfp = limited(s[2], s[3], s[4]);
    let (dcen, dsgn, dlim) = centered(s[1], s[2], s[3]);
    let dtemp = 4.0 / 3.0 * dcen - 1.0 / 6.0 * (dfp + dfm);
    dsgn * dlim.min(dtemp.abs())
}

/// Fourth-order limited slope with one-sided edge closures.
pub fn slope4_extdir(s: [f64; 5], lo: EdgeProximity, hi: EdgeProximity) -> f64 {
    let mut dfm = limited(s[0], s[1], s[2]);
    let mut dfp = limited(s[2], s[3], s[4]);
    let (dcen, mut dsgn, mut dlim) = centered(s[1], s[2], s[3]);
    let mut dtemp = 4.0 / 3.0 * dcen - 1.0 / 6.0 * (dfp + dfm);

    match lo {
        EdgeProximity::OnEdge => {
            dtemp = edge_slope_lo(s[1], s[2], s[3], s[4]);
            dlim = one_sided_bound(2.0 * (s[2] - s[1]), 2.0 * (s[3] - s[2]));
            dsgn = 1.0_f64.copysign(dtemp);
        }
        EdgeProximity::OneInside => {
            let e = edge_slope_lo(s[0], s[1], s[2], s[3]);
            let bound = one_sided_bound(2.0 * (s[1] - s[0]), 2.0 * (s[2] - s[1]));
            dfm = 1.0_f64.copysign(e) * bound.min(e.abs());
            dtemp = 4.0 / 3.0 * dcen - 1.0 / 6.0 * (dfp + dfm);
        }
        EdgeProximity::Far => {}
    }

    match hi {
        EdgeProximity::OnEdge => {
            dtemp = edge_slope_hi(s[0], s[1], s[2], s[3]);
            dlim = one_sided_bound(2.0 * (s[2] - s[1]), 2.0 * (s[3] - s[2]));
            dsgn = 1.0_f64.copysign(dtemp);
        }
        EdgeProximity::OneInside => {
            let e = edge_slope_hi(s[1], s[2], s[3], s[4]);
            let bound = one_sided_bound(2.0 * (s[3] - s[2]), 2.0 * (s[4] - s[3]));
            dfp = 1.0_f64.copysign(e) * bound.min(e.abs());
            dtemp = 4.0 / 3.0 * dcen - 1.0 / 6.0 * (dfp + dfm);
        }
        EdgeProximity::Far => {}
    }

    dsgn * dlim.min(dtemp.abs())
}

/// [`slope4`] of component `n` at cell `p` along `axis`.
#[inline]
pub fn slope4_at(q: &Array4, p: [i32; 3], n: usize, axis: Axis) -> f64 {
    slope4(q.stencil5(p, axis, n))
}

/// [`slope4_extdir`] of component `n` at cell `p` along `axis`.
#[inline]
pub fn slope4_extdir_at(
    q: &Array4,
    p: [i32; 3],
    n: usize,
    axis: Axis,
    edges: &ExtrapolationEdges,
) -> f64 {
    let i = p[axis.index()];
    slope4_extdir(
        q.stencil5(p, axis, n),
        edges.lo_proximity(i),
        edges.hi_proximity(i),
    )
}
