//! Piecewise-parabolic characteristic tracing to faces.
//!
//! Each cell carries a parabola through its average with edge values
//! `sm` (low edge) and `sp` (high edge), built from fourth-order edge
//! interpolation and monotonized after Colella and Woodward. The face
//! state is the parabola averaged over the domain of dependence
//! `sigma = |u| dt / dx` upstream of the face.

use super::TraceContext;
use crate::boundary::{BcRec, BcType, EdgeProximity, ExtrapolationEdges, FacePair};
use crate::flux::SMALL_VEL;
use crate::types::Axis;

/// Clamp `v` between `a` and `b` in either order.
#[inline]
fn clamp_between(v: f64, a: f64, b: f64) -> f64 {
    v.max(a.min(b)).min(a.max(b))
}

/// Fourth-order edge value between `b` and `c` from `[a, b, c, d]`,
/// bounded by the two adjacent cell values.
#[inline]
fn interior_edge(a: f64, b: f64, c: f64, d: f64) -> f64 {
    let e = 7.0 / 12.0 * (b + c) - 1.0 / 12.0 * (a + d);
    clamp_between(e, b, c)
}

/// Edge value on the first interior face from `[ghost, q0, q1, q2]`, with
/// the ghost located on the domain face.
#[inline]
fn boundary_edge(g: f64, q0: f64, q1: f64, q2: f64) -> f64 {
    let e = -0.2 * g + 0.75 * q0 + 0.5 * q1 - 0.05 * q2;
    clamp_between(e, q0, q1)
}

/// Colella-Woodward monotonization of a parabola `(sm, s0, sp)`.
#[inline]
fn monotonize(sm: f64, s0: f64, sp: f64) -> (f64, f64) {
    if (sp - s0) * (s0 - sm) <= 0.0 {
        (s0, s0)
    } else if (sp - s0).abs() >= 2.0 * (sm - s0).abs() {
        (sm, 3.0 * s0 - 2.0 * sm)
    } else if (sm - s0).abs() >= 2.0 * (sp - s0).abs() {
        (3.0 * s0 - 2.0 * sp, sp)
    } else {
        (sm, sp)
    }
}

/// Edge values `(sm, sp)` of the parabola in the center cell of `s`.
///
/// Next to a prescribed or extrapolated edge, the cell on the edge takes
/// the ghost value on its exterior edge and a one-sided cubic on the other,
/// and the cell one further inside uses the same cubic for its boundary-side
/// edge before being monotonized again.
pub fn ppm_profile(s: [f64; 5], lo: EdgeProximity, hi: EdgeProximity) -> (f64, f64) {
    let [sm2, sm1, s0, sp1, sp2] = s;
    let (mut sm, mut sp) = monotonize(
        interior_edge(sm2, sm1, s0, sp1),
        s0,
        interior_edge(sm1, s0, sp1, sp2),
    );

    match lo {
        EdgeProximity::OnEdge => {
            sm = sm1;
            sp = boundary_edge(sm1, s0, sp1, sp2);
        }
        EdgeProximity::OneInside => {
            sm = boundary_edge(sm2, sm1, s0, sp1);
            (sm, sp) = monotonize(sm, s0, sp);
        }
        EdgeProximity::Far => {}
    }

    match hi {
        EdgeProximity::OnEdge => {
            sp = sp1;
            sm = boundary_edge(sp1, s0, sm1, sm2);
        }
        EdgeProximity::OneInside => {
            sp = boundary_edge(sp2, sp1, s0, sm1);
            (sm, sp) = monotonize(sm, s0, sp);
        }
        EdgeProximity::Far => {}
    }

    (sm, sp)
}

/// Average of the parabola over the last `sigma` of the cell, for the
/// state leaving through the high edge.
#[inline]
pub fn ppm_trace_high_edge(s0: f64, sm: f64, sp: f64, u: f64, dtdx: f64) -> f64 {
    if u > SMALL_VEL {
        let sigma = u.abs() * dtdx;
        let s6 = 6.0 * s0 - 3.0 * (sm + sp);
        sp - 0.5 * sigma * ((sp - sm) - (1.0 - 2.0 / 3.0 * sigma) * s6)
    } else {
        s0
    }
}

/// Average of the parabola over the first `sigma` of the cell, for the
/// state leaving through the low edge.
#[inline]
pub fn ppm_trace_low_edge(s0: f64, sm: f64, sp: f64, u: f64, dtdx: f64) -> f64 {
    if u < -SMALL_VEL {
        let sigma = u.abs() * dtdx;
        let s6 = 6.0 * s0 - 3.0 * (sm + sp);
        sm + 0.5 * sigma * ((sp - sm) + (1.0 - 2.0 / 3.0 * sigma) * s6)
    } else {
        s0
    }
}

/// Traced pair on face `f` normal to `axis` for component `n`, with the
/// same external-value pins as [`plm_face`](super::plm_face).
pub fn ppm_face(
    ctx: &TraceContext<'_>,
    axis: Axis,
    f: [i32; 3],
    n: usize,
    bc: &BcRec,
    edges: &ExtrapolationEdges,
    speeds: (f64, f64),
) -> FacePair {
    let q = ctx.q;
    let d = axis.index();
    let dtdx = ctx.dt / ctx.domain.dx(axis);
    let normal = ctx.is_velocity && n == d;
    let c_lo = axis.shift(f, -1);

    let profile = |c: [i32; 3]| {
        let i = c[d];
        ppm_profile(q.stencil5(c, axis, n), edges.lo_proximity(i), edges.hi_proximity(i))
    };
    let lo_state = || {
        let (sm, sp) = profile(c_lo);
        ppm_trace_high_edge(q.at(c_lo, n), sm, sp, speeds.0, dtdx)
    };
    let hi_state = || {
        let (sm, sp) = profile(f);
        ppm_trace_low_edge(q.at(f, n), sm, sp, speeds.1, dtdx)
    };

    let i = f[d];
    if i == ctx.domain.lo(axis) && bc.lo(axis) == BcType::ExtDir {
        let ghost = q.at(c_lo, n);
        let hi = if normal { ghost } else { hi_state() };
        FacePair::new(ghost, hi)
    } else if i == ctx.domain.hi(axis) + 1 && bc.hi(axis) == BcType::ExtDir {
        let ghost = q.at(f, n);
        let lo = if normal { ghost } else { lo_state() };
        FacePair::new(lo, ghost)
    } else {
        FacePair::new(lo_state(), hi_state())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundary::EdgeProximity::{Far, OnEdge, OneInside};
    use crate::field::Array4;
    use crate::mesh::ProblemDomain;
    use crate::types::SpaceDim;

    const TOL: f64 = 1e-13;

    #[test]
    fn test_profile_linear_exact() {
        // q = 2x: edges at -/+ 1/2 of the center value
        let s = [-4.0, -2.0, 0.0, 2.0, 4.0];
        let (sm, sp) = ppm_profile(s, Far, Far);
        assert!((sm + 1.0).abs() < TOL);
        assert!((sp - 1.0).abs() < TOL);
    }

    #[test]
    fn test_profile_flattens_extremum() {
        let (sm, sp) = ppm_profile([0.0, 1.0, 3.0, 1.0, 0.0], Far, Far);
        assert_eq!((sm, sp), (3.0, 3.0));
    }

    #[test]
    fn test_monotonize_steep_side() {
        // sp too far from s0 compared to sm: pulled back to 3 s0 - 2 sm
        let (sm, sp) = monotonize(0.9, 1.0, 1.5);
        assert!((sm - 0.9).abs() < TOL);
        assert!((sp - 1.2).abs() < TOL);
        let (sm, sp) = monotonize(0.0, 1.0, 1.1);
        assert!((sm - 0.8).abs() < TOL);
        assert!((sp - 1.1).abs() < TOL);
    }

    #[test]
    fn test_profile_edge_closures_linear() {
        // ghost on the low face (x = -1/2), boundary cell at x = 0
        let s = [0.0, -0.5, 0.0, 1.0, 2.0];
        let (sm, sp) = ppm_profile(s, OnEdge, Far);
        assert_eq!(sm, -0.5);
        assert!((sp - 0.5).abs() < TOL);

        // one cell further inside: ghost at x = -3/2, boundary cell at x = -1
        let s = [-1.5, -1.0, 0.0, 1.0, 2.0];
        let (sm, sp) = ppm_profile(s, OneInside, Far);
        assert!((sm + 0.5).abs() < TOL);
        assert!((sp - 0.5).abs() < TOL);

        // mirrored on the high edge
        let s = [-2.0, -1.0, 0.0, 0.5, 0.0];
        let (sm, sp) = ppm_profile(s, Far, OnEdge);
        assert_eq!(sp, 0.5);
        assert!((sm + 0.5).abs() < TOL);
    }

    #[test]
    fn test_trace_limits() {
        let (s0, sm, sp) = (1.0, 0.5, 1.5);
        // vanishing CFL gives the edge value, zero speed gives the average
        assert!((ppm_trace_high_edge(s0, sm, sp, 1e-6, 1e-6) - sp).abs() < 1e-9);
        assert_eq!(ppm_trace_high_edge(s0, sm, sp, 0.0, 0.5), s0);
        assert_eq!(ppm_trace_low_edge(s0, sm, sp, 0.0, 0.5), s0);
        // full CFL on a linear profile averages the whole cell
        assert!((ppm_trace_high_edge(s0, sm, sp, 1.0, 1.0) - s0).abs() < TOL);
        assert!((ppm_trace_low_edge(s0, sm, sp, -1.0, 1.0) - s0).abs() < TOL);
    }

    #[test]
    fn test_face_linear_matches_plm() {
        use crate::predict::plm_face;
        use crate::slopes::SecondOrderSlope;

        let domain = ProblemDomain::uniform_2d(8, 2, 1.0);
        let q = Array4::from_fn(domain.bx.grow(SpaceDim::Two, 3), 1, |i, _, _, _| 0.5 * i as f64);
        let ctx = TraceContext::new(&q, &domain, 0.4, false);
        let bc = BcRec::periodic();
        let edges = ExtrapolationEdges::new(&bc, Axis::X, &domain);
        for u in [1.0, -1.0] {
            let a = ppm_face(&ctx, Axis::X, [4, 0, 0], 0, &bc, &edges, (u, u));
            let b = plm_face(&ctx, &SecondOrderSlope, Axis::X, [4, 0, 0], 0, &bc, &edges, (u, u));
            // upwind side agrees with the linear trace, downwind side is the cell average
            if u > 0.0 {
                assert!((a.lo - b.lo).abs() < TOL);
                assert_eq!(a.hi, q.get(4, 0, 0, 0));
            } else {
                assert!((a.hi - b.hi).abs() < TOL);
                assert_eq!(a.lo, q.get(3, 0, 0, 0));
            }
        }
    }
}
