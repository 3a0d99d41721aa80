//! Piecewise-linear characteristic tracing to faces.
//!
//! The state reaching face `f` from the low side at `t + dt/2` is
//!
//! ```text
//! lo = q(f-1) + 1/2 (1 - u dt/dx) slope(f-1)
//! hi = q(f)   + 1/2 (-1 - u dt/dx) slope(f)
//! ```
//!
//! with `u` the advecting speed seen by the extrapolating cell.

use super::TraceContext;
use crate::boundary::{BcRec, BcType, ExtrapolationEdges, FacePair};
use crate::slopes::SlopeLimiter;
use crate::types::Axis;

/// Traced pair on face `f` normal to `axis` for component `n`.
///
/// `edges` are the extrapolation edges of `bc` along `axis`. `speeds` are
/// the advecting speeds seen from the low and high cell. On a face lying
/// on an external-value domain edge the exterior state is the ghost value;
/// for the normal velocity the interior state is too.
#[allow(clippy::too_many_arguments)]
pub fn plm_face<L: SlopeLimiter + ?Sized>(
    ctx: &TraceContext<'_>,
    limiter: &L,
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

    let lo_state = || q.at(c_lo, n) + 0.5 * (1.0 - speeds.0 * dtdx) * limiter.slope(q, c_lo, n, axis, edges);
    let hi_state = || q.at(f, n) + 0.5 * (-1.0 - speeds.1 * dtdx) * limiter.slope(q, f, n, axis, edges);

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
