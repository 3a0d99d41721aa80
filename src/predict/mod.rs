//! Half-time face states by characteristic tracing.
//!
//! For every face of a patch the predictor produces the pair of states
//! reaching the face from the low and the high cell at `t + dt/2`:
//!
//! | Reconstruction | Profile in a cell | Stencil halo |
//! |----------------|-------------------|--------------|
//! | [`Reconstruction::Plm`] | linear, limited slope | 2 or 3 cells |
//! | [`Reconstruction::Ppm`] | monotonized parabola | 3 cells |
//!
//! The traced arrays cover the faces of the patch grown by one cell in the
//! tangential directions, which the transverse corrections read.

mod plm;
mod ppm;

pub use plm::plm_face;
pub use ppm::{ppm_face, ppm_profile, ppm_trace_high_edge, ppm_trace_low_edge};

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::boundary::{BcRec, ExtrapolationEdges, FacePair, extrapolation_edges};
use crate::error::{ConvectionError, require_box, require_dt, require_ncomp};
use crate::field::{Array4, FaceData};
use crate::mesh::ProblemDomain;
use crate::slopes::{SlopeLimiter, SlopeOrder};
use crate::types::{Axis, IndexBox};

/// Reconstruction used inside each cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Reconstruction {
    /// Piecewise linear with a limited slope
    #[default]
    Plm,
    /// Piecewise parabolic (Colella-Woodward)
    Ppm,
}

impl Reconstruction {
    /// Ghost cells of the traced field needed around a patch.
    pub fn stencil_halo(self, order: SlopeOrder) -> i32 {
        match self {
            Reconstruction::Plm => 1 + order.stencil_radius(),
            Reconstruction::Ppm => 3,
        }
    }
}

impl fmt::Display for Reconstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reconstruction::Plm => f.write_str("plm"),
            Reconstruction::Ppm => f.write_str("ppm"),
        }
    }
}

/// The field being traced and the fixed parameters of one prediction.
#[derive(Clone, Copy, Debug)]
pub struct TraceContext<'a> {
    /// Cell field with ghost cells
    pub q: &'a Array4,
    pub domain: &'a ProblemDomain,
    pub dt: f64,
    /// `q` holds velocity components, component `d` along axis `d`
    pub is_velocity: bool,
}

impl<'a> TraceContext<'a> {
    pub fn new(q: &'a Array4, domain: &'a ProblemDomain, dt: f64, is_velocity: bool) -> Self {
        Self {
            q,
            domain,
            dt,
            is_velocity,
        }
    }
}

/// Where the characteristic speed of the trace comes from.
#[derive(Clone, Copy, Debug)]
pub enum AdvectionSpeed<'a> {
    /// Face-normal MAC velocity, the same for both sides of a face
    Mac(&'a FaceData),
    /// Cell-centered velocity of the extrapolating cell, component `d`
    /// for axis `d`
    Cell(&'a Array4),
}

impl AdvectionSpeed<'_> {
    /// Speeds seen from the low and high cell of face `f`.
    #[inline]
    pub fn at_face(&self, axis: Axis, f: [i32; 3]) -> (f64, f64) {
        match self {
            AdvectionSpeed::Mac(umac) => {
                let u = umac[axis].at(f, 0);
                (u, u)
            }
            AdvectionSpeed::Cell(vel) => {
                let d = axis.index();
                (vel.at(axis.shift(f, -1), d), vel.at(f, d))
            }
        }
    }

    fn validate(&self, region: &IndexBox, domain: &ProblemDomain) -> Result<(), ConvectionError> {
        let dim = domain.dim;
        match self {
            AdvectionSpeed::Mac(umac) => {
                for &axis in dim.axes() {
                    let needed = region.surrounding_nodes(axis).grow_transverse(dim, axis, 1);
                    require_box("advecting velocity", needed, umac[axis].index_box())?;
                }
                Ok(())
            }
            AdvectionSpeed::Cell(vel) => {
                require_ncomp("cell velocity", dim.count(), vel.ncomp())?;
                require_box("cell velocity", region.grow(dim, 1), vel.index_box())
            }
        }
    }
}

/// Low-side and high-side face states of every component.
#[derive(Clone, Debug, PartialEq)]
pub struct FaceTraces {
    /// State arriving from the low cell (`Ip` in the usual notation)
    pub lo: FaceData,
    /// State arriving from the high cell (`Im`)
    pub hi: FaceData,
}

impl FaceTraces {
    /// Pair stored on face `f` normal to `axis`.
    #[inline]
    pub fn pair(&self, axis: Axis, f: [i32; 3], n: usize) -> FacePair {
        FacePair::new(self.lo[axis].at(f, n), self.hi[axis].at(f, n))
    }
}

/// Traced pair on one face with the selected reconstruction.
#[allow(clippy::too_many_arguments)]
pub fn trace_face(
    ctx: &TraceContext<'_>,
    reconstruction: Reconstruction,
    limiter: SlopeOrder,
    axis: Axis,
    f: [i32; 3],
    n: usize,
    bc: &BcRec,
    edges: &ExtrapolationEdges,
    speeds: (f64, f64),
) -> FacePair {
    match reconstruction {
        Reconstruction::Plm => plm_face(ctx, &limiter, axis, f, n, bc, edges, speeds),
        Reconstruction::Ppm => ppm_face(ctx, axis, f, n, bc, edges, speeds),
    }
}

/// Trace components `0..ncomp` to every face of `region`, grown by one
/// cell tangentially.
///
/// # Arguments
/// * `ctx` - Traced field, domain, time step
/// * `reconstruction` - PLM or PPM
/// * `limiter` - Slope used by PLM
/// * `speed` - Characteristic speed source
/// * `bcs` - Boundary codes, one per component
/// * `ncomp` - Number of components to trace
/// * `region` - Cell region whose faces are traced
///
/// # Errors
/// Returns an error if `ctx.q` or `speed` does not cover the stencil, if
/// `bcs` is short, or if `dt` is not positive.
pub fn trace_faces(
    ctx: &TraceContext<'_>,
    reconstruction: Reconstruction,
    limiter: SlopeOrder,
    speed: &AdvectionSpeed<'_>,
    bcs: &[BcRec],
    ncomp: usize,
    region: &IndexBox,
) -> Result<FaceTraces, ConvectionError> {
    let dim = ctx.domain.dim;
    require_dt(ctx.dt)?;
    require_ncomp("boundary codes", ncomp, bcs.len())?;
    require_ncomp("traced field", ncomp, ctx.q.ncomp())?;
    let halo = reconstruction.stencil_halo(limiter);
    require_box("traced field", region.grow(dim, halo), ctx.q.index_box())?;
    speed.validate(region, ctx.domain)?;

    log::debug!(
        "tracing {ncomp} components on {region} with {reconstruction}/{}",
        limiter.name()
    );

    let edges: Vec<_> = bcs[..ncomp]
        .iter()
        .map(|bc| extrapolation_edges(bc, ctx.domain))
        .collect();
    let pair = |axis: Axis, f: [i32; 3], n: usize| {
        let speeds = speed.at_face(axis, f);
        let edges = &edges[n][axis.index()];
        trace_face(ctx, reconstruction, limiter, axis, f, n, &bcs[n], edges, speeds)
    };
    let lo = FaceData::from_fn(region, dim, ncomp, 1, |axis, i, j, k, n| pair(axis, [i, j, k], n).lo);
    let hi = FaceData::from_fn(region, dim, ncomp, 1, |axis, i, j, k, n| pair(axis, [i, j, k], n).hi);
    Ok(FaceTraces { lo, hi })
}
