//! Boundary rules for states on domain faces.

use super::{BcRec, BcType};
use crate::field::Array4;
use crate::mesh::ProblemDomain;
use crate::types::Axis;

/// The two states meeting at a face.
///
/// `lo` approaches the face from the low-index cell, `hi` from the
/// high-index cell.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct FacePair {
    /// State extrapolated from the low side (cell `f - 1`)
    pub lo: f64,
    /// State extrapolated from the high side (cell `f`)
    pub hi: f64,
}

impl FacePair {
    /// Create a pair.
    #[inline]
    pub const fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    /// Add the same increment to both states.
    #[inline]
    pub fn shifted(self, dlo: f64, dhi: f64) -> Self {
        Self::new(self.lo + dlo, self.hi + dhi)
    }
}

/// Enforce physical boundary conditions on the state pair of face `f`.
///
/// Faces at or below the low domain edge and at or above the high edge are
/// affected; interior faces pass through unchanged.
///
/// - `ExtDir`: the exterior state is the ghost value. For the normal
///   velocity the interior state takes it too.
/// - `FoExtrap`, `HoExtrap`, `ReflectEven`: the exterior state copies the
///   interior one.
/// - `ReflectOdd`: both states vanish.
#[allow(clippy::too_many_arguments)]
pub fn set_edge_bcs(
    f: [i32; 3],
    n: usize,
    axis: Axis,
    q: &Array4,
    states: FacePair,
    bc: &BcRec,
    domain: &ProblemDomain,
    is_velocity: bool,
) -> FacePair {
    let d = axis.index();
    let normal = is_velocity && n == d;
    let domlo = domain.lo(axis);
    let domhi = domain.hi(axis);
    let FacePair { mut lo, mut hi } = states;

    if f[d] <= domlo {
        match bc.lo(axis) {
            BcType::ExtDir => {
                let mut g = f;
                g[d] = domlo - 1;
                lo = q.at(g, n);
                if normal {
                    hi = lo;
                }
            }
            BcType::FoExtrap | BcType::HoExtrap | BcType::ReflectEven => lo = hi,
            BcType::ReflectOdd => {
                lo = 0.0;
                hi = 0.0;
            }
            BcType::Interior => {}
        }
    }

    if f[d] > domhi {
        match bc.hi(axis) {
            BcType::ExtDir => {
                let mut g = f;
                g[d] = domhi + 1;
                hi = q.at(g, n);
                if normal {
                    lo = hi;
                }
            }
            BcType::FoExtrap | BcType::HoExtrap | BcType::ReflectEven => hi = lo,
            BcType::ReflectOdd => {
                lo = 0.0;
                hi = 0.0;
            }
            BcType::Interior => {}
        }
    }

    FacePair { lo, hi }
}

/// Prevent an extrapolated outflow edge from admitting inflow of the normal
/// velocity, then make the edge states single-valued.
///
/// Only applies on the face exactly at an extrapolating edge.
#[allow(clippy::too_many_arguments)]
pub fn clip_outflow(
    f: [i32; 3],
    n: usize,
    axis: Axis,
    states: FacePair,
    normal_vel: f64,
    bc: &BcRec,
    domain: &ProblemDomain,
    is_velocity: bool,
) -> FacePair {
    let d = axis.index();
    let normal = is_velocity && n == d;
    let FacePair { mut lo, mut hi } = states;

    if f[d] == domain.lo(axis) && matches!(bc.lo(axis), BcType::FoExtrap | BcType::HoExtrap) {
        if normal && normal_vel >= 0.0 {
            hi = hi.min(0.0);
        }
        lo = hi;
    }
    if f[d] == domain.hi(axis) + 1 && matches!(bc.hi(axis), BcType::FoExtrap | BcType::HoExtrap) {
        if normal && normal_vel <= 0.0 {
            lo = lo.max(0.0);
        }
        hi = lo;
    }
    FacePair { lo, hi }
}
