//! Classification of stencil points against the physical boundary.

use super::BcRec;
use super::BcType;
use crate::mesh::ProblemDomain;
use crate::types::Axis;

/// How one component behaves at the two domain edges of one axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct EdgeClass {
    /// Low edge has a prescribed or high-order-extrapolated ghost value
    pub extrapolate_lo: bool,
    /// High edge has a prescribed or high-order-extrapolated ghost value
    pub extrapolate_hi: bool,
    /// The component is the velocity normal to faces of this axis
    pub is_normal_velocity: bool,
}

/// Classify component `n` on `axis` from its edge codes.
///
/// `is_normal_velocity` holds only when the traced field is a velocity and
/// `n` is the component along `axis`; tangential components at the same
/// edge follow the ordinary path.
pub fn classify(lo: BcType, hi: BcType, n: usize, axis: Axis, is_velocity: bool) -> EdgeClass {
    EdgeClass {
        extrapolate_lo: lo.is_extdir_or_ho(),
        extrapolate_hi: hi.is_extdir_or_ho(),
        is_normal_velocity: is_velocity && n == axis.index(),
    }
}

/// Distance of a cell from one domain edge, as far as stencils care.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeProximity {
    /// Ordinary interior stencil
    Far,
    /// The cell adjacent to the edge
    OnEdge,
    /// One cell further inside
    OneInside,
}

/// Where one-sided slope formulas replace centered ones along an axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExtrapolationEdges {
    /// Use one-sided formulas at the low edge
    pub lo: bool,
    /// Use one-sided formulas at the high edge
    pub hi: bool,
    /// First cell inside the domain
    pub domlo: i32,
    /// Last cell inside the domain
    pub domhi: i32,
}

impl ExtrapolationEdges {
    /// Edges for component `bc` on `axis` of `domain`.
    pub fn new(bc: &BcRec, axis: Axis, domain: &ProblemDomain) -> Self {
        Self::from_class(&classify(bc.lo(axis), bc.hi(axis), 0, axis, false), axis, domain)
    }

    /// Edges from an existing classification.
    pub fn from_class(class: &EdgeClass, axis: Axis, domain: &ProblemDomain) -> Self {
        Self {
            lo: class.extrapolate_lo,
            hi: class.extrapolate_hi,
            domlo: domain.lo(axis),
            domhi: domain.hi(axis),
        }
    }

    /// No one-sided corrections anywhere (periodic or interior patch).
    pub fn none() -> Self {
        Self {
            lo: false,
            hi: false,
            domlo: i32::MIN,
            domhi: i32::MAX,
        }
    }

    /// Position of cell index `i` relative to the low edge.
    #[inline]
    pub fn lo_proximity(&self, i: i32) -> EdgeProximity {
        if !self.lo {
            EdgeProximity::Far
        } else if i == self.domlo {
            EdgeProximity::OnEdge
        } else if i == self.domlo + 1 {
            EdgeProximity::OneInside
        } else {
            EdgeProximity::Far
        }
    }

    /// Position of cell index `i` relative to the high edge.
    #[inline]
    pub fn hi_proximity(&self, i: i32) -> EdgeProximity {
        if !self.hi {
            EdgeProximity::Far
        } else if i == self.domhi {
            EdgeProximity::OnEdge
        } else if i == self.domhi - 1 {
            EdgeProximity::OneInside
        } else {
            EdgeProximity::Far
        }
    }
}

/// Per-axis edges for component `bc`, indexed by [`Axis::index`].
pub fn extrapolation_edges(bc: &BcRec, domain: &ProblemDomain) -> [ExtrapolationEdges; 3] {
    let mut edges = [ExtrapolationEdges::none(); 3];
    for &axis in domain.dim.axes() {
        edges[axis.index()] = ExtrapolationEdges::new(bc, axis, domain);
    }
    edges
}
