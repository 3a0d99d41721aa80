//! Boundary-condition codes per component and domain edge.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::{Axis, AxisSides};

/// Physical boundary condition of one component on one domain edge.
///
/// The ghost cells are filled by the caller according to this code; the
/// kernels only need it to decide how far they may trust the ghost values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BcType {
    /// Periodic or coarse-fine edge: ghost cells hold valid interior data
    #[default]
    Interior,
    /// External Dirichlet value stored in the first ghost cell (inflow)
    ExtDir,
    /// First-order extrapolation (outflow)
    FoExtrap,
    /// High-order extrapolation from interior data
    HoExtrap,
    /// Even reflection (symmetry plane, tangential velocity at a wall)
    ReflectEven,
    /// Odd reflection (normal velocity at a slip wall)
    ReflectOdd,
}

impl BcType {
    /// Whether the ghost value is prescribed or extrapolated, so one-sided
    /// stencils must be used at the edge.
    #[inline]
    pub fn is_extdir_or_ho(self) -> bool {
        matches!(self, BcType::ExtDir | BcType::HoExtrap)
    }

    /// Whether the edge state is copied from the interior side.
    #[inline]
    pub fn is_extrapolating(self) -> bool {
        matches!(
            self,
            BcType::FoExtrap | BcType::HoExtrap | BcType::ReflectEven
        )
    }
}

impl fmt::Display for BcType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BcType::Interior => "int",
            BcType::ExtDir => "ext_dir",
            BcType::FoExtrap => "foextrap",
            BcType::HoExtrap => "hoextrap",
            BcType::ReflectEven => "reflect_even",
            BcType::ReflectOdd => "reflect_odd",
        };
        f.write_str(s)
    }
}

/// Boundary codes of a single component on all domain edges.
///
/// # Example
///
/// ```
/// use godunov_rs::boundary::{BcRec, BcType};
/// use godunov_rs::types::Axis;
///
/// let bc = BcRec::periodic().with_axis(Axis::X, BcType::ExtDir, BcType::FoExtrap);
/// assert_eq!(bc.lo(Axis::X), BcType::ExtDir);
/// assert_eq!(bc.hi(Axis::X), BcType::FoExtrap);
/// assert_eq!(bc.lo(Axis::Y), BcType::Interior);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BcRec {
    sides: [AxisSides<BcType>; 3],
}

impl BcRec {
    /// Fully periodic (interior on every edge).
    pub fn periodic() -> Self {
        Self::default()
    }

    /// Same code on every edge.
    pub fn uniform(bc: BcType) -> Self {
        Self {
            sides: [AxisSides::uniform(bc); 3],
        }
    }

    /// Replace the codes of one axis.
    pub fn with_axis(mut self, axis: Axis, lo: BcType, hi: BcType) -> Self {
        self.sides[axis.index()] = AxisSides::new(lo, hi);
        self
    }

    /// Code on the low edge of `axis`.
    #[inline]
    pub fn lo(&self, axis: Axis) -> BcType {
        self.sides[axis.index()].lo
    }

    /// Code on the high edge of `axis`.
    #[inline]
    pub fn hi(&self, axis: Axis) -> BcType {
        self.sides[axis.index()].hi
    }

    /// Both codes of `axis`.
    #[inline]
    pub fn sides(&self, axis: Axis) -> AxisSides<BcType> {
        self.sides[axis.index()]
    }
}

/// Boundary codes for a velocity field with no-slip walls on every edge.
///
/// Every component is [`BcType::ExtDir`]: the ghost cells carry the wall
/// (or inflow) velocity.
pub fn velocity_walls(ncomp: usize) -> Vec<BcRec> {
    vec![BcRec::uniform(BcType::ExtDir); ncomp]
}
