//! Physical problem domain of one AMR level.

use crate::error::ConvectionError;
use crate::types::{Axis, IndexBox, SpaceDim};

/// Index bounds and cell size of the physical domain.
///
/// The domain box marks where physical boundary conditions apply. Patch
/// boundaries inside the domain are not special-cased by any kernel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProblemDomain {
    /// Cell indices of the physical domain
    pub bx: IndexBox,
    /// Cell size per axis
    pub dx: [f64; 3],
    /// Number of active dimensions
    pub dim: SpaceDim,
}

impl ProblemDomain {
    /// Create a domain, validating the cell sizes of active axes.
    pub fn new(bx: IndexBox, dx: [f64; 3], dim: SpaceDim) -> Result<Self, ConvectionError> {
        for &axis in dim.axes() {
            let h = dx[axis.index()];
            if !(h.is_finite() && h > 0.0) {
                return Err(ConvectionError::InvalidCellSize { axis, value: h });
            }
        }
        if bx.is_empty() {
            return Err(ConvectionError::EmptyRegion { region: bx });
        }
        if dim == SpaceDim::Two && bx.lo[2] != bx.hi[2] {
            return Err(ConvectionError::InvalidConfig(format!(
                "2-D domain must be a single k-plane, got {bx}"
            )));
        }
        Ok(Self { bx, dx, dim })
    }

    /// Uniform 2-D domain of `nx × ny` cells with spacing `h`.
    ///
    /// # Panics
    /// Panics if `h` is not a positive finite number.
    pub fn uniform_2d(nx: i32, ny: i32, h: f64) -> Self {
        Self::new(IndexBox::plane(nx, ny), [h, h, 1.0], SpaceDim::Two)
            .expect("uniform 2-D domain requires a positive cell size")
    }

    /// Uniform 3-D domain of `nx × ny × nz` cells with spacing `h`.
    ///
    /// # Panics
    /// Panics if `h` is not a positive finite number.
    pub fn uniform_3d(nx: i32, ny: i32, nz: i32, h: f64) -> Self {
        Self::new(IndexBox::cube(nx, ny, nz), [h; 3], SpaceDim::Three)
            .expect("uniform 3-D domain requires a positive cell size")
    }

    /// Lowest cell index along `axis`.
    #[inline]
    pub fn lo(&self, axis: Axis) -> i32 {
        self.bx.lo[axis.index()]
    }

    /// Highest cell index along `axis`.
    #[inline]
    pub fn hi(&self, axis: Axis) -> i32 {
        self.bx.hi[axis.index()]
    }

    /// Cell size along `axis`.
    #[inline]
    pub fn dx(&self, axis: Axis) -> f64 {
        self.dx[axis.index()]
    }

    /// Cell volume (area in 2-D).
    pub fn cell_volume(&self) -> f64 {
        self.dim.axes().iter().map(|&a| self.dx(a)).product()
    }
}
