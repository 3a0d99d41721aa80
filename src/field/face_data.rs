//! Per-axis face-centered data.

use std::ops::{Index, IndexMut};

use super::Array4;
use crate::types::{Axis, IndexBox, SpaceDim};

/// One face-centered [`Array4`] per axis.
///
/// The array for an inactive axis (z in 2-D) is [`Array4::empty`].
#[derive(Clone, Debug, PartialEq)]
pub struct FaceData {
    arrays: [Array4; 3],
}

impl FaceData {
    /// Zero-initialized face arrays on the faces of `cells` grown by
    /// `transverse_halo` in the directions tangential to each face.
    pub fn zeros(cells: &IndexBox, dim: SpaceDim, ncomp: usize, transverse_halo: i32) -> Self {
        Self::from_fn(cells, dim, ncomp, transverse_halo, |_, _, _, _, _| 0.0)
    }

    /// Face arrays filled from `f(axis, i, j, k, n)`.
    pub fn from_fn<F>(
        cells: &IndexBox,
        dim: SpaceDim,
        ncomp: usize,
        transverse_halo: i32,
        f: F,
    ) -> Self
    where
        F: Fn(Axis, i32, i32, i32, usize) -> f64 + Sync + Send,
    {
        let mut arrays = [Array4::empty(), Array4::empty(), Array4::empty()];
        for &axis in dim.axes() {
            let bx = cells
                .surrounding_nodes(axis)
                .grow_transverse(dim, axis, transverse_halo);
            arrays[axis.index()] = Array4::from_fn(bx, ncomp, |i, j, k, n| f(axis, i, j, k, n));
        }
        Self { arrays }
    }

    /// Array for `axis`.
    #[inline]
    pub fn get(&self, axis: Axis) -> &Array4 {
        &self.arrays[axis.index()]
    }

    /// Mutable array for `axis`.
    #[inline]
    pub fn get_mut(&mut self, axis: Axis) -> &mut Array4 {
        &mut self.arrays[axis.index()]
    }
}

impl Index<Axis> for FaceData {
    type Output = Array4;

    fn index(&self, axis: Axis) -> &Array4 {
        self.get(axis)
    }
}

impl IndexMut<Axis> for FaceData {
    fn index_mut(&mut self, axis: Axis) -> &mut Array4 {
        self.get_mut(axis)
    }
}
