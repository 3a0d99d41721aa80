//! Multi-component data over an index box.

use crate::types::{Axis, IndexBox};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Owned multi-component array over an [`IndexBox`].
///
/// Storage is contiguous with `i` fastest and the component index slowest,
/// so one x-row of one component is a contiguous slice. Every access is
/// bounds-checked: reading outside the box means the caller supplied too
/// small a halo, which is a bug upstream and panics.
#[derive(Clone, Debug, PartialEq)]
pub struct Array4 {
    bx: IndexBox,
    ncomp: usize,
    data: Vec<f64>,
}

impl Array4 {
    /// Zero-initialized array.
    pub fn new(bx: IndexBox, ncomp: usize) -> Self {
        Self {
            bx,
            ncomp,
            data: vec![0.0; bx.num_pts() * ncomp],
        }
    }

    /// Array with every entry set to `value`.
    pub fn constant(bx: IndexBox, ncomp: usize, value: f64) -> Self {
        Self {
            bx,
            ncomp,
            data: vec![value; bx.num_pts() * ncomp],
        }
    }

    /// Array filled from a function of `(i, j, k, n)`.
    pub fn from_fn<F>(bx: IndexBox, ncomp: usize, f: F) -> Self
    where
        F: Fn(i32, i32, i32, usize) -> f64 + Sync + Send,
    {
        let mut a = Self::new(bx, ncomp);
        a.fill(&bx, f);
        a
    }

    /// Placeholder with no points, used for inactive axes.
    pub fn empty() -> Self {
        Self {
            bx: IndexBox::new([0, 0, 0], [-1, -1, -1]),
            ncomp: 0,
            data: Vec::new(),
        }
    }

    /// Index box covered by the array.
    #[inline]
    pub fn index_box(&self) -> &IndexBox {
        &self.bx
    }

    /// Number of components.
    #[inline]
    pub fn ncomp(&self) -> usize {
        self.ncomp
    }

    /// Raw storage.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    #[inline]
    fn offset(&self, i: i32, j: i32, k: i32, n: usize) -> usize {
        assert!(
            self.bx.contains([i, j, k]) && n < self.ncomp,
            "stencil read ({i},{j},{k}) comp {n} outside {} with {} components",
            self.bx,
            self.ncomp
        );
        let nx = self.bx.len(Axis::X);
        let ny = self.bx.len(Axis::Y);
        let nz = self.bx.len(Axis::Z);
        let di = (i - self.bx.lo[0]) as usize;
        let dj = (j - self.bx.lo[1]) as usize;
        let dk = (k - self.bx.lo[2]) as usize;
        ((n * nz + dk) * ny + dj) * nx + di
    }

    /// Value of component `n` at `(i, j, k)`.
    #[inline]
    pub fn get(&self, i: i32, j: i32, k: i32, n: usize) -> f64 {
        self.data[self.offset(i, j, k, n)]
    }

    /// Value of component `n` at index triple `p`.
    #[inline]
    pub fn at(&self, p: [i32; 3], n: usize) -> f64 {
        self.get(p[0], p[1], p[2], n)
    }

    /// Value `offset` cells away from `p` along `axis`.
    #[inline]
    pub fn along(&self, p: [i32; 3], axis: Axis, offset: i32, n: usize) -> f64 {
        self.at(axis.shift(p, offset), n)
    }

    /// Three-point stencil `[q(-1), q(0), q(+1)]` along `axis`.
    #[inline]
    pub fn stencil3(&self, p: [i32; 3], axis: Axis, n: usize) -> [f64; 3] {
        [
            self.along(p, axis, -1, n),
            self.at(p, n),
            self.along(p, axis, 1, n),
        ]
    }

    /// Five-point stencil `[q(-2), .., q(+2)]` along `axis`.
    #[inline]
    pub fn stencil5(&self, p: [i32; 3], axis: Axis, n: usize) -> [f64; 5] {
        [
            self.along(p, axis, -2, n),
            self.along(p, axis, -1, n),
            self.at(p, n),
            self.along(p, axis, 1, n),
            self.along(p, axis, 2, n),
        ]
    }

    /// Set component `n` at `(i, j, k)`.
    #[inline]
    pub fn set(&mut self, i: i32, j: i32, k: i32, n: usize, value: f64) {
        let idx = self.offset(i, j, k, n);
        self.data[idx] = value;
    }

    /// Set component `n` at index triple `p`.
    #[inline]
    pub fn set_at(&mut self, p: [i32; 3], n: usize, value: f64) {
        self.set(p[0], p[1], p[2], n, value);
    }

    /// Evaluate `f` at every point of `region` and every component.
    ///
    /// Points of the array outside `region` are left untouched. Each value
    /// depends only on its own `(i, j, k, n)`, so with the `parallel`
    /// feature the rows are distributed over the rayon pool.
    ///
    /// # Panics
    /// Panics if `region` is not inside the array's box.
    pub fn fill<F>(&mut self, region: &IndexBox, f: F)
    where
        F: Fn(i32, i32, i32, usize) -> f64 + Sync + Send,
    {
        assert!(
            self.bx.contains_box(region),
            "fill region {} outside array box {}",
            region,
            self.bx
        );
        if region.is_empty() || self.data.is_empty() {
            return;
        }

        let bx = self.bx;
        let region = *region;
        let nx = bx.len(Axis::X);
        let ny = bx.len(Axis::Y);
        let nz = bx.len(Axis::Z);
        let i0 = (region.lo[0] - bx.lo[0]) as usize;
        let i1 = (region.hi[0] - bx.lo[0]) as usize;

        let fill_row = |row: usize, values: &mut [f64]| {
            let j = bx.lo[1] + (row % ny) as i32;
            let k = bx.lo[2] + ((row / ny) % nz) as i32;
            let n = row / (ny * nz);
            if j < region.lo[1] || j > region.hi[1] || k < region.lo[2] || k > region.hi[2] {
                return;
            }
            for (di, v) in values.iter_mut().enumerate().take(i1 + 1).skip(i0) {
                *v = f(bx.lo[0] + di as i32, j, k, n);
            }
        };

        #[cfg(feature = "parallel")]
        self.data
            .par_chunks_mut(nx)
            .enumerate()
            .for_each(|(row, values)| fill_row(row, values));

        #[cfg(not(feature = "parallel"))]
        self.data
            .chunks_mut(nx)
            .enumerate()
            .for_each(|(row, values)| fill_row(row, values));
    }

    /// Sum of component `n` over `region`, in storage order.
    pub fn sum(&self, region: &IndexBox, n: usize) -> f64 {
        region.iter().map(|p| self.at(p, n)).sum()
    }

    /// Largest and smallest value of component `n` over `region`.
    pub fn min_max(&self, region: &IndexBox, n: usize) -> (f64, f64) {
        region
            .iter()
            .map(|p| self.at(p, n))
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            })
    }
}
