//! Integer index boxes.
//!
//! An [`IndexBox`] is an inclusive range of cell (or face) indices in three
//! index dimensions. Face boxes are obtained from cell boxes with
//! [`IndexBox::surrounding_nodes`], which extends the high end by one along
//! the face normal.

use std::fmt;

use super::{Axis, SpaceDim};

/// Inclusive integer box `lo..=hi`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct IndexBox {
    /// Lowest index in each direction
    pub lo: [i32; 3],
    /// Highest index in each direction (inclusive)
    pub hi: [i32; 3],
}

impl IndexBox {
    /// Create a box from inclusive bounds.
    pub const fn new(lo: [i32; 3], hi: [i32; 3]) -> Self {
        Self { lo, hi }
    }

    /// Box covering `0..n` in x and y, single k-plane.
    pub const fn plane(nx: i32, ny: i32) -> Self {
        Self::new([0, 0, 0], [nx - 1, ny - 1, 0])
    }

    /// Box covering `0..n` in all three directions.
    pub const fn cube(nx: i32, ny: i32, nz: i32) -> Self {
        Self::new([0, 0, 0], [nx - 1, ny - 1, nz - 1])
    }

    /// Number of indices along `axis` (zero for an empty box).
    #[inline]
    pub fn len(&self, axis: Axis) -> usize {
        let d = axis.index();
        (self.hi[d] - self.lo[d] + 1).max(0) as usize
    }

    /// Total number of index points.
    pub fn num_pts(&self) -> usize {
        Axis::ALL.iter().map(|&a| self.len(a)).product()
    }

    /// True if the box contains no points.
    pub fn is_empty(&self) -> bool {
        self.num_pts() == 0
    }

    /// Whether the index triple lies in the box.
    #[inline]
    pub fn contains(&self, p: [i32; 3]) -> bool {
        (0..3).all(|d| p[d] >= self.lo[d] && p[d] <= self.hi[d])
    }

    /// Whether `other` lies entirely inside this box.
    pub fn contains_box(&self, other: &IndexBox) -> bool {
        other.is_empty() || (self.contains(other.lo) && self.contains(other.hi))
    }

    /// Grow by `n` along a single axis (negative `n` shrinks).
    pub fn grow_axis(&self, axis: Axis, n: i32) -> Self {
        let mut b = *self;
        b.lo[axis.index()] -= n;
        b.hi[axis.index()] += n;
        b
    }

    /// Grow by `n` along every active axis of `dim`.
    pub fn grow(&self, dim: SpaceDim, n: i32) -> Self {
        dim.axes()
            .iter()
            .fold(*self, |b, &axis| b.grow_axis(axis, n))
    }

    /// Grow by `n` along every active axis except `axis`.
    pub fn grow_transverse(&self, dim: SpaceDim, axis: Axis, n: i32) -> Self {
        dim.transverse(axis).fold(*self, |b, t| b.grow_axis(t, n))
    }

    /// Face box for faces normal to `axis` bounding the cells of this box.
    pub fn surrounding_nodes(&self, axis: Axis) -> Self {
        let mut b = *self;
        b.hi[axis.index()] += 1;
        b
    }

    /// Iterate over all index triples, `i` fastest.
    pub fn iter(&self) -> impl Iterator<Item = [i32; 3]> + '_ {
        let [ilo, jlo, klo] = self.lo;
        let [ihi, jhi, khi] = self.hi;
        (klo..=khi).flat_map(move |k| {
            (jlo..=jhi).flat_map(move |j| (ilo..=ihi).map(move |i| [i, j, k]))
        })
    }
}

impl fmt::Display for IndexBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(({},{},{}) ({},{},{}))",
            self.lo[0], self.lo[1], self.lo[2], self.hi[0], self.hi[1], self.hi[2]
        )
    }
}
