//! Cut-cell geometry supplied by the caller.

use super::flag::{EbCellFlag, FlagArray};
use crate::field::{Array4, FaceData};
use crate::types::{Axis, IndexBox, SpaceDim};

/// Volume and area fractions, centroids and connectivity over a box.
///
/// Centroids are offsets from the cell (or face) center in units of the
/// cell width, so each lies in `[-0.5, 0.5]`. Face centroids carry the two
/// coordinates tangential to the face, in increasing axis order.
#[derive(Clone, Debug, PartialEq)]
pub struct EbGeometry {
    dim: SpaceDim,
    flags: FlagArray,
    vfrac: Array4,
    ccent: Array4,
    area: FaceData,
    fcent: FaceData,
}

impl EbGeometry {
    /// Geometry with no embedded boundary.
    pub fn regular(bx: IndexBox, dim: SpaceDim) -> Self {
        Self {
            dim,
            flags: FlagArray::regular(bx),
            vfrac: Array4::constant(bx, 1, 1.0),
            ccent: Array4::new(bx, 3),
            area: FaceData::from_fn(&bx, dim, 1, 0, |_, _, _, _, _| 1.0),
            fcent: FaceData::zeros(&bx, dim, 2, 0),
        }
    }

    /// Cells covered by the geometry.
    #[inline]
    pub fn index_box(&self) -> &IndexBox {
        self.flags.index_box()
    }

    #[inline]
    pub fn dim(&self) -> SpaceDim {
        self.dim
    }

    #[inline]
    pub fn flags(&self) -> &FlagArray {
        &self.flags
    }

    #[inline]
    pub fn flag(&self, p: [i32; 3]) -> EbCellFlag {
        self.flags.at(p)
    }

    #[inline]
    pub fn volume_fraction(&self) -> &Array4 {
        &self.vfrac
    }

    #[inline]
    pub fn area_fraction(&self) -> &FaceData {
        &self.area
    }

    #[inline]
    pub fn face_centroid(&self) -> &FaceData {
        &self.fcent
    }

    /// Centroid offset of cell `p` as `[x, y, z]`.
    #[inline]
    pub fn centroid_at(&self, p: [i32; 3]) -> [f64; 3] {
        [self.ccent.at(p, 0), self.ccent.at(p, 1), self.ccent.at(p, 2)]
    }

    /// Mark `p` covered: zero volume and zero area on its faces.
    pub fn set_covered(&mut self, p: [i32; 3]) {
        *self.flags.at_mut(p) = EbCellFlag::covered();
        self.vfrac.set_at(p, 0, 0.0);
        for n in 0..3 {
            self.ccent.set_at(p, n, 0.0);
        }
        for &axis in self.dim.axes() {
            for f in [p, axis.shift(p, 1)] {
                self.area[axis].set_at(f, 0, 0.0);
            }
        }
    }

    /// Mark `p` as a cut cell with the given volume fraction and centroid.
    pub fn set_cut_cell(&mut self, p: [i32; 3], vfrac: f64, centroid: [f64; 3]) {
        *self.flags.at_mut(p) = EbCellFlag::single_valued();
        self.vfrac.set_at(p, 0, vfrac);
        for (n, c) in centroid.into_iter().enumerate() {
            self.ccent.set_at(p, n, c);
        }
    }

    /// Set area fraction and centroid of face `f` normal to `axis`.
    pub fn set_face(&mut self, axis: Axis, f: [i32; 3], area: f64, centroid: [f64; 2]) {
        self.area[axis].set_at(f, 0, area);
        self.fcent[axis].set_at(f, 0, centroid[0]);
        self.fcent[axis].set_at(f, 1, centroid[1]);
    }

    /// Recompute neighbor connectivity from cell kinds and face areas.
    ///
    /// A neighbor is connected when neither cell is covered, it lies inside
    /// the box, and every face crossed by a single-axis step from this cell
    /// toward it is open. Offsets along an inactive axis are never
    /// connected.
    pub fn rebuild_connectivity(&mut self) {
        let bx = *self.flags.index_box();
        let kr = if self.dim == SpaceDim::Three { 1 } else { 0 };

        for p in bx.iter() {
            let mut flag = self.flags.at(p);
            if flag.is_covered() {
                continue;
            }
            flag.disconnect_all();
            for kk in -kr..=kr {
                for jj in -1..=1 {
                    for ii in -1..=1 {
                        let o = [ii, jj, kk];
                        if o == [0, 0, 0] {
                            continue;
                        }
                        let nbr = [p[0] + ii, p[1] + jj, p[2] + kk];
                        if !bx.contains(nbr) || self.flags.at(nbr).is_covered() {
                            continue;
                        }
                        let open = Axis::ALL.iter().all(|&axis| {
                            let s = o[axis.index()];
                            let f = if s > 0 { axis.shift(p, 1) } else { p };
                            s == 0 || self.area[axis].at(f, 0) > 0.0
                        });
                        if open {
                            flag.set_connected(ii, jj, kk);
                        }
                    }
                }
            }
            *self.flags.at_mut(p) = flag;
        }
    }
}
