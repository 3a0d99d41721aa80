//! Cut-cell classification and neighbor connectivity.

use crate::types::IndexBox;

/// Whether a cell is fluid, cut by the embedded boundary, or solid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum CellKind {
    #[default]
    Regular,
    /// Cut by the boundary, with a single fluid region
    SingleValued,
    /// Entirely inside the body
    Covered,
}

/// Cell kind plus connectivity to the 26 neighbors of the 3x3x3 block.
///
/// Bit `(ii+1) + 3(jj+1) + 9(kk+1)` of the mask is set when the neighbor
/// at offset `(ii, jj, kk)` shares fluid with this cell. The center bit is
/// set for every non-covered cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EbCellFlag {
    kind: CellKind,
    neighbors: u32,
}

const ALL_NEIGHBORS: u32 = (1 << 27) - 1;
const CENTER: u32 = 1 << 13;

#[inline]
fn bit(ii: i32, jj: i32, kk: i32) -> u32 {
    debug_assert!((-1..=1).contains(&ii) && (-1..=1).contains(&jj) && (-1..=1).contains(&kk));
    1 << ((ii + 1) + 3 * (jj + 1) + 9 * (kk + 1))
}

impl Default for EbCellFlag {
    fn default() -> Self {
        Self::regular()
    }
}

impl EbCellFlag {
    /// Regular cell connected to every neighbor.
    pub const fn regular() -> Self {
        Self {
            kind: CellKind::Regular,
            neighbors: ALL_NEIGHBORS,
        }
    }

    /// Cut cell, connected to every neighbor until told otherwise.
    pub const fn single_valued() -> Self {
        Self {
            kind: CellKind::SingleValued,
            neighbors: ALL_NEIGHBORS,
        }
    }

    /// Covered cell with no connections.
    pub const fn covered() -> Self {
        Self {
            kind: CellKind::Covered,
            neighbors: 0,
        }
    }

    #[inline]
    pub fn kind(&self) -> CellKind {
        self.kind
    }

    #[inline]
    pub fn is_regular(&self) -> bool {
        self.kind == CellKind::Regular
    }

    #[inline]
    pub fn is_single_valued(&self) -> bool {
        self.kind == CellKind::SingleValued
    }

    #[inline]
    pub fn is_covered(&self) -> bool {
        self.kind == CellKind::Covered
    }

    /// Whether the neighbor at offset `(ii, jj, kk)` is connected.
    #[inline]
    pub fn is_connected(&self, ii: i32, jj: i32, kk: i32) -> bool {
        self.neighbors & bit(ii, jj, kk) != 0
    }

    /// Mark the neighbor at `(ii, jj, kk)` connected.
    #[inline]
    pub fn set_connected(&mut self, ii: i32, jj: i32, kk: i32) {
        self.neighbors |= bit(ii, jj, kk);
    }

    /// Mark the neighbor at `(ii, jj, kk)` disconnected.
    #[inline]
    pub fn set_disconnected(&mut self, ii: i32, jj: i32, kk: i32) {
        self.neighbors &= !bit(ii, jj, kk);
    }

    /// Drop every connection except the cell itself.
    pub fn disconnect_all(&mut self) {
        self.neighbors &= CENTER;
    }

    /// Number of connected neighbors, the cell itself excluded.
    pub fn num_connected(&self) -> u32 {
        (self.neighbors & !CENTER).count_ones()
    }
}

/// Flags over an index box, with the same bounds checking as
/// [`Array4`](crate::field::Array4).
#[derive(Clone, Debug, PartialEq)]
pub struct FlagArray {
    bx: IndexBox,
    data: Vec<EbCellFlag>,
}

impl FlagArray {
    /// Every cell regular.
    pub fn regular(bx: IndexBox) -> Self {
        Self {
            bx,
            data: vec![EbCellFlag::regular(); bx.num_pts()],
        }
    }

    #[inline]
    pub fn index_box(&self) -> &IndexBox {
        &self.bx
    }

    #[inline]
    fn offset(&self, p: [i32; 3]) -> usize {
        assert!(
            self.bx.contains(p),
            "flag read ({},{},{}) outside {}",
            p[0],
            p[1],
            p[2],
            self.bx
        );
        let nx = (self.bx.hi[0] - self.bx.lo[0] + 1) as usize;
        let ny = (self.bx.hi[1] - self.bx.lo[1] + 1) as usize;
        let di = (p[0] - self.bx.lo[0]) as usize;
        let dj = (p[1] - self.bx.lo[1]) as usize;
        let dk = (p[2] - self.bx.lo[2]) as usize;
        (dk * ny + dj) * nx + di
    }

    #[inline]
    pub fn at(&self, p: [i32; 3]) -> EbCellFlag {
        self.data[self.offset(p)]
    }

    #[inline]
    pub fn at_mut(&mut self, p: [i32; 3]) -> &mut EbCellFlag {
        let idx = self.offset(p);
        &mut self.data[idx]
    }

    /// Neighbor of `p` at offset `o`.
    #[inline]
    pub fn neighbor(&self, p: [i32; 3], o: [i32; 3]) -> EbCellFlag {
        self.at([p[0] + o[0], p[1] + o[1], p[2] + o[2]])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regular_connected_everywhere() {
        let f = EbCellFlag::regular();
        for kk in -1..=1 {
            for jj in -1..=1 {
                for ii in -1..=1 {
                    assert!(f.is_connected(ii, jj, kk));
                }
            }
        }
        assert_eq!(f.num_connected(), 26);
    }

    #[test]
    fn test_connectivity_bits() {
        let mut f = EbCellFlag::single_valued();
        f.set_disconnected(-1, 0, 0);
        f.set_disconnected(1, 1, -1);
        assert!(!f.is_connected(-1, 0, 0));
        assert!(!f.is_connected(1, 1, -1));
        assert!(f.is_connected(1, 0, 0));
        assert_eq!(f.num_connected(), 24);

        f.disconnect_all();
        assert!(f.is_connected(0, 0, 0));
        assert_eq!(f.num_connected(), 0);
        f.set_connected(0, 1, 0);
        assert!(f.is_connected(0, 1, 0));
    }

    #[test]
    fn test_covered() {
        let f = EbCellFlag::covered();
        assert!(f.is_covered());
        assert!(!f.is_connected(0, 0, 0));
        assert!(!f.is_single_valued());
    }

    #[test]
    fn test_flag_array() {
        let mut flags = FlagArray::regular(IndexBox::new([-1, -1, 0], [2, 2, 0]));
        *flags.at_mut([1, 2, 0]) = EbCellFlag::covered();
        assert!(flags.at([1, 2, 0]).is_covered());
        assert!(flags.neighbor([1, 1, 0], [0, 1, 0]).is_covered());
        assert!(flags.at([-1, -1, 0]).is_regular());
    }
}
