//! Least-squares gradients on cut cells.
//!
//! Every connected neighbor `m` of cell `c` in the 3x3(x3) block gives one
//! row of an overdetermined system
//!
//! ```text
//! (offset + xc(m) - xc(c)) . g = q(m) - q(c)
//! ```
//!
//! where `xc` is the centroid offset in cell widths. The normal equations
//! are solved with closed-form cofactors. Along an axis where the cell and
//! both axis neighbors are regular and connected, the plain limited slope
//! is used instead, so the embedded-boundary path reproduces the regular
//! one away from the body.

use super::regular::slope2_extdir;
use crate::boundary::ExtrapolationEdges;
use crate::diagnostics::SlopeDiagnostics;
use crate::eb::{EbGeometry, FlagArray};
use crate::field::Array4;
use crate::types::{Axis, IndexBox, SpaceDim};

/// Relative threshold on `det(AtA)` against the product of its diagonal.
const DET_RTOL: f64 = 1e-10;

/// Gradient of one cell, in units of value per cell width.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct EbSlope {
    /// `[x, y, z]` components; inactive axes are zero
    pub slope: [f64; 3],
    /// The normal equations were singular and at least one axis needed them
    pub degenerate: bool,
}

/// Whether `axis` can use the centered limiter at `p`: the cell and both
/// of its axis neighbors are regular, and both neighbors are connected.
#[inline]
pub fn is_regular_along(flags: &FlagArray, p: [i32; 3], axis: Axis) -> bool {
    let f = flags.at(p);
    let [ei, ej, ek] = axis.unit();
    let lo_ok =
        !flags.neighbor(p, [-ei, -ej, -ek]).is_single_valued() && f.is_connected(-ei, -ej, -ek);
    let hi_ok = !flags.neighbor(p, [ei, ej, ek]).is_single_valued() && f.is_connected(ei, ej, ek);
    !f.is_single_valued() && lo_ok && hi_ok
}

#[inline]
fn det2(m: &[[f64; 3]; 3]) -> f64 {
    m[0][0] * m[1][1] - m[0][1] * m[1][0]
}

#[inline]
fn det3(m: &[[f64; 3]; 3]) -> f64 {
    m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
        - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
        + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
}

/// Normal equations `AtA g = Atb` over the connected neighbors of `p`.
fn normal_equations(
    q: &Array4,
    p: [i32; 3],
    n: usize,
    geom: &EbGeometry,
) -> ([[f64; 3]; 3], [f64; 3]) {
    let flag = geom.flag(p);
    let nd = geom.dim().count();
    let kr = if geom.dim() == SpaceDim::Three { 1 } else { 0 };
    let xc = geom.centroid_at(p);
    let q0 = q.at(p, n);

    let mut a = [[0.0_f64; 3]; 27];
    let mut du = [0.0_f64; 27];
    let mut rows = 0;
    for kk in -kr..=kr {
        for jj in -1..=1 {
            for ii in -1..=1 {
                if (ii, jj, kk) == (0, 0, 0) || !flag.is_connected(ii, jj, kk) {
                    continue;
                }
                let m = [p[0] + ii, p[1] + jj, p[2] + kk];
                let xm = geom.centroid_at(m);
                let off = [ii, jj, kk];
                for d in 0..nd {
                    a[rows][d] = off[d] as f64 + xm[d] - xc[d];
                }
                du[rows] = q.at(m, n) - q0;
                rows += 1;
            }
        }
    }

    let mut ata = [[0.0_f64; 3]; 3];
    let mut atb = [0.0_f64; 3];
    for (row, &b) in a[..rows].iter().zip(&du[..rows]) {
        for r in 0..nd {
            for c in 0..nd {
                ata[r][c] += row[r] * row[c];
            }
            atb[r] += row[r] * b;
        }
    }
    (ata, atb)
}

/// Cramer's rule for the active axes, or `None` when singular.
fn solve(ata: &[[f64; 3]; 3], atb: &[f64; 3], dim: SpaceDim) -> Option<[f64; 3]> {
    let nd = dim.count();
    let det_of = |m: &[[f64; 3]; 3]| if nd == 3 { det3(m) } else { det2(m) };
    let scale: f64 = (0..nd).map(|d| ata[d][d]).product();
    let det = det_of(ata);
    let solvable = scale > 0.0 && det.abs() > DET_RTOL * scale;
    if !solvable {
        return None;
    }
    let mut g = [0.0; 3];
    for (c, gc) in g.iter_mut().enumerate().take(nd) {
        let mut m = *ata;
        for (r, row) in m.iter_mut().enumerate().take(nd) {
            row[c] = atb[r];
        }
        *gc = det_of(&m) / det;
    }
    Some(g)
}

fn slopes_with_edges(
    q: &Array4,
    p: [i32; 3],
    n: usize,
    geom: &EbGeometry,
    edges: &[ExtrapolationEdges; 3],
) -> EbSlope {
    let flags = geom.flags();
    if flags.at(p).is_covered() {
        return EbSlope::default();
    }

    let mut out = EbSlope::default();
    let mut least_squares: Option<Option<[f64; 3]>> = None;
    for &axis in geom.dim().axes() {
        let d = axis.index();
        if is_regular_along(flags, p, axis) {
            let i = p[d];
            let e = &edges[d];
            out.slope[d] =
                slope2_extdir(q.stencil3(p, axis, n), e.lo_proximity(i), e.hi_proximity(i));
        } else {
            let g = *least_squares.get_or_insert_with(|| {
                let (ata, atb) = normal_equations(q, p, n, geom);
                solve(&ata, &atb, geom.dim())
            });
            match g {
                Some(g) => out.slope[d] = g[d],
                None => out.degenerate = true,
            }
        }
    }
    out
}

/// Gradient of component `n` at cell `p`.
///
/// Covered cells return zero. A singular system zeroes the axes that
/// needed it and sets [`EbSlope::degenerate`].
pub fn eb_slopes(q: &Array4, p: [i32; 3], n: usize, geom: &EbGeometry) -> EbSlope {
    slopes_with_edges(q, p, n, geom, &[ExtrapolationEdges::none(); 3])
}

/// [`eb_slopes`] with the one-sided centered difference on regular axes
/// at a prescribed or extrapolated domain edge.
pub fn eb_slopes_extdir(
    q: &Array4,
    p: [i32; 3],
    n: usize,
    geom: &EbGeometry,
    edges: &[ExtrapolationEdges; 3],
) -> EbSlope {
    slopes_with_edges(q, p, n, geom, edges)
}

/// Gradients of component `n` over `region`, three components per cell.
pub fn compute_eb_slopes(
    q: &Array4,
    region: &IndexBox,
    n: usize,
    geom: &EbGeometry,
    edges: &[ExtrapolationEdges; 3],
) -> (Array4, SlopeDiagnostics) {
    let mut slopes = Array4::new(*region, 3);
    let mut diag = SlopeDiagnostics::default();
    for p in region.iter() {
        let s = eb_slopes_extdir(q, p, n, geom, edges);
        diag.record(p, geom.flag(p), s.degenerate);
        for (c, v) in s.slope.into_iter().enumerate() {
            slopes.set_at(p, c, v);
        }
    }
    if !diag.is_clean() {
        diag.log_summary("least-squares slopes");
    }
    (slopes, diag)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundary::{BcRec, BcType, extrapolation_edges};
    use crate::mesh::ProblemDomain;
    use crate::slopes::slope2;
    use approx::assert_relative_eq;

    fn box3() -> IndexBox {
        IndexBox::new([-2, -2, -2], [4, 4, 4])
    }

    fn linear(geom: &EbGeometry, g: [f64; 3]) -> Array4 {
        let bx = *geom.index_box();
        let mut q = Array4::new(bx, 1);
        for p in bx.iter() {
            let c = geom.centroid_at(p);
            let v: f64 = (0..3).map(|d| g[d] * (p[d] as f64 + c[d])).sum();
            q.set_at(p, 0, v + 1.0);
        }
        q
    }

    #[test]
    fn test_regular_neighborhood_matches_slope2() {
        let geom = EbGeometry::regular(box3(), SpaceDim::Three);
        let q = Array4::from_fn(box3(), 1, |i, j, k, _| {
            ((i * i) as f64).sin() + (j as f64) * 0.3 - (k * k * k) as f64 * 0.01
        });
        let p = [1, 1, 1];
        let s = eb_slopes(&q, p, 0, &geom);
        assert!(!s.degenerate);
        for &axis in &Axis::ALL {
            assert_eq!(s.slope[axis.index()], slope2(q.stencil3(p, axis, 0)));
        }
    }

    #[test]
    fn test_cut_cell_linear_exact_3d() {
        let mut geom = EbGeometry::regular(box3(), SpaceDim::Three);
        geom.set_cut_cell([1, 1, 1], 0.4, [0.2, -0.15, 0.1]);
        geom.set_cut_cell([2, 1, 1], 0.7, [-0.1, 0.05, 0.0]);
        geom.set_covered([1, 2, 2]);
        geom.rebuild_connectivity();

        let g = [0.7, -1.3, 2.1];
        let q = linear(&geom, g);
        let s = eb_slopes(&q, [1, 1, 1], 0, &geom);
        assert!(!s.degenerate);
        for d in 0..3 {
            assert_relative_eq!(s.slope[d], g[d], epsilon = 1e-12);
        }
    }

    #[test]
    fn test_cut_cell_linear_exact_2d() {
        let bx = IndexBox::new([-2, -2, 0], [4, 4, 0]);
        let mut geom = EbGeometry::regular(bx, SpaceDim::Two);
        geom.set_cut_cell([1, 1, 0], 0.5, [0.25, 0.1, 0.0]);
        geom.set_covered([2, 2, 0]);
        geom.rebuild_connectivity();

        let g = [-0.4, 0.9, 0.0];
        let q = linear(&geom, g);
        let s = eb_slopes(&q, [1, 1, 0], 0, &geom);
        assert_relative_eq!(s.slope[0], g[0], epsilon = 1e-12);
        assert_relative_eq!(s.slope[1], g[1], epsilon = 1e-12);
        assert_eq!(s.slope[2], 0.0);
    }

    #[test]
    fn test_covered_and_degenerate() {
        let bx = IndexBox::new([-2, -2, 0], [4, 4, 0]);
        let mut geom = EbGeometry::regular(bx, SpaceDim::Two);
        geom.set_covered([0, 0, 0]);
        geom.set_cut_cell([2, 2, 0], 0.1, [0.3, 0.3, 0.0]);
        geom.rebuild_connectivity();
        // close every face of the cut cell but one: a rank-one system
        let mut flags_geom = geom.clone();
        for axis in [Axis::X, Axis::Y] {
            for f in [[2, 2, 0], axis.shift([2, 2, 0], 1)] {
                flags_geom.set_face(axis, f, 0.0, [0.0, 0.0]);
            }
        }
        flags_geom.set_face(Axis::X, [3, 2, 0], 0.5, [0.0, 0.0]);
        flags_geom.rebuild_connectivity();

        let q = Array4::from_fn(bx, 1, |i, j, _, _| (i + 2 * j) as f64);

        let s = eb_slopes(&q, [0, 0, 0], 0, &geom);
        assert_eq!(s, EbSlope::default());

        let s = eb_slopes(&q, [2, 2, 0], 0, &flags_geom);
        assert!(s.degenerate);
        assert_eq!(s.slope, [0.0; 3]);

        let region = IndexBox::new([1, 1, 0], [2, 2, 0]);
        let none = [ExtrapolationEdges::none(); 3];
        let (_, diag) = compute_eb_slopes(&q, &region, 0, &flags_geom, &none);
        assert_eq!(diag.cells, 4);
        assert_eq!(diag.degenerate_cells, 1);
        assert_eq!(diag.first_degenerate, Some([2, 2, 0]));
    }

    #[test]
    fn test_extdir_applies_on_regular_axis_at_edge() {
        let domain = ProblemDomain::uniform_2d(4, 4, 1.0);
        let bx = domain.bx.grow(SpaceDim::Two, 2);
        let geom = EbGeometry::regular(bx, SpaceDim::Two);
        let bc = BcRec::periodic().with_axis(Axis::X, BcType::ExtDir, BcType::ExtDir);
        let edges = extrapolation_edges(&bc, &domain);

        // q = x with the ghost on the low face at x = -1/2
        let mut q = Array4::from_fn(bx, 1, |i, _, _, _| i as f64);
        for j in bx.lo[1]..=bx.hi[1] {
            q.set(-1, j, 0, 0, -0.5);
        }
        let plain = eb_slopes(&q, [0, 1, 0], 0, &geom);
        let fixed = eb_slopes_extdir(&q, [0, 1, 0], 0, &geom, &edges);
        assert_relative_eq!(fixed.slope[0], 1.0, epsilon = 1e-14);
        assert_relative_eq!(plain.slope[0], 0.75, epsilon = 1e-14);
        assert_eq!(fixed.slope[1], plain.slope[1]);
    }
}
