//! Method-of-lines face values on cut cells.
//!
//! Each cell's least-squares gradient carries its value from the cell
//! centroid to the face centroid; the result is clamped between the two
//! cell values sharing the face. Faces with zero area carry nothing.

use super::regular::{MOL_HALO, edge_ghost, resolve_velocity, sweep_edges};
use crate::boundary::{BcRec, FacePair, extrapolation_edges};
use crate::diagnostics::SlopeDiagnostics;
use crate::eb::EbGeometry;
use crate::error::{ConvectionError, require_box, require_ncomp};
use crate::field::{Array4, FaceData};
use crate::flux::{flux_divergence_eb, upwind_flux};
use crate::mesh::ProblemDomain;
use crate::slopes::compute_eb_slopes;
use crate::types::{Axis, IndexBox};

/// Least-squares slopes of components `0..ncomp` on `region` grown by one
/// cell.
struct CellSlopes {
    slopes: Vec<Array4>,
    diagnostics: SlopeDiagnostics,
}

impl CellSlopes {
    fn compute(
        q: &Array4,
        region: &IndexBox,
        ncomp: usize,
        bcs: &[BcRec],
        geom: &EbGeometry,
        domain: &ProblemDomain,
    ) -> Self {
        let cells = region.grow(domain.dim, 1);
        let mut diagnostics = SlopeDiagnostics::default();
        let slopes = (0..ncomp)
            .map(|n| {
                let edges = extrapolation_edges(&bcs[n], domain);
                let (s, diag) = compute_eb_slopes(q, &cells, n, geom, &edges);
                diagnostics.merge(&diag);
                s
            })
            .collect();
        Self {
            slopes,
            diagnostics,
        }
    }

    /// Value of component `n` of cell `c` extrapolated to the centroid of
    /// face `f` normal to `axis`, clamped to `bounds`.
    #[allow(clippy::too_many_arguments)]
    fn to_face(
        &self,
        q: &Array4,
        geom: &EbGeometry,
        c: [i32; 3],
        f: [i32; 3],
        axis: Axis,
        n: usize,
        bounds: (f64, f64),
    ) -> f64 {
        let slope = &self.slopes[n];
        let cc = geom.centroid_at(c);
        let fc = &geom.face_centroid()[axis];
        let side = if c == f { -0.5 } else { 0.5 };

        let d = axis.index();
        let mut v = q.at(c, n) + (side - cc[d]) * slope.at(c, d);
        for (m, t) in axis.others().into_iter().enumerate() {
            if geom.dim().has(t) {
                let ti = t.index();
                v += (fc.at(f, m) - cc[ti]) * slope.at(c, ti);
            }
        }
        v.max(bounds.0).min(bounds.1)
    }

    /// Clamped states reaching face `f` from its low and high cell.
    fn face_pair(&self, q: &Array4, geom: &EbGeometry, f: [i32; 3], axis: Axis, n: usize) -> FacePair {
        let c = axis.shift(f, -1);
        let (a, b) = (q.at(c, n), q.at(f, n));
        let bounds = (a.min(b), a.max(b));
        FacePair::new(
            self.to_face(q, geom, c, f, axis, n, bounds),
            self.to_face(q, geom, f, f, axis, n, bounds),
        )
    }
}

fn check_eb(
    what: &'static str,
    q: &Array4,
    ncomp: usize,
    region: &IndexBox,
    bcs: &[BcRec],
    geom: &EbGeometry,
    domain: &ProblemDomain,
) -> Result<(), ConvectionError> {
    if region.is_empty() {
        return Err(ConvectionError::EmptyRegion { region: *region });
    }
    require_ncomp("boundary codes", ncomp, bcs.len())?;
    require_ncomp(what, ncomp, q.ncomp())?;
    let stencil = region.grow(domain.dim, MOL_HALO);
    require_box(what, stencil, q.index_box())?;
    require_box("geometry", stencil, geom.index_box())
}

/// [`predict_vels_on_faces`](super::predict_vels_on_faces) on cut cells.
///
/// # Returns
/// The face velocities and the least-squares diagnostics of the cell
/// velocity components.
pub fn predict_vels_on_faces_eb(
    region: &IndexBox,
    vel: &Array4,
    bcs: &[BcRec],
    geom: &EbGeometry,
    domain: &ProblemDomain,
) -> Result<(FaceData, SlopeDiagnostics), ConvectionError> {
    let dim = domain.dim;
    check_eb("cell velocity", vel, dim.count(), region, bcs, geom, domain)?;
    log::debug!("mol cut-cell face velocities on {region}");

    let slopes = CellSlopes::compute(vel, region, dim.count(), bcs, geom, domain);
    let area = geom.area_fraction();
    let edges = sweep_edges(bcs, domain);
    let umac = FaceData::from_fn(region, dim, 1, 0, |axis, i, j, k, _| {
        let f = [i, j, k];
        let n = axis.index();
        if area[axis].at(f, 0) <= 0.0 {
            return 0.0;
        }
        if let Some(ghost) = edge_ghost(vel, f, n, axis, &edges[n][n]) {
            return ghost;
        }
        let FacePair { lo, hi } = slopes.face_pair(vel, geom, f, axis, n);
        resolve_velocity(lo, hi)
    });
    Ok((umac, slopes.diagnostics))
}

/// [`compute_convective_fluxes`](super::compute_convective_fluxes) on cut
/// cells; faces with zero area fraction get zero flux.
#[allow(clippy::too_many_arguments)]
pub fn compute_convective_fluxes_eb(
    region: &IndexBox,
    ncomp: usize,
    q: &Array4,
    umac: &FaceData,
    bcs: &[BcRec],
    geom: &EbGeometry,
    domain: &ProblemDomain,
) -> Result<(FaceData, SlopeDiagnostics), ConvectionError> {
    let dim = domain.dim;
    check_eb("cell field", q, ncomp, region, bcs, geom, domain)?;
    for &axis in dim.axes() {
        require_box("advecting velocity", region.surrounding_nodes(axis), umac[axis].index_box())?;
    }
    log::debug!("mol cut-cell fluxes of {ncomp} components on {region}");

    let slopes = CellSlopes::compute(q, region, ncomp, bcs, geom, domain);
    let area = geom.area_fraction();
    let edges = sweep_edges(&bcs[..ncomp], domain);
    let fluxes = FaceData::from_fn(region, dim, ncomp, 0, |axis, i, j, k, n| {
        let f = [i, j, k];
        if area[axis].at(f, 0) <= 0.0 {
            return 0.0;
        }
        let u = umac[axis].at(f, 0);
        match edge_ghost(q, f, n, axis, &edges[n][axis.index()]) {
            Some(ghost) => u * ghost,
            None => upwind_flux(slopes.face_pair(q, geom, f, axis, n), u),
        }
    });
    Ok((fluxes, slopes.diagnostics))
}

/// Cut-cell rate `(1/vfrac) sum_d (a(c) F(c) - a(c+e) F(c+e)) / dx_d`;
/// covered cells get zero.
pub fn compute_convective_rate_eb(
    region: &IndexBox,
    ncomp: usize,
    fluxes: &FaceData,
    geom: &EbGeometry,
    domain: &ProblemDomain,
) -> Result<Array4, ConvectionError> {
    flux_divergence_eb(region, ncomp, fluxes, geom, domain)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mol::{compute_convective_fluxes, predict_vels_on_faces};
    use crate::types::SpaceDim;

    const TOL: f64 = 1e-12;

    fn setup() -> (ProblemDomain, EbGeometry) {
        let domain = ProblemDomain::uniform_2d(6, 6, 1.0);
        let geom = EbGeometry::regular(domain.bx.grow(SpaceDim::Two, 3), SpaceDim::Two);
        (domain, geom)
    }

    #[test]
    fn test_regular_geometry_matches_regular_path() {
        let (domain, geom) = setup();
        let q = Array4::from_fn(domain.bx.grow(SpaceDim::Two, 3), 2, |i, j, _, n| {
            ((i * 5 + j * 3 + n as i32) % 7) as f64 * 0.5 + 0.1 * i as f64
        });
        let umac = FaceData::from_fn(&domain.bx, SpaceDim::Two, 1, 0, |_, i, j, _, _| {
            0.3 * (i - j) as f64 + 0.05
        });
        let bcs = [BcRec::periodic(); 2];
        let plain = compute_convective_fluxes(&domain.bx, 2, &q, &umac, &bcs, &domain).unwrap();
        let (eb, diag) =
            compute_convective_fluxes_eb(&domain.bx, 2, &q, &umac, &bcs, &geom, &domain).unwrap();
        assert!(diag.is_clean());
        assert_eq!(diag.cut_cells, 0);
        for axis in [Axis::X, Axis::Y] {
            for f in domain.bx.surrounding_nodes(axis).iter() {
                for n in 0..2 {
                    assert!((plain[axis].at(f, n) - eb[axis].at(f, n)).abs() < TOL);
                }
            }
        }

        let vplain = predict_vels_on_faces(&domain.bx, &q, &bcs, &domain).unwrap();
        let (veb, _) = predict_vels_on_faces_eb(&domain.bx, &q, &bcs, &geom, &domain).unwrap();
        for f in domain.bx.surrounding_nodes(Axis::Y).iter() {
            assert!((vplain[Axis::Y].at(f, 0) - veb[Axis::Y].at(f, 0)).abs() < TOL);
        }
    }

    #[test]
    fn test_closed_faces_and_covered_cells() {
        let (domain, mut geom) = setup();
        geom.set_covered([3, 3, 0]);
        geom.set_cut_cell([2, 3, 0], 0.5, [-0.2, 0.1, 0.0]);
        geom.set_face(Axis::X, [2, 3, 0], 0.7, [0.1, 0.0]);
        geom.rebuild_connectivity();

        // linear in the centroid positions
        let g = [0.2, -0.1];
        let q = Array4::from_fn(*geom.index_box(), 1, |i, j, _, _| {
            let c = geom.centroid_at([i, j, 0]);
            1.0 + g[0] * (i as f64 + c[0]) + g[1] * (j as f64 + c[1])
        });
        let umac = FaceData::from_fn(&domain.bx, SpaceDim::Two, 1, 0, |_, _, _, _, _| 1.0);
        let bcs = [BcRec::periodic()];
        let (fluxes, diag) =
            compute_convective_fluxes_eb(&domain.bx, 1, &q, &umac, &bcs, &geom, &domain).unwrap();
        assert!(diag.is_clean());
        assert_eq!(diag.covered_cells, 1);
        assert_eq!(diag.cut_cells, 1);
        // faces of the covered cell are closed
        assert_eq!(fluxes[Axis::X].get(3, 3, 0, 0), 0.0);
        assert_eq!(fluxes[Axis::Y].get(3, 4, 0, 0), 0.0);

        // the upwind cell's gradient reaches the face centroid exactly
        let expect = 1.0 + g[0] * 1.5 + g[1] * 3.1;
        assert!((fluxes[Axis::X].get(2, 3, 0, 0) - expect).abs() < TOL);

        let rate =
            compute_convective_rate_eb(&domain.bx, 1, &fluxes, &geom, &domain).unwrap();
        assert_eq!(rate.get(3, 3, 0, 0), 0.0);
        assert!(rate.get(2, 3, 0, 0).is_finite());
    }

    #[test]
    fn test_geometry_must_cover_stencil() {
        let domain = ProblemDomain::uniform_2d(6, 6, 1.0);
        let geom = EbGeometry::regular(domain.bx, SpaceDim::Two);
        let q = Array4::new(domain.bx.grow(SpaceDim::Two, 2), 1);
        let umac = FaceData::zeros(&domain.bx, SpaceDim::Two, 1, 0);
        let err = compute_convective_fluxes_eb(
            &domain.bx,
            1,
            &q,
            &umac,
            &[BcRec::periodic()],
            &geom,
            &domain,
        )
        .unwrap_err();
        assert!(matches!(err, ConvectionError::InsufficientHalo { what: "geometry", .. }));
    }
}
