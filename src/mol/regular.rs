//! Method-of-lines face values on a regular grid.

use crate::boundary::{BcRec, ExtrapolationEdges, FacePair, extrapolation_edges};
use crate::error::{ConvectionError, require_box, require_ncomp};
use crate::field::{Array4, FaceData};
use crate::flux::{SMALL_VEL, flux_divergence, upwind_flux};
use crate::mesh::ProblemDomain;
use crate::slopes::slope2_extdir_at;
use crate::types::{Axis, IndexBox};

/// Ghost cells of the cell field needed around a patch.
pub const MOL_HALO: i32 = 2;

/// Ghost value of component `n` when face `f` lies on an edge with a
/// prescribed or extrapolated value.
pub(super) fn edge_ghost(
    q: &Array4,
    f: [i32; 3],
    n: usize,
    axis: Axis,
    edges: &ExtrapolationEdges,
) -> Option<f64> {
    let d = axis.index();
    if edges.lo && f[d] <= edges.domlo {
        let mut g = f;
        g[d] = edges.domlo - 1;
        Some(q.at(g, n))
    } else if edges.hi && f[d] > edges.domhi {
        let mut g = f;
        g[d] = edges.domhi + 1;
        Some(q.at(g, n))
    } else {
        None
    }
}

/// Extrapolation edges of every component along every axis, built once
/// per sweep.
pub(super) fn sweep_edges(
    bcs: &[BcRec],
    domain: &ProblemDomain,
) -> Vec<[ExtrapolationEdges; 3]> {
    bcs.iter().map(|bc| extrapolation_edges(bc, domain)).collect()
}

/// Normal velocity at a face from the values extrapolated out of the low
/// cell (`umns`) and the high cell (`upls`).
///
/// Zero when the two diverge from the face, otherwise the upwind value of
/// their average.
#[inline]
pub(super) fn resolve_velocity(umns: f64, upls: f64) -> f64 {
    if umns < 0.0 && upls > 0.0 {
        return 0.0;
    }
    let avg = 0.5 * (umns + upls);
    if avg >= SMALL_VEL {
        umns
    } else if avg <= -SMALL_VEL {
        upls
    } else {
        avg
    }
}

fn check_cells(
    what: &'static str,
    q: &Array4,
    region: &IndexBox,
    domain: &ProblemDomain,
    ncomp: usize,
    bcs: &[BcRec],
) -> Result<(), ConvectionError> {
    if region.is_empty() {
        return Err(ConvectionError::EmptyRegion { region: *region });
    }
    require_ncomp("boundary codes", ncomp, bcs.len())?;
    require_ncomp(what, ncomp, q.ncomp())?;
    require_box(what, region.grow(domain.dim, MOL_HALO), q.index_box())
}

/// Face-normal velocity on every face of `region` at time `n`.
///
/// # Arguments
/// * `region` - Cells whose faces are computed
/// * `vel` - Cell velocity with two ghost cells
/// * `bcs` - Boundary codes of the velocity components
/// * `domain` - Domain bounds and cell sizes
pub fn predict_vels_on_faces(
    region: &IndexBox,
    vel: &Array4,
    bcs: &[BcRec],
    domain: &ProblemDomain,
) -> Result<FaceData, ConvectionError> {
    let dim = domain.dim;
    check_cells("cell velocity", vel, region, domain, dim.count(), bcs)?;
    log::debug!("mol face velocities on {region}");

    let edges = sweep_edges(bcs, domain);
    Ok(FaceData::from_fn(region, dim, 1, 0, |axis, i, j, k, _| {
        let f = [i, j, k];
        let n = axis.index();
        let edges = &edges[n][n];
        if let Some(ghost) = edge_ghost(vel, f, n, axis, edges) {
            return ghost;
        }
        let c = axis.shift(f, -1);
        let upls = vel.at(f, n) - 0.5 * slope2_extdir_at(vel, f, n, axis, edges);
        let umns = vel.at(c, n) + 0.5 * slope2_extdir_at(vel, c, n, axis, edges);
        resolve_velocity(umns, upls)
    }))
}

/// Advective fluxes `umac q` of components `0..ncomp` on every face of
/// `region`, with `q` extrapolated to the faces at time `n`.
///
/// # Arguments
/// * `region` - Cells whose faces are computed
/// * `ncomp` - Number of components
/// * `q` - Cell field with two ghost cells
/// * `umac` - Face velocities on the faces of `region`
/// * `bcs` - Boundary codes, one per component
/// * `domain` - Domain bounds and cell sizes
pub fn compute_convective_fluxes(
    region: &IndexBox,
    ncomp: usize,
    q: &Array4,
    umac: &FaceData,
    bcs: &[BcRec],
    domain: &ProblemDomain,
) -> Result<FaceData, ConvectionError> {
    let dim = domain.dim;
    check_cells("cell field", q, region, domain, ncomp, bcs)?;
    for &axis in dim.axes() {
        require_box("advecting velocity", region.surrounding_nodes(axis), umac[axis].index_box())?;
    }
    log::debug!("mol fluxes of {ncomp} components on {region}");

    let edges = sweep_edges(&bcs[..ncomp], domain);
    Ok(FaceData::from_fn(region, dim, ncomp, 0, |axis, i, j, k, n| {
        let f = [i, j, k];
        let u = umac[axis].at(f, 0);
        let edges = &edges[n][axis.index()];
        match edge_ghost(q, f, n, axis, edges) {
            Some(ghost) => u * ghost,
            None => {
                let c = axis.shift(f, -1);
                let qpls = q.at(f, n) - 0.5 * slope2_extdir_at(q, f, n, axis, edges);
                let qmns = q.at(c, n) + 0.5 * slope2_extdir_at(q, c, n, axis, edges);
                upwind_flux(FacePair::new(qmns, qpls), u)
            }
        }
    }))
}

/// Rate `sum_d (F(c) - F(c+e)) / dx_d` from MOL fluxes.
pub fn compute_convective_rate(
    region: &IndexBox,
    ncomp: usize,
    fluxes: &FaceData,
    domain: &ProblemDomain,
) -> Result<Array4, ConvectionError> {
    flux_divergence(region, ncomp, fluxes, domain)
}
