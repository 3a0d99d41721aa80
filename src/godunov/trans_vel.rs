//! Advecting velocities for the transverse terms of velocity prediction.

use crate::boundary::{BcRec, FacePair, set_edge_bcs};
use crate::error::{ConvectionError, require_box, require_dt, require_ncomp};
use crate::field::{Array4, FaceData};
use crate::flux::burgers_state;
use crate::mesh::ProblemDomain;
use crate::predict::FaceTraces;
use crate::types::IndexBox;

/// Normal velocity on every face of `region` grown by one cell
/// tangentially, from the Burgers solution of the traced normal component.
///
/// # Arguments
/// * `traces` - Velocity traces, component `d` on the `d`-faces
/// * `vel` - Cell velocity with one ghost cell, supplying boundary values
/// * `forces` - Optional velocity forcing on `region` grown by one cell
/// * `bcs` - Boundary codes of the velocity components
/// * `domain` - Domain bounds and cell sizes
/// * `dt` - Time step
/// * `use_forces_in_trans` - Add half a step of forcing to the traces
/// * `region` - Cells whose faces are computed
///
/// # Returns
/// One component per axis, `u_ad` on x-faces, `v_ad` on y-faces, `w_ad` on
/// z-faces.
#[allow(clippy::too_many_arguments)]
pub fn make_trans_velocities(
    traces: &FaceTraces,
    vel: &Array4,
    forces: Option<&Array4>,
    bcs: &[BcRec],
    domain: &ProblemDomain,
    dt: f64,
    use_forces_in_trans: bool,
    region: &IndexBox,
) -> Result<FaceData, ConvectionError> {
    let dim = domain.dim;
    require_dt(dt)?;
    require_ncomp("velocity boundary codes", dim.count(), bcs.len())?;
    require_ncomp("cell velocity", dim.count(), vel.ncomp())?;
    require_box("cell velocity", region.grow(dim, 1), vel.index_box())?;
    for &axis in dim.axes() {
        let faces = region.surrounding_nodes(axis).grow_transverse(dim, axis, 1);
        require_ncomp("velocity traces", dim.count(), traces.lo[axis].ncomp())?;
        require_box("velocity traces", faces, traces.lo[axis].index_box())?;
        require_box("velocity traces", faces, traces.hi[axis].index_box())?;
    }
    if let Some(f) = forces {
        require_ncomp("velocity forcing", dim.count(), f.ncomp())?;
        require_box("velocity forcing", region.grow(dim, 1), f.index_box())?;
    }

    log::debug!("transverse velocities on {region}");

    Ok(FaceData::from_fn(region, dim, 1, 1, |axis, i, j, k, _| {
        let f = [i, j, k];
        let n = axis.index();
        let mut pair = traces.pair(axis, f, n);
        if let Some(force) = forces.filter(|_| use_forces_in_trans) {
            pair = FacePair::new(
                pair.lo + 0.5 * dt * force.at(axis.shift(f, -1), n),
                pair.hi + 0.5 * dt * force.at(f, n),
            );
        }
        burgers_state(set_edge_bcs(f, n, axis, vel, pair, &bcs[n], domain, true))
    }))
}
