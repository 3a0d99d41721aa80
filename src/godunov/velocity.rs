//! Godunov prediction of the face-normal velocity before projection.

use super::ctu::{Ctu, Riemann, TransverseForm};
use super::trans_vel::make_trans_velocities;
use crate::boundary::BcRec;
use crate::config::GodunovConfig;
use crate::field::{Array4, FaceData};
use crate::error::ConvectionError;
use crate::mesh::ProblemDomain;
use crate::predict::{AdvectionSpeed, TraceContext, trace_faces};
use crate::types::IndexBox;

/// Time-centered normal velocity on every face of `region`.
///
/// The cell velocity is traced with its own normal component as the
/// characteristic speed, the transverse velocities come from
/// [`make_trans_velocities`], and each face is resolved with Burgers' rule.
/// `config.is_velocity` is ignored; the field is always velocity.
///
/// # Arguments
/// * `region` - Cells whose faces are predicted
/// * `vel` - Cell velocity, one component per axis, with
///   `config.required_halo()` ghost cells
/// * `forces` - Optional velocity forcing on `region` grown by one cell
/// * `bcs` - Boundary codes of the velocity components
/// * `domain` - Domain bounds and cell sizes
/// * `dt` - Time step
/// * `config` - Reconstruction and forcing options
///
/// # Returns
/// One component per axis: `u` on x-faces, `v` on y-faces, `w` on z-faces.
pub fn predict_godunov(
    region: &IndexBox,
    vel: &Array4,
    forces: Option<&Array4>,
    bcs: &[BcRec],
    domain: &ProblemDomain,
    dt: f64,
    config: &GodunovConfig,
) -> Result<FaceData, ConvectionError> {
    let ncomp = domain.dim.count();
    if region.is_empty() {
        return Err(ConvectionError::EmptyRegion { region: *region });
    }

    log::debug!("godunov velocity prediction on {region} with {}", config.reconstruction);

    let ctx = TraceContext::new(vel, domain, dt, true);
    let traces = trace_faces(
        &ctx,
        config.reconstruction,
        config.slope_order,
        &AdvectionSpeed::Cell(vel),
        bcs,
        ncomp,
        region,
    )?;
    let uad = make_trans_velocities(
        &traces,
        vel,
        forces,
        bcs,
        domain,
        dt,
        config.use_forces_in_trans,
        region,
    )?;

    let forms = vec![TransverseForm::Advective; ncomp];
    let ctu = Ctu {
        q: vel,
        adv: &uad,
        forces,
        bcs,
        domain,
        dt,
        is_velocity: true,
        use_forces_in_trans: config.use_forces_in_trans,
    };
    Ok(ctu.predict(&traces, &forms, region, ncomp, Riemann::Burgers))
}
