//! Godunov advection of cell-centered fields by a MAC velocity.

use super::ctu::{Ctu, Riemann, TransverseForm};
use crate::boundary::BcRec;
use crate::config::GodunovConfig;
use crate::error::{ConvectionError, require_box, require_ncomp};
use crate::field::{Array4, FaceData};
use crate::flux::convective_rate;
use crate::mesh::ProblemDomain;
use crate::predict::{AdvectionSpeed, TraceContext, trace_faces};
use crate::types::IndexBox;

/// Fields advected over one patch.
#[derive(Clone, Copy, Debug)]
pub struct AdvectionInput<'a> {
    /// Advected field with `GodunovConfig::required_halo` ghost cells
    pub q: &'a Array4,
    /// Face velocities on the faces of the patch grown by one cell
    /// tangentially
    pub umac: &'a FaceData,
    /// Optional forcing per component on the patch grown by one cell
    pub forces: Option<&'a Array4>,
    /// Boundary codes, one per component
    pub bcs: &'a [BcRec],
    /// Conservative flag, one per component
    pub iconserv: &'a [bool],
}

impl<'a> AdvectionInput<'a> {
    /// Unforced advection.
    pub fn new(q: &'a Array4, umac: &'a FaceData, bcs: &'a [BcRec], iconserv: &'a [bool]) -> Self {
        Self {
            q,
            umac,
            forces: None,
            bcs,
            iconserv,
        }
    }

    /// Add a forcing term.
    pub fn with_forces(mut self, forces: &'a Array4) -> Self {
        self.forces = Some(forces);
        self
    }
}

/// Time-centered face states of components `0..ncomp` on every face of
/// `region`.
///
/// Traces each component with the configured reconstruction, couples the
/// directions by corner transport upwind and resolves each face by
/// upwinding with `umac`.
///
/// # Errors
/// Returns an error if an input does not cover its stencil, if component
/// counts disagree, or if `dt` is not positive.
pub fn predict_edge_states(
    region: &IndexBox,
    ncomp: usize,
    input: &AdvectionInput<'_>,
    domain: &ProblemDomain,
    dt: f64,
    config: &GodunovConfig,
) -> Result<FaceData, ConvectionError> {
    let dim = domain.dim;
    if region.is_empty() {
        return Err(ConvectionError::EmptyRegion { region: *region });
    }
    require_ncomp("conservative flags", ncomp, input.iconserv.len())?;
    if let Some(f) = input.forces {
        require_ncomp("forcing", ncomp, f.ncomp())?;
        require_box("forcing", region.grow(dim, 1), f.index_box())?;
    }

    let ctx = TraceContext::new(input.q, domain, dt, config.is_velocity);
    let traces = trace_faces(
        &ctx,
        config.reconstruction,
        config.slope_order,
        &AdvectionSpeed::Mac(input.umac),
        input.bcs,
        ncomp,
        region,
    )?;

    let forms: Vec<TransverseForm> = input.iconserv[..ncomp]
        .iter()
        .map(|&c| TransverseForm::from_conservative(c))
        .collect();
    let ctu = Ctu {
        q: input.q,
        adv: input.umac,
        forces: input.forces,
        bcs: input.bcs,
        domain,
        dt,
        is_velocity: config.is_velocity,
        use_forces_in_trans: config.use_forces_in_trans,
    };
    Ok(ctu.predict(&traces, &forms, region, ncomp, Riemann::Upwind))
}

/// Convective rate of components `0..ncomp` over `region`.
///
/// # Arguments
/// * `region` - Cells to update
/// * `ncomp` - Number of components
/// * `input` - Advected field, velocity, forcing, boundary codes and
///   conservative flags
/// * `domain` - Domain bounds and cell sizes
/// * `dt` - Time step
/// * `config` - Reconstruction and forcing options
///
/// # Returns
/// `-div(u q)` for conservative components and `-u . grad q` for the
/// others, evaluated with the time-centered face states.
pub fn compute_godunov_advection(
    region: &IndexBox,
    ncomp: usize,
    input: &AdvectionInput<'_>,
    domain: &ProblemDomain,
    dt: f64,
    config: &GodunovConfig,
) -> Result<Array4, ConvectionError> {
    log::debug!("godunov advection of {ncomp} components on {region}");
    let qface = predict_edge_states(region, ncomp, input, domain, dt, config)?;
    convective_rate(region, ncomp, &qface, input.umac, domain, input.iconserv)
}
