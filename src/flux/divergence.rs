//! Reduction of face data to a per-cell convective rate.
//!
//! The rate is what the outer solver adds to its right-hand side:
//! `dq/dt = -div(u q)` in conservative form, `-u . grad q` otherwise.
//! Contributions are summed in x, y, z order.

use crate::eb::EbGeometry;
use crate::error::{ConvectionError, require_box, require_ncomp};
use crate::field::{Array4, FaceData};
use crate::mesh::ProblemDomain;
use crate::types::IndexBox;

fn check_faces(
    what: &'static str,
    faces: &FaceData,
    region: &IndexBox,
    domain: &ProblemDomain,
    ncomp: usize,
) -> Result<(), ConvectionError> {
    for &axis in domain.dim.axes() {
        require_ncomp(what, ncomp, faces[axis].ncomp())?;
        require_box(what, region.surrounding_nodes(axis), faces[axis].index_box())?;
    }
    Ok(())
}

/// Rate from face states `qface` advected by `umac`.
///
/// Component `n` uses the conservative form when `iconserv[n]` is set:
///
/// ```text
/// sum_d (u(c) q(c) - u(c+e) q(c+e)) / dx_d
/// ```
///
/// and the advective form otherwise:
///
/// ```text
/// sum_d 1/2 (u(c) + u(c+e)) (q(c) - q(c+e)) / dx_d
/// ```
///
/// where `c` and `c+e` are the low and high faces of the cell.
pub fn convective_rate(
    region: &IndexBox,
    ncomp: usize,
    qface: &FaceData,
    umac: &FaceData,
    domain: &ProblemDomain,
    iconserv: &[bool],
) -> Result<Array4, ConvectionError> {
    require_ncomp("conservative flags", ncomp, iconserv.len())?;
    check_faces("face states", qface, region, domain, ncomp)?;
    check_faces("advecting velocity", umac, region, domain, 1)?;

    let dim = domain.dim;
    let mut rate = Array4::new(*region, ncomp);
    rate.fill(region, |i, j, k, n| {
        let c = [i, j, k];
        let mut sum = 0.0;
        for &axis in dim.axes() {
            let f_hi = axis.shift(c, 1);
            let (u_lo, u_hi) = (umac[axis].at(c, 0), umac[axis].at(f_hi, 0));
            let (q_lo, q_hi) = (qface[axis].at(c, n), qface[axis].at(f_hi, n));
            let dx = domain.dx(axis);
            sum += if iconserv[n] {
                (u_lo * q_lo - u_hi * q_hi) / dx
            } else {
                0.5 * (u_lo + u_hi) * (q_lo - q_hi) / dx
            };
        }
        sum
    });
    Ok(rate)
}

/// Rate from precomputed face fluxes: `sum_d (F(c) - F(c+e)) / dx_d`.
pub fn flux_divergence(
    region: &IndexBox,
    ncomp: usize,
    fluxes: &FaceData,
    domain: &ProblemDomain,
) -> Result<Array4, ConvectionError> {
    check_faces("fluxes", fluxes, region, domain, ncomp)?;

    let dim = domain.dim;
    let mut rate = Array4::new(*region, ncomp);
    rate.fill(region, |i, j, k, n| {
        let c = [i, j, k];
        dim.axes().iter().fold(0.0, |sum, &axis| {
            let f = &fluxes[axis];
            sum + (f.at(c, n) - f.at(axis.shift(c, 1), n)) / domain.dx(axis)
        })
    });
    Ok(rate)
}

/// Cut-cell rate: `(1/vfrac) sum_d (a(c) F(c) - a(c+e) F(c+e)) / dx_d`.
///
/// Covered cells get exactly zero.
pub fn flux_divergence_eb(
    region: &IndexBox,
    ncomp: usize,
    fluxes: &FaceData,
    geom: &EbGeometry,
    domain: &ProblemDomain,
) -> Result<Array4, ConvectionError> {
    check_faces("fluxes", fluxes, region, domain, ncomp)?;
    require_box("geometry", *region, geom.index_box())?;

    let dim = domain.dim;
    let area = geom.area_fraction();
    let vfrac = geom.volume_fraction();
    let mut rate = Array4::new(*region, ncomp);
    rate.fill(region, |i, j, k, n| {
        let c = [i, j, k];
        if geom.flag(c).is_covered() {
            return 0.0;
        }
        let sum = dim.axes().iter().fold(0.0, |sum, &axis| {
            let (f, a) = (&fluxes[axis], &area[axis]);
            let hi = axis.shift(c, 1);
            sum + (a.at(c, 0) * f.at(c, n) - a.at(hi, 0) * f.at(hi, n)) / domain.dx(axis)
        });
        sum / vfrac.at(c, 0)
    });
    Ok(rate)
}
