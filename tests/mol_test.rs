//! Integration tests for method-of-lines convection.
//!
//! These tests verify:
//! 1. Conservation of the regular and cut-cell rates with periodic boundaries
//! 2. Wall boundaries give zero normal face velocity
//! 3. Constant fields are transported without a rate on regular grids
//! 4. Cut-cell fluxes vanish on closed faces and stay within neighbor bounds

use godunov_rs::{
    Array4, Axis, BcRec, EbGeometry, FaceData, IndexBox, ProblemDomain, SpaceDim,
    compute_convective_fluxes, compute_convective_fluxes_eb, compute_convective_rate,
    compute_convective_rate_eb, predict_vels_on_faces, predict_vels_on_faces_eb, velocity_walls,
};

const TOL: f64 = 1e-12;

/// Smooth periodic scalar on an `n`-cell square.
fn periodic_scalar(domain: &ProblemDomain, n: i32) -> Array4 {
    let h = std::f64::consts::TAU / n as f64;
    Array4::from_fn(domain.bx.grow(domain.dim, 3), 1, |i, j, k, _| {
        let (i, j, k) = (i.rem_euclid(n), j.rem_euclid(n), k.rem_euclid(n));
        (h * i as f64).sin() * (h * j as f64).cos() + 0.3 * (h * k as f64).sin() + 2.0
    })
}

fn uniform_mac(cells: &IndexBox, dim: SpaceDim, u: [f64; 3]) -> FaceData {
    FaceData::from_fn(cells, dim, 1, 0, |axis, _, _, _, _| u[axis.index()])
}

/// A square obstacle of one covered cell fringed by four cut cells.
fn obstacle_geometry(domain: &ProblemDomain) -> EbGeometry {
    let mut geom = EbGeometry::regular(domain.bx.grow(SpaceDim::Two, 3), SpaceDim::Two);
    geom.set_covered([5, 5, 0]);
    geom.set_cut_cell([4, 5, 0], 0.8, [-0.05, 0.0, 0.0]);
    geom.set_cut_cell([6, 5, 0], 0.8, [0.05, 0.0, 0.0]);
    geom.set_cut_cell([5, 4, 0], 0.7, [0.0, -0.08, 0.0]);
    geom.set_cut_cell([5, 6, 0], 0.7, [0.0, 0.08, 0.0]);
    geom.set_face(Axis::Y, [4, 5, 0], 0.6, [-0.2, 0.0]);
    geom.set_face(Axis::Y, [4, 6, 0], 0.6, [-0.2, 0.0]);
    geom.set_face(Axis::X, [5, 4, 0], 0.5, [0.25, 0.0]);
    geom.set_face(Axis::X, [6, 4, 0], 0.5, [0.25, 0.0]);
    geom.rebuild_connectivity();
    geom
}

// ============================================================================
// Regular Grids
// ============================================================================

#[test]
fn test_periodic_conservation_3d() {
    let n = 6;
    let domain = ProblemDomain::uniform_3d(n, n, n, 1.0 / n as f64);
    let q = periodic_scalar(&domain, n);
    let umac = uniform_mac(&domain.bx, SpaceDim::Three, [0.9, -0.4, 0.2]);
    let bcs = [BcRec::periodic()];

    let fluxes = compute_convective_fluxes(&domain.bx, 1, &q, &umac, &bcs, &domain).unwrap();
    let rate = compute_convective_rate(&domain.bx, 1, &fluxes, &domain).unwrap();
    assert!(rate.sum(&domain.bx, 0).abs() < 1e-10);
}

#[test]
fn test_constant_field_has_no_rate() {
    let domain = ProblemDomain::uniform_2d(5, 7, 0.1);
    let q = Array4::constant(domain.bx.grow(SpaceDim::Two, 2), 2, 4.0);
    let umac = uniform_mac(&domain.bx, SpaceDim::Two, [1.0, -2.0, 0.0]);
    let bcs = [BcRec::periodic(); 2];

    let fluxes = compute_convective_fluxes(&domain.bx, 2, &q, &umac, &bcs, &domain).unwrap();
    assert_eq!(fluxes[Axis::X].get(2, 3, 0, 1), 4.0);
    assert_eq!(fluxes[Axis::Y].get(2, 3, 0, 0), -8.0);
    let rate = compute_convective_rate(&domain.bx, 2, &fluxes, &domain).unwrap();
    for n in 0..2 {
        let (lo, hi) = rate.min_max(&domain.bx, n);
        assert!(lo.abs() < TOL && hi.abs() < TOL);
    }
}

#[test]
fn test_walls_stop_normal_velocity() {
    let domain = ProblemDomain::uniform_2d(6, 6, 1.0);
    let vel = Array4::from_fn(domain.bx.grow(SpaceDim::Two, 2), 2, |i, j, _, n| {
        if domain.bx.contains([i, j, 0]) { 1.0 - 0.5 * n as f64 } else { 0.0 }
    });
    let bcs = velocity_walls(2);
    let umac = predict_vels_on_faces(&domain.bx, &vel, &bcs, &domain).unwrap();

    for m in 0..6 {
        assert_eq!(umac[Axis::X].get(0, m, 0, 0), 0.0);
        assert_eq!(umac[Axis::X].get(6, m, 0, 0), 0.0);
        assert_eq!(umac[Axis::Y].get(m, 0, 0, 0), 0.0);
        assert_eq!(umac[Axis::Y].get(m, 6, 0, 0), 0.0);
    }
    // interior faces of a uniform interior flow are untouched
    assert!((umac[Axis::X].get(3, 3, 0, 0) - 1.0).abs() < TOL);
    assert!((umac[Axis::Y].get(3, 3, 0, 0) - 0.5).abs() < TOL);
}

// ============================================================================
// Cut Cells
// ============================================================================

/// The volume-weighted cut-cell rate telescopes to zero over a periodic
/// domain with an obstacle well inside it.
#[test]
fn test_cut_cell_conservation() {
    let n = 10;
    let domain = ProblemDomain::uniform_2d(n, n, 1.0 / n as f64);
    let geom = obstacle_geometry(&domain);
    let q = periodic_scalar(&domain, n);
    let umac = uniform_mac(&domain.bx, SpaceDim::Two, [0.7, 0.4, 0.0]);
    let bcs = [BcRec::periodic()];

    let (fluxes, diag) =
        compute_convective_fluxes_eb(&domain.bx, 1, &q, &umac, &bcs, &geom, &domain).unwrap();
    assert!(diag.is_clean());
    assert_eq!(diag.cells, 144);
    assert_eq!(diag.cut_cells, 4);
    assert_eq!(diag.covered_cells, 1);

    let rate = compute_convective_rate_eb(&domain.bx, 1, &fluxes, &geom, &domain).unwrap();
    let vfrac = geom.volume_fraction();
    let total: f64 = domain.bx.iter().map(|p| vfrac.at(p, 0) * rate.at(p, 0)).sum();
    assert!(total.abs() < 1e-10, "volume-weighted rate sums to {total}");
    assert_eq!(rate.get(5, 5, 0, 0), 0.0);
}

/// Face states are clamped between the two cells they separate, so every
/// flux is bounded by the upwind pair times the face velocity.
#[test]
fn test_cut_cell_fluxes_bounded_and_closed() {
    let n = 10;
    let domain = ProblemDomain::uniform_2d(n, n, 1.0 / n as f64);
    let geom = obstacle_geometry(&domain);
    let q = periodic_scalar(&domain, n);
    let umac = uniform_mac(&domain.bx, SpaceDim::Two, [1.0, 1.0, 0.0]);
    let bcs = [BcRec::periodic()];

    let (fluxes, _) =
        compute_convective_fluxes_eb(&domain.bx, 1, &q, &umac, &bcs, &geom, &domain).unwrap();
    let area = geom.area_fraction();
    for axis in [Axis::X, Axis::Y] {
        for f in domain.bx.surrounding_nodes(axis).iter() {
            let flux = fluxes[axis].at(f, 0);
            if area[axis].at(f, 0) == 0.0 {
                assert_eq!(flux, 0.0, "closed {axis:?} face {f:?}");
                continue;
            }
            let (a, b) = (q.at(axis.shift(f, -1), 0), q.at(f, 0));
            assert!(flux >= a.min(b) - TOL && flux <= a.max(b) + TOL);
        }
    }
}

#[test]
fn test_cut_cell_face_velocities_respect_walls_and_body() {
    let domain = ProblemDomain::uniform_2d(10, 10, 0.1);
    let geom = obstacle_geometry(&domain);
    let vel = Array4::from_fn(domain.bx.grow(SpaceDim::Two, 3), 2, |i, j, _, n| {
        if !domain.bx.contains([i, j, 0]) || [i, j] == [5, 5] {
            0.0
        } else if n == 0 {
            1.0
        } else {
            0.1 * (i - 5) as f64
        }
    });
    let (umac, diag) =
        predict_vels_on_faces_eb(&domain.bx, &vel, &velocity_walls(2), &geom, &domain).unwrap();
    assert!(diag.is_clean());

    // the covered cell's faces and the domain walls carry nothing
    assert_eq!(umac[Axis::X].get(5, 5, 0, 0), 0.0);
    assert_eq!(umac[Axis::X].get(6, 5, 0, 0), 0.0);
    assert_eq!(umac[Axis::Y].get(5, 5, 0, 0), 0.0);
    for m in 0..10 {
        assert_eq!(umac[Axis::X].get(0, m, 0, 0), 0.0);
        assert_eq!(umac[Axis::Y].get(m, 10, 0, 0), 0.0);
    }
    // away from the body the interior flow passes unchanged
    assert!((umac[Axis::X].get(2, 8, 0, 0) - 1.0).abs() < TOL);
}
