//! Integration tests for unsplit Godunov advection.
//!
//! These tests verify:
//! 1. A step advected one step by a uniform velocity gives the donor-cell
//!    update without new extrema
//! 2. Conservation of the conservative rate with periodic boundaries
//! 3. Zero velocity leaves edge states at the face average and the rate at zero
//! 4. The normal velocity and a scalar at a prescribed inflow face take the
//!    ghost value, and an outflow face never turns into inflow
//! 5. Velocity prediction agrees with scalar advection of a uniform flow

use godunov_rs::boundary::BcType;
use godunov_rs::predict::{AdvectionSpeed, TraceContext};
use godunov_rs::{
    AdvectionInput, Array4, Axis, BcRec, FaceData, GodunovConfig, IndexBox, ProblemDomain,
    Reconstruction, SlopeOrder, SpaceDim, compute_godunov_advection, predict_edge_states,
    predict_godunov, trace_faces,
};

const TOL: f64 = 1e-12;

/// All reconstruction and limiter combinations.
fn all_configs() -> Vec<GodunovConfig> {
    vec![
        GodunovConfig::new().with_slope_order(SlopeOrder::Second),
        GodunovConfig::new().with_slope_order(SlopeOrder::Fourth),
        GodunovConfig::new().with_reconstruction(Reconstruction::Ppm),
    ]
}

/// Periodic row of `nx` cells, one cell high.
fn periodic_row(nx: i32, field: impl Fn(i32) -> f64 + Sync) -> (ProblemDomain, Array4) {
    let domain = ProblemDomain::uniform_2d(nx, 1, 1.0);
    let q = Array4::from_fn(domain.bx.grow(SpaceDim::Two, 3), 1, |i, _, _, _| {
        field(i.rem_euclid(nx))
    });
    (domain, q)
}

fn uniform_mac(cells: &IndexBox, dim: SpaceDim, u: [f64; 3]) -> FaceData {
    FaceData::from_fn(cells, dim, 1, 1, |axis, _, _, _, _| u[axis.index()])
}

// ============================================================================
// Step Advection
// ============================================================================

/// A step moved at Courant number 0.4 has zero limited slope on both sides of
/// each jump, so one step is exactly the donor-cell update.
#[test]
fn test_step_is_donor_cell_without_overshoot() {
    let (domain, q) = periodic_row(8, |i| if i >= 4 { 1.0 } else { 0.0 });
    let umac = uniform_mac(&domain.bx, SpaceDim::Two, [1.0, 0.0, 0.0]);
    let bcs = [BcRec::periodic()];
    let dt = 0.4;

    for config in all_configs() {
        let input = AdvectionInput::new(&q, &umac, &bcs, &[true]);
        let rate = compute_godunov_advection(&domain.bx, 1, &input, &domain, dt, &config).unwrap();

        let updated: Vec<f64> =
            (0..8).map(|i| q.get(i, 0, 0, 0) + dt * rate.get(i, 0, 0, 0)).collect();
        let expect = [0.4, 0.0, 0.0, 0.0, 0.6, 1.0, 1.0, 1.0];
        for (i, (&got, &want)) in updated.iter().zip(expect.iter()).enumerate() {
            assert!(
                (got - want).abs() < TOL,
                "{config:?}: cell {i} got {got}, expected {want}"
            );
            assert!((-TOL..=1.0 + TOL).contains(&got), "overshoot in cell {i}: {got}");
        }
    }
}

/// A bump next to a plateau, advected in one dimension, stays within its
/// initial bounds.
#[test]
fn test_profile_stays_bounded_1d() {
    let n = 32;
    let (domain, q) = periodic_row(n, |i| {
        let x = (i as f64 + 0.5) / n as f64;
        if x > 0.7 && x < 0.85 {
            1.0
        } else {
            (-(x - 0.3) * (x - 0.3) / 0.005).exp()
        }
    });
    let umac = uniform_mac(&domain.bx, SpaceDim::Two, [-1.0, 0.0, 0.0]);
    let bcs = [BcRec::periodic()];
    let (qmin, qmax) = q.min_max(&domain.bx, 0);
    let dt = 0.7;

    for config in all_configs() {
        let input = AdvectionInput::new(&q, &umac, &bcs, &[true]);
        let rate = compute_godunov_advection(&domain.bx, 1, &input, &domain, dt, &config).unwrap();
        for p in domain.bx.iter() {
            let v = q.at(p, 0) + dt * rate.at(p, 0);
            assert!(v >= qmin - TOL && v <= qmax + TOL, "{config:?} at {p:?}: {v}");
        }
    }
}

// ============================================================================
// Conservation
// ============================================================================

/// With periodic boundaries the conservative rate of any field sums to zero
/// when the MAC velocity is uniform.
#[test]
fn test_periodic_conservation_3d() {
    let domain = ProblemDomain::uniform_3d(6, 5, 4, 0.25);
    let q = Array4::from_fn(domain.bx.grow(SpaceDim::Three, 3), 2, |i, j, k, n| {
        let (i, j, k) = (i.rem_euclid(6), j.rem_euclid(5), k.rem_euclid(4));
        ((i * 7 + j * 3 + k * 5 + n as i32) % 11) as f64 * 0.3
    });
    let umac = uniform_mac(&domain.bx, SpaceDim::Three, [0.8, -0.5, 0.3]);
    let bcs = [BcRec::periodic(); 2];

    for config in all_configs() {
        let input = AdvectionInput::new(&q, &umac, &bcs, &[true, true]);
        let rate = compute_godunov_advection(&domain.bx, 2, &input, &domain, 0.1, &config).unwrap();
        for n in 0..2 {
            let total = rate.sum(&domain.bx, n);
            assert!(total.abs() < 1e-10, "{config:?} component {n}: {total}");
        }
    }
}

// ============================================================================
// Zero Velocity
// ============================================================================

/// Without motion the two traces of a linear field meet at the face value and
/// are blended evenly; nothing is transported.
#[test]
fn test_zero_velocity_blends_and_is_idle() {
    let domain = ProblemDomain::uniform_2d(6, 6, 1.0);
    let q = Array4::from_fn(domain.bx.grow(SpaceDim::Two, 3), 1, |i, j, _, _| {
        2.0 + 0.5 * i as f64 - 0.25 * j as f64
    });
    let umac = uniform_mac(&domain.bx, SpaceDim::Two, [0.0; 3]);
    let bcs = [BcRec::periodic()];
    let input = AdvectionInput::new(&q, &umac, &bcs, &[false]);
    let config = GodunovConfig::new();

    let qface = predict_edge_states(&domain.bx, 1, &input, &domain, 0.3, &config).unwrap();
    for p in [[2, 3, 0], [4, 1, 0]] {
        let x_face = 0.5 * (q.at(Axis::X.shift(p, -1), 0) + q.at(p, 0));
        let y_face = 0.5 * (q.at(Axis::Y.shift(p, -1), 0) + q.at(p, 0));
        assert!((qface[Axis::X].at(p, 0) - x_face).abs() < TOL);
        assert!((qface[Axis::Y].at(p, 0) - y_face).abs() < TOL);
    }

    let rate = compute_godunov_advection(&domain.bx, 1, &input, &domain, 0.3, &config).unwrap();
    let (lo, hi) = rate.min_max(&domain.bx, 0);
    assert_eq!(lo, 0.0);
    assert_eq!(hi, 0.0);
}

// ============================================================================
// Boundary Handling
// ============================================================================

/// A prescribed inflow velocity fixes the normal edge state exactly, whatever
/// the interior traces say.
#[test]
fn test_inflow_normal_velocity_is_pinned() {
    let domain = ProblemDomain::uniform_2d(6, 4, 1.0);
    let inflow = 1.75;
    let vel = Array4::from_fn(domain.bx.grow(SpaceDim::Two, 3), 2, |i, j, _, n| match (n, i < 0) {
        (0, true) => inflow,
        (0, false) => 1.0 + 0.1 * (i * j) as f64,
        (_, _) => 0.05 * i as f64,
    });
    let bc = BcRec::periodic().with_axis(Axis::X, BcType::ExtDir, BcType::FoExtrap);
    let bcs = [bc, bc];
    let umac = uniform_mac(&domain.bx, SpaceDim::Two, [1.0, 0.2, 0.0]);
    let input = AdvectionInput::new(&vel, &umac, &bcs, &[false, false]);

    for config in all_configs() {
        let config = config.with_velocity(true);
        let qface = predict_edge_states(&domain.bx, 2, &input, &domain, 0.2, &config).unwrap();
        for j in 0..4 {
            assert_eq!(qface[Axis::X].get(0, j, 0, 0), inflow, "{config:?} row {j}");
        }

        let umac = predict_godunov(&domain.bx, &vel, None, &bcs, &domain, 0.2, &config).unwrap();
        for j in 0..4 {
            assert_eq!(umac[Axis::X].get(0, j, 0, 0), inflow, "{config:?} row {j}");
        }
    }
}

/// A prescribed scalar inflow reaches the domain face unchanged: the exterior
/// trace is the ghost value, the interior trace is not, and the upwind edge
/// state at the inflow face is the ghost value.
#[test]
fn test_inflow_scalar_takes_ghost_value() {
    let domain = ProblemDomain::uniform_2d(6, 4, 1.0);
    let ghost = 2.5;
    let q = Array4::from_fn(domain.bx.grow(SpaceDim::Two, 3), 1, |i, j, _, _| {
        if i < 0 { ghost } else { 0.3 * i as f64 + 0.1 * j as f64 }
    });
    let bcs = [BcRec::periodic().with_axis(Axis::X, BcType::ExtDir, BcType::FoExtrap)];
    let umac = uniform_mac(&domain.bx, SpaceDim::Two, [0.8, 0.3, 0.0]);
    let input = AdvectionInput::new(&q, &umac, &bcs, &[true]);
    let dt = 0.25;

    for config in all_configs() {
        let ctx = TraceContext::new(&q, &domain, dt, false);
        let traces = trace_faces(
            &ctx,
            config.reconstruction,
            config.slope_order,
            &AdvectionSpeed::Mac(&umac),
            &bcs,
            1,
            &domain.bx,
        )
        .unwrap();
        let qface = predict_edge_states(&domain.bx, 1, &input, &domain, dt, &config).unwrap();
        for j in 0..4 {
            let pair = traces.pair(Axis::X, [0, j, 0], 0);
            assert_eq!(pair.lo, ghost, "{config:?} row {j}");
            assert_ne!(pair.hi, ghost, "{config:?} row {j}");
            assert_eq!(qface[Axis::X].get(0, j, 0, 0), ghost, "{config:?} row {j}");
        }
    }
}

/// An outflow edge never lets the predicted normal velocity point inward.
#[test]
fn test_outflow_edge_blocks_backflow() {
    let domain = ProblemDomain::uniform_2d(4, 4, 1.0);
    let vel = Array4::from_fn(domain.bx.grow(SpaceDim::Two, 3), 2, |_, _, _, n| {
        if n == 0 { -0.5 } else { 0.0 }
    });
    let bc = BcRec::periodic().with_axis(Axis::X, BcType::FoExtrap, BcType::FoExtrap);
    let umac = predict_godunov(
        &domain.bx,
        &vel,
        None,
        &[bc, bc],
        &domain,
        0.1,
        &GodunovConfig::new(),
    )
    .unwrap();
    for j in 0..4 {
        // outflow at the low edge is allowed, inflow at the high edge is not
        assert_eq!(umac[Axis::X].get(0, j, 0, 0), -0.5);
        assert_eq!(umac[Axis::X].get(4, j, 0, 0), 0.0);
    }
}

// ============================================================================
// Velocity Prediction
// ============================================================================

/// A uniform velocity advected as a scalar and predicted as a velocity gives
/// the same face values.
#[test]
fn test_velocity_prediction_matches_scalar_advection_of_uniform_flow() {
    let domain = ProblemDomain::uniform_2d(5, 5, 0.2);
    let u = [0.4, -0.3];
    let vel = Array4::from_fn(domain.bx.grow(SpaceDim::Two, 3), 2, |_, _, _, n| u[n]);
    let bcs = [BcRec::periodic(); 2];
    let config = GodunovConfig::new().with_velocity(true);

    let umac = predict_godunov(&domain.bx, &vel, None, &bcs, &domain, 0.05, &config).unwrap();
    let mac = uniform_mac(&domain.bx, SpaceDim::Two, [u[0], u[1], 0.0]);
    let input = AdvectionInput::new(&vel, &mac, &bcs, &[false, false]);
    let qface = predict_edge_states(&domain.bx, 2, &input, &domain, 0.05, &config).unwrap();

    for axis in [Axis::X, Axis::Y] {
        for f in domain.bx.surrounding_nodes(axis).iter() {
            let d = axis.index();
            assert!((umac[axis].at(f, 0) - qface[axis].at(f, d)).abs() < TOL);
        }
    }
}
