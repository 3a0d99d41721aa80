//! 2-D advection of a square step by a uniform diagonal velocity.
//!
//! Solves dq/dt + u . grad q = 0 on the periodic unit square with:
//! - Initial condition: q = 1 inside [0.25, 0.5]^2, 0 elsewhere
//! - Velocity: u = (1, 0.5)
//!
//! The step is advected for one period in x with Godunov PLM, Godunov PPM
//! and second-order method of lines (SSP-RK2), and each run reports mass
//! drift, bounds and the L1 error against the exact translated step.
//!
//! Run with: `RUST_LOG=debug cargo run --example step_advection`

use godunov_rs::{
    AdvectionInput, Array4, Axis, BcRec, FaceData, GodunovConfig, IndexBox, ProblemDomain,
    Reconstruction, SpaceDim, compute_convective_fluxes, compute_convective_rate,
    compute_godunov_advection,
};

const N: i32 = 64;
const HALO: i32 = 3;
const U: [f64; 2] = [1.0, 0.5];

fn step(x: f64, y: f64) -> f64 {
    let inside = |s: f64| (0.25..0.5).contains(&s.rem_euclid(1.0));
    if inside(x) && inside(y) { 1.0 } else { 0.0 }
}

/// Copy interior values into the periodic ghost cells.
fn fill_periodic(q: &mut Array4, domain: &ProblemDomain) {
    let bx = *q.index_box();
    for p in bx.iter() {
        if domain.bx.contains(p) {
            continue;
        }
        let src = [p[0].rem_euclid(N), p[1].rem_euclid(N), 0];
        let v = q.at(src, 0);
        q.set_at(p, 0, v);
    }
}

/// `q + dt * rate` on the interior.
fn update(q: &Array4, rate: &Array4, dt: f64, interior: &IndexBox) -> Array4 {
    let mut out = q.clone();
    for p in interior.iter() {
        out.set_at(p, 0, q.at(p, 0) + dt * rate.at(p, 0));
    }
    out
}

fn report(name: &str, q: &Array4, domain: &ProblemDomain, mass0: f64, t: f64) {
    let h = domain.dx(Axis::X);
    let mass = q.sum(&domain.bx, 0) * h * h;
    let (lo, hi) = q.min_max(&domain.bx, 0);
    let l1: f64 = domain
        .bx
        .iter()
        .map(|p| {
            let x = (p[0] as f64 + 0.5) * h - U[0] * t;
            let y = (p[1] as f64 + 0.5) * h - U[1] * t;
            (q.at(p, 0) - step(x, y)).abs()
        })
        .sum::<f64>()
        * h
        * h;
    println!(
        "{name:<10} mass drift {:>10.2e}  min {lo:>9.2e}  max {hi:>8.5}  L1 error {l1:.4e}",
        mass - mass0
    );
}

fn main() {
    env_logger::init();

    let h = 1.0 / N as f64;
    let domain = ProblemDomain::uniform_2d(N, N, h);
    let cfl = 0.8;
    let dt = cfl * h / U[0];
    let n_steps = (1.0 / dt).round() as usize;
    let t_final = n_steps as f64 * dt;

    println!("Periodic step advection");
    println!("=======================");
    println!("Grid: {N} x {N}");
    println!("Velocity: ({}, {})", U[0], U[1]);
    println!("Steps: {n_steps} (dt = {dt:.4e})");
    println!();

    let mut q0 = Array4::from_fn(domain.bx.grow(SpaceDim::Two, HALO), 1, |i, j, _, _| {
        step((i as f64 + 0.5) * h, (j as f64 + 0.5) * h)
    });
    fill_periodic(&mut q0, &domain);
    let mass0 = q0.sum(&domain.bx, 0) * h * h;
    let umac = FaceData::from_fn(&domain.bx, SpaceDim::Two, 1, 1, |axis, _, _, _, _| {
        U[axis.index()]
    });
    let bcs = [BcRec::periodic()];

    for recon in [Reconstruction::Plm, Reconstruction::Ppm] {
        let config = GodunovConfig::new().with_reconstruction(recon);
        let mut q = q0.clone();
        for _ in 0..n_steps {
            let input = AdvectionInput::new(&q, &umac, &bcs, &[true]);
            let rate = match compute_godunov_advection(&domain.bx, 1, &input, &domain, dt, &config) {
                Ok(rate) => rate,
                Err(e) => {
                    eprintln!("godunov {recon} failed: {e}");
                    return;
                }
            };
            q = update(&q, &rate, dt, &domain.bx);
            fill_periodic(&mut q, &domain);
        }
        report(&format!("godunov {recon}"), &q, &domain, mass0, t_final);
    }

    // Method of lines with Heun's method
    let mol_rate = |q: &Array4| {
        compute_convective_fluxes(&domain.bx, 1, q, &umac, &bcs, &domain)
            .and_then(|fluxes| compute_convective_rate(&domain.bx, 1, &fluxes, &domain))
    };
    let mut q = q0.clone();
    let dt_mol = 0.5 * dt;
    for _ in 0..2 * n_steps {
        let stage = mol_rate(&q).map(|k1| {
            let mut q1 = update(&q, &k1, dt_mol, &domain.bx);
            fill_periodic(&mut q1, &domain);
            (k1, q1)
        });
        let next = stage.and_then(|(k1, q1)| {
            mol_rate(&q1).map(|k2| {
                let mut half = update(&q, &k1, 0.5 * dt_mol, &domain.bx);
                for p in domain.bx.iter() {
                    half.set_at(p, 0, half.at(p, 0) + 0.5 * dt_mol * k2.at(p, 0));
                }
                half
            })
        });
        match next {
            Ok(mut next) => {
                fill_periodic(&mut next, &domain);
                q = next;
            }
            Err(e) => {
                eprintln!("mol failed: {e}");
                return;
            }
        }
    }
    report("mol rk2", &q, &domain, mass0, t_final);

    log::info!("finished {n_steps} steps on {}", domain.bx);
}
