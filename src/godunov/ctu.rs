//! Corner transport upwind coupling of traced face states.
//!
//! Three passes, each writing its own arrays and reading only those of
//! earlier passes:
//! 1. edge states: traced pairs under the boundary rules, optionally with
//!    half a step of forcing, upwinded to provisional states
//! 2. corner states (3-D only): each face corrected by one transverse
//!    direction and upwinded again
//! 3. final states: each face corrected by its transverse directions and
//!    resolved by upwinding or by Burgers' rule

use crate::boundary::{BcRec, FacePair, clip_outflow, set_edge_bcs};
use crate::field::{Array4, FaceData};
use crate::flux::{burgers_state, upwind_state};
use crate::mesh::ProblemDomain;
use crate::predict::FaceTraces;
use crate::types::{Axis, IndexBox, SpaceDim};

/// Discretization of a transverse derivative term `a ds/dx_t`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransverseForm {
    /// `-d(a s)/dx_t`
    Conservative,
    /// `-d(a s)/dx_t + q da/dx_t`
    NonConservative,
    /// `-avg(a) ds/dx_t`
    Advective,
}

impl TransverseForm {
    /// Flux form matching a component's conservative flag.
    pub fn from_conservative(conservative: bool) -> Self {
        if conservative {
            TransverseForm::Conservative
        } else {
            TransverseForm::NonConservative
        }
    }
}

/// Riemann solution used in the final pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Riemann {
    /// Upwind by the advecting velocity, every component
    Upwind,
    /// Burgers' rule on the normal velocity component only
    Burgers,
}

/// Shared inputs of the three passes.
pub(crate) struct Ctu<'a> {
    /// Cell field supplying ghost values and `q` in the flux form
    pub q: &'a Array4,
    /// Advecting velocity on faces grown by one cell tangentially
    pub adv: &'a FaceData,
    pub forces: Option<&'a Array4>,
    pub bcs: &'a [BcRec],
    pub domain: &'a ProblemDomain,
    pub dt: f64,
    pub is_velocity: bool,
    pub use_forces_in_trans: bool,
}

/// Output of the first pass.
pub(crate) struct EdgeStates {
    pub traces: FaceTraces,
    pub provisional: FaceData,
}

/// Face states of axis `d` corrected by transverse axis `t`, stored on the
/// `d`-faces grown by one cell along the remaining axis.
pub(crate) struct CornerStates {
    arrays: [[Array4; 3]; 3],
}

impl CornerStates {
    fn get(&self, d: Axis, t: Axis) -> &Array4 {
        &self.arrays[d.index()][t.index()]
    }
}

impl Ctu<'_> {
    #[inline]
    fn half_force(&self, c: [i32; 3], n: usize) -> f64 {
        self.forces.map_or(0.0, |f| 0.5 * self.dt * f.at(c, n))
    }

    #[inline]
    fn apply_bcs(&self, axis: Axis, f: [i32; 3], n: usize, pair: FacePair) -> FacePair {
        set_edge_bcs(f, n, axis, self.q, pair, &self.bcs[n], self.domain, self.is_velocity)
    }

    /// Transverse increment for the side cell `c`, reading `state` on the
    /// `t`-faces `c` and `c + e_t`.
    #[inline]
    fn transverse(
        &self,
        form: TransverseForm,
        coef: f64,
        state: &Array4,
        t: Axis,
        c: [i32; 3],
        n: usize,
    ) -> f64 {
        let ct = t.shift(c, 1);
        let adv = &self.adv[t];
        let (a0, a1) = (adv.at(c, 0), adv.at(ct, 0));
        let (s0, s1) = (state.at(c, n), state.at(ct, n));
        match form {
            TransverseForm::Conservative => -coef * (a1 * s1 - a0 * s0),
            TransverseForm::NonConservative => {
                -coef * (a1 * s1 - a0 * s0) + coef * self.q.at(c, n) * (a1 - a0)
            }
            TransverseForm::Advective => -coef * 0.5 * (a1 + a0) * (s1 - s0),
        }
    }

    fn edge_pair(&self, raw: &FaceTraces, axis: Axis, f: [i32; 3], n: usize) -> FacePair {
        let mut pair = raw.pair(axis, f, n);
        if self.use_forces_in_trans {
            pair = pair.shifted(self.half_force(axis.shift(f, -1), n), self.half_force(f, n));
        }
        self.apply_bcs(axis, f, n, pair)
    }

    /// First pass on the faces of `region` grown by one cell tangentially.
    pub fn edge_states(&self, raw: &FaceTraces, region: &IndexBox, ncomp: usize) -> EdgeStates {
        let dim = self.domain.dim;
        let lo = FaceData::from_fn(region, dim, ncomp, 1, |axis, i, j, k, n| {
            self.edge_pair(raw, axis, [i, j, k], n).lo
        });
        let hi = FaceData::from_fn(region, dim, ncomp, 1, |axis, i, j, k, n| {
            self.edge_pair(raw, axis, [i, j, k], n).hi
        });
        let traces = FaceTraces { lo, hi };
        let provisional = FaceData::from_fn(region, dim, ncomp, 1, |axis, i, j, k, n| {
            let f = [i, j, k];
            upwind_state(traces.pair(axis, f, n), self.adv[axis].at(f, 0))
        });
        EdgeStates {
            traces,
            provisional,
        }
    }

    /// Second pass, three-dimensional problems only.
    pub fn corner_states(
        &self,
        edges: &EdgeStates,
        forms: &[TransverseForm],
        region: &IndexBox,
        ncomp: usize,
    ) -> CornerStates {
        let arrays = std::array::from_fn(|di| {
            std::array::from_fn(|ti| {
                if di == ti {
                    return Array4::empty();
                }
                let (d, t) = (Axis::from_index(di), Axis::from_index(ti));
                let bx = region.surrounding_nodes(d).grow_axis(d.third(t), 1);
                let coef = self.dt / (3.0 * self.domain.dx(t));
                let prov = &edges.provisional[t];
                Array4::from_fn(bx, ncomp, |i, j, k, n| {
                    let f = [i, j, k];
                    let base = edges.traces.pair(d, f, n);
                    let lo = base.lo + self.transverse(forms[n], coef, prov, t, d.shift(f, -1), n);
                    let hi = base.hi + self.transverse(forms[n], coef, prov, t, f, n);
                    let pair = self.apply_bcs(d, f, n, FacePair::new(lo, hi));
                    upwind_state(pair, self.adv[d].at(f, 0))
                })
            })
        });
        CornerStates { arrays }
    }

    /// Final pass on the faces of `region`.
    ///
    /// With [`Riemann::Burgers`] the output has a single component, the
    /// normal velocity of each axis.
    #[allow(clippy::too_many_arguments)]
    pub fn final_states(
        &self,
        edges: &EdgeStates,
        corners: Option<&CornerStates>,
        forms: &[TransverseForm],
        region: &IndexBox,
        ncomp: usize,
        riemann: Riemann,
    ) -> FaceData {
        let dim = self.domain.dim;
        let out_ncomp = match riemann {
            Riemann::Upwind => ncomp,
            Riemann::Burgers => 1,
        };
        FaceData::from_fn(region, dim, out_ncomp, 0, |d, i, j, k, m| {
            let n = match riemann {
                Riemann::Upwind => m,
                Riemann::Burgers => d.index(),
            };
            let f = [i, j, k];
            let (cl, ch) = (d.shift(f, -1), f);
            let FacePair { mut lo, mut hi } = edges.traces.pair(d, f, n);
            for t in dim.transverse(d) {
                let state = match corners {
                    Some(c) => c.get(t, d.third(t)),
                    None => &edges.provisional[t],
                };
                let coef = 0.5 * self.dt / self.domain.dx(t);
                lo += self.transverse(forms[n], coef, state, t, cl, n);
                hi += self.transverse(forms[n], coef, state, t, ch, n);
            }
            if !self.use_forces_in_trans {
                lo += self.half_force(cl, n);
                hi += self.half_force(ch, n);
            }

            let u = self.adv[d].at(f, 0);
            let bc = &self.bcs[n];
            let pair = self.apply_bcs(d, f, n, FacePair::new(lo, hi));
            let pair = clip_outflow(f, n, d, pair, u, bc, self.domain, self.is_velocity);
            match riemann {
                Riemann::Upwind => upwind_state(pair, u),
                Riemann::Burgers => burgers_state(pair),
            }
        })
    }

    /// All three passes.
    pub fn predict(
        &self,
        raw: &FaceTraces,
        forms: &[TransverseForm],
        region: &IndexBox,
        ncomp: usize,
        riemann: Riemann,
    ) -> FaceData {
        let edges = self.edge_states(raw, region, ncomp);
        let corners = (self.domain.dim == SpaceDim::Three)
            .then(|| self.corner_states(&edges, forms, region, ncomp));
        self.final_states(&edges, corners.as_ref(), forms, region, ncomp, riemann)
    }
}
