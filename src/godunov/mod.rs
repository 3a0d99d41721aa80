//! Unsplit Godunov (corner transport upwind) convection.
//!
//! Two entry points share one coupling engine:
//!
//! - [`compute_godunov_advection`] advects cell fields by a projected MAC
//!   velocity and returns their convective rate; [`predict_edge_states`]
//!   stops at the face states.
//! - [`predict_godunov`] predicts the face-normal velocity from the cell
//!   velocity before projection, with transverse velocities from
//!   [`make_trans_velocities`].
//!
//! In 3-D the transverse correction of a face goes through corner states,
//! the faces of each transverse direction corrected by the third one, with
//! weight `dt/3`. The final correction has weight `dt/2`.

mod advection;
mod ctu;
mod trans_vel;
mod velocity;

pub use advection::{AdvectionInput, compute_godunov_advection, predict_edge_states};
pub use ctu::TransverseForm;
pub use trans_vel::make_trans_velocities;
pub use velocity::predict_godunov;
