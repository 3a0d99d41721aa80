//! Structured-grid description.
//!
//! The convection kernels work on one rectangular patch at a time. The only
//! global information they need is where the physical domain ends and how
//! large a cell is, both carried by [`ProblemDomain`].

mod domain;

pub use domain::ProblemDomain;
