//! Limited slopes of cell-centered fields.
//!
//! - [`slope2`]: three-point monotonized-central limiter
//! - [`slope4`]: five-point fourth-order limiter
//! - `*_extdir`: the same with one-sided closures next to domain edges
//!   whose ghost value is prescribed or extrapolated
//! - [`eb_slopes`]: least-squares gradient on cut cells
//!
//! All slopes are per cell width; divide by `dx` for a physical gradient.

mod eb;
mod high_order;
mod regular;
pub mod traits;

pub use eb::{EbSlope, compute_eb_slopes, eb_slopes, eb_slopes_extdir, is_regular_along};
pub use high_order::{slope4, slope4_at, slope4_extdir, slope4_extdir_at};
pub use regular::{slope2, slope2_at, slope2_extdir, slope2_extdir_at};
pub use traits::{FourthOrderSlope, SecondOrderSlope, SlopeLimiter, SlopeOrder};
