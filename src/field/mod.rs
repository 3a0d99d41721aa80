//! Cell- and face-centered data containers.
//!
//! - [`Array4`]: multi-component values over an [`IndexBox`](crate::types::IndexBox)
//! - [`FaceData`]: one face-centered `Array4` per axis (MAC velocities,
//!   edge states, fluxes)
//!
//! Kernels in this crate are pure maps from a read-only neighborhood to one
//! output value, expressed through [`Array4::fill`].

mod array4;
mod face_data;

pub use array4::Array4;
pub use face_data::FaceData;
