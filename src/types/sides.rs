//! Low/high side pairs with named fields.
//!
//! Every axis has a low and a high domain edge. [`AxisSides`] keeps the
//! two together so per-edge settings never depend on array ordering.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A value for the low and the high side of one axis.
///
/// # Example
///
/// ```
/// use godunov_rs::types::AxisSides;
///
/// let s = AxisSides::new(1, 2);
/// assert_eq!(s.lo, 1);
/// assert_eq!(AxisSides::uniform(5).hi, 5);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AxisSides<T> {
    /// Low side (minimum index)
    pub lo: T,
    /// High side (maximum index)
    pub hi: T,
}

impl<T> AxisSides<T> {
    /// Create from explicit low and high values.
    pub const fn new(lo: T, hi: T) -> Self {
        Self { lo, hi }
    }

    /// Same value on both sides.
    pub fn uniform(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            lo: value.clone(),
            hi: value,
        }
    }
}
