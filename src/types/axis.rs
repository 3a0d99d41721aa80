//! Coordinate axes and spatial dimensionality.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A coordinate axis of the index space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// All three axes in reduction order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Position of the axis in `[x, y, z]` arrays.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// Axis from its array position.
    ///
    /// # Panics
    /// Panics if `index > 2`.
    #[inline]
    pub const fn from_index(index: usize) -> Self {
        match index {
            0 => Axis::X,
            1 => Axis::Y,
            2 => Axis::Z,
            _ => panic!("axis index out of range"),
        }
    }

    /// Unit index offset along this axis.
    #[inline]
    pub const fn unit(self) -> [i32; 3] {
        match self {
            Axis::X => [1, 0, 0],
            Axis::Y => [0, 1, 0],
            Axis::Z => [0, 0, 1],
        }
    }

    /// Shift an index triple by `offset` cells along this axis.
    #[inline]
    pub fn shift(self, p: [i32; 3], offset: i32) -> [i32; 3] {
        let mut q = p;
        q[self.index()] += offset;
        q
    }

    /// The two other axes, in increasing order.
    #[inline]
    pub const fn others(self) -> [Axis; 2] {
        match self {
            Axis::X => [Axis::Y, Axis::Z],
            Axis::Y => [Axis::X, Axis::Z],
            Axis::Z => [Axis::X, Axis::Y],
        }
    }

    /// The axis that is neither `self` nor `other`.
    ///
    /// # Panics
    /// Panics if `self == other`.
    #[inline]
    pub fn third(self, other: Axis) -> Axis {
        assert_ne!(self, other, "third axis requires two distinct axes");
        Axis::from_index(3 - self.index() - other.index())
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        };
        f.write_str(s)
    }
}

/// Number of active spatial dimensions.
///
/// Two-dimensional problems keep the third index but hold a single
/// k-plane; nothing ever grows or steps along `z` in that case.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SpaceDim {
    Two,
    #[default]
    Three,
}

impl SpaceDim {
    /// Number of active axes.
    #[inline]
    pub const fn count(self) -> usize {
        match self {
            SpaceDim::Two => 2,
            SpaceDim::Three => 3,
        }
    }

    /// Active axes in reduction order.
    #[inline]
    pub fn axes(self) -> &'static [Axis] {
        match self {
            SpaceDim::Two => &Axis::ALL[..2],
            SpaceDim::Three => &Axis::ALL[..],
        }
    }

    /// Whether `axis` is active.
    #[inline]
    pub fn has(self, axis: Axis) -> bool {
        axis.index() < self.count()
    }

    /// Active axes other than `axis`.
    pub fn transverse(self, axis: Axis) -> impl Iterator<Item = Axis> {
        self.axes().iter().copied().filter(move |&a| a != axis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_index_roundtrip() {
        for axis in Axis::ALL {
            assert_eq!(Axis::from_index(axis.index()), axis);
        }
    }

    #[test]
    fn test_shift() {
        assert_eq!(Axis::Y.shift([1, 2, 3], -2), [1, 0, 3]);
        assert_eq!(Axis::Z.unit(), [0, 0, 1]);
    }

    #[test]
    fn test_third_axis() {
        assert_eq!(Axis::X.third(Axis::Y), Axis::Z);
        assert_eq!(Axis::Z.third(Axis::X), Axis::Y);
        assert_eq!(Axis::Y.third(Axis::Z), Axis::X);
    }

    #[test]
    fn test_transverse_axes() {
        let t: Vec<_> = SpaceDim::Two.transverse(Axis::X).collect();
        assert_eq!(t, vec![Axis::Y]);
        let t: Vec<_> = SpaceDim::Three.transverse(Axis::Y).collect();
        assert_eq!(t, vec![Axis::X, Axis::Z]);
        assert!(!SpaceDim::Two.has(Axis::Z));
    }
}
