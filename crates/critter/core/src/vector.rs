use std::fmt;
use std::ops::Add;

/// Discrete grid coordinate expressed in cell units.
///
/// `y` grows downward, so row 0 is the top line of a rendered map. A vector
/// carries no bounds of its own; whether it lies inside a particular grid is
/// answered by [`crate::Grid::is_inside`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector {
    pub x: i32,
    pub y: i32,
}

impl Vector {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the vector translated by `other`.
    #[must_use]
    pub const fn plus(self, other: Vector) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Default for Vector {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        self.plus(rhs)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
