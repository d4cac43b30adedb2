//! Axis selectors for swizzled component access.

use std::fmt;

/// One component axis of a 2/3/4-vector.
///
/// Axes are used as swizzle selectors: `v.swizzle([Axis::Z, Axis::X])`
/// gathers `(v.z, v.x)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Axis {
    /// First component
    X = 0,
    /// Second component
    Y = 1,
    /// Third component
    Z = 2,
    /// Fourth component
    W = 3,
}

impl Axis {
    /// All axes in component order.
    pub const ALL: [Axis; 4] = [Axis::X, Axis::Y, Axis::Z, Axis::W];

    /// Component index of this axis.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Axis at component index `i`, if any.
    #[inline]
    pub const fn from_index(i: usize) -> Option<Self> {
        match i {
            0 => Some(Axis::X),
            1 => Some(Axis::Y),
            2 => Some(Axis::Z),
            3 => Some(Axis::W),
            _ => None,
        }
    }

    /// Lower-case component name.
    #[inline]
    pub const fn name(self) -> char {
        match self {
            Axis::X => 'x',
            Axis::Y => 'y',
            Axis::Z => 'z',
            Axis::W => 'w',
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl TryFrom<char> for Axis {
    type Error = crate::Error;

    fn try_from(c: char) -> crate::Result<Self> {
        match c {
            'x' | 'r' | 's' => Ok(Axis::X),
            'y' | 'g' | 't' => Ok(Axis::Y),
            'z' | 'b' | 'p' => Ok(Axis::Z),
            'w' | 'a' | 'q' => Ok(Axis::W),
            _ => Err(crate::Error::other(format!("unknown axis '{c}'"))),
        }
    }
}
