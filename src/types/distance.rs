//! Shortest-path distance values.

use std::fmt;

use super::Weight;

/// A shortest-path distance: finite, or the unreachable sentinel.
///
/// The derived order puts every `Finite` value below `Infinite`, which is
/// exactly the order the relaxation loop compares candidates in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Distance {
    /// Reachable at this total edge weight.
    Finite(Weight),
    /// Not reachable from the start node.
    Infinite,
}

impl Distance {
    /// Zero distance (a start node's distance to itself).
    pub const ZERO: Distance = Distance::Finite(0);

    /// True unless this is the unreachable sentinel.
    pub fn is_finite(self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    /// The finite value, or `None` for the unreachable sentinel.
    pub fn value(self) -> Option<Weight> {
        match self {
            Distance::Finite(w) => Some(w),
            Distance::Infinite => None,
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(w) => write!(f, "{}", w),
            Distance::Infinite => write!(f, "inf"),
        }
    }
}
