// ============================================================================
// Tolerance Bounds
// Minimum/maximum pair for a pin band or a measured hole
// ============================================================================

use crate::numeric::Diameter;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Closed interval `[min, max]` of diameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ToleranceBounds {
    pub min: Diameter,
    pub max: Diameter,
}

impl ToleranceBounds {
    /// Create bounds from two values in either order.
    pub fn ordered(a: Diameter, b: Diameter) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Returns true if `value` lies within the bounds, inclusive
    pub fn contains(&self, value: Diameter) -> bool {
        value >= self.min && value <= self.max
    }

    /// Returns the size of the band
    pub fn width(&self) -> Diameter {
        self.max - self.min
    }

    pub fn as_tuple(&self) -> (Diameter, Diameter) {
        (self.min, self.max)
    }
}

impl From<ToleranceBounds> for (Diameter, Diameter) {
    fn from(bounds: ToleranceBounds) -> Self {
        bounds.as_tuple()
    }
}

impl fmt::Display for ToleranceBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} .. {}", self.min, self.max)
    }
}
