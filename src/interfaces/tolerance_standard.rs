// ============================================================================
// Tolerance Standard Interface
// Defines the contract for gauge pin tolerance tables
// ============================================================================

use crate::domain::{ToleranceClass, UnitSystem};
use crate::numeric::{CalcError, CalcResult, Diameter};

/// One row of a tolerance table: every nominal up to and including
/// `upper_inclusive` (and above the previous row's bound) gets these
/// tolerances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToleranceRange {
    pub upper_inclusive: Diameter,
    /// Indexed by [`ToleranceClass::index`]
    pub tolerances: [Diameter; 5],
}

impl ToleranceRange {
    pub const fn new(upper_inclusive: Diameter, tolerances: [Diameter; 5]) -> Self {
        Self {
            upper_inclusive,
            tolerances,
        }
    }

    #[inline]
    pub fn tolerance(&self, class: ToleranceClass) -> Diameter {
        self.tolerances[class.index()]
    }
}

/// Nominal diameters a table covers: `lower_exclusive < d <= upper_inclusive`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NominalSpan {
    pub lower_exclusive: Diameter,
    pub upper_inclusive: Diameter,
}

impl NominalSpan {
    pub const fn new(lower_exclusive: Diameter, upper_inclusive: Diameter) -> Self {
        Self {
            lower_exclusive,
            upper_inclusive,
        }
    }

    #[inline]
    pub fn contains(&self, nominal: Diameter) -> bool {
        nominal > self.lower_exclusive && nominal <= self.upper_inclusive
    }
}

/// Strategy interface for tolerance tables.
/// Implementations: ASME B89.1.5 gauge pins.
pub trait ToleranceStandard: Send + Sync {
    /// Name of the standard for logging
    fn name(&self) -> &str;

    /// Supported nominal span for `units`
    fn span(&self, units: UnitSystem) -> NominalSpan;

    /// Rows for `units`, sorted ascending by upper bound without gaps.
    /// The last row's bound must equal the span's upper bound.
    fn ranges(&self, units: UnitSystem) -> &[ToleranceRange];

    /// Look up the tolerance magnitude for a nominal diameter.
    ///
    /// A nominal exactly equal to a row's upper bound belongs to that row.
    ///
    /// # Errors
    /// Returns `OutOfRange` if the nominal is outside [`Self::span`].
    fn tolerance(
        &self,
        nominal: Diameter,
        class: ToleranceClass,
        units: UnitSystem,
    ) -> CalcResult<Diameter> {
        let out_of_range = || CalcError::OutOfRange { nominal, units };

        if !self.span(units).contains(nominal) {
            return Err(out_of_range());
        }

        let ranges = self.ranges(units);
        let idx = ranges.partition_point(|range| range.upper_inclusive < nominal);
        ranges
            .get(idx)
            .map(|range| range.tolerance(class))
            .ok_or_else(out_of_range)
    }
}
