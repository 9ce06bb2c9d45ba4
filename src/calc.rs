// ============================================================================
// Entry Points
// The four calculations at twelve significant digits against ASME B89.1.5
// ============================================================================

use crate::domain::{PinSpec, UnitSystem};
use crate::engine::{missing_pin, nominal_hole, resolve_pin_bounds, toleranced_hole, AsmeB89};
use crate::numeric::{CalcResult, DecimalContext, Diameter};

/// Bore diameter that three pins of nominal size measure.
///
/// # Example
/// ```
/// use rust_decimal_macros::dec;
///
/// let hole = holecalc::hole_from_nominal(dec!(1), dec!(2), dec!(3)).unwrap();
/// assert_eq!(hole.round_dp(3), dec!(6.000));
/// ```
pub fn hole_from_nominal(pin1: Diameter, pin2: Diameter, pin3: Diameter) -> CalcResult<Diameter> {
    nominal_hole(&DecimalContext::default(), pin1, pin2, pin3)
}

/// `(min, max)` bore diameter that three toleranced gauge pins measure.
pub fn hole_bounds_from_tolerance_classes(
    pin1: &PinSpec,
    pin2: &PinSpec,
    pin3: &PinSpec,
    units: UnitSystem,
) -> CalcResult<(Diameter, Diameter)> {
    toleranced_hole(&AsmeB89, &DecimalContext::default(), [pin1, pin2, pin3], units)
        .map(Into::into)
}

/// Third pin diameter that measures `bore` together with two known pins.
///
/// # Example
/// ```
/// use rust_decimal_macros::dec;
///
/// let pin = holecalc::remaining_pin(dec!(6), dec!(1), dec!(2)).unwrap();
/// assert_eq!(pin.round_dp(4), dec!(3.0000));
/// ```
pub fn remaining_pin(bore: Diameter, pin1: Diameter, pin2: Diameter) -> CalcResult<Diameter> {
    missing_pin(&DecimalContext::default(), bore, pin1, pin2)
}

/// `(min, max)` diameter of a single gauge pin.
pub fn pin_tolerance_bounds(spec: &PinSpec, units: UnitSystem) -> CalcResult<(Diameter, Diameter)> {
    resolve_pin_bounds(&AsmeB89, &DecimalContext::default(), spec, units).map(Into::into)
}
