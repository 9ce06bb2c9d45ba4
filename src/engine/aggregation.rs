// ============================================================================
// Aggregation
// Hole bounds from toleranced pins, nominal holes and the reverse calculation
// ============================================================================

use super::descartes::solve_fourth_circle;
use super::tolerance_table::resolve_pin_bounds;
use crate::domain::{PinPosition, PinSpec, ToleranceBounds, UnitSystem};
use crate::interfaces::ToleranceStandard;
use crate::numeric::{
    CalcError, CalcResult, DecimalContext, Diameter, GeometryFault, PinFailures, SolveMode,
};
use tracing::debug;

/// Bore measured by three pins at their nominal diameters.
pub fn nominal_hole(
    ctx: &DecimalContext,
    pin1: Diameter,
    pin2: Diameter,
    pin3: Diameter,
) -> CalcResult<Diameter> {
    solve_fourth_circle(ctx, SolveMode::Hole, pin1, pin2, pin3)
}

/// Pin that completes a three-pin measurement of `bore` alongside `pin1`
/// and `pin2`.
pub fn missing_pin(
    ctx: &DecimalContext,
    bore: Diameter,
    pin1: Diameter,
    pin2: Diameter,
) -> CalcResult<Diameter> {
    if bore.is_zero() {
        return Err(CalcError::ZeroDimension(SolveMode::RemainingPin));
    }
    if bore < Diameter::ZERO {
        debug!("Negative bore {} for pins ({}, {})", bore, pin1, pin2);
        return Err(CalcError::geometry(
            SolveMode::RemainingPin,
            GeometryFault::NonPositivePin,
        ));
    }
    solve_fourth_circle(ctx, SolveMode::RemainingPin, pin1, pin2, -bore)
}

/// Smallest and largest bore three toleranced pins can measure.
///
/// Every pin is resolved before anything is reported, so a failure lists
/// all offending pins. The hole is then solved once with every pin at its
/// minimum and once at its maximum; the two results are returned in
/// ascending order because larger pins do not always give a larger hole.
///
/// # Errors
/// - `PinResolution` if any pin's tolerance lookup fails
/// - any error from the Descartes engine for either pin set
pub fn toleranced_hole(
    standard: &dyn ToleranceStandard,
    ctx: &DecimalContext,
    pins: [&PinSpec; 3],
    units: UnitSystem,
) -> CalcResult<ToleranceBounds> {
    debug!("Attempting to calculate hole size limits");

    let mut resolved = Vec::with_capacity(3);
    let mut failures = PinFailures::new();
    for (position, spec) in PinPosition::ALL.into_iter().zip(pins) {
        match resolve_pin_bounds(standard, ctx, spec, units) {
            Ok(bounds) => resolved.push(bounds),
            Err(err) => failures.push(position, err),
        }
    }

    if !failures.is_empty() {
        debug!("Calculating hole size limits failed: {}", failures);
        return Err(CalcError::PinResolution(failures));
    }

    let min_hole = nominal_hole(ctx, resolved[0].min, resolved[1].min, resolved[2].min)?;
    let max_hole = nominal_hole(ctx, resolved[0].max, resolved[1].max, resolved[2].max)?;
    debug!("Calculated hole size limits, min pins: {} max pins: {}", min_hole, max_hole);

    Ok(ToleranceBounds::ordered(min_hole, max_hole))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Sign, ToleranceClass};
    use crate::engine::AsmeB89;
    use rust_decimal_macros::dec;

    fn ctx() -> DecimalContext {
        DecimalContext::default()
    }

    fn pin(nominal: Diameter, class: ToleranceClass, sign: Sign) -> PinSpec {
        PinSpec::new(nominal, class, sign)
    }

    fn assert_close(actual: Diameter, expected: Diameter, tolerance: Diameter) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "{} not within {} of {}",
            actual,
            tolerance,
            expected
        );
    }

    #[test]
    fn test_tolerance_hole_inch_zz() {
        let p1 = pin(dec!(1.000), ToleranceClass::ZZ, Sign::Plus);
        let p2 = pin(dec!(2.000), ToleranceClass::ZZ, Sign::Plus);
        let p3 = pin(dec!(3.000), ToleranceClass::ZZ, Sign::Plus);

        let hole = toleranced_hole(&AsmeB89, &ctx(), [&p1, &p2, &p3], UnitSystem::Inch).unwrap();
        assert_close(hole.min, dec!(6.0000), dec!(0.00005));
        assert_close(hole.max, dec!(6.0003), dec!(0.00005));
    }

    #[test]
    fn test_tolerance_hole_xx_min_is_nominal() {
        let pins = [dec!(1), dec!(2), dec!(3)].map(|d| pin(d, ToleranceClass::XX, Sign::Plus));

        let hole =
            toleranced_hole(&AsmeB89, &ctx(), [&pins[0], &pins[1], &pins[2]], UnitSystem::Inch)
                .unwrap();
        let nominal = nominal_hole(&ctx(), dec!(1), dec!(2), dec!(3)).unwrap();

        assert_eq!(hole.min, nominal);
        assert!(hole.max > nominal);
    }

    #[test]
    fn test_tolerance_hole_is_sorted() {
        // Growing every pin of a nearly collinear set shrinks the hole
        let pins = [dec!(1.00), dec!(2.00), dec!(3.00)]
            .map(|d| pin(d, ToleranceClass::ZZ, Sign::Plus));

        let hole = toleranced_hole(
            &AsmeB89,
            &ctx(),
            [&pins[0], &pins[1], &pins[2]],
            UnitSystem::Millimeter,
        )
        .unwrap();

        assert!(hole.min <= hole.max);
        assert_close(hole.min, dec!(5.995), dec!(0.001));
        assert_close(hole.max, dec!(6.000), dec!(0.001));
    }

    #[test]
    fn test_tolerance_hole_mixed_classes_mm() {
        let p1 = pin(dec!(64.25), ToleranceClass::Y, Sign::Plus);
        let p2 = pin(dec!(11.10), ToleranceClass::Z, Sign::Plus);
        let p3 = pin(dec!(25.35), ToleranceClass::ZZ, Sign::Plus);

        let hole =
            toleranced_hole(&AsmeB89, &ctx(), [&p1, &p2, &p3], UnitSystem::Millimeter).unwrap();
        assert_close(hole.min, dec!(240.173), dec!(0.001));
        assert_close(hole.max, dec!(240.219), dec!(0.001));
    }

    #[test]
    fn test_tolerance_hole_reports_every_failing_pin() {
        let p1 = pin(dec!(25), ToleranceClass::X, Sign::Minus);
        let p2 = pin(dec!(2), ToleranceClass::X, Sign::Minus);
        let p3 = pin(dec!(0.0005), ToleranceClass::X, Sign::Minus);

        let err = toleranced_hole(&AsmeB89, &ctx(), [&p1, &p2, &p3], UnitSystem::Inch).unwrap_err();
        let CalcError::PinResolution(failures) = err else {
            panic!("expected pin resolution error, got {:?}", err);
        };

        assert_eq!(failures.len(), 2);
        assert!(failures.get(PinPosition::First).is_some());
        assert!(failures.get(PinPosition::Second).is_none());
        assert_eq!(
            failures.get(PinPosition::Third),
            Some(&CalcError::OutOfRange {
                nominal: dec!(0.0005),
                units: UnitSystem::Inch
            })
        );
    }

    #[test]
    fn test_tolerance_hole_propagates_geometry_error() {
        let p1 = pin(dec!(18), ToleranceClass::X, Sign::Plus);
        let p2 = pin(dec!(1), ToleranceClass::X, Sign::Plus);
        let p3 = pin(dec!(0.01), ToleranceClass::X, Sign::Plus);

        let result = toleranced_hole(&AsmeB89, &ctx(), [&p1, &p2, &p3], UnitSystem::Inch);
        assert_eq!(
            result,
            Err(CalcError::geometry(SolveMode::Hole, GeometryFault::HoleSmallerThanPin))
        );
    }

    #[test]
    fn test_missing_pin() {
        let pin3 = missing_pin(&ctx(), dec!(6), dec!(1), dec!(2)).unwrap();
        assert_close(pin3, dec!(3.0000), dec!(0.0001));

        let hole = nominal_hole(&ctx(), dec!(1), dec!(2), pin3).unwrap();
        assert_close(hole, dec!(6), dec!(0.0001));
    }

    #[test]
    fn test_nominal_hole_rejects_negative_pins() {
        let expected = Err(CalcError::geometry(SolveMode::Hole, GeometryFault::NonPositivePin));
        assert_eq!(nominal_hole(&ctx(), dec!(1), dec!(2), dec!(-6)), expected);
        assert_eq!(nominal_hole(&ctx(), dec!(1), dec!(-6), dec!(2)), expected);
        assert_eq!(nominal_hole(&ctx(), dec!(-6), dec!(1), dec!(2)), expected);
    }

    #[test]
    fn test_nominal_hole_not_enclosing() {
        assert_eq!(
            nominal_hole(&ctx(), dec!(2), dec!(2), dec!(0.4)),
            Err(CalcError::geometry(SolveMode::Hole, GeometryFault::NotEnclosing))
        );
    }

    #[test]
    fn test_missing_pin_negative_bore() {
        assert_eq!(
            missing_pin(&ctx(), dec!(-6), dec!(1), dec!(2)),
            Err(CalcError::geometry(
                SolveMode::RemainingPin,
                GeometryFault::NonPositivePin
            ))
        );
    }

    #[test]
    fn test_missing_pin_invalid() {
        assert_eq!(
            missing_pin(&ctx(), dec!(2), dec!(3), dec!(1)),
            Err(CalcError::geometry(
                SolveMode::RemainingPin,
                GeometryFault::NegativeRadicand
            ))
        );
        assert!(matches!(
            missing_pin(&ctx(), dec!(6), dec!(-3), dec!(1)),
            Err(CalcError::InvalidGeometry {
                mode: SolveMode::RemainingPin,
                ..
            })
        ));
        assert_eq!(
            missing_pin(&ctx(), dec!(0), dec!(3), dec!(1)),
            Err(CalcError::ZeroDimension(SolveMode::RemainingPin))
        );
    }
}
