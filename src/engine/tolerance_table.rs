// ============================================================================
// Gauge Pin Tolerance Tables
// ASME B89.1.5-1998 plug/gauge pin tolerances by diameter range and class
// ============================================================================

use crate::domain::{PinSpec, Sign, ToleranceBounds, UnitSystem};
use crate::interfaces::{NominalSpan, ToleranceRange, ToleranceStandard};
use crate::numeric::{CalcResult, DecimalContext};
use rust_decimal_macros::dec;
use tracing::debug;

// ============================================================================
// Reference Data
// ============================================================================

const INCH_SPAN: NominalSpan = NominalSpan::new(dec!(0.0010), dec!(21.010));

const MILLIMETER_SPAN: NominalSpan = NominalSpan::new(dec!(0.254), dec!(533.65));

// Columns: XX, X, Y, Z, ZZ
static INCH_TABLE: [ToleranceRange; 10] = [
    ToleranceRange::new(
        dec!(0.825),
        [dec!(0.000020), dec!(0.000040), dec!(0.000070), dec!(0.000100), dec!(0.000200)],
    ),
    ToleranceRange::new(
        dec!(1.510),
        [dec!(0.000030), dec!(0.000060), dec!(0.000090), dec!(0.000120), dec!(0.000240)],
    ),
    ToleranceRange::new(
        dec!(2.510),
        [dec!(0.000040), dec!(0.000080), dec!(0.000120), dec!(0.000160), dec!(0.000320)],
    ),
    ToleranceRange::new(
        dec!(4.510),
        [dec!(0.000050), dec!(0.000100), dec!(0.000150), dec!(0.000200), dec!(0.000400)],
    ),
    ToleranceRange::new(
        dec!(6.510),
        [dec!(0.000065), dec!(0.000130), dec!(0.000190), dec!(0.000250), dec!(0.000500)],
    ),
    ToleranceRange::new(
        dec!(9.010),
        [dec!(0.000080), dec!(0.000160), dec!(0.000240), dec!(0.000320), dec!(0.000640)],
    ),
    ToleranceRange::new(
        dec!(12.010),
        [dec!(0.000100), dec!(0.000200), dec!(0.000300), dec!(0.000400), dec!(0.000800)],
    ),
    ToleranceRange::new(
        dec!(15.010),
        [dec!(0.000150), dec!(0.000300), dec!(0.000450), dec!(0.000600), dec!(0.001200)],
    ),
    ToleranceRange::new(
        dec!(18.010),
        [dec!(0.000200), dec!(0.000400), dec!(0.000600), dec!(0.000800), dec!(0.001600)],
    ),
    ToleranceRange::new(
        dec!(21.010),
        [dec!(0.000250), dec!(0.000500), dec!(0.000750), dec!(0.001000), dec!(0.002000)],
    ),
];

static MILLIMETER_TABLE: [ToleranceRange; 10] = [
    ToleranceRange::new(
        dec!(20.96),
        [dec!(0.00051), dec!(0.00102), dec!(0.00178), dec!(0.00254), dec!(0.00508)],
    ),
    ToleranceRange::new(
        dec!(38.35),
        [dec!(0.00076), dec!(0.00152), dec!(0.00229), dec!(0.00305), dec!(0.00610)],
    ),
    ToleranceRange::new(
        dec!(63.75),
        [dec!(0.00102), dec!(0.00203), dec!(0.00305), dec!(0.00406), dec!(0.00813)],
    ),
    ToleranceRange::new(
        dec!(114.55),
        [dec!(0.00127), dec!(0.00254), dec!(0.00381), dec!(0.00508), dec!(0.01016)],
    ),
    ToleranceRange::new(
        dec!(165.35),
        [dec!(0.00165), dec!(0.00330), dec!(0.00483), dec!(0.00635), dec!(0.01270)],
    ),
    ToleranceRange::new(
        dec!(228.85),
        [dec!(0.00203), dec!(0.00406), dec!(0.00610), dec!(0.00813), dec!(0.01626)],
    ),
    ToleranceRange::new(
        dec!(305.05),
        [dec!(0.00254), dec!(0.00508), dec!(0.00762), dec!(0.01016), dec!(0.02032)],
    ),
    ToleranceRange::new(
        dec!(381.25),
        [dec!(0.00381), dec!(0.00762), dec!(0.01143), dec!(0.01524), dec!(0.03048)],
    ),
    ToleranceRange::new(
        dec!(457.45),
        [dec!(0.00508), dec!(0.01016), dec!(0.01524), dec!(0.02032), dec!(0.04064)],
    ),
    ToleranceRange::new(
        dec!(533.65),
        [dec!(0.00635), dec!(0.01270), dec!(0.01905), dec!(0.02540), dec!(0.05080)],
    ),
];

// ============================================================================
// ASME B89.1.5
// ============================================================================

/// Gauge pin tolerances published in ASME B89.1.5-1998.
#[derive(Debug, Clone, Copy, Default)]
pub struct AsmeB89;

impl AsmeB89 {
    pub fn new() -> Self {
        Self
    }
}

impl ToleranceStandard for AsmeB89 {
    fn name(&self) -> &str {
        "ASME B89.1.5"
    }

    fn span(&self, units: UnitSystem) -> NominalSpan {
        match units {
            UnitSystem::Inch => INCH_SPAN,
            UnitSystem::Millimeter => MILLIMETER_SPAN,
        }
    }

    fn ranges(&self, units: UnitSystem) -> &[ToleranceRange] {
        match units {
            UnitSystem::Inch => &INCH_TABLE,
            UnitSystem::Millimeter => &MILLIMETER_TABLE,
        }
    }
}

// ============================================================================
// Pin Bounds
// ============================================================================

/// Minimum and maximum diameter of a gauge pin.
///
/// A `Plus` pin is `nominal .. nominal + tolerance`, a `Minus` pin is
/// `nominal - tolerance .. nominal`.
///
/// # Errors
/// Returns `OutOfRange` if the nominal is outside the standard's span.
pub fn resolve_pin_bounds(
    standard: &dyn ToleranceStandard,
    ctx: &DecimalContext,
    spec: &PinSpec,
    units: UnitSystem,
) -> CalcResult<ToleranceBounds> {
    debug!(
        "Calculating pin tolerance bounds: {} dia, {} class, {} sign, units {} ({})",
        spec.nominal,
        spec.class,
        spec.sign,
        units,
        standard.name()
    );

    let tolerance = standard.tolerance(spec.nominal, spec.class, units)?;

    let bounds = match spec.sign {
        Sign::Plus => ToleranceBounds {
            min: spec.nominal,
            max: ctx.add(spec.nominal, tolerance)?,
        },
        Sign::Minus => ToleranceBounds {
            min: ctx.sub(spec.nominal, tolerance)?,
            max: spec.nominal,
        },
    };

    debug!("Calculated pin tolerance bounds: {}", bounds);
    Ok(bounds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ToleranceClass;
    use crate::numeric::{CalcError, Diameter};
    use quickcheck::quickcheck;

    fn bounds(
        nominal: Diameter,
        class: ToleranceClass,
        sign: Sign,
        units: UnitSystem,
    ) -> CalcResult<ToleranceBounds> {
        resolve_pin_bounds(
            &AsmeB89,
            &DecimalContext::default(),
            &PinSpec::new(nominal, class, sign),
            units,
        )
    }

    fn tolerance(nominal: Diameter, class: ToleranceClass, units: UnitSystem) -> Diameter {
        let b = bounds(nominal, class, Sign::Plus, units).unwrap();
        b.max - b.min
    }

    #[test]
    fn test_tables_sorted_and_closed() {
        for units in [UnitSystem::Inch, UnitSystem::Millimeter] {
            let ranges = AsmeB89.ranges(units);
            assert!(ranges
                .windows(2)
                .all(|w| w[0].upper_inclusive < w[1].upper_inclusive));
            assert_eq!(
                ranges.last().unwrap().upper_inclusive,
                AsmeB89.span(units).upper_inclusive
            );
            // Looser classes never have a smaller tolerance
            for range in ranges {
                assert!(range.tolerances.windows(2).all(|w| w[0] < w[1]));
            }
        }
    }

    #[test]
    fn test_zz_minus_inch() {
        let b = bounds(dec!(1.000), ToleranceClass::ZZ, Sign::Minus, UnitSystem::Inch).unwrap();
        assert_eq!(b.max, dec!(1.000000));
        assert_eq!(b.min, dec!(1.000000) - dec!(0.000240));
    }

    #[test]
    fn test_plus_sign_inch_small() {
        let b = bounds(dec!(0.2500), ToleranceClass::XX, Sign::Plus, UnitSystem::Inch).unwrap();
        assert_eq!(b.min, dec!(0.2500));
        assert_eq!(b.max, dec!(0.250020));
    }

    #[test]
    fn test_inch_large_tolerances() {
        for (class, expected) in [
            (ToleranceClass::XX, dec!(0.000100)),
            (ToleranceClass::X, dec!(0.000200)),
            (ToleranceClass::Y, dec!(0.000300)),
            (ToleranceClass::Z, dec!(0.000400)),
            (ToleranceClass::ZZ, dec!(0.000800)),
        ] {
            for nominal in [dec!(9.0101), dec!(10.5), dec!(12.010)] {
                assert_eq!(tolerance(nominal, class, UnitSystem::Inch), expected);
            }
        }
    }

    #[test]
    fn test_mm_tolerances() {
        for (class, small, large) in [
            (ToleranceClass::XX, dec!(0.00051), dec!(0.00254)),
            (ToleranceClass::X, dec!(0.00102), dec!(0.00508)),
            (ToleranceClass::Y, dec!(0.00178), dec!(0.00762)),
            (ToleranceClass::Z, dec!(0.00254), dec!(0.01016)),
            (ToleranceClass::ZZ, dec!(0.00508), dec!(0.02032)),
        ] {
            assert_eq!(tolerance(dec!(1.25), class, UnitSystem::Millimeter), small);
            assert_eq!(tolerance(dec!(250.000), class, UnitSystem::Millimeter), large);
        }
    }

    #[test]
    fn test_boundary_is_upper_inclusive() {
        let epsilon = dec!(0.0001);
        for units in [UnitSystem::Inch, UnitSystem::Millimeter] {
            let ranges = AsmeB89.ranges(units);
            for (i, range) in ranges.iter().enumerate() {
                let boundary = range.upper_inclusive;
                let at = tolerance(boundary, ToleranceClass::ZZ, units);
                let below = tolerance(boundary - epsilon, ToleranceClass::ZZ, units);
                assert_eq!(at, range.tolerance(ToleranceClass::ZZ));
                assert_eq!(below, at);

                match ranges.get(i + 1) {
                    Some(next) => {
                        let above = tolerance(boundary + epsilon, ToleranceClass::ZZ, units);
                        assert_eq!(above, next.tolerance(ToleranceClass::ZZ));
                    }
                    None => {
                        assert!(bounds(boundary + epsilon, ToleranceClass::ZZ, Sign::Plus, units)
                            .is_err());
                    }
                }
            }
        }
    }

    #[test]
    fn test_out_of_range() {
        let cases = [
            (dec!(0.0010), UnitSystem::Inch),
            (dec!(0.0005), UnitSystem::Inch),
            (dec!(21.011), UnitSystem::Inch),
            (dec!(0.254), UnitSystem::Millimeter),
            (dec!(533.66), UnitSystem::Millimeter),
            (dec!(-1), UnitSystem::Millimeter),
        ];
        for (nominal, units) in cases {
            assert_eq!(
                bounds(nominal, ToleranceClass::X, Sign::Plus, units),
                Err(CalcError::OutOfRange { nominal, units })
            );
        }
    }

    #[test]
    fn test_span_lower_bound_exclusive() {
        assert!(bounds(dec!(0.0011), ToleranceClass::X, Sign::Plus, UnitSystem::Inch).is_ok());
        assert!(bounds(dec!(0.255), ToleranceClass::X, Sign::Plus, UnitSystem::Millimeter).is_ok());
    }

    #[test]
    fn test_units_are_not_converted() {
        // 21.5 is beyond the inch table but well inside the millimeter one
        assert!(bounds(dec!(21.5), ToleranceClass::Y, Sign::Plus, UnitSystem::Inch).is_err());
        assert_eq!(
            tolerance(dec!(21.5), ToleranceClass::Y, UnitSystem::Millimeter),
            dec!(0.00229)
        );
    }

    quickcheck! {
        fn prop_bounds_bracket_nominal(micro_inches: u32, class_idx: u8, plus: bool) -> bool {
            // Nominals 0.0011 ..= 21.0 inch in steps of 0.0001
            let raw = 11 + (micro_inches % 209_990) as i64;
            let nominal = Diameter::new(raw, 4);
            let class = ToleranceClass::ALL[class_idx as usize % 5];
            let sign = if plus { Sign::Plus } else { Sign::Minus };

            let b = bounds(nominal, class, sign, UnitSystem::Inch).unwrap();
            let width = b.max - b.min;
            b.min <= b.max
                && b.contains(nominal)
                && (b.min == nominal || b.max == nominal)
                && width == AsmeB89.tolerance(nominal, class, UnitSystem::Inch).unwrap()
        }
    }
}
