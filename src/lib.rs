// ============================================================================
// Hole Calculator Library
// Exact-decimal bore and gauge pin calculations
// ============================================================================

//! # holecalc
//!
//! Bore and gauge pin dimensions from Descartes' circle theorem, with
//! ASME B89.1.5 gauge pin tolerance classes.
//!
//! ## Features
//!
//! - **Three-pin bore measurement**: the bore that three touching pins fit
//! - **Reverse calculation**: the third pin needed to gauge a known bore
//! - **Tolerance classes** XX through ZZ in inches and millimeters
//! - **Exact decimal arithmetic** at an explicit significant-digit
//!   precision with round half-up; no floating point anywhere
//!
//! ## Example
//!
//! ```rust
//! use holecalc::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! // Nominal pins
//! let hole = hole_from_nominal(dec!(5), dec!(2), dec!(8)).unwrap();
//! assert_eq!(quantize(hole, 3), dec!(24.375));
//!
//! // Toleranced gauge pins
//! let pin1 = PinSpec::new(dec!(1.000), ToleranceClass::ZZ, Sign::Plus);
//! let pin2 = PinSpec::new(dec!(2.000), ToleranceClass::ZZ, Sign::Plus);
//! let pin3 = PinSpec::new(dec!(3.000), ToleranceClass::ZZ, Sign::Plus);
//! let (min, max) =
//!     hole_bounds_from_tolerance_classes(&pin1, &pin2, &pin3, UnitSystem::Inch).unwrap();
//! assert_eq!(quantize(min, 4), dec!(6.0000));
//! assert_eq!(quantize(max, 4), dec!(6.0003));
//!
//! // Missing pin for a 6.000 bore
//! let pin = remaining_pin(dec!(6), dec!(1), dec!(2)).unwrap();
//! assert_eq!(quantize(pin, 4), dec!(3.0000));
//! ```

pub mod calc;
pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;

pub use calc::{
    hole_bounds_from_tolerance_classes, hole_from_nominal, pin_tolerance_bounds, remaining_pin,
};

// Re-exports for convenience
pub mod prelude {
    pub use crate::calc::{
        hole_bounds_from_tolerance_classes, hole_from_nominal, pin_tolerance_bounds,
        remaining_pin,
    };
    pub use crate::domain::{
        quantize, CalcConfig, DisplayPrecision, PinPosition, PinSpec, Sign, StandardKind,
        ToleranceBounds, ToleranceClass, UnitSystem,
    };
    pub use crate::engine::{create_from_config, AsmeB89, HoleCalculator, HoleCalculatorBuilder};
    pub use crate::interfaces::{NominalSpan, ToleranceRange, ToleranceStandard};
    pub use crate::numeric::{
        parse_diameter, CalcError, CalcResult, DecimalContext, Diameter, GeometryFault, SolveMode,
    };
}
