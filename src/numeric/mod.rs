// ============================================================================
// Numeric Module
// Exact-decimal arithmetic for dimension calculations
// ============================================================================
//
// This module provides:
// - DecimalContext: significant-digit precision with round half-up
// - CalcError / CalcResult: error types returned by every entry point
// - Diameter: the decimal value type used for pins, bores and tolerances
//
// Design principles:
// - No floating-point operations
// - All arithmetic returns Result (no panics)
// - Precision is passed explicitly, never set globally

mod context;
mod errors;

pub use context::{DecimalContext, MAX_PRECISION, MIN_PRECISION};
pub use errors::{CalcError, CalcResult, GeometryFault, PinFailures, SolveMode};

/// Diameter of a pin, bore or tolerance band, in the caller's units.
pub type Diameter = rust_decimal::Decimal;

/// Parse a diameter typed by a user, e.g. `"0.2500"`.
///
/// # Errors
/// Returns `InvalidDiameter` if the text is not a decimal number.
pub fn parse_diameter(text: &str) -> CalcResult<Diameter> {
    let trimmed = text.trim();
    trimmed
        .parse::<Diameter>()
        .map_err(|_| CalcError::InvalidDiameter(trimmed.to_string()))
}
