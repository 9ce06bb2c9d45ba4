// ============================================================================
// Calculation Errors
// Error types shared by the Descartes engine, tolerance tables and aggregation
// ============================================================================

use crate::domain::{PinPosition, UnitSystem};
use rust_decimal::Decimal;
use std::fmt;
use thiserror::Error;

/// Which way the Descartes engine was asked to solve.
///
/// The same formula serves both calculators; the mode only decides which
/// validity check applies to the result and how failures are worded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolveMode {
    /// Three pins in, enclosing bore out
    Hole,
    /// Bore and two pins in, missing pin out
    RemainingPin,
}

impl SolveMode {
    fn zero_message(self) -> &'static str {
        match self {
            SolveMode::Hole => "pin dimension cannot be zero",
            SolveMode::RemainingPin => "pin or bore dimension cannot be zero",
        }
    }

    fn failure_message(self) -> &'static str {
        match self {
            SolveMode::Hole => "cannot calculate hole dimension, check pin values",
            SolveMode::RemainingPin => "cannot calculate pin dimension, check pin/bore diameters",
        }
    }
}

/// Why a set of circles has no physical fourth tangent circle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryFault {
    /// A pin or bore diameter was negative
    NonPositivePin,
    /// k1·k2 + k2·k3 + k1·k3 < 0, no real solution
    NegativeRadicand,
    /// Curvature sum equals the root term; the fourth "circle" is a straight line
    Degenerate,
    /// The fourth circle sits between the pins instead of around them
    NotEnclosing,
    /// The enclosing circle came out smaller than one of the pins
    HoleSmallerThanPin,
    /// Reverse mode produced a negative pin
    NegativeResult,
}

impl fmt::Display for GeometryFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            GeometryFault::NonPositivePin => "pin and bore diameters must be positive",
            GeometryFault::NegativeRadicand => "no real tangent circle exists",
            GeometryFault::Degenerate => "tangent circle is degenerate",
            GeometryFault::NotEnclosing => "tangent circle does not enclose the pins",
            GeometryFault::HoleSmallerThanPin => "hole is smaller than the largest pin",
            GeometryFault::NegativeResult => "remaining pin diameter is negative",
        };
        f.write_str(text)
    }
}

/// Errors returned by every public entry point of the crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// A supplied diameter was zero, so its curvature is undefined
    #[error("{}", .0.zero_message())]
    ZeroDimension(SolveMode),

    /// The Descartes computation yielded a non-physical configuration
    #[error("{}", .mode.failure_message())]
    InvalidGeometry { mode: SolveMode, fault: GeometryFault },

    /// Unrecognized unit system name
    #[error("invalid units specified: {0}")]
    InvalidUnit(String),

    /// Unrecognized tolerance class name
    #[error("invalid tolerance class specified: {0}")]
    InvalidToleranceClass(String),

    /// Unrecognized tolerance sign
    #[error("invalid tolerance sign specified: {0}")]
    InvalidSign(String),

    /// Text that does not parse as a decimal diameter
    #[error("invalid diameter: {0}")]
    InvalidDiameter(String),

    /// Nominal diameter outside the span covered by the tolerance table
    #[error("diameter not within tolerance class limits: {nominal} {units}")]
    OutOfRange { nominal: Decimal, units: UnitSystem },

    /// One or more pins of a three-pin set could not be resolved
    #[error("{0}")]
    PinResolution(PinFailures),

    /// Result exceeded the decimal range
    #[error("arithmetic overflow: result exceeded maximum value")]
    Overflow,

    /// Attempted division by zero
    #[error("division by zero")]
    DivisionByZero,

    /// Working precision outside the supported significant-digit range
    #[error("precision of {0} significant digits is not supported (expected 12..=28)")]
    InvalidPrecision(u32),
}

impl CalcError {
    /// Shorthand for an [`CalcError::InvalidGeometry`] value.
    pub fn geometry(mode: SolveMode, fault: GeometryFault) -> Self {
        CalcError::InvalidGeometry { mode, fault }
    }
}

/// Every pin that failed to resolve, in pin order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PinFailures(Vec<(PinPosition, CalcError)>);

impl PinFailures {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, pin: PinPosition, error: CalcError) {
        self.0.push((pin, error));
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(PinPosition, CalcError)> {
        self.0.iter()
    }

    /// The error reported for `pin`, if it failed.
    pub fn get(&self, pin: PinPosition) -> Option<&CalcError> {
        self.0.iter().find(|(p, _)| *p == pin).map(|(_, e)| e)
    }
}

impl fmt::Display for PinFailures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (pin, error)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", pin, error)?;
        }
        Ok(())
    }
}

/// Result type alias for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;
