// ============================================================================
// Calculator Configuration
// Working precision, tolerance standard and result presentation
// ============================================================================

use crate::numeric::{CalcError, CalcResult, DecimalContext, Diameter, MAX_PRECISION, MIN_PRECISION};
use rust_decimal::RoundingStrategy;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Tolerance Standard
// ============================================================================

/// Gauge pin tolerance standard used for tolerance-class lookups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum StandardKind {
    /// ASME B89.1.5-1998 plug/gauge pin tolerances
    #[default]
    AsmeB89,
}

// ============================================================================
// Display Precision
// ============================================================================

/// Number of decimal places a result is presented with.
///
/// The calculation engine always returns full-precision values; this only
/// applies when a caller formats them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DisplayPrecision {
    /// 0.1
    Tenths,
    /// 0.01
    Hundredths,
    /// 0.001
    #[default]
    Thousandths,
    /// 0.0001
    TenThousandths,
}

impl DisplayPrecision {
    pub const fn places(self) -> u32 {
        match self {
            DisplayPrecision::Tenths => 1,
            DisplayPrecision::Hundredths => 2,
            DisplayPrecision::Thousandths => 3,
            DisplayPrecision::TenThousandths => 4,
        }
    }

    /// Round half-up to this many places, keeping trailing zeros.
    pub fn quantize(self, value: Diameter) -> Diameter {
        quantize(value, self.places())
    }
}

/// Round `value` half-up to `places` decimal places with a fixed scale,
/// so `6.00000000006` becomes `6.000` rather than `6`.
pub fn quantize(value: Diameter, places: u32) -> Diameter {
    let mut rounded = value.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(places);
    rounded
}

// ============================================================================
// Complete Calculator Configuration
// ============================================================================

/// Configuration for building a [`crate::engine::HoleCalculator`]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalcConfig {
    /// Significant digits carried through every intermediate result
    pub precision: u32,

    /// Tolerance table source for tolerance-class calculations
    pub standard: StandardKind,

    /// Decimal places for formatted hole and pin results
    pub display: DisplayPrecision,
}

impl CalcConfig {
    pub fn new(precision: u32) -> Self {
        Self {
            precision,
            standard: StandardKind::default(),
            display: DisplayPrecision::default(),
        }
    }

    /// Builder method: Set the tolerance standard
    pub fn with_standard(mut self, standard: StandardKind) -> Self {
        self.standard = standard;
        self
    }

    /// Builder method: Set the display precision
    pub fn with_display(mut self, display: DisplayPrecision) -> Self {
        self.display = display;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> CalcResult<()> {
        if !(MIN_PRECISION..=MAX_PRECISION).contains(&self.precision) {
            return Err(CalcError::InvalidPrecision(self.precision));
        }
        Ok(())
    }

    /// Arithmetic context for this configuration.
    pub fn context(&self) -> CalcResult<DecimalContext> {
        DecimalContext::new(self.precision)
    }
}

impl Default for CalcConfig {
    fn default() -> Self {
        Self::legacy()
    }
}

// ============================================================================
// Preset Configurations
// ============================================================================

impl CalcConfig {
    /// Twelve significant digits, reproducing published results to the
    /// last digit
    pub fn legacy() -> Self {
        Self::new(MIN_PRECISION)
    }

    /// Full `rust_decimal` precision. Reduces cancellation error when
    /// pins are nearly collinear.
    pub fn extended() -> Self {
        Self::new(MAX_PRECISION)
    }
}
