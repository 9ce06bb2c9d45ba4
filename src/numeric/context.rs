// ============================================================================
// Decimal Context
// Significant-digit precision and round-half-up applied to every operation
// ============================================================================

use super::errors::{CalcError, CalcResult};
use rust_decimal::prelude::*;

/// Lowest precision the engine accepts.
pub const MIN_PRECISION: u32 = 12;

/// Highest precision `rust_decimal` can carry.
pub const MAX_PRECISION: u32 = 28;

/// Explicit arithmetic context threaded through the calculation engine.
///
/// Each operation is carried out with `rust_decimal`'s full 96-bit mantissa
/// and the result is then rounded to `precision` significant digits with
/// round half-up (midpoint away from zero). Chaining operations through the
/// same context therefore rounds every intermediate value identically,
/// without any process-wide state.
///
/// # Example
/// ```
/// use holecalc::numeric::DecimalContext;
/// use rust_decimal_macros::dec;
///
/// let ctx = DecimalContext::default();
/// let third = ctx.div(dec!(1), dec!(3)).unwrap();
/// assert_eq!(third, dec!(0.333333333333));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DecimalContext {
    precision: u32,
}

impl DecimalContext {
    /// Twelve significant digits, the precision the published results use
    pub const LEGACY: Self = Self {
        precision: MIN_PRECISION,
    };

    /// Everything `rust_decimal` can hold
    pub const EXTENDED: Self = Self {
        precision: MAX_PRECISION,
    };

    /// Create a context with the given number of significant digits.
    ///
    /// # Errors
    /// Returns `InvalidPrecision` outside `12..=28`.
    pub fn new(precision: u32) -> CalcResult<Self> {
        if (MIN_PRECISION..=MAX_PRECISION).contains(&precision) {
            Ok(Self { precision })
        } else {
            Err(CalcError::InvalidPrecision(precision))
        }
    }

    #[inline]
    pub const fn precision(&self) -> u32 {
        self.precision
    }

    // ========================================================================
    // Rounding
    // ========================================================================

    /// Round to the context's significant digits, half-up.
    #[inline]
    pub fn round(&self, value: Decimal) -> CalcResult<Decimal> {
        value
            .round_sf_with_strategy(self.precision, RoundingStrategy::MidpointAwayFromZero)
            .ok_or(CalcError::Overflow)
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Checked addition, rounded.
    #[inline]
    pub fn add(&self, lhs: Decimal, rhs: Decimal) -> CalcResult<Decimal> {
        self.round(lhs.checked_add(rhs).ok_or(CalcError::Overflow)?)
    }

    /// Checked subtraction, rounded.
    #[inline]
    pub fn sub(&self, lhs: Decimal, rhs: Decimal) -> CalcResult<Decimal> {
        self.round(lhs.checked_sub(rhs).ok_or(CalcError::Overflow)?)
    }

    /// Checked multiplication, rounded.
    #[inline]
    pub fn mul(&self, lhs: Decimal, rhs: Decimal) -> CalcResult<Decimal> {
        self.round(lhs.checked_mul(rhs).ok_or(CalcError::Overflow)?)
    }

    /// Checked division, rounded.
    ///
    /// # Errors
    /// Returns `DivisionByZero` when `rhs` is zero.
    #[inline]
    pub fn div(&self, lhs: Decimal, rhs: Decimal) -> CalcResult<Decimal> {
        if rhs.is_zero() {
            return Err(CalcError::DivisionByZero);
        }
        self.round(lhs.checked_div(rhs).ok_or(CalcError::Overflow)?)
    }

    /// Reciprocal, `1 / value`.
    #[inline]
    pub fn recip(&self, value: Decimal) -> CalcResult<Decimal> {
        self.div(Decimal::ONE, value)
    }

    /// Square root, rounded. `None` for negative input.
    pub fn sqrt(&self, value: Decimal) -> CalcResult<Option<Decimal>> {
        match value.sqrt() {
            Some(root) => self.round(root).map(Some),
            None => Ok(None),
        }
    }

    /// Sum of a sequence, rounding after every addition (left to right).
    pub fn sum<I>(&self, values: I) -> CalcResult<Decimal>
    where
        I: IntoIterator<Item = Decimal>,
    {
        values
            .into_iter()
            .try_fold(Decimal::ZERO, |acc, v| self.add(acc, v))
    }
}

impl Default for DecimalContext {
    fn default() -> Self {
        Self::LEGACY
    }
}
