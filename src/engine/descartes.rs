// ============================================================================
// Descartes Circle Engine
// Fourth mutually tangent circle from three known circles
// ============================================================================

use crate::numeric::{CalcError, CalcResult, DecimalContext, Diameter, GeometryFault, SolveMode};
use rust_decimal::Decimal;
use tracing::{debug, trace};

/// Signed curvature of a circle, `1 / (d / 2)`.
///
/// A negative diameter stands for a circle enclosing the others and gives
/// a negative curvature.
///
/// # Errors
/// - `DivisionByZero` for a zero diameter
/// - `Overflow` for a non-zero diameter whose radius is below the
///   smallest representable decimal
pub fn curvature(ctx: &DecimalContext, diameter: Diameter) -> CalcResult<Decimal> {
    let radius = ctx.div(diameter, Decimal::TWO)?;
    if radius.is_zero() && !diameter.is_zero() {
        return Err(CalcError::Overflow);
    }
    ctx.recip(radius)
}

/// Radius of the fourth circle from three curvatures:
///
/// `r4 = 1 / ((k1 + k2 + k3) - 2·sqrt(k1·k2 + k2·k3 + k1·k3))`
///
/// Negative when the fourth circle encloses the other three.
fn descartes_radius(
    ctx: &DecimalContext,
    mode: SolveMode,
    k1: Decimal,
    k2: Decimal,
    k3: Decimal,
) -> CalcResult<Decimal> {
    let sum = ctx.sum([k1, k2, k3])?;
    let radicand = ctx.sum([ctx.mul(k1, k2)?, ctx.mul(k2, k3)?, ctx.mul(k1, k3)?])?;

    let root = ctx
        .sqrt(radicand)?
        .ok_or(CalcError::geometry(mode, GeometryFault::NegativeRadicand))?;

    let denominator = ctx.sub(sum, ctx.mul(Decimal::TWO, root)?)?;
    if denominator.is_zero() {
        return Err(CalcError::geometry(mode, GeometryFault::Degenerate));
    }

    let radius = ctx.recip(denominator)?;
    trace!("Descartes curvatures ({}, {}, {}) -> radius {}", k1, k2, k3, radius);
    Ok(radius)
}

/// Diameter of the circle tangent to three mutually tangent circles.
///
/// `d1` and `d2` are always pin diameters. In [`SolveMode::Hole`] `d3` is
/// the third pin and the result is the bore enclosing all three. In
/// [`SolveMode::RemainingPin`] `d3` is the negated bore, `-bore`, and the
/// result is the pin that fits alongside `d1` and `d2` inside it.
///
/// # Errors
/// - `ZeroDimension` if any diameter is zero
/// - `InvalidGeometry` if a diameter has the wrong sign for `mode`, no
///   physical tangent circle exists, the bore would be smaller than a pin,
///   or the missing pin would be negative
/// - `Overflow` if a diameter is too small to take the curvature of
pub fn solve_fourth_circle(
    ctx: &DecimalContext,
    mode: SolveMode,
    d1: Diameter,
    d2: Diameter,
    d3: Diameter,
) -> CalcResult<Diameter> {
    if d1.is_zero() || d2.is_zero() || d3.is_zero() {
        debug!("Zero dimension in {:?} calculation", mode);
        return Err(CalcError::ZeroDimension(mode));
    }

    let third_has_wrong_sign = match mode {
        SolveMode::Hole => d3 < Decimal::ZERO,
        SolveMode::RemainingPin => d3 > Decimal::ZERO,
    };
    if d1 < Decimal::ZERO || d2 < Decimal::ZERO || third_has_wrong_sign {
        debug!("Diameter with wrong sign in {:?} calculation ({}, {}, {})", mode, d1, d2, d3);
        return Err(CalcError::geometry(mode, GeometryFault::NonPositivePin));
    }

    let radius = descartes_radius(
        ctx,
        mode,
        curvature(ctx, d1)?,
        curvature(ctx, d2)?,
        curvature(ctx, d3)?,
    )?;
    let diameter = ctx.mul(radius, Decimal::TWO)?;

    match mode {
        SolveMode::Hole => {
            let hole = diameter.abs();
            let largest = d1.max(d2).max(d3);
            if hole < largest {
                debug!("Hole {} smaller than pin {} for ({}, {}, {})", hole, largest, d1, d2, d3);
                return Err(CalcError::geometry(mode, GeometryFault::HoleSmallerThanPin));
            }
            if diameter.is_sign_positive() {
                debug!("Tangent circle {} does not enclose ({}, {}, {})", hole, d1, d2, d3);
                return Err(CalcError::geometry(mode, GeometryFault::NotEnclosing));
            }
            Ok(hole)
        }
        SolveMode::RemainingPin => {
            if diameter.is_sign_negative() {
                debug!("Negative pin {} for bore {} and pins ({}, {})", diameter, -d3, d1, d2);
                return Err(CalcError::geometry(mode, GeometryFault::NegativeResult));
            }
            Ok(diameter)
        }
    }
}
