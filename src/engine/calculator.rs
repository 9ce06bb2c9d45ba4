// ============================================================================
// Hole Calculator
// Configured entry point combining a precision context and a tolerance standard
// ============================================================================

use super::aggregation::{missing_pin, nominal_hole, toleranced_hole};
use super::tolerance_table::{resolve_pin_bounds, AsmeB89};
use crate::domain::config::{CalcConfig, DisplayPrecision, StandardKind};
use crate::domain::{PinSpec, ToleranceBounds, UnitSystem};
use crate::interfaces::ToleranceStandard;
use crate::numeric::{CalcResult, DecimalContext, Diameter};

/// Stateless calculator with a fixed working precision and tolerance
/// standard. Safe to share between threads; every call is independent.
pub struct HoleCalculator {
    /// Arithmetic precision for every intermediate value
    ctx: DecimalContext,

    /// Pluggable tolerance table
    standard: Box<dyn ToleranceStandard>,

    /// Presentation precision for formatted results
    display: DisplayPrecision,
}

impl HoleCalculator {
    /// Create a new calculator
    pub fn new(
        ctx: DecimalContext,
        standard: Box<dyn ToleranceStandard>,
        display: DisplayPrecision,
    ) -> Self {
        Self {
            ctx,
            standard,
            display,
        }
    }

    pub fn context(&self) -> &DecimalContext {
        &self.ctx
    }

    pub fn standard(&self) -> &dyn ToleranceStandard {
        self.standard.as_ref()
    }

    pub fn display(&self) -> DisplayPrecision {
        self.display
    }

    /// Bore diameter measured by three pins at nominal size.
    pub fn hole_from_nominal(
        &self,
        pin1: Diameter,
        pin2: Diameter,
        pin3: Diameter,
    ) -> CalcResult<Diameter> {
        nominal_hole(&self.ctx, pin1, pin2, pin3)
    }

    /// Minimum and maximum bore measured by three toleranced gauge pins.
    pub fn hole_bounds_from_tolerance_classes(
        &self,
        pin1: &PinSpec,
        pin2: &PinSpec,
        pin3: &PinSpec,
        units: UnitSystem,
    ) -> CalcResult<ToleranceBounds> {
        toleranced_hole(self.standard(), &self.ctx, [pin1, pin2, pin3], units)
    }

    /// Pin diameter that completes a measurement of `bore` with two pins.
    pub fn remaining_pin(
        &self,
        bore: Diameter,
        pin1: Diameter,
        pin2: Diameter,
    ) -> CalcResult<Diameter> {
        missing_pin(&self.ctx, bore, pin1, pin2)
    }

    /// Minimum and maximum diameter of one gauge pin.
    pub fn pin_tolerance_bounds(
        &self,
        spec: &PinSpec,
        units: UnitSystem,
    ) -> CalcResult<ToleranceBounds> {
        resolve_pin_bounds(self.standard(), &self.ctx, spec, units)
    }

    /// Hole or pin result rounded to the configured display precision.
    pub fn format_diameter(&self, value: Diameter) -> String {
        self.display.quantize(value).to_string()
    }

    /// Pin bounds rounded to the unit system's customary places.
    pub fn format_pin_bounds(&self, bounds: &ToleranceBounds, units: UnitSystem) -> String {
        let places = units.pin_display_places();
        format!(
            "{} - {} {}",
            crate::domain::quantize(bounds.min, places),
            crate::domain::quantize(bounds.max, places),
            units
        )
    }
}

impl Default for HoleCalculator {
    fn default() -> Self {
        Self::new(
            DecimalContext::default(),
            Box::new(AsmeB89),
            DisplayPrecision::default(),
        )
    }
}

impl std::fmt::Debug for HoleCalculator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HoleCalculator")
            .field("precision", &self.ctx.precision())
            .field("standard", &self.standard.name())
            .field("display", &self.display)
            .finish()
    }
}

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a calculator from configuration
///
/// # Example
/// ```
/// use holecalc::prelude::*;
///
/// let calc = create_from_config(CalcConfig::extended()).unwrap();
/// assert_eq!(calc.context().precision(), 28);
/// ```
pub fn create_from_config(config: CalcConfig) -> CalcResult<HoleCalculator> {
    // Validate configuration first
    config.validate()?;

    Ok(HoleCalculator::new(
        config.context()?,
        create_standard(config.standard),
        config.display,
    ))
}

/// Creates the tolerance standard named by configuration
fn create_standard(kind: StandardKind) -> Box<dyn ToleranceStandard> {
    match kind {
        StandardKind::AsmeB89 => Box::new(AsmeB89),
    }
}

// ============================================================================
// Builder Pattern for Advanced Configuration
// ============================================================================

/// Builder for creating calculators with fluent API
///
/// # Example
/// ```
/// use holecalc::prelude::*;
///
/// let calc = HoleCalculatorBuilder::new()
///     .precision(20)
///     .display(DisplayPrecision::TenThousandths)
///     .build()
///     .unwrap();
/// assert_eq!(calc.context().precision(), 20);
/// ```
pub struct HoleCalculatorBuilder {
    config: CalcConfig,
    standard: Option<Box<dyn ToleranceStandard>>,
}

impl HoleCalculatorBuilder {
    /// Create a new builder with the default configuration
    pub fn new() -> Self {
        Self {
            config: CalcConfig::default(),
            standard: None,
        }
    }

    /// Set significant digits of working precision
    pub fn precision(mut self, digits: u32) -> Self {
        self.config.precision = digits;
        self
    }

    /// Select a built-in tolerance standard
    pub fn standard(mut self, kind: StandardKind) -> Self {
        self.config.standard = kind;
        self.standard = None;
        self
    }

    /// Use a custom tolerance standard
    pub fn custom_standard(mut self, standard: Box<dyn ToleranceStandard>) -> Self {
        self.standard = Some(standard);
        self
    }

    /// Set result display precision
    pub fn display(mut self, display: DisplayPrecision) -> Self {
        self.config.display = display;
        self
    }

    /// Get the current configuration
    pub fn config(&self) -> &CalcConfig {
        &self.config
    }

    /// Build the calculator
    pub fn build(self) -> CalcResult<HoleCalculator> {
        match self.standard {
            Some(standard) => {
                self.config.validate()?;
                Ok(HoleCalculator::new(
                    self.config.context()?,
                    standard,
                    self.config.display,
                ))
            }
            None => create_from_config(self.config),
        }
    }
}

impl Default for HoleCalculatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
