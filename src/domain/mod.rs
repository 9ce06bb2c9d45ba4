// ============================================================================
// Domain Models Module
// Gauge pins, tolerance bounds and calculator configuration
// ============================================================================

pub mod bounds;
pub mod config;
pub mod pin;

pub use bounds::ToleranceBounds;
pub use config::{quantize, CalcConfig, DisplayPrecision, StandardKind};
pub use pin::{PinPosition, PinSpec, Sign, ToleranceClass, UnitSystem};
