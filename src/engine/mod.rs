// ============================================================================
// Engine Module
// Descartes solver, tolerance tables and their composition
// ============================================================================

mod aggregation;
mod calculator;
mod descartes;
mod tolerance_table;

pub use aggregation::{missing_pin, nominal_hole, toleranced_hole};
pub use calculator::{create_from_config, HoleCalculator, HoleCalculatorBuilder};
pub use descartes::{curvature, solve_fourth_circle};
pub use tolerance_table::{resolve_pin_bounds, AsmeB89};
