// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod tolerance_standard;

pub use tolerance_standard::{NominalSpan, ToleranceRange, ToleranceStandard};
