//! Mitigation - Armor-based damage reduction

mod calculator;

pub use calculator::{MitigationBreakdown, MitigationCalculator};

use crate::context::EvaluationContext;
use crate::types::{DefenseValue, MitigationResult, RawDamageAmount};

/// Mitigation constants
pub mod constants {
    /// Armor curve scale: multiplier = SCALE / (SCALE + armor)
    pub const DEFAULT_CURVE_SCALE: f64 = 100.0;
}

/// Compute mitigated damage from plain floats using the default curve
pub fn compute_mitigation(defense: f64, raw_damage: f64) -> MitigationResult {
    MitigationCalculator::default().compute(
        DefenseValue::new(defense),
        RawDamageAmount::new(raw_damage),
        &EvaluationContext::new(),
    )
}

/// Fraction of damage that gets through the given armor on the default curve
pub fn damage_multiplier(armor: f64) -> f64 {
    MitigationCalculator::default().damage_multiplier(armor)
}

/// Percentage of damage removed by the given armor on the default curve
pub fn reduction_percent(armor: f64) -> f64 {
    MitigationCalculator::default().reduction_percent(armor)
}

/// Armor needed on the default curve to remove the target percentage
pub fn armor_needed_for_reduction(target_reduction_percent: f64) -> f64 {
    MitigationCalculator::default().armor_needed_for_reduction(target_reduction_percent)
}
