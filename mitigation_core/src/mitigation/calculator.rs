//! MitigationCalculator - Armor curve with diminishing returns

use super::constants::DEFAULT_CURVE_SCALE;
use crate::config::{ConfigError, MitigationConstants};
use crate::context::EvaluationContext;
use crate::types::{DefenseValue, MitigationResult, RawDamageAmount};
use serde::{Deserialize, Serialize};

/// Converts raw damage and target armor into the damage actually taken
///
/// Damage taken is:
/// `raw × scale / (scale + armor)`
///
/// With the default scale of 100, 100 armor halves incoming damage and
/// 300 armor quarters it. Armor never fully negates a hit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MitigationCalculator {
    curve_scale: f64,
}

impl Default for MitigationCalculator {
    fn default() -> Self {
        MitigationCalculator {
            curve_scale: DEFAULT_CURVE_SCALE,
        }
    }
}

/// Intermediate values of one calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MitigationBreakdown {
    /// Raw damage after clamping
    pub unmitigated: f64,
    /// Armor after clamping
    pub armor: f64,
    /// Damage after the armor curve
    pub mitigated: f64,
}

impl MitigationBreakdown {
    /// Damage removed by armor
    pub fn reduced_by_armor(&self) -> f64 {
        self.unmitigated - self.mitigated
    }

    pub fn result(&self) -> MitigationResult {
        MitigationResult::from_mitigated(self.mitigated)
    }
}

impl MitigationCalculator {
    /// Build a calculator from loaded constants
    ///
    /// Fails when the curve scale is not a positive finite number, since such
    /// a curve could amplify damage.
    pub fn from_constants(constants: &MitigationConstants) -> Result<Self, ConfigError> {
        constants.validate()?;
        Ok(MitigationCalculator {
            curve_scale: constants.armor.curve_scale,
        })
    }

    pub fn curve_scale(&self) -> f64 {
        self.curve_scale
    }

    /// Compute the final damage to apply
    ///
    /// The context is accepted for tag-gated rule variants; the baseline curve
    /// ignores it.
    pub fn compute(
        &self,
        defense: DefenseValue,
        raw_damage: RawDamageAmount,
        context: &EvaluationContext,
    ) -> MitigationResult {
        self.compute_breakdown(defense, raw_damage, context).result()
    }

    /// Compute and keep the pre-mitigation values alongside the result
    pub fn compute_breakdown(
        &self,
        defense: DefenseValue,
        raw_damage: RawDamageAmount,
        _context: &EvaluationContext,
    ) -> MitigationBreakdown {
        let unmitigated = raw_damage.value();
        let armor = defense.value();
        let mitigated = unmitigated * self.damage_multiplier(armor);

        MitigationBreakdown {
            unmitigated,
            armor,
            mitigated,
        }
    }

    /// Fraction of damage that gets through the given armor, in (0, 1]
    pub fn damage_multiplier(&self, armor: f64) -> f64 {
        self.curve_scale / (self.curve_scale + armor.max(0.0))
    }

    /// Percentage of damage removed by the given armor, in [0, 100)
    pub fn reduction_percent(&self, armor: f64) -> f64 {
        (1.0 - self.damage_multiplier(armor)) * 100.0
    }

    /// Armor required to remove the target percentage of damage
    pub fn armor_needed_for_reduction(&self, target_reduction_percent: f64) -> f64 {
        if target_reduction_percent <= 0.0 {
            return 0.0;
        }
        if target_reduction_percent >= 100.0 {
            return f64::INFINITY;
        }

        // multiplier = scale / (scale + armor) = 1 - reduction
        // armor = scale * reduction / (1 - reduction)
        let reduction = target_reduction_percent / 100.0;
        self.curve_scale * reduction / (1.0 - reduction)
    }
}
