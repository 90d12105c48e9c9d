//! Damage execution - Reads inputs from an AttributeSource, writes to an EffectSink
//!
//! This is the adapter between an effect system and [`MitigationCalculator`].
//! Attribute storage and applying the emitted modifier stay with the caller.

mod sink;
mod source;

pub use sink::{EffectSink, ModifierOp, OutputModifier};
pub use source::{AttributeSnapshot, AttributeSource, CapturedAttribute};

use crate::context::EvaluationContext;
use crate::mitigation::MitigationCalculator;
use crate::types::{DefenseValue, MitigationResult, RawDamageAmount};

/// Set-by-caller tag carrying the raw damage of an application
pub const DAMAGE_SET_BY_CALLER_TAG: &str = "Data.Damage";

/// Runs the mitigation calculation for one effect application
#[derive(Debug, Clone, Copy, Default)]
pub struct DamageExecution {
    pub calculator: MitigationCalculator,
}

impl DamageExecution {
    pub fn new(calculator: MitigationCalculator) -> Self {
        DamageExecution { calculator }
    }

    /// Resolve inputs, compute mitigated damage and emit the output modifier
    ///
    /// A modifier is only added to `sink` when the result is `Applied`.
    pub fn execute(
        &self,
        source: &impl AttributeSource,
        context: &EvaluationContext,
        sink: &mut impl EffectSink,
    ) -> MitigationResult {
        let captured_armor = source.captured_magnitude(CapturedAttribute::Armor, context);
        if captured_armor.is_none() {
            tracing::trace!("armor capture failed, using 0");
        }
        let defense = DefenseValue::new(captured_armor.unwrap_or(0.0));
        let raw_damage = RawDamageAmount::from_set_by_caller(
            source.set_by_caller_magnitude(DAMAGE_SET_BY_CALLER_TAG),
        );

        let breakdown = self.calculator.compute_breakdown(defense, raw_damage, context);
        let result = breakdown.result();

        tracing::debug!(
            armor = breakdown.armor,
            unmitigated = breakdown.unmitigated,
            mitigated = breakdown.mitigated,
            "damage execution"
        );

        match result {
            MitigationResult::Applied(amount) => {
                sink.add_output_modifier(OutputModifier::damage(amount));
            }
            MitigationResult::NoOutput => {
                tracing::debug!("mitigated damage not positive, no modifier emitted");
            }
        }

        result
    }
}
