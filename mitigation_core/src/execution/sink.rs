//! EffectSink - Receives the modifiers produced by an execution

use super::source::CapturedAttribute;
use serde::{Deserialize, Serialize};

/// How a modifier combines with the attribute's current value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModifierOp {
    Additive,
}

/// A single evaluated output modifier
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OutputModifier {
    pub attribute: CapturedAttribute,
    pub op: ModifierOp,
    pub magnitude: f64,
}

impl OutputModifier {
    /// Additive modifier on the damage meta attribute
    pub fn damage(magnitude: f64) -> Self {
        OutputModifier {
            attribute: CapturedAttribute::Damage,
            op: ModifierOp::Additive,
            magnitude,
        }
    }
}

/// Collects output modifiers for the caller to apply
pub trait EffectSink {
    fn add_output_modifier(&mut self, modifier: OutputModifier);
}

impl EffectSink for Vec<OutputModifier> {
    fn add_output_modifier(&mut self, modifier: OutputModifier) {
        self.push(modifier);
    }
}
