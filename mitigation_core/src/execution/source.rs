//! AttributeSource - Trait and in-memory implementation for attribute inputs

use crate::context::EvaluationContext;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Attributes the damage execution reads or writes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapturedAttribute {
    /// Target's armor, captured without snapshotting
    Armor,
    /// Meta attribute receiving the mitigated damage
    Damage,
}

/// Anything that can resolve attribute values for one effect application
pub trait AttributeSource {
    /// Captured magnitude of a target attribute
    ///
    /// `None` means the capture failed; the execution treats it as 0.
    fn captured_magnitude(
        &self,
        attribute: CapturedAttribute,
        context: &EvaluationContext,
    ) -> Option<f64>;

    /// Value attached to this application under `tag`, if any
    fn set_by_caller_magnitude(&self, tag: &str) -> Option<f64>;
}

/// Plain snapshot of the values an execution needs
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AttributeSnapshot {
    /// Captured target attributes
    #[serde(default)]
    pub attributes: HashMap<CapturedAttribute, f64>,
    /// Set-by-caller magnitudes keyed by tag
    #[serde(default)]
    pub set_by_caller: HashMap<String, f64>,
}

impl AttributeSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_attribute(mut self, attribute: CapturedAttribute, value: f64) -> Self {
        self.attributes.insert(attribute, value);
        self
    }

    pub fn with_set_by_caller(mut self, tag: impl Into<String>, value: f64) -> Self {
        self.set_by_caller.insert(tag.into(), value);
        self
    }
}

impl AttributeSource for AttributeSnapshot {
    fn captured_magnitude(
        &self,
        attribute: CapturedAttribute,
        _context: &EvaluationContext,
    ) -> Option<f64> {
        self.attributes.get(&attribute).copied()
    }

    fn set_by_caller_magnitude(&self, tag: &str) -> Option<f64> {
        self.set_by_caller.get(tag).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_lookup() {
        let snapshot = AttributeSnapshot::new()
            .with_attribute(CapturedAttribute::Armor, 120.0)
            .with_set_by_caller("Data.Damage", 45.0);
        let context = EvaluationContext::new();

        assert_eq!(
            snapshot.captured_magnitude(CapturedAttribute::Armor, &context),
            Some(120.0)
        );
        assert_eq!(
            snapshot.captured_magnitude(CapturedAttribute::Damage, &context),
            None
        );
        assert_eq!(snapshot.set_by_caller_magnitude("Data.Damage"), Some(45.0));
        assert_eq!(snapshot.set_by_caller_magnitude("Data.Heal"), None);
    }
}
