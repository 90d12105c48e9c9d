//! Value types passed into and out of the mitigation calculator

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Sentinel used when no set-by-caller damage was attached to an application
pub const MISSING_SET_BY_CALLER: f64 = -1.0;

/// A target's damage-reduction stat ("armor"), always >= 0
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct DefenseValue(f64);

impl DefenseValue {
    /// Create a defense value, clamping negative (and NaN) input to 0
    pub fn new(value: f64) -> Self {
        DefenseValue(value.max(0.0))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<f64> for DefenseValue {
    fn from(value: f64) -> Self {
        DefenseValue::new(value)
    }
}

impl From<DefenseValue> for f64 {
    fn from(value: DefenseValue) -> Self {
        value.0
    }
}

/// Unmitigated incoming damage, always >= 0
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct RawDamageAmount(f64);

impl RawDamageAmount {
    /// Create a raw damage amount, clamping negative (and NaN) input to 0
    pub fn new(value: f64) -> Self {
        RawDamageAmount(value.max(0.0))
    }

    /// Build from a set-by-caller lookup
    ///
    /// A missing value falls back to [`MISSING_SET_BY_CALLER`] before clamping,
    /// so "not provided" and "zero damage" end up identical.
    pub fn from_set_by_caller(value: Option<f64>) -> Self {
        RawDamageAmount::new(value.unwrap_or(MISSING_SET_BY_CALLER))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<f64> for RawDamageAmount {
    fn from(value: f64) -> Self {
        RawDamageAmount::new(value)
    }
}

impl From<RawDamageAmount> for f64 {
    fn from(value: RawDamageAmount) -> Self {
        value.0
    }
}

/// Opaque tags attached to a source or target
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagSet(BTreeSet<String>);

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tag, returning false if it was already present
    pub fn insert(&mut self, tag: impl Into<String>) -> bool {
        self.0.insert(tag.into())
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.0.contains(tag)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for TagSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        TagSet(iter.into_iter().map(Into::into).collect())
    }
}

/// Outcome of a mitigation calculation
///
/// Only strictly positive damage is `Applied`; anything else is `NoOutput`
/// and the caller should skip emitting a modifier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MitigationResult {
    Applied(f64),
    NoOutput,
}

impl MitigationResult {
    /// Wrap a mitigated amount, collapsing non-positive values to `NoOutput`
    pub fn from_mitigated(mitigated: f64) -> Self {
        if mitigated > 0.0 {
            MitigationResult::Applied(mitigated)
        } else {
            MitigationResult::NoOutput
        }
    }

    /// Damage to apply (0 when there is no output)
    pub fn amount(&self) -> f64 {
        match self {
            MitigationResult::Applied(amount) => *amount,
            MitigationResult::NoOutput => 0.0,
        }
    }

    pub fn is_applied(&self) -> bool {
        matches!(self, MitigationResult::Applied(_))
    }

    pub fn as_option(&self) -> Option<f64> {
        match self {
            MitigationResult::Applied(amount) => Some(*amount),
            MitigationResult::NoOutput => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defense_clamps_negative() {
        assert!((DefenseValue::new(-25.0).value() - 0.0).abs() < f64::EPSILON);
        assert!((DefenseValue::new(40.0).value() - 40.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_nan_clamps_to_zero() {
        assert!((DefenseValue::new(f64::NAN).value() - 0.0).abs() < f64::EPSILON);
        assert!((RawDamageAmount::new(f64::NAN).value() - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_missing_set_by_caller_is_zero() {
        let missing = RawDamageAmount::from_set_by_caller(None);
        let zero = RawDamageAmount::from_set_by_caller(Some(0.0));
        assert_eq!(missing, zero);
        assert!((missing.value() - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_set_by_caller_value_passes_through() {
        let raw = RawDamageAmount::from_set_by_caller(Some(75.0));
        assert!((raw.value() - 75.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_tag_set_dedupes() {
        let mut tags = TagSet::new();
        assert!(tags.insert("status:vulnerable"));
        assert!(!tags.insert("status:vulnerable"));
        assert_eq!(tags.len(), 1);
        assert!(tags.contains("status:vulnerable"));
        assert!(!tags.contains("status:stunned"));
    }

    #[test]
    fn test_tag_set_from_iter_is_sorted() {
        let tags: TagSet = ["b", "a", "c"].into_iter().collect();
        let collected: Vec<&str> = tags.iter().collect();
        assert_eq!(collected, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_result_from_mitigated() {
        assert_eq!(MitigationResult::from_mitigated(0.0), MitigationResult::NoOutput);
        assert_eq!(MitigationResult::from_mitigated(-1.0), MitigationResult::NoOutput);
        assert_eq!(MitigationResult::from_mitigated(12.5), MitigationResult::Applied(12.5));
    }

    #[test]
    fn test_result_accessors() {
        let applied = MitigationResult::Applied(30.0);
        assert!(applied.is_applied());
        assert_eq!(applied.as_option(), Some(30.0));
        assert!((applied.amount() - 30.0).abs() < f64::EPSILON);

        let none = MitigationResult::NoOutput;
        assert!(!none.is_applied());
        assert_eq!(none.as_option(), None);
        assert!((none.amount() - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_deserialize_defense_clamps() {
        let defense: DefenseValue = serde_json::from_str("-10.0").unwrap();
        assert!((defense.value() - 0.0).abs() < f64::EPSILON);
    }
}
