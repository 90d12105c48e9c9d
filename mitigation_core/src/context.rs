//! EvaluationContext - Source/target tags gathered for a single evaluation

use crate::types::TagSet;
use serde::{Deserialize, Serialize};

/// Tags captured from the source and target of a damage application
///
/// The baseline curve does not read these. They travel with every call so
/// tag-gated rule variants can be added without changing call signatures.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EvaluationContext {
    #[serde(default)]
    pub source_tags: TagSet,
    #[serde(default)]
    pub target_tags: TagSet,
}

impl EvaluationContext {
    /// Create a context with no tags
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_source_tags(mut self, tags: TagSet) -> Self {
        self.source_tags = tags;
        self
    }

    pub fn with_target_tags(mut self, tags: TagSet) -> Self {
        self.target_tags = tags;
        self
    }

    pub fn has_source_tag(&self, tag: &str) -> bool {
        self.source_tags.contains(tag)
    }

    pub fn has_target_tag(&self, tag: &str) -> bool {
        self.target_tags.contains(tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_context() {
        let context = EvaluationContext::new();
        assert!(context.source_tags.is_empty());
        assert!(context.target_tags.is_empty());
    }

    #[test]
    fn test_builder_sets_tags() {
        let context = EvaluationContext::new()
            .with_source_tags(["ability:melee"].into_iter().collect())
            .with_target_tags(["status:vulnerable", "team:red"].into_iter().collect());

        assert!(context.has_source_tag("ability:melee"));
        assert!(context.has_target_tag("status:vulnerable"));
        assert!(!context.has_source_tag("status:vulnerable"));
        assert_eq!(context.target_tags.len(), 2);
    }

    #[test]
    fn test_deserialize_missing_tags() {
        let context: EvaluationContext =
            serde_json::from_str(r#"{"target_tags": ["status:vulnerable"]}"#).unwrap();
        assert!(context.source_tags.is_empty());
        assert!(context.has_target_tag("status:vulnerable"));
    }
}
