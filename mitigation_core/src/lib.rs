//! mitigation_core - Armor-based damage mitigation for combat and effect systems
//!
//! This library provides:
//! - MitigationCalculator: raw damage + armor -> damage taken
//! - EvaluationContext: source/target tags carried with each evaluation
//! - DamageExecution: adapter reading inputs from an AttributeSource and
//!   emitting the damage modifier to an EffectSink
//! - MitigationConstants: curve tuning loaded from TOML

pub mod config;
pub mod context;
pub mod execution;
pub mod mitigation;
pub mod prelude;
pub mod types;

// Re-export core types for convenience
pub use config::{ConfigError, MitigationConstants};
pub use context::EvaluationContext;
pub use execution::{
    AttributeSnapshot, AttributeSource, CapturedAttribute, DamageExecution, EffectSink,
    ModifierOp, OutputModifier, DAMAGE_SET_BY_CALLER_TAG,
};
pub use mitigation::{compute_mitigation, MitigationBreakdown, MitigationCalculator};
pub use types::{DefenseValue, MitigationResult, RawDamageAmount, TagSet};
