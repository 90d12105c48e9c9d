//! Prelude module for convenient imports
//!
//! ```rust
//! use mitigation_core::prelude::*;
//! ```

// Core types
pub use crate::context::EvaluationContext;
pub use crate::types::{DefenseValue, MitigationResult, RawDamageAmount, TagSet};

// Calculation
pub use crate::mitigation::{compute_mitigation, MitigationCalculator};

// Execution adapter
pub use crate::execution::{AttributeSource, DamageExecution, EffectSink, OutputModifier};

// Config
pub use crate::config::MitigationConstants;
