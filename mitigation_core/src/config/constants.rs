//! Mitigation constants configuration

use super::ConfigError;
use serde::{Deserialize, Serialize};

/// Tunable mitigation constants
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MitigationConstants {
    #[serde(default)]
    pub armor: ArmorConstants,
}

impl MitigationConstants {
    /// Check that the constants describe a usable curve
    pub fn validate(&self) -> Result<(), ConfigError> {
        let scale = self.armor.curve_scale;
        if !scale.is_finite() || scale <= 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "armor.curve_scale must be a positive finite number, got {scale}"
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArmorConstants {
    /// Curve constant: multiplier = scale / (scale + armor)
    #[serde(default = "default_curve_scale")]
    pub curve_scale: f64,
}

impl Default for ArmorConstants {
    fn default() -> Self {
        ArmorConstants {
            curve_scale: default_curve_scale(),
        }
    }
}

fn default_curve_scale() -> f64 {
    100.0
}
