use std::path::Path as FsPath;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::OptionsError;
use crate::types::point::Point;

/// Millimetres to user units at 90 dpi.
pub const DEFAULT_UNITS: f64 = 3.543307;

/// Caller-side configuration for a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Swallow command failures and keep the partial path. Meant for live preview.
    pub silent: bool,
    /// Multiplier from command units to document units. Angles are not scaled.
    pub units: f64,
    /// Start point for a new path when there is no existing one to continue.
    pub seed: Point,
}

impl Default for Options {
    fn default() -> Self {
        Self { silent: true, units: DEFAULT_UNITS, seed: Point::ORIGIN }
    }
}

impl Options {
    pub fn load_from_file(path: &FsPath) -> Result<Self, OptionsError> {
        let text = std::fs::read_to_string(path)?;
        let options: Options = serde_json::from_str(&text)?;
        options.validate()?;
        debug!(path = %path.display(), ?options, "loaded options");
        Ok(options)
    }

    pub fn save_to_file(&self, path: &FsPath) -> Result<(), OptionsError> {
        self.validate()?;
        let text = serde_json::to_string_pretty(self)?;
        std::fs::write(path, text)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), OptionsError> {
        if !self.units.is_finite() || self.units == 0.0 {
            return Err(OptionsError::InvalidSetting {
                key: "units".into(),
                reason: format!("expected a finite non-zero scale, got {}", self.units),
            });
        }
        Ok(())
    }
}
