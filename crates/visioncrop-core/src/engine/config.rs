//! Engine configuration.

use serde::{Deserialize, Serialize};

use crate::geometry::GeometryError;

/// Default minimum crop width and height, in container units.
pub const DEFAULT_MIN_SIZE: f64 = 40.0;

/// Tunables for [`super::CropEngine`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CropConfig {
    /// Smallest width a resize may produce, in container units.
    pub min_size: f64,
}

impl Default for CropConfig {
    fn default() -> Self {
        Self {
            min_size: DEFAULT_MIN_SIZE,
        }
    }
}

impl CropConfig {
    /// Create a config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Check that the config values are usable.
    pub fn validate(&self) -> Result<(), GeometryError> {
        if !self.min_size.is_finite() || self.min_size <= 0.0 {
            return Err(GeometryError::InvalidMinSize(self.min_size));
        }
        Ok(())
    }
}
