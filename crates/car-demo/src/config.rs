//! Demo configuration

use car_record::VehicleRecord;
use serde::{Deserialize, Serialize};

/// Seed record and replacement color used by [`crate::run`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Record as first constructed
    pub seed: VehicleRecord,
    /// Color written over the seed color before reporting
    pub recolor: String,
}

impl DemoConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With seed record
    #[inline]
    #[must_use]
    pub fn with_seed(mut self, seed: VehicleRecord) -> Self {
        self.seed = seed;
        self
    }

    /// With replacement color
    #[inline]
    #[must_use]
    pub fn with_recolor(mut self, color: impl Into<String>) -> Self {
        self.recolor = color.into();
        self
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            seed: VehicleRecord::new("red", 4, 4, "Engine3000"),
            recolor: "blue".to_string(),
        }
    }
}
