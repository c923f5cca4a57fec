//! Vehicle record
//!
//! Plain data holder with one getter and one setter per field. Values are
//! stored verbatim: no field is validated, so negative counts and empty
//! labels are accepted.

use serde::{Deserialize, Serialize};

use crate::describe::Description;

/// A car's color, wheel count, door count and engine label
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VehicleRecord {
    color: String,
    wheel_count: i64,
    door_count: i64,
    engine_label: String,
}

impl VehicleRecord {
    /// Create a record from all four values
    #[inline]
    #[must_use]
    pub fn new(
        color: impl Into<String>,
        wheel_count: i64,
        door_count: i64,
        engine_label: impl Into<String>,
    ) -> Self {
        Self {
            color: color.into(),
            wheel_count,
            door_count,
            engine_label: engine_label.into(),
        }
    }

    /// Current color
    #[inline]
    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Replace the color
    #[inline]
    pub fn set_color(&mut self, color: impl Into<String>) {
        self.color = color.into();
    }

    /// Number of wheels
    #[inline]
    #[must_use]
    pub fn wheel_count(&self) -> i64 {
        self.wheel_count
    }

    /// Replace the wheel count
    #[inline]
    pub fn set_wheel_count(&mut self, wheel_count: i64) {
        self.wheel_count = wheel_count;
    }

    /// Number of doors
    #[inline]
    #[must_use]
    pub fn door_count(&self) -> i64 {
        self.door_count
    }

    #[inline]
    pub fn set_door_count(&mut self, door_count: i64) {
        self.door_count = door_count;
    }

    /// Engine label
    #[inline]
    #[must_use]
    pub fn engine_label(&self) -> &str {
        &self.engine_label
    }

    #[inline]
    pub fn set_engine_label(&mut self, engine_label: impl Into<String>) {
        self.engine_label = engine_label.into();
    }

    /// Borrow a printable two-line description of this record
    #[inline]
    #[must_use]
    pub fn describe(&self) -> Description<'_> {
        Description::new(self)
    }
}
