//! Two-line textual description of a [`VehicleRecord`]

use std::fmt::{self, Display};

use crate::record::VehicleRecord;

/// Borrowed view that renders a record as two newline-terminated lines
///
/// ```text
/// The car's color is {color}. Car is badass. It has a {doors} doors and Super cool {engine}
/// The car has a {wheels} wheels
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Description<'a> {
    record: &'a VehicleRecord,
}

impl<'a> Description<'a> {
    pub(crate) fn new(record: &'a VehicleRecord) -> Self {
        Self { record }
    }

    /// Color, door count and engine line, without trailing newline
    #[must_use]
    pub fn headline(&self) -> String {
        format!(
            "The car's color is {}. Car is badass. It has a {} doors and Super cool {}",
            self.record.color(),
            self.record.door_count(),
            self.record.engine_label()
        )
    }

    /// Wheel count line, without trailing newline
    #[must_use]
    pub fn wheel_line(&self) -> String {
        format!("The car has a {} wheels", self.record.wheel_count())
    }
}

impl Display for Description<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.headline())?;
        writeln!(f, "{}", self.wheel_line())
    }
}
