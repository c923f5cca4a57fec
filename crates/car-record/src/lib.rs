//! Vehicle Record
//!
//! A single mutable record describing a car.
//!
//! # Core Concepts
//!
//! - [`VehicleRecord`]: color, wheel count, door count and engine label, each
//!   with a getter and a setter
//! - [`Description`]: borrowed two-line rendering of a record
//!
//! # Example
//!
//! ```rust
//! use car_record::VehicleRecord;
//!
//! let mut car = VehicleRecord::new("red", 4, 4, "Engine3000");
//! car.set_color("blue");
//!
//! assert_eq!(car.color(), "blue");
//! assert_eq!(car.describe().wheel_line(), "The car has a 4 wheels");
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod describe;
mod record;

pub use describe::Description;
pub use record::VehicleRecord;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
