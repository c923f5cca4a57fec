//! Car Demo
//!
//! Builds one [`VehicleRecord`] from seed values, recolors it and writes its
//! two-line description.
//!
//! # Example
//!
//! ```rust
//! use car_demo::{run, DemoConfig};
//!
//! let mut out = Vec::new();
//! let car = run(&DemoConfig::default(), &mut out).unwrap();
//!
//! assert_eq!(car.color(), "blue");
//! assert!(String::from_utf8(out).unwrap().ends_with("The car has a 4 wheels\n"));
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod config;
pub mod driver;
pub mod error;
pub mod logging;

pub use car_record::VehicleRecord;
pub use config::DemoConfig;
pub use driver::run;
pub use error::DemoError;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
