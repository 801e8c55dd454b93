//! Synthetic sensor data logger.
//!
//! Generates fake sensor readings, persists them as fixed-size binary
//! records in a flat file, and reads a single record back by zero-based
//! index via direct offset arithmetic.

pub mod generate;
pub mod record;
pub mod store;

pub use record::{SensorRecord, RECORD_SIZE};
