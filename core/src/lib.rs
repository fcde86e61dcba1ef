//! Core workout calculators for the fitness tracker.
//!
//! Raw sensor packages are turned into a closed set of training variants,
//! each of which computes distance, mean speed and spent calories and
//! summarises them as an [`InfoMessage`](sensor_interface::InfoMessage).

pub mod math;
pub mod prelude;
pub mod sensor_interface;
pub mod telemetry;
pub mod workouts;

pub use prelude::{TrainingError, TrainingResult, Workout};
pub use sensor_interface::{InfoMessage, SensorPackage};
pub use workouts::{read_package, Training};
