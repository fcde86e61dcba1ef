//! Training variants and the factory that builds them from sensor packages.

pub mod factory;
pub mod running;
pub mod swimming;
pub mod walking;

pub use factory::{read_package, WorkoutCode};
pub use running::Running;
pub use swimming::Swimming;
pub use walking::SportsWalking;

use crate::prelude::{TrainingError, TrainingResult, Workout};

/// Closed set of supported trainings.
#[derive(Debug, Clone, PartialEq)]
pub enum Training {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}

impl Training {
    fn as_workout(&self) -> &dyn Workout {
        match self {
            Training::Running(training) => training,
            Training::SportsWalking(training) => training,
            Training::Swimming(training) => training,
        }
    }
}

impl Workout for Training {
    fn label(&self) -> &'static str {
        self.as_workout().label()
    }

    fn duration_hours(&self) -> f64 {
        self.as_workout().duration_hours()
    }

    fn distance_km(&self) -> f64 {
        self.as_workout().distance_km()
    }

    fn mean_speed_kmh(&self) -> f64 {
        self.as_workout().mean_speed_kmh()
    }

    fn calories(&self) -> f64 {
        self.as_workout().calories()
    }
}

fn expect_arity(code: &str, values: &[f64], expected: usize) -> TrainingResult<()> {
    if values.len() != expected {
        return Err(TrainingError::InvalidArguments {
            code: code.to_string(),
            expected,
            received: values.len(),
        });
    }
    Ok(())
}

/// Sensors send counters as plain numbers; only whole non-negative values fit.
fn whole_count(field: &'static str, value: f64) -> TrainingResult<u32> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= f64::from(u32::MAX) {
        Ok(value as u32)
    } else {
        Err(TrainingError::InvalidCount { field, value })
    }
}

fn checked_duration(duration_hours: f64) -> TrainingResult<f64> {
    if duration_hours.is_finite() && duration_hours > 0.0 {
        Ok(duration_hours)
    } else {
        Err(TrainingError::InvalidDuration(duration_hours))
    }
}
