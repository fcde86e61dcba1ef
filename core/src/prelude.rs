use crate::sensor_interface::InfoMessage;
use crate::telemetry::log::LogManager;

/// Common error type for building and evaluating trainings.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum TrainingError {
    #[error("unrecognized workout type: {0}")]
    UnrecognizedWorkoutType(String),
    #[error("invalid arguments for {code}: expected {expected} values, got {received}")]
    InvalidArguments {
        code: String,
        expected: usize,
        received: usize,
    },
    #[error("invalid count for {field}: {value} is not a non-negative whole number")]
    InvalidCount { field: &'static str, value: f64 },
    #[error("invalid duration: {0} h (must be finite and greater than zero)")]
    InvalidDuration(f64),
}

pub type TrainingResult<T> = Result<T, TrainingError>;

/// Shared calculation contract implemented by every training variant.
///
/// `calories` has no default body, so a variant cannot be added to the
/// closed set without its own formula.
pub trait Workout {
    /// Name reported in the info message, e.g. `Running`.
    fn label(&self) -> &'static str;

    fn duration_hours(&self) -> f64;

    fn distance_km(&self) -> f64;

    fn mean_speed_kmh(&self) -> f64 {
        self.distance_km() / self.duration_hours()
    }

    fn calories(&self) -> f64;

    /// Assembles the summary for this training. Calling it repeatedly yields
    /// identical messages.
    fn report(&self) -> InfoMessage {
        let message = InfoMessage::new(
            self.label(),
            self.duration_hours(),
            self.distance_km(),
            self.mean_speed_kmh(),
            self.calories(),
        );
        LogManager::new().record_report(&message);
        message
    }
}
