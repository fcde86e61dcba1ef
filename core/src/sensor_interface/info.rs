use serde::{Deserialize, Serialize};
use std::fmt;

/// Immutable summary of one computed training.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InfoMessage {
    pub workout_label: String,
    pub duration_hours: f64,
    pub distance_km: f64,
    pub mean_speed_kmh: f64,
    pub calories: f64,
}

impl InfoMessage {
    pub fn new(
        workout_label: impl Into<String>,
        duration_hours: f64,
        distance_km: f64,
        mean_speed_kmh: f64,
        calories: f64,
    ) -> Self {
        Self {
            workout_label: workout_label.into(),
            duration_hours,
            distance_km,
            mean_speed_kmh,
            calories,
        }
    }

    /// Human-readable line with every quantity fixed to three decimals.
    pub fn render(&self) -> String {
        format!(
            "Workout type: {}; Duration: {:.3} h; Distance: {:.3} km; Avg speed: {:.3} km/h; Calories burned: {:.3}.",
            self.workout_label,
            self.duration_hours,
            self.distance_km,
            self.mean_speed_kmh,
            self.calories
        )
    }
}

impl fmt::Display for InfoMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
