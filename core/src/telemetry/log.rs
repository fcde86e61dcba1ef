use crate::sensor_interface::InfoMessage;
use log::{debug, warn};

pub struct LogManager;

impl LogManager {
    pub fn new() -> Self {
        Self
    }

    pub fn record_report(&self, message: &InfoMessage) {
        debug!(
            "{} report: distance {:.4} km, speed {:.4} km/h, calories {:.4}",
            message.workout_label, message.distance_km, message.mean_speed_kmh, message.calories
        );
    }

    pub fn record_rejected(&self, index: usize, code: &str, reason: &str) {
        warn!("package #{} ({}) rejected: {}", index, code, reason);
    }
}

impl Default for LogManager {
    fn default() -> Self {
        Self::new()
    }
}
