use super::running::LEN_STEP_M;
use super::{checked_duration, expect_arity, whole_count};
use crate::math::units::{UnitHelper, MIN_IN_H};
use crate::prelude::{TrainingResult, Workout};

const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

/// Sports walking: running readings plus the walker's height in cm.
#[derive(Debug, Clone, PartialEq)]
pub struct SportsWalking {
    steps: u32,
    duration_hours: f64,
    weight_kg: f64,
    height_cm: f64,
}

impl SportsWalking {
    pub const CODE: &'static str = "WLK";
    pub const ARITY: usize = 4;

    pub fn new(
        steps: u32,
        duration_hours: f64,
        weight_kg: f64,
        height_cm: f64,
    ) -> TrainingResult<Self> {
        Ok(Self {
            steps,
            duration_hours: checked_duration(duration_hours)?,
            weight_kg,
            height_cm,
        })
    }

    /// Positional values: steps, duration, weight, height.
    pub fn from_values(values: &[f64]) -> TrainingResult<Self> {
        expect_arity(Self::CODE, values, Self::ARITY)?;
        Self::new(
            whole_count("steps", values[0])?,
            values[1],
            values[2],
            values[3],
        )
    }
}

impl Workout for SportsWalking {
    fn label(&self) -> &'static str {
        "SportsWalking"
    }

    fn duration_hours(&self) -> f64 {
        self.duration_hours
    }

    fn distance_km(&self) -> f64 {
        UnitHelper::units_to_km(self.steps, LEN_STEP_M)
    }

    fn calories(&self) -> f64 {
        let speed_msec = UnitHelper::kmh_to_msec(self.mean_speed_kmh());
        (CALORIES_WEIGHT_MULTIPLIER * self.weight_kg
            + (speed_msec.powi(2) / UnitHelper::cm_to_m(self.height_cm))
                * CALORIES_SPEED_HEIGHT_MULTIPLIER
                * self.weight_kg)
            * self.duration_hours
            * MIN_IN_H
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walking_matches_reference_readings() {
        let walking = SportsWalking::from_values(&[9000.0, 1.0, 75.0, 180.0]).unwrap();
        assert!((walking.distance_km() - 5.85).abs() < 1e-9);
        assert!((walking.mean_speed_kmh() - 5.85).abs() < 1e-9);
        assert!((walking.calories() - 349.251_747_525).abs() < 1e-6);
        assert_eq!(
            walking.report().render(),
            "Workout type: SportsWalking; Duration: 1.000 h; Distance: 5.850 km; \
             Avg speed: 5.850 km/h; Calories burned: 349.252."
        );
    }

    #[test]
    fn walking_needs_height() {
        let err = SportsWalking::from_values(&[9000.0, 1.0, 75.0]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid arguments for WLK: expected 4 values, got 3"
        );
    }
}
