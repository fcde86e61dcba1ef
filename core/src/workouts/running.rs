use super::{checked_duration, expect_arity, whole_count};
use crate::math::units::{UnitHelper, MIN_IN_H, M_IN_KM};
use crate::prelude::{TrainingResult, Workout};

/// Step length shared by running and walking.
pub const LEN_STEP_M: f64 = 0.65;

const CALORIES_MEAN_SPEED_MULTIPLIER: f64 = 18.0;
const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.79;

/// Running training: steps, duration in hours, weight in kg.
#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    steps: u32,
    duration_hours: f64,
    weight_kg: f64,
}

impl Running {
    pub const CODE: &'static str = "RUN";
    pub const ARITY: usize = 3;

    pub fn new(steps: u32, duration_hours: f64, weight_kg: f64) -> TrainingResult<Self> {
        Ok(Self {
            steps,
            duration_hours: checked_duration(duration_hours)?,
            weight_kg,
        })
    }

    /// Positional values: steps, duration, weight.
    pub fn from_values(values: &[f64]) -> TrainingResult<Self> {
        expect_arity(Self::CODE, values, Self::ARITY)?;
        Self::new(whole_count("steps", values[0])?, values[1], values[2])
    }
}

impl Workout for Running {
    fn label(&self) -> &'static str {
        "Running"
    }

    fn duration_hours(&self) -> f64 {
        self.duration_hours
    }

    fn distance_km(&self) -> f64 {
        UnitHelper::units_to_km(self.steps, LEN_STEP_M)
    }

    fn calories(&self) -> f64 {
        (CALORIES_MEAN_SPEED_MULTIPLIER * self.mean_speed_kmh() + CALORIES_MEAN_SPEED_SHIFT)
            * self.weight_kg
            / M_IN_KM
            * self.duration_hours
            * MIN_IN_H
    }
}
