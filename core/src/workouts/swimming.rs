use super::{checked_duration, expect_arity, whole_count};
use crate::math::units::{UnitHelper, M_IN_KM};
use crate::prelude::{TrainingResult, Workout};

/// Distance covered by one stroke.
pub const LEN_STROKE_M: f64 = 1.38;

const CALORIES_SPEED_SHIFT: f64 = 1.1;
const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

/// Swimming training. Mean speed comes from the pool laps, not strokes.
#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    strokes: u32,
    duration_hours: f64,
    weight_kg: f64,
    pool_length_m: f64,
    pool_laps: u32,
}

impl Swimming {
    pub const CODE: &'static str = "SWM";
    pub const ARITY: usize = 5;

    pub fn new(
        strokes: u32,
        duration_hours: f64,
        weight_kg: f64,
        pool_length_m: f64,
        pool_laps: u32,
    ) -> TrainingResult<Self> {
        Ok(Self {
            strokes,
            duration_hours: checked_duration(duration_hours)?,
            weight_kg,
            pool_length_m,
            pool_laps,
        })
    }

    /// Positional values: strokes, duration, weight, pool length, laps.
    pub fn from_values(values: &[f64]) -> TrainingResult<Self> {
        expect_arity(Self::CODE, values, Self::ARITY)?;
        Self::new(
            whole_count("strokes", values[0])?,
            values[1],
            values[2],
            values[3],
            whole_count("pool_laps", values[4])?,
        )
    }
}

impl Workout for Swimming {
    fn label(&self) -> &'static str {
        "Swimming"
    }

    fn duration_hours(&self) -> f64 {
        self.duration_hours
    }

    fn distance_km(&self) -> f64 {
        UnitHelper::units_to_km(self.strokes, LEN_STROKE_M)
    }

    fn mean_speed_kmh(&self) -> f64 {
        self.pool_length_m * f64::from(self.pool_laps) / M_IN_KM / self.duration_hours
    }

    fn calories(&self) -> f64 {
        (self.mean_speed_kmh() + CALORIES_SPEED_SHIFT)
            * CALORIES_WEIGHT_MULTIPLIER
            * self.weight_kg
            * self.duration_hours
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swimming_matches_reference_readings() {
        let swimming = Swimming::from_values(&[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
        assert!((swimming.distance_km() - 0.9936).abs() < 1e-9);
        assert!((swimming.mean_speed_kmh() - 1.0).abs() < 1e-9);
        assert!((swimming.calories() - 336.0).abs() < 1e-9);
        assert_eq!(
            swimming.report().render(),
            "Workout type: Swimming; Duration: 1.000 h; Distance: 0.994 km; \
             Avg speed: 1.000 km/h; Calories burned: 336.000."
        );
    }

    #[test]
    fn swimming_speed_ignores_stroke_distance() {
        let swimming = Swimming::new(1000, 2.0, 70.0, 50.0, 30).unwrap();
        assert!((swimming.distance_km() - 1.38).abs() < 1e-9);
        assert!((swimming.mean_speed_kmh() - 0.75).abs() < 1e-9);
        assert!((swimming.calories() - 518.0).abs() < 1e-9);
    }

    #[test]
    fn swimming_laps_must_be_whole() {
        assert!(Swimming::from_values(&[720.0, 1.0, 80.0, 25.0, 40.5]).is_err());
    }
}
