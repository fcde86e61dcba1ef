use fitcore::sensor_interface::SensorPackage;
use fitcore::workouts::running::LEN_STEP_M;
use fitcore::workouts::swimming::LEN_STROKE_M;
use fitcore::workouts::WorkoutCode;
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Configuration for generating synthetic sensor packages.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub count: usize,
    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self { count: 3, seed: 0 }
    }
}

fn round_to(value: f64, digits: i32) -> f64 {
    let scale = 10f64.powi(digits);
    (value * scale).round() / scale
}

fn build_values(code: WorkoutCode, rng: &mut StdRng) -> Vec<f64> {
    let duration = round_to(rng.gen_range(0.5..2.0), 2);
    let weight = round_to(rng.gen_range(50.0..100.0), 1);

    match code {
        WorkoutCode::Running => {
            let speed_kmh = rng.gen_range(8.0..14.0);
            let steps = (speed_kmh * duration * 1000.0 / LEN_STEP_M).round();
            vec![steps, duration, weight]
        }
        WorkoutCode::SportsWalking => {
            let speed_kmh = rng.gen_range(4.0..7.0);
            let steps = (speed_kmh * duration * 1000.0 / LEN_STEP_M).round();
            let height = round_to(rng.gen_range(150.0..200.0), 0);
            vec![steps, duration, weight, height]
        }
        WorkoutCode::Swimming => {
            let pool_length = if rng.gen_bool(0.5) { 25.0 } else { 50.0 };
            let laps = f64::from(rng.gen_range(10u32..60));
            let strokes = (pool_length * laps / LEN_STROKE_M).round();
            vec![strokes, duration, weight, pool_length, laps]
        }
    }
}

/// Builds `config.count` packages cycling through every workout code.
/// The same seed always yields the same packages.
pub fn build_packages(config: &GeneratorConfig) -> Vec<SensorPackage> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let codes = WorkoutCode::all();

    (0..config.count)
        .map(|index| {
            let code = codes[index % codes.len()];
            SensorPackage::new(code.as_str(), build_values(code, &mut rng))
        })
        .collect()
}
