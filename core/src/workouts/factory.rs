use super::{Running, SportsWalking, Swimming, Training};
use crate::prelude::{TrainingError, TrainingResult};
use crate::sensor_interface::SensorPackage;
use std::fmt;
use std::str::FromStr;

/// Workout codes understood by the sensor blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkoutCode {
    Swimming,
    Running,
    SportsWalking,
}

type Constructor = fn(&[f64]) -> TrainingResult<Training>;

const REGISTRY: [(WorkoutCode, Constructor); 3] = [
    (WorkoutCode::Swimming, |values| {
        Swimming::from_values(values).map(Training::Swimming)
    }),
    (WorkoutCode::Running, |values| {
        Running::from_values(values).map(Training::Running)
    }),
    (WorkoutCode::SportsWalking, |values| {
        SportsWalking::from_values(values).map(Training::SportsWalking)
    }),
];

fn lookup(code: &str) -> TrainingResult<(WorkoutCode, Constructor)> {
    REGISTRY
        .iter()
        .copied()
        .find(|(workout_code, _)| workout_code.as_str() == code)
        .ok_or_else(|| TrainingError::UnrecognizedWorkoutType(code.to_string()))
}

impl WorkoutCode {
    pub fn as_str(self) -> &'static str {
        match self {
            WorkoutCode::Swimming => Swimming::CODE,
            WorkoutCode::Running => Running::CODE,
            WorkoutCode::SportsWalking => SportsWalking::CODE,
        }
    }

    pub fn all() -> [WorkoutCode; 3] {
        REGISTRY.map(|(code, _)| code)
    }
}

impl FromStr for WorkoutCode {
    type Err = TrainingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lookup(s).map(|(code, _)| code)
    }
}

impl fmt::Display for WorkoutCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Builds the training matching `code` from its positional sensor values.
pub fn read_package(code: &str, values: &[f64]) -> TrainingResult<Training> {
    let (_, build) = lookup(code)?;
    build(values)
}

impl TryFrom<&SensorPackage> for Training {
    type Error = TrainingError;

    fn try_from(package: &SensorPackage) -> Result<Self, Self::Error> {
        read_package(&package.code, &package.values)
    }
}
