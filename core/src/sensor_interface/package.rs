use serde::{Deserialize, Serialize};

/// Raw reading forwarded by a sensor block: a workout code plus its
/// positional values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SensorPackage {
    pub code: String,
    pub values: Vec<f64>,
}

impl SensorPackage {
    pub fn new(code: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            code: code.into(),
            values,
        }
    }

    /// The three packages emitted by the reference sensor run.
    pub fn sample_batch() -> Vec<SensorPackage> {
        vec![
            SensorPackage::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
            SensorPackage::new("RUN", vec![15000.0, 1.0, 75.0]),
            SensorPackage::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
        ]
    }
}
