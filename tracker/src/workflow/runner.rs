use crate::workflow::config::{BatchConfig, FailurePolicy, OutputFormat};
use anyhow::Context;
use fitcore::prelude::Workout;
use fitcore::telemetry::{BatchSummary, LogManager, MetricsRecorder};
use fitcore::workouts::Training;
use log::info;
use std::io::Write;

#[derive(Clone)]
pub struct Runner {
    config: BatchConfig,
}

impl Runner {
    pub fn new(config: BatchConfig) -> Self {
        Self { config }
    }

    /// Reports one training and writes it as a single line.
    pub fn run<W: Write>(&self, training: &Training, out: &mut W) -> anyhow::Result<()> {
        let message = training.report();
        let line = match self.config.format {
            OutputFormat::Text => message.render(),
            OutputFormat::Json => {
                serde_json::to_string(&message).context("serializing workout report")?
            }
        };
        writeln!(out, "{}", line).context("writing workout report")?;
        Ok(())
    }

    /// Processes every configured package in order.
    pub fn run_batch<W: Write>(&self, out: &mut W) -> anyhow::Result<BatchSummary> {
        let logger = LogManager::new();
        let metrics = MetricsRecorder::new();

        for (index, package) in self.config.packages.iter().enumerate() {
            match Training::try_from(package) {
                Ok(training) => {
                    self.run(&training, out)?;
                    metrics.record_processed();
                }
                Err(err) => match self.config.failure_policy {
                    FailurePolicy::Halt => {
                        return Err(err).with_context(|| {
                            format!("reading package #{} ({})", index, package.code)
                        });
                    }
                    FailurePolicy::Isolate => {
                        logger.record_rejected(index, &package.code, &err.to_string());
                        metrics.record_failed();
                    }
                },
            }
        }

        let summary = metrics.snapshot();
        info!(
            "batch finished: {} processed, {} failed",
            summary.processed, summary.failed
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fitcore::prelude::TrainingError;
    use fitcore::sensor_interface::{InfoMessage, SensorPackage};

    fn lines(buffer: Vec<u8>) -> Vec<String> {
        String::from_utf8(buffer)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    fn mixed_batch() -> Vec<SensorPackage> {
        vec![
            SensorPackage::new("RUN", vec![15000.0, 1.0, 75.0]),
            SensorPackage::new("XYZ", vec![1.0, 2.0, 3.0]),
            SensorPackage::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
        ]
    }

    #[test]
    fn runner_prints_sample_batch_in_order() {
        let runner = Runner::new(BatchConfig::default());
        let mut out = Vec::new();
        let summary = runner.run_batch(&mut out).unwrap();
        assert_eq!(
            lines(out),
            vec![
                "Workout type: Swimming; Duration: 1.000 h; Distance: 0.994 km; Avg speed: 1.000 km/h; Calories burned: 336.000.",
                "Workout type: Running; Duration: 1.000 h; Distance: 9.750 km; Avg speed: 9.750 km/h; Calories burned: 797.805.",
                "Workout type: SportsWalking; Duration: 1.000 h; Distance: 5.850 km; Avg speed: 5.850 km/h; Calories burned: 349.252.",
            ]
        );
        assert_eq!(summary, BatchSummary { processed: 3, failed: 0 });
    }

    #[test]
    fn halt_policy_stops_at_first_rejected_package() {
        let runner = Runner::new(BatchConfig::with_packages(mixed_batch()));
        let mut out = Vec::new();
        let err = runner.run_batch(&mut out).unwrap_err();
        assert_eq!(
            err.downcast_ref::<TrainingError>(),
            Some(&TrainingError::UnrecognizedWorkoutType("XYZ".into()))
        );
        assert!(err.to_string().contains("package #1 (XYZ)"));
        assert_eq!(lines(out).len(), 1);
    }

    #[test]
    fn isolate_policy_skips_rejected_package() {
        let config = BatchConfig {
            failure_policy: FailurePolicy::Isolate,
            ..BatchConfig::with_packages(mixed_batch())
        };
        let runner = Runner::new(config);
        let mut out = Vec::new();
        let summary = runner.run_batch(&mut out).unwrap();
        let printed = lines(out);
        assert_eq!(printed.len(), 2);
        assert!(printed[0].starts_with("Workout type: Running;"));
        assert!(printed[1].starts_with("Workout type: SportsWalking;"));
        assert_eq!(summary, BatchSummary { processed: 2, failed: 1 });
    }

    #[test]
    fn json_format_serializes_report() {
        let config = BatchConfig {
            format: OutputFormat::Json,
            ..BatchConfig::with_packages(vec![SensorPackage::new(
                "SWM",
                vec![720.0, 1.0, 80.0, 25.0, 40.0],
            )])
        };
        let runner = Runner::new(config);
        let mut out = Vec::new();
        runner.run_batch(&mut out).unwrap();
        let printed = lines(out);
        let message: InfoMessage = serde_json::from_str(&printed[0]).unwrap();
        assert_eq!(message.workout_label, "Swimming");
        assert_eq!(message.calories, 336.0);
    }
}
