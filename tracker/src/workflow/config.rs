use anyhow::Context;
use clap::ValueEnum;
use fitcore::sensor_interface::SensorPackage;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// What the batch does when a package cannot be turned into a training.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Stop at the first rejected package and surface its error.
    #[default]
    Halt,
    /// Log the rejected package and continue with the next one.
    Isolate,
}

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    pub failure_policy: FailurePolicy,
    pub format: OutputFormat,
    pub packages: Vec<SensorPackage>,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            failure_policy: FailurePolicy::Halt,
            format: OutputFormat::Text,
            packages: SensorPackage::sample_batch(),
        }
    }
}

impl BatchConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading batch config {}", path_ref.display()))?;
        let config: BatchConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing batch config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn with_packages(packages: Vec<SensorPackage>) -> Self {
        Self {
            packages,
            ..Default::default()
        }
    }
}
