use clap::Parser;
use log::debug;
use generator::profile::{build_packages, GeneratorConfig};
use std::io;
use std::path::PathBuf;
use workflow::config::{BatchConfig, FailurePolicy, OutputFormat};
use workflow::runner::Runner;

mod generator;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Workout report driver for fitness sensor packages")]
struct Args {
    /// Load the batch (packages, failure policy, format) from YAML
    #[arg(long)]
    batch: Option<PathBuf>,
    /// Skip packages that cannot be read instead of stopping the batch
    #[arg(long, default_value_t = false)]
    isolate: bool,
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,
    /// Run N seeded synthetic packages instead of the sample batch
    #[arg(long, conflicts_with = "batch")]
    synthetic: Option<usize>,
    /// Seed for --synthetic
    #[arg(long, default_value_t = 0, requires = "synthetic")]
    seed: u64,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = match (args.batch, args.synthetic) {
        (Some(path), _) => BatchConfig::load(path)?,
        (None, Some(count)) => BatchConfig::with_packages(build_packages(&GeneratorConfig {
            count,
            seed: args.seed,
        })),
        (None, None) => BatchConfig::default(),
    };

    if args.isolate {
        config.failure_policy = FailurePolicy::Isolate;
    }
    if let Some(format) = args.format {
        config.format = format;
    }

    debug!(
        "running {} packages ({:?} policy, {:?} output)",
        config.packages.len(),
        config.failure_policy,
        config.format
    );

    let runner = Runner::new(config);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    runner.run_batch(&mut out)?;

    Ok(())
}
