//! Sample Sizer CLI
//!
//! Estimate whether a per-group sample size is enough to show a difference
//! between two upsell rates with a one-sided Fisher's exact test.
use clap::Parser;
use sample_sizer::config::{ConfigIO, SizerConfig};
use sample_sizer::constants::MAX_SAMPLE_SIZE;
use sample_sizer::fisher::Alternative;
use sample_sizer::report::{render, OutputFormat};
use sample_sizer::table::RoundingPolicy;
use sample_sizer::SampleSizerError;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(
    name = "sample-sizer",
    version,
    about = "Estimate sample sizes for different upsell rates with Fisher's exact test"
)]
struct Cli {
    /// Size of the sample for each group, e.g. 1000 means 1000 people in treatment and 1000 in control
    #[arg(short = 'n', long, value_parser = clap::value_parser!(u64).range(0..=MAX_SAMPLE_SIZE))]
    sample_size: Option<u64>,

    /// Upsell rate (%) estimated for the control group
    #[arg(short, long, value_name = "PCT")]
    control_rate: Option<f64>,

    /// Upsell rate (%) estimated for the treatment group
    #[arg(short, long, value_name = "PCT")]
    treatment_rate: Option<f64>,

    /// p-values below this reject the null hypothesis
    #[arg(long, value_name = "ALPHA")]
    threshold: Option<f64>,

    /// Rounding of expected counts (HalfToEven, HalfAwayFromZero)
    #[arg(long)]
    rounding: Option<RoundingPolicy>,

    /// Direction of the exact test (greater, less, two-sided)
    #[arg(long)]
    alternative: Option<Alternative>,

    /// Output format (text, json)
    #[arg(short, long, value_name = "FORMAT")]
    output: Option<OutputFormat>,

    /// Configuration file to start from
    #[arg(long, value_name = "FILE", env = "SAMPLE_SIZER_CONFIG")]
    config: Option<PathBuf>,

    /// Write the effective configuration to this file
    #[arg(long, value_name = "FILE")]
    save_config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), SampleSizerError> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = resolve_config(&cli)?;
    let trial = config.trial();
    let result = trial.evaluate()?;
    println!("{}", render(config.output, &trial, &result)?);
    Ok(())
}

/// Load the starting configuration, apply flag overrides, validate, and save it if asked.
fn resolve_config(cli: &Cli) -> Result<SizerConfig, SampleSizerError> {
    let mut config = match &cli.config {
        Some(path) => SizerConfig::load_config(path)?,
        None => SizerConfig::default(),
    };
    apply_overrides(&mut config, cli);
    config.validate()?;

    if let Some(path) = &cli.save_config {
        config.save_config(path)?;
        log::info!("Saved configuration to {}.", path.display());
    }
    Ok(config)
}

fn apply_overrides(config: &mut SizerConfig, cli: &Cli) {
    if let Some(sample_size) = cli.sample_size {
        config.sample_size = sample_size;
    }
    if let Some(control_rate) = cli.control_rate {
        config.control_rate_pct = control_rate;
    }
    if let Some(treatment_rate) = cli.treatment_rate {
        config.treatment_rate_pct = treatment_rate;
    }
    if let Some(threshold) = cli.threshold {
        config.significance_threshold = threshold;
    }
    if let Some(rounding) = cli.rounding {
        config.rounding = rounding;
    }
    if let Some(alternative) = cli.alternative {
        config.alternative = alternative;
    }
    if let Some(output) = cli.output {
        config.output = output;
    }
}

fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "sample_sizer=debug,info" } else { "sample_sizer=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}
