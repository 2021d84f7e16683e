//! Command-line runner for the labs.
//!
//! Usage:
//!   algo-labs                   # Run every lab with its default sizes
//!   algo-labs --list            # List available labs
//!   algo-labs sorting           # Run one lab
//!   algo-labs --verify          # Cross-check every lab's variants
//!   algo-labs --series primes   # Also print the chart series
//!   algo-labs --help            # Show help

use std::path::PathBuf;
use std::process::ExitCode;

use algo_labs::registry::{build_registry, LabRegistry};
use algo_labs::tui::{self, ReportOptions, ReportStyle};
use algo_labs::utils::{lab_rng, PinStrategy, TimingConfig};
use algo_labs::Result;
use clap::{Parser, ValueEnum};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "algo-labs")]
#[command(author, version, about = "Time textbook algorithm variants across growing input sizes")]
/// Command-line arguments for the lab runner
#[allow(clippy::struct_excessive_bools)]
struct Cli {
    /// Lab to run (all labs when omitted)
    #[arg(value_name = "LAB")]
    lab: Option<String>,

    /// List available labs and exit
    #[arg(short, long)]
    list: bool,

    /// Comma-separated input sizes overriding the lab's defaults
    #[arg(long, value_delimiter = ',')]
    sizes: Option<Vec<usize>>,

    /// Seed for the input generators (OS entropy when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Append raw timings to this CSV file
    #[arg(long, value_name = "PATH")]
    csv: Option<PathBuf>,

    /// Drop a variant's series before ranking and charting (repeatable)
    #[arg(long, value_name = "NAME")]
    exclude: Vec<String>,

    /// Run every lab's cross-variant verification and exit
    #[arg(long)]
    verify: bool,

    /// Print each variant's (size, microseconds) chart series
    #[arg(long)]
    series: bool,

    /// Plain output without ANSI colours
    #[arg(long)]
    no_color: bool,

    /// CPU pinning strategy while timing
    #[arg(long, value_enum, default_value_t = PinArg::Global)]
    pin: PinArg,

    /// Debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PinArg {
    Global,
    PerExecution,
    Off,
}

impl From<PinArg> for PinStrategy {
    fn from(arg: PinArg) -> Self {
        match arg {
            PinArg::Global => PinStrategy::Global,
            PinArg::PerExecution => PinStrategy::PerExecution,
            PinArg::Off => PinStrategy::Disabled,
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn verify_all(registry: &LabRegistry) -> Result<()> {
    for lab in registry.all() {
        lab.verify()?;
        info!(lab = lab.name(), "verification passed");
    }
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let registry = build_registry();

    if cli.list {
        tui::print_available_labs(&registry);
        return Ok(());
    }

    if cli.verify {
        return verify_all(&registry);
    }

    let labs = match &cli.lab {
        Some(name) => vec![registry.require(name)?],
        None => registry.all().iter().map(|l| l.as_ref()).collect(),
    };

    let options = ReportOptions {
        style: (!cli.no_color).then(ReportStyle::ansi),
        exclude: cli.exclude,
        csv_path: cli.csv,
        show_series: cli.series,
    };
    let config = TimingConfig {
        pin_strategy: cli.pin.into(),
        echo: cli.verbose,
    };
    let mut rng = lab_rng(cli.seed);

    tui::print_header(options.style.as_ref());

    for lab in labs {
        let sizes = cli.sizes.clone().unwrap_or_else(|| lab.default_sizes());
        tui::run_and_display(lab, &sizes, &mut rng, &config, &options)?;
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
