//! Timing harness.
//!
//! Runs every variant of a lab once per input size and appends the elapsed
//! wall-clock time to an explicit [`TimingTable`]:
//! - one instance is generated per size and shared by all variants
//! - single shot per size per variant, no warm-up and no averaging
//! - optional CPU pinning for the duration of the run or per call

use std::hint::black_box;
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use tracing::{debug, info};

use super::bench::{as_micros_f64, mean};
use super::cpu_affinity::CpuPinGuard;
use crate::error::Result;
use crate::registry::LabRunner;

// ============================================================================
// Configuration
// ============================================================================

/// CPU pinning strategy during measurements
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PinStrategy {
    /// Pin once for the whole lab run
    #[default]
    Global,
    /// Pin/unpin around each variant call
    PerExecution,
    /// Never pin
    Disabled,
}

/// Configuration for a timing run
#[derive(Clone, Debug, Default)]
pub struct TimingConfig {
    /// CPU pinning strategy (default: Global)
    pub pin_strategy: PinStrategy,
    /// Log every measurement at info level instead of debug
    pub echo: bool,
}

// ============================================================================
// Accumulator
// ============================================================================

/// One measurement: (algorithm, input size, elapsed).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimingRecord {
    pub algorithm: String,
    pub size: usize,
    pub elapsed: Duration,
}

/// Ordered measurements of one variant, one entry per size.
#[derive(Clone, Debug, Default)]
pub struct TimingSeries {
    pub name: String,
    pub description: String,
    pub times: Vec<Duration>,
    /// Scalar result summary per measurement, when the lab provides one
    pub result_samples: Vec<Option<f64>>,
}

impl TimingSeries {
    /// Mean elapsed time across sizes
    pub fn mean(&self) -> Duration {
        mean(&self.times)
    }
}

/// Accumulated timings of one benchmarking run, keyed by variant name.
///
/// Series keep the order in which their variant was first recorded.
#[derive(Clone, Debug, Default)]
pub struct TimingTable {
    sizes: Vec<usize>,
    series: Vec<TimingSeries>,
}

impl TimingTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a new column on the size axis.
    pub fn push_size(&mut self, size: usize) {
        self.sizes.push(size);
    }

    /// Append a measurement to `name`'s series, creating it if needed.
    pub fn record(&mut self, name: &str, description: &str, elapsed: Duration, sample: Option<f64>) {
        let series = match self.series.iter().position(|s| s.name == name) {
            Some(idx) => &mut self.series[idx],
            None => {
                self.series.push(TimingSeries {
                    name: name.to_string(),
                    description: description.to_string(),
                    ..Default::default()
                });
                let last = self.series.len() - 1;
                &mut self.series[last]
            }
        };
        series.times.push(elapsed);
        series.result_samples.push(sample);
    }

    /// Sizes tested, in order.
    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    /// All series, in first-recorded order.
    pub fn series(&self) -> &[TimingSeries] {
        &self.series
    }

    /// Series for one variant.
    pub fn get(&self, name: &str) -> Option<&TimingSeries> {
        self.series.iter().find(|s| s.name == name)
    }

    /// Drop a variant's series, e.g. to re-chart without an outlier.
    pub fn remove(&mut self, name: &str) -> Option<TimingSeries> {
        let idx = self.series.iter().position(|s| s.name == name)?;
        Some(self.series.remove(idx))
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Whether every series has exactly one entry per size.
    pub fn is_aligned(&self) -> bool {
        self.series.iter().all(|s| s.times.len() == self.sizes.len())
    }

    /// Flatten into (algorithm, size, elapsed) triples, series by series.
    pub fn records(&self) -> Vec<TimingRecord> {
        self.series
            .iter()
            .flat_map(|s| {
                s.times.iter().zip(&self.sizes).map(move |(&elapsed, &size)| TimingRecord {
                    algorithm: s.name.clone(),
                    size,
                    elapsed,
                })
            })
            .collect()
    }
}

// ============================================================================
// Harness
// ============================================================================

/// Time one call of `run`.
fn time_once<F>(run: &mut F) -> Result<(Duration, Option<f64>)>
where
    F: FnMut() -> Result<Option<f64>> + ?Sized,
{
    let start = Instant::now();
    let outcome = black_box(run());
    let elapsed = start.elapsed();
    outcome.map(|sample| (elapsed, sample))
}

/// Measure every variant of `lab` at every size, appending to `table`.
///
/// The accumulator is taken by value and handed back so a run can be
/// extended (e.g. with another size sequence) without global state.
///
/// # Errors
/// Stops at the first failing generator or variant and returns its error.
pub fn measure_lab(
    lab: &dyn LabRunner,
    sizes: &[usize],
    rng: &mut StdRng,
    config: &TimingConfig,
    mut table: TimingTable,
) -> Result<TimingTable> {
    let _global_pin = (config.pin_strategy == PinStrategy::Global).then(CpuPinGuard::new);

    for &size in sizes {
        let mut variants = lab.variant_closures(size, rng)?;
        table.push_size(size);

        for variant in &mut variants {
            let (elapsed, sample) = {
                let _per_exec_pin = (config.pin_strategy == PinStrategy::PerExecution).then(CpuPinGuard::new);
                time_once(&mut variant.run)?
            };

            let micros = as_micros_f64(elapsed);
            if config.echo {
                info!(lab = lab.name(), variant = variant.name, size, micros, ?sample, "measured");
            } else {
                debug!(lab = lab.name(), variant = variant.name, size, micros, ?sample, "measured");
            }

            table.record(variant.name, variant.description, elapsed, sample);
        }
    }

    Ok(table)
}

/// [`measure_lab`] into a fresh table.
pub fn run_lab(lab: &dyn LabRunner, sizes: &[usize], rng: &mut StdRng, config: &TimingConfig) -> Result<TimingTable> {
    measure_lab(lab, sizes, rng, config, TimingTable::new())
}
