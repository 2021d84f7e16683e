//! Text User Interface (TUI) utilities.
//!
//! Turns a [`TimingTable`] into rankings, per-size tables, chart series and a
//! terminal bar chart. Styling is opt-in: with no [`ReportStyle`] nothing but
//! plain text is printed.

use std::path::PathBuf;
use std::time::Duration;

use rand::rngs::StdRng;
use terminal_size::{terminal_size, Width};
use tracing::{info, warn};

use super::bench::{as_micros_f64, format_measurement};
use super::runner::export_csv;
use super::timer::{run_lab, TimingConfig, TimingTable};
use crate::error::Result;
use crate::registry::{LabRegistry, LabRunner};

/// Get the current terminal width, constrained to a reasonable range
fn get_term_width() -> usize {
    if let Some((Width(w), _)) = terminal_size() {
        (w as usize).clamp(40, 200)
    } else {
        80
    }
}

/// Truncate string with ellipsis if it exceeds width (character-wise)
fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut result: String = s.chars().take(width.saturating_sub(3)).collect();
        result.push_str("...");
        result
    }
}

// ============================================================================
// Styling
// ============================================================================

/// Which part of a report a piece of text belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Title,
    Label,
    Value,
    Highlight,
}

/// ANSI escape sequences per [`Tone`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportStyle {
    pub title: &'static str,
    pub label: &'static str,
    pub value: &'static str,
    pub highlight: &'static str,
    pub reset: &'static str,
}

impl ReportStyle {
    /// Blue labels, yellow values, red highlights.
    pub fn ansi() -> Self {
        Self {
            title: "\x1b[1m\x1b[94m",
            label: "\x1b[94m",
            value: "\x1b[93m",
            highlight: "\x1b[91m",
            reset: "\x1b[0m",
        }
    }

    fn code(&self, tone: Tone) -> &'static str {
        match tone {
            Tone::Title => self.title,
            Tone::Label => self.label,
            Tone::Value => self.value,
            Tone::Highlight => self.highlight,
        }
    }
}

/// Wrap `text` in the style's escape codes, or return it unchanged.
pub fn paint(style: Option<&ReportStyle>, tone: Tone, text: &str) -> String {
    match style {
        Some(style) => format!("{}{}{}", style.code(tone), text, style.reset),
        None => text.to_string(),
    }
}

// ============================================================================
// Derived views
// ============================================================================

/// A variant and its mean elapsed time.
#[derive(Clone, Debug, PartialEq)]
pub struct RankedEntry {
    pub name: String,
    pub mean: Duration,
    /// Result summary at the largest size, if any
    pub last_result: Option<f64>,
}

/// Variants ordered by mean elapsed time, fastest first.
pub fn rank_by_mean(table: &TimingTable) -> Vec<RankedEntry> {
    let mut ranked: Vec<RankedEntry> = table
        .series()
        .iter()
        .map(|s| RankedEntry {
            name: s.name.clone(),
            mean: s.mean(),
            last_result: s.result_samples.last().copied().flatten(),
        })
        .collect();
    ranked.sort_by_key(|r| r.mean);
    ranked
}

/// Labelled (x, y) points for a line chart.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartSeries {
    pub label: String,
    /// (input size, elapsed microseconds)
    pub points: Vec<(f64, f64)>,
}

/// One line per variant: elapsed microseconds against input size.
pub fn chart_series(table: &TimingTable) -> Vec<ChartSeries> {
    table
        .series()
        .iter()
        .map(|s| ChartSeries {
            label: s.name.clone(),
            points: table
                .sizes()
                .iter()
                .zip(&s.times)
                .map(|(&size, &t)| (size as f64, as_micros_f64(t)))
                .collect(),
        })
        .collect()
}

/// One bar per variant at a single size column.
pub fn bar_series(table: &TimingTable, size_index: usize) -> Vec<(String, Duration)> {
    table
        .series()
        .iter()
        .filter_map(|s| s.times.get(size_index).map(|&t| (s.name.clone(), t)))
        .collect()
}

// ============================================================================
// Rendering
// ============================================================================

/// Render the per-size table: one row per size, one column per variant.
pub fn render_results_table(table: &TimingTable, size_label: &str, style: Option<&ReportStyle>) -> String {
    let mut out = String::new();
    if table.is_empty() {
        return out;
    }

    let columns = table.series().len();
    let term_width = get_term_width();
    let size_col = size_label.len().max(8);
    let col_width = (term_width.saturating_sub(size_col + 4) / columns).clamp(10, 24);
    let table_width = size_col + columns * (col_width + 1);

    let mut header = format!("  {:<width$}", truncate(size_label, size_col), width = size_col);
    for series in table.series() {
        header.push_str(&format!(" {:>width$}", truncate(&series.name, col_width), width = col_width));
    }
    out.push_str(&paint(style, Tone::Label, &header));
    out.push('\n');
    out.push_str(&format!("  {}\n", "─".repeat(table_width)));

    for (row, size) in table.sizes().iter().enumerate() {
        out.push_str(&format!("  {:<width$}", size, width = size_col));
        for series in table.series() {
            let cell = series.times.get(row).map(|&t| format_measurement(t)).unwrap_or_default();
            let cell = format!(" {:>width$}", cell, width = col_width);
            out.push_str(&paint(style, Tone::Value, &cell));
        }
        out.push('\n');
    }
    out
}

/// Render the ranking by mean time.
pub fn render_ranking(ranked: &[RankedEntry], style: Option<&ReportStyle>) -> String {
    let mut out = String::new();
    for (i, entry) in ranked.iter().enumerate() {
        let result = entry.last_result.map(|r| format!("  (result: {})", r)).unwrap_or_default();
        out.push_str(&format!(
            "  {}: {} = {} mean{}\n",
            i + 1,
            paint(style, Tone::Label, &entry.name),
            paint(style, Tone::Value, &format_measurement(entry.mean)),
            result
        ));
    }
    out
}

/// Render a horizontal bar chart of one size column.
pub fn render_bar_chart(table: &TimingTable, size_index: usize, style: Option<&ReportStyle>) -> String {
    let bars = bar_series(table, size_index);
    let mut out = String::new();
    let Some(longest) = bars.iter().map(|(_, t)| *t).max() else {
        return out;
    };

    let label_width = bars.iter().map(|(n, _)| n.len()).max().unwrap_or(0).min(24);
    let bar_width = get_term_width().saturating_sub(label_width + 20).max(10);

    for (name, elapsed) in &bars {
        let filled = if longest.is_zero() {
            0
        } else {
            ((elapsed.as_nanos() as f64 / longest.as_nanos() as f64) * bar_width as f64).round() as usize
        };
        out.push_str(&format!(
            "  {:<lw$} {} {}\n",
            truncate(name, label_width),
            paint(style, Tone::Highlight, &"█".repeat(filled.max(1))),
            format_measurement(*elapsed),
            lw = label_width
        ));
    }
    out
}

/// Render chart series as `name: (x, y) (x, y) ...`, one line per variant.
pub fn render_chart_series(series: &[ChartSeries], style: Option<&ReportStyle>) -> String {
    let mut out = String::new();
    for line in series {
        let points: Vec<String> = line.points.iter().map(|(x, y)| format!("({}, {})", x, y)).collect();
        out.push_str(&format!("  {}: {}\n", paint(style, Tone::Label, &line.label), points.join(" ")));
    }
    out
}

/// Print the application header
pub fn print_header(style: Option<&ReportStyle>) {
    let term_width = get_term_width().min(80);
    let title = " Algorithm Labs ";
    let padding = term_width.saturating_sub(title.len()) / 2;
    let right_padding = term_width.saturating_sub(padding + title.len());

    let border = "═".repeat(term_width);

    println!("╔{}╗", border);
    println!(
        "║{}{}{}║",
        " ".repeat(padding),
        paint(style, Tone::Title, title),
        " ".repeat(right_padding)
    );
    println!("╚{}╝", border);
    println!();
}

/// Print lab info box
pub fn print_lab_info_box(lab: &dyn LabRunner) {
    let term_width = get_term_width();
    let max_content_width = term_width.saturating_sub(4).max(40);

    let mut lines = vec![
        format!("Lab:      {}", lab.name()),
        format!("Category: {}", lab.category()),
        lab.description().to_string(),
    ];
    let variant_line = format!("Variants: {}", lab.available_variants().join(", "));
    let notes = lab.notes();

    let content_width = lines
        .iter()
        .chain(std::iter::once(&variant_line))
        .chain(&notes)
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(60)
        .min(max_content_width);

    let border = "─".repeat(content_width + 2);
    let row = |text: &str| println!("│ {:<width$} │", truncate(text, content_width), width = content_width);

    println!("┌{}┐", border);
    for line in lines.drain(..) {
        row(&line);
    }
    println!("├{}┤", border);
    row(&variant_line);
    if !notes.is_empty() {
        println!("├{}┤", border);
        for note in &notes {
            row(note);
        }
    }
    println!("└{}┘", border);
    println!();
}

/// Print the list of available labs
pub fn print_available_labs(registry: &LabRegistry) {
    println!("Available labs:");
    println!();
    for lab in registry.all() {
        println!("  {:<24} [{}] - {}", lab.name(), lab.category(), lab.description());
    }
}

// ============================================================================
// Orchestration
// ============================================================================

/// How a lab run is reported.
#[derive(Clone, Debug, Default)]
pub struct ReportOptions {
    /// Styling; `None` prints plain text
    pub style: Option<ReportStyle>,
    /// Variants whose series are dropped before ranking and charting
    pub exclude: Vec<String>,
    /// CSV file that raw timings are appended to
    pub csv_path: Option<PathBuf>,
    /// Also print the (size, microseconds) points of every series
    pub show_series: bool,
}

/// Run one lab and print its info box, per-size table, ranking and bar chart.
///
/// # Errors
/// Propagates harness errors. A failed CSV export is logged and skipped.
pub fn run_and_display(
    lab: &dyn LabRunner,
    sizes: &[usize],
    rng: &mut StdRng,
    config: &TimingConfig,
    options: &ReportOptions,
) -> Result<TimingTable> {
    let style = options.style.as_ref();
    print_lab_info_box(lab);

    info!(lab = lab.name(), sizes = ?sizes, "running lab");
    let mut table = run_lab(lab, sizes, rng, config)?;

    if let Some(path) = &options.csv_path {
        match export_csv(path, lab.name(), &table, true) {
            Ok(()) => info!(path = %path.display(), "raw timings exported"),
            Err(e) => warn!(path = %path.display(), error = %e, "failed to export CSV"),
        }
    }

    for name in &options.exclude {
        if table.remove(name).is_some() {
            info!(lab = lab.name(), variant = %name, "series excluded from report");
        }
    }

    print!("{}", render_results_table(&table, lab.size_label(), style));
    println!();

    let sizes_note = match (table.sizes().first(), table.sizes().last()) {
        (Some(first), Some(last)) => format!("{}-{}", first, last),
        _ => String::from("none"),
    };
    println!(
        "  {}",
        paint(style, Tone::Highlight, &format!("Ranking by mean time ({} {}):", lab.size_label(), sizes_note))
    );
    print!("{}", render_ranking(&rank_by_mean(&table), style));
    println!();

    if let Some(last) = table.sizes().len().checked_sub(1) {
        println!("  {}", paint(style, Tone::Highlight, &format!("{} = {}:", lab.size_label(), table.sizes()[last])));
        print!("{}", render_bar_chart(&table, last, style));
        println!();
    }

    if options.show_series {
        println!("  {}", paint(style, Tone::Highlight, &format!("Chart series ({}, µs):", lab.size_label())));
        print!("{}", render_chart_series(&chart_series(&table), style));
        println!();
    }

    Ok(table)
}
