//! Output formatting for demo runs

use crate::executor::RunStats;
use chrono::TimeDelta;
use itertools::Itertools;
use tour_kit::{DemoInfo, DemoRun};

/// Output formatter for demo runs
pub struct OutputFormatter {
    verbose: bool,
    start_time: std::time::Instant,
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(verbose: bool) -> Self {
        Self {
            verbose,
            start_time: std::time::Instant::now(),
        }
    }

    /// Print a demo's transcript, with header and timing in verbose mode
    pub fn print_run(&self, run: &DemoRun) {
        if self.verbose {
            println!("== {} ==", run.name);
        }

        for line in run.transcript.lines() {
            println!("{}", line);
        }

        if self.verbose {
            let status = if run.is_ok() { "ok" } else { "FAILED" };
            println!("({} in {})", status, format_duration(run.duration()));
            println!();
        }
    }

    /// Print a summary after all demos (verbose mode only)
    pub fn print_summary(&self, stats: &[RunStats]) {
        if !self.verbose {
            return;
        }

        let total: TimeDelta = stats.iter().map(|s| s.duration).sum();

        println!("--- Summary ---");
        for line in format_stats(stats) {
            println!("{}", line);
        }
        println!("Demos: {} passed", stats.len());
        println!("Total run time: {}", format_duration(total));
        println!(
            "Elapsed wall-clock time: {}",
            format_std_duration(self.start_time.elapsed())
        );
    }
}

/// One line per finished demo: name and run time
pub fn format_stats(stats: &[RunStats]) -> Vec<String> {
    stats
        .iter()
        .map(|s| format!("  {:<12} {}", s.name, format_duration(s.duration)))
        .collect()
}

/// One line per demo: order, name and tags
pub fn format_listing(demos: &[DemoInfo]) -> Vec<String> {
    demos
        .iter()
        .map(|info| {
            if info.tags.is_empty() {
                format!("{:>3}  {}", info.order, info.name)
            } else {
                format!("{:>3}  {:<12} [{}]", info.order, info.name, info.tags.iter().join(", "))
            }
        })
        .collect()
}

/// Format a TimeDelta for display
fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}

/// Format a std::time::Duration for display (used for wall-clock time)
fn format_std_duration(d: std::time::Duration) -> String {
    let micros = d.as_micros();
    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", d.as_secs_f64())
    }
}
