//! Logging utilities for formatted output.
//!
//! Consistent, user-friendly helpers for counts, rates, run timing, and the
//! length summary printed at the end of a batch.

use std::time::{Duration, Instant};

/// Formats a count with thousands separators.
///
/// # Examples
///
/// ```
/// use genomesim_lib::logging::format_count;
///
/// assert_eq!(format_count(0), "0");
/// assert_eq!(format_count(1234567), "1,234,567");
/// ```
#[must_use]
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Formats a fraction (0.0-1.0) as a percentage with `decimals` decimal places.
///
/// # Examples
///
/// ```
/// use genomesim_lib::logging::format_percent;
///
/// assert_eq!(format_percent(0.9543, 2), "95.43%");
/// assert_eq!(format_percent(1.0, 0), "100%");
/// ```
#[must_use]
pub fn format_percent(value: f64, decimals: usize) -> String {
    format!("{:.decimals$}%", value * 100.0, decimals = decimals)
}

/// Formats a duration in human-readable form (e.g. "45s", "2m 15s", "1h 30m").
///
/// # Examples
///
/// ```
/// use genomesim_lib::logging::format_duration;
/// use std::time::Duration;
///
/// assert_eq!(format_duration(Duration::from_secs(135)), "2m 15s");
/// ```
#[must_use]
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    if secs < 60 {
        format!("{secs}s")
    } else if secs < 3600 {
        let mins = secs / 60;
        let remaining_secs = secs % 60;
        if remaining_secs == 0 { format!("{mins}m") } else { format!("{mins}m {remaining_secs}s") }
    } else {
        let hours = secs / 3600;
        let mins = (secs % 3600) / 60;
        if mins == 0 { format!("{hours}h") } else { format!("{hours}h {mins}m") }
    }
}

/// Formats a processing rate for `count` items over `duration`.
///
/// Rates under one per second are shown per minute.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_rate(count: u64, duration: Duration, unit: &str) -> String {
    let secs = duration.as_secs_f64();
    if secs < 0.001 {
        return format!("{} {unit}/s", format_count(count));
    }

    let rate = count as f64 / secs;
    if rate >= 1.0 {
        format!("{} {unit}/s", format_count(rate as u64))
    } else {
        let per_min = count as f64 / (secs / 60.0);
        format!("{per_min:.1} {unit}/min")
    }
}

/// Mean, standard deviation, min, and max of a set of lengths.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LengthSummary {
    pub count: usize,
    pub mean: f64,
    pub stddev: f64,
    pub min: usize,
    pub max: usize,
}

impl LengthSummary {
    /// Summarizes `lengths`, or returns `None` when there are none.
    ///
    /// The standard deviation is the population standard deviation.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn from_lengths(lengths: &[usize]) -> Option<Self> {
        let min = *lengths.iter().min()?;
        let max = *lengths.iter().max()?;
        let n = lengths.len() as f64;
        let mean = lengths.iter().map(|&l| l as f64).sum::<f64>() / n;
        let variance = lengths.iter().map(|&l| (l as f64 - mean).powi(2)).sum::<f64>() / n;
        Some(Self { count: lengths.len(), mean, stddev: variance.sqrt(), min, max })
    }
}

/// Logs the length summary of generated sequences.
pub fn log_length_summary(lengths: &[usize]) {
    let Some(summary) = LengthSummary::from_lengths(lengths) else {
        log::info!("No sequences were generated.");
        return;
    };
    log::info!("Generated sequence lengths ({} sequences):", format_count(summary.count as u64));
    log::info!("  Mean: {:.2} ± {:.2}", summary.mean, summary.stddev);
    log::info!("  Min: {}", format_count(summary.min as u64));
    log::info!("  Max: {}", format_count(summary.max as u64));
}

/// Operation timing and summary helper.
///
/// # Examples
///
/// ```no_run
/// use genomesim_lib::logging::OperationTimer;
///
/// let timer = OperationTimer::new("Simulating sequences");
///
/// // ... do work ...
///
/// timer.log_completion(12, "files");
/// ```
pub struct OperationTimer {
    operation: String,
    start_time: Instant,
}

impl OperationTimer {
    /// Creates a new operation timer and logs the start.
    #[must_use]
    pub fn new(operation: &str) -> Self {
        log::info!("{operation} ...");
        Self { operation: operation.to_string(), start_time: Instant::now() }
    }

    /// Time elapsed since the timer was created.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Logs the completion with item count and rate.
    pub fn log_completion(&self, count: u64, unit: &str) {
        let duration = self.elapsed();
        log::info!(
            "{} completed: {} {unit} in {} ({})",
            self.operation,
            format_count(count),
            format_duration(duration),
            format_rate(count, duration, unit)
        );
    }
}
