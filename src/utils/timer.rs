//! Wall-clock timing for benchmark cells.
//!
//! Cells are timed with the monotonic [`Instant`](std::time::Instant)
//! clock and reported in fractional milliseconds. A cell may be repeated
//! (`runs_per_cell`) in which case the median run is reported.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Time an expression. Evaluates to `(elapsed, value)`.
#[macro_export]
macro_rules! measure {
    ($e:expr) => {{
        let start = ::std::time::Instant::now();
        let value = $e;
        let elapsed = start.elapsed();
        (elapsed, ::std::hint::black_box(value))
    }};
}

/// CPU pinning strategy during measurements
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PinStrategy {
    /// Pin once for the whole benchmark run
    Global,
    /// Pin/unpin around each timed execution
    #[default]
    PerExecution,
    /// Leave scheduling to the OS
    Off,
}

/// Configuration for timing measurements
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Timed executions per cell, the median is reported (default: 1)
    pub runs_per_cell: usize,
    /// Untimed executions before measuring (default: 0)
    pub warmup_runs: usize,
    /// CPU pinning strategy (default: PerExecution)
    pub pin_strategy: PinStrategy,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            runs_per_cell: 1,
            warmup_runs: 0,
            pin_strategy: PinStrategy::default(),
        }
    }
}

/// Fractional milliseconds
pub fn as_millis_f64(d: Duration) -> f64 {
    d.as_nanos() as f64 / 1_000_000.0
}

/// Calculate median from a slice of durations.
pub fn calculate_median(times: &[Duration]) -> Duration {
    if times.is_empty() {
        return Duration::ZERO;
    }
    let mut sorted: Vec<_> = times.to_vec();
    sorted.sort();
    sorted[sorted.len() / 2]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_returns_value() {
        let (elapsed, value) = crate::measure!(21 * 2);
        assert_eq!(value, 42);
        assert!(elapsed < Duration::from_secs(1));
    }

    #[test]
    fn test_measure_waits() {
        let (elapsed, _) = crate::measure!(std::thread::sleep(Duration::from_millis(5)));
        assert!(as_millis_f64(elapsed) >= 5.0);
    }

    #[test]
    fn test_as_millis_f64() {
        assert_eq!(as_millis_f64(Duration::from_micros(1500)), 1.5);
        assert_eq!(as_millis_f64(Duration::ZERO), 0.0);
    }

    #[test]
    fn test_median() {
        let times = [
            Duration::from_nanos(30),
            Duration::from_nanos(10),
            Duration::from_nanos(20),
        ];
        assert_eq!(calculate_median(&times), Duration::from_nanos(20));
        assert_eq!(calculate_median(&[]), Duration::ZERO);
    }
}
