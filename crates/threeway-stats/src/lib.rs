//! Latency profiles for comparison strategies
//!
//! A [Profile] collects one sample per classification into a DDSketch and, once the
//! strategy has finished, turns into a [Report] with the [Percentiles] of those samples and
//! the wall time of the whole run.
//!
//! ```
//! use threeway_stats::{profile_scope, Profile};
//!
//! let mut profile = Profile::start();
//! for x in 0..10u32 {
//!     profile_scope!(&mut profile);
//!     std::hint::black_box(x.cmp(&5));
//! }
//! let report = profile.finish();
//! assert_eq!(report.percentiles.count, 10);
//! ```
#![deny(missing_docs)]

use minstant::Instant;
use sketches_ddsketch::{Config, DDSketch};
use std::time::Duration;

/// Times the rest of the enclosing scope into a [Profile]
#[macro_export]
macro_rules! profile_scope {
    ($profile:expr) => {
        let _measure = $crate::Measure::new($profile);
    };
}

/// Latency percentiles of one strategy, in nanoseconds
///
/// Every field is zero when nothing was recorded.
#[allow(missing_docs)]
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Percentiles {
    pub count: usize,
    pub min: f64,
    pub p50: f64,
    pub p99: f64,
    pub p99_9: f64,
    pub max: f64,
}

impl Percentiles {
    fn of(sketch: &DDSketch) -> Self {
        let at = |q: f64| sketch.quantile(q).ok().flatten().unwrap_or(0.0);
        Self {
            count: sketch.count(),
            min: sketch.min().unwrap_or(0.0),
            p50: at(0.5),
            p99: at(0.99),
            p99_9: at(0.999),
            max: sketch.max().unwrap_or(0.0),
        }
    }
}

/// What a finished [Profile] hands back to the harness
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Report {
    /// Per-sample latencies
    pub percentiles: Percentiles,
    /// Wall time between [Profile::start] and [Profile::finish]
    pub total: Duration,
}

/// Samples of a single strategy run
pub struct Profile {
    sketch: DDSketch,
    started: Instant,
}

impl Profile {
    /// Starts an empty profile, the wall clock runs from here
    pub fn start() -> Self {
        Self {
            sketch: DDSketch::new(Config::defaults()),
            started: Instant::now(),
        }
    }

    /// Records one sample
    #[inline]
    pub fn record(&mut self, elapsed: Duration) {
        self.sketch.add(elapsed.as_nanos() as f64);
    }

    /// Number of samples so far
    pub fn samples(&self) -> usize {
        self.sketch.count()
    }

    /// Percentiles of the samples so far
    pub fn percentiles(&self) -> Percentiles {
        Percentiles::of(&self.sketch)
    }

    /// Stops the wall clock
    pub fn finish(self) -> Report {
        Report {
            percentiles: self.percentiles(),
            total: self.started.elapsed(),
        }
    }
}

/// Records the time between its creation and drop into a [Profile]
pub struct Measure<'a> {
    start: Instant,
    profile: &'a mut Profile,
}

impl<'a> Measure<'a> {
    /// Starts a sample
    #[inline]
    pub fn new(profile: &'a mut Profile) -> Self {
        Measure {
            start: Instant::now(),
            profile,
        }
    }
}

impl Drop for Measure<'_> {
    #[inline]
    fn drop(&mut self) {
        self.profile.record(self.start.elapsed());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_profile_reports_zeroes() {
        let report = Profile::start().finish();
        assert_eq!(report.percentiles, Percentiles::default());
    }

    #[test]
    fn percentiles_track_recorded_samples() {
        let mut profile = Profile::start();
        for nanos in 1..=100 {
            profile.record(Duration::from_nanos(nanos));
        }
        let percentiles = profile.percentiles();
        assert_eq!(percentiles.count, 100);
        assert_eq!(percentiles.min, 1.0);
        assert_eq!(percentiles.max, 100.0);
        // 1% relative accuracy
        assert!((percentiles.p50 - 50.0).abs() <= 2.0, "{:?}", percentiles);
        assert!(percentiles.p50 <= percentiles.p99 && percentiles.p99 <= percentiles.max);
    }

    #[test]
    fn scope_records_one_sample_on_drop() {
        let mut profile = Profile::start();
        for _ in 0..3 {
            profile_scope!(&mut profile);
        }
        assert_eq!(profile.samples(), 3);
    }

    #[test]
    fn total_covers_recorded_work() {
        let mut profile = Profile::start();
        {
            profile_scope!(&mut profile);
            std::thread::sleep(Duration::from_millis(2));
        }
        let report = profile.finish();
        assert!(report.total >= Duration::from_millis(2));
        assert!(report.percentiles.min >= 2_000_000.0 * 0.98);
    }
}
