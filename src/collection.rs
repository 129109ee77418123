//! This is the main file to house data collection functions.
//!
//! Usage is derived from the difference between two successive reads of the
//! runtime counter, divided by the wall-clock time that passed between them.

pub mod error;
pub mod runtime;

use std::time::{Duration, SystemTime};

use log::debug;

use self::{error::RuntimeResult, runtime::RuntimeReader};

/// A single read of the runtime counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sample {
    /// When the counter was read.
    pub timestamp: SystemTime,
    /// The counter value, in milliseconds.
    pub value: u64,
}

/// The values exported after every successful tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DerivedMetrics {
    /// The raw counter, passed through as-is.
    pub cumulative_runtime_ms: u64,
    /// Utilisation over the last interval, always within `[0, 100]`.
    pub usage_percent: f64,
}

/// Samples the runtime counter and derives usage from it.
///
/// Only one baseline is kept at a time. `tick` takes `&mut self`, so
/// ticks on a given collector are always serialized.
#[derive(Debug)]
pub struct RuntimeCollector {
    reader: RuntimeReader,
    previous: Option<Sample>,
    last_usage: f64,
}

impl RuntimeCollector {
    pub fn new(reader: RuntimeReader) -> Self {
        Self {
            reader,
            previous: None,
            last_usage: 0.0,
        }
    }

    pub fn reader(&self) -> &RuntimeReader {
        &self.reader
    }

    /// The baseline the next tick will be compared against, if any.
    pub fn previous(&self) -> Option<Sample> {
        self.previous
    }

    /// Reads the counter and derives new metrics against the current baseline.
    ///
    /// On a read failure the error is returned and nothing is changed, so the
    /// next successful tick is computed against the last good sample. The
    /// baseline is never cleared; after a long outage the first tick back is
    /// clamped like any other.
    pub fn tick(&mut self, now: SystemTime) -> RuntimeResult<DerivedMetrics> {
        let value = self.reader.read()?;

        let usage_percent = match self.previous {
            None => {
                debug!("first runtime sample: {value} ms");
                0.0
            }
            Some(previous) if value < previous.value => {
                debug!(
                    "runtime counter went from {} ms to {value} ms, re-baselining",
                    previous.value
                );
                0.0
            }
            Some(previous) => match now.duration_since(previous.timestamp) {
                Ok(elapsed) if !elapsed.is_zero() => {
                    usage_percent(value - previous.value, elapsed)
                }
                _ => {
                    debug!("clock did not advance since the last sample, keeping the last usage");
                    self.last_usage
                }
            },
        };

        self.previous = Some(Sample {
            timestamp: now,
            value,
        });
        self.last_usage = usage_percent;

        Ok(DerivedMetrics {
            cumulative_runtime_ms: value,
            usage_percent,
        })
    }
}

/// Returns how much of `elapsed` was spent active, as a percentage.
///
/// The counter may report slightly more active time than wall-clock time over
/// short intervals, so this is clamped.
fn usage_percent(active_ms: u64, elapsed: Duration) -> f64 {
    let elapsed_ms = elapsed.as_nanos() as f64 / 1_000_000.0;

    (active_ms as f64 * 100.0 / elapsed_ms).clamp(0.0, 100.0)
}
