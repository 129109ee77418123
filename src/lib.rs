//! A Prometheus exporter for Intel NPU usage.
//!
//! The NPU's cumulative active time is read from sysfs on a fixed interval,
//! turned into a utilisation percentage, and served alongside the raw runtime
//! on a `/metrics` endpoint.

pub mod collection;
pub mod constants;
pub mod metrics;
pub mod options;
pub mod server;

pub mod utils {
    pub mod cancellation_token;
    pub mod logging;
}

use std::{
    sync::Arc,
    thread::{self, JoinHandle},
    time::{Duration, SystemTime},
};

use log::{debug, info, warn};

use crate::{
    collection::{error::RuntimeError, RuntimeCollector},
    metrics::NpuMetrics,
    utils::cancellation_token::CancellationToken,
};

/// Runs one tick of `collector` and publishes the result to `metrics`.
///
/// On failure the previously published values are left alone, so scrapes keep
/// seeing the last good sample. `last_error` tracks the current failure streak
/// so a persistent failure is only warned about once.
pub fn update_metrics(
    collector: &mut RuntimeCollector, metrics: &NpuMetrics, last_error: &mut Option<RuntimeError>,
    now: SystemTime,
) {
    match collector.tick(now) {
        Ok(derived) => {
            if last_error.take().is_some() {
                info!(
                    "reading '{}' succeeded again",
                    collector.reader().path().display()
                );
            }

            metrics.publish(derived);
        }
        Err(err) => {
            match last_error {
                Some(prev) if prev.same_kind(&err) => {
                    debug!("failed to read the NPU runtime counter again: {err}");
                }
                _ => {
                    warn!(
                        "failed to read the NPU runtime counter, keeping the last exported values: {err}"
                    );
                }
            }

            *last_error = Some(err);
        }
    }
}

/// Spawns the thread that samples the runtime counter every `interval` until
/// `cancellation_token` is cancelled.
///
/// The collector is owned by this thread, so ticks never overlap.
pub fn create_collection_thread(
    mut collector: RuntimeCollector, metrics: NpuMetrics, interval: Duration,
    cancellation_token: Arc<CancellationToken>,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let mut last_error = None;

        loop {
            // Check once at the very top...
            if cancellation_token.is_cancelled() {
                break;
            }

            update_metrics(&mut collector, &metrics, &mut last_error, SystemTime::now());

            if cancellation_token.sleep_with_cancellation(interval) {
                break;
            }
        }

        debug!("collection thread stopped");
    })
}
