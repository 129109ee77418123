//! The exported NPU metrics.
//!
//! Both values are published and scraped as one unit behind a single lock,
//! so a scrape never sees the runtime of one tick paired with the usage of
//! another.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use prometheus::{
    core::{Collector, Desc},
    proto::MetricFamily,
    Encoder, Gauge, IntCounter, Opts, Registry, TextEncoder,
};

use crate::collection::DerivedMetrics;

pub const RUNTIME_METRIC_NAME: &str = "intel_npu_runtime_milliseconds";
const RUNTIME_METRIC_HELP: &str = "Cumulative active runtime of the Intel NPU in milliseconds";

pub const USAGE_METRIC_NAME: &str = "intel_npu_usage_percent";
const USAGE_METRIC_HELP: &str = "Instantaneous utilisation of the Intel NPU as a percentage";

/// The published NPU metrics.
///
/// Clones share the same underlying values.
#[derive(Clone)]
pub struct NpuMetrics {
    runtime: IntCounter,
    usage: Gauge,
    snapshot: Arc<Mutex<DerivedMetrics>>,
}

impl NpuMetrics {
    pub fn new() -> prometheus::Result<Self> {
        Ok(Self {
            runtime: IntCounter::with_opts(Opts::new(RUNTIME_METRIC_NAME, RUNTIME_METRIC_HELP))?,
            usage: Gauge::with_opts(Opts::new(USAGE_METRIC_NAME, USAGE_METRIC_HELP))?,
            snapshot: Arc::new(Mutex::new(DerivedMetrics::default())),
        })
    }

    fn lock(&self) -> MutexGuard<'_, DerivedMetrics> {
        // Nothing can be left half-written while holding this, so a poisoned
        // lock is still consistent.
        self.snapshot.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replaces the exported values with `metrics`.
    pub fn publish(&self, metrics: DerivedMetrics) {
        let mut snapshot = self.lock();

        // The counter follows the raw value, which can go backwards on a
        // device reset. Scrapers treat that as a counter reset.
        self.runtime.reset();
        self.runtime.inc_by(metrics.cumulative_runtime_ms);
        self.usage.set(metrics.usage_percent.clamp(0.0, 100.0));

        *snapshot = metrics;
    }

    /// The currently exported values.
    pub fn snapshot(&self) -> DerivedMetrics {
        *self.lock()
    }
}

impl Collector for NpuMetrics {
    fn desc(&self) -> Vec<&Desc> {
        self.runtime
            .desc()
            .into_iter()
            .chain(self.usage.desc())
            .collect()
    }

    fn collect(&self) -> Vec<MetricFamily> {
        let _snapshot = self.lock();

        let mut families = self.runtime.collect();
        families.extend(self.usage.collect());
        families
    }
}

/// Owns the registry the scrape endpoint renders.
#[derive(Clone)]
pub struct MetricsRegistry {
    registry: Registry,
    npu: NpuMetrics,
}

impl MetricsRegistry {
    pub fn new() -> prometheus::Result<Self> {
        let registry = Registry::new();
        let npu = NpuMetrics::new()?;
        registry.register(Box::new(npu.clone()))?;

        Ok(Self { registry, npu })
    }

    pub fn npu(&self) -> &NpuMetrics {
        &self.npu
    }

    /// The content type of [`MetricsRegistry::render`].
    pub fn content_type(&self) -> String {
        TextEncoder::new().format_type().to_string()
    }

    /// Renders all registered metrics in the Prometheus text format.
    pub fn render(&self) -> prometheus::Result<String> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buffer)?;

        String::from_utf8(buffer).map_err(|err| prometheus::Error::Msg(err.to_string()))
    }
}
