//! Metrics for the normalization engine
//!
//! Recording goes through the `metrics` facade, so every call is a no-op until
//! a recorder is installed with [`init`]. Library users that bring their own
//! recorder get the same series.

use std::fmt;
use std::net::SocketAddr;
use std::sync::OnceLock;

use ::metrics::Unit;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tracing::info;

use crate::config::MetricsConfig;
use crate::error::{NormalizerError, Result};

/// Every metric the engine records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricName {
    RecordsMapped,
    RecordsSkipped,
    EnumFallbacks,
    EnvelopesUnrecognized,
    SyntheticIdsAssigned,
    BatchesProcessed,
    BatchSize,
}

impl MetricName {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricName::RecordsMapped => "ward_normalize_records_mapped_total",
            MetricName::RecordsSkipped => "ward_normalize_records_skipped_total",
            MetricName::EnumFallbacks => "ward_normalize_enum_fallbacks_total",
            MetricName::EnvelopesUnrecognized => "ward_normalize_envelopes_unrecognized_total",
            MetricName::SyntheticIdsAssigned => "ward_normalize_synthetic_ids_total",
            MetricName::BatchesProcessed => "ward_normalize_batches_processed_total",
            MetricName::BatchSize => "ward_normalize_batch_size",
        }
    }

    /// (description, unit) used when registering with the exporter
    pub fn metadata(&self) -> (&'static str, Option<Unit>) {
        match self {
            MetricName::RecordsMapped => ("Raw records mapped into canonical records", None),
            MetricName::RecordsSkipped => ("List elements skipped because they were not objects", None),
            MetricName::EnumFallbacks => ("Enum values that fell back to the default tag", None),
            MetricName::EnvelopesUnrecognized => ("Payloads whose wrapper shape was not recognized", None),
            MetricName::SyntheticIdsAssigned => ("Placeholder ids assigned to list records", None),
            MetricName::BatchesProcessed => ("List payloads normalized", None),
            MetricName::BatchSize => ("Records per normalized list payload", Some(Unit::Count)),
        }
    }

    pub fn all_metrics() -> impl Iterator<Item = MetricName> {
        use MetricName::*;
        [
            RecordsMapped,
            RecordsSkipped,
            EnumFallbacks,
            EnvelopesUnrecognized,
            SyntheticIdsAssigned,
            BatchesProcessed,
            BatchSize,
        ]
        .into_iter()
    }
}

impl fmt::Display for MetricName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

static HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Install the Prometheus recorder.
///
/// With `listen_addr` set, an HTTP exporter serves `/metrics` on that address.
/// Without it the recorder stays in-process and [`render`] returns the text
/// exposition. Calling this twice is an error from the exporter.
pub fn init(config: &MetricsConfig) -> Result<()> {
    let builder = PrometheusBuilder::new();

    match &config.listen_addr {
        Some(addr) => {
            let addr: SocketAddr = addr.parse().map_err(|e| {
                NormalizerError::Config(format!("Invalid metrics listen_addr '{}': {}", addr, e))
            })?;
            builder
                .with_http_listener(addr)
                .install()
                .map_err(|e| NormalizerError::Config(format!("Failed to install Prometheus exporter: {}", e)))?;
            info!("Prometheus HTTP exporter started at http://{}/metrics", addr);
        }
        None => {
            let handle = builder
                .install_recorder()
                .map_err(|e| NormalizerError::Config(format!("Failed to install Prometheus recorder: {}", e)))?;
            let _ = HANDLE.set(handle);
            info!("Prometheus recorder installed (in-process only)");
        }
    }

    describe_all();
    Ok(())
}

/// Text exposition of the in-process recorder, if one was installed
pub fn render() -> Option<String> {
    HANDLE.get().map(|handle| handle.render())
}

fn describe_all() {
    for name in MetricName::all_metrics() {
        let (help, unit) = name.metadata();
        match (name, unit) {
            (MetricName::BatchSize, Some(unit)) => ::metrics::describe_histogram!(name.as_str(), unit, help),
            (MetricName::BatchSize, None) => ::metrics::describe_histogram!(name.as_str(), help),
            (_, Some(unit)) => ::metrics::describe_counter!(name.as_str(), unit, help),
            (_, None) => ::metrics::describe_counter!(name.as_str(), help),
        }
    }
}

// ============================================================================
// Normalize Metrics
// ============================================================================

pub mod normalize {
    use super::MetricName;

    pub fn record_mapped(entity: &'static str) {
        ::metrics::counter!(MetricName::RecordsMapped.as_str(), "entity" => entity).increment(1);
    }

    pub fn record_skipped(entity: &'static str) {
        ::metrics::counter!(MetricName::RecordsSkipped.as_str(), "entity" => entity).increment(1);
    }

    pub fn enum_fallback(field: &'static str) {
        ::metrics::counter!(MetricName::EnumFallbacks.as_str(), "field" => field).increment(1);
    }

    pub fn envelope_unrecognized() {
        ::metrics::counter!(MetricName::EnvelopesUnrecognized.as_str()).increment(1);
    }

    pub fn synthetic_ids_assigned(entity: &'static str, count: u64) {
        if count > 0 {
            ::metrics::counter!(MetricName::SyntheticIdsAssigned.as_str(), "entity" => entity)
                .increment(count);
        }
    }

    pub fn batch_processed(entity: &'static str, size: usize) {
        ::metrics::counter!(MetricName::BatchesProcessed.as_str(), "entity" => entity).increment(1);
        ::metrics::histogram!(MetricName::BatchSize.as_str(), "entity" => entity).record(size as f64);
    }
}
