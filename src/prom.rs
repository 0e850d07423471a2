//! Prometheus-backed [`MetricsClient`].
//!
//! Each client owns its own `PrometheusRecorder`; nothing is installed as the
//! process-global recorder. Series are registered through the `metrics`
//! macros while the instance recorder is active as the local recorder, and
//! the handles they return are kept for the hot paths.

use std::sync::{Arc, PoisonError, RwLock};

use metrics::{Counter, Gauge, counter, describe_counter, describe_gauge, gauge};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle, PrometheusRecorder};
use metrics_process::Collector;

use crate::client::MetricsClient;
use crate::config::MetricNames;
use crate::error::{MetricsError, Result};
use crate::error_class::{ERROR_CLASS_LABEL, ErrorClass};

/// Content type of the text exposition format produced by `render()`.
pub const CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

/// One generation of the registry. Replaced wholesale on re-initialization.
struct Series {
    recorder: PrometheusRecorder,
    handle: PrometheusHandle,
    process: Collector,
    request_throughput: Counter,
    availability: Gauge,
}

impl Series {
    fn build(names: &MetricNames) -> Self {
        let recorder = PrometheusBuilder::new().build_recorder();
        let handle = recorder.handle();
        let process = Collector::default();

        let (request_throughput, availability) = metrics::with_local_recorder(&recorder, || {
            describe_counter!(names.request_throughput.clone(), "Number of incoming requests");
            describe_gauge!(names.availability.clone(), "GraphQL server availability");
            describe_counter!(names.errors.clone(), "Number of errors per Error class");
            process.describe();

            (
                counter!(names.request_throughput.clone()),
                gauge!(names.availability.clone()),
            )
        });

        Self {
            recorder,
            handle,
            process,
            request_throughput,
            availability,
        }
    }

    /// Looks up (or registers) the errors series for one label value.
    fn errors(&self, name: &str, error_class: &str) -> Counter {
        metrics::with_local_recorder(&self.recorder, || {
            counter!(name.to_string(), ERROR_CLASS_LABEL => error_class.to_string())
        })
    }

    fn seed_error_labels(&self, name: &str) {
        for class in ErrorClass::ALL {
            self.errors(name, class.as_str()).increment(0);
        }
    }

    fn render(&self) -> String {
        metrics::with_local_recorder(&self.recorder, || self.process.collect());
        self.handle.render()
    }
}

/// Metrics client backed by `metrics-exporter-prometheus`.
pub struct PromMetricsClient {
    names: MetricNames,
    series: RwLock<Option<Arc<Series>>>,
}

impl PromMetricsClient {
    /// Builds a client and initializes its registry.
    pub fn new(names: MetricNames) -> Self {
        let client = Self {
            names,
            series: RwLock::new(None),
        };
        client.initialize();
        client
    }

    /// Series names this client was built with.
    pub fn names(&self) -> &MetricNames {
        &self.names
    }

    /// Drops the registry. Updates become no-ops and the exposition payload is
    /// empty until the next [`MetricsClient::initialize`].
    pub fn shutdown(&self) {
        let previous = self
            .series
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if previous.is_some() {
            tracing::info!("metrics registry shut down");
        }
    }

    fn current(&self) -> Option<Arc<Series>> {
        self.series
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Default for PromMetricsClient {
    fn default() -> Self {
        Self::new(MetricNames::default())
    }
}

impl MetricsClient for PromMetricsClient {
    fn initialize(&self) {
        // Build the next generation completely before publishing it.
        let series = Series::build(&self.names);
        series.seed_error_labels(&self.names.errors);

        let previous = self
            .series
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .replace(Arc::new(series));

        tracing::info!(
            request_throughput = %self.names.request_throughput,
            availability = %self.names.availability,
            errors = %self.names.errors,
            reinitialized = previous.is_some(),
            "metrics registry initialized"
        );
    }

    fn initialize_error_labels(&self) {
        if let Some(series) = self.current() {
            series.seed_error_labels(&self.names.errors);
        }
    }

    fn increase_errors(&self, error_class: &str) {
        let Some(series) = self.current() else {
            return;
        };
        if error_class.parse::<ErrorClass>().is_err() {
            tracing::debug!(error_class, "counting error outside the known error classes");
        }
        series.errors(&self.names.errors, error_class).increment(1);
    }

    fn increase_request_throughput(&self) {
        if let Some(series) = self.current() {
            series.request_throughput.increment(1);
        }
    }

    fn set_availability(&self, value: f64) {
        if let Some(series) = self.current() {
            series.availability.set(value);
        }
    }

    fn get_metrics_content_type(&self) -> &'static str {
        CONTENT_TYPE
    }

    async fn get_metrics(&self) -> Result<String> {
        let Some(series) = self.current() else {
            return Ok(String::new());
        };

        // Outside a tokio runtime there is no blocking pool to hand off to.
        if tokio::runtime::Handle::try_current().is_err() {
            return Ok(series.render());
        }

        tokio::task::spawn_blocking(move || series.render())
            .await
            .map_err(|err| {
                tracing::error!(error = %err, "failed to render metrics");
                MetricsError::Render(err.to_string())
            })
    }
}
