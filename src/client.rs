use std::future::Future;

use crate::error::Result;

/// Interface the GraphQL server uses to report request metrics.
///
/// None of the update operations fail: metric emission must never become a
/// source of errors for request handling. Only rendering the exposition
/// payload can fail.
pub trait MetricsClient: Send + Sync {
    /// (Re)creates every series, discarding previously collected values.
    fn initialize(&self);

    /// Ensures a zero-valued errors series exists for every known error class.
    /// Never changes a series that already holds a value.
    fn initialize_error_labels(&self);

    /// Increments the errors counter for `error_class` by one. Labels outside
    /// the known set are accepted and get their own series.
    fn increase_errors(&self, error_class: &str);

    fn increase_request_throughput(&self);

    /// Overwrites the availability gauge. Callers use 0 or 1; any value is stored.
    fn set_availability(&self, value: f64);

    /// Content type matching the payload of [`MetricsClient::get_metrics`].
    fn get_metrics_content_type(&self) -> &'static str;

    /// Serializes the current state in the Prometheus text exposition format.
    ///
    /// Inside a tokio runtime the render runs on the blocking pool; elsewhere
    /// it runs inline on the calling task.
    fn get_metrics(&self) -> impl Future<Output = Result<String>> + Send;
}
