//! Prometheus metrics client for a GraphQL server.
//!
//! The server reports request throughput, availability and per-class error
//! counts through [`MetricsClient`]; [`PromMetricsClient`] keeps them in a
//! per-instance registry and renders the text exposition format on demand.

pub mod client;
pub mod config;
pub mod error;
pub mod error_class;
pub mod observability;
pub mod prom;

pub use client::MetricsClient;
pub use config::{Config, MetricNames};
pub use error::{MetricsError, Result};
pub use error_class::{ERROR_CLASS_LABEL, ErrorClass};
pub use prom::{CONTENT_TYPE, PromMetricsClient};
