use clap::{Args, Parser};

pub const DEFAULT_REQUEST_THROUGHPUT_NAME: &str = "graphql_server_request_throughput";
pub const DEFAULT_AVAILABILITY_NAME: &str = "graphql_server_availability";
pub const DEFAULT_ERRORS_NAME: &str = "graphql_server_errors";

/// Names of the three series owned by a client. Fixed once the client is built.
#[derive(Debug, Clone, PartialEq, Eq, Args)]
pub struct MetricNames {
    /// Counter incremented once per incoming request
    #[arg(
        id = "request_throughput_name",
        long = "request-throughput-name",
        env = "GRAPHQL_METRICS_REQUEST_THROUGHPUT_NAME",
        default_value = DEFAULT_REQUEST_THROUGHPUT_NAME
    )]
    pub request_throughput: String,

    /// Gauge holding the server availability (0 or 1)
    #[arg(
        id = "availability_name",
        long = "availability-name",
        env = "GRAPHQL_METRICS_AVAILABILITY_NAME",
        default_value = DEFAULT_AVAILABILITY_NAME
    )]
    pub availability: String,

    /// Counter of errors, labelled by error class
    #[arg(
        id = "errors_name",
        long = "errors-name",
        env = "GRAPHQL_METRICS_ERRORS_NAME",
        default_value = DEFAULT_ERRORS_NAME
    )]
    pub errors: String,
}

impl Default for MetricNames {
    fn default() -> Self {
        Self {
            request_throughput: DEFAULT_REQUEST_THROUGHPUT_NAME.to_string(),
            availability: DEFAULT_AVAILABILITY_NAME.to_string(),
            errors: DEFAULT_ERRORS_NAME.to_string(),
        }
    }
}

/// CLI configuration for the exposition snapshot tool.
#[derive(Debug, Clone, Parser)]
pub struct Config {
    #[command(flatten)]
    pub names: MetricNames,

    /// Availability value to record before printing, e.g. 1
    #[arg(long, env = "GRAPHQL_METRICS_AVAILABILITY")]
    pub availability: Option<f64>,
}

impl Config {
    pub fn from_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn command_definition_is_consistent() {
        Config::command().debug_assert();
    }

    #[test]
    fn defaults_match_graphql_server_names() {
        let config = Config::parse_from(["graphql-prom-metrics"]);
        assert_eq!(config.names, MetricNames::default());
        assert_eq!(config.availability, None);
    }

    #[test]
    fn names_are_overridable() {
        let config = Config::parse_from([
            "graphql-prom-metrics",
            "--request-throughput-name",
            "api_requests",
            "--errors-name",
            "api_errors",
            "--availability",
            "0",
        ]);
        assert_eq!(config.names.request_throughput, "api_requests");
        assert_eq!(config.names.availability, DEFAULT_AVAILABILITY_NAME);
        assert_eq!(config.names.errors, "api_errors");
        assert_eq!(config.availability, Some(0.0));
    }

    #[test]
    fn availability_name_and_value_are_separate_flags() {
        let config = Config::parse_from([
            "graphql-prom-metrics",
            "--availability-name",
            "api_up",
            "--availability",
            "1",
        ]);
        assert_eq!(config.names.availability, "api_up");
        assert_eq!(config.availability, Some(1.0));
    }
}
