use std::process::ExitCode;

use graphql_prom_metrics::{Config, MetricsClient, PromMetricsClient, observability};

#[tokio::main]
async fn main() -> ExitCode {
    let config = Config::from_args();

    observability::init_tracing();

    let client = PromMetricsClient::new(config.names);
    if let Some(value) = config.availability {
        client.set_availability(value);
    }

    match client.get_metrics().await {
        Ok(text) => {
            print!("{text}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(error = %err, "failed to render metrics");
            ExitCode::FAILURE
        }
    }
}
