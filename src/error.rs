use thiserror::Error;

#[derive(Error, Debug)]
pub enum MetricsError {
    #[error("Render error: {0}")]
    Render(String),
}

pub type Result<T> = std::result::Result<T, MetricsError>;
