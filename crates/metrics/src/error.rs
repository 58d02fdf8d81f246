use thiserror::Error;

#[derive(Error, Debug)]
pub enum MetricsError {
    #[error("Invalid renewal horizon: {0} days (must not be negative)")]
    InvalidHorizon(i64),
}
