use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Invalid time step: {0} (must be positive and finite)")]
    TimeStepError(f64),
}
