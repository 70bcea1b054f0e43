use thiserror::Error;

#[derive(Debug, Error)]
pub enum FlightError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Degenerate result: {0}")]
    DegenerateResult(String),

    #[error("Solver failed to converge: {0}")]
    NonConvergence(String),
}
