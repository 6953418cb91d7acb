use thiserror::Error;

/// Failures of the analytic junction model.
///
/// Every variant means the requested input combination is physically
/// invalid; nothing here is retryable.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum JunctionError {
    #[error("invalid doping (N_a = {na:e} cm^-3, N_d = {nd:e} cm^-3): {reason}")]
    InvalidDoping { na: f64, nd: f64, reason: String },

    #[error(
        "depletion region collapses: applied bias {applied:.4} V is not below the built-in potential {built_in:.4} V"
    )]
    DepletionCollapse { applied: f64, built_in: f64 },

    #[error("invalid bias: {0}")]
    InvalidBias(String),

    #[error("invalid material parameters: {0}")]
    InvalidMaterial(String),

    #[error("invalid sampling grid: {0}")]
    InvalidGrid(String),
}

pub type Result<T> = std::result::Result<T, JunctionError>;
