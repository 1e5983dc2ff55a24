use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while loading a catalog or a scoring configuration.
///
/// Ranking itself never fails; these only surface at process start.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Item id cannot be empty")]
    EmptyId,

    #[error("Duplicate item id: {0}")]
    DuplicateId(String),

    #[error("Item '{id}': invalid {field} range (min {min}, max {max})")]
    InvalidRange {
        id: String,
        field: &'static str,
        min: f64,
        max: f64,
    },

    #[error("Item '{id}': efficiency {value} outside [0, 100]")]
    InvalidEfficiency { id: String, value: f64 },

    #[error("Item '{id}': solids passage {value} must be a non-negative number")]
    InvalidSolids { id: String, value: f64 },

    #[error("Unknown criterion in weight table: {0}")]
    UnknownCriterion(String),

    #[error("Criterion '{0}' has a negative or non-finite weight")]
    InvalidWeight(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}
