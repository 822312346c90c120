use crate::Metric;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
/// Error type for the evaluation of the models.
///
/// The variants are distinct so a caller can tell a legitimate runtime condition (no data, no
/// models) apart from a programming error (reading a metric before the evaluation).
pub enum EvalError {
    /// The metrics can't be computed without any point.
    #[error("the dataset is empty")]
    EmptyDataset,

    /// Evaluation and best model lookup need at least one model.
    #[error("no models available to evaluate")]
    NoModels,

    /// The metric was read before `compute_metrics` was called on the model.
    #[error("{0} has not been computed")]
    MetricNotComputed(Metric),

    /// Only `MAE`, `MSE` and `RMSE` are known, with this exact case.
    #[error("unrecognized metric: {0}")]
    UnrecognizedMetric(String),

    /// Malformed evaluation input (bad counts, missing or unparsable numbers).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The report could not be serialized.
    #[error("cannot write the report: {0}")]
    Report(String),
}

impl std::convert::From<&str> for EvalError {
    fn from(msg: &str) -> Self {
        EvalError::InvalidInput(msg.to_string())
    }
}

impl std::convert::From<String> for EvalError {
    fn from(msg: String) -> Self {
        EvalError::InvalidInput(msg)
    }
}

pub type EvalResult<T> = Result<T, EvalError>;
