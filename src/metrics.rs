use crate::{EvalError, EvalResult};
use std::fmt;
use std::str::FromStr;

/// Error metric used to compare the models. Lower is better for all of them.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    /// Mean absolute error
    #[serde(rename = "MAE")]
    Mae,
    /// Mean squared error
    #[serde(rename = "MSE")]
    Mse,
    /// Root mean squared error
    #[serde(rename = "RMSE")]
    Rmse,
}

impl Metric {
    /// Every metric, in reporting order.
    pub const ALL: [Metric; 3] = [Metric::Mae, Metric::Mse, Metric::Rmse];

    pub fn name(self) -> &'static str {
        match self {
            Metric::Mae => "MAE",
            Metric::Mse => "MSE",
            Metric::Rmse => "RMSE",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Metric {
    type Err = EvalError;

    /// Case-sensitive: "mae" is not a metric.
    fn from_str(s: &str) -> EvalResult<Self> {
        match s {
            "MAE" => Ok(Metric::Mae),
            "MSE" => Ok(Metric::Mse),
            "RMSE" => Ok(Metric::Rmse),
            other => Err(EvalError::UnrecognizedMetric(other.to_string())),
        }
    }
}

/// Cached value of a metric on a model.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub enum MetricState {
    Unset,
    Computed(f64),
}

impl MetricState {
    pub fn is_computed(&self) -> bool {
        match self {
            MetricState::Computed(_) => true,
            MetricState::Unset => false,
        }
    }

    pub fn value(&self) -> Option<f64> {
        match *self {
            MetricState::Computed(val) => Some(val),
            MetricState::Unset => None,
        }
    }

    /// The value, or `MetricNotComputed` for the given metric.
    pub(crate) fn get(&self, metric: Metric) -> EvalResult<f64> {
        self.value().ok_or(EvalError::MetricNotComputed(metric))
    }
}

impl Default for MetricState {
    fn default() -> Self {
        MetricState::Unset
    }
}
