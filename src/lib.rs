//! Evaluation of candidate linear models `y = slope * x + intercept` against a set of points.
//!
//! The models are given, not fitted. For every model we compute the mean absolute error, the mean
//! squared error and the root mean squared error, then look for the best model per metric.

extern crate itertools;
#[macro_use]
extern crate log;
extern crate ordered_float;
#[macro_use]
extern crate serde_derive;

mod data;
mod error;
mod evaluation;
mod math;
mod metrics;
mod model;
pub mod report;

pub use crate::data::*;
pub use crate::error::*;
pub use crate::evaluation::*;
pub use crate::metrics::*;
pub use crate::model::*;

pub(crate) static DEFAULT_PRECISION: usize = 4;
pub(crate) static DEFAULT_FORMAT: report::ReportFormat = report::ReportFormat::Text;
