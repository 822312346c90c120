use crate::{
    EvalError, EvalResult, Evaluator, LinearRegression, Metric, DEFAULT_FORMAT, DEFAULT_PRECISION,
};
use itertools::Itertools;
use std::collections::BTreeMap;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
    Csv,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ReportParams {
    /// Number of decimals of the numbers in the text report
    pub precision: usize,
    pub format: ReportFormat,
}

impl ReportParams {
    pub fn new() -> Self {
        ReportParams {
            precision: DEFAULT_PRECISION,
            format: DEFAULT_FORMAT,
        }
    }
}

impl Default for ReportParams {
    fn default() -> Self {
        Self::new()
    }
}

/// One evaluated model. Metrics not computed are `None`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ModelReport {
    pub model: usize,
    pub slope: f64,
    pub intercept: f64,
    pub mae: Option<f64>,
    pub mse: Option<f64>,
    pub rmse: Option<f64>,
}

impl ModelReport {
    fn new(model: usize, regression: &LinearRegression) -> Self {
        ModelReport {
            model,
            slope: regression.slope(),
            intercept: regression.intercept(),
            mae: regression.mae().ok(),
            mse: regression.mse().ok(),
            rmse: regression.rmse().ok(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum BestReport {
    Found {
        slope: f64,
        intercept: f64,
        value: f64,
    },
    Failed {
        error: String,
    },
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Report {
    pub models: Vec<ModelReport>,
    pub best: BTreeMap<String, BestReport>,
}

impl Report {
    /// Snapshot of the evaluator. A metric without best model gets its error instead.
    pub fn from_evaluator(evaluator: &Evaluator) -> Self {
        let models = evaluator
            .models()
            .iter()
            .enumerate()
            .map(|(i, model)| ModelReport::new(i + 1, model))
            .collect();
        let best = evaluator
            .best_models()
            .into_iter()
            .map(|(metric, best)| {
                let best = match best.and_then(|model| Ok((model, model.metric(metric)?))) {
                    Ok((model, value)) => BestReport::Found {
                        slope: model.slope(),
                        intercept: model.intercept(),
                        value,
                    },
                    Err(e) => BestReport::Failed {
                        error: e.to_string(),
                    },
                };
                (metric.name().to_string(), best)
            })
            .collect();
        Report { models, best }
    }
}

pub fn render(evaluator: &Evaluator, params: &ReportParams) -> EvalResult<String> {
    match params.format {
        ReportFormat::Text => Ok(render_text(evaluator, params.precision)),
        ReportFormat::Json => render_json(evaluator),
        ReportFormat::Csv => render_csv(evaluator),
    }
}

fn equation(model: &LinearRegression, precision: usize) -> String {
    format!(
        "y = {:.*} x + {:.*}",
        precision,
        model.slope(),
        precision,
        model.intercept()
    )
}

/// Human readable report: every model with its metrics, then the best model per metric.
pub fn render_text(evaluator: &Evaluator, precision: usize) -> String {
    if evaluator.models().is_empty() {
        return "No models to evaluate.\n".to_string();
    }
    let mut out = String::new();
    for (i, model) in evaluator.models().iter().enumerate() {
        out.push_str(&format!("Model {}:\n", i + 1));
        out.push_str(&format!("  Equation: {}\n", equation(model, precision)));
        for &metric in Metric::ALL.iter() {
            if let Ok(val) = model.metric(metric) {
                out.push_str(&format!(" -> {}: {:.*}\n", metric, precision, val));
            }
        }
    }

    let best = evaluator
        .best_models()
        .into_iter()
        .map(|(metric, best)| {
            match best.and_then(|model| Ok((model, model.metric(metric)?))) {
                Ok((model, val)) => format!(
                    "Best model by {}:\n  Equation: {}\n  {}: {:.*}",
                    metric,
                    equation(model, precision),
                    metric,
                    precision,
                    val
                ),
                Err(e) => format!("Error finding best model by {}: {}", metric, e),
            }
        })
        .join("\n");
    out.push_str(&best);
    out.push('\n');
    out
}

pub fn render_json(evaluator: &Evaluator) -> EvalResult<String> {
    let report = Report::from_evaluator(evaluator);
    serde_json::to_string_pretty(&report).map_err(|e| EvalError::Report(e.to_string()))
}

/// One row per model. Metrics not computed are empty cells.
pub fn render_csv(evaluator: &Evaluator) -> EvalResult<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    let to_report_error = |e: csv::Error| EvalError::Report(e.to_string());
    wtr.write_record(&["model", "slope", "intercept", "mae", "mse", "rmse"])
        .map_err(to_report_error)?;
    let cell = |val: Option<f64>| val.map(|v| v.to_string()).unwrap_or_default();
    for (i, model) in evaluator.models().iter().enumerate() {
        let row = ModelReport::new(i + 1, model);
        wtr.write_record(&[
            row.model.to_string(),
            row.slope.to_string(),
            row.intercept.to_string(),
            cell(row.mae),
            cell(row.mse),
            cell(row.rmse),
        ])
        .map_err(to_report_error)?;
    }
    let bytes = wtr
        .into_inner()
        .map_err(|e| EvalError::Report(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| EvalError::Report(e.to_string()))
}
