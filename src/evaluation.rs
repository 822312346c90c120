use crate::{EvalError, EvalResult, LinearRegression, Metric, PointStore};

/// Evaluate a list of candidate linear models against a set of points.
///
/// Typical usage: add the points and the models, call `run_evaluation`, then look for the best
/// model with `find_best_model`.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Evaluator {
    points: PointStore,
    models: Vec<LinearRegression>,
}

impl Evaluator {
    pub fn new() -> Self {
        Evaluator {
            points: PointStore::new(),
            models: Vec::new(),
        }
    }

    pub fn add_data_point(&mut self, x: f64, y: f64) {
        debug!("Adding point ({}, {})", x, y);
        self.points.insert(x, y);
    }

    /// Add a model at the end of the collection. The same model can be added more than once.
    pub fn add_model(&mut self, slope: f64, intercept: f64) {
        debug!("Adding model y = {} x + {}", slope, intercept);
        self.models.push(LinearRegression::new(slope, intercept));
    }

    pub fn points(&self) -> &PointStore {
        &self.points
    }

    /// Models in insertion order.
    pub fn models(&self) -> &[LinearRegression] {
        &self.models
    }

    /// Compute the metrics of every model, in insertion order.
    pub fn run_evaluation(&mut self) -> EvalResult<()> {
        if self.models.is_empty() {
            return Err(EvalError::NoModels);
        }
        info!(
            "Evaluating {} models over {} points",
            self.models.len(),
            self.points.len()
        );
        let points = &self.points;
        for model in self.models.iter_mut() {
            model.compute_metrics(points)?;
        }
        Ok(())
    }

    /// Best model for a metric given by name: `MAE`, `MSE` or `RMSE`.
    ///
    /// Without any model this is `NoModels`, whatever the name.
    pub fn find_best_model(&self, metric: &str) -> EvalResult<&LinearRegression> {
        if self.models.is_empty() {
            return Err(EvalError::NoModels);
        }
        let metric: Metric = metric.parse()?;
        self.find_best_model_by(metric)
    }

    /// Model with the lowest value of the metric.
    ///
    /// On ties the model added first wins. All the models must have been evaluated before.
    pub fn find_best_model_by(&self, metric: Metric) -> EvalResult<&LinearRegression> {
        let mut models = self.models.iter();
        let mut best = models.next().ok_or(EvalError::NoModels)?;
        let mut best_val = best.metric(metric)?;
        for model in models {
            let val = model.metric(metric)?;
            if val < best_val {
                best = model;
                best_val = val;
            }
        }
        Ok(best)
    }

    /// The best model for every metric, each lookup failing on its own.
    pub fn best_models(&self) -> Vec<(Metric, EvalResult<&LinearRegression>)> {
        Metric::ALL
            .iter()
            .map(|&metric| {
                let best = self.find_best_model_by(metric);
                if let Err(ref e) = best {
                    warn!("No best model by {}: {}", metric, e);
                }
                (metric, best)
            })
            .collect()
    }
}
