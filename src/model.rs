use crate::math::mean_abs_and_squared;
use crate::{EvalError, EvalResult, Metric, MetricState, PointStore};

/// A candidate linear model `y = slope * x + intercept`, with its error metrics once computed.
///
/// The model never keeps a reference to the data: the store is given to `compute_metrics`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct LinearRegression {
    slope: f64,
    intercept: f64,
    mae: MetricState,
    mse: MetricState,
    rmse: MetricState,
}

impl LinearRegression {
    pub fn new(slope: f64, intercept: f64) -> Self {
        LinearRegression {
            slope,
            intercept,
            ..Default::default()
        }
    }

    pub fn slope(&self) -> f64 {
        self.slope
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// Difference between the actual and the predicted value, for every point of the store.
    pub fn residuals(&self, store: &PointStore) -> Vec<f64> {
        store.iter().map(|p| p.y - self.predict(p.x)).collect()
    }

    /// Compute and cache MAE, MSE and RMSE over all the points of the store.
    ///
    /// On an empty store every metric is left unset and `EmptyDataset` is returned.
    pub fn compute_metrics(&mut self, store: &PointStore) -> EvalResult<()> {
        self.mae = MetricState::Unset;
        self.mse = MetricState::Unset;
        self.rmse = MetricState::Unset;
        if store.is_empty() {
            return Err(EvalError::EmptyDataset);
        }

        let (mae, mse) = mean_abs_and_squared(&self.residuals(store));
        self.mae = MetricState::Computed(mae);
        self.mse = MetricState::Computed(mse);
        self.rmse = MetricState::Computed(mse.sqrt());
        debug!(
            "Metrics of y = {} x + {} over {} points: MAE={} MSE={} RMSE={}",
            self.slope,
            self.intercept,
            store.len(),
            mae,
            mse,
            mse.sqrt()
        );
        Ok(())
    }

    pub fn mae(&self) -> EvalResult<f64> {
        self.mae.get(Metric::Mae)
    }

    pub fn mse(&self) -> EvalResult<f64> {
        self.mse.get(Metric::Mse)
    }

    pub fn rmse(&self) -> EvalResult<f64> {
        self.rmse.get(Metric::Rmse)
    }

    pub fn metric(&self, metric: Metric) -> EvalResult<f64> {
        self.state(metric).get(metric)
    }

    pub fn state(&self, metric: Metric) -> MetricState {
        match metric {
            Metric::Mae => self.mae,
            Metric::Mse => self.mse,
            Metric::Rmse => self.rmse,
        }
    }

    pub fn is_computed(&self, metric: Metric) -> bool {
        self.state(metric).is_computed()
    }

    pub fn are_metrics_computed(&self) -> bool {
        Metric::ALL.iter().all(|&metric| self.is_computed(metric))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn store(points: &[(f64, f64)]) -> PointStore {
        let mut store = PointStore::new();
        for &(x, y) in points {
            store.insert(x, y);
        }
        store
    }

    #[test]
    fn test_predict() {
        let model = LinearRegression::new(2., -1.);
        assert_relative_eq!(model.predict(0.), -1.);
        assert_relative_eq!(model.predict(3.5), 6.);
        assert_relative_eq!(model.predict(-2.), -5.);
        assert_eq!(LinearRegression::default().predict(123.), 0.);
    }

    #[test]
    fn test_metrics_not_computed() {
        let model = LinearRegression::new(1., 1.);
        assert_eq!(model.mae(), Err(EvalError::MetricNotComputed(Metric::Mae)));
        assert_eq!(model.mse(), Err(EvalError::MetricNotComputed(Metric::Mse)));
        assert_eq!(model.rmse(), Err(EvalError::MetricNotComputed(Metric::Rmse)));
        assert!(!model.are_metrics_computed());
        assert_eq!(model.slope(), 1.);
        assert_eq!(model.intercept(), 1.);
    }

    #[test]
    fn test_compute_metrics() {
        let store = store(&[(1., 2.), (2., 3.), (3., 5.)]);
        let mut model = LinearRegression::new(1., 1.);
        model.compute_metrics(&store).unwrap();

        // Predictions 2, 3, 4 so errors 0, 0, 1
        assert_relative_eq!(model.mae().unwrap(), 1. / 3.);
        assert_relative_eq!(model.mse().unwrap(), 1. / 3.);
        assert_relative_eq!(model.rmse().unwrap(), (1. / 3f64).sqrt());
        assert_abs_diff_eq!(model.rmse().unwrap(), 0.5774, epsilon = 1e-4);
        assert!(model.are_metrics_computed());
        assert_eq!(model.residuals(&store), vec![0., 0., 1.]);
    }

    #[test]
    fn test_rmse_is_sqrt_mse() {
        let store = store(&[(0.3, 1.7), (-2., 4.1), (8., -3.), (1e3, 2e3), (0.1, 0.)]);
        for &(slope, intercept) in &[(0., 0.), (1.5, -0.2), (-3., 10.), (2., 0.)] {
            let mut model = LinearRegression::new(slope, intercept);
            model.compute_metrics(&store).unwrap();
            assert_eq!(model.rmse().unwrap(), model.mse().unwrap().sqrt());
        }
    }

    #[test]
    fn test_empty_store() {
        let mut model = LinearRegression::new(1., 0.);
        assert_eq!(
            model.compute_metrics(&PointStore::new()),
            Err(EvalError::EmptyDataset)
        );
        assert!(!model.is_computed(Metric::Mae));

        // A failed computation drops the previous values
        model.compute_metrics(&store(&[(1., 1.)])).unwrap();
        assert!(model.are_metrics_computed());
        assert!(model.compute_metrics(&PointStore::new()).is_err());
        for &metric in Metric::ALL.iter() {
            assert_eq!(model.state(metric), MetricState::Unset);
        }
    }

    #[test]
    fn test_metric_by_selector() {
        let mut model = LinearRegression::new(0., 2.);
        model
            .compute_metrics(&store(&[(1., 1.), (2., 2.), (3., 3.)]))
            .unwrap();
        assert_relative_eq!(model.metric(Metric::Mae).unwrap(), 2. / 3.);
        assert_relative_eq!(model.metric(Metric::Mse).unwrap(), 2. / 3.);
        assert_abs_diff_eq!(model.metric(Metric::Rmse).unwrap(), 0.8165, epsilon = 1e-4);
    }
}
