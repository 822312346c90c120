/// Absolute and squared error means over the residuals, in a single pass.
pub(crate) fn mean_abs_and_squared(residuals: &[f64]) -> (f64, f64) {
    // A mean over a null set is not possible there, and this catch bugs.
    assert_ne!(residuals.len(), 0);
    let (mut abs, mut squared) = (0., 0.);
    for &r in residuals {
        abs += r.abs();
        squared += r.powi(2);
    }
    let n = residuals.len() as f64;
    (abs / n, squared / n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mean_abs_and_squared() {
        // |r| = 0, 1, 2, 3 and r^2 = 0, 1, 4, 9
        let (abs, squared) = mean_abs_and_squared(&[0., -1., 2., -3.]);
        assert_relative_eq!(abs, 1.5);
        assert_relative_eq!(squared, 3.5);

        let (abs, squared) = mean_abs_and_squared(&[0.5]);
        assert_relative_eq!(abs, 0.5);
        assert_relative_eq!(squared, 0.25);
    }

    #[test]
    #[should_panic]
    fn test_mean_abs_and_squared_empty() {
        mean_abs_and_squared(&[]);
    }
}
