//! Core trait for objective functions.

/// A scalar cost over a point. Lower is better.
///
/// Implementations must be deterministic and defined over the whole
/// searched domain. Any `Fn(&[f64]) -> f64` closure is an objective.
///
/// # Examples
///
/// ```
/// use u_gns::objective::Objective;
///
/// let sphere = |x: &[f64]| x.iter().map(|v| v * v).sum::<f64>();
/// assert_eq!(sphere.evaluate(&[1.0, 2.0]), 5.0);
/// ```
pub trait Objective: Send + Sync {
    /// Computes the cost of `x`.
    fn evaluate(&self, x: &[f64]) -> f64;
}

impl<F> Objective for F
where
    F: Fn(&[f64]) -> f64 + Send + Sync,
{
    fn evaluate(&self, x: &[f64]) -> f64 {
        self(x)
    }
}
