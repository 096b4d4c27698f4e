//! Standard benchmark functions.
//!
//! # References
//!
//! - Jamil, M. & Yang, X.-S. (2013). "A literature survey of benchmark
//!   functions for global optimisation problems", *IJMMNO* 4(2), 150-194.
//! - Surjanovic, S. & Bingham, D. Virtual Library of Simulation Experiments.

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use super::types::Objective;
use crate::error::{GnsError, Result};
use crate::space::BoundingBox;

/// Benchmark functions selectable by name.
///
/// # Examples
///
/// ```
/// use u_gns::objective::{CostFunction, Objective};
///
/// let f: CostFunction = "schwefel".parse().unwrap();
/// assert!(f.evaluate(&[420.9687, 420.9687]) < 1e-3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CostFunction {
    /// `418.9829 d - Σ x_i sin(sqrt|x_i|)`, minimum 0 at `x_i ≈ 420.9687`.
    Schwefel,
    /// `10 d + Σ (x_i² - 10 cos 2πx_i)`, minimum 0 at the origin.
    Rastrigin,
    /// `Σ x_i²`.
    Sphere,
    /// Ackley with `a = 20`, `b = 0.2`, `c = 2π`; minimum 0 at the origin.
    Ackley,
}

impl CostFunction {
    pub fn name(&self) -> &'static str {
        match self {
            CostFunction::Schwefel => "schwefel",
            CostFunction::Rastrigin => "rastrigin",
            CostFunction::Sphere => "sphere",
            CostFunction::Ackley => "ackley",
        }
    }

    /// The conventional search box for this function.
    pub fn default_range(&self, dimension: usize) -> Result<BoundingBox> {
        let extent = match self {
            CostFunction::Schwefel => 500.0,
            CostFunction::Rastrigin | CostFunction::Sphere => 5.12,
            CostFunction::Ackley => 32.768,
        };
        BoundingBox::symmetric(&vec![extent; dimension])
    }
}

impl Objective for CostFunction {
    fn evaluate(&self, x: &[f64]) -> f64 {
        match self {
            CostFunction::Schwefel => schwefel(x),
            CostFunction::Rastrigin => rastrigin(x),
            CostFunction::Sphere => sphere(x),
            CostFunction::Ackley => ackley(x),
        }
    }
}

impl FromStr for CostFunction {
    type Err = GnsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "schwefel" => Ok(CostFunction::Schwefel),
            "rastrigin" => Ok(CostFunction::Rastrigin),
            "sphere" => Ok(CostFunction::Sphere),
            "ackley" => Ok(CostFunction::Ackley),
            _ => Err(GnsError::UnknownCostFunction(s.to_string())),
        }
    }
}

impl fmt::Display for CostFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub fn schwefel(x: &[f64]) -> f64 {
    let d = x.len() as f64;
    418.9829 * d - x.iter().map(|&xi| xi * xi.abs().sqrt().sin()).sum::<f64>()
}

pub fn rastrigin(x: &[f64]) -> f64 {
    let d = x.len() as f64;
    10.0 * d
        + x.iter()
            .map(|&xi| xi * xi - 10.0 * (2.0 * PI * xi).cos())
            .sum::<f64>()
}

pub fn sphere(x: &[f64]) -> f64 {
    x.iter().map(|&xi| xi * xi).sum()
}

pub fn ackley(x: &[f64]) -> f64 {
    if x.is_empty() {
        return 0.0;
    }
    let n = x.len() as f64;
    let sum_sq = x.iter().map(|&xi| xi * xi).sum::<f64>() / n;
    let sum_cos = x.iter().map(|&xi| (2.0 * PI * xi).cos()).sum::<f64>() / n;
    -20.0 * (-0.2 * sum_sq.sqrt()).exp() - sum_cos.exp() + 20.0 + std::f64::consts::E
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schwefel_optimum() {
        let x = vec![420.9687; 4];
        assert!(schwefel(&x).abs() < 1e-3, "got {}", schwefel(&x));
    }

    #[test]
    fn test_schwefel_origin() {
        assert!((schwefel(&[0.0, 0.0]) - 2.0 * 418.9829).abs() < 1e-9);
    }

    #[test]
    fn test_origin_minima() {
        let origin = [0.0; 3];
        assert!(rastrigin(&origin).abs() < 1e-12);
        assert!(sphere(&origin).abs() < 1e-12);
        assert!(ackley(&origin).abs() < 1e-12);
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("Schwefel".parse::<CostFunction>().unwrap(), CostFunction::Schwefel);
        assert_eq!(" ackley ".parse::<CostFunction>().unwrap(), CostFunction::Ackley);
        assert!(matches!(
            "rosenbrock".parse::<CostFunction>(),
            Err(GnsError::UnknownCostFunction(_))
        ));
        for f in [
            CostFunction::Schwefel,
            CostFunction::Rastrigin,
            CostFunction::Sphere,
            CostFunction::Ackley,
        ] {
            assert_eq!(f.to_string().parse::<CostFunction>().unwrap(), f);
        }
    }

    #[test]
    fn test_default_range() {
        let r = CostFunction::Schwefel.default_range(2).unwrap();
        assert_eq!(r, BoundingBox::uniform(2, -500.0, 500.0).unwrap());
        assert!(CostFunction::Sphere.default_range(0).is_err());
    }
}
