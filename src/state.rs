//! Incumbent solutions and trajectory logs.

/// The best point found in some scope, with its cost.
///
/// A scope that has not found anything yet holds `Option::<SearchState>::None`
/// rather than a sentinel cost.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchState {
    /// Best point.
    pub x: Vec<f64>,
    /// Cost at `x`.
    pub cost: f64,
}

impl SearchState {
    pub fn new(x: Vec<f64>, cost: f64) -> Self {
        Self { x, cost }
    }

    /// Whether `cost` is strictly better than this incumbent.
    pub fn is_improved_by(&self, cost: f64) -> bool {
        cost < self.cost
    }
}

/// Whether `cost` would replace `incumbent`.
///
/// With no incumbent any cost below `+inf` is accepted, so an infinite
/// cost never becomes a solution.
pub fn improves(incumbent: Option<&SearchState>, cost: f64) -> bool {
    incumbent.map_or(cost < f64::INFINITY, |s| s.is_improved_by(cost))
}

/// Cost of an optional incumbent, `+inf` when there is none.
pub fn cost_or_infinity(state: Option<&SearchState>) -> f64 {
    state.map_or(f64::INFINITY, |s| s.cost)
}

/// Append-only log of `(x, cost)` pairs in visiting order.
///
/// Used for plotting and post-hoc analysis only; the search never reads it.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trajectory {
    points: Vec<Vec<f64>>,
    costs: Vec<f64>,
}

impl Trajectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, x: Vec<f64>, cost: f64) {
        self.points.push(x);
        self.costs.push(cost);
    }

    /// Moves every entry of `other` onto the end of `self`.
    pub fn append(&mut self, other: &mut Trajectory) {
        self.points.append(&mut other.points);
        self.costs.append(&mut other.costs);
    }

    pub fn len(&self) -> usize {
        self.costs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }

    pub fn points(&self) -> &[Vec<f64>] {
        &self.points
    }

    pub fn costs(&self) -> &[f64] {
        &self.costs
    }

    pub fn last(&self) -> Option<(&[f64], f64)> {
        Some((self.points.last()?.as_slice(), *self.costs.last()?))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&[f64], f64)> {
        self.points
            .iter()
            .map(Vec::as_slice)
            .zip(self.costs.iter().copied())
    }
}
