use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

/// Travel time along an edge or a whole route, in minutes.
///
/// Only non-negative, finite values reach the solver: the graph constructor
/// rejects anything else, which keeps the total ordering below meaningful.
#[derive(Debug, Clone, Copy, Default, Serialize)]
#[serde(transparent)]
pub struct Cost(f64);

impl Cost {
    pub const ZERO: Cost = Cost(0.0);

    pub fn new(minutes: f64) -> Self {
        Cost(minutes)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Whether `minutes` is usable as an edge weight
    pub fn is_valid_weight(minutes: f64) -> bool {
        minutes.is_finite() && minutes >= 0.0
    }
}

impl PartialEq for Cost {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Cost {}

impl PartialOrd for Cost {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cost {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl std::ops::Add for Cost {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Cost(self.0 + other.0)
    }
}

impl std::iter::Sum for Cost {
    fn sum<I: Iterator<Item = Cost>>(iter: I) -> Self {
        iter.fold(Cost::ZERO, |acc, cost| acc + cost)
    }
}

impl From<u32> for Cost {
    fn from(minutes: u32) -> Self {
        Cost(minutes as f64)
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A minimum-cost route between two stations
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    pub from: String,
    pub to: String,
    /// Stations from `from` to `to`, both inclusive
    pub path: Vec<String>,
    pub total_cost: Cost,
}

impl Route {
    /// Number of edges travelled
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Consecutive station pairs along the path
    pub fn legs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.path
            .windows(2)
            .map(|pair| (pair[0].as_str(), pair[1].as_str()))
    }
}
