use serde::Serialize;

use crate::errors::{InferenceError, InferenceResult};

/// A sampled membership function: strictly increasing domain points `x`
/// and same-length membership degrees `y` in `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MembershipCurve {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl MembershipCurve {
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> InferenceResult<Self> {
        let invalid = |reason: String| InferenceError::InvalidCurve { reason };
        if x.is_empty() {
            return Err(invalid("domain must contain at least one point".to_string()));
        }
        if x.len() != y.len() {
            return Err(invalid(format!(
                "domain has {} points but membership has {}",
                x.len(),
                y.len()
            )));
        }
        if let Some(i) = x.iter().position(|v| !v.is_finite()) {
            return Err(invalid(format!("domain point {i} is not finite")));
        }
        if let Some(i) = x.windows(2).position(|w| w[0] >= w[1]) {
            return Err(invalid(format!(
                "domain is not strictly increasing at index {}",
                i + 1
            )));
        }
        if let Some(i) = y.iter().position(|v| !(0.0..=1.0).contains(v)) {
            return Err(invalid(format!(
                "membership degree {} at index {i} is outside [0, 1]",
                y[i]
            )));
        }
        Ok(Self { x, y })
    }

    /// Integer grid `0..len` with the given degrees.
    pub fn on_index_grid(y: Vec<f64>) -> InferenceResult<Self> {
        let x = (0..y.len()).map(|i| i as f64).collect();
        Self::new(x, y)
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Always false: a curve holds at least one point.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Whether both curves are sampled on exactly the same domain points.
    pub fn same_grid(&self, other: &MembershipCurve) -> bool {
        self.x == other.x
    }

    /// Same domain, degrees replaced elementwise by `f(y)`.
    ///
    /// Results are clamped back into `[0, 1]` so the invariant survives
    /// floating-point drift in `f`.
    pub fn map_degrees(&self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            x: self.x.clone(),
            y: self.y.iter().map(|&v| f(v).clamp(0.0, 1.0)).collect(),
        }
    }

    /// Sum of all degrees: the discrete area used by the defuzzifiers.
    pub fn area(&self) -> f64 {
        self.y.iter().sum()
    }

    /// Largest membership degree.
    pub fn height(&self) -> f64 {
        self.y.iter().copied().fold(0.0, f64::max)
    }

    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.x, self.y)
    }
}
