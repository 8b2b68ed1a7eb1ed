//! Defuzzification of an aggregate set to one crisp value.
//!
//! Area is the discrete sum of degrees over the grid. Every method fails
//! with [`InferenceError::EmptyAggregate`] when that area is zero.

use mfis_core::errors::{InferenceError, InferenceResult};
use mfis_core::{DefuzzMethod, MembershipCurve};

/// Reduce `curve` to a crisp value with the selected method.
pub fn defuzzify(curve: &MembershipCurve, method: DefuzzMethod) -> InferenceResult<f64> {
    match method {
        DefuzzMethod::Centroid => centroid(curve),
        DefuzzMethod::Bisector => bisector(curve),
        DefuzzMethod::MeanOfMaximum => mean_of_maximum(curve),
        DefuzzMethod::SmallestOfMaximum => smallest_of_maximum(curve),
        DefuzzMethod::LargestOfMaximum => largest_of_maximum(curve),
    }
}

/// `sum(x * y) / sum(y)`.
pub fn centroid(curve: &MembershipCurve) -> InferenceResult<f64> {
    let area = nonzero_area(curve)?;
    let moment: f64 = curve.x().iter().zip(curve.y()).map(|(x, y)| x * y).sum();
    Ok(moment / area)
}

/// First sample point where cumulative area reaches half the total.
pub fn bisector(curve: &MembershipCurve) -> InferenceResult<f64> {
    let half = nonzero_area(curve)? / 2.0;
    let mut cumulative = 0.0;
    for (&x, &y) in curve.x().iter().zip(curve.y()) {
        cumulative += y;
        if cumulative >= half {
            return Ok(x);
        }
    }
    Ok(curve.x()[curve.len() - 1])
}

/// Mean of every `x` whose degree equals the global maximum.
pub fn mean_of_maximum(curve: &MembershipCurve) -> InferenceResult<f64> {
    let maxima = maxima(curve)?;
    Ok(maxima.iter().sum::<f64>() / maxima.len() as f64)
}

/// Smallest `x` at the global maximum.
pub fn smallest_of_maximum(curve: &MembershipCurve) -> InferenceResult<f64> {
    Ok(maxima(curve)?[0])
}

/// Largest `x` at the global maximum.
pub fn largest_of_maximum(curve: &MembershipCurve) -> InferenceResult<f64> {
    let maxima = maxima(curve)?;
    Ok(maxima[maxima.len() - 1])
}

fn nonzero_area(curve: &MembershipCurve) -> InferenceResult<f64> {
    let area = curve.area();
    if area > 0.0 {
        Ok(area)
    } else {
        Err(InferenceError::EmptyAggregate)
    }
}

/// Domain points at the global maximum, ascending. Never empty on success.
fn maxima(curve: &MembershipCurve) -> InferenceResult<Vec<f64>> {
    nonzero_area(curve)?;
    let height = curve.height();
    Ok(curve
        .x()
        .iter()
        .zip(curve.y())
        .filter(|(_, &y)| y == height)
        .map(|(&x, _)| x)
        .collect())
}
