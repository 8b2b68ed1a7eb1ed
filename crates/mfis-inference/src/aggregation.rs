//! Fuzzy union of truth-qualified consequents.
//!
//! Curves on one shared grid are combined by pointwise max. Under
//! [`GridPolicy::Interpolate`] differing grids are first resampled onto the
//! sorted union of their breakpoints; each curve is linearly interpolated
//! inside its own domain and contributes 0 outside it.

use mfis_core::errors::{InferenceError, InferenceResult};
use mfis_core::{GridPolicy, MembershipCurve};

/// Union of any number of curves.
pub fn aggregate<'a, I>(curves: I, policy: GridPolicy) -> InferenceResult<MembershipCurve>
where
    I: IntoIterator<Item = &'a MembershipCurve>,
{
    let curves: Vec<&MembershipCurve> = curves.into_iter().collect();
    let Some(first) = curves.first() else {
        return Err(InferenceError::InconsistentGrid {
            reason: "no consequent sets to aggregate".to_string(),
        });
    };

    if curves.iter().all(|c| c.same_grid(first)) {
        return pointwise_max(first.x().to_vec(), &curves, |c, i, _| c.y()[i]);
    }

    match policy {
        GridPolicy::Strict => Err(InferenceError::InconsistentGrid {
            reason: describe_mismatch(&curves),
        }),
        GridPolicy::Interpolate => {
            let grid = reconcile_grid(&curves);
            pointwise_max(grid, &curves, |c, _, x| interpolate(c, x))
        }
    }
}

/// Union of two curves.
pub fn union(
    a: &MembershipCurve,
    b: &MembershipCurve,
    policy: GridPolicy,
) -> InferenceResult<MembershipCurve> {
    aggregate([a, b], policy)
}

/// Sorted, deduplicated union of every curve's domain points.
pub fn reconcile_grid(curves: &[&MembershipCurve]) -> Vec<f64> {
    let mut grid: Vec<f64> = curves.iter().flat_map(|c| c.x().iter().copied()).collect();
    grid.sort_by(f64::total_cmp);
    grid.dedup();
    grid
}

/// Degree of `curve` at `x`: exact at breakpoints, linear between them,
/// 0 outside the curve's domain.
pub fn interpolate(curve: &MembershipCurve, x: f64) -> f64 {
    let (xs, ys) = (curve.x(), curve.y());
    let i = xs.partition_point(|&v| v < x);
    if i < xs.len() && xs[i] == x {
        return ys[i];
    }
    if i == 0 || i == xs.len() {
        return 0.0;
    }
    let (x0, x1) = (xs[i - 1], xs[i]);
    let (y0, y1) = (ys[i - 1], ys[i]);
    (y0 + (y1 - y0) * (x - x0) / (x1 - x0)).clamp(0.0, 1.0)
}

fn pointwise_max(
    grid: Vec<f64>,
    curves: &[&MembershipCurve],
    degree: impl Fn(&MembershipCurve, usize, f64) -> f64,
) -> InferenceResult<MembershipCurve> {
    let y = grid
        .iter()
        .enumerate()
        .map(|(i, &x)| curves.iter().map(|&c| degree(c, i, x)).fold(0.0, f64::max))
        .collect();
    MembershipCurve::new(grid, y)
}

fn describe_mismatch(curves: &[&MembershipCurve]) -> String {
    let first = curves[0];
    let odd = curves
        .iter()
        .position(|c| !c.same_grid(first))
        .unwrap_or_default();
    let span = |c: &MembershipCurve| {
        format!("{} points over [{}, {}]", c.len(), c.x()[0], c.x()[c.len() - 1])
    };
    format!(
        "risk set {odd} is sampled on {} but set 0 is sampled on {}",
        span(curves[odd]),
        span(first)
    )
}
