use std::fmt;

use serde::Serialize;

use super::{MembershipCurve, SetKey};
use crate::errors::{InferenceError, InferenceResult};

/// A discretized membership function for one `variable=label`.
///
/// Catalogue entries are never mutated; truth qualification produces a
/// new set through [`FuzzySet::with_curve`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FuzzySet {
    key: SetKey,
    curve: MembershipCurve,
}

impl FuzzySet {
    pub fn new(key: SetKey, x: Vec<f64>, y: Vec<f64>) -> InferenceResult<Self> {
        let curve = MembershipCurve::new(x, y).map_err(|e| match e {
            InferenceError::InvalidCurve { reason } => InferenceError::InvalidFuzzySet {
                key: key.to_string(),
                reason,
            },
            other => other,
        })?;
        Ok(Self { key, curve })
    }

    pub fn from_curve(key: SetKey, curve: MembershipCurve) -> Self {
        Self { key, curve }
    }

    pub fn key(&self) -> &SetKey {
        &self.key
    }

    pub fn variable(&self) -> &str {
        self.key.variable()
    }

    pub fn label(&self) -> &str {
        self.key.label()
    }

    pub fn curve(&self) -> &MembershipCurve {
        &self.curve
    }

    pub fn x(&self) -> &[f64] {
        self.curve.x()
    }

    pub fn y(&self) -> &[f64] {
        self.curve.y()
    }

    pub fn len(&self) -> usize {
        self.curve.len()
    }

    pub fn is_empty(&self) -> bool {
        self.curve.is_empty()
    }

    /// Membership degree at a discretized domain index.
    ///
    /// Negative indices read index 0; indices past the end read the last one.
    pub fn degree_at(&self, index: i64) -> f64 {
        self.curve.y()[clamp_index(index, self.curve.len())]
    }

    /// A copy of this set carrying a different curve under the same key.
    pub fn with_curve(&self, curve: MembershipCurve) -> Self {
        Self {
            key: self.key.clone(),
            curve,
        }
    }
}

impl fmt::Display for FuzzySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (first, last) = (self.x()[0], self.x()[self.len() - 1]);
        write!(
            f,
            "{} [{first}..{last}] {} points, height {:.3}",
            self.key,
            self.len(),
            self.curve.height()
        )
    }
}

/// Clamp a discretized index into `[0, len - 1]`.
///
/// `len` must be at least 1, which every [`MembershipCurve`] guarantees.
pub fn clamp_index(index: i64, len: usize) -> usize {
    let last = len.saturating_sub(1);
    if index < 0 {
        0
    } else {
        usize::try_from(index).map_or(last, |i| i.min(last))
    }
}
