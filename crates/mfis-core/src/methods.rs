//! Typed method selectors.
//!
//! Each enum has one canonical value per method; every accepted spelling is
//! resolved once, in `FromStr`, and config deserialization goes through the
//! same path.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::InferenceError;

fn normalize(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_ascii_lowercase()
}

fn unknown(kind: &str, name: &str) -> InferenceError {
    InferenceError::UnknownMethod {
        kind: kind.to_string(),
        name: name.to_string(),
    }
}

/// How a consequent set is truth-qualified by its firing strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ConsequentMethod {
    /// `y' = min(similarity, y)`.
    #[default]
    Clip,
    /// `y' = similarity * y`.
    Scale,
}

impl ConsequentMethod {
    pub const ALL: [ConsequentMethod; 2] = [ConsequentMethod::Clip, ConsequentMethod::Scale];

    pub fn as_str(self) -> &'static str {
        match self {
            ConsequentMethod::Clip => "clip",
            ConsequentMethod::Scale => "scale",
        }
    }
}

impl FromStr for ConsequentMethod {
    type Err = InferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "clip" | "clipping" | "min" => Ok(ConsequentMethod::Clip),
            "scale" | "scaling" | "prod" | "product" => Ok(ConsequentMethod::Scale),
            _ => Err(unknown("consequent", s)),
        }
    }
}

/// Reduction of an aggregate fuzzy set to one crisp value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DefuzzMethod {
    /// Centroid of area (COA).
    #[default]
    Centroid,
    /// Bisector of area (BOA).
    Bisector,
    /// Mean of maximum (MOM).
    MeanOfMaximum,
    /// Smallest of maximum (SOM).
    SmallestOfMaximum,
    /// Largest of maximum (LOM).
    LargestOfMaximum,
}

impl DefuzzMethod {
    pub const ALL: [DefuzzMethod; 5] = [
        DefuzzMethod::Centroid,
        DefuzzMethod::Bisector,
        DefuzzMethod::MeanOfMaximum,
        DefuzzMethod::SmallestOfMaximum,
        DefuzzMethod::LargestOfMaximum,
    ];

    /// Short code, e.g. `COA`.
    pub fn code(self) -> &'static str {
        match self {
            DefuzzMethod::Centroid => "COA",
            DefuzzMethod::Bisector => "BOA",
            DefuzzMethod::MeanOfMaximum => "MOM",
            DefuzzMethod::SmallestOfMaximum => "SOM",
            DefuzzMethod::LargestOfMaximum => "LOM",
        }
    }

    /// Full name, e.g. `centroid of area`.
    pub fn full_name(self) -> &'static str {
        match self {
            DefuzzMethod::Centroid => "centroid of area",
            DefuzzMethod::Bisector => "bisector of area",
            DefuzzMethod::MeanOfMaximum => "mean of maximum",
            DefuzzMethod::SmallestOfMaximum => "smallest of maximum",
            DefuzzMethod::LargestOfMaximum => "largest of maximum",
        }
    }
}

impl FromStr for DefuzzMethod {
    type Err = InferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "coa" | "centroid" | "centroid of area" => Ok(DefuzzMethod::Centroid),
            "boa" | "bisector" | "bisector of area" => Ok(DefuzzMethod::Bisector),
            "mom" | "mean of maximum" => Ok(DefuzzMethod::MeanOfMaximum),
            "som" | "smallest of maximum" => Ok(DefuzzMethod::SmallestOfMaximum),
            "lom" | "largest of maximum" => Ok(DefuzzMethod::LargestOfMaximum),
            _ => Err(unknown("defuzzification", s)),
        }
    }
}

/// What the aggregator does when risk sets are sampled on different grids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum GridPolicy {
    /// All risk sets must share one identical grid.
    #[default]
    Strict,
    /// Reconcile onto the union of breakpoints with linear interpolation.
    Interpolate,
}

impl GridPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            GridPolicy::Strict => "strict",
            GridPolicy::Interpolate => "interpolate",
        }
    }
}

impl FromStr for GridPolicy {
    type Err = InferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "strict" => Ok(GridPolicy::Strict),
            "interpolate" | "interp" => Ok(GridPolicy::Interpolate),
            _ => Err(unknown("grid policy", s)),
        }
    }
}

macro_rules! string_conversions {
    ($ty:ty, $canonical:ident) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.$canonical())
            }
        }

        impl TryFrom<String> for $ty {
            type Error = InferenceError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                value.parse()
            }
        }

        impl From<$ty> for String {
            fn from(value: $ty) -> Self {
                value.$canonical().to_string()
            }
        }
    };
}

string_conversions!(ConsequentMethod, as_str);
string_conversions!(DefuzzMethod, code);
string_conversions!(GridPolicy, as_str);
