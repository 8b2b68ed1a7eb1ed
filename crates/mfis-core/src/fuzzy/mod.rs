mod catalogue;
mod curve;
mod fuzzy_set;
mod set_key;

pub use catalogue::FuzzySetCatalogue;
pub use curve::MembershipCurve;
pub use fuzzy_set::{clamp_index, FuzzySet};
pub use set_key::SetKey;
