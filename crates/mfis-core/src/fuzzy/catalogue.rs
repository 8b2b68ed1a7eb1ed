use std::collections::BTreeMap;

use super::{FuzzySet, SetKey};

/// All fuzzy sets known to the engine, partitioned into risk sets
/// (the consequent universe) and input-variable sets (antecedent universes).
#[derive(Debug, Clone, Default)]
pub struct FuzzySetCatalogue {
    risk: BTreeMap<SetKey, FuzzySet>,
    inputs: BTreeMap<SetKey, FuzzySet>,
}

impl FuzzySetCatalogue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a consequent set. Returns the set it replaced, if any.
    pub fn insert_risk(&mut self, set: FuzzySet) -> Option<FuzzySet> {
        self.risk.insert(set.key().clone(), set)
    }

    /// Insert an antecedent set. Returns the set it replaced, if any.
    pub fn insert_input(&mut self, set: FuzzySet) -> Option<FuzzySet> {
        self.inputs.insert(set.key().clone(), set)
    }

    /// Look a key up across both partitions, input sets first.
    pub fn get(&self, key: &SetKey) -> Option<&FuzzySet> {
        self.inputs.get(key).or_else(|| self.risk.get(key))
    }

    /// Antecedent lookup: input-variable sets only, never risk sets.
    pub fn input_set(&self, key: &SetKey) -> Option<&FuzzySet> {
        self.inputs.get(key)
    }

    pub fn risk_set(&self, key: &SetKey) -> Option<&FuzzySet> {
        self.risk.get(key)
    }

    pub fn is_risk(&self, key: &SetKey) -> bool {
        self.risk.contains_key(key)
    }

    /// Risk sets in key order.
    pub fn risk_sets(&self) -> impl Iterator<Item = &FuzzySet> {
        self.risk.values()
    }

    pub fn risk_keys(&self) -> impl Iterator<Item = &SetKey> {
        self.risk.keys()
    }

    /// Input-variable sets in key order.
    pub fn input_sets(&self) -> impl Iterator<Item = &FuzzySet> {
        self.inputs.values()
    }

    pub fn risk_len(&self) -> usize {
        self.risk.len()
    }

    pub fn input_len(&self) -> usize {
        self.inputs.len()
    }

    pub fn len(&self) -> usize {
        self.risk.len() + self.inputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.risk.is_empty() && self.inputs.is_empty()
    }
}
