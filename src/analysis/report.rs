use super::duplicates::{count_excess, count_repeated_pairs};
use super::pairs::{PairCounts, PairKey};
use crate::core::Round;
use serde::Serialize;
use std::collections::BTreeSet;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RepeatedPair {
    pub members: (String, String),
    pub count: usize,
}

impl RepeatedPair {
    fn from_entry(key: &PairKey, count: usize) -> Self {
        let (first, second) = key.names();
        Self {
            members: (first.to_string(), second.to_string()),
            count,
        }
    }
}

/// Summary of one overlap analysis run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OverlapReport {
    pub rounds: usize,
    pub members: usize,
    pub pairs: usize,
    pub repeated_pairs: usize,
    pub excess: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub top: Vec<RepeatedPair>,
}

impl OverlapReport {
    /// `top` limits how many of the most repeated pairs are listed.
    pub fn new(rounds: &[Round], counts: &PairCounts, top: usize) -> Self {
        let members: BTreeSet<&str> = rounds
            .iter()
            .flat_map(|r| r.groups())
            .flat_map(|g| g.members())
            .map(|m| m.name.as_str())
            .collect();

        Self {
            rounds: rounds.len(),
            members: members.len(),
            pairs: counts.len(),
            repeated_pairs: count_repeated_pairs(counts),
            excess: count_excess(counts),
            top: most_repeated(counts, top),
        }
    }
}

/// Pairs seen more than once, most frequent first, ties broken by key.
pub fn most_repeated(counts: &PairCounts, limit: usize) -> Vec<RepeatedPair> {
    let mut repeated: Vec<(&PairKey, usize)> =
        counts.iter().filter(|(_, count)| *count > 1).collect();
    repeated.sort_by(|(ka, ca), (kb, cb)| cb.cmp(ca).then_with(|| ka.cmp(kb)));
    repeated
        .into_iter()
        .take(limit)
        .map(|(key, count)| RepeatedPair::from_entry(key, count))
        .collect()
}
