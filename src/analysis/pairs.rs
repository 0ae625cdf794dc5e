//! Pair enumeration and co-occurrence aggregation.

use crate::core::{AggregationError, Group, Member, Round};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Two distinct member names, greater name first.
///
/// Construction goes through [`PairKey::new`], so `(a, b)` and `(b, a)` always
/// produce the same key.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PairKey {
    first: String,
    second: String,
}

impl PairKey {
    pub fn new(a: &str, b: &str) -> Result<Self, AggregationError> {
        if a == b {
            return Err(AggregationError::SelfPair(a.to_string()));
        }
        let (first, second) = if a > b { (a, b) } else { (b, a) };
        Ok(Self {
            first: first.to_string(),
            second: second.to_string(),
        })
    }

    /// Build a key from a slice that must hold exactly two members.
    pub fn from_members(pair: &[Member]) -> Result<Self, AggregationError> {
        match pair {
            [a, b] => Self::new(&a.name, &b.name),
            _ => Err(AggregationError::MalformedPair { len: pair.len() }),
        }
    }

    pub fn names(&self) -> (&str, &str) {
        (&self.first, &self.second)
    }
}

impl fmt::Display for PairKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} & {}", self.first, self.second)
    }
}

/// Every unordered pair of positions in the group, in position order.
pub fn member_pairs(group: &Group) -> impl Iterator<Item = (&Member, &Member)> + '_ {
    let members = group.members();
    members
        .iter()
        .enumerate()
        .flat_map(move |(i, a)| members[i + 1..].iter().map(move |b| (a, b)))
}

/// How often each pair shared a group across all rounds.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PairCounts {
    counts: HashMap<PairKey, usize>,
}

impl PairCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_pair(&mut self, a: &Member, b: &Member) -> Result<(), AggregationError> {
        let key = PairKey::new(&a.name, &b.name)?;
        *self.counts.entry(key).or_insert(0) += 1;
        Ok(())
    }

    pub fn add_group(&mut self, group: &Group) -> Result<(), AggregationError> {
        for (a, b) in member_pairs(group) {
            self.add_pair(a, b)?;
        }
        Ok(())
    }

    pub fn add_round(&mut self, round: &Round) -> Result<(), AggregationError> {
        for group in round.groups() {
            self.add_group(group)?;
        }
        Ok(())
    }

    /// Fold another partial count map into this one.
    pub fn merge(&mut self, other: PairCounts) {
        for (key, count) in other.counts {
            *self.counts.entry(key).or_insert(0) += count;
        }
    }

    pub fn get(&self, key: &PairKey) -> usize {
        self.counts.get(key).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PairKey, usize)> {
        self.counts.iter().map(|(k, &v)| (k, v))
    }
}

/// Count pair co-occurrences over every group of every round.
pub fn aggregate_pairs(rounds: &[Round]) -> Result<PairCounts, AggregationError> {
    let mut counts = PairCounts::new();
    for round in rounds {
        counts.add_round(round)?;
    }
    log::debug!(
        "Aggregated {} distinct pairs over {} rounds",
        counts.len(),
        rounds.len()
    );
    Ok(counts)
}

/// Same result as [`aggregate_pairs`], with one partial map per round built
/// on the rayon pool and merged at the end.
pub fn aggregate_pairs_parallel(rounds: &[Round]) -> Result<PairCounts, AggregationError> {
    let partials = rounds
        .par_iter()
        .map(|round| -> Result<PairCounts, AggregationError> {
            let mut partial = PairCounts::new();
            partial.add_round(round)?;
            Ok(partial)
        })
        .collect::<Result<Vec<_>, AggregationError>>()?;

    let counts = partials
        .into_iter()
        .fold(PairCounts::new(), |mut acc, partial| {
            acc.merge(partial);
            acc
        });
    log::debug!(
        "Aggregated {} distinct pairs over {} rounds in parallel",
        counts.len(),
        rounds.len()
    );
    Ok(counts)
}
