//! Group-overlap analysis: pair aggregation and repeat counting.

pub mod duplicates;
pub mod pairs;
pub mod report;

pub use duplicates::{
    count_dup_member_pairs, count_dup_member_pairs_parallel, count_excess, count_repeated_pairs,
};
pub use pairs::{aggregate_pairs, aggregate_pairs_parallel, member_pairs, PairCounts, PairKey};
pub use report::{most_repeated, OverlapReport, RepeatedPair};
