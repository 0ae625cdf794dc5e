use super::pairs::{aggregate_pairs, aggregate_pairs_parallel, PairCounts};
use crate::core::{Result, Round};

/// Sum of `count - 1` over every pair seen more than once.
///
/// A pair grouped together once is the baseline and contributes nothing; a
/// pair grouped together `k` times contributes `k - 1`.
pub fn count_excess(counts: &PairCounts) -> usize {
    counts.iter().map(|(_, count)| count.saturating_sub(1)).sum()
}

/// Number of distinct pairs that shared a group more than once.
pub fn count_repeated_pairs(counts: &PairCounts) -> usize {
    counts.iter().filter(|(_, count)| *count > 1).count()
}

/// Parse-free entry point: aggregate the rounds and count excess repeats.
pub fn count_dup_member_pairs(rounds: &[Round]) -> Result<usize> {
    let counts = aggregate_pairs(rounds)?;
    Ok(count_excess(&counts))
}

pub fn count_dup_member_pairs_parallel(rounds: &[Round]) -> Result<usize> {
    let counts = aggregate_pairs_parallel(rounds)?;
    Ok(count_excess(&counts))
}
