// Export modules for library usage
pub mod analysis;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod io;
pub mod parse;

// Re-export commonly used types
pub use crate::core::{
    AggregationError, Error, FormatError, Group, GroupId, Member, MemberId, Result, Round,
    RoundBuilder,
};

pub use crate::parse::{parse_group_file, parse_group_lines, parse_member_file, Table};

pub use crate::analysis::{
    aggregate_pairs, count_dup_member_pairs, count_excess, OverlapReport, PairCounts, PairKey,
};
