//! CLI command implementations for regroup.
//!
//! Available commands:
//! - **eval**: Count excess pair co-occurrences in a round-assignment file
//! - **members**: Parse and list a member roster
//! - **init**: Write a default `.regroup.toml`

pub mod eval;
pub mod init;
pub mod members;

pub use eval::{handle_eval, EvalConfig};
pub use init::init_config;
pub use members::list_members;
