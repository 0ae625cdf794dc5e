use crate::config::resolve_config;
use crate::core::Member;
use crate::parse::{parse_member_table, read_table};
use anyhow::{Context, Result};
use std::path::Path;

pub fn list_members(file: &Path, config: Option<&Path>) -> Result<()> {
    for member in &load_roster(file, config)? {
        match member.id {
            Some(id) => println!("{id}\t{}", member.name),
            None => println!("-\t{}", member.name),
        }
    }
    Ok(())
}

/// Read a roster using the `[input]` settings of the explicit or discovered config.
pub fn load_roster(file: &Path, config: Option<&Path>) -> Result<Vec<Member>> {
    let file_config = resolve_config(config).with_context(|| match config {
        Some(path) => format!("failed to load config from {}", path.display()),
        None => "failed to load config".to_string(),
    })?;
    let input = file_config.input();

    let table = read_table(file, &input.table_options())
        .with_context(|| format!("failed to read member file {}", file.display()))?;
    parse_member_table(&table, &input.id_column, &input.name_column)
        .with_context(|| format!("failed to parse member file {}", file.display()))
}
