use super::groups::DEFAULT_NAME_COLUMN;
use super::table::{read_table, Table, TableOptions};
use crate::core::{FormatError, Member, MemberId, Result};
use std::path::Path;

pub const DEFAULT_ID_COLUMN: &str = "ID";

/// Read a member roster with `ID` and `NAME` columns.
pub fn parse_member_file(path: &Path, options: &TableOptions) -> Result<Vec<Member>> {
    let table = read_table(path, options)?;
    let members = parse_member_table(&table, DEFAULT_ID_COLUMN, DEFAULT_NAME_COLUMN)?;
    log::info!("Parsed {} members from {}", members.len(), path.display());
    Ok(members)
}

pub fn parse_member_lines(lines: Vec<Vec<String>>) -> Result<Vec<Member>> {
    let table = Table::from_rows(lines)?;
    parse_member_table(&table, DEFAULT_ID_COLUMN, DEFAULT_NAME_COLUMN)
}

pub fn parse_member_table(table: &Table, id_column: &str, name_column: &str) -> Result<Vec<Member>> {
    let id_index = table.require_column(id_column)?;
    let name_index = table.require_column(name_column)?;

    table
        .rows()
        .iter()
        .enumerate()
        .map(|(idx, line)| -> Result<Member> {
            let raw = &line[id_index];
            let id = raw.trim().parse::<i64>().map_err(|_| FormatError::InvalidMemberId {
                row: idx + 2,
                column: id_column.to_string(),
                value: raw.clone(),
            })?;
            Ok(Member::with_id(line[name_index].clone(), MemberId(id)))
        })
        .collect()
}
