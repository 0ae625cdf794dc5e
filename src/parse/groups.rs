use super::table::{read_table, Table, TableOptions};
use crate::core::{FormatError, GroupId, Member, Result, Round, RoundBuilder};
use std::collections::HashMap;
use std::path::Path;

pub const DEFAULT_NAME_COLUMN: &str = "NAME";

/// Settings for reading a round-assignment table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    pub name_column: String,
    pub table: TableOptions,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            name_column: DEFAULT_NAME_COLUMN.to_string(),
            table: TableOptions::default(),
        }
    }
}

/// Parse a round-assignment file with default options.
pub fn parse_group_file(path: &Path) -> Result<Vec<Round>> {
    parse_group_file_with(path, &ParseOptions::default())
}

pub fn parse_group_file_with(path: &Path, options: &ParseOptions) -> Result<Vec<Round>> {
    let table = read_table(path, &options.table)?;
    let rounds = parse_group_table(&table, &options.name_column)?;
    log::info!("Parsed {} rounds from {}", rounds.len(), path.display());
    Ok(rounds)
}

/// Parse raw rows (header first) into rounds.
pub fn parse_group_lines(lines: Vec<Vec<String>>) -> Result<Vec<Round>> {
    let table = Table::from_rows(lines)?;
    parse_group_table(&table, DEFAULT_NAME_COLUMN)
}

/// Build one round per non-name column, in header order.
///
/// Names must be unique across rows; a repeat is reported with both rows.
pub fn parse_group_table(table: &Table, name_column: &str) -> Result<Vec<Round>> {
    let name_index = table.require_column(name_column)?;
    let headers = table.headers();

    let mut builders: Vec<RoundBuilder> = (0..headers.len().saturating_sub(1))
        .map(|_| RoundBuilder::new())
        .collect();
    let mut seen: HashMap<&str, usize> = HashMap::new();

    for (idx, line) in table.rows().iter().enumerate() {
        let row = idx + 2;
        if let Some(&first_row) = seen.get(line[name_index].as_str()) {
            return Err(FormatError::DuplicateName {
                row,
                first_row,
                name: line[name_index].clone(),
            }
            .into());
        }
        seen.insert(&line[name_index], row);

        let (name, group_ids) = parse_group_line(line, headers, name_index, row)?;
        for (builder, id) in builders.iter_mut().zip(group_ids) {
            builder.add_member(Member::new(name.clone()), id);
        }
    }

    Ok(builders.into_iter().map(RoundBuilder::build).collect())
}

fn parse_group_line(
    line: &[String],
    headers: &[String],
    name_index: usize,
    row: usize,
) -> Result<(String, Vec<GroupId>)> {
    let name = line[name_index].clone();
    let group_ids = line
        .iter()
        .enumerate()
        .filter(|(col, _)| *col != name_index)
        .map(|(col, cell)| parse_group_id(cell, row, &headers[col]))
        .collect::<Result<Vec<_>>>()?;
    Ok((name, group_ids))
}

fn parse_group_id(cell: &str, row: usize, column: &str) -> Result<GroupId> {
    cell.trim().parse::<i64>().map(GroupId).map_err(|_| {
        FormatError::InvalidGroupId {
            row,
            column: column.to_string(),
            value: cell.to_string(),
        }
        .into()
    })
}
