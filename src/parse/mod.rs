//! Input parsing: raw tables, round assignments and member rosters.

pub mod groups;
pub mod members;
pub mod table;

pub use groups::{
    parse_group_file, parse_group_file_with, parse_group_lines, parse_group_table, ParseOptions,
    DEFAULT_NAME_COLUMN,
};
pub use members::{parse_member_file, parse_member_lines, parse_member_table, DEFAULT_ID_COLUMN};
pub use table::{find_column_index, read_rows, read_rows_from, read_table, Table, TableOptions};
