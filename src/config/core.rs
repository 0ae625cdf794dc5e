use serde::{Deserialize, Serialize};

use crate::parse::{ParseOptions, TableOptions, DEFAULT_ID_COLUMN, DEFAULT_NAME_COLUMN};

/// Root configuration structure for regroup
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct RegroupConfig {
    /// How the input table is decoded
    #[serde(default)]
    pub input: Option<InputConfig>,

    /// Aggregation settings
    #[serde(default)]
    pub analysis: Option<AnalysisSettings>,

    /// Output configuration
    #[serde(default)]
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InputConfig {
    #[serde(default = "default_name_column")]
    pub name_column: String,

    #[serde(default = "default_id_column")]
    pub id_column: String,

    /// Single-character field delimiter
    #[serde(default = "default_delimiter")]
    pub delimiter: char,

    #[serde(default = "default_trim")]
    pub trim: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            name_column: default_name_column(),
            id_column: default_id_column(),
            delimiter: default_delimiter(),
            trim: default_trim(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AnalysisSettings {
    /// Aggregate rounds on the rayon pool
    #[serde(default)]
    pub parallel: bool,

    /// Number of most repeated pairs to list
    #[serde(default)]
    pub top: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct OutputConfig {
    pub default_format: Option<String>,
    /// Enable colored output (default: auto-detect based on TTY)
    #[serde(default)]
    pub use_color: Option<bool>,
}

fn default_name_column() -> String {
    DEFAULT_NAME_COLUMN.to_string()
}

fn default_id_column() -> String {
    DEFAULT_ID_COLUMN.to_string()
}

fn default_delimiter() -> char {
    ','
}

fn default_trim() -> bool {
    false
}

impl InputConfig {
    pub fn validate(&self) -> Result<(), String> {
        if !self.delimiter.is_ascii() {
            return Err(format!(
                "delimiter must be a single ASCII character, got {:?}",
                self.delimiter
            ));
        }
        if self.name_column.is_empty() {
            return Err("name_column must not be empty".to_string());
        }
        Ok(())
    }

    pub fn table_options(&self) -> TableOptions {
        TableOptions {
            delimiter: self.delimiter as u8,
            trim: self.trim,
        }
    }

    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            name_column: self.name_column.clone(),
            table: self.table_options(),
        }
    }
}

impl RegroupConfig {
    pub fn input(&self) -> InputConfig {
        self.input.clone().unwrap_or_default()
    }

    pub fn parallel(&self) -> bool {
        self.analysis.as_ref().map(|a| a.parallel).unwrap_or(false)
    }

    pub fn top(&self) -> Option<usize> {
        self.analysis.as_ref().and_then(|a| a.top)
    }

    pub fn default_format(&self) -> Option<&str> {
        self.output
            .as_ref()
            .and_then(|o| o.default_format.as_deref())
    }

    /// `None` leaves color detection to the terminal.
    pub fn use_color(&self) -> Option<bool> {
        self.output.as_ref().and_then(|o| o.use_color)
    }
}
