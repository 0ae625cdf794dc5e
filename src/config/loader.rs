use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::RegroupConfig;
use crate::core::{Error, Result};

pub const CONFIG_FILE_NAME: &str = ".regroup.toml";

/// Pure function to read config file contents
pub(crate) fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Pure function to parse and validate config from TOML string
pub fn parse_and_validate_config(contents: &str) -> std::result::Result<RegroupConfig, String> {
    let config = toml::from_str::<RegroupConfig>(contents)
        .map_err(|e| format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e))?;

    if let Some(ref input) = config.input {
        input.validate()?;
    }

    Ok(config)
}

/// Try loading config from a specific path, warning and returning None on failure
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<RegroupConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("{}. Using defaults.", e);
            None
        }
    }
}

/// Handle file read errors with appropriate logging
fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // "file not found" is the normal case while walking up
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Pure function to generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search for `.regroup.toml` from `start` upward.
pub fn load_config_from(start: PathBuf) -> RegroupConfig {
    const MAX_TRAVERSAL_DEPTH: usize = 10;

    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            RegroupConfig::default()
        })
}

pub fn load_config() -> RegroupConfig {
    match std::env::current_dir() {
        Ok(dir) => load_config_from(dir),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            RegroupConfig::default()
        }
    }
}

/// Load an explicitly requested config file. Unlike discovery, failures here
/// are errors.
pub fn load_config_file(path: &Path) -> Result<RegroupConfig> {
    let contents = read_config_file(path).map_err(|e| Error::io(path, e))?;
    parse_and_validate_config(&contents).map_err(Error::Config)
}

/// An explicit `--config` path must load; otherwise fall back to discovery.
pub fn resolve_config(explicit: Option<&Path>) -> Result<RegroupConfig> {
    match explicit {
        Some(path) => load_config_file(path),
        None => Ok(load_config()),
    }
}
