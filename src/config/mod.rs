// Core configuration types
mod core;
mod loader;

pub use self::core::{AnalysisSettings, InputConfig, OutputConfig, RegroupConfig};
pub use loader::{
    directory_ancestors, load_config, load_config_file, load_config_from,
    parse_and_validate_config, resolve_config, CONFIG_FILE_NAME,
};
