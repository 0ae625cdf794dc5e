use crate::config::CONFIG_FILE_NAME;
use crate::io;
use anyhow::Result;
use std::path::{Path, PathBuf};

const DEFAULT_CONFIG: &str = r#"# Regroup Configuration

[input]
name_column = "NAME"
id_column = "ID"
delimiter = ","
trim = false

[analysis]
parallel = false
# top = 10

[output]
default_format = "terminal"
# use_color = true
"#;

pub fn init_config(force: bool) -> Result<()> {
    write_default_config(&PathBuf::from(CONFIG_FILE_NAME), force)?;
    println!("Created {} configuration file", CONFIG_FILE_NAME);
    Ok(())
}

pub fn write_default_config(config_path: &Path, force: bool) -> Result<()> {
    if io::file_exists(config_path) && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }
    io::write_file(config_path, DEFAULT_CONFIG)
}
