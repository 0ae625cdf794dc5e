use anyhow::Result;
use clap::Parser;
use regroup::cli::{Cli, Commands};
use regroup::commands::EvalConfig;

// Main orchestrator function
fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.command.verbosity());

    match cli.command {
        Commands::Eval {
            file,
            file_flag,
            config,
            format,
            top,
            no_parallel,
            jobs,
            verbosity,
        } => {
            let file = file
                .or(file_flag)
                .ok_or_else(|| anyhow::anyhow!("no group file given"))?;
            regroup::commands::handle_eval(EvalConfig {
                file,
                config,
                format: format.map(Into::into),
                top,
                no_parallel,
                jobs,
                verbosity,
            })
        }
        Commands::Members { file, config, .. } => {
            regroup::commands::list_members(&file, config.as_deref())
        }
        Commands::Init { force } => regroup::commands::init_config(force),
    }
}

// RUST_LOG takes precedence over -v flags
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}
