use crate::analysis::{aggregate_pairs, aggregate_pairs_parallel, OverlapReport};
use crate::config::{resolve_config, RegroupConfig};
use crate::io::{create_writer, OutputFormat};
use crate::parse::parse_group_file_with;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Settings for one `eval` run, after merging CLI flags over the config file.
#[derive(Debug, Clone)]
pub struct EvalConfig {
    pub file: PathBuf,
    pub config: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub top: Option<usize>,
    pub no_parallel: bool,
    pub jobs: usize,
    pub verbosity: u8,
}

/// Resolved options that drive the pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct EvalPlan {
    pub format: OutputFormat,
    pub top: usize,
    pub parallel: bool,
    pub detailed: bool,
    /// `[output] use_color`; `None` keeps colored's TTY detection
    pub use_color: Option<bool>,
}

pub fn handle_eval(config: EvalConfig) -> Result<()> {
    let file_config = resolve_config(config.config.as_deref()).with_context(|| {
        match &config.config {
            Some(path) => format!("failed to load config from {}", path.display()),
            None => "failed to load config".to_string(),
        }
    })?;
    let plan = resolve_plan(&config, &file_config);
    apply_color_override(plan.use_color);

    if plan.parallel && config.jobs > 0 {
        configure_thread_pool(config.jobs);
    }

    let report = evaluate_file(&config.file, &file_config, &plan)?;
    create_writer(plan.format, plan.detailed).write_report(&report)?;
    Ok(())
}

/// Run parse, aggregate and count for a single file.
pub fn evaluate_file(
    file: &std::path::Path,
    file_config: &RegroupConfig,
    plan: &EvalPlan,
) -> Result<OverlapReport> {
    let options = file_config.input().parse_options();
    let rounds = parse_group_file_with(file, &options)
        .with_context(|| format!("failed to parse group file from {}", file.display()))?;

    let counts = if plan.parallel {
        aggregate_pairs_parallel(&rounds)
    } else {
        aggregate_pairs(&rounds)
    }
    .context("failed to add pairs to pair counts")?;

    let report = OverlapReport::new(&rounds, &counts, plan.top);
    log::info!(
        "{} excess co-occurrences across {} repeated pairs",
        report.excess,
        report.repeated_pairs
    );
    Ok(report)
}

/// CLI flags win over config values; config wins over defaults.
pub fn resolve_plan(config: &EvalConfig, file_config: &RegroupConfig) -> EvalPlan {
    let format = config
        .format
        .or_else(|| file_config.default_format().and_then(OutputFormat::from_name))
        .unwrap_or(OutputFormat::Terminal);
    let top = config.top.or(file_config.top()).unwrap_or(0);
    let parallel = !config.no_parallel && (config.jobs > 1 || file_config.parallel());

    EvalPlan {
        format,
        top,
        parallel,
        detailed: top > 0 || config.verbosity > 0,
        use_color: file_config.use_color(),
    }
}

fn apply_color_override(use_color: Option<bool>) {
    if let Some(enabled) = use_color {
        colored::control::set_override(enabled);
    }
}

fn configure_thread_pool(jobs: usize) {
    if let Err(e) = rayon::ThreadPoolBuilder::new()
        .num_threads(jobs)
        .build_global()
    {
        log::debug!("Thread pool already configured: {}", e);
    }
}
