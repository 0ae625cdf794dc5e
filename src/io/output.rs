use crate::analysis::OverlapReport;
use colored::*;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Terminal,
}

impl OutputFormat {
    /// Parse a format name from config; unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "terminal" => Some(Self::Terminal),
            _ => None,
        }
    }
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &OverlapReport) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &OverlapReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        writeln!(self.writer, "{json}")?;
        Ok(())
    }
}

/// Plain output: the excess count alone, or a short colored summary when
/// `detailed` is set.
pub struct TerminalWriter<W: Write> {
    writer: W,
    detailed: bool,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, detailed: bool) -> Self {
        Self { writer, detailed }
    }

    fn write_summary(&mut self, report: &OverlapReport) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", "Group Overlap Summary".bold())?;
        writeln!(self.writer, "  Rounds: {}", report.rounds)?;
        writeln!(self.writer, "  Members: {}", report.members)?;
        writeln!(self.writer, "  Distinct pairs: {}", report.pairs)?;

        let repeated = if report.repeated_pairs == 0 {
            report.repeated_pairs.to_string().green()
        } else {
            report.repeated_pairs.to_string().yellow()
        };
        writeln!(self.writer, "  Repeated pairs: {repeated}")?;
        Ok(())
    }

    fn write_top_pairs(&mut self, report: &OverlapReport) -> anyhow::Result<()> {
        if report.top.is_empty() {
            return Ok(());
        }
        writeln!(self.writer, "{}", "Most repeated pairs:".bold())?;
        for (i, pair) in report.top.iter().enumerate() {
            writeln!(
                self.writer,
                "  {}. {} & {} - together {} times",
                i + 1,
                pair.members.0,
                pair.members.1,
                pair.count.to_string().red()
            )?;
        }
        Ok(())
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &OverlapReport) -> anyhow::Result<()> {
        if !self.detailed {
            writeln!(self.writer, "{}", report.excess)?;
            return Ok(());
        }
        self.write_summary(report)?;
        self.write_top_pairs(report)?;
        writeln!(self.writer, "  Excess co-occurrences: {}", report.excess)?;
        Ok(())
    }
}

pub fn create_writer(format: OutputFormat, detailed: bool) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(std::io::stdout())),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(std::io::stdout(), detailed)),
    }
}
