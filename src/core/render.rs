//! Renderer module
//!
//! Streams run progress and renders the final summary as text or JSON.

use colored::Colorize;
use serde::Serialize;
use std::io::{self, Write};
use std::path::Path;

use crate::core::model::RunSummary;

const RULE_WIDTH: usize = 60;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

/// Render configuration combining format and options
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderConfig {
    pub format: OutputFormat,
    /// Suppress the banner and per-file lines (text only)
    pub quiet: bool,
}

impl RenderConfig {
    pub fn new(format: OutputFormat, quiet: bool) -> Self {
        Self { format, quiet }
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    root: String,
    #[serde(flatten)]
    summary: &'a RunSummary,
}

/// Writes run output to `out`
pub struct Renderer<W: Write> {
    config: RenderConfig,
    out: W,
}

impl<W: Write> Renderer<W> {
    pub fn new(config: RenderConfig, out: W) -> Self {
        Self { config, out }
    }

    fn streaming(&self) -> bool {
        self.config.format == OutputFormat::Text && !self.config.quiet
    }

    fn rule(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", "=".repeat(RULE_WIDTH))
    }

    /// Banner and target count, printed before any file is processed
    pub fn begin(&mut self, root: &Path, targets: usize) -> io::Result<()> {
        if !self.streaming() {
            return Ok(());
        }

        self.rule()?;
        writeln!(self.out, "{}", "EMOJI REMOVAL".bold())?;
        self.rule()?;
        writeln!(self.out, "Root: {}", root.display())?;
        writeln!(self.out)?;
        writeln!(self.out, "Found {} source files to scan...", targets)?;
        writeln!(self.out)
    }

    /// One rewritten file
    pub fn cleaned(&mut self, relative: &str, removed: usize) -> io::Result<()> {
        if !self.streaming() {
            return Ok(());
        }

        writeln!(self.out, "{} {}", "CLEANED:".green().bold(), relative)?;
        writeln!(self.out, "  - Emojis removed: {}", removed)
    }

    /// Final summary block (text) or the whole report (json)
    pub fn finish(&mut self, root: &Path, summary: &RunSummary) -> io::Result<()> {
        match self.config.format {
            OutputFormat::Text => self.finish_text(summary),
            OutputFormat::Json => self.finish_json(root, summary),
        }
    }

    fn finish_text(&mut self, summary: &RunSummary) -> io::Result<()> {
        if !self.config.quiet {
            writeln!(self.out)?;
        }
        self.rule()?;
        writeln!(self.out, "{}", "EMOJI REMOVAL COMPLETE".bold())?;
        self.rule()?;
        writeln!(self.out, "Files scanned:         {}", summary.files_scanned)?;
        writeln!(self.out, "Files modified:        {}", summary.files_modified)?;
        if summary.files_failed > 0 {
            let line = format!("Files failed:          {}", summary.files_failed);
            writeln!(self.out, "{}", line.yellow())?;
        } else {
            writeln!(self.out, "Files failed:          0")?;
        }
        writeln!(self.out, "Total emojis removed:  {}", summary.emojis_removed)?;
        self.rule()?;
        self.out.flush()
    }

    fn finish_json(&mut self, root: &Path, summary: &RunSummary) -> io::Result<()> {
        let report = JsonReport {
            root: crate::core::paths::normalize_path(root),
            summary,
        };
        let json = serde_json::to_string_pretty(&report).map_err(io::Error::other)?;
        writeln!(self.out, "{}", json)?;
        self.out.flush()
    }

    /// Consume the renderer and hand back the writer
    #[allow(dead_code)]
    pub fn into_inner(self) -> W {
        self.out
    }
}
