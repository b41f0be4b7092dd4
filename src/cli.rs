//! CLI module - Command-line interface definitions and handlers

use anyhow::Result;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

use crate::core::emoji::EmojiRanges;
use crate::core::filter::FilterRules;
use crate::core::render::{OutputFormat, RenderConfig};
use crate::flows::clean::CleanOptions;

/// demoji - strip emoji characters from source files in place.
#[derive(Parser, Debug)]
#[command(name = "demoji")]
#[command(
    author,
    version,
    about,
    long_about = r#"demoji walks ROOT recursively and removes emoji code points from the
text of every eligible file, rewriting it in place. Files without emoji are
never written. No backups are kept.

A file is eligible when its extension is on the allow-list and none of its
directories (relative to ROOT) is on the exclusion list.

Defaults:
- extensions: jsx, js, md, sh, ts, tsx (case-insensitive)
- excluded directories: node_modules, .git, .next, dist, build, .env

Examples:
    demoji
    demoji ~/projects/site
    demoji . --extensions md,txt --exclude vendor,target
    demoji . --format json
"#
)]
pub struct Cli {
    /// Root directory to clean.
    #[arg(
        value_name = "ROOT",
        env = "DEMOJI_ROOT",
        default_value = ".",
        long_help = "Root directory to clean (defaults to the current directory).\n\n\
The run fails with a non-zero exit status if ROOT does not exist. Paths in the\n\
report are relative to it."
    )]
    pub root: PathBuf,

    /// File extensions to process (comma-separated, replaces the defaults).
    #[arg(
        long,
        value_name = "EXTS",
        value_delimiter = ',',
        long_help = "Comma-separated list of file extensions to process, replacing the\n\
default allow-list. Matching is case-insensitive; a leading dot is optional.\n\n\
Example: --extensions md,txt,.rs"
    )]
    pub extensions: Vec<String>,

    /// Directory names to skip (comma-separated, replaces the defaults).
    #[arg(
        long,
        value_name = "DIRS",
        value_delimiter = ',',
        long_help = "Comma-separated list of directory names to skip, replacing the default\n\
exclusion list. A directory is skipped only when a path segment equals one of\n\
these names exactly (case-sensitive).\n\n\
Example: --exclude node_modules,vendor"
    )]
    pub exclude: Vec<String>,

    /// Output format (text/json).
    #[arg(
        long,
        default_value = "text",
        value_parser = ["text", "json"],
        value_name = "FORMAT",
        long_help = "Select the report format.\n\n\
Supported values:\n\
- text (default): progress lines while scanning, then a summary block\n\
- json: a single JSON document with the summary and cleaned files"
    )]
    pub format: String,

    /// Disable colored output.
    #[arg(
        long,
        long_help = "Disable colored output. This is useful when piping to files or when your\n\
terminal does not support ANSI colors."
    )]
    pub no_color: bool,

    /// Quiet mode (summary only).
    #[arg(
        short,
        long,
        long_help = "Print only the final summary. Per-file failures are still logged to\n\
stderr."
    )]
    pub quiet: bool,

    /// Verbose mode (repeat for more diagnostics).
    #[arg(
        short,
        long,
        action = ArgAction::Count,
        long_help = "Increase diagnostic output on stderr: -v info, -vv debug, -vvv trace.\n\n\
RUST_LOG, when set, takes precedence."
    )]
    pub verbose: u8,
}

fn setup_logging(verbose: u8) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        match verbose {
            0 => tracing_subscriber::EnvFilter::new("warn"),
            1 => tracing_subscriber::EnvFilter::new("info,ignore=warn"),
            2 => tracing_subscriber::EnvFilter::new("debug,ignore=warn"),
            _ => tracing_subscriber::EnvFilter::new("trace"),
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    setup_logging(cli.verbose);

    if cli.no_color {
        colored::control::set_override(false);
    }

    let format: OutputFormat = cli.format.parse().unwrap_or_default();
    let render_config = RenderConfig::new(format, cli.quiet);

    // Keep a missing root as given so the error names it
    let root = cli.root.canonicalize().unwrap_or(cli.root);

    let options = CleanOptions {
        rules: FilterRules::with_overrides(&cli.extensions, &cli.exclude),
        ranges: EmojiRanges::default(),
    };

    crate::flows::clean::run_clean(&root, &options, render_config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::path::Path;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["demoji"]).unwrap();
        assert_eq!(cli.format, "text");
        assert!(cli.extensions.is_empty());
        assert!(cli.exclude.is_empty());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_parse_overrides() {
        let cli = Cli::try_parse_from([
            "demoji",
            "site",
            "--extensions",
            "md,.TXT",
            "--exclude",
            "vendor",
            "-vv",
            "--format",
            "json",
        ])
        .unwrap();

        assert_eq!(cli.root, PathBuf::from("site"));
        assert_eq!(cli.extensions, vec!["md", ".TXT"]);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.format, "json");

        let rules = FilterRules::with_overrides(&cli.extensions, &cli.exclude);
        assert!(rules.should_process(Path::new("notes.txt")));
        assert!(!rules.should_process(Path::new("vendor/notes.md")));
    }

    #[test]
    fn test_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["demoji", "--format", "yaml"]).is_err());
    }
}
