//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use dwh_cli::generate::{DEFAULT_ROWS, DEFAULT_SEED};

#[derive(Parser)]
#[command(
    name = "university-dwh",
    version,
    about = "University data mart - clean raw extracts and build a star schema",
    long_about = "Clean raw university extracts and assemble a dimensional data mart.\n\n\
                  Cleaned tables are written next to the raw directory by default,\n\
                  the fact and dimension tables next to the cleaned directory."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Clean every raw extract into the cleaned directory.
    Clean(CleanArgs),

    /// Build the fact and dimension tables from cleaned tables.
    Transform(TransformArgs),

    /// Clean, then transform, in one run.
    Run(RunArgs),

    /// List the entity catalogue and its files.
    Entities,

    /// Write a synthetic set of raw extracts with typical defects.
    Generate(GenerateArgs),
}

#[derive(Args)]
pub struct CleanArgs {
    /// Directory holding the `<entity>_raw.csv` extracts.
    #[arg(value_name = "RAW_DIR")]
    pub raw_dir: PathBuf,

    /// Where cleaned tables go (default: a `cleaned` sibling of RAW_DIR).
    #[arg(long = "cleaned-dir", value_name = "DIR")]
    pub cleaned_dir: Option<PathBuf>,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args)]
pub struct TransformArgs {
    /// Directory holding the `<entity>_clean.csv` tables.
    #[arg(value_name = "CLEANED_DIR")]
    pub cleaned_dir: PathBuf,

    /// Where mart tables go (default: a `transformed` sibling of CLEANED_DIR).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args)]
pub struct RunArgs {
    /// Directory holding the `<entity>_raw.csv` extracts.
    #[arg(value_name = "RAW_DIR")]
    pub raw_dir: PathBuf,

    /// Where cleaned tables go (default: a `cleaned` sibling of RAW_DIR).
    #[arg(long = "cleaned-dir", value_name = "DIR")]
    pub cleaned_dir: Option<PathBuf>,

    /// Where mart tables go (default: a `transformed` sibling of the cleaned directory).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args)]
pub struct GenerateArgs {
    /// Directory the `<entity>_raw.csv` extracts are written to.
    #[arg(value_name = "RAW_DIR")]
    pub raw_dir: PathBuf,

    /// Students, and rows per event table.
    #[arg(long = "rows", value_name = "N", default_value_t = DEFAULT_ROWS)]
    pub rows: usize,

    /// Seed for the random generator; the same seed writes the same files.
    #[arg(long = "seed", value_name = "S", default_value_t = DEFAULT_SEED)]
    pub seed: u64,
}

/// Flags shared by every stage command.
#[derive(Args)]
pub struct OutputArgs {
    /// Run every stage and print the summary without writing tables.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Write the run report as JSON to this path.
    #[arg(long = "report", value_name = "PATH")]
    pub report: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_run_flags() {
        let cli = Cli::try_parse_from([
            "university-dwh",
            "run",
            "data/extracted",
            "--output-dir",
            "out",
            "--dry-run",
            "--log-format",
            "json",
        ])
        .unwrap();
        let Command::Run(args) = cli.command else {
            panic!("expected run command");
        };
        assert_eq!(args.raw_dir, PathBuf::from("data/extracted"));
        assert_eq!(args.output_dir, Some(PathBuf::from("out")));
        assert!(args.cleaned_dir.is_none());
        assert!(args.output.dry_run);
        assert!(matches!(cli.log_format, LogFormatArg::Json));
    }

    #[test]
    fn test_generate_defaults() {
        let cli = Cli::try_parse_from(["university-dwh", "generate", "data/extracted"]).unwrap();
        let Command::Generate(args) = cli.command else {
            panic!("expected generate command");
        };
        assert_eq!(args.raw_dir, PathBuf::from("data/extracted"));
        assert_eq!(args.rows, DEFAULT_ROWS);
        assert_eq!(args.seed, DEFAULT_SEED);

        let cli = Cli::try_parse_from([
            "university-dwh",
            "generate",
            "raw",
            "--rows",
            "250",
            "--seed",
            "9",
        ])
        .unwrap();
        let Command::Generate(args) = cli.command else {
            panic!("expected generate command");
        };
        assert_eq!((args.rows, args.seed), (250, 9));
    }
}
