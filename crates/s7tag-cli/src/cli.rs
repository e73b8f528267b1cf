//! CLI argument definitions for the S7 tag table converter.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "s7tag",
    version,
    about = "S7 tag table converter - turn spreadsheet tag lists into controller imports",
    long_about = "Convert engineering tag lists (Excel workbooks) into TIA-Portal\n\
                  import artifacts: delimited tag-table CSV and tag-table XML.\n\
                  Rows that fail name/type/address validation are skipped with\n\
                  diagnostics; the rest of the batch is still exported."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
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
    /// Convert a workbook tag list into tag-table import files.
    Convert(ConvertArgs),

    /// List the canonical S7 data types.
    Types,
}

#[derive(Parser)]
pub struct ConvertArgs {
    /// Path to the workbook (.xlsx, .xlsm, or .xls).
    #[arg(value_name = "WORKBOOK")]
    pub workbook: PathBuf,

    /// Worksheet to read: zero-based index or sheet name.
    #[arg(long = "sheet", value_name = "NAME_OR_INDEX", default_value = "0")]
    pub sheet: String,

    /// Number of leading header rows to skip.
    #[arg(long = "header-rows", value_name = "N", default_value_t = 1)]
    pub header_rows: u32,

    /// Column mapping JSON file (defaults to columns A-E:
    /// name, dataType, address, comment, initialValue).
    #[arg(long = "mapping", value_name = "JSON")]
    pub mapping: Option<PathBuf>,

    /// Output format to generate.
    #[arg(long = "format", value_enum, default_value = "csv")]
    pub format: OutputFormatArg,

    /// Directory for generated files (default: working directory,
    /// timestamped filenames).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Explicit path for the delimited tag table.
    #[arg(long = "out-csv", value_name = "PATH")]
    pub out_csv: Option<PathBuf>,

    /// Explicit path for the XML tag table.
    #[arg(long = "out-xml", value_name = "PATH")]
    pub out_xml: Option<PathBuf>,

    /// Validate and report without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Csv,
    Xml,
    Both,
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
