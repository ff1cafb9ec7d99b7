//! CLI module - Command-line interface definitions and handlers

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::warn;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::commands::RunContext;
use crate::core::file_reader::{EncodingStrategy, FileReadConfig, DEFAULT_MAX_FILE_SIZE};
use crate::core::paths::NamePolicy;
use crate::core::render::{OutputFormat, RenderConfig};
use crate::core::tokenizer::DecimalPolicy;

/// filesum - sum the integers in a text file, or view its raw content.
#[derive(Parser, Debug)]
#[command(name = "filesum")]
#[command(
    author,
    version,
    about,
    long_about = r#"filesum reads a text file, picks out the whitespace-separated tokens that
are integers, and reports their sum together with the numbers it found.
It can also print a file's content verbatim.

Each command prints a single result in the selected format (default: jsonl).

Output formats:
- jsonl: one JSON object per line
- json: a single JSON array
- md: human-friendly Markdown
- raw: the sum expression, the file content, or the error message

Examples:
    filesum sum numbers.txt
    filesum --format md sum "numbers.txt"
    filesum sum data.txt --decimals truncate
    filesum --format raw view notes.txt
"#
)]
pub struct Cli {
    /// Directory that relative paths are resolved against.
    #[arg(
        long,
        global = true,
        default_value = ".",
        value_name = "ROOT",
        long_help = "Directory that relative PATH arguments are resolved against (defaults to\n\
the current directory). Absolute paths are used as-is."
    )]
    pub root: PathBuf,

    /// Output format (jsonl/json/md/raw).
    #[arg(
        long,
        global = true,
        default_value = "jsonl",
        value_name = "FORMAT",
        long_help = "Select the output format.\n\n\
Supported values:\n\
- jsonl (default)\n\
- json\n\
- md (markdown)\n\
- raw"
    )]
    pub format: String,

    /// Disable colored output (when applicable).
    #[arg(
        long,
        global = true,
        long_help = "Disable colored error messages on stderr. This is useful when piping to\n\
files or when your terminal does not support ANSI colors."
    )]
    pub no_color: bool,

    /// Quiet mode (minimal output).
    #[arg(
        short,
        long,
        global = true,
        long_help = "Suppress error lines on stderr and lower logging to errors only.\n\
Results (including error results) are still printed to stdout."
    )]
    pub quiet: bool,

    /// Verbose mode (more diagnostics).
    #[arg(
        short,
        long,
        global = true,
        long_help = "Enable debug logging on stderr (token counts, skipped tokens, resolved\n\
paths). RUST_LOG is also honored."
    )]
    pub verbose: bool,

    /// Pretty-print JSON/JSONL output with indentation.
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Replace invalid UTF-8 instead of failing.
    #[arg(
        long,
        global = true,
        long_help = "Read files with invalid UTF-8 by replacing the bad sequences with\n\
U+FFFD. A warning is attached to the result.\n\n\
By default such files are reported as an I/O failure."
    )]
    pub lossy: bool,

    /// Largest file that will be read, in bytes.
    #[arg(
        long,
        global = true,
        env = "FILESUM_MAX_FILE_SIZE",
        default_value_t = DEFAULT_MAX_FILE_SIZE,
        value_name = "BYTES"
    )]
    pub max_file_size: u64,

    /// Only accept simple `.txt` file names.
    #[arg(
        long,
        global = true,
        long_help = "Only accept file names made of letters, digits, '_' and '-' with a .txt\n\
extension (e.g. numbers_2024.txt). Other names fail with INVALID_FILE_NAME."
    )]
    pub require_txt: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sum the integers found in a file.
    #[command(
        long_about = "Split the file on whitespace, keep the tokens that are integers, and\n\
report their sum, the numbers in order, and the addition expression.\n\n\
Tokens that are not numbers are skipped. Signs are not part of a number, so\n\
'-5' is skipped. A file with no numbers fails with NO_VALID_NUMBERS.\n\n\
Examples:\n\
  filesum sum numbers.txt\n\
  filesum --format md sum numbers.txt\n\
  filesum sum prices.txt --decimals reject\n"
    )]
    Sum {
        /// File to read (relative to ROOT unless absolute; surrounding quotes are removed).
        #[arg(value_name = "PATH")]
        path: String,

        /// What to do with tokens like 3.5 (skip/truncate/reject).
        #[arg(
            long,
            env = "FILESUM_DECIMALS",
            default_value = "skip",
            value_name = "POLICY",
            long_help = "What to do with numeric tokens that contain a decimal point.\n\n\
Supported values:\n\
- skip (default): ignore them like any other non-integer token\n\
- truncate: keep the integer part (3.5 -> 3, .5 -> 0)\n\
- reject: fail with DECIMAL_TOKEN"
        )]
        decimals: String,
    },

    /// Show a file's content verbatim.
    #[command(
        long_about = "Read the file as text and emit it unchanged.\n\n\
With --format raw the content is written to stdout byte for byte.\n\n\
Examples:\n\
  filesum view notes.txt\n\
  filesum --format raw view notes.txt\n"
    )]
    View {
        /// File to read (relative to ROOT unless absolute; surrounding quotes are removed).
        #[arg(value_name = "PATH")]
        path: String,
    },
}

impl Cli {
    /// Build the shared command settings from global flags
    pub fn context(&self) -> RunContext {
        let format: OutputFormat = self.format.parse().unwrap_or_else(|e| {
            warn!("{}; falling back to jsonl", e);
            OutputFormat::default()
        });

        RunContext {
            root: self.root.canonicalize().unwrap_or_else(|_| self.root.clone()),
            render: RenderConfig::with_pretty(format, self.pretty),
            read: FileReadConfig {
                max_file_size: Some(self.max_file_size),
                encoding_strategy: if self.lossy {
                    EncodingStrategy::Lossy
                } else {
                    EncodingStrategy::Strict
                },
            },
            names: if self.require_txt {
                NamePolicy::RequireTxt
            } else {
                NamePolicy::Any
            },
            quiet: self.quiet,
        }
    }
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<ExitCode> {
    if cli.no_color {
        colored::control::set_override(false);
    }

    let ctx = cli.context();

    let ok = match &cli.command {
        Commands::Sum { path, decimals } => {
            let policy: DecimalPolicy = decimals.parse().map_err(anyhow::Error::msg)?;
            crate::commands::sum::run_sum(&ctx, path, policy)?
        }
        Commands::View { path } => crate::commands::view::run_view(&ctx, path)?,
    };

    Ok(if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sum_defaults() {
        let cli = Cli::try_parse_from(["filesum", "sum", "numbers.txt"]).unwrap();
        assert_eq!(cli.format, "jsonl");
        assert!(!cli.lossy);
        match cli.command {
            Commands::Sum { path, decimals } => {
                assert_eq!(path, "numbers.txt");
                assert_eq!(decimals, "skip");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "filesum",
            "view",
            "a.txt",
            "--format",
            "md",
            "--lossy",
            "--require-txt",
        ])
        .unwrap();

        let ctx = cli.context();
        assert_eq!(ctx.render.format, OutputFormat::Markdown);
        assert_eq!(ctx.read.encoding_strategy, EncodingStrategy::Lossy);
        assert_eq!(ctx.names, NamePolicy::RequireTxt);
    }

    #[test]
    fn test_cli_caps_file_size() {
        let cli = Cli::try_parse_from(["filesum", "view", "a.txt", "--max-file-size", "10"])
            .unwrap();
        assert_eq!(cli.context().read.max_file_size, Some(10));
    }

    #[test]
    fn test_unknown_format_falls_back_to_jsonl() {
        let cli = Cli::try_parse_from(["filesum", "--format", "xml", "view", "a.txt"]).unwrap();
        assert_eq!(cli.context().render.format, OutputFormat::Jsonl);
    }

    #[test]
    fn test_missing_path_is_an_error() {
        assert!(Cli::try_parse_from(["filesum", "sum"]).is_err());
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
