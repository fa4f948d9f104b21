//! CLI argument parsing for pdfsplice.
//!
//! This module defines the command-line interface structure using `clap`.
//! It handles argument parsing, conversion into library configs, and help
//! text generation. It is also compiled by `build.rs` to render the man
//! page, so it only depends on `clap` and the library.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::str::FromStr;

use pdfsplice::config::{CompressionLevel, MergeConfig, SplitConfig, normalize_output_name};
use pdfsplice::error::Result;
use pdfsplice::split::SplitSpec;

/// Merge and split PDF files page-wise.
///
/// pdfsplice concatenates PDFs in a chosen order, or cuts one PDF into
/// parts: one per page, fixed-size chunks, or custom page ranges. The last
/// used output directory is remembered between runs.
#[derive(Parser, Debug)]
#[command(name = "pdfsplice")]
#[command(version)]
#[command(about = "Merge and split PDF files page-wise", long_about = None)]
#[command(author)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Verbose output - show per-file details and debug logs
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all non-error output
    ///
    /// Only errors and warnings will be printed.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Settings file used to remember the output directory
    ///
    /// Defaults to pdfsplice/settings.json in the platform config
    /// directory (e.g. ~/.config on Linux).
    #[arg(long, value_name = "FILE", global = true, env = "PDFSPLICE_SETTINGS")]
    pub settings: Option<PathBuf>,

    /// Compression level for written PDFs
    ///
    /// - none: No compression (preserves exact structure)
    /// - standard: Compress content streams (default)
    /// - maximum: Also drop unreferenced objects
    #[arg(
        short,
        long,
        value_name = "LEVEL",
        default_value = "standard",
        global = true,
        value_parser = ["none", "standard", "maximum"]
    )]
    pub compression: String,
}

impl GlobalArgs {
    fn compression_level(&self) -> Result<CompressionLevel> {
        CompressionLevel::from_str(&self.compression)
    }
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Merge PDF files into one, in the order given
    ///
    /// Examples:
    ///   pdfsplice merge intro.pdf body.pdf -n book
    ///   pdfsplice merge scans/ --move scans/cover.pdf=0
    Merge(MergeArgs),

    /// Split one PDF into parts
    ///
    /// Without --step or --ranges every page becomes its own file.
    ///
    /// Examples:
    ///   pdfsplice split book.pdf
    ///   pdfsplice split book.pdf --step 10
    ///   pdfsplice split book.pdf --ranges "1-2,4-6"
    Split(SplitArgs),

    /// Show page counts and first-page sizes
    Pages(PagesArgs),

    /// Show or change the remembered output directory
    SaveDir(SaveDirArgs),
}

/// Arguments of `pdfsplice merge`.
#[derive(Args, Debug)]
pub struct MergeArgs {
    /// PDF files, directories or glob patterns to merge (in order)
    ///
    /// Directories contribute their PDF files sorted by name. Files that
    /// don't end in .pdf are ignored, as are repeated paths.
    #[arg(required = true, value_name = "INPUT")]
    pub inputs: Vec<PathBuf>,

    /// Directory to write the merged file to
    ///
    /// Remembered for later runs. Defaults to the remembered directory, or
    /// ./files.
    #[arg(short = 'd', long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Name of the merged file
    ///
    /// ".pdf" is appended when missing. Defaults to merged.pdf.
    #[arg(short = 'n', long, value_name = "NAME")]
    pub name: Option<String>,

    /// Move a file to a 0-based position before merging
    ///
    /// Applied in order after all inputs are collected. May be repeated.
    ///
    /// Example:
    ///   --move appendix.pdf=0
    #[arg(long = "move", value_name = "FILE=INDEX", value_parser = parse_move)]
    pub moves: Vec<MoveArg>,

    /// Dry run - load and merge inputs but write nothing
    #[arg(long)]
    pub dry_run: bool,
}

impl MergeArgs {
    /// Build a validated merge config.
    ///
    /// # Errors
    ///
    /// Returns an error if the compression level or resulting configuration
    /// is invalid.
    pub fn to_config(
        &self,
        global: &GlobalArgs,
        inputs: Vec<PathBuf>,
        output_dir: PathBuf,
    ) -> Result<MergeConfig> {
        let mut config = MergeConfig::new(inputs, output_dir);
        config.file_name = normalize_output_name(self.name.as_deref().unwrap_or_default());
        config.compression = global.compression_level()?;
        config.dry_run = self.dry_run;
        config.verbose = global.verbose;
        config.quiet = global.quiet;

        config.validate()?;

        Ok(config)
    }
}

/// A `FILE=INDEX` reorder request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveArg {
    /// File to move.
    pub file: PathBuf,
    /// Target position, 0-based.
    pub index: usize,
}

fn parse_move(s: &str) -> std::result::Result<MoveArg, String> {
    let (file, index) = s
        .rsplit_once('=')
        .ok_or_else(|| format!("expected FILE=INDEX, got '{s}'"))?;

    if file.is_empty() {
        return Err(format!("missing file in '{s}'"));
    }

    let index = index
        .trim()
        .parse()
        .map_err(|_| format!("'{index}' is not a valid position"))?;

    Ok(MoveArg {
        file: PathBuf::from(file),
        index,
    })
}

/// Arguments of `pdfsplice split`.
#[derive(Args, Debug)]
pub struct SplitArgs {
    /// The PDF to split
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Directory to write the parts to
    ///
    /// Remembered for later runs. Defaults to the remembered directory, or
    /// ./files.
    #[arg(short = 'd', long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Cut into chunks of N pages; the last chunk may be shorter
    #[arg(long, value_name = "N", conflicts_with = "ranges")]
    pub step: Option<u32>,

    /// Comma-separated 1-based page ranges, one part each
    ///
    /// Ranges may overlap and need not be in order.
    ///
    /// Example:
    ///   --ranges "1-2,4,7-9"
    #[arg(long, value_name = "SPEC")]
    pub ranges: Option<String>,

    /// Dry run - resolve and name parts but write nothing
    #[arg(long)]
    pub dry_run: bool,
}

impl SplitArgs {
    /// The split spec selected by `--step` / `--ranges`.
    ///
    /// # Errors
    ///
    /// Returns an error if the range list cannot be parsed.
    pub fn spec(&self) -> Result<SplitSpec> {
        match (&self.step, &self.ranges) {
            (Some(step), _) => Ok(SplitSpec::FixedStep(*step)),
            (None, Some(ranges)) => SplitSpec::parse_ranges(ranges),
            (None, None) => Ok(SplitSpec::EveryPage),
        }
    }

    /// Build a validated split config.
    ///
    /// # Errors
    ///
    /// Returns an error if the ranges, compression level or step are
    /// invalid.
    pub fn to_config(
        &self,
        global: &GlobalArgs,
        input: PathBuf,
        output_dir: PathBuf,
    ) -> Result<SplitConfig> {
        let mut config = SplitConfig::new(input, output_dir, self.spec()?);
        config.compression = global.compression_level()?;
        config.dry_run = self.dry_run;
        config.verbose = global.verbose;
        config.quiet = global.quiet;

        config.validate()?;

        Ok(config)
    }
}

/// Arguments of `pdfsplice pages`.
#[derive(Args, Debug)]
pub struct PagesArgs {
    /// PDF files, directories or glob patterns
    #[arg(required = true, value_name = "INPUT")]
    pub inputs: Vec<PathBuf>,

    /// Print the file list as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments of `pdfsplice save-dir`.
#[derive(Args, Debug)]
pub struct SaveDirArgs {
    /// New directory to remember; prints the current one when omitted
    #[arg(value_name = "DIR")]
    pub dir: Option<PathBuf>,
}
