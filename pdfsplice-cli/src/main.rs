//! pdfsplice - Merge and split PDF files page-wise.
//!
//! Command line front-end: collects files into a session the way the
//! desktop window did, then merges or splits them.

mod cli;
mod logging;

use clap::Parser;
use std::path::{Path, PathBuf};
use std::process;
use tracing::debug;

use crate::cli::{Cli, Command, GlobalArgs, MergeArgs, PagesArgs, SaveDirArgs, SplitArgs};
use pdfsplice::error::SpliceError;
use pdfsplice::merge::merge_files;
use pdfsplice::output::{
    OutputFormatter, display_file_list, display_merge_summary, display_split_summary,
};
use pdfsplice::session::{Mode, Session};
use pdfsplice::settings::SettingsStore;
use pdfsplice::split::split_pdf;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    logging::init(cli.global.verbose);

    // Run the application and handle errors
    if let Err(err) = run(cli).await {
        eprintln!("Error: {err}");
        process::exit(err.exit_code());
    }
}

/// Main application logic.
async fn run(cli: Cli) -> Result<(), SpliceError> {
    let formatter = OutputFormatter::new(cli.global.quiet, cli.global.verbose);
    let mut settings = SettingsStore::load(cli.global.settings.as_deref()).await?;
    debug!(path = %settings.path().display(), "using settings file");

    let result = match &cli.command {
        Command::Merge(args) => run_merge(&cli.global, args, &mut settings, &formatter).await,
        Command::Split(args) => run_split(&cli.global, args, &mut settings, &formatter).await,
        Command::Pages(args) => run_pages(args, &formatter).await,
        Command::SaveDir(args) => run_save_dir(args, &mut settings, &formatter).await,
    };

    // Nothing selected is not a failure.
    match result {
        Err(err) if err.is_empty_selection() => {
            formatter.warning(&err.to_string());
            Ok(())
        }
        other => other,
    }
}

async fn run_merge(
    global: &GlobalArgs,
    args: &MergeArgs,
    settings: &mut SettingsStore,
    formatter: &OutputFormatter,
) -> Result<(), SpliceError> {
    let mut session = Session::new(Mode::Merge);
    session.add_files(&args.inputs).await?;

    for request in &args.moves {
        if session.reorder(&request.file, request.index).is_none() {
            formatter.warning(&format!(
                "Cannot move {}: not among the selected files",
                request.file.display()
            ));
        }
    }

    if session.is_empty() {
        return Err(SpliceError::NoFilesToMerge);
    }

    let output_dir = resolve_output_dir(args.output_dir.as_deref(), settings);
    let config = args.to_config(global, session.paths(), output_dir)?;

    formatter.section(&format!("{} v{}", pdfsplice::NAME, pdfsplice::VERSION));
    formatter.info(&format!("Merging {} file(s):", session.files().len()));
    display_file_list(formatter, session.files());

    let outcome = merge_files(&config).await?;
    display_merge_summary(formatter, &outcome);

    remember_output_dir(args.output_dir.as_deref(), config.dry_run, settings).await
}

async fn run_split(
    global: &GlobalArgs,
    args: &SplitArgs,
    settings: &mut SettingsStore,
    formatter: &OutputFormatter,
) -> Result<(), SpliceError> {
    let mut session = Session::new(Mode::Split);
    session.add_files([&args.input]).await?;

    let Some(input) = session.split_target().map(Path::to_path_buf) else {
        return Err(SpliceError::NoFileToSplit);
    };

    let output_dir = resolve_output_dir(args.output_dir.as_deref(), settings);
    let config = args.to_config(global, input, output_dir)?;

    formatter.section(&format!("{} v{}", pdfsplice::NAME, pdfsplice::VERSION));
    display_file_list(formatter, session.files());
    formatter.info(&format!("Writing parts to {}", config.output_dir.display()));

    let result = split_pdf(&config).await?;
    display_split_summary(formatter, &result, config.dry_run);

    remember_output_dir(args.output_dir.as_deref(), config.dry_run, settings).await
}

async fn run_pages(args: &PagesArgs, formatter: &OutputFormatter) -> Result<(), SpliceError> {
    let mut session = Session::new(Mode::Merge);
    session.add_files(&args.inputs).await?;

    if args.json {
        let entries: Vec<_> = session.files().iter().collect();
        let json = serde_json::to_string_pretty(&entries)
            .map_err(|e| SpliceError::other(format!("Failed to encode JSON: {e}")))?;
        println!("{json}");
        return Ok(());
    }

    if session.is_empty() {
        formatter.warning("No PDF files found");
        return Ok(());
    }

    display_file_list(formatter, session.files());
    formatter.info(&format!(
        "{} file(s), {} pages",
        session.files().len(),
        session.files().total_pages()
    ));

    Ok(())
}

async fn run_save_dir(
    args: &SaveDirArgs,
    settings: &mut SettingsStore,
    formatter: &OutputFormatter,
) -> Result<(), SpliceError> {
    match &args.dir {
        Some(dir) => {
            settings.set_save_dir(dir)?;
            settings.save().await?;
            formatter.success(&format!("Output directory set to {}", dir.display()));
        }
        None => println!("{}", settings.save_dir().display()),
    }

    Ok(())
}

fn resolve_output_dir(explicit: Option<&Path>, settings: &SettingsStore) -> PathBuf {
    explicit.map_or_else(|| settings.save_dir(), Path::to_path_buf)
}

/// Persist an explicitly chosen output directory after a real run.
async fn remember_output_dir(
    explicit: Option<&Path>,
    dry_run: bool,
    settings: &mut SettingsStore,
) -> Result<(), SpliceError> {
    let Some(dir) = explicit else {
        return Ok(());
    };
    if dry_run {
        return Ok(());
    }

    settings.set_save_dir(dir)?;
    settings.save().await
}
