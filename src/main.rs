/*!
 * Command-line interface for srcdump
 */

use std::io::{self, BufRead, IsTerminal};
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use dialoguer::Input;
use indicatif::{ProgressBar, ProgressStyle};

use srcdump::config::{Args, Config};
use srcdump::report::{ReportFormat, Reporter};
use srcdump::scanner::Scanner;
use srcdump::{Result, SrcDumpError};

fn main() -> ExitCode {
    // Parse command line arguments
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.log_level.into())
        .parse_default_env()
        .init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("\nError: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let directory_path = match args.directory_path {
        Some(path) => path,
        None => prompt_directory()?,
    };

    // Create and validate configuration
    let config = Config::new(directory_path);
    config.validate()?;

    let progress = if args.no_progress {
        ProgressBar::hidden()
    } else {
        let progress = ProgressBar::new_spinner();
        progress.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {prefix:.bold.cyan} {pos} files {wide_msg:.dim.white}")
                .map_err(|e| SrcDumpError::Unexpected(e.to_string()))?,
        );
        progress.enable_steady_tick(Duration::from_millis(100));
        progress
    };
    progress.set_prefix("📊 Scanning");
    progress.set_message(format!(
        "📂 Scanning directory: {}",
        config.target_dir.display()
    ));

    let mut scanner = Scanner::new(config, Arc::new(progress.clone()));
    let result = scanner.run();

    // Clear the progress bar
    progress.finish_and_clear();

    let outcome = result?;
    log::info!(
        "Processed {} files into {}",
        outcome.files_processed,
        outcome.output_file.display()
    );

    let reporter = Reporter::new(ReportFormat::ConsoleTable);
    reporter.print_report(&outcome);

    Ok(())
}

/// Ask for the directory to scan.
///
/// Prompts interactively on a terminal; a piped stdin (`echo dir | srcdump`)
/// is read as a single line instead.
fn prompt_directory() -> Result<String> {
    if !io::stdin().is_terminal() || !io::stderr().is_terminal() {
        return read_directory_line(io::stdin().lock());
    }

    Input::new()
        .with_prompt("Directory to scan (e.g. . or ~/projects/my-app)")
        .default(".".to_string())
        .validate_with(|input: &String| -> std::result::Result<(), String> {
            if Path::new(input).is_dir() {
                Ok(())
            } else {
                Err(format!("'{}' is not a valid directory", input))
            }
        })
        .interact_text()
        .map_err(|e| SrcDumpError::Unexpected(format!("failed to read directory path: {}", e)))
}

/// First line of `reader`, trimmed; validation happens in `Config::validate`
fn read_directory_line<R: BufRead>(mut reader: R) -> Result<String> {
    let mut line = String::new();
    reader.read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
