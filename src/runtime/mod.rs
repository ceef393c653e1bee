use std::path::Path;

use tracing::{debug, warn};

use crate::cli::Cli;
use crate::config::Settings;
use crate::error::AppError;
use crate::gaps::{self, DetectError};
use crate::library;
use crate::report;

mod logging;
mod settings;


pub fn run(cli: Cli) -> Result<(), AppError> {
    let settings = settings::load_settings(&cli)?;
    logging::init(&settings.logging);

    if cli.print_config {
        let rendered = settings
            .to_toml()
            .map_err(|e| AppError::ConfigUnreadable(e.to_string()))?;
        print!("{rendered}");
        return Ok(());
    }

    let root = settings
        .scan
        .search_path
        .clone()
        .ok_or(AppError::NoDirectory)?;

    scan_and_report(&root, &settings).map(|_| ())
}

/// One batch run over `root`: collect, detect, print and write the report.
///
/// Returns the rendered report lines. Nothing is written unless at least one
/// diagnostic was found.
pub fn scan_and_report(root: &Path, settings: &Settings) -> Result<Vec<String>, AppError> {
    if !root.is_dir() {
        return Err(AppError::InvalidDirectory(root.to_path_buf()));
    }

    let entries = library::count_entries(root, &settings.scan).ok();
    report::print_greeting(root, &settings.report.out_file_name, entries);

    debug!(root = %root.display(), "about to scan");
    let files = library::collect(root, &settings.scan)
        .map_err(|e| AppError::from_scan(root.to_path_buf(), e))?;

    let diagnostics = match gaps::detect_gaps(&files, &settings.scan.detect_options()) {
        Ok(d) => d,
        Err(DetectError::EmptyInput) => return Err(AppError::EmptyScan),
    };
    if diagnostics.is_empty() {
        return Err(AppError::NoGapsFound);
    }

    let lines = report::render(&diagnostics, &settings.scan.delimiter);
    report::print_lines(&lines);

    let out = &settings.report.out_file_name;
    report::write_file(out, root, &lines, settings.report.append).map_err(|source| {
        warn!(path = %out.display(), "could not write report: {source}");
        AppError::ReportWrite {
            path: out.clone(),
            source,
        }
    })?;

    Ok(lines)
}
