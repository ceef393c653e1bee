use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::config::LoadError;
use crate::library::ScanError;

/// Conditions that end a run early, each with its own exit code.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Please enter a directory to search.")]
    NoDirectory,
    #[error("{} is not a directory.", .0.display())]
    InvalidDirectory(PathBuf),
    #[error("Configuration file \"{}\" does not exist!", .0.display())]
    ConfigMissing(PathBuf),
    #[error("Failed to read configuration: {0}")]
    ConfigUnreadable(String),
    #[error("No files were read in!")]
    EmptyScan,
    #[error("No files are missing!")]
    NoGapsFound,
    #[error("Failed while scanning {}: {source}", .path.display())]
    TraversalFailure {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
    #[error("Failed to write report {}: {source}", .path.display())]
    ReportWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl AppError {
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::NoDirectory => 1,
            AppError::InvalidDirectory(_) => 2,
            AppError::ConfigMissing(_) => 3,
            AppError::ConfigUnreadable(_) => 4,
            AppError::EmptyScan => 5,
            AppError::NoGapsFound => 6,
            AppError::TraversalFailure { .. } => 7,
            AppError::ReportWrite { .. } => 8,
        }
    }

    pub(crate) fn from_scan(root: PathBuf, err: ScanError) -> Self {
        match err {
            ScanError::NotADirectory(p) => AppError::InvalidDirectory(p),
            ScanError::Walk(source) => AppError::TraversalFailure { path: root, source },
        }
    }
}

impl From<LoadError> for AppError {
    fn from(err: LoadError) -> Self {
        match err {
            LoadError::Missing(p) => AppError::ConfigMissing(p),
            LoadError::Unreadable(e) => AppError::ConfigUnreadable(e.to_string()),
        }
    }
}
