//! Error types for every component of the classification core.
//!
//! Display strings double as the user-facing messages shown by the GUI.

use std::path::PathBuf;

use thiserror::Error;

use crate::session::SessionState;
use crate::workflow::Step;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LabelError {
    #[error("Please enter both label and shortcut.")]
    EmptyField,
    #[error("Shortcut must be a single character.")]
    InvalidShortcut,
    #[error("This shortcut is already in use: {0}")]
    DuplicateShortcut(char),
    #[error("No label is bound to shortcut '{0}'.")]
    NotFound(String),
}

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("Folder does not exist: {}", .0.display())]
    DirectoryNotFound(PathBuf),
    #[error("Permission denied while reading {}", .0.display())]
    PermissionDenied(PathBuf),
    #[error("Path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
    #[error("No images found in the selected folder.")]
    NoImagesFound(PathBuf),
    #[error("Failed to read folder {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("Cannot start classification: {0}")]
    PreconditionViolated(&'static str),
    #[error("No label is bound to key '{0}'")]
    UnknownShortcut(char),
    #[error("Classification is not in progress (state: {0:?})")]
    NotInProgress(SessionState),
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to export results to {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("Failed to read results from {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("Please select a folder first.")]
    NoFolderSelected,
    #[error("Please create at least one label.")]
    NoLabels,
    #[error("Please classify all images before proceeding. ({classified} of {total} done)")]
    Incomplete { classified: usize, total: usize },
    #[error("Labels cannot be changed while classification is running.")]
    LabelsLocked,
    #[error("Not available on the {actual:?} screen (expected {expected:?})")]
    WrongStep { expected: Step, actual: Step },
    #[error(transparent)]
    Label(#[from] LabelError),
    #[error(transparent)]
    Manifest(#[from] ManifestError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Export(#[from] ExportError),
}
