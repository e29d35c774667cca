//! Core of Label Flow: label bindings, image manifests, the sequential
//! classification session and CSV export, independent of any GUI.

pub mod config;
pub mod error;
pub mod export;
pub mod labels;
pub mod manifest;
pub mod session;
pub mod workflow;

pub use config::{AppConfig, CONFIG_FILE_NAME};
pub use error::{
    ConfigError, ExportError, LabelError, ManifestError, SessionError, WorkflowError,
};
pub use export::ResultExporter;
pub use labels::{Label, LabelSet};
pub use manifest::{IMAGE_EXTENSIONS, ImageManifest, ScanOptions};
pub use session::{ClassificationRecord, ClassificationSession, Progress, SessionState};
pub use workflow::{Step, Workflow};
