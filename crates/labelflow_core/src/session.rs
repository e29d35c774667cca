//! Sequential classification state machine.
//!
//! A session walks the manifest from index 0 to its length. Each recognised
//! key press appends exactly one [`ClassificationRecord`] and advances the
//! index by one, so once the session is [`SessionState::Complete`] the number
//! of records always equals the manifest length. Unbound keys change nothing.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::SessionError;
use crate::labels::LabelSet;
use crate::manifest::ImageManifest;

/// One image paired with the label it was given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationRecord {
    pub image_path: PathBuf,
    pub label: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Idle,
    InProgress,
    Complete,
}

/// Position within the manifest, for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub current: usize,
    pub total: usize,
}

impl Progress {
    /// Fraction done in `[0, 1]`.
    pub fn fraction(&self) -> f32 {
        if self.total == 0 {
            return 0.0;
        }
        self.current as f32 / self.total as f32
    }

    /// "Image N of TOTAL" with N clamped to TOTAL once finished.
    pub fn caption(&self) -> String {
        let shown = (self.current + 1).min(self.total);
        format!("Image {shown} of {}", self.total)
    }
}

#[derive(Debug, Default)]
pub struct ClassificationSession {
    manifest: Option<Arc<ImageManifest>>,
    labels: LabelSet,
    index: usize,
    records: Vec<ClassificationRecord>,
    state: SessionState,
}

impl ClassificationSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a fresh pass over `manifest` using a snapshot of `labels`.
    pub fn start(
        &mut self,
        manifest: Arc<ImageManifest>,
        labels: LabelSet,
    ) -> Result<(), SessionError> {
        if manifest.is_empty() {
            return Err(SessionError::PreconditionViolated("no images to classify"));
        }
        if labels.is_empty() {
            return Err(SessionError::PreconditionViolated("no labels defined"));
        }
        tracing::info!(
            "classification started: {} images, {} labels",
            manifest.len(),
            labels.len()
        );
        self.index = 0;
        self.records.clear();
        self.state = SessionState::InProgress;
        self.manifest = Some(manifest);
        self.labels = labels;
        Ok(())
    }

    /// Drop all progress and return to `Idle`.
    pub fn reset(&mut self) {
        if !self.records.is_empty() {
            tracing::info!("discarding {} classifications", self.records.len());
        }
        *self = Self::default();
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Image awaiting a label, or `None` when not in progress.
    pub fn current_image(&self) -> Option<&Path> {
        if self.state != SessionState::InProgress {
            return None;
        }
        self.manifest.as_ref()?.get(self.index)
    }

    /// Label the current image with the label bound to `key`.
    ///
    /// An unbound key returns [`SessionError::UnknownShortcut`] and leaves the
    /// session untouched.
    pub fn classify(&mut self, key: char) -> Result<&ClassificationRecord, SessionError> {
        if self.state != SessionState::InProgress {
            return Err(SessionError::NotInProgress(self.state));
        }
        let label = self
            .labels
            .get(key)
            .ok_or(SessionError::UnknownShortcut(key))?
            .to_string();
        let (image_path, total) = match self.manifest.as_ref() {
            Some(m) => match m.get(self.index) {
                Some(p) => (p.to_path_buf(), m.len()),
                None => return Err(SessionError::NotInProgress(self.state)),
            },
            None => return Err(SessionError::NotInProgress(self.state)),
        };

        self.records.push(ClassificationRecord { image_path, label });
        self.index += 1;
        if self.index == total {
            self.state = SessionState::Complete;
            tracing::info!("all {total} images classified");
        }
        self.records
            .last()
            .ok_or(SessionError::NotInProgress(self.state))
    }

    pub fn progress(&self) -> Progress {
        Progress {
            current: self.index,
            total: self.manifest.as_ref().map_or(0, |m| m.len()),
        }
    }

    pub fn records(&self) -> &[ClassificationRecord] {
        &self.records
    }

    /// Labels frozen for this pass.
    pub fn labels(&self) -> &LabelSet {
        &self.labels
    }

    /// True once every image has exactly one record.
    pub fn is_exportable(&self) -> bool {
        self.state == SessionState::Complete
            && self.manifest.as_ref().map(|m| m.len()) == Some(self.records.len())
    }
}
