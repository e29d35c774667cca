//! Screen-to-screen navigation around a [`ClassificationSession`].
//!
//! The GUI renders whatever [`Step`] the workflow is on and forwards user
//! actions here; every gate (folder chosen, images found, labels defined,
//! all images classified) is enforced by this type rather than by widgets.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::WorkflowError;
use crate::export::ResultExporter;
use crate::labels::{Label, LabelSet};
use crate::manifest::{ImageManifest, ScanOptions};
use crate::session::{ClassificationRecord, ClassificationSession, SessionState};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Step {
    #[default]
    Folder,
    Labels,
    Classify,
    Export,
}

#[derive(Debug, Default)]
pub struct Workflow {
    step: Step,
    scan: ScanOptions,
    folder: Option<PathBuf>,
    manifest: Option<Arc<ImageManifest>>,
    labels: LabelSet,
    session: ClassificationSession,
    exporter: ResultExporter,
}

impl Workflow {
    pub fn new(scan: ScanOptions) -> Self {
        Self {
            scan,
            ..Self::default()
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn folder(&self) -> Option<&Path> {
        self.folder.as_deref()
    }

    pub fn manifest(&self) -> Option<&ImageManifest> {
        self.manifest.as_deref()
    }

    pub fn labels(&self) -> &LabelSet {
        &self.labels
    }

    pub fn session(&self) -> &ClassificationSession {
        &self.session
    }

    pub fn choose_folder(&mut self, path: impl Into<PathBuf>) -> Result<(), WorkflowError> {
        self.expect_step(Step::Folder)?;
        self.folder = Some(path.into());
        self.manifest = None;
        Ok(())
    }

    /// Scan the chosen folder and move on to label editing.
    pub fn go_to_labels(&mut self) -> Result<usize, WorkflowError> {
        self.expect_step(Step::Folder)?;
        let folder = self.folder.as_ref().ok_or(WorkflowError::NoFolderSelected)?;
        let manifest = ImageManifest::scan_with(folder, self.scan)?;
        let count = manifest.len();
        self.manifest = Some(Arc::new(manifest));
        self.step = Step::Labels;
        Ok(count)
    }

    pub fn add_label(&mut self, shortcut: &str, text: &str) -> Result<char, WorkflowError> {
        self.ensure_labels_editable()?;
        Ok(self.labels.add(shortcut, text)?)
    }

    pub fn remove_label(&mut self, shortcut: &str) -> Result<Label, WorkflowError> {
        self.ensure_labels_editable()?;
        Ok(self.labels.remove(shortcut)?)
    }

    /// Start a fresh classification pass with a snapshot of the current labels.
    pub fn go_to_classify(&mut self) -> Result<(), WorkflowError> {
        self.expect_step(Step::Labels)?;
        if self.labels.is_empty() {
            return Err(WorkflowError::NoLabels);
        }
        let manifest = self
            .manifest
            .clone()
            .ok_or(WorkflowError::NoFolderSelected)?;
        self.session.start(manifest, self.labels.clone())?;
        self.step = Step::Classify;
        Ok(())
    }

    pub fn classify(&mut self, key: char) -> Result<&ClassificationRecord, WorkflowError> {
        self.expect_step(Step::Classify)?;
        Ok(self.session.classify(key)?)
    }

    pub fn go_to_export(&mut self) -> Result<(), WorkflowError> {
        self.expect_step(Step::Classify)?;
        if !self.session.is_exportable() {
            let progress = self.session.progress();
            return Err(WorkflowError::Incomplete {
                classified: self.session.records().len(),
                total: progress.total,
            });
        }
        self.step = Step::Export;
        Ok(())
    }

    /// Step back one screen. Leaving the classification screen discards the session.
    pub fn back(&mut self) {
        self.step = match self.step {
            Step::Folder => Step::Folder,
            Step::Labels => Step::Folder,
            Step::Classify => {
                self.session.reset();
                Step::Labels
            }
            Step::Export => Step::Classify,
        };
    }

    pub fn export(&self, destination: impl AsRef<Path>) -> Result<usize, WorkflowError> {
        self.expect_step(Step::Export)?;
        self.exporter.export(self.session.records(), destination)?;
        Ok(self.session.records().len())
    }

    fn expect_step(&self, expected: Step) -> Result<(), WorkflowError> {
        if self.step != expected {
            return Err(WorkflowError::WrongStep {
                expected,
                actual: self.step,
            });
        }
        Ok(())
    }

    fn ensure_labels_editable(&self) -> Result<(), WorkflowError> {
        if self.session.state() != SessionState::Idle {
            return Err(WorkflowError::LabelsLocked);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{LabelError, SessionError};
    use anyhow::Result;
    use std::fs::File;
    use tempfile::{TempDir, tempdir};

    fn folder_with(names: &[&str]) -> Result<TempDir> {
        let dir = tempdir()?;
        for name in names {
            File::create(dir.path().join(name))?;
        }
        Ok(dir)
    }

    #[test]
    fn gates_block_progress_until_inputs_exist() -> Result<()> {
        let mut wf = Workflow::default();
        assert!(matches!(wf.go_to_labels(), Err(WorkflowError::NoFolderSelected)));

        let empty = folder_with(&["notes.txt"])?;
        wf.choose_folder(empty.path())?;
        assert!(matches!(
            wf.go_to_labels(),
            Err(WorkflowError::Manifest(_))
        ));
        assert_eq!(wf.step(), Step::Folder);

        let dir = folder_with(&["a.jpg"])?;
        wf.choose_folder(dir.path())?;
        assert_eq!(wf.go_to_labels()?, 1);
        assert!(matches!(wf.go_to_classify(), Err(WorkflowError::NoLabels)));

        wf.add_label("a", "cat")?;
        wf.go_to_classify()?;
        assert!(matches!(
            wf.go_to_export(),
            Err(WorkflowError::Incomplete {
                classified: 0,
                total: 1
            })
        ));
        Ok(())
    }

    #[test]
    fn labels_are_locked_during_classification() -> Result<()> {
        let dir = folder_with(&["a.jpg", "b.png"])?;
        let mut wf = Workflow::default();
        wf.choose_folder(dir.path())?;
        wf.go_to_labels()?;
        wf.add_label("a", "cat")?;
        wf.go_to_classify()?;

        assert!(matches!(
            wf.add_label("b", "dog"),
            Err(WorkflowError::LabelsLocked)
        ));
        assert!(matches!(wf.remove_label("a"), Err(WorkflowError::LabelsLocked)));

        wf.back();
        assert_eq!(wf.step(), Step::Labels);
        wf.add_label("b", "dog")?;
        assert!(matches!(
            wf.add_label("B", "bird"),
            Err(WorkflowError::Label(LabelError::DuplicateShortcut('B')))
        ));
        Ok(())
    }

    #[test]
    fn unknown_key_surfaces_as_session_error() -> Result<()> {
        let dir = folder_with(&["a.jpg"])?;
        let mut wf = Workflow::default();
        wf.choose_folder(dir.path())?;
        wf.go_to_labels()?;
        wf.add_label("a", "cat")?;
        wf.go_to_classify()?;
        assert!(matches!(
            wf.classify('q'),
            Err(WorkflowError::Session(SessionError::UnknownShortcut('q')))
        ));
        assert_eq!(wf.session().progress().current, 0);
        Ok(())
    }

    #[test]
    fn navigation_from_wrong_step_is_rejected() {
        let mut wf = Workflow::default();
        assert!(matches!(
            wf.go_to_classify(),
            Err(WorkflowError::WrongStep {
                expected: Step::Labels,
                actual: Step::Folder
            })
        ));
        assert!(matches!(wf.classify('a'), Err(WorkflowError::WrongStep { .. })));
        assert!(matches!(wf.export("x.csv"), Err(WorkflowError::WrongStep { .. })));
        wf.back();
        assert_eq!(wf.step(), Step::Folder);
    }
}
