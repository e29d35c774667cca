use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use walkdir::WalkDir;

use crate::error::ManifestError;

/// Recognised image extensions, compared case-insensitively.
pub const IMAGE_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "bmp", "gif", "tiff"];

/// Options controlling how folder scanning behaves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanOptions {
    /// When true, scan subdirectories recursively.
    #[serde(default)]
    pub recursive: bool,
}

/// Ordered, immutable list of image paths found in one folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageManifest {
    root: PathBuf,
    paths: Vec<PathBuf>,
}

impl ImageManifest {
    /// Scan a folder (non-recursive) for images.
    pub fn scan(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
        Self::scan_with(path, ScanOptions::default())
    }

    /// Scan a folder with options. Entries keep directory-listing order.
    pub fn scan_with(path: impl AsRef<Path>, opts: ScanOptions) -> Result<Self, ManifestError> {
        let root = path.as_ref();
        let meta = std::fs::metadata(root).map_err(|e| map_io(root, e))?;
        if !meta.is_dir() {
            return Err(ManifestError::NotADirectory(root.to_path_buf()));
        }
        std::fs::read_dir(root).map_err(|e| map_io(root, e))?;
        let root = std::path::absolute(root).map_err(|e| map_io(root, e))?;

        let walker = if opts.recursive {
            WalkDir::new(&root)
        } else {
            WalkDir::new(&root).max_depth(1)
        };

        let mut paths = Vec::new();
        for entry in walker {
            let entry = match entry {
                Ok(e) => e,
                // The root itself failing to list is fatal; deeper entries are skipped.
                Err(e) if e.depth() == 0 => {
                    let path = e.path().unwrap_or(&root).to_path_buf();
                    return Err(match e.into_io_error() {
                        Some(io_err) => map_io(&path, io_err),
                        None => ManifestError::Io {
                            path,
                            source: io::Error::other("filesystem loop"),
                        },
                    });
                }
                Err(e) => {
                    tracing::warn!("walkdir error: {}", e);
                    continue;
                }
            };
            // `Path::is_file` follows symlinks; the entry's own file type does not.
            if entry.path().is_file() && is_supported_image(entry.path()) {
                paths.push(entry.into_path());
            }
        }

        if paths.is_empty() {
            return Err(ManifestError::NoImagesFound(root));
        }
        tracing::info!("found {} images in {}", paths.len(), root.display());
        Ok(Self { root, paths })
    }

    /// Folder the manifest was built from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    pub fn get(&self, index: usize) -> Option<&Path> {
        self.paths.get(index).map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

#[cfg(test)]
impl ImageManifest {
    pub(crate) fn from_paths(paths: Vec<PathBuf>) -> Self {
        Self {
            root: PathBuf::from("."),
            paths,
        }
    }
}

fn map_io(path: &Path, err: io::Error) -> ManifestError {
    match err.kind() {
        io::ErrorKind::NotFound => ManifestError::DirectoryNotFound(path.to_path_buf()),
        io::ErrorKind::PermissionDenied => ManifestError::PermissionDenied(path.to_path_buf()),
        _ => ManifestError::Io {
            path: path.to_path_buf(),
            source: err,
        },
    }
}

/// Suffix match on the lowercased file name, so a bare `.jpg` counts too.
fn is_supported_image(path: &Path) -> bool {
    match path.file_name().and_then(|s| s.to_str()) {
        Some(name) => {
            let name = name.to_ascii_lowercase();
            IMAGE_EXTENSIONS.iter().any(|ext| {
                name.strip_suffix(ext)
                    .is_some_and(|stem| stem.ends_with('.'))
            })
        }
        None => false,
    }
}
