//! Output stores for generated day documents

use crate::error::{Result, SplitError};
use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

/// Abstract destination for rendered day documents.
///
/// Paths passed in are relative to the store's output root.
pub trait DayStore {
    /// Full location a relative path resolves to (used for messages)
    fn location(&self, relative: &Path) -> PathBuf;

    /// Create a directory and its parents; existing directories are fine
    fn ensure_dir(&self, relative: &Path) -> Result<()>;

    /// Write content, replacing anything already at the path
    fn write(&self, relative: &Path, content: &str) -> Result<()>;
}

/// File system implementation of DayStore
#[derive(Debug, Clone)]
pub struct FileSystemStore {
    pub root: PathBuf,
}

impl FileSystemStore {
    /// Create a new store writing under the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemStore { root }
    }
}

impl DayStore for FileSystemStore {
    fn location(&self, relative: &Path) -> PathBuf {
        self.root.join(relative)
    }

    fn ensure_dir(&self, relative: &Path) -> Result<()> {
        let path = self.location(relative);
        fs::create_dir_all(&path).map_err(|source| SplitError::Write { path, source })
    }

    fn write(&self, relative: &Path, content: &str) -> Result<()> {
        let path = self.location(relative);
        fs::write(&path, content).map_err(|source| SplitError::Write { path, source })
    }
}

/// In-memory store, keyed by relative path
#[derive(Debug, Default)]
pub struct MemoryStore {
    files: RefCell<BTreeMap<PathBuf, String>>,
    dirs: RefCell<BTreeSet<PathBuf>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Content stored at a relative path
    pub fn get(&self, relative: &Path) -> Option<String> {
        self.files.borrow().get(relative).cloned()
    }

    /// All stored files, ordered by path
    pub fn into_files(self) -> BTreeMap<PathBuf, String> {
        self.files.into_inner()
    }

    pub fn len(&self) -> usize {
        self.files.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.borrow().is_empty()
    }
}

impl DayStore for MemoryStore {
    fn location(&self, relative: &Path) -> PathBuf {
        relative.to_path_buf()
    }

    fn ensure_dir(&self, relative: &Path) -> Result<()> {
        self.dirs.borrow_mut().insert(relative.to_path_buf());
        Ok(())
    }

    fn write(&self, relative: &Path, content: &str) -> Result<()> {
        if let Some(parent) = relative.parent() {
            if !parent.as_os_str().is_empty() && !self.dirs.borrow().contains(parent) {
                return Err(SplitError::Write {
                    path: relative.to_path_buf(),
                    source: std::io::Error::new(
                        std::io::ErrorKind::NotFound,
                        "parent directory was not created",
                    ),
                });
            }
        }

        self.files
            .borrow_mut()
            .insert(relative.to_path_buf(), content.to_string());
        Ok(())
    }
}
