//! File access primitives used by the source readers.
//!
//! Readers never touch `std::fs` directly; they go through [`FileStore`] so
//! tests can run the whole pipeline against an in-memory store.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Existence check and whole-file text read.
pub trait FileStore: Send + Sync {
    fn exists(&self, path: &Path) -> bool;

    /// Fails with an I/O error when the file is missing or unreadable.
    fn read_text(&self, path: &Path) -> io::Result<String>;
}

/// [`FileStore`] backed by the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFiles;

impl FileStore for LocalFiles {
    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read_text(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }
}

/// In-memory [`FileStore`] for tests and local development.
///
/// Every successful or failed `read_text` call is recorded so callers can
/// check which files a request actually read.
#[derive(Clone, Default)]
pub struct MemoryFiles {
    data: Arc<RwLock<MemoryData>>,
}

#[derive(Default)]
struct MemoryData {
    files: HashMap<PathBuf, String>,
    reads: Vec<PathBuf>,
}

impl MemoryFiles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(self, path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        self.insert(path, contents);
        self
    }

    pub fn insert(&self, path: impl Into<PathBuf>, contents: impl Into<String>) {
        self.data.write().files.insert(path.into(), contents.into());
    }

    pub fn remove(&self, path: &Path) {
        self.data.write().files.remove(path);
    }

    /// Paths passed to `read_text`, in call order.
    pub fn reads(&self) -> Vec<PathBuf> {
        self.data.read().reads.clone()
    }

    pub fn was_read(&self, path: &Path) -> bool {
        self.data.read().reads.iter().any(|p| p == path)
    }
}

impl FileStore for MemoryFiles {
    fn exists(&self, path: &Path) -> bool {
        self.data.read().files.contains_key(path)
    }

    fn read_text(&self, path: &Path) -> io::Result<String> {
        let mut data = self.data.write();
        data.reads.push(path.to_path_buf());
        data.files.get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} not found", path.display()),
            )
        })
    }
}
