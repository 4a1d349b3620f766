use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Writes portraits under `<root>/<dynasty>/<name>.jpg`.
pub struct PortraitStore {
    root: PathBuf,
}

impl PortraitStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Write the portrait bytes, creating the dynasty directory on demand.
    ///
    /// An existing file at the target path is overwritten unconditionally:
    /// two rulers whose names normalize identically within one dynasty are
    /// last-write-wins. The `.jpg` extension is applied regardless of the
    /// actual payload format.
    pub fn write(&self, dynasty: &str, name: &str, bytes: &[u8]) -> Result<PathBuf> {
        let dir = self.root.join(dynasty);
        fs::create_dir_all(&dir)?;

        let path = dir.join(format!("{}.jpg", name));
        fs::write(&path, bytes)?;

        Ok(path)
    }
}
