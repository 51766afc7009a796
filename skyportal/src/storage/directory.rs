// skyportal/src/storage/directory.rs

use std::fs;
use std::io::Write;
use std::path::{Component, Path, PathBuf};

use tempfile::NamedTempFile;

use crate::storage::traits::ImageStore;
use crate::{Error, Result};

/// Stores images as files in one flat directory.
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    root: PathBuf,
}

impl DirectoryStore {
    /// Open (and create if missing) an image directory.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// Directory holding the images.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Map a name to a path inside the root. Only a single plain file name
    /// is accepted: no separators, no `..`, nothing absolute.
    fn path_for(&self, name: &str) -> Result<PathBuf> {
        let mut components = Path::new(name).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(file)), None) if !name.contains(['/', '\\']) => {
                Ok(self.root.join(file))
            }
            _ => Err(Error::InvalidName(name.to_string())),
        }
    }
}

impl ImageStore for DirectoryStore {
    fn load(&self, name: &str) -> Result<Vec<u8>> {
        let path = self.path_for(name)?;
        Ok(fs::read(path)?)
    }

    fn save(&self, name: &str, bytes: &[u8]) -> Result<()> {
        let path = self.path_for(name)?;
        // Each save gets its own short-named temp file in the root, then
        // replaces the target in one rename.
        let mut tmp = NamedTempFile::new_in(&self.root)?;
        tmp.write_all(bytes)?;
        tmp.persist(&path).map_err(|e| e.error)?;
        log::info!("saved image to '{}'", path.display());
        Ok(())
    }

    fn list(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                if crate::slot::is_valid_extension(name) {
                    names.push(name.to_string());
                }
            }
        }
        names.sort();
        Ok(names)
    }
}
