use std::path::{Path, PathBuf};

use super::Manifest;
use crate::Result;

/// A modelsmith.toml file with both raw content and parsed manifest.
pub struct ManifestFile {
    path: PathBuf,
    content: String,
    manifest: Manifest,
}

impl ManifestFile {
    /// Open and parse a modelsmith.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(crate::Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let manifest = Manifest::from_str_with_filename(&content, &filename)?;

        Ok(Self {
            path,
            content,
            manifest,
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed manifest.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Resolve the configured output directory against the manifest's location.
    pub fn output_dir(&self) -> PathBuf {
        let dir = &self.manifest.output.dir;
        if dir.is_absolute() {
            return dir.clone();
        }
        match self.path.parent() {
            Some(parent) => parent.join(dir),
            None => dir.clone(),
        }
    }
}
