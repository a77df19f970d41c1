use std::{
    io,
    path::{Path, PathBuf},
};

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File already had identical content and was left untouched
    Unchanged,
}

/// A rendered artifact bound to a path on disk.
///
/// Writing replaces the whole file: content goes to a sibling temp file
/// first and is then renamed over the target, so a reader never observes a
/// half-written artifact.
pub struct File {
    path: PathBuf,
    content: String,
}

impl File {
    /// Create a new file with the given path and content
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Check if the file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Write the file, creating parent directories on demand.
    pub fn write(&self) -> io::Result<WriteResult> {
        if let Ok(existing) = std::fs::read_to_string(&self.path)
            && existing == self.content
        {
            return Ok(WriteResult::Unchanged);
        }
        write_file(&self.path, &self.content)?;
        Ok(WriteResult::Written)
    }
}

fn write_file(path: &Path, content: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let tmp = temp_path(path);
    std::fs::write(&tmp, content)?;
    std::fs::rename(&tmp, path).inspect_err(|_| {
        let _ = std::fs::remove_file(&tmp);
    })
}

fn temp_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{}.tmp", name))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_write_file_creates_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.txt");

        write_file(&path, "hello").unwrap();

        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello");
    }

    #[test]
    fn test_write_file_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a").join("b").join("c").join("test.txt");

        write_file(&path, "nested").unwrap();

        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
    }

    #[test]
    fn test_write_file_leaves_no_temp_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("models.py");

        write_file(&path, "content").unwrap();

        let entries: Vec<_> = fs::read_dir(temp.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from("models.py")]);
    }

    #[test]
    fn test_file_write_overwrites_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.txt");

        fs::write(&path, "original").unwrap();

        let file = File::new(&path, "updated");
        let result = file.write().unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "updated");
    }

    #[test]
    fn test_file_write_same_content_is_unchanged() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.txt");

        let file = File::new(&path, "same");
        assert_eq!(file.write().unwrap(), WriteResult::Written);
        assert_eq!(file.write().unwrap(), WriteResult::Unchanged);
        assert_eq!(fs::read_to_string(&path).unwrap(), "same");
    }

    #[test]
    fn test_file_exists() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.txt");

        let file = File::new(&path, "content");
        assert!(!file.exists());

        fs::write(&path, "content").unwrap();
        assert!(file.exists());
    }
}
