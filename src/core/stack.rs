use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{GotoError, Result};

/// File-backed LIFO of directory paths for push/pop navigation
///
/// The file holds one path per line, oldest first. Every operation reads the
/// file fresh, so separate instances over the same path stay consistent.
#[derive(Debug, Clone)]
pub struct DirectoryStack {
    path: PathBuf,
}

impl DirectoryStack {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Push a directory onto the stack
    pub fn push(&self, dir: &str) -> Result<()> {
        let mut entries = self.read_entries()?;
        entries.push(dir.to_string());
        self.write_entries(&entries)?;

        log::debug!("Pushed {} (depth {})", dir, entries.len());
        Ok(())
    }

    /// Remove and return the most recently pushed directory
    pub fn pop(&self) -> Result<String> {
        let mut entries = self.read_entries()?;
        let top = entries.pop().ok_or(GotoError::EmptyStack)?;
        self.write_entries(&entries)?;

        log::debug!("Popped {} (depth {})", top, entries.len());
        Ok(top)
    }

    /// Most recently pushed directory, left in place
    pub fn peek(&self) -> Result<String> {
        self.read_entries()?
            .pop()
            .ok_or(GotoError::EmptyStack)
    }

    pub fn size(&self) -> Result<usize> {
        Ok(self.read_entries()?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.size()? == 0)
    }

    pub fn clear(&self) -> Result<()> {
        self.write_entries(&[])
    }

    /// All entries, bottom of the stack first
    pub fn entries(&self) -> Result<Vec<String>> {
        self.read_entries()
    }

    fn read_entries(&self) -> Result<Vec<String>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)?;
        Ok(content
            .lines()
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect())
    }

    fn write_entries(&self, entries: &[String]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut content = String::new();
        for entry in entries {
            content.push_str(entry);
            content.push('\n');
        }

        fs::write(&self.path, content)?;
        Ok(())
    }
}
