// Bulk import/export types for the alias store

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::alias::AliasRecord;
use crate::error::GotoError;

/// Serialized document shape shared by the store file and backups
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct StoreFile {
    #[serde(default)]
    pub aliases: Vec<AliasRecord>,
}

/// How an imported alias is treated when its name is already taken
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImportStrategy {
    /// Keep the existing alias untouched
    #[default]
    Skip,
    /// Replace the existing alias with the imported one
    Overwrite,
    /// Insert the imported alias under `name_2`, `name_3`, ...
    Rename,
}

impl FromStr for ImportStrategy {
    type Err = GotoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "skip" => Ok(ImportStrategy::Skip),
            "overwrite" => Ok(ImportStrategy::Overwrite),
            "rename" => Ok(ImportStrategy::Rename),
            _ => Err(GotoError::InvalidImportStrategy(s.to_string())),
        }
    }
}

impl fmt::Display for ImportStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ImportStrategy::Skip => "skip",
            ImportStrategy::Overwrite => "overwrite",
            ImportStrategy::Rename => "rename",
        };
        f.write_str(name)
    }
}

/// Outcome of a bulk import
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ImportReport {
    pub imported: usize,
    pub skipped: usize,
    pub renamed: usize,
    pub warnings: Vec<String>,
}

impl ImportReport {
    /// Total records processed
    pub fn total(&self) -> usize {
        self.imported + self.skipped + self.renamed
    }
}
