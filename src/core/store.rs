//! Persistent alias store.
//!
//! The store keeps every [`AliasRecord`] in memory in insertion order and
//! rewrites the whole file after each mutation. The modern file lives next
//! to the base path with a `.toml` suffix; a plain-text file at the base path
//! itself is the legacy format (`name path` per line) and is migrated the
//! first time the store is opened without a modern file.
//!
//! # File Format
//!
//! ```toml
//! [[aliases]]
//! name = "dev"
//! path = "/home/user/dev"
//! tags = ["work"]
//! created = "2024-01-01T00:00:00Z"
//! last_used = "2024-02-01T09:30:00Z"
//! use_count = 12
//! ```
//!
//! Timestamps are written as strings; unquoted TOML datetimes are read too.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use super::alias::AliasRecord;
use super::alias_validator::{normalize_tag, normalize_tags, validate_alias, validate_tag};
use super::config::{Config, SortOrder};
use super::fuzzy::{self, Match};
use super::transfer::{ImportReport, ImportStrategy, StoreFile};
use crate::error::{GotoError, Result};

/// Borrowed view used when writing, so persisting never clones the records
#[derive(Serialize)]
struct StoreFileRef<'a> {
    aliases: &'a [AliasRecord],
}

/// Authoritative collection of aliases backed by a file
#[derive(Debug)]
pub struct AliasStore {
    store_path: PathBuf,
    legacy_path: PathBuf,
    aliases: Vec<AliasRecord>,
}

impl AliasStore {
    /// Open the store for the configured alias base path
    pub fn load(config: &Config) -> Result<Self> {
        Self::open(&config.aliases_path)
    }

    /// Open the store rooted at `base`
    ///
    /// Reads `<base>.toml` when present. Otherwise, if a legacy text file
    /// exists at `base`, it is migrated. With neither, the store starts empty
    /// and nothing is written until the first mutation.
    pub fn open(base: impl AsRef<Path>) -> Result<Self> {
        let legacy_path = base.as_ref().to_path_buf();
        let store_path = with_suffix(&legacy_path, ".toml");

        let mut store = Self {
            store_path,
            legacy_path,
            aliases: Vec::new(),
        };

        if store.store_path.exists() {
            store.aliases = read_store_file(&store.store_path)?;
            log::debug!(
                "Loaded {} aliases from {:?}",
                store.aliases.len(),
                store.store_path
            );
        } else if store.legacy_path.is_file() {
            store.migrate_legacy()?;
        } else {
            log::debug!("No alias store at {:?}, starting empty", store.store_path);
        }

        Ok(store)
    }

    /// Path of the modern store file
    pub fn store_path(&self) -> &Path {
        &self.store_path
    }

    /// Where the legacy file is moved after migration
    pub fn backup_path(&self) -> PathBuf {
        with_suffix(&self.legacy_path, ".txt.bak")
    }

    fn migrate_legacy(&mut self) -> Result<()> {
        let content = fs::read_to_string(&self.legacy_path)?;
        self.aliases = parse_legacy(&content, Utc::now());
        self.persist()?;

        log::info!(
            "Migrated {} aliases from {:?} to {:?}",
            self.aliases.len(),
            self.legacy_path,
            self.store_path
        );

        // The modern file is already durable, so a failed backup rename is not fatal
        let backup = self.backup_path();
        if let Err(e) = fs::rename(&self.legacy_path, &backup) {
            log::warn!("Could not move legacy file to {:?}: {}", backup, e);
        }

        Ok(())
    }

    /// Rewrite the whole store file
    ///
    /// Writes to a temporary sibling first and renames it over the target, so
    /// readers see either the old or the new content.
    pub fn persist(&self) -> Result<()> {
        if let Some(parent) = self.store_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = self.export_string()?;
        let tmp_path = with_suffix(&self.store_path, ".tmp");

        fs::write(&tmp_path, content)?;
        fs::rename(&tmp_path, &self.store_path)?;

        log::debug!(
            "Saved {} aliases to {:?}",
            self.aliases.len(),
            self.store_path
        );
        Ok(())
    }

    // Lookup

    /// Get an alias by name
    pub fn get(&self, name: &str) -> Result<&AliasRecord> {
        self.aliases
            .iter()
            .find(|a| a.name == name)
            .ok_or_else(|| GotoError::AliasNotFound(name.to_string()))
    }

    /// Check if an alias exists
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// All aliases in insertion order
    pub fn aliases(&self) -> &[AliasRecord] {
        &self.aliases
    }

    /// All alias names in insertion order
    pub fn names(&self) -> Vec<String> {
        self.aliases.iter().map(|a| a.name.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.aliases.iter().position(|a| a.name == name)
    }

    fn get_mut(&mut self, name: &str) -> Result<&mut AliasRecord> {
        self.aliases
            .iter_mut()
            .find(|a| a.name == name)
            .ok_or_else(|| GotoError::AliasNotFound(name.to_string()))
    }

    /// Aliases ordered for display
    pub fn sorted(&self, order: SortOrder) -> Vec<&AliasRecord> {
        let mut aliases: Vec<&AliasRecord> = self.aliases.iter().collect();
        match order {
            SortOrder::Alpha => aliases.sort_by(|a, b| a.name.cmp(&b.name)),
            SortOrder::Usage => aliases.sort_by(|a, b| {
                b.use_count
                    .cmp(&a.use_count)
                    .then_with(|| a.name.cmp(&b.name))
            }),
            SortOrder::Recent => aliases.sort_by(|a, b| {
                b.last_used
                    .cmp(&a.last_used)
                    .then_with(|| a.name.cmp(&b.name))
            }),
        }
        aliases
    }

    /// Aliases carrying `tag`, in display order
    pub fn with_tag(&self, tag: &str, order: SortOrder) -> Vec<&AliasRecord> {
        let tag = normalize_tag(tag);
        self.sorted(order)
            .into_iter()
            .filter(|a| a.has_tag(&tag))
            .collect()
    }

    /// Up to `limit` used aliases, most recent first
    pub fn recent(&self, limit: usize) -> Vec<&AliasRecord> {
        self.sorted(SortOrder::Recent)
            .into_iter()
            .filter(|a| a.last_used.is_some())
            .take(limit)
            .collect()
    }

    /// Tag usage counts across all aliases
    pub fn tag_counts(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for tag in self.aliases.iter().flat_map(|a| a.tags.iter()) {
            *counts.entry(tag.clone()).or_insert(0) += 1;
        }
        counts
    }

    /// Every distinct tag, sorted
    pub fn all_tags(&self) -> Vec<String> {
        self.tag_counts().into_keys().collect()
    }

    /// Rank alias names against a possibly misspelled query
    pub fn find_similar(&self, query: &str, threshold: f64) -> Vec<Match> {
        fuzzy::find_similar(query, &self.names(), threshold)
    }

    // Mutation

    /// Add a new alias, keeping the tags already on the record
    pub fn add(&mut self, record: AliasRecord) -> Result<()> {
        let tags = record.tags.clone();
        self.add_with_tags(record, &tags)
    }

    /// Add a new alias with the given raw tags
    ///
    /// The record is stamped as freshly created and never used.
    pub fn add_with_tags<S: AsRef<str>>(&mut self, mut record: AliasRecord, tags: &[S]) -> Result<()> {
        validate_alias(&record.name)?;
        if self.contains(&record.name) {
            return Err(GotoError::AliasAlreadyExists(record.name));
        }

        record.tags = normalize_tags(tags)?;
        record.created = Utc::now();
        record.last_used = None;
        record.use_count = 0;

        log::debug!("Adding alias '{}' -> {}", record.name, record.path);
        self.aliases.push(record);
        self.persist()
    }

    /// Remove an alias and return it
    pub fn remove(&mut self, name: &str) -> Result<AliasRecord> {
        let pos = self
            .position(name)
            .ok_or_else(|| GotoError::AliasNotFound(name.to_string()))?;

        let removed = self.aliases.remove(pos);
        self.persist()?;
        Ok(removed)
    }

    /// Record a successful navigation
    pub fn record_usage(&mut self, name: &str) -> Result<()> {
        self.get_mut(name)?.record_use();
        self.persist()
    }

    /// Resolve an alias for navigation
    ///
    /// Fails with [`GotoError::DirectoryNotFound`] when the target is not an
    /// existing directory; otherwise records the usage and returns the path.
    pub fn navigate(&mut self, name: &str) -> Result<String> {
        let alias = self.get(name)?;
        if !alias.target_exists() {
            return Err(GotoError::DirectoryNotFound(alias.path.clone()));
        }

        let path = alias.path.clone();
        self.record_usage(name)?;
        Ok(path)
    }

    /// Rename an alias, keeping all metadata
    ///
    /// A collision with `new_name` is reported before a missing `old_name`.
    pub fn rename(&mut self, old_name: &str, new_name: &str) -> Result<()> {
        validate_alias(new_name)?;

        let mut found = None;
        for (i, alias) in self.aliases.iter().enumerate() {
            if alias.name == old_name {
                found = Some(i);
            } else if alias.name == new_name {
                return Err(GotoError::AliasAlreadyExists(new_name.to_string()));
            }
        }

        let pos = found.ok_or_else(|| GotoError::AliasNotFound(old_name.to_string()))?;
        self.aliases[pos].name = new_name.to_string();
        self.persist()
    }

    /// Add a tag to an alias; adding a present tag is a no-op
    pub fn add_tag(&mut self, name: &str, tag: &str) -> Result<()> {
        let tag = normalize_tag(tag);
        validate_tag(&tag)?;

        if self.get_mut(name)?.add_tag(&tag) {
            self.persist()?;
        }
        Ok(())
    }

    /// Remove a tag from an alias; removing an absent tag is a no-op
    pub fn remove_tag(&mut self, name: &str, tag: &str) -> Result<()> {
        let tag = normalize_tag(tag);

        if self.get_mut(name)?.remove_tag(&tag) {
            self.persist()?;
        }
        Ok(())
    }

    /// Replace every tag on an alias
    pub fn set_tags<S: AsRef<str>>(&mut self, name: &str, tags: &[S]) -> Result<()> {
        let tags = normalize_tags(tags)?;
        self.get_mut(name)?.tags = tags;
        self.persist()
    }

    /// Forget when each alias was last used, keeping use counts
    pub fn clear_history(&mut self) -> Result<()> {
        for alias in &mut self.aliases {
            alias.last_used = None;
        }
        self.persist()
    }

    /// Aliases whose target is no longer an existing directory
    pub fn stale(&self) -> Vec<&AliasRecord> {
        self.aliases.iter().filter(|a| !a.target_exists()).collect()
    }

    /// Remove every stale alias and return what was removed
    pub fn cleanup(&mut self) -> Result<Vec<AliasRecord>> {
        let (stale, live): (Vec<AliasRecord>, Vec<AliasRecord>) = self
            .aliases
            .drain(..)
            .partition(|a| !a.target_exists());
        self.aliases = live;

        if !stale.is_empty() {
            log::info!("Removing {} stale aliases", stale.len());
            self.persist()?;
        }
        Ok(stale)
    }

    // Bulk transfer

    /// Full store contents in the serialized format
    pub fn export_string(&self) -> Result<String> {
        let file = StoreFileRef {
            aliases: &self.aliases,
        };
        Ok(toml::to_string_pretty(&file)?)
    }

    /// Import from serialized content
    pub fn import_str(&mut self, content: &str, strategy: ImportStrategy) -> Result<ImportReport> {
        let file: StoreFile = toml::from_str(content).map_err(|source| GotoError::MalformedStore {
            path: PathBuf::from("<import>"),
            source,
        })?;
        self.import_records(file.aliases, strategy)
    }

    /// Merge records into the store
    ///
    /// Invalid names are skipped with a warning. Missing target directories
    /// only produce a warning; the record is still imported.
    pub fn import_records(
        &mut self,
        records: Vec<AliasRecord>,
        strategy: ImportStrategy,
    ) -> Result<ImportReport> {
        if records.is_empty() {
            return Err(GotoError::EmptyImport);
        }

        let mut existing: HashSet<String> = self.aliases.iter().map(|a| a.name.clone()).collect();
        let mut report = ImportReport::default();

        for mut record in records {
            if let Err(e) = validate_alias(&record.name) {
                report
                    .warnings
                    .push(format!("skipping invalid alias name '{}': {}", record.name, e));
                report.skipped += 1;
                continue;
            }

            match normalize_tags(&record.tags) {
                Ok(tags) => record.tags = tags,
                Err(e) => {
                    report
                        .warnings
                        .push(format!("skipping alias '{}': {}", record.name, e));
                    report.skipped += 1;
                    continue;
                }
            }

            if !record.target_exists() {
                report.warnings.push(format!(
                    "path does not exist for alias '{}': {}",
                    record.name, record.path
                ));
            }

            if !existing.contains(&record.name) {
                existing.insert(record.name.clone());
                self.aliases.push(record);
                report.imported += 1;
                continue;
            }

            match strategy {
                ImportStrategy::Skip => report.skipped += 1,
                ImportStrategy::Overwrite => {
                    if let Some(pos) = self.position(&record.name) {
                        self.aliases[pos] = record;
                    }
                    report.imported += 1;
                }
                ImportStrategy::Rename => {
                    record.name = unique_name(&record.name, &existing);
                    existing.insert(record.name.clone());
                    self.aliases.push(record);
                    report.renamed += 1;
                }
            }
        }

        for warning in &report.warnings {
            log::debug!("Import warning: {}", warning);
        }

        self.persist()?;
        Ok(report)
    }
}

/// Append a suffix to the final path component
fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut s: OsString = path.as_os_str().to_owned();
    s.push(suffix);
    PathBuf::from(s)
}

fn read_store_file(path: &Path) -> Result<Vec<AliasRecord>> {
    let content = fs::read_to_string(path)?;
    let file: StoreFile = toml::from_str(&content).map_err(|source| GotoError::MalformedStore {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(file.aliases)
}

/// Parse the legacy `name path` text format
///
/// Blank lines and `#` comments are ignored. The first space separates the
/// name from the path, so paths may contain spaces.
pub fn parse_legacy(content: &str, now: DateTime<Utc>) -> Vec<AliasRecord> {
    let mut seen = HashSet::new();
    let mut records = Vec::new();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((name, path)) = line.split_once(' ') else {
            log::warn!("Skipping legacy line without a path: {:?}", line);
            continue;
        };

        if let Err(e) = validate_alias(name) {
            log::warn!("Skipping legacy alias: {}", e);
            continue;
        }
        if !seen.insert(name.to_string()) {
            log::warn!("Skipping duplicate legacy alias '{}'", name);
            continue;
        }

        let mut record = AliasRecord::new(name, path);
        record.created = now;
        records.push(record);
    }

    records
}

/// First free `base_N` name, starting at 2
fn unique_name(base: &str, existing: &HashSet<String>) -> String {
    (2..)
        .map(|n| format!("{}_{}", base, n))
        .find(|candidate| !existing.contains(candidate))
        .unwrap_or_else(|| base.to_string())
}
