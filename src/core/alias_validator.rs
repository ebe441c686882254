use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

/// Accepted shape for alias names and tags
static IDENTIFIER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_-]*$").expect("identifier pattern is valid"));

/// What an identifier names
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subject {
    Alias,
    Tag,
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Subject::Alias => f.write_str("alias"),
            Subject::Tag => f.write_str("tag"),
        }
    }
}

/// Why an identifier was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidKind {
    Empty,
    BadPattern,
}

/// Rejected alias name or tag
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid {subject} '{candidate}': {reason}")]
pub struct InvalidIdentifierError {
    pub subject: Subject,
    pub candidate: String,
    pub kind: InvalidKind,
    pub reason: String,
}

impl InvalidIdentifierError {
    fn new(subject: Subject, candidate: &str, kind: InvalidKind) -> Self {
        let reason = match kind {
            InvalidKind::Empty => format!("{} cannot be empty", subject),
            InvalidKind::BadPattern => "must start with letter/digit and contain only letters, digits, hyphens, underscores".to_string(),
        };

        Self {
            subject,
            candidate: candidate.to_string(),
            kind,
            reason,
        }
    }
}

/// Validates a candidate identifier for the given subject
///
/// Accepts strings that start with an ASCII letter or digit followed by
/// letters, digits, hyphens or underscores.
///
/// # Examples
/// ```
/// # use goto::core::alias_validator::{validate, Subject};
/// assert!(validate("my-project_2", Subject::Alias).is_ok());
/// assert!(validate("my.project", Subject::Alias).is_err());
/// ```
pub fn validate(candidate: &str, subject: Subject) -> Result<(), InvalidIdentifierError> {
    if candidate.is_empty() {
        return Err(InvalidIdentifierError::new(subject, candidate, InvalidKind::Empty));
    }

    if !IDENTIFIER_PATTERN.is_match(candidate) {
        return Err(InvalidIdentifierError::new(
            subject,
            candidate,
            InvalidKind::BadPattern,
        ));
    }

    Ok(())
}

/// Validates an alias name
pub fn validate_alias(name: &str) -> Result<(), InvalidIdentifierError> {
    validate(name, Subject::Alias)
}

/// Validates an already-normalized tag
pub fn validate_tag(tag: &str) -> Result<(), InvalidIdentifierError> {
    validate(tag, Subject::Tag)
}

/// Lowercase and trim a raw tag
pub fn normalize_tag(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Normalizes a batch of raw tags
///
/// Each tag is trimmed and lowercased; empty results are dropped and
/// duplicates collapsed (first occurrence wins). Every survivor is then
/// validated and the first invalid tag rejects the whole batch.
pub fn normalize_tags<S: AsRef<str>>(raw: &[S]) -> Result<Vec<String>, InvalidIdentifierError> {
    let mut seen = HashSet::new();
    let mut normalized = Vec::new();

    for tag in raw {
        let tag = normalize_tag(tag.as_ref());
        if tag.is_empty() || !seen.insert(tag.clone()) {
            continue;
        }
        normalized.push(tag);
    }

    for tag in &normalized {
        validate_tag(tag)?;
    }

    Ok(normalized)
}
