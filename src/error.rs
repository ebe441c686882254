use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::core::alias_validator::InvalidIdentifierError;

/// Custom error type for goto
#[derive(Error, Debug)]
pub enum GotoError {
    #[error(transparent)]
    InvalidIdentifier(#[from] InvalidIdentifierError),

    #[error("alias '{0}' not found")]
    AliasNotFound(String),

    #[error("alias '{0}' already exists")]
    AliasAlreadyExists(String),

    #[error("directory does not exist: {0}")]
    DirectoryNotFound(String),

    #[error("directory stack is empty")]
    EmptyStack,

    #[error("malformed alias store {}: {source}", path.display())]
    MalformedStore {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("invalid strategy: {0} (must be skip, overwrite, or rename)")]
    InvalidImportStrategy(String),

    #[error("no aliases found in import source")]
    EmptyImport,

    #[error("failed to determine home directory")]
    NoHomeDir,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Cancelled(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Result type alias for goto
pub type Result<T> = std::result::Result<T, GotoError>;

/// Process exit codes, one per failure class
pub mod exit_code {
    pub const SUCCESS: u8 = 0;
    pub const NOT_FOUND: u8 = 1;
    pub const DIRECTORY_NOT_FOUND: u8 = 2;
    pub const INVALID_INPUT: u8 = 3;
    pub const CONFLICT: u8 = 4;
    pub const SYSTEM: u8 = 5;
}

impl GotoError {
    /// Create a config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        GotoError::Config(msg.into())
    }

    /// Create a cancellation error
    pub fn cancelled<S: Into<String>>(msg: S) -> Self {
        GotoError::Cancelled(msg.into())
    }

    /// Exit code for the failure class of this error
    pub fn exit_code(&self) -> u8 {
        match self {
            GotoError::AliasNotFound(_) | GotoError::EmptyStack => exit_code::NOT_FOUND,
            GotoError::DirectoryNotFound(_) => exit_code::DIRECTORY_NOT_FOUND,
            GotoError::InvalidIdentifier(_) | GotoError::InvalidImportStrategy(_) => {
                exit_code::INVALID_INPUT
            }
            GotoError::AliasAlreadyExists(_) => exit_code::CONFLICT,
            _ => exit_code::SYSTEM,
        }
    }
}
