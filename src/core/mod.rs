// Core business logic module

pub mod alias;
pub mod alias_validator;
pub mod config;
pub mod fuzzy;
pub mod stack;
pub mod store;
pub mod transfer;

// Re-export commonly used items
pub use alias::AliasRecord;
pub use config::{expand_path, Config, SortOrder};
pub use fuzzy::Match;
pub use stack::DirectoryStack;
pub use store::AliasStore;
pub use transfer::{ImportReport, ImportStrategy};
