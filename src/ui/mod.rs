// UI and formatting module

pub mod formatters;
pub mod prompts;

// Re-export commonly used items for cleaner imports
pub use formatters::{format_relative, format_tags, format_time, pad_to_width, truncate_to_width};
pub use prompts::{confirm, is_interactive, warn};
