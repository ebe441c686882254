use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{GotoError, Result};

/// Written by [`Config::write_default_file`]
const DEFAULT_CONFIG_FILE: &str = r#"[general]
fuzzy_threshold = 0.6
default_sort = "alpha"  # alpha, usage, recent

[display]
show_stats = false
show_tags = true
"#;

/// Ordering used when listing aliases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Alpha,
    Usage,
    Recent,
}

impl FromStr for SortOrder {
    type Err = GotoError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "alpha" => Ok(SortOrder::Alpha),
            "usage" => Ok(SortOrder::Usage),
            "recent" => Ok(SortOrder::Recent),
            _ => Err(GotoError::config(format!(
                "invalid sort order '{}' (must be alpha, usage, or recent)",
                s
            ))),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SortOrder::Alpha => "alpha",
            SortOrder::Usage => "usage",
            SortOrder::Recent => "recent",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    #[serde(default = "default_fuzzy_threshold")]
    pub fuzzy_threshold: f64,
    #[serde(default)]
    pub default_sort: SortOrder,
}

fn default_fuzzy_threshold() -> f64 {
    0.3
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            fuzzy_threshold: default_fuzzy_threshold(),
            default_sort: SortOrder::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default)]
    pub show_stats: bool,
    #[serde(default = "default_show_tags")]
    pub show_tags: bool,
}

fn default_show_tags() -> bool {
    true
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_stats: false,
            show_tags: true,
        }
    }
}

/// Settings read from `config.toml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

impl UserConfig {
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| GotoError::config(format!("invalid config.toml: {}", e)))
    }
}

/// Resolved locations and user settings
///
/// Built once at startup and passed to whatever needs it.
#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    /// Base path of the alias store; the modern file is this path plus `.toml`
    pub aliases_path: PathBuf,
    pub stack_path: PathBuf,
    pub config_path: PathBuf,
    pub user: UserConfig,
}

impl Config {
    /// Load configuration for the data directory chosen by the environment
    pub fn load() -> Result<Self> {
        let data_dir = resolve_data_dir(
            env::var("GOTO_DB").ok(),
            env::var("XDG_CONFIG_HOME").ok(),
            dirs::home_dir(),
        )?;
        Self::with_dir(data_dir)
    }

    /// Load configuration rooted at an explicit data directory
    pub fn with_dir(data_dir: impl Into<PathBuf>) -> Result<Self> {
        let data_dir = data_dir.into();
        let config_path = data_dir.join("config.toml");

        let user = if config_path.exists() {
            UserConfig::parse(&fs::read_to_string(&config_path)?)?
        } else {
            UserConfig::default()
        };

        log::debug!("Using data directory {:?}", data_dir);

        Ok(Self {
            aliases_path: data_dir.join("aliases"),
            stack_path: data_dir.join("goto_stack"),
            config_path,
            data_dir,
            user,
        })
    }

    pub fn fuzzy_threshold(&self) -> f64 {
        self.user.general.fuzzy_threshold
    }

    pub fn default_sort(&self) -> SortOrder {
        self.user.general.default_sort
    }

    pub fn ensure_dirs(&self) -> Result<()> {
        fs::create_dir_all(&self.data_dir)?;
        Ok(())
    }

    /// Create the commented default `config.toml` unless one exists
    ///
    /// Returns whether a file was written.
    pub fn write_default_file(&self) -> Result<bool> {
        if self.config_path.exists() {
            return Ok(false);
        }

        self.ensure_dirs()?;
        fs::write(&self.config_path, DEFAULT_CONFIG_FILE)?;
        log::info!("Wrote default configuration to {:?}", self.config_path);
        Ok(true)
    }

    /// Effective settings in config-file syntax
    pub fn render(&self) -> Result<String> {
        toml::to_string_pretty(&self.user).map_err(GotoError::from)
    }
}

/// Pick the data directory: `$GOTO_DB`, then `$XDG_CONFIG_HOME/goto`,
/// then `~/.config/goto`
pub fn resolve_data_dir(
    goto_db: Option<String>,
    xdg_config_home: Option<String>,
    home: Option<PathBuf>,
) -> Result<PathBuf> {
    if let Some(path) = goto_db.filter(|p| !p.is_empty()) {
        return Ok(PathBuf::from(path));
    }

    if let Some(xdg) = xdg_config_home.filter(|p| !p.is_empty()) {
        return Ok(PathBuf::from(xdg).join("goto"));
    }

    home.map(|h| h.join(".config").join("goto"))
        .ok_or(GotoError::NoHomeDir)
}

/// Expand `~` and environment variables, then make the path absolute
///
/// Unknown variables are left as written. The result is canonicalized when
/// it exists.
pub fn expand_path(raw: &str) -> Result<PathBuf> {
    let expanded = shellexpand::full(raw).unwrap_or_else(|_| shellexpand::tilde(raw));
    let path = Path::new(&*expanded);

    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        env::current_dir()?.join(path)
    };

    Ok(fs::canonicalize(&absolute).unwrap_or(absolute))
}
