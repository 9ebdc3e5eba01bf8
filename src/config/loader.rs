//! Configuration file loading with precedence handling.

use crate::model::{record_field, Record};
use crate::state::ListFields;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Config file path contains invalid UTF-8 or cannot be resolved.
    #[error("Invalid config path: {0}")]
    InvalidPath(String),

    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/exlv/config.toml`.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Attribute holding each record's id.
    #[serde(default)]
    pub id_field: Option<String>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Displayed columns. When absent, columns are inferred from the data.
    #[serde(default)]
    pub fields: Option<Vec<FieldConfig>>,

    /// Initial sort field.
    #[serde(default)]
    pub sort_field: Option<String>,

    /// Start with a descending sort.
    #[serde(default)]
    pub sort_descending: Option<bool>,
}

/// One `[[fields]]` entry.
///
/// ```toml
/// [[fields]]
/// name = "score"
/// label = "Score"
/// filterable = false
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FieldConfig {
    /// Attribute key.
    pub name: String,

    /// Column header. Defaults to the key.
    #[serde(default)]
    pub label: Option<String>,

    /// Offered for sorting.
    #[serde(default = "default_true")]
    pub sortable: bool,

    /// Offered by the filter form.
    #[serde(default = "default_true")]
    pub filterable: bool,
}

fn default_true() -> bool {
    true
}

impl FieldConfig {
    /// Column with default label and flags.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: None,
            sortable: true,
            filterable: true,
        }
    }

    /// Header text.
    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.name)
    }
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Attribute holding each record's id.
    pub id_field: String,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
    /// Configured columns; empty means infer from data.
    pub fields: Vec<FieldConfig>,
    /// Initial sort field; `None` means the first sortable field.
    pub sort_field: Option<String>,
    /// Start with a descending sort.
    pub sort_descending: bool,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            id_field: "id".to_string(),
            log_file_path: default_log_path(),
            fields: Vec::new(),
            sort_field: None,
            sort_descending: false,
        }
    }
}

impl ResolvedConfig {
    /// Build the field registries for a list page.
    ///
    /// Configured fields are used as given; with none configured every
    /// attribute seen in `records` becomes a column.
    pub fn list_fields(&self, records: &[Record]) -> ListFields {
        if self.fields.is_empty() {
            return ListFields::inferred(records);
        }
        let mut fields = ListFields::new();
        for field in &self.fields {
            fields.add(
                record_field(field.name.as_str(), field.label()),
                field.sortable,
                field.filterable,
            );
        }
        fields
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/exlv/exlv.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("exlv").join("exlv.log")
    } else {
        PathBuf::from("exlv.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
/// Returns `Err` if file exists but cannot be read or parsed.
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/exlv/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("exlv").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `EXLV_CONFIG` environment variable
/// 3. Default path `~/.config/exlv/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    match std::env::var("EXLV_CONFIG") {
        Ok(env_path) if !env_path.is_empty() => return load_config_file(PathBuf::from(env_path)),
        Ok(_) => return Err(ConfigError::InvalidPath("EXLV_CONFIG is empty".to_string())),
        Err(std::env::VarError::NotUnicode(raw)) => {
            return Err(ConfigError::InvalidPath(raw.to_string_lossy().into_owned()))
        }
        Err(std::env::VarError::NotPresent) => {}
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `EXLV_ID_FIELD`: Override the id attribute
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(id_field) = std::env::var("EXLV_ID_FIELD") {
        if !id_field.trim().is_empty() {
            config.id_field = id_field;
        }
    }

    config
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        id_field: config.id_field.unwrap_or(defaults.id_field),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        fields: config.fields.unwrap_or(defaults.fields),
        sort_field: config.sort_field.or(defaults.sort_field),
        sort_descending: config.sort_descending.unwrap_or(defaults.sort_descending),
    }
}

/// Command-line values that take part in configuration.
///
/// `None` / `false` mean the flag was not given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    /// `--id-field`
    pub id_field: Option<String>,
    /// `--sort`
    pub sort_field: Option<String>,
    /// `--desc`
    pub descending: bool,
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(mut config: ResolvedConfig, cli: CliOverrides) -> ResolvedConfig {
    if let Some(id_field) = cli.id_field {
        config.id_field = id_field;
    }

    if let Some(sort_field) = cli.sort_field {
        config.sort_field = Some(sort_field);
    }

    if cli.descending {
        config.sort_descending = true;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
