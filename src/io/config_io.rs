use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::io::document_io::atomic_write;
use crate::model::config::EnhancerConfig;

/// Settings file name, looked up in the working directory
pub const CONFIG_FILE: &str = ".tasks-enhancer.toml";

/// Keys accepted by `set_toggle`
pub const TOGGLE_KEYS: [&str; 2] = ["created", "scheduled"];

/// Error type for settings I/O
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    ReadError { path: PathBuf, source: io::Error },
    #[error("could not write {path}: {source}")]
    WriteError { path: PathBuf, source: io::Error },
    #[error("could not parse {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("could not parse {path}: {source}")]
    EditError {
        path: PathBuf,
        source: toml_edit::TomlError,
    },
    #[error("unknown setting: {0} (expected one of: created, scheduled)")]
    UnknownKey(String),
}

pub fn default_config_path(dir: &Path) -> PathBuf {
    dir.join(CONFIG_FILE)
}

/// Load settings, layering whatever the file sets over the defaults.
/// A missing file means all defaults.
pub fn load_config(path: &Path) -> Result<EnhancerConfig, ConfigError> {
    let Some(text) = read_if_exists(path)? else {
        return Ok(EnhancerConfig::default());
    };
    toml::from_str(&text).map_err(|source| ConfigError::ParseError {
        path: path.to_path_buf(),
        source,
    })
}

/// Read the settings file as an editable document (empty if missing), so
/// that writing it back keeps comments and layout.
pub fn read_config_doc(path: &Path) -> Result<toml_edit::DocumentMut, ConfigError> {
    let text = read_if_exists(path)?.unwrap_or_default();
    text.parse().map_err(|source| ConfigError::EditError {
        path: path.to_path_buf(),
        source,
    })
}

/// Set one of the `[new_task]` toggles in the document
pub fn set_toggle(
    doc: &mut toml_edit::DocumentMut,
    key: &str,
    value: bool,
) -> Result<(), ConfigError> {
    if !TOGGLE_KEYS.contains(&key) {
        return Err(ConfigError::UnknownKey(key.to_string()));
    }
    if !doc.get("new_task").is_some_and(|item| item.is_table_like()) {
        doc["new_task"] = toml_edit::Item::Table(toml_edit::Table::new());
    }
    doc["new_task"][key] = toml_edit::value(value);
    Ok(())
}

/// Write the settings document back to disk
pub fn write_config(path: &Path, doc: &toml_edit::DocumentMut) -> Result<(), ConfigError> {
    atomic_write(path, doc.to_string().as_bytes()).map_err(|source| ConfigError::WriteError {
        path: path.to_path_buf(),
        source,
    })
}

fn read_if_exists(path: &Path) -> Result<Option<String>, ConfigError> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        }),
    }
}
