//! Configuration loading for blockshape.
//!
//! The config file is optional. It lives at `~/.blockshape/config.toml`
//! unless `BLOCKSHAPE_CONFIG` points elsewhere:
//!
//! ```toml
//! [registry]
//! strict = true
//!
//! [[shapes]]
//! name = "PEN_CLEAR"
//! opcode = "pen_clear"
//! stack = true
//! cap = "indeterminate"
//! replace = true
//! ```
//!
//! Raw TOML structs stay private; they are resolved into validated types at
//! the parse boundary.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::{env, fs, io};

use blockshape_core::{
    RegistryError, ShapeError, ShapeFlag, ShapeFlags, ShapeRecord, ShapeRegistry,
    ShapeRegistryBuilder, TriState,
};
use serde::Deserialize;
use thiserror::Error;

/// Environment variable overriding the config file location.
pub const CONFIG_ENV_VAR: &str = "BLOCKSHAPE_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config at {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeEntryError {
    #[error("shape name must not be empty")]
    EmptyName,
    #[error("shape `{name}`: {source}")]
    InvalidRecord {
        name: String,
        #[source]
        source: ShapeError,
    },
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawShapeEntry {
    name: String,
    opcode: String,
    #[serde(default)]
    stack: TriState,
    #[serde(default)]
    c_mouth: TriState,
    #[serde(default)]
    cap: TriState,
    #[serde(default)]
    hat: TriState,
    #[serde(default)]
    reporter: TriState,
    #[serde(default)]
    boolean: TriState,
    #[serde(default)]
    menu: TriState,
    #[serde(default)]
    replace: bool,
}

/// What a configured shape does to the catalogue it is applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryMode {
    /// Register a new name.
    Add,
    /// Swap the record of an existing name.
    Replace,
}

/// A validated catalogue entry from the config file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawShapeEntry")]
pub struct ShapeEntry {
    name: String,
    record: ShapeRecord,
    mode: EntryMode,
}

impl TryFrom<RawShapeEntry> for ShapeEntry {
    type Error = ShapeEntryError;

    fn try_from(raw: RawShapeEntry) -> Result<Self, Self::Error> {
        if raw.name.trim().is_empty() {
            return Err(ShapeEntryError::EmptyName);
        }
        let flags = ShapeFlags::NONE
            .with(ShapeFlag::Stack, raw.stack)
            .with(ShapeFlag::CMouth, raw.c_mouth)
            .with(ShapeFlag::Cap, raw.cap)
            .with(ShapeFlag::Hat, raw.hat)
            .with(ShapeFlag::Reporter, raw.reporter)
            .with(ShapeFlag::Boolean, raw.boolean)
            .with(ShapeFlag::Menu, raw.menu);
        let record =
            ShapeRecord::new(raw.opcode, flags).map_err(|source| ShapeEntryError::InvalidRecord {
                name: raw.name.clone(),
                source,
            })?;
        let mode = if raw.replace {
            EntryMode::Replace
        } else {
            EntryMode::Add
        };
        Ok(Self {
            name: raw.name,
            record,
            mode,
        })
    }
}

impl ShapeEntry {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn record(&self) -> &ShapeRecord {
        &self.record
    }

    #[must_use]
    pub const fn mode(&self) -> EntryMode {
        self.mode
    }
}

#[derive(Debug, Default, Clone, Copy, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegistrySettings {
    /// Validate boolean-implies-reporter on every registration.
    #[serde(default)]
    pub strict: bool,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BlockshapeConfig {
    #[serde(default)]
    pub registry: RegistrySettings,
    #[serde(default)]
    pub shapes: Vec<ShapeEntry>,
}

impl BlockshapeConfig {
    /// Load the config file, if there is one.
    ///
    /// A missing file is `Ok(None)`, not an error.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let Some(path) = config_path() else {
            return Ok(None);
        };
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file");
            return Ok(None);
        }
        Self::load_from(&path).map(Some)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(config),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    /// Apply the configured shapes to `builder`, in file order.
    pub fn apply(&self, builder: &mut ShapeRegistryBuilder) -> Result<(), RegistryError> {
        for entry in &self.shapes {
            match entry.mode {
                EntryMode::Add => {
                    builder.register(entry.name.clone(), entry.record.clone())?;
                }
                EntryMode::Replace => {
                    builder.replace(&entry.name, entry.record.clone())?;
                }
            }
        }
        if !self.shapes.is_empty() {
            tracing::info!(count = self.shapes.len(), "Applied configured shapes");
        }
        Ok(())
    }

    /// The built-in catalogue with this config applied on top.
    pub fn build_registry(&self) -> Result<ShapeRegistry, RegistryError> {
        let mut builder = ShapeRegistry::builtin_builder(self.registry.strict)?;
        self.apply(&mut builder)?;
        builder.build()
    }
}

/// Where the config file is looked up.
#[must_use]
pub fn config_path() -> Option<PathBuf> {
    resolve_config_path(env::var_os(CONFIG_ENV_VAR), dirs::home_dir())
}

fn resolve_config_path(override_path: Option<OsString>, home: Option<PathBuf>) -> Option<PathBuf> {
    match override_path {
        Some(path) if !path.is_empty() => Some(PathBuf::from(path)),
        _ => home.map(|home| home.join(".blockshape").join("config.toml")),
    }
}
