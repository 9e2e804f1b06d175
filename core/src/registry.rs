//! The shape registry: one record per opcode, indexed by name and opcode.
//!
//! Records live in a flat table in registration order. Two maps point into
//! that table, one keyed by symbolic name and one by opcode. Registration
//! happens on [`ShapeRegistryBuilder`]; a built [`ShapeRegistry`] has no
//! mutators, so it can be shared across threads without locking.

use std::collections::HashMap;
use std::{mem, slice};

use blockshape_types::{ShapeError, ShapeRecord};
use thiserror::Error;

use crate::catalogue::{BUILTIN, CatalogueEntry, FALLBACK_FLAGS, FALLBACK_NAME};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("opcode `{opcode}` is already registered as `{existing}`")]
    DuplicateOpcode { opcode: String, existing: String },
    #[error("shape name `{name}` is already registered")]
    DuplicateName { name: String },
    #[error("unknown shape name `{name}`")]
    UnknownShapeName { name: String },
    #[error("shape name must not be empty")]
    EmptyName,
    #[error("no fallback shape designated")]
    MissingFallback,
    #[error("fallback shape `{name}` (`{opcode}`) must be a hat and a cap with no other flags")]
    InvalidFallback { name: String, opcode: String },
    #[error("invalid shape `{name}`: {source}")]
    InvalidShape {
        name: String,
        #[source]
        source: ShapeError,
    },
}

/// Accumulates registrations, then freezes them into a [`ShapeRegistry`].
#[derive(Debug, Default)]
pub struct ShapeRegistryBuilder {
    names: Vec<String>,
    records: Vec<ShapeRecord>,
    by_name: HashMap<String, usize>,
    by_opcode: HashMap<String, usize>,
    fallback: Option<usize>,
    strict: bool,
}

impl ShapeRegistryBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate every record on registration (boolean implies reporter).
    #[must_use]
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Add `record` under `name`.
    ///
    /// Atomic: on error nothing is added.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        record: ShapeRecord,
    ) -> Result<&mut Self, RegistryError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(RegistryError::EmptyName);
        }
        if self.by_name.contains_key(&name) {
            return Err(RegistryError::DuplicateName { name });
        }
        if let Some(&index) = self.by_opcode.get(record.opcode()) {
            return Err(RegistryError::DuplicateOpcode {
                opcode: record.opcode().to_string(),
                existing: self.names[index].clone(),
            });
        }
        self.check(&name, &record)?;

        let index = self.records.len();
        self.by_name.insert(name.clone(), index);
        self.by_opcode.insert(record.opcode().to_string(), index);
        self.names.push(name);
        self.records.push(record);
        Ok(self)
    }

    /// Swap the record stored under an existing `name`, keeping its position.
    ///
    /// Returns the record that was replaced. Atomic like [`Self::register`].
    pub fn replace(
        &mut self,
        name: &str,
        record: ShapeRecord,
    ) -> Result<ShapeRecord, RegistryError> {
        let Some(&index) = self.by_name.get(name) else {
            return Err(RegistryError::UnknownShapeName {
                name: name.to_string(),
            });
        };
        if let Some(&other) = self.by_opcode.get(record.opcode())
            && other != index
        {
            return Err(RegistryError::DuplicateOpcode {
                opcode: record.opcode().to_string(),
                existing: self.names[other].clone(),
            });
        }
        self.check(name, &record)?;

        self.by_opcode.remove(self.records[index].opcode());
        self.by_opcode.insert(record.opcode().to_string(), index);
        let old = mem::replace(&mut self.records[index], record);
        tracing::warn!(
            name,
            old = old.opcode(),
            new = self.records[index].opcode(),
            "Replaced shape"
        );
        Ok(old)
    }

    /// Register every entry of a catalogue table, in order.
    pub fn extend_from(&mut self, entries: &[CatalogueEntry]) -> Result<&mut Self, RegistryError> {
        for entry in entries {
            let record = entry
                .to_record()
                .map_err(|source| RegistryError::InvalidShape {
                    name: entry.name().to_string(),
                    source,
                })?;
            self.register(entry.name(), record)?;
        }
        Ok(self)
    }

    /// Designate the record returned by [`ShapeRegistry::by_opcode`] for unknown opcodes.
    pub fn fallback(&mut self, name: &str) -> Result<&mut Self, RegistryError> {
        let index = self
            .by_name
            .get(name)
            .copied()
            .ok_or_else(|| RegistryError::UnknownShapeName {
                name: name.to_string(),
            })?;
        self.fallback = Some(index);
        Ok(self)
    }

    #[must_use]
    pub fn contains_name(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Freeze the registrations.
    ///
    /// Fails without a fallback, or when the fallback record (after any
    /// [`Self::replace`]) is not exactly a hat and a cap.
    pub fn build(self) -> Result<ShapeRegistry, RegistryError> {
        let fallback = self.fallback.ok_or(RegistryError::MissingFallback)?;
        if self.records[fallback].flags() != FALLBACK_FLAGS {
            return Err(RegistryError::InvalidFallback {
                name: self.names[fallback].clone(),
                opcode: self.records[fallback].opcode().to_string(),
            });
        }
        tracing::debug!(
            shapes = self.records.len(),
            fallback = self.records[fallback].opcode(),
            "Shape registry built"
        );
        Ok(ShapeRegistry {
            names: self.names,
            records: self.records,
            by_name: self.by_name,
            by_opcode: self.by_opcode,
            fallback,
        })
    }

    fn check(&self, name: &str, record: &ShapeRecord) -> Result<(), RegistryError> {
        if !self.strict {
            return Ok(());
        }
        record
            .validate()
            .map_err(|source| RegistryError::InvalidShape {
                name: name.to_string(),
                source,
            })
    }
}

/// Read-only set of shape records.
#[derive(Debug, Clone)]
pub struct ShapeRegistry {
    names: Vec<String>,
    records: Vec<ShapeRecord>,
    by_name: HashMap<String, usize>,
    by_opcode: HashMap<String, usize>,
    fallback: usize,
}

impl ShapeRegistry {
    #[must_use]
    pub fn builder() -> ShapeRegistryBuilder {
        ShapeRegistryBuilder::new()
    }

    /// Builder preloaded with the built-in catalogue and its fallback.
    pub fn builtin_builder(strict: bool) -> Result<ShapeRegistryBuilder, RegistryError> {
        let mut builder = ShapeRegistryBuilder::new().strict(strict);
        builder.extend_from(BUILTIN)?.fallback(FALLBACK_NAME)?;
        Ok(builder)
    }

    /// Registry holding exactly the built-in catalogue.
    pub fn builtin() -> Result<Self, RegistryError> {
        Self::builtin_builder(false)?.build()
    }

    /// Exact lookup by symbolic name.
    pub fn by_name(&self, name: &str) -> Result<&ShapeRecord, RegistryError> {
        self.by_name
            .get(name)
            .map(|&index| &self.records[index])
            .ok_or_else(|| RegistryError::UnknownShapeName {
                name: name.to_string(),
            })
    }

    /// Lookup by opcode. Unknown opcodes get the fallback record, never an error.
    #[must_use]
    pub fn by_opcode(&self, opcode: &str) -> &ShapeRecord {
        self.get_opcode(opcode).unwrap_or_else(|| self.fallback())
    }

    /// Lookup by opcode without the fallback.
    #[must_use]
    pub fn get_opcode(&self, opcode: &str) -> Option<&ShapeRecord> {
        self.by_opcode.get(opcode).map(|&index| &self.records[index])
    }

    #[must_use]
    pub fn contains_opcode(&self, opcode: &str) -> bool {
        self.by_opcode.contains_key(opcode)
    }

    #[must_use]
    pub fn fallback(&self) -> &ShapeRecord {
        &self.records[self.fallback]
    }

    /// Every record in registration order. Call again to start over.
    pub fn all(&self) -> slice::Iter<'_, ShapeRecord> {
        self.records.iter()
    }

    /// `(name, record)` pairs in registration order.
    pub fn entries(&self) -> impl ExactSizeIterator<Item = (&str, &ShapeRecord)> {
        self.names.iter().map(String::as_str).zip(&self.records)
    }

    /// Distinct categories in order of first appearance.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for record in &self.records {
            let category = record.category();
            if !seen.contains(&category) {
                seen.push(category);
            }
        }
        seen
    }

    /// Records of one category, in registration order.
    pub fn in_category<'a>(
        &'a self,
        category: &'a str,
    ) -> impl Iterator<Item = &'a ShapeRecord> + 'a {
        self.records
            .iter()
            .filter(move |record| record.category() == category)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a ShapeRegistry {
    type Item = &'a ShapeRecord;
    type IntoIter = slice::Iter<'a, ShapeRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.all()
    }
}
