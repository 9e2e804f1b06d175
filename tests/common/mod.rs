//! Shared test utilities and fixtures
//!
//! Common infrastructure for integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use blockshape_core::{ShapeFlags, ShapeRecord, ShapeRegistry};

/// Build a record, panicking on an invalid opcode.
pub fn record(opcode: &str, flags: ShapeFlags) -> ShapeRecord {
    ShapeRecord::new(opcode, flags).expect("test opcode must be valid")
}

/// The built-in registry, freshly built.
pub fn builtin() -> ShapeRegistry {
    ShapeRegistry::builtin().expect("built-in catalogue must register")
}

/// Write `content` as `config.toml` inside `dir`.
pub fn write_config(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("config.toml");
    fs::write(&path, content).expect("config fixture must be writable");
    path
}

/// Opcodes that no catalogue entry uses.
pub const UNKNOWN_OPCODES: &[&str] = &[
    "nonexistent_extension_block",
    "",
    "MOTION_MOVESTEPS",
    "motion_movesteps ",
    "lmsTempo_setTempo",
];
