//! The process-wide shape registry.
//!
//! Built at most once. A host that wants configured shapes installs its own
//! registry before the first lookup; otherwise the first call to
//! [`registry`] builds the built-in catalogue.

use std::sync::OnceLock;

use crate::registry::ShapeRegistry;

static REGISTRY: OnceLock<ShapeRegistry> = OnceLock::new();

/// Install `registry` as the process-wide registry.
///
/// Fails, handing the registry back, if one is already in place.
pub fn install(registry: ShapeRegistry) -> Result<(), ShapeRegistry> {
    REGISTRY.set(registry)?;
    tracing::debug!("Installed process-wide shape registry");
    Ok(())
}

/// The process-wide registry, building the built-in catalogue on first use.
pub fn registry() -> &'static ShapeRegistry {
    REGISTRY.get_or_init(|| {
        ShapeRegistry::builtin().expect("built-in shape catalogue must register cleanly")
    })
}
