//! Block-shape registry.
//!
//! Maps every known block opcode to its [`ShapeRecord`]. The built-in
//! catalogue lives in [`catalogue`]; [`ShapeRegistry`] indexes it by
//! symbolic name and by opcode, and hands out a fallback record for opcodes
//! it does not know.
//!
//! ```
//! use blockshape_core::{ShapeRegistry, names};
//!
//! let shapes = ShapeRegistry::builtin()?;
//! assert_eq!(shapes.by_opcode("motion_movesteps").attachable(), Ok(true));
//! assert!(shapes.by_name(names::CONTROL_STOP)?.attachable().is_err());
//! assert_eq!(shapes.by_opcode("someext_block").opcode(), "red_hat_block");
//! # Ok::<(), blockshape_core::RegistryError>(())
//! ```

pub mod catalogue;
mod global;
mod registry;

pub use blockshape_types::{
    IndeterminateValueError, ShapeError, ShapeFlag, ShapeFlags, ShapeRecord, TriState,
};
pub use catalogue::{BUILTIN, CatalogueEntry, FALLBACK_FLAGS, FALLBACK_NAME, names};
pub use global::{install, registry};
pub use registry::{RegistryError, ShapeRegistry, ShapeRegistryBuilder};
