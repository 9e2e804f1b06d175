//! Core domain types for block shapes.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies:
//! the tri-valued flag type, the seven shape flags, and the immutable shape record.

mod flag;
mod record;
mod tristate;

pub use flag::{FlagParseError, ShapeFlag, ShapeFlags};
pub use record::{ShapeError, ShapeRecord};
pub use tristate::{IndeterminateValueError, TriState, TriStateParseError};
