//! Shape records: one opcode and its flags.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::flag::{ShapeFlag, ShapeFlags};
use crate::tristate::{IndeterminateValueError, TriState};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("shape opcode must not be empty")]
    EmptyOpcode,
    #[error("`{opcode}` is a boolean reporter but is not marked as a reporter")]
    BooleanWithoutReporter { opcode: String },
}

/// The shape of one block opcode.
///
/// Records are immutable. A different shape for the same opcode is a new
/// record, swapped in through the registry builder.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShapeRecord {
    opcode: String,
    flags: ShapeFlags,
}

impl ShapeRecord {
    pub fn new(opcode: impl Into<String>, flags: ShapeFlags) -> Result<Self, ShapeError> {
        let opcode = opcode.into();
        if opcode.trim().is_empty() {
            return Err(ShapeError::EmptyOpcode);
        }
        Ok(Self { opcode, flags })
    }

    #[must_use]
    pub fn opcode(&self) -> &str {
        &self.opcode
    }

    #[must_use]
    pub const fn flags(&self) -> ShapeFlags {
        self.flags
    }

    #[must_use]
    pub const fn flag(&self, flag: ShapeFlag) -> TriState {
        self.flags.get(flag)
    }

    /// Read a flag as a `bool`, failing if it is indeterminate.
    pub fn require(&self, flag: ShapeFlag) -> Result<bool, IndeterminateValueError> {
        self.flag(flag)
            .as_bool()
            .map_err(|_| IndeterminateValueError::Flag { flag })
    }

    #[must_use]
    pub const fn is_stack(&self) -> TriState {
        self.flags.get(ShapeFlag::Stack)
    }

    #[must_use]
    pub const fn is_c_mouth(&self) -> TriState {
        self.flags.get(ShapeFlag::CMouth)
    }

    #[must_use]
    pub const fn is_cap(&self) -> TriState {
        self.flags.get(ShapeFlag::Cap)
    }

    #[must_use]
    pub const fn is_hat(&self) -> TriState {
        self.flags.get(ShapeFlag::Hat)
    }

    #[must_use]
    pub const fn is_reporter(&self) -> TriState {
        self.flags.get(ShapeFlag::Reporter)
    }

    #[must_use]
    pub const fn is_boolean(&self) -> TriState {
        self.flags.get(ShapeFlag::Boolean)
    }

    #[must_use]
    pub const fn is_menu(&self) -> TriState {
        self.flags.get(ShapeFlag::Menu)
    }

    /// Whether another block may be attached directly below this one.
    ///
    /// Neither a cap nor a reporter takes a block underneath. When either of
    /// those flags is indeterminate the answer depends on context the record
    /// does not have, so this fails instead of guessing.
    pub fn attachable(&self) -> Result<bool, IndeterminateValueError> {
        let cap = self.require(ShapeFlag::Cap)?;
        let reporter = self.require(ShapeFlag::Reporter)?;
        Ok(!cap && !reporter)
    }

    /// Everything before the first `_` of the opcode (`motion`, `looks`, ...).
    #[must_use]
    pub fn category(&self) -> &str {
        self.opcode
            .split_once('_')
            .map_or(self.opcode.as_str(), |(prefix, _)| prefix)
    }

    /// Check catalogue-authoring invariants.
    pub fn validate(&self) -> Result<(), ShapeError> {
        if self.is_boolean().is_true() && !self.is_reporter().is_true() {
            return Err(ShapeError::BooleanWithoutReporter {
                opcode: self.opcode.clone(),
            });
        }
        Ok(())
    }
}

impl Serialize for ShapeRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ShapeRecord", 9)?;
        state.serialize_field("opcode", &self.opcode)?;
        state.serialize_field("category", self.category())?;
        state.serialize_field("is_stack", &self.is_stack())?;
        state.serialize_field("is_c_mouth", &self.is_c_mouth())?;
        state.serialize_field("is_cap", &self.is_cap())?;
        state.serialize_field("is_hat", &self.is_hat())?;
        state.serialize_field("is_reporter", &self.is_reporter())?;
        state.serialize_field("is_boolean", &self.is_boolean())?;
        state.serialize_field("is_menu", &self.is_menu())?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::{ShapeError, ShapeRecord};
    use crate::{IndeterminateValueError, ShapeFlag, ShapeFlags, TriState};

    fn record(opcode: &str, flags: ShapeFlags) -> ShapeRecord {
        ShapeRecord::new(opcode, flags).unwrap()
    }

    #[test]
    fn forever_is_a_cap_and_not_attachable() {
        let forever = record(
            "control_forever",
            ShapeFlags::NONE.c_mouth().stack().cap(),
        );
        assert_eq!(forever.attachable(), Ok(false));
    }

    #[test]
    fn plain_stack_block_is_attachable() {
        let move_steps = record("motion_movesteps", ShapeFlags::NONE.stack());
        assert_eq!(move_steps.attachable(), Ok(true));
        assert_eq!(move_steps.is_cap(), TriState::False);
        assert_eq!(move_steps.is_hat(), TriState::False);
    }

    #[test]
    fn stop_block_attachability_is_indeterminate() {
        let stop = record(
            "control_stop",
            ShapeFlags::NONE.stack().with_cap(TriState::Indeterminate),
        );
        assert_eq!(
            stop.attachable(),
            Err(IndeterminateValueError::Flag {
                flag: ShapeFlag::Cap
            })
        );
    }

    #[test]
    fn indeterminate_reporter_also_blocks_attachable() {
        let odd = record(
            "ext_odd",
            ShapeFlags::NONE.with(ShapeFlag::Reporter, TriState::Indeterminate),
        );
        let err = odd.attachable().unwrap_err();
        assert_eq!(err.flag(), Some(ShapeFlag::Reporter));
    }

    #[test]
    fn reporters_are_not_attachable() {
        let x = record("motion_xposition", ShapeFlags::NONE.reporter());
        assert_eq!(x.attachable(), Ok(false));
    }

    #[test]
    fn all_false_record_is_valid_and_attachable() {
        let beep = record("ev3_beep", ShapeFlags::NONE);
        assert!(beep.validate().is_ok());
        assert_eq!(beep.attachable(), Ok(true));
    }

    #[test]
    fn empty_opcode_is_rejected() {
        assert_eq!(
            ShapeRecord::new("  ", ShapeFlags::NONE),
            Err(ShapeError::EmptyOpcode)
        );
    }

    #[test]
    fn boolean_must_be_reporter() {
        let bad = record("operator_gt", ShapeFlags::NONE.boolean());
        assert!(matches!(
            bad.validate(),
            Err(ShapeError::BooleanWithoutReporter { .. })
        ));
        let good = record("operator_gt", ShapeFlags::NONE.reporter().boolean());
        assert!(good.validate().is_ok());
    }

    #[test]
    fn equality_covers_opcode_and_flags() {
        let a = record("looks_show", ShapeFlags::NONE.stack());
        assert_eq!(a, record("looks_show", ShapeFlags::NONE.stack()));
        assert_ne!(a, record("looks_hide", ShapeFlags::NONE.stack()));
        assert_ne!(a, record("looks_show", ShapeFlags::NONE));
    }

    #[test]
    fn category_is_opcode_prefix() {
        assert_eq!(record("motion_goto_menu", ShapeFlags::NONE).category(), "motion");
        assert_eq!(record("note", ShapeFlags::NONE).category(), "note");
    }

    #[test]
    fn serializes_flags_by_name() {
        let stop = record(
            "control_stop",
            ShapeFlags::NONE.stack().with_cap(TriState::Indeterminate),
        );
        let json = serde_json::to_value(&stop).unwrap();
        assert_eq!(json["opcode"], "control_stop");
        assert_eq!(json["category"], "control");
        assert_eq!(json["is_stack"], true);
        assert_eq!(json["is_cap"], "indeterminate");
        assert_eq!(json["is_menu"], false);
    }
}
