//! Three-valued logic for shape flags.
//!
//! Some shape properties cannot be known from the opcode alone: a `stop`
//! block is a cap only for some of its menu options. [`TriState`] keeps that
//! third answer as a first-class value and refuses to be collapsed into a
//! `bool` without the caller handling it.

use std::fmt;
use std::ops::Not;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::flag::ShapeFlag;

/// A boolean that may also be "it depends".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "RawTriState", into = "RawTriState")]
pub enum TriState {
    True,
    #[default]
    False,
    /// Cannot be decided without more context than the opcode.
    Indeterminate,
}

/// Raised when an indeterminate value is collapsed into a `bool`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IndeterminateValueError {
    #[error("indeterminate value cannot be collapsed to a boolean")]
    Value,
    #[error("`{flag}` is indeterminate and cannot be collapsed to a boolean")]
    Flag { flag: ShapeFlag },
}

impl IndeterminateValueError {
    /// The flag that was being read, if the value came from a shape record.
    #[must_use]
    pub const fn flag(self) -> Option<ShapeFlag> {
        match self {
            IndeterminateValueError::Value => None,
            IndeterminateValueError::Flag { flag } => Some(flag),
        }
    }
}

const TRISTATE_PARSE_VALUES: &[&str] = &["true", "false", "indeterminate"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "invalid tri-state value '{raw}'; expected one of: {expected:?}",
    expected = TRISTATE_PARSE_VALUES
)]
pub struct TriStateParseError {
    raw: String,
}

impl TriStateParseError {
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }
}

impl TriState {
    /// Collapse into a `bool`.
    ///
    /// This is the only way out of the tri-valued world: `Indeterminate`
    /// never silently becomes either polarity.
    pub const fn as_bool(self) -> Result<bool, IndeterminateValueError> {
        match self {
            TriState::True => Ok(true),
            TriState::False => Ok(false),
            TriState::Indeterminate => Err(IndeterminateValueError::Value),
        }
    }

    #[must_use]
    pub const fn to_option(self) -> Option<bool> {
        match self {
            TriState::True => Some(true),
            TriState::False => Some(false),
            TriState::Indeterminate => None,
        }
    }

    #[must_use]
    pub const fn is_true(self) -> bool {
        matches!(self, TriState::True)
    }

    #[must_use]
    pub const fn is_false(self) -> bool {
        matches!(self, TriState::False)
    }

    #[must_use]
    pub const fn is_indeterminate(self) -> bool {
        matches!(self, TriState::Indeterminate)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            TriState::True => "true",
            TriState::False => "false",
            TriState::Indeterminate => "indeterminate",
        }
    }
}

impl From<bool> for TriState {
    fn from(value: bool) -> Self {
        if value { TriState::True } else { TriState::False }
    }
}

impl TryFrom<TriState> for bool {
    type Error = IndeterminateValueError;

    fn try_from(value: TriState) -> Result<Self, Self::Error> {
        value.as_bool()
    }
}

/// Kleene negation: indeterminate stays indeterminate.
impl Not for TriState {
    type Output = TriState;

    fn not(self) -> Self::Output {
        match self {
            TriState::True => TriState::False,
            TriState::False => TriState::True,
            TriState::Indeterminate => TriState::Indeterminate,
        }
    }
}

impl fmt::Display for TriState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TriState {
    type Err = TriStateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "true" => Ok(TriState::True),
            "false" => Ok(TriState::False),
            "indeterminate" => Ok(TriState::Indeterminate),
            _ => Err(TriStateParseError { raw: s.to_string() }),
        }
    }
}

/// Wire form: a plain bool, or a word for the third state.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RawTriState {
    Bool(bool),
    Word(String),
}

impl TryFrom<RawTriState> for TriState {
    type Error = TriStateParseError;

    fn try_from(raw: RawTriState) -> Result<Self, Self::Error> {
        match raw {
            RawTriState::Bool(value) => Ok(value.into()),
            RawTriState::Word(word) => word.parse(),
        }
    }
}

impl From<TriState> for RawTriState {
    fn from(value: TriState) -> Self {
        match value.to_option() {
            Some(value) => RawTriState::Bool(value),
            None => RawTriState::Word(TriState::Indeterminate.as_str().to_string()),
        }
    }
}
