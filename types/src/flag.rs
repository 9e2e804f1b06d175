//! The seven structural flags of a block shape.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::tristate::TriState;

/// Names one structural flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeFlag {
    /// Sits in a vertical stack of commands (`move (10) steps`).
    Stack,
    /// Encloses a nested sequence of blocks (`repeat`).
    CMouth,
    /// Nothing may be attached below it (`forever`).
    Cap,
    /// Starts a stack; nothing above it (`when flag clicked`).
    Hat,
    Reporter,
    /// Reports a two-valued result. Always a reporter as well.
    Boolean,
    /// Shadow reporter that only feeds a fixed option into another input.
    Menu,
}

const FLAG_PARSE_VALUES: &[&str] = &[
    "stack",
    "c_mouth",
    "cap",
    "hat",
    "reporter",
    "boolean",
    "menu",
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "invalid shape flag '{raw}'; expected one of: {expected:?}",
    expected = FLAG_PARSE_VALUES
)]
pub struct FlagParseError {
    raw: String,
}

impl FlagParseError {
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }
}

impl ShapeFlag {
    pub const ALL: [ShapeFlag; 7] = [
        ShapeFlag::Stack,
        ShapeFlag::CMouth,
        ShapeFlag::Cap,
        ShapeFlag::Hat,
        ShapeFlag::Reporter,
        ShapeFlag::Boolean,
        ShapeFlag::Menu,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ShapeFlag::Stack => "stack",
            ShapeFlag::CMouth => "c_mouth",
            ShapeFlag::Cap => "cap",
            ShapeFlag::Hat => "hat",
            ShapeFlag::Reporter => "reporter",
            ShapeFlag::Boolean => "boolean",
            ShapeFlag::Menu => "menu",
        }
    }
}

impl fmt::Display for ShapeFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShapeFlag {
    type Err = FlagParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        let needle = needle.strip_prefix("is_").unwrap_or(&needle);
        ShapeFlag::ALL
            .into_iter()
            .find(|flag| flag.as_str() == needle)
            .ok_or_else(|| FlagParseError { raw: s.to_string() })
    }
}

/// The values of all seven flags. Every flag starts out `False`.
///
/// Built with `const` setters so catalogue tables can be declared as
/// statics:
///
/// ```
/// use blockshape_types::{ShapeFlag, ShapeFlags, TriState};
///
/// const STOP: ShapeFlags = ShapeFlags::NONE.stack().with_cap(TriState::Indeterminate);
/// assert!(STOP.get(ShapeFlag::Cap).is_indeterminate());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ShapeFlags {
    stack: TriState,
    c_mouth: TriState,
    cap: TriState,
    hat: TriState,
    reporter: TriState,
    boolean: TriState,
    menu: TriState,
}

impl ShapeFlags {
    pub const NONE: ShapeFlags = ShapeFlags {
        stack: TriState::False,
        c_mouth: TriState::False,
        cap: TriState::False,
        hat: TriState::False,
        reporter: TriState::False,
        boolean: TriState::False,
        menu: TriState::False,
    };

    #[must_use]
    pub const fn get(&self, flag: ShapeFlag) -> TriState {
        match flag {
            ShapeFlag::Stack => self.stack,
            ShapeFlag::CMouth => self.c_mouth,
            ShapeFlag::Cap => self.cap,
            ShapeFlag::Hat => self.hat,
            ShapeFlag::Reporter => self.reporter,
            ShapeFlag::Boolean => self.boolean,
            ShapeFlag::Menu => self.menu,
        }
    }

    #[must_use]
    pub const fn with(mut self, flag: ShapeFlag, value: TriState) -> Self {
        match flag {
            ShapeFlag::Stack => self.stack = value,
            ShapeFlag::CMouth => self.c_mouth = value,
            ShapeFlag::Cap => self.cap = value,
            ShapeFlag::Hat => self.hat = value,
            ShapeFlag::Reporter => self.reporter = value,
            ShapeFlag::Boolean => self.boolean = value,
            ShapeFlag::Menu => self.menu = value,
        }
        self
    }

    #[must_use]
    pub const fn stack(self) -> Self {
        self.with(ShapeFlag::Stack, TriState::True)
    }

    #[must_use]
    pub const fn c_mouth(self) -> Self {
        self.with(ShapeFlag::CMouth, TriState::True)
    }

    #[must_use]
    pub const fn cap(self) -> Self {
        self.with(ShapeFlag::Cap, TriState::True)
    }

    #[must_use]
    pub const fn with_cap(self, value: TriState) -> Self {
        self.with(ShapeFlag::Cap, value)
    }

    #[must_use]
    pub const fn hat(self) -> Self {
        self.with(ShapeFlag::Hat, TriState::True)
    }

    #[must_use]
    pub const fn reporter(self) -> Self {
        self.with(ShapeFlag::Reporter, TriState::True)
    }

    #[must_use]
    pub const fn boolean(self) -> Self {
        self.with(ShapeFlag::Boolean, TriState::True)
    }

    #[must_use]
    pub const fn menu(self) -> Self {
        self.with(ShapeFlag::Menu, TriState::True)
    }

    /// Flags paired with their values, in [`ShapeFlag::ALL`] order.
    pub fn entries(self) -> impl Iterator<Item = (ShapeFlag, TriState)> {
        ShapeFlag::ALL
            .into_iter()
            .map(move |flag| (flag, self.get(flag)))
    }
}
