//! # Input Alphabet
//!
//! Every character fed to the automaton is first mapped to exactly one
//! [`Symbol`]. The mapping is total over `char`: anything that is not an
//! ASCII decimal digit or one of the two uppercase terminator letters falls
//! into [`Symbol::Other`].
//!
//! The automaton's formal alphabet is `{0,1,2,3,4,5,6,7,8,9,V,X}`. `Other`
//! is not part of that alphabet; it exists so that out-of-alphabet input has
//! a defined transition (into the dead state) instead of no transition.

use serde::{Deserialize, Serialize};

/// The two letters that terminate an old-format NIC. Uppercase only.
pub const OLD_TERMINATORS: [char; 2] = ['V', 'X'];

/// Category of a single input character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Symbol {
    /// ASCII decimal digit `0`-`9`.
    Digit,
    /// `V` or `X`.
    OldTerminator,
    /// Any other character.
    Other,
}

impl Symbol {
    /// All symbol categories, in transition-table column order.
    pub const ALL: [Symbol; 3] = [Self::Digit, Self::OldTerminator, Self::Other];

    /// Classify a character.
    ///
    /// Non-ASCII digits (e.g. Arabic-Indic or full-width numerals) and
    /// lowercase `v`/`x` are [`Symbol::Other`].
    pub const fn of(c: char) -> Self {
        match c {
            '0'..='9' => Self::Digit,
            'V' | 'X' => Self::OldTerminator,
            _ => Self::Other,
        }
    }

    /// Whether this symbol belongs to the formal alphabet.
    pub fn in_alphabet(&self) -> bool {
        !matches!(self, Self::Other)
    }

    /// Column heading used when rendering the transition table.
    pub fn column_label(&self) -> &'static str {
        match self {
            Self::Digit => "[0-9]",
            Self::OldTerminator => "[V,X]",
            Self::Other => "*",
        }
    }
}

impl From<char> for Symbol {
    fn from(c: char) -> Self {
        Self::of(c)
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Digit => "DIGIT",
            Self::OldTerminator => "OLD_TERMINATOR",
            Self::Other => "OTHER",
        };
        f.write_str(s)
    }
}
