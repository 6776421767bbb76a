//! # Classification Results
//!
//! The automaton reports one of three outcomes at end of input. Rejection is
//! a regular outcome, not an error.

use serde::{Deserialize, Serialize};

use crate::error::NicError;

/// The two accepted NIC layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NicFormat {
    /// Nine digits followed by `V` or `X`.
    Old,
    /// Twelve digits.
    New,
}

impl std::fmt::Display for NicFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Old => "Old NIC",
            Self::New => "New NIC",
        };
        f.write_str(s)
    }
}

/// Verdict produced from the final automaton state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    /// Input is a well-formed old-format NIC.
    OldFormatAccepted,
    /// Input is a well-formed new-format NIC.
    NewFormatAccepted,
    /// Input matches neither format.
    Rejected,
}

impl Classification {
    /// Whether the input was accepted in either format.
    pub fn is_accepted(&self) -> bool {
        !matches!(self, Self::Rejected)
    }

    /// The accepted format, if any.
    pub fn format(&self) -> Option<NicFormat> {
        match self {
            Self::OldFormatAccepted => Some(NicFormat::Old),
            Self::NewFormatAccepted => Some(NicFormat::New),
            Self::Rejected => None,
        }
    }

    /// Short lowercase token, also accepted by [`str::parse`].
    pub fn token(&self) -> &'static str {
        match self {
            Self::OldFormatAccepted => "old",
            Self::NewFormatAccepted => "new",
            Self::Rejected => "reject",
        }
    }
}

impl From<NicFormat> for Classification {
    fn from(format: NicFormat) -> Self {
        match format {
            NicFormat::Old => Self::OldFormatAccepted,
            NicFormat::New => Self::NewFormatAccepted,
        }
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.format() {
            Some(format) => write!(f, "ACCEPT \u{2013} {format}"),
            None => f.write_str("REJECT"),
        }
    }
}

impl std::str::FromStr for Classification {
    type Err = NicError;

    /// Parses `old`, `new`, or `reject` (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "old" => Ok(Self::OldFormatAccepted),
            "new" => Ok(Self::NewFormatAccepted),
            "reject" | "rejected" => Ok(Self::Rejected),
            _ => Err(NicError::UnknownFormat(s.to_string())),
        }
    }
}
