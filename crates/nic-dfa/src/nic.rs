//! # Validated NIC Identifier
//!
//! [`Nic`] holds a string the automaton accepted. The only ways to obtain
//! one are [`Nic::new`] and deserialization, and both run the automaton, so
//! a `Nic` in hand is always well-formed.

use serde::{Deserialize, Serialize};

use nic_core::{NicError, NicFormat};

use crate::engine::run;

/// A Sri Lankan NIC number in either accepted format.
///
/// The value is stored exactly as given: no trimming, no case folding.
/// Lowercase `v`/`x` terminators are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Nic {
    value: String,
    format: NicFormat,
}

impl Serialize for Nic {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.value)
    }
}

impl<'de> Deserialize<'de> for Nic {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}

impl Nic {
    /// Validate `value` and wrap it.
    ///
    /// # Errors
    ///
    /// Returns [`NicError::Rejected`] with the final automaton state if the
    /// input matches neither format.
    pub fn new(value: impl Into<String>) -> Result<Self, NicError> {
        let value = value.into();
        let final_state = run(&value);
        match final_state.classification().format() {
            Some(format) => Ok(Self { value, format }),
            None => Err(NicError::Rejected {
                input: value,
                final_state: final_state.to_string(),
            }),
        }
    }

    /// The NIC string as given.
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Which format the value has.
    pub fn format(&self) -> NicFormat {
        self.format
    }

    /// The digit portion: nine digits for the old format, twelve for the new.
    pub fn digits(&self) -> &str {
        match self.format {
            NicFormat::Old => &self.value[..9],
            NicFormat::New => &self.value,
        }
    }

    /// The trailing `V` or `X` of an old-format value.
    pub fn terminator(&self) -> Option<char> {
        match self.format {
            NicFormat::Old => self.value.chars().last(),
            NicFormat::New => None,
        }
    }

    /// Consume the identifier, returning the inner string.
    pub fn into_inner(self) -> String {
        self.value
    }
}

impl std::str::FromStr for Nic {
    type Err = NicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Nic {
    type Error = NicError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl AsRef<str> for Nic {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for Nic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}
