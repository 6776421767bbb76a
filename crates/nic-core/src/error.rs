//! # Error Types
//!
//! Classification never fails: malformed, empty, or oversized input is the
//! regular `Rejected` outcome. Errors exist only at the edges of the API:
//! building a validated identifier from rejected input, and parsing labels
//! supplied by a user or a config file.

use thiserror::Error;

/// Top-level error type for NIC validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NicError {
    /// Input was rejected by the automaton.
    #[error("not a valid NIC: {input:?} (automaton halted in {final_state})")]
    Rejected {
        /// The rejected input.
        input: String,
        /// Label of the state the automaton ended in.
        final_state: String,
    },

    /// A state label did not name any automaton state.
    #[error("unknown automaton state label: {0:?}")]
    UnknownState(String),

    /// An expected-outcome token was not `old`, `new`, or `reject`.
    #[error("unknown classification {0:?}; expected one of old, new, reject")]
    UnknownFormat(String),
}
