//! # nic-core: Foundational Types for NIC Validation
//!
//! Leaf crate of the workspace. Defines the vocabulary shared by the
//! automaton engine and the command-line driver:
//!
//! - [`Symbol`]: the three-way classification of a single input character
//!   (digit, old-format terminator, anything else). The automaton never looks
//!   at raw characters; every transition is driven by a `Symbol`.
//! - [`Classification`]: the end-of-input verdict: old format accepted, new
//!   format accepted, or rejected.
//! - [`NicFormat`]: which of the two accepted formats a value has.
//! - [`NicError`]: structured errors for the fallible edges of the API
//!   (validated construction, label parsing). Classification itself never
//!   fails.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `nic-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - Public data types derive `Debug`, `Clone`, and `Serialize`/`Deserialize`.

pub mod classification;
pub mod error;
pub mod symbol;

pub use classification::{Classification, NicFormat};
pub use error::NicError;
pub use symbol::{Symbol, OLD_TERMINATORS};
