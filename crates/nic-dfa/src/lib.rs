//! # nic-dfa: NIC Automaton Engine
//!
//! A deterministic finite automaton that recognizes the two Sri Lankan NIC
//! layouts:
//!
//! - **Old format**: nine digits followed by `V` or `X` (`991234567V`).
//! - **New format**: twelve digits (`200012345678`).
//!
//! ## Automaton
//!
//! ```text
//!        [0-9]      [0-9]            [0-9]
//!   q0 ───────▶ q1 ───────▶ ... ───────▶ q9 ──[V,X]──▶ q10  (accept: old)
//!                                        │
//!                                        └──[0-9]──▶ q11 ──[0-9]──▶ q12 ──[0-9]──▶ q13  (accept: new)
//!
//!   every other (state, symbol) pair ──▶ qReject   (absorbing)
//! ```
//!
//! `q9` is the only branch point. Both accepting states have only `qReject`
//! successors, so trailing characters of any kind reject. Length is never
//! counted; it falls out of how many transitions reach an accepting state.
//!
//! ## Modules
//!
//! - [`state`]: the closed [`State`] enum and its total transition function.
//! - [`engine`]: [`step`], [`run`], [`classify`] and the observed variants.
//! - [`trace`]: [`TransitionObserver`] and the recorders built on it.
//! - [`definition`]: the formal `(Q, Σ, δ, q0, F)` view and Graphviz output.
//! - [`nic`]: the [`Nic`] identifier, valid by construction.
//!
//! ## Design
//!
//! There are no string-typed state names. `State` and
//! [`Symbol`](nic_core::Symbol) are closed enums and the transition function
//! is an exhaustive `match` over both, so an undefined transition is a
//! compile error rather than a runtime fallback.

pub mod definition;
pub mod engine;
pub mod nic;
pub mod state;
pub mod trace;

// ─── Engine re-exports ──────────────────────────────────────────────

pub use engine::{classify, classify_chars, classify_observed, run, run_observed, step};
pub use state::State;

// ─── Trace re-exports ───────────────────────────────────────────────

pub use trace::{trace, Trace, TraceRecorder, TracingObserver, Transition, TransitionObserver};

// ─── Definition re-exports ──────────────────────────────────────────

pub use definition::{AutomatonDefinition, TransitionRow};

// ─── Identifier re-exports ──────────────────────────────────────────

pub use nic::Nic;

pub use nic_core::{Classification, NicError, NicFormat, Symbol};
