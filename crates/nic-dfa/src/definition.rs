//! # Formal Definition
//!
//! The automaton as the tuple `M = (Q, Σ, δ, q0, F)`:
//!
//! - `Q`: [`State::ALL`]
//! - `Σ`: `{0,1,2,3,4,5,6,7,8,9,V,X}`
//! - `δ`: [`State::next`], tabulated here one row per state
//! - `q0`: [`State::Start`]
//! - `F`: `{q10, q13}`
//!
//! Recognized language: `L = Old ∪ New` where
//! `Old = { d1..d9 (V|X) }` and `New = { d1..d12 }`, `di ∈ {0-9}`.
//!
//! Everything here is derived from the transition function, so the
//! rendered table and diagram cannot drift from the engine.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use nic_core::{Symbol, OLD_TERMINATORS};

use crate::state::State;

/// Successors of one state, one per symbol category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionRow {
    /// Source state.
    pub state: State,
    /// Successor on an ASCII digit.
    pub digit: State,
    /// Successor on `V` or `X`.
    pub old_terminator: State,
    /// Successor on any other character.
    pub other: State,
}

impl TransitionRow {
    /// Tabulate the row for `state`.
    pub fn for_state(state: State) -> Self {
        Self {
            state,
            digit: state.next(Symbol::Digit),
            old_terminator: state.next(Symbol::OldTerminator),
            other: state.next(Symbol::Other),
        }
    }

    /// Successor on `symbol`.
    pub fn successor(&self, symbol: Symbol) -> State {
        match symbol {
            Symbol::Digit => self.digit,
            Symbol::OldTerminator => self.old_terminator,
            Symbol::Other => self.other,
        }
    }
}

/// Serializable snapshot of the whole automaton.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutomatonDefinition {
    /// The formal input alphabet.
    pub alphabet: Vec<char>,
    /// Every state.
    pub states: Vec<State>,
    /// Initial state.
    pub start_state: State,
    /// Accepting states.
    pub accepting_states: Vec<State>,
    /// The dead state.
    pub dead_state: State,
    /// `δ`, one row per state.
    pub transitions: Vec<TransitionRow>,
}

impl AutomatonDefinition {
    /// Build the definition from the transition function.
    pub fn new() -> Self {
        Self {
            alphabet: alphabet(),
            states: states(),
            start_state: start_state(),
            accepting_states: accepting_states(),
            dead_state: State::Reject,
            transitions: transition_table(),
        }
    }

    /// Plain-text rendering: tuple components followed by the table.
    pub fn to_table(&self) -> String {
        let mut out = String::new();
        let alphabet: Vec<String> = self.alphabet.iter().map(char::to_string).collect();
        let states: Vec<&str> = self.states.iter().map(State::label).collect();
        let accepting: Vec<&str> = self.accepting_states.iter().map(State::label).collect();

        let _ = writeln!(out, "Alphabet (\u{03a3}): {{{}}}", alphabet.join(","));
        let _ = writeln!(out, "States (Q): {}", states.join(", "));
        let _ = writeln!(out, "Start State: {}", self.start_state);
        let _ = writeln!(out, "Accepting States (F): {{{}}}", accepting.join(", "));
        let _ = writeln!(out, "Dead State: {}", self.dead_state);
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "{:<9} {:<9} {:<9} {:<9} {}",
            "State",
            Symbol::Digit.column_label(),
            Symbol::OldTerminator.column_label(),
            Symbol::Other.column_label(),
            "Meaning"
        );
        let _ = writeln!(out, "{}", "-".repeat(72));
        for row in &self.transitions {
            let _ = writeln!(
                out,
                "{:<9} {:<9} {:<9} {:<9} {}",
                row.state.label(),
                row.digit.label(),
                row.old_terminator.label(),
                row.other.label(),
                row.state.description()
            );
        }
        out
    }

    /// Graphviz DOT rendering (`dot -Tsvg`).
    ///
    /// Edges into the dead state are omitted except the self-loop, which
    /// keeps the diagram readable; every omitted edge goes to `qReject`.
    pub fn to_dot(&self) -> String {
        let mut out = String::new();
        out.push_str("digraph nic_dfa {\n");
        out.push_str("  rankdir=LR;\n");
        out.push_str("  node [shape=circle];\n");
        out.push_str("  __start [shape=point];\n");
        for state in &self.accepting_states {
            let _ = writeln!(out, "  \"{state}\" [shape=doublecircle];");
        }
        let _ = writeln!(out, "  \"{}\" [style=dashed];", self.dead_state);
        let _ = writeln!(out, "  __start -> \"{}\";", self.start_state);

        for row in &self.transitions {
            for symbol in Symbol::ALL {
                let to = row.successor(symbol);
                if to.is_dead() && !row.state.is_dead() {
                    continue;
                }
                if row.state.is_dead() && symbol != Symbol::Digit {
                    continue;
                }
                let label = if row.state.is_dead() {
                    "any"
                } else {
                    symbol.column_label()
                };
                let _ = writeln!(out, "  \"{}\" -> \"{}\" [label=\"{}\"];", row.state, to, label);
            }
        }
        out.push_str("}\n");
        out
    }
}

impl Default for AutomatonDefinition {
    fn default() -> Self {
        Self::new()
    }
}

/// `Σ`: the ten ASCII digits and the two terminators.
pub fn alphabet() -> Vec<char> {
    ('0'..='9').chain(OLD_TERMINATORS).collect()
}

/// `Q`, in label order.
pub fn states() -> Vec<State> {
    State::ALL.to_vec()
}

/// `q0`.
pub const fn start_state() -> State {
    State::Start
}

/// `F`.
pub fn accepting_states() -> Vec<State> {
    State::ALL.iter().copied().filter(State::is_accepting).collect()
}

/// `δ`, tabulated.
pub fn transition_table() -> Vec<TransitionRow> {
    State::ALL.iter().copied().map(TransitionRow::for_state).collect()
}
