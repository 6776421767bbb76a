//! # Step Tracing
//!
//! Observers receive one [`Transition`] per input character from
//! [`run_observed`](crate::engine::run_observed). The engine itself formats
//! nothing; rendering is left to the observer or to [`Trace`]'s `Display`.
//!
//! - [`TraceRecorder`] keeps every transition in order.
//! - [`TracingObserver`] emits a `tracing` event per transition.
//! - Any `FnMut(&Transition)` closure is an observer.

use serde::{Deserialize, Serialize};

use nic_core::{Classification, Symbol};

use crate::engine::run_observed;
use crate::state::State;

/// One application of the transition function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    /// Zero-based character index in the input.
    pub position: usize,
    /// The character consumed.
    pub character: char,
    /// Its symbol category.
    pub symbol: Symbol,
    /// State before the step.
    pub from: State,
    /// State after the step.
    pub to: State,
}

impl std::fmt::Display for Transition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Character '{}': {} \u{2192} {}",
            self.character, self.from, self.to
        )
    }
}

/// Receives transitions as the automaton runs.
pub trait TransitionObserver {
    /// Called once per input character, in order.
    fn on_transition(&mut self, transition: &Transition);
}

impl<F> TransitionObserver for F
where
    F: FnMut(&Transition),
{
    fn on_transition(&mut self, transition: &Transition) {
        self(transition)
    }
}

/// Collects transitions in order.
#[derive(Debug, Clone, Default)]
pub struct TraceRecorder {
    transitions: Vec<Transition>,
}

impl TraceRecorder {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Transitions recorded so far.
    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    /// Consume the recorder, returning the recorded transitions.
    pub fn into_transitions(self) -> Vec<Transition> {
        self.transitions
    }
}

impl TransitionObserver for TraceRecorder {
    fn on_transition(&mut self, transition: &Transition) {
        self.transitions.push(*transition);
    }
}

/// Logs each transition at TRACE level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl TransitionObserver for TracingObserver {
    fn on_transition(&mut self, t: &Transition) {
        tracing::trace!(
            position = t.position,
            character = %t.character,
            symbol = %t.symbol,
            from = %t.from,
            to = %t.to,
            "transition"
        );
    }
}

/// A complete run: the input, every transition, and the outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trace {
    /// The input that was run.
    pub input: String,
    /// Ordered transitions, one per input character.
    pub transitions: Vec<Transition>,
    /// State after the last character.
    pub final_state: State,
    /// Verdict derived from `final_state`.
    pub classification: Classification,
}

impl Trace {
    /// Number of steps taken.
    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    /// Whether no steps were taken (empty input).
    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// Position of the first character that sent the automaton to
    /// `qReject`, if any.
    pub fn rejected_at(&self) -> Option<usize> {
        self.transitions
            .iter()
            .find(|t| !t.from.is_dead() && t.to.is_dead())
            .map(|t| t.position)
    }

    /// The visited states, starting with `q0`.
    pub fn states(&self) -> Vec<State> {
        std::iter::once(State::Start)
            .chain(self.transitions.iter().map(|t| t.to))
            .collect()
    }
}

impl std::fmt::Display for Trace {
    /// Path notation: `q0 →[9] q1 →[9] q2 … →[V] q10`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", State::Start)?;
        for t in &self.transitions {
            write!(f, " \u{2192}[{}] {}", t.character, t.to)?;
        }
        Ok(())
    }
}

/// Run `input` and record the full trace.
pub fn trace(input: &str) -> Trace {
    let mut recorder = TraceRecorder::new();
    let final_state = run_observed(input, &mut recorder);
    Trace {
        input: input.to_string(),
        transitions: recorder.into_transitions(),
        final_state,
        classification: final_state.classification(),
    }
}
