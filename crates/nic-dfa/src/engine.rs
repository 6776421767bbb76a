//! # Automaton Driver
//!
//! Runs the transition function over an input, one character at a time.
//! All entry points are pure: the only state is a local [`State`] that
//! starts at `q0` and is discarded when the call returns. An input of `n`
//! characters always takes exactly `n` steps.

use nic_core::{Classification, Symbol};

use crate::state::State;
use crate::trace::{Transition, TransitionObserver};

/// Apply one transition: classify `c` and move from `state`.
///
/// This is the primitive trace observers are built on; [`classify`] is a
/// fold of `step` over the input starting at [`State::Start`].
pub fn step(state: State, c: char) -> State {
    state.next(Symbol::of(c))
}

/// Final state reached on `input`.
pub fn run(input: &str) -> State {
    input.chars().fold(State::Start, step)
}

/// Classify `input` as an old-format NIC, a new-format NIC, or neither.
///
/// Never fails. The empty string is rejected because `q0` is not accepting.
///
/// ```
/// use nic_dfa::{classify, Classification};
///
/// assert_eq!(classify("991234567V"), Classification::OldFormatAccepted);
/// assert_eq!(classify("200012345678"), Classification::NewFormatAccepted);
/// assert_eq!(classify("991234567VV"), Classification::Rejected);
/// ```
pub fn classify(input: &str) -> Classification {
    run(input).classification()
}

/// Classify an arbitrary character sequence.
pub fn classify_chars<I>(input: I) -> Classification
where
    I: IntoIterator<Item = char>,
{
    input
        .into_iter()
        .fold(State::Start, step)
        .classification()
}

/// Run `input`, reporting every transition to `observer`. Returns the final
/// state.
pub fn run_observed<O>(input: &str, observer: &mut O) -> State
where
    O: TransitionObserver + ?Sized,
{
    let mut state = State::Start;
    for (position, character) in input.chars().enumerate() {
        let symbol = Symbol::of(character);
        let next = state.next(symbol);
        observer.on_transition(&Transition {
            position,
            character,
            symbol,
            from: state,
            to: next,
        });
        state = next;
    }
    state
}

/// [`classify`] with an observer attached.
pub fn classify_observed<O>(input: &str, observer: &mut O) -> Classification
where
    O: TransitionObserver + ?Sized,
{
    run_observed(input, observer).classification()
}
