//! # Automaton States
//!
//! Fifteen states: the start state `q0`, nine digit-counting states
//! `q1`..`q9`, the old-format accepting state `q10`, two new-format
//! continuation states `q11`/`q12`, the new-format accepting state `q13`,
//! and the absorbing dead state `qReject`.
//!
//! ## Transition Table
//!
//! ```text
//! State      [0-9]      [V,X]      *
//! ─────────  ─────────  ─────────  ───────
//! q0         q1         qReject    qReject
//! q1..q7     q2..q8     qReject    qReject
//! q8         q9         qReject    qReject
//! q9         q11        q10        qReject
//! q10        qReject    qReject    qReject
//! q11        q12        qReject    qReject
//! q12        q13        qReject    qReject
//! q13        qReject    qReject    qReject
//! qReject    qReject    qReject    qReject
//! ```

use serde::{Deserialize, Serialize};

use nic_core::{Classification, NicError, Symbol};

/// A state of the NIC automaton.
///
/// Variants are named by role; [`Display`](std::fmt::Display) renders the
/// conventional `q0`..`q13` / `qReject` labels.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[repr(u8)]
pub enum State {
    /// `q0`: nothing consumed yet.
    #[default]
    #[serde(rename = "q0")]
    Start = 0,
    /// `q1`: one digit.
    #[serde(rename = "q1")]
    D1 = 1,
    /// `q2`: two digits.
    #[serde(rename = "q2")]
    D2 = 2,
    /// `q3`: three digits.
    #[serde(rename = "q3")]
    D3 = 3,
    /// `q4`: four digits.
    #[serde(rename = "q4")]
    D4 = 4,
    /// `q5`: five digits.
    #[serde(rename = "q5")]
    D5 = 5,
    /// `q6`: six digits.
    #[serde(rename = "q6")]
    D6 = 6,
    /// `q7`: seven digits.
    #[serde(rename = "q7")]
    D7 = 7,
    /// `q8`: eight digits.
    #[serde(rename = "q8")]
    D8 = 8,
    /// `q9`: nine digits. The only branch point.
    #[serde(rename = "q9")]
    D9Branch = 9,
    /// `q10`: nine digits and a terminator. Accepting (old format).
    #[serde(rename = "q10")]
    OldAccept = 10,
    /// `q11`: ten digits.
    #[serde(rename = "q11")]
    D10 = 11,
    /// `q12`: eleven digits.
    #[serde(rename = "q12")]
    D11 = 12,
    /// `q13`: twelve digits. Accepting (new format).
    #[serde(rename = "q13")]
    NewAccept = 13,
    /// `qReject`: dead state.
    #[serde(rename = "qReject")]
    Reject = 14,
}

impl State {
    /// All states, in label order with `qReject` last.
    pub const ALL: [State; 15] = [
        Self::Start,
        Self::D1,
        Self::D2,
        Self::D3,
        Self::D4,
        Self::D5,
        Self::D6,
        Self::D7,
        Self::D8,
        Self::D9Branch,
        Self::OldAccept,
        Self::D10,
        Self::D11,
        Self::NewAccept,
        Self::Reject,
    ];

    /// Total number of states.
    pub const COUNT: usize = 15;

    /// The successor of this state on `symbol`.
    ///
    /// Every arm is spelled out per state so that adding a state or a symbol
    /// category fails to compile until its row is written.
    pub const fn next(self, symbol: Symbol) -> State {
        use Symbol::{Digit, OldTerminator, Other};

        match self {
            Self::Start => match symbol {
                Digit => Self::D1,
                OldTerminator | Other => Self::Reject,
            },
            Self::D1 => match symbol {
                Digit => Self::D2,
                OldTerminator | Other => Self::Reject,
            },
            Self::D2 => match symbol {
                Digit => Self::D3,
                OldTerminator | Other => Self::Reject,
            },
            Self::D3 => match symbol {
                Digit => Self::D4,
                OldTerminator | Other => Self::Reject,
            },
            Self::D4 => match symbol {
                Digit => Self::D5,
                OldTerminator | Other => Self::Reject,
            },
            Self::D5 => match symbol {
                Digit => Self::D6,
                OldTerminator | Other => Self::Reject,
            },
            Self::D6 => match symbol {
                Digit => Self::D7,
                OldTerminator | Other => Self::Reject,
            },
            Self::D7 => match symbol {
                Digit => Self::D8,
                OldTerminator | Other => Self::Reject,
            },
            Self::D8 => match symbol {
                Digit => Self::D9Branch,
                OldTerminator | Other => Self::Reject,
            },
            Self::D9Branch => match symbol {
                Digit => Self::D10,
                OldTerminator => Self::OldAccept,
                Other => Self::Reject,
            },
            Self::OldAccept => match symbol {
                Digit | OldTerminator | Other => Self::Reject,
            },
            Self::D10 => match symbol {
                Digit => Self::D11,
                OldTerminator | Other => Self::Reject,
            },
            Self::D11 => match symbol {
                Digit => Self::NewAccept,
                OldTerminator | Other => Self::Reject,
            },
            Self::NewAccept => match symbol {
                Digit | OldTerminator | Other => Self::Reject,
            },
            Self::Reject => match symbol {
                Digit | OldTerminator | Other => Self::Reject,
            },
        }
    }

    /// Map a final state to its verdict.
    pub fn classification(&self) -> Classification {
        match self {
            Self::OldAccept => Classification::OldFormatAccepted,
            Self::NewAccept => Classification::NewFormatAccepted,
            _ => Classification::Rejected,
        }
    }

    /// Whether this is one of the two accepting states.
    pub fn is_accepting(&self) -> bool {
        matches!(self, Self::OldAccept | Self::NewAccept)
    }

    /// Whether this is the absorbing dead state.
    pub fn is_dead(&self) -> bool {
        matches!(self, Self::Reject)
    }

    /// Conventional label (`q0`..`q13`, `qReject`).
    pub fn label(&self) -> &'static str {
        match self {
            Self::Start => "q0",
            Self::D1 => "q1",
            Self::D2 => "q2",
            Self::D3 => "q3",
            Self::D4 => "q4",
            Self::D5 => "q5",
            Self::D6 => "q6",
            Self::D7 => "q7",
            Self::D8 => "q8",
            Self::D9Branch => "q9",
            Self::OldAccept => "q10",
            Self::D10 => "q11",
            Self::D11 => "q12",
            Self::NewAccept => "q13",
            Self::Reject => "qReject",
        }
    }

    /// One-line description of what reaching this state means.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Start => "Initial state",
            Self::D1 => "After 1st digit",
            Self::D2 => "After 2nd digit",
            Self::D3 => "After 3rd digit",
            Self::D4 => "After 4th digit",
            Self::D5 => "After 5th digit",
            Self::D6 => "After 6th digit",
            Self::D7 => "After 7th digit",
            Self::D8 => "After 8th digit",
            Self::D9Branch => "After 9th digit (branch: V/X or 10th digit)",
            Self::OldAccept => "Old NIC complete (9 digits + V/X)",
            Self::D10 => "After 10th digit (new NIC path)",
            Self::D11 => "After 11th digit (new NIC path)",
            Self::NewAccept => "New NIC complete (12 digits)",
            Self::Reject => "Dead state",
        }
    }
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for State {
    type Err = NicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|state| state.label() == s)
            .ok_or_else(|| NicError::UnknownState(s.to_string()))
    }
}

// ─── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── Table rows ───────────────────────────────────────────────────

    #[test]
    fn start_accepts_only_digits() {
        assert_eq!(State::Start.next(Symbol::Digit), State::D1);
        assert_eq!(State::Start.next(Symbol::OldTerminator), State::Reject);
        assert_eq!(State::Start.next(Symbol::Other), State::Reject);
    }

    #[test]
    fn counting_states_advance_by_one_on_digit() {
        let chain = [
            State::Start,
            State::D1,
            State::D2,
            State::D3,
            State::D4,
            State::D5,
            State::D6,
            State::D7,
            State::D8,
            State::D9Branch,
        ];
        for pair in chain.windows(2) {
            assert_eq!(pair[0].next(Symbol::Digit), pair[1], "from {}", pair[0]);
            assert_eq!(pair[0].next(Symbol::OldTerminator), State::Reject);
            assert_eq!(pair[0].next(Symbol::Other), State::Reject);
        }
    }

    #[test]
    fn branch_state_splits_on_digit_and_terminator() {
        assert_eq!(State::D9Branch.next(Symbol::Digit), State::D10);
        assert_eq!(State::D9Branch.next(Symbol::OldTerminator), State::OldAccept);
        assert_eq!(State::D9Branch.next(Symbol::Other), State::Reject);
    }

    #[test]
    fn new_format_continuation() {
        assert_eq!(State::D10.next(Symbol::Digit), State::D11);
        assert_eq!(State::D11.next(Symbol::Digit), State::NewAccept);
        assert_eq!(State::D10.next(Symbol::OldTerminator), State::Reject);
        assert_eq!(State::D11.next(Symbol::OldTerminator), State::Reject);
    }

    #[test]
    fn accepting_states_only_lead_to_reject() {
        for state in [State::OldAccept, State::NewAccept] {
            for symbol in Symbol::ALL {
                assert_eq!(state.next(symbol), State::Reject, "{state} on {symbol}");
            }
        }
    }

    #[test]
    fn reject_is_absorbing() {
        for symbol in Symbol::ALL {
            assert_eq!(State::Reject.next(symbol), State::Reject);
        }
    }

    #[test]
    fn only_the_branch_state_has_two_live_successors() {
        let branching: Vec<State> = State::ALL
            .iter()
            .copied()
            .filter(|s| {
                Symbol::ALL
                    .iter()
                    .filter(|&&sym| !s.next(sym).is_dead())
                    .count()
                    > 1
            })
            .collect();
        assert_eq!(branching, vec![State::D9Branch]);
    }

    #[test]
    fn other_always_rejects() {
        for state in State::ALL {
            assert_eq!(state.next(Symbol::Other), State::Reject, "{state}");
        }
    }

    // ── Acceptance ───────────────────────────────────────────────────

    #[test]
    fn classification_of_states() {
        assert_eq!(State::OldAccept.classification(), Classification::OldFormatAccepted);
        assert_eq!(State::NewAccept.classification(), Classification::NewFormatAccepted);
        for state in State::ALL {
            if !state.is_accepting() {
                assert_eq!(state.classification(), Classification::Rejected, "{state}");
            }
        }
    }

    #[test]
    fn exactly_two_accepting_states() {
        let accepting: Vec<State> = State::ALL.iter().copied().filter(State::is_accepting).collect();
        assert_eq!(accepting, vec![State::OldAccept, State::NewAccept]);
    }

    #[test]
    fn start_is_not_accepting() {
        assert!(!State::Start.is_accepting());
        assert_eq!(State::default(), State::Start);
    }

    // ── Labels ───────────────────────────────────────────────────────

    #[test]
    fn all_is_in_discriminant_order() {
        assert_eq!(State::ALL.len(), State::COUNT);
        for (i, state) in State::ALL.iter().enumerate() {
            assert_eq!(*state as usize, i);
        }
    }

    #[test]
    fn labels_follow_q_numbering() {
        assert_eq!(State::Start.to_string(), "q0");
        assert_eq!(State::D9Branch.to_string(), "q9");
        assert_eq!(State::OldAccept.to_string(), "q10");
        assert_eq!(State::D10.to_string(), "q11");
        assert_eq!(State::D11.to_string(), "q12");
        assert_eq!(State::NewAccept.to_string(), "q13");
        assert_eq!(State::Reject.to_string(), "qReject");
    }

    #[test]
    fn label_parses_back() {
        for state in State::ALL {
            assert_eq!(state.label().parse::<State>().unwrap(), state);
        }
    }

    #[test]
    fn unknown_label_is_an_error() {
        let err = "q14".parse::<State>().unwrap_err();
        assert_eq!(err, NicError::UnknownState("q14".to_string()));
        assert!("Q0".parse::<State>().is_err());
        assert!("".parse::<State>().is_err());
    }

    #[test]
    fn state_serializes_as_label() {
        assert_eq!(serde_json::to_string(&State::OldAccept).unwrap(), "\"q10\"");
        assert_eq!(serde_json::to_string(&State::Reject).unwrap(), "\"qReject\"");
        let parsed: State = serde_json::from_str("\"q12\"").unwrap();
        assert_eq!(parsed, State::D11);
    }
}
