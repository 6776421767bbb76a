//! # Automaton Properties
//!
//! Property tests over generated inputs: totality, purity, the two accepted
//! shapes, length bounds, and the absorbing dead state.

use nic_dfa::{classify, run, step, trace, Classification, Nic, State, Symbol};
use proptest::prelude::*;

/// Strings drawn mostly from the alphabet, with a few out-of-alphabet
/// characters mixed in so that every branch is exercised.
fn near_alphabet() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            8 => prop::char::range('0', '9'),
            2 => prop_oneof![Just('V'), Just('X')],
            1 => prop_oneof![Just('v'), Just('x'), Just('Y'), Just(' '), Just('-'), Just('\u{0663}')],
        ],
        0..16,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

fn digits(n: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(prop::char::range('0', '9'), n).prop_map(|c| c.into_iter().collect())
}

/// Reference matcher for the recognized language, written without the
/// automaton.
fn expected(input: &str) -> Classification {
    let chars: Vec<char> = input.chars().collect();
    let all_digits = |s: &[char]| s.iter().all(char::is_ascii_digit);
    if chars.len() == 10 && all_digits(&chars[..9]) && matches!(chars[9], 'V' | 'X') {
        Classification::OldFormatAccepted
    } else if chars.len() == 12 && all_digits(&chars) {
        Classification::NewFormatAccepted
    } else {
        Classification::Rejected
    }
}

proptest! {
    /// Totality: every string yields one of the three outcomes.
    #[test]
    fn classify_is_total(input in any::<String>()) {
        let c = classify(&input);
        prop_assert!(matches!(
            c,
            Classification::OldFormatAccepted
                | Classification::NewFormatAccepted
                | Classification::Rejected
        ));
    }

    /// Purity: the same input always gives the same outcome.
    #[test]
    fn classify_is_deterministic(input in near_alphabet()) {
        prop_assert_eq!(classify(&input), classify(&input));
    }

    /// The automaton recognizes exactly the old and new layouts.
    #[test]
    fn agrees_with_reference_matcher(input in near_alphabet()) {
        prop_assert_eq!(classify(&input), expected(&input));
    }

    /// Arbitrary Unicode input also agrees with the reference matcher.
    #[test]
    fn agrees_with_reference_on_any_string(input in any::<String>()) {
        prop_assert_eq!(classify(&input), expected(&input));
    }

    /// Nine digits and one terminator are always old format.
    #[test]
    fn nine_digits_and_terminator_accepted(d in digits(9), t in prop_oneof![Just('V'), Just('X')]) {
        let input = format!("{d}{t}");
        prop_assert_eq!(classify(&input), Classification::OldFormatAccepted);
    }

    /// Twelve digits are always new format.
    #[test]
    fn twelve_digits_accepted(d in digits(12)) {
        prop_assert_eq!(classify(&d), Classification::NewFormatAccepted);
    }

    /// Anything shorter than nine characters is rejected.
    #[test]
    fn short_inputs_rejected(input in "[0-9VX]{0,8}") {
        prop_assert_eq!(classify(&input), Classification::Rejected);
    }

    /// Anything longer than twelve characters is rejected.
    #[test]
    fn long_inputs_rejected(input in "[0-9VX]{13,24}") {
        prop_assert_eq!(classify(&input), Classification::Rejected);
    }

    /// Digit runs of any length other than twelve are rejected.
    #[test]
    fn wrong_digit_counts_rejected(n in (0usize..20).prop_filter("not twelve", |n| *n != 12)) {
        let input = "7".repeat(n);
        prop_assert_eq!(classify(&input), Classification::Rejected);
    }

    /// Appending anything to an accepted value rejects it.
    #[test]
    fn trailing_characters_rejected(
        base in prop_oneof![digits(12), digits(9).prop_map(|d| format!("{d}V"))],
        suffix in "[0-9VXvx ]{1,4}",
    ) {
        let input = format!("{base}{suffix}");
        prop_assert_eq!(classify(&input), Classification::Rejected);
    }

    /// A terminator anywhere other than position 9 rejects.
    #[test]
    fn misplaced_terminator_rejected(d in digits(12), pos in 0usize..12) {
        prop_assume!(pos != 9);
        let mut chars: Vec<char> = d.chars().collect();
        chars[pos] = 'X';
        let input: String = chars.into_iter().collect();
        prop_assert_eq!(classify(&input), Classification::Rejected);
    }

    /// Once in qReject, no further input leaves it.
    #[test]
    fn reject_is_absorbing(prefix in near_alphabet(), suffix in near_alphabet()) {
        let prefix = format!("{prefix}-");
        let mid = run(&prefix);
        prop_assert_eq!(mid, State::Reject);
        let end = suffix.chars().fold(mid, step);
        prop_assert_eq!(end, State::Reject);
        prop_assert_eq!(classify(&format!("{prefix}{suffix}")), Classification::Rejected);
    }

    /// A run of n characters takes exactly n steps.
    #[test]
    fn trace_has_one_step_per_char(input in any::<String>()) {
        let t = trace(&input);
        prop_assert_eq!(t.len(), input.chars().count());
        prop_assert_eq!(t.classification, classify(&input));
        prop_assert_eq!(t.final_state, run(&input));
    }

    /// The validated identifier agrees with classification.
    #[test]
    fn nic_new_agrees_with_classify(input in near_alphabet()) {
        let c = classify(&input);
        match Nic::new(input.clone()) {
            Ok(nic) => prop_assert_eq!(Some(nic.format()), c.format()),
            Err(_) => prop_assert_eq!(c, Classification::Rejected),
        }
    }

    /// `step` is `next` on the character's symbol, for every state.
    #[test]
    fn step_is_next_of_symbol(idx in 0usize..State::COUNT, c in any::<char>()) {
        let state = State::ALL[idx];
        prop_assert_eq!(step(state, c), state.next(Symbol::of(c)));
    }
}
