//! Interpreter Scenario Tests
//!
//! End-to-end behaviour of `process_command` over the reference dialogue and
//! the documented edge cases.

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{ask, interpreter_with, reference_interpreter};
use merchant_core::{CommandInterpreter, MerchantError, NumeralLetter};

#[test]
fn test_every_letter_round_trips_through_a_unit() {
    for letter in NumeralLetter::ALL {
        // GIVEN a unit assigned to the letter
        let mut interp = CommandInterpreter::new();
        interp.process_command(&format!("u is {}", letter)).unwrap();

        // WHEN asking its value
        let answer = ask(&mut interp, "how much is u?");

        // THEN the answer is the letter's value
        assert_eq!(answer, format!("u is {}", letter.value()));
    }
}

#[test]
fn test_assignment_for_i() {
    let mut interp = interpreter_with(&["glob is I"]);
    assert_eq!(ask(&mut interp, "how much is glob?"), "glob is 1");
}

#[test]
fn test_concatenation_order_forms_subtractive_pairs() {
    let mut interp = interpreter_with(&["glob is I", "prok is V"]);

    assert_eq!(ask(&mut interp, "how much is glob prok?"), "glob prok is 4");
    assert_eq!(ask(&mut interp, "how much is prok glob?"), "prok glob is 6");
}

#[test]
fn test_reference_dialogue_answers() {
    let mut interp = reference_interpreter();

    assert_eq!(
        ask(&mut interp, "how much is pish tegj glob glob ?"),
        "pish tegj glob glob is 42"
    );
    assert_eq!(
        ask(&mut interp, "how many Credits is glob prok Silver ?"),
        "glob prok Silver is 68 Credits"
    );
    assert_eq!(
        ask(&mut interp, "how many Credits is glob prok Gold ?"),
        "glob prok Gold is 57800 Credits"
    );
    assert_eq!(
        ask(&mut interp, "how many Credits is glob prok Iron ?"),
        "glob prok Iron is 782 Credits"
    );
}

#[test]
fn test_assignment_for_metal_silver() {
    let mut interp = interpreter_with(&["glob is I", "prok is V", "glob glob Silver is 34 Credits"]);

    assert_eq!(
        ask(&mut interp, "how many Credits is glob prok Silver?"),
        "glob prok Silver is 68 Credits"
    );
}

#[test]
fn test_metal_names_are_case_insensitive() {
    let mut interp = interpreter_with(&["glob is I", "glob glob SILVER is 34 credits"]);

    assert_eq!(
        ask(&mut interp, "how many Credits is glob silver?"),
        "glob silver is 17 Credits"
    );
}

#[test]
fn test_fractional_credit_amounts() {
    // GIVEN silver valued at 3 credits for 2 units
    let mut interp = interpreter_with(&["glob is I", "glob glob Silver is 3 Credits"]);

    // THEN one unit is worth 1.5
    assert_eq!(
        ask(&mut interp, "how many Credits is glob Silver?"),
        "glob Silver is 1.5 Credits"
    );
}

#[test]
fn test_small_credit_amounts_keep_fourteen_significant_digits() {
    // GIVEN silver valued at 1 credit for 3999 units
    let mut interp = interpreter_with(&[
        "d is I",
        "x is X",
        "c is C",
        "m is M",
        "m m m c m x c d x Silver is 1 Credits",
        "d d d Gold is 10 Credits",
    ]);

    // THEN fractions are not cut off after ten decimals
    assert_eq!(
        ask(&mut interp, "how many Credits is d Silver?"),
        "d Silver is 0.00025006251562891 Credits"
    );
    assert_eq!(
        ask(&mut interp, "how many Credits is d Gold?"),
        "d Gold is 3.3333333333333 Credits"
    );
}

#[test]
fn test_zero_numeral_guard_stores_zero_ratio() {
    // GIVEN a valuation whose unit sequence is empty (decodes to 0)
    let mut interp = interpreter_with(&["glob is I", "Dust is 50 Credits"]);

    // THEN the ratio is 0 rather than a division error
    assert_eq!(interp.tables().metal_ratio("dust").unwrap(), 0.0);
    assert_eq!(
        ask(&mut interp, "how many Credits is glob glob Dust?"),
        "glob glob Dust is 0 Credits"
    );
}

#[test]
fn test_revaluation_overwrites_metal() {
    let mut interp = interpreter_with(&[
        "glob is I",
        "glob glob Silver is 34 Credits",
        "glob Silver is 10 Credits",
    ]);

    assert_eq!(
        ask(&mut interp, "how many Credits is glob glob Silver?"),
        "glob glob Silver is 20 Credits"
    );
}

#[test]
fn test_unit_reassignment_last_write_wins() {
    let mut interp = interpreter_with(&["glob is I", "glob is X"]);
    assert_eq!(ask(&mut interp, "how much is glob glob?"), "glob glob is 20");
}

#[test]
fn test_permissive_decode_of_long_runs() {
    let mut interp = interpreter_with(&["glob is I"]);
    assert_eq!(
        ask(&mut interp, "how much is glob glob glob glob?"),
        "glob glob glob glob is 4"
    );
}

#[test]
fn test_unknown_unit_in_query() {
    let mut interp = interpreter_with(&["glob is I"]);
    let err = interp.process_command("how much is glob blarg?").unwrap_err();
    assert_eq!(
        err,
        MerchantError::UnknownUnit {
            unit: "blarg".to_string()
        }
    );
}

#[test]
fn test_unknown_metal_in_credit_query() {
    let mut interp = interpreter_with(&["glob is I"]);
    let err = interp
        .process_command("how many Credits is glob Platinum?")
        .unwrap_err();
    assert_eq!(
        err,
        MerchantError::UnknownMetal {
            metal: "platinum".to_string()
        }
    );
}

#[test]
fn test_missing_separator_is_grammar_error() {
    let mut interp = CommandInterpreter::new();
    let err = interp
        .process_command("how much wood could a woodchuck chuck if a woodchuck could chuck wood?")
        .unwrap_err();
    assert!(matches!(err, MerchantError::Grammar { .. }));
}

#[test]
fn test_blank_line_is_grammar_error() {
    let mut interp = CommandInterpreter::new();
    assert!(matches!(
        interp.process_command("   "),
        Err(MerchantError::Grammar { .. })
    ));
}

#[test]
fn test_unparseable_instruction() {
    let mut interp = CommandInterpreter::new();
    let err = interp.process_command("glob is a small coin").unwrap_err();
    assert!(matches!(err, MerchantError::UnrecognizedInstruction { .. }));
}

#[test]
fn test_unanswerable_question() {
    let mut interp = interpreter_with(&["glob is I"]);
    let err = interp.process_command("what is glob?").unwrap_err();
    assert!(matches!(err, MerchantError::UnanswerableQuestion { .. }));
}

#[test]
fn test_questions_are_idempotent_and_read_only() {
    let mut interp = reference_interpreter();
    let before = interp.snapshot();

    let first = ask(&mut interp, "how many Credits is glob prok Gold ?");
    let second = ask(&mut interp, "how many Credits is glob prok Gold ?");

    assert_eq!(first, second);
    assert_eq!(interp.snapshot(), before);
}

#[test]
fn test_rejected_lines_do_not_mutate() {
    let mut interp = interpreter_with(&["glob is I"]);
    let before = interp.snapshot();

    assert!(interp.process_command("glob blarg Gold is 10 Credits").is_err());
    assert!(interp.process_command("prok is v").is_err());

    assert_eq!(interp.snapshot(), before);
}

#[test]
fn test_accepted_state_survives_later_errors() {
    let mut interp = interpreter_with(&["glob is I"]);
    assert!(interp.process_command("nonsense").is_err());
    assert_eq!(ask(&mut interp, "how much is glob?"), "glob is 1");
}
