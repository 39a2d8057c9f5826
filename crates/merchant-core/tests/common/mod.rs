use merchant_core::CommandInterpreter;

/// Unit assignments of the reference dialogue
#[allow(dead_code)]
pub const REFERENCE_UNITS: [&str; 4] = ["glob is I", "prok is V", "pish is X", "tegj is L"];

/// Metal valuations of the reference dialogue
#[allow(dead_code)]
pub const REFERENCE_METALS: [&str; 3] = [
    "glob glob Silver is 34 Credits",
    "glob prok Gold is 57800 Credits",
    "pish pish Iron is 3910 Credits",
];

/// Create an interpreter that has already accepted every given instruction
///
/// Panics if any instruction is rejected or unexpectedly answers.
#[allow(dead_code)]
pub fn interpreter_with(lines: &[&str]) -> CommandInterpreter {
    let mut interp = CommandInterpreter::new();
    for line in lines {
        let answer = interp
            .process_command(line)
            .unwrap_or_else(|e| panic!("setup line {:?} rejected: {}", line, e));
        assert!(answer.is_none(), "setup line {:?} produced an answer", line);
    }
    interp
}

/// Interpreter loaded with the full reference vocabulary
#[allow(dead_code)]
pub fn reference_interpreter() -> CommandInterpreter {
    let lines: Vec<&str> = REFERENCE_UNITS
        .iter()
        .chain(REFERENCE_METALS.iter())
        .copied()
        .collect();
    interpreter_with(&lines)
}

/// Ask a question that must succeed
#[allow(dead_code)]
pub fn ask(interp: &mut CommandInterpreter, question: &str) -> String {
    interp
        .process_command(question)
        .unwrap_or_else(|e| panic!("question {:?} failed: {}", question, e))
        .unwrap_or_else(|| panic!("question {:?} produced no answer", question))
}
