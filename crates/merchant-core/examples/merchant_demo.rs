//! Interpreter Demonstration
//!
//! Runs the reference trading dialogue line by line, then prints the final
//! symbol tables.
#![allow(clippy::unwrap_used, clippy::expect_used)]

use merchant_core::{CommandInterpreter, MemoryLineSource};

const DIALOGUE: [&str; 12] = [
    "glob is I",
    "prok is V",
    "pish is X",
    "tegj is L",
    "glob glob Silver is 34 Credits",
    "glob prok Gold is 57800 Credits",
    "pish pish Iron is 3910 Credits",
    "how much is pish tegj glob glob ?",
    "how many Credits is glob prok Silver ?",
    "how many Credits is glob prok Gold ?",
    "how many Credits is glob prok Iron ?",
    "how much wood could a woodchuck chuck if a woodchuck could chuck wood ?",
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Merchant Interpreter Demo ===\n");

    // ===== Part 1: One line at a time =====
    println!("## Part 1: process_command\n");

    let mut interp = CommandInterpreter::new();
    for line in DIALOGUE {
        match interp.process_command(line) {
            Ok(Some(answer)) => println!("? {}\n  {}", line, answer),
            Ok(None) => println!("✓ {}", line),
            Err(e) => println!("✗ {}\n  {}", line, e),
        }
    }

    // ===== Part 2: Batch loop =====
    println!("\n## Part 2: process_input\n");

    let mut interp = CommandInterpreter::new();
    let mut source = MemoryLineSource::new(DIALOGUE);
    let mut stdout = std::io::stdout();
    let summary = interp.process_input(&mut source, &mut stdout)?;
    println!(
        "\nread {} lines, {} answers, aborted: {}",
        summary.lines_read,
        summary.answers,
        summary.aborted()
    );

    // ===== Part 3: Tables =====
    println!("\n## Part 3: snapshot\n");
    println!("{}", interp.snapshot().to_json()?);

    Ok(())
}
