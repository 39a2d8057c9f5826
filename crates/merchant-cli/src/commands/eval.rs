//! Eval command
//!
//! Usage: merchant eval <LINE>...

use clap::Args;
use merchant_core::{CommandInterpreter, ExError};

use super::OutputOptions;

#[derive(Debug, Args)]
pub struct EvalArgs {
    /// Lines to process in order
    #[arg(required = true)]
    pub lines: Vec<String>,
}

/// Execute eval command
///
/// Unlike `run`, the first rejected line is reported with its error code
/// and the command fails.
pub fn execute(args: EvalArgs, options: &OutputOptions) -> Result<(), Box<dyn std::error::Error>> {
    let mut interp = CommandInterpreter::new();

    for line in &args.lines {
        match interp.process_command(line) {
            Ok(Some(answer)) => println!("{}", answer),
            Ok(None) => {}
            Err(err) => {
                options.finish(&interp)?;
                let ex_err = ExError::from(err).with_session_id(interp.session_id().clone());
                return Err(ex_err.into());
            }
        }
    }

    options.finish(&interp)
}
