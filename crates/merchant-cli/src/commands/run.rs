//! Batch run command
//!
//! Usage: merchant run [INPUT]

use clap::Args;
use merchant_core::{CommandInterpreter, LineSource, ReaderLineSource};
use std::io::BufReader;
use std::path::PathBuf;

use super::OutputOptions;

#[derive(Debug, Args)]
pub struct RunArgs {
    /// Input file, one command per line (default: stdin)
    pub input: Option<PathBuf>,
}

/// Execute run command
///
/// A rejected line prints the fallback message and ends the batch; that is
/// normal output, not a failure of the command.
pub fn execute(args: RunArgs, options: &OutputOptions) -> Result<(), Box<dyn std::error::Error>> {
    let mut source: Box<dyn LineSource> = match args.input {
        Some(path) if path.as_os_str() != "-" => Box::new(ReaderLineSource::open(&path)?),
        _ => Box::new(ReaderLineSource::new(BufReader::new(std::io::stdin()))),
    };

    let mut interp = CommandInterpreter::new();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    interp.process_input(source.as_mut(), &mut out)?;

    options.finish(&interp)
}
