pub mod eval;
pub mod run;

use merchant_core::CommandInterpreter;

/// Output switches shared by every subcommand
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputOptions {
    pub dump_tables: bool,
}

impl OutputOptions {
    /// Print the interpreter's tables on stderr when requested
    pub fn finish(&self, interp: &CommandInterpreter) -> Result<(), Box<dyn std::error::Error>> {
        if self.dump_tables {
            eprintln!("{}", interp.snapshot().to_json()?);
        }
        Ok(())
    }
}
