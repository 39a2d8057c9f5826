//! Merchant CLI
//!
//! Command-line interface for the merchant interpreter

use clap::{Parser, Subcommand, ValueEnum};
use merchant_core::logging_facility::{self, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "merchant")]
#[command(about = "Merchant's guide - convert galactic units and metals to credits", long_about = None)]
struct Cli {
    /// Enable structured logging on stderr
    #[arg(long, global = true, value_enum)]
    log_profile: Option<LogProfile>,

    /// Print the final symbol tables as JSON on stderr
    #[arg(long, global = true)]
    dump_tables: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogProfile {
    Development,
    Production,
}

impl From<LogProfile> for Profile {
    fn from(profile: LogProfile) -> Self {
        match profile {
            LogProfile::Development => Profile::Development,
            LogProfile::Production => Profile::Production,
        }
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run a batch of lines from a file or stdin
    Run(commands::run::RunArgs),
    /// Process lines given as arguments
    Eval(commands::eval::EvalArgs),
}

fn main() {
    let cli = Cli::parse();

    if let Some(profile) = cli.log_profile {
        logging_facility::init(profile.into());
    }

    let options = commands::OutputOptions {
        dump_tables: cli.dump_tables,
    };

    let result = match cli.command {
        Commands::Run(args) => commands::run::execute(args, &options),
        Commands::Eval(args) => commands::eval::execute(args, &options),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
