use anyhow::Result;
use clap::{Parser, Subcommand};

use spendbook::cli::{run_demo, run_session_stdio};

#[derive(Parser)]
#[command(
    name = "spendbook",
    version,
    about = "In-memory budgeting ledger with text reports",
    long_about = "spendbook tracks deposits, withdrawals, and transfers across \
                  named spending categories, and renders text reports: per-category \
                  ledgers, a balance summary, and a percentage-spent bar chart. \
                  Everything lives in memory for the lifetime of a run."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a sample walkthrough and print every report
    Demo,

    /// Start an interactive session on stdin/stdout
    #[command(alias = "repl")]
    Session,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Demo) => {
            run_demo()?;
        }
        Some(Commands::Session) => {
            run_session_stdio()?;
        }
        None => {
            println!("spendbook - In-memory budgeting ledger");
            println!();
            println!("Run 'spendbook --help' for usage information.");
            println!("Run 'spendbook demo' to see every report on sample data.");
            println!("Run 'spendbook session' for an interactive session.");
        }
    }

    Ok(())
}
