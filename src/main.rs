use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use tracing::debug;

use expense_tracker::cli::{handle_expense_command, ExpenseCommands};
use expense_tracker::config::{paths::DATA_DIR_ENV, ExpensePaths, Settings};
use expense_tracker::logging::init_cli_logger;
use expense_tracker::storage::Storage;

#[derive(Parser)]
#[command(
    name = "expense",
    version,
    about = "Expense Tracker CLI",
    long_about = "Record, list, delete, summarize and export personal expenses. \
                  Data is kept in expenses.json in the data directory."
)]
struct Cli {
    /// Directory holding expenses.json (defaults to the current directory)
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<ExpenseCommands>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_cli_logger(cli.verbose);

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let paths = match cli.data_dir {
        Some(dir) => ExpensePaths::with_base_dir(dir),
        None => ExpensePaths::new()?,
    };
    debug!(base_dir = %paths.base_dir().display(), "resolved data directory");

    let settings = Settings::load_or_default(&paths)?;
    let storage = Storage::new(paths);

    handle_expense_command(&storage, &settings, command)?;

    Ok(())
}
