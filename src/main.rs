use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_tracker::cli::{
    handle_budget_command, handle_config_command, handle_export_command, handle_summary_command,
    handle_transaction_command, BudgetCommands, ConfigArgs, ExportArgs, Session, SummaryArgs,
    TransactionCommands,
};
use expense_tracker::config::{TrackerPaths, DATA_DIR_ENV};
use expense_tracker::logging::init_tracing;

#[derive(Parser)]
#[command(
    name = "expense",
    version,
    about = "Track expenses and income against a weekly or monthly budget",
    long_about = "A command-line expense tracker. Record expenses and income, \
                  see where the money went by category, and get warned as \
                  spending approaches your budget limit."
)]
struct Cli {
    /// Directory holding config.json and the ledger
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Transaction(TransactionCommands),

    /// Net totals, monthly breakdown and budget status
    Summary(SummaryArgs),

    /// Budget commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Export the ledger to CSV, JSON or YAML
    Export(ExportArgs),

    /// Show configuration and paths, or update settings
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let paths = match cli.data_dir {
        Some(dir) => TrackerPaths::with_base_dir(dir),
        None => TrackerPaths::new(),
    };

    let Some(command) = cli.command else {
        println!("expense - a command-line expense tracker");
        println!();
        println!("Run 'expense --help' for usage information.");
        println!("Run 'expense quick coffee \\$5.50 category:food' to record an expense.");
        return Ok(());
    };

    let mut session = Session::open(paths)?;

    match command {
        Commands::Transaction(cmd) => handle_transaction_command(&mut session, cmd)?,
        Commands::Summary(args) => handle_summary_command(&session, args)?,
        Commands::Budget(cmd) => handle_budget_command(&mut session, cmd)?,
        Commands::Export(args) => handle_export_command(&session, args)?,
        Commands::Config(args) => handle_config_command(&mut session, args)?,
    }

    session.finish()?;
    Ok(())
}
