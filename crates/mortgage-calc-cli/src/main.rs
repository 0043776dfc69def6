mod commands;
mod input;
mod logging;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::chart::ChartArgs;
use commands::payment::{CalculateArgs, SyncArgs};

/// Monthly mortgage payment breakdowns
#[derive(Parser)]
#[command(
    name = "mortgage",
    version,
    about = "Monthly mortgage payment breakdowns",
    long_about = "Computes the monthly cost of a home loan with decimal precision: \
                  principal and interest, property tax, insurance, HOA dues and PMI. \
                  Form values come from flags, a JSON file or piped JSON."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,

    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate the monthly payment breakdown
    Calculate(CalculateArgs),
    /// Reconcile down payment amount and percent after an edit
    Sync(SyncArgs),
    /// Build the cost-distribution chart dataset
    Chart(ChartArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Calculate(args) => commands::payment::run_calculate(args),
        Commands::Sync(args) => commands::payment::run_sync(args),
        Commands::Chart(args) => commands::chart::run_chart(args),
        Commands::Version => {
            println!("mortgage {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
