use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
use commands::scan::ScanCommand;

#[derive(Parser)]
#[command(name = "solsift")]
#[command(about = "Heuristic pattern scanner for Solidity contracts")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    Scan {
        #[command(subcommand)]
        subcommand: ScanCommand,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Scan { subcommand } => subcommand.execute(),
    }
}
