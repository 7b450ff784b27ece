use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

use banking::{customer_report, load_bank, logger, snapshot_json, AccountKind, Bank, BankConfig};

#[derive(Parser)]
#[command(name = "banking", version, about = "In-memory bank, customer and account model")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the customers report
    Report {
        /// CSV data file (first_name,last_name,account_type,balance,rate)
        #[arg(short, long)]
        data: Option<PathBuf>,

        /// TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print a JSON snapshot instead of the text report
        #[arg(long)]
        json: bool,

        /// Apply one period of interest to savings accounts first
        #[arg(long)]
        accrue_interest: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init_cli_logger(cli.verbose);

    match cli.command {
        Command::Report {
            data,
            config,
            json,
            accrue_interest,
        } => run_report(data, config, json, accrue_interest),
    }
}

fn run_report(
    data: Option<PathBuf>,
    config: Option<PathBuf>,
    json: bool,
    accrue_interest: bool,
) -> Result<()> {
    let config = match config {
        Some(path) => BankConfig::from_file(&path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => BankConfig::default(),
    };

    let mut bank = match data {
        Some(path) => load_bank(&path, &config)
            .with_context(|| format!("Failed to load data file {}", path.display()))?,
        None => demo_bank(&config).context("Failed to build demo bank")?,
    };

    if accrue_interest {
        let paid = bank.accrue_interest();
        info!(paid, "interest applied before report");
    }

    if json {
        println!("{}", snapshot_json(&bank)?);
    } else {
        print!("{}", customer_report(&bank));
    }

    Ok(())
}

fn demo_bank(config: &BankConfig) -> banking::Result<Bank> {
    let mut bank = Bank::from_config(config)?;

    let jane = bank.add_customer("Jane", "Simms")?;
    bank.open_account(jane, AccountKind::Savings { interest_rate: 0.03 }, 500.0)?;
    bank.open_account(jane, AccountKind::Checking { overdraft_protection: 200.0 }, 200.0)?;

    let owen = bank.add_customer("Owen", "Bryant")?;
    bank.open_account(owen, AccountKind::Checking { overdraft_protection: 0.0 }, 200.0)?;

    let tim = bank.add_customer("Tim", "Soley")?;
    bank.open_account(tim, AccountKind::Savings { interest_rate: 0.05 }, 1500.0)?;
    bank.open_account(tim, AccountKind::Checking { overdraft_protection: 0.0 }, 200.0)?;

    let maria = bank.add_customer("Maria", "Soley")?;
    bank.open_account(maria, AccountKind::Savings { interest_rate: 0.03 }, 150.0)?;

    Ok(bank)
}
