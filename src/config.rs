use std::{fs::File, path::PathBuf};

use clap::Parser;

use crate::{
    common::error::AppError,
    domain::account::AccountSpec,
    io::reader,
};

/// Crate name as it appears in tracing targets.
pub static BIN_NAME: &str = env!("CARGO_CRATE_NAME");

#[derive(Debug, Parser)]
#[command(name = "atm_sim", version, about = "Single-terminal ATM simulator")]
pub struct Config {
    /// CSV file with `name,id,balance` rows. A small demo ledger is used when omitted.
    pub accounts: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Print the closing balances as CSV after the terminal halts
    #[arg(long)]
    pub summary: bool,
}

impl Config {
    /// Loads the account specs named by the configuration.
    pub fn load_accounts(&self) -> Result<Vec<AccountSpec>, AppError> {
        match &self.accounts {
            Some(path) => {
                let file = File::open(path).map_err(|source| AppError::OpenAccounts {
                    path: path.clone(),
                    source,
                })?;
                let mut rdr = csv::ReaderBuilder::new()
                    .trim(csv::Trim::All)
                    .from_reader(file);
                reader::read_account_specs(&mut rdr)
                    .collect::<Result<Vec<_>, _>>()
                    .map_err(AppError::Parse)
            }
            None => Ok(demo_accounts()),
        }
    }
}

pub fn demo_accounts() -> Vec<AccountSpec> {
    vec![
        AccountSpec::new("Alice", 1001, 500),
        AccountSpec::new("Bob", 1002, 120),
        AccountSpec::new("Carol", 1003, 0),
    ]
}
