use std::path::PathBuf;

use crate::common::money::Money;
use crate::domain::account::AccountId;

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Cli(#[from] clap::Error),
    #[error("failed to open accounts file {path}: {source}")]
    OpenAccounts {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("terminal i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("refusing to start with an empty ledger")]
    EmptyLedger,
    #[error("ledger error: {0}")]
    Ledger(#[from] LedgerError),
    #[error("input closed before the terminal halted")]
    InputClosed,
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerError {
    #[error("account {0} not found")]
    AccountNotFound(AccountId),
    #[error("duplicate account id {0}")]
    DuplicateId(AccountId),
}

/// Reasons an action handler refuses a transaction.
///
/// Every variant except [`TxError::Ledger`] is a customer-facing rejection that
/// leaves the ledger untouched.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxError {
    #[error("Insufficient funds: balance {balance}, requested {requested}")]
    InsufficientFunds { balance: Money, requested: Money },
    #[error("Amount must be positive, got {0}")]
    NonPositiveAmount(Money),
    #[error("Amount {0} exceeds the maximum balance")]
    Overflow(Money),
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}
