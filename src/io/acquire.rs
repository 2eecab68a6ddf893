//! Turns raw terminal lines into validated ids, amounts and actions.
//!
//! Every loop here retries until the input is acceptable, so the session only
//! ever sees well-formed values. The only way out besides success is the
//! input running dry, reported as [`AppError::InputClosed`].

use tracing::debug;

use crate::{
    common::{action::Action, error::AppError, money::Money},
    domain::{account::AccountId, ledger::Ledger},
    io::terminal::Terminal,
};

pub const ID_PROMPT: &str = "Enter account id:";
pub const ACTION_PROMPT: &str =
    "Choose action (B balance, - withdraw, + deposit, = next customer, X finish):";
pub const AMOUNT_PROMPT: &str = "Enter amount:";

pub const INVALID_ID: &str = "Invalid account id";
pub const INVALID_AMOUNT: &str = "Invalid amount";
pub const INVALID_ACTION: &str = "Invalid action";

/// Prompts until the input names an account present in `ledger`.
pub fn account_id<T>(terminal: &mut T, ledger: &Ledger) -> Result<AccountId, AppError>
where
    T: Terminal + ?Sized,
{
    loop {
        let line = next_line(terminal, ID_PROMPT)?;
        match line.trim().parse::<AccountId>() {
            Ok(id) if ledger.contains(id) => return Ok(id),
            Ok(id) => debug!(id, "unknown account id"),
            Err(e) => debug!(input = %line, error = %e, "unparseable account id"),
        }
        terminal.show(INVALID_ID)?;
    }
}

/// Prompts until the input parses as an integer amount. Sign and magnitude
/// are left to the action handlers.
pub fn amount<T>(terminal: &mut T) -> Result<Money, AppError>
where
    T: Terminal + ?Sized,
{
    loop {
        let line = next_line(terminal, AMOUNT_PROMPT)?;
        match line.parse::<Money>() {
            Ok(amount) => return Ok(amount),
            Err(e) => debug!(input = %line, error = %e, "unparseable amount"),
        }
        terminal.show(INVALID_AMOUNT)?;
    }
}

/// Prompts until the input is one of the action tokens `B`, `-`, `+`, `=`
/// or `X` (case-insensitive). Withdraw and deposit go on to acquire an amount.
pub fn action<T>(terminal: &mut T) -> Result<Action, AppError>
where
    T: Terminal + ?Sized,
{
    loop {
        let line = next_line(terminal, ACTION_PROMPT)?;
        let token = line.trim().to_ascii_uppercase();

        match token.as_str() {
            "B" => return Ok(Action::Balance),
            "=" => return Ok(Action::Next),
            "X" => return Ok(Action::Finished),
            "-" => return Ok(Action::Withdraw(amount(terminal)?)),
            "+" => return Ok(Action::Deposit(amount(terminal)?)),
            other => debug!(token = other, "unrecognized action"),
        }
        terminal.show(INVALID_ACTION)?;
    }
}

fn next_line<T>(terminal: &mut T, prompt: &str) -> Result<String, AppError>
where
    T: Terminal + ?Sized,
{
    terminal.read_line(prompt)?.ok_or(AppError::InputClosed)
}
