use std::io::{BufRead, Write, stdin, stdout};

use clap::Parser;
use tracing::info;

use crate::{
    common::error::AppError,
    config::Config,
    domain::{account::AccountSpec, ledger::Ledger},
    io::{
        terminal::{ConsoleTerminal, Terminal},
        writer,
    },
    worker::session::Session,
};

pub fn run<I, S>(args: I) -> Result<(), AppError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    run_with(args, stdin().lock(), stdout().lock())
}

/// Like [`run`], but with the console wired to `input` and `output`. With
/// `--summary` the closing balances follow the dialogue on `output`.
pub fn run_with<I, S, R, W>(args: I, input: R, output: W) -> Result<(), AppError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
    R: BufRead,
    W: Write,
{
    let args: Vec<String> = args.into_iter().map(|s| s.into()).collect();
    let config = Config::try_parse_from(args)?;
    crate::logging::set_up(config.verbose);

    let specs = config.load_accounts()?;

    let mut terminal = ConsoleTerminal::new(input, output);
    let ledger = start(specs, &mut terminal)?;
    let (_, mut out) = terminal.into_inner();

    if config.summary {
        writer::write_accounts(&mut out, ledger.accounts())?;
    }
    out.flush()?;

    Ok(())
}

/// Builds the ledger from `specs` and serves customers on `terminal` until
/// someone asks the terminal to finish. Returns the closing ledger.
///
/// Configuration problems (duplicate ids, no accounts) are reported before
/// the first prompt is shown.
pub fn start<T>(specs: Vec<AccountSpec>, terminal: &mut T) -> Result<Ledger, AppError>
where
    T: Terminal + ?Sized,
{
    let mut ledger = Ledger::from_specs(specs)?;
    if ledger.is_empty() {
        return Err(AppError::EmptyLedger);
    }
    info!(accounts = ledger.len(), "terminal ready");

    let mut session = Session::new(&mut ledger, terminal);
    session.run()?;
    info!(transactions = session.journal().len(), "terminal halted");

    Ok(ledger)
}
