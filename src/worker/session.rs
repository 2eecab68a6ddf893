use tracing::{debug, error, info};

use crate::{
    common::{
        action::Action,
        error::{AppError, TxError},
    },
    domain::{account::AccountId, ledger::Ledger, transaction::TransactionRecord},
    io::{acquire, terminal::Terminal},
    worker::processor::{Outcome, Processor},
};

pub const SHUTDOWN_MESSAGE: &str = "Terminal shutting down";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    AwaitingCustomer,
    Authenticated(AccountId),
    Halted,
}

/// The terminal's state machine: one customer at a time, one action at a time.
///
/// The session borrows the ledger for its whole lifetime and reaches it only
/// through the [`Processor`]; everything the customer sees goes through the
/// [`Terminal`].
#[derive(Debug)]
pub struct Session<'a, T: ?Sized> {
    ledger: &'a mut Ledger,
    terminal: &'a mut T,
    processor: Processor,
    state: SessionState,
}

impl<'a, T: Terminal + ?Sized> Session<'a, T> {
    pub fn new(ledger: &'a mut Ledger, terminal: &'a mut T) -> Self {
        Self {
            ledger,
            terminal,
            processor: Processor::new(),
            state: SessionState::AwaitingCustomer,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn current_id(&self) -> Option<AccountId> {
        match self.state {
            SessionState::Authenticated(id) => Some(id),
            _ => None,
        }
    }

    pub fn ledger(&self) -> &Ledger {
        &*self.ledger
    }

    pub fn journal(&self) -> &[TransactionRecord] {
        self.processor.journal()
    }

    /// Drives the session until it halts.
    pub fn run(&mut self) -> Result<(), AppError> {
        while self.step()? != SessionState::Halted {}
        Ok(())
    }

    /// Performs one transition and returns the resulting state.
    ///
    /// A ledger error while a customer is authenticated means the account
    /// vanished under us; it is returned as fatal rather than retried.
    pub fn step(&mut self) -> Result<SessionState, AppError> {
        self.state = match self.state {
            SessionState::AwaitingCustomer => self.authenticate()?,
            SessionState::Authenticated(id) => {
                let action = acquire::action(&mut *self.terminal)?;
                self.apply(id, action)?
            }
            SessionState::Halted => SessionState::Halted,
        };
        Ok(self.state)
    }

    fn authenticate(&mut self) -> Result<SessionState, AppError> {
        let id = acquire::account_id(&mut *self.terminal, &*self.ledger)?;
        let name = self.ledger.get_name(id)?;
        info!(id, "customer authenticated");
        self.terminal.show(&format!("Welcome, {name}"))?;
        Ok(SessionState::Authenticated(id))
    }

    fn apply(&mut self, id: AccountId, action: Action) -> Result<SessionState, AppError> {
        let outcome = match self.processor.process(&mut *self.ledger, id, action) {
            Ok(outcome) => outcome,
            Err(TxError::Ledger(e)) => {
                error!(id, error = %e, "ledger lost an authenticated account");
                return Err(e.into());
            }
            Err(rejected) => {
                debug!(id, ?action, reason = %rejected, "transaction rejected");
                self.terminal.show(&rejected.to_string())?;
                return Ok(SessionState::Authenticated(id));
            }
        };

        let next = match outcome {
            Outcome::Balance(balance) => {
                self.terminal.show(&format!("Balance: {balance}"))?;
                SessionState::Authenticated(id)
            }
            Outcome::Dispensed { amount, .. } => {
                self.terminal.deliver_cash(amount)?;
                SessionState::Authenticated(id)
            }
            Outcome::Deposited { amount, balance } => {
                self.terminal
                    .show(&format!("Deposited {amount}. New balance: {balance}"))?;
                SessionState::Authenticated(id)
            }
            Outcome::EndCustomer => {
                let name = self.ledger.get_name(id)?;
                info!(id, "customer finished");
                self.terminal.show(&format!("Goodbye, {name}"))?;
                SessionState::AwaitingCustomer
            }
            Outcome::Shutdown => {
                info!(id, "shutdown requested");
                self.terminal.show(SHUTDOWN_MESSAGE)?;
                SessionState::Halted
            }
        };
        Ok(next)
    }
}
