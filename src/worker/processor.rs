use tracing::debug;

use crate::{
    common::{action::Action, error::TxError, money::Money},
    domain::{
        account::AccountId,
        ledger::Ledger,
        transaction::{TransactionRecord, TxKind},
    },
    worker::handlers::{balance, deposit, withdrawal},
};

/// What applying one action amounted to, for the session to present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Balance(Money),
    Dispensed { amount: Money, balance: Money },
    Deposited { amount: Money, balance: Money },
    EndCustomer,
    Shutdown,
}

/// Applies actions to the ledger and journals every successful transaction.
#[derive(Debug, Default)]
pub struct Processor {
    journal: Vec<TransactionRecord>,
}

impl Processor {
    pub fn new() -> Self {
        Self {
            journal: Vec::new(),
        }
    }

    pub fn journal(&self) -> &[TransactionRecord] {
        &self.journal
    }

    pub fn process(
        &mut self,
        ledger: &mut Ledger,
        id: AccountId,
        action: Action,
    ) -> Result<Outcome, TxError> {
        let outcome = match action {
            Action::Balance => Outcome::Balance(balance::handle(ledger, id)?),
            Action::Withdraw(amount) => {
                let balance = withdrawal::handle(ledger, id, amount)?;
                self.record(id, TxKind::Withdrawal, amount, balance);
                Outcome::Dispensed { amount, balance }
            }
            Action::Deposit(amount) => {
                let balance = deposit::handle(ledger, id, amount)?;
                self.record(id, TxKind::Deposit, amount, balance);
                Outcome::Deposited { amount, balance }
            }
            Action::Next => Outcome::EndCustomer,
            Action::Finished => Outcome::Shutdown,
        };
        debug!(id, ?action, ?outcome, "action applied");
        Ok(outcome)
    }

    fn record(&mut self, id: AccountId, kind: TxKind, amount: Money, balance_after: Money) {
        let seq = self.journal.len() as u64 + 1;
        self.journal
            .push(TransactionRecord::new(seq, id, kind, amount, balance_after));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::account::AccountSpec;

    fn ledger() -> Ledger {
        Ledger::from_specs(vec![
            AccountSpec::new("A", 1, 100),
            AccountSpec::new("B", 2, 10),
        ])
        .unwrap()
    }

    #[test]
    fn process_maps_actions_to_outcomes() {
        let mut ledger = ledger();
        let mut processor = Processor::new();

        assert_eq!(
            processor.process(&mut ledger, 1, Action::Balance).unwrap(),
            Outcome::Balance(Money::new(100))
        );
        assert_eq!(
            processor
                .process(&mut ledger, 1, Action::Deposit(Money::new(20)))
                .unwrap(),
            Outcome::Deposited {
                amount: Money::new(20),
                balance: Money::new(120)
            }
        );
        assert_eq!(
            processor
                .process(&mut ledger, 1, Action::Withdraw(Money::new(70)))
                .unwrap(),
            Outcome::Dispensed {
                amount: Money::new(70),
                balance: Money::new(50)
            }
        );
        assert_eq!(
            processor.process(&mut ledger, 1, Action::Next).unwrap(),
            Outcome::EndCustomer
        );
        assert_eq!(
            processor.process(&mut ledger, 1, Action::Finished).unwrap(),
            Outcome::Shutdown
        );
    }

    #[test]
    fn journal_records_only_applied_transactions() {
        let mut ledger = ledger();
        let mut processor = Processor::new();

        processor
            .process(&mut ledger, 2, Action::Deposit(Money::new(5)))
            .unwrap();
        processor
            .process(&mut ledger, 2, Action::Withdraw(Money::new(500)))
            .unwrap_err();
        processor.process(&mut ledger, 2, Action::Balance).unwrap();
        processor
            .process(&mut ledger, 1, Action::Withdraw(Money::new(100)))
            .unwrap();

        assert_eq!(
            processor.journal(),
            [
                TransactionRecord::new(1, 2, TxKind::Deposit, Money::new(5), Money::new(15)),
                TransactionRecord::new(2, 1, TxKind::Withdrawal, Money::new(100), Money::zero()),
            ]
        );
    }
}
