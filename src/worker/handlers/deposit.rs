use crate::{
    common::{error::TxError, money::Money},
    domain::{account::AccountId, ledger::Ledger},
};

/// Credits `amount` to `id` and returns the new balance.
pub fn handle(ledger: &mut Ledger, id: AccountId, amount: Money) -> Result<Money, TxError> {
    let balance = ledger.get_balance(id)?;

    if !amount.is_positive() {
        return Err(TxError::NonPositiveAmount(amount));
    }
    let new_balance = balance
        .checked_add(amount)
        .ok_or(TxError::Overflow(amount))?;

    ledger.update_balance(id, new_balance)?;
    Ok(new_balance)
}

#[cfg(test)]
mod tests {
    use super::handle;
    use crate::{
        common::{
            error::{LedgerError, TxError},
            money::Money,
        },
        domain::{account::AccountSpec, ledger::Ledger},
    };

    fn ledger_with(balance: i64) -> Ledger {
        Ledger::from_specs(vec![AccountSpec::new("A", 1, balance)]).unwrap()
    }

    #[test]
    fn deposit_increments_balance() {
        let mut ledger = ledger_with(100);

        let new_balance = handle(&mut ledger, 1, Money::new(20)).unwrap();

        assert_eq!(new_balance, Money::new(120));
        assert_eq!(ledger.get_balance(1).unwrap(), Money::new(120));
    }

    #[test]
    fn deposit_rejects_zero_and_negative_amounts() {
        let mut ledger = ledger_with(100);

        for amt in [0, -1, -500] {
            assert_eq!(
                handle(&mut ledger, 1, Money::new(amt)).unwrap_err(),
                TxError::NonPositiveAmount(Money::new(amt))
            );
        }
        assert_eq!(ledger.get_balance(1).unwrap(), Money::new(100));
    }

    #[test]
    fn deposit_that_would_overflow_is_rejected() {
        let mut ledger = ledger_with(i64::MAX - 5);

        assert_eq!(
            handle(&mut ledger, 1, Money::new(10)).unwrap_err(),
            TxError::Overflow(Money::new(10))
        );
        assert_eq!(ledger.get_balance(1).unwrap(), Money::new(i64::MAX - 5));
    }

    #[test]
    fn deposit_to_missing_account_is_a_ledger_error() {
        let mut ledger = ledger_with(0);

        assert_eq!(
            handle(&mut ledger, 2, Money::new(10)).unwrap_err(),
            TxError::Ledger(LedgerError::AccountNotFound(2))
        );
    }
}
