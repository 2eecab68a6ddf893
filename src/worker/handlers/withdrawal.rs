use crate::{
    common::{error::TxError, money::Money},
    domain::{account::AccountId, ledger::Ledger},
};

/// Debits `amount` from `id` and returns the new balance.
///
/// Overdrafts are refused: a withdrawal larger than the current balance fails
/// with [`TxError::InsufficientFunds`] and leaves the ledger untouched.
pub fn handle(ledger: &mut Ledger, id: AccountId, amount: Money) -> Result<Money, TxError> {
    let balance = ledger.get_balance(id)?;

    if !amount.is_positive() {
        return Err(TxError::NonPositiveAmount(amount));
    }
    if amount > balance {
        return Err(TxError::InsufficientFunds {
            balance,
            requested: amount,
        });
    }

    // amount is in (0, balance], so this cannot underflow
    let new_balance = balance - amount;
    ledger.update_balance(id, new_balance)?;
    Ok(new_balance)
}
