use crate::{
    common::{error::TxError, money::Money},
    domain::{account::AccountId, ledger::Ledger},
};

pub fn handle(ledger: &Ledger, id: AccountId) -> Result<Money, TxError> {
    Ok(ledger.get_balance(id)?)
}
