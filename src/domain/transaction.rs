use crate::{common::money::Money, domain::account::AccountId};

/// An applied withdrawal or deposit, kept in the processor's journal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRecord {
    pub seq: u64,
    pub account: AccountId,
    pub kind: TxKind,
    pub amount: Money,
    pub balance_after: Money,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxKind {
    Deposit,
    Withdrawal,
}

impl TransactionRecord {
    pub fn new(
        seq: u64,
        account: AccountId,
        kind: TxKind,
        amount: Money,
        balance_after: Money,
    ) -> Self {
        Self {
            seq,
            account,
            kind,
            amount,
            balance_after,
        }
    }
}
