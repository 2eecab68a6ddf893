use std::collections::{HashMap, hash_map::Entry};

use crate::{
    common::{error::LedgerError, money::Money},
    domain::account::{Account, AccountId, AccountSpec},
};

/// The in-memory store of accounts and their balances.
///
/// The ledger is the only place balances are read or written. It performs no
/// range or overdraft checks; those belong to the action handlers.
#[derive(Debug, Default)]
pub struct Ledger {
    accounts: HashMap<AccountId, Account>,
}

impl Ledger {
    pub fn new() -> Self {
        Self {
            accounts: HashMap::new(),
        }
    }

    /// Builds a ledger from `specs`, failing on duplicate ids.
    pub fn from_specs<I>(specs: I) -> Result<Self, LedgerError>
    where
        I: IntoIterator<Item = AccountSpec>,
    {
        let mut ledger = Self::new();
        ledger.initialize(specs)?;
        Ok(ledger)
    }

    /// Replaces the ledger contents with accounts built from `specs`.
    ///
    /// All specs are validated before anything is replaced, so a duplicate id
    /// leaves the previous accounts in place.
    pub fn initialize<I>(&mut self, specs: I) -> Result<(), LedgerError>
    where
        I: IntoIterator<Item = AccountSpec>,
    {
        let mut accounts = HashMap::new();
        for spec in specs {
            match accounts.entry(spec.id) {
                Entry::Occupied(_) => return Err(LedgerError::DuplicateId(spec.id)),
                Entry::Vacant(slot) => {
                    slot.insert(Account::new(spec));
                }
            }
        }
        self.accounts = accounts;
        Ok(())
    }

    pub fn accounts(&self) -> &HashMap<AccountId, Account> {
        &self.accounts
    }

    pub fn contains(&self, id: AccountId) -> bool {
        self.accounts.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    pub fn get_balance(&self, id: AccountId) -> Result<Money, LedgerError> {
        self.account(id).map(Account::balance)
    }

    pub fn get_name(&self, id: AccountId) -> Result<&str, LedgerError> {
        self.account(id).map(Account::name)
    }

    /// Overwrites the balance of `id` with `new_balance`.
    pub fn update_balance(&mut self, id: AccountId, new_balance: Money) -> Result<(), LedgerError> {
        let acc = self
            .accounts
            .get_mut(&id)
            .ok_or(LedgerError::AccountNotFound(id))?;
        acc.set_balance(new_balance);
        Ok(())
    }

    fn account(&self, id: AccountId) -> Result<&Account, LedgerError> {
        self.accounts
            .get(&id)
            .ok_or(LedgerError::AccountNotFound(id))
    }
}
