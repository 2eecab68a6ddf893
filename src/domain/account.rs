use crate::common::money::Money;

pub type AccountId = u32;

/// One `(name, id, balance)` triple used to initialize the ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountSpec {
    pub name: String,
    pub id: AccountId,
    pub balance: Money,
}

impl AccountSpec {
    pub fn new(name: impl Into<String>, id: AccountId, balance: i64) -> Self {
        Self {
            name: name.into(),
            id,
            balance: Money::new(balance),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Account {
    id: AccountId,
    name: String,
    balance: Money,
}

impl Account {
    pub fn new(spec: AccountSpec) -> Self {
        Self {
            id: spec.id,
            name: spec.name,
            balance: spec.balance,
        }
    }

    pub fn id(&self) -> AccountId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    // Only the ledger may move money.
    pub(crate) fn set_balance(&mut self, balance: Money) {
        self.balance = balance;
    }
}
