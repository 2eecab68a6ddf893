use crate::common::money::Money;

/// A customer intent acquired from the terminal and consumed by the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Balance,
    Withdraw(Money),
    Deposit(Money),
    /// Ends the current customer's session.
    Next,
    /// Shuts the whole terminal down.
    Finished,
}
