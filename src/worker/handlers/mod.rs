pub mod balance;
pub mod deposit;
pub mod withdrawal;
