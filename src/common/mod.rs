pub mod action;
pub mod error;
pub mod money;
