pub mod acquire;
pub mod reader;
pub mod terminal;
pub mod writer;
