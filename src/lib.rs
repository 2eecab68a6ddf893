pub mod app;
pub mod common;
pub mod config;
pub mod domain;
pub mod io;
pub mod logging;
pub mod worker;
