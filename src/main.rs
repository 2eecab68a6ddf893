use std::process::ExitCode;

use atm_sim::{app, common::error::AppError};

fn main() -> ExitCode {
    match app::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(AppError::Cli(e)) => e.exit(),
        Err(e) => {
            tracing::error!(error = %e, "terminal aborted");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
