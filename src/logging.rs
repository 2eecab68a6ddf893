use tracing_subscriber::filter::{Directive, EnvFilter};

use crate::config;

/// Installs the global subscriber. Logs go to stderr so they never interleave
/// with the customer dialogue on stdout.
///
/// `RUST_LOG` sets the base filter (default `warn`). A non-zero `verbosity`
/// overrides this crate's own level; zero leaves `RUST_LOG` in charge.
pub fn set_up(verbosity: u8) {
    let mut filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    if let Some(directive) = crate_directive(verbosity) {
        filter = filter.add_directive(directive);
    }

    // Ignore the error if a subscriber is already installed.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(true)
        .try_init();
}

fn crate_directive(verbosity: u8) -> Option<Directive> {
    if verbosity == 0 {
        return None;
    }
    format!("{}={}", config::BIN_NAME, max_level(verbosity))
        .parse()
        .ok()
}

fn max_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
