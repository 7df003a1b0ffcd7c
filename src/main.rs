//! Saltseal - declarative anonymous sealed-box encryption.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use saltseal::cli::output;
use saltseal::cli::{execute, Cli};
use saltseal::core::constants::LOG_ENV;
use saltseal::error::{ConfigError, Error, StateError};

/// Install the global subscriber. `SALTSEAL_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool, json: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        EnvFilter::new(if verbose {
            "saltseal=debug"
        } else {
            "saltseal=warn"
        })
    });

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .without_time()
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

/// Follow-up command for errors the user can act on.
fn hint(err: &Error) -> Option<&'static str> {
    match err {
        Error::Config(ConfigError::NotInitialized(_)) => Some("run: saltseal init"),
        Error::State(StateError::Corrupt { .. }) => {
            Some("remove the entry from the state file, then run: saltseal apply")
        }
        Error::State(StateError::NotFound(_)) => Some("run: saltseal show"),
        _ => None,
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.log_json);

    if let Err(e) = execute(cli.command, &cli.paths) {
        output::error(&e.to_string());
        if let Some(h) = hint(&e) {
            output::hint(h);
        }
        std::process::exit(1);
    }
}
