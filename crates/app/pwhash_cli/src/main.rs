// Import and re-export the `error` module
pub use self::error::{Error, Result};
mod error;

use std::process::ExitCode;

use clap::Parser;
use cli::Cli;
use pwhash_core::{Cost, HasherConfig, PasswordHasher};

mod cli;
mod commands;
mod logging;

fn main() -> ExitCode {
    match run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

/// Returns the command's outcome; `false` means the password did not match.
fn run() -> Result<bool> {
    logging::init()?;

    let args = Cli::parse_from(cli::normalize_verb(std::env::args_os().collect()));
    let hasher = PasswordHasher::new(resolve_config(&args)?);

    let report = commands::execute(&hasher, args.command)?;
    println!("{report}");

    Ok(report.outcome())
}

/// Environment first, then command-line flags on top.
fn resolve_config(args: &Cli) -> Result<HasherConfig> {
    let mut config = HasherConfig::from_env()?;
    if let Some(cost) = args.default_cost {
        config.default_cost = Cost::new(cost)?;
    }
    if let Some(min) = args.min_length {
        config.min_password_len = min;
    }
    log::debug!("{config:?}");
    Ok(config)
}
