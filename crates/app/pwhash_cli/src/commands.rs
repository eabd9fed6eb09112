//! Runs a parsed command against the hashing service.

use std::fmt;

use log::info;
use pwhash_core::{Cost, PasswordHasher, RECOMMENDED_COST};

use crate::cli::Commands;
use crate::{Error, Result};

/// Outcome of a command, printed as one line on stdout.
#[derive(Debug, PartialEq, Eq)]
pub enum Report {
    Hashed {
        password: String,
        hash: String,
    },
    Matched {
        password: String,
        hash: String,
        outcome: bool,
    },
    Cost {
        hash: String,
        cost: Cost,
    },
}

impl Report {
    /// `false` only for a password that did not match.
    pub fn outcome(&self) -> bool {
        match self {
            Report::Matched { outcome, .. } => *outcome,
            Report::Hashed { .. } | Report::Cost { .. } => true,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::Hashed { password, hash } => {
                write!(f, "outcome=true password={password}, hash={hash}")
            }
            Report::Matched {
                password,
                hash,
                outcome,
            } => write!(f, "outcome={outcome} password={password}, hash={hash}"),
            Report::Cost { hash, cost } => write!(f, "outcome=true hash={hash} cost={cost}"),
        }
    }
}

pub fn execute(hasher: &PasswordHasher, command: Commands) -> Result<Report> {
    match command {
        Commands::Hash { password, cost } => {
            let hash = match cost {
                Some(cost) => hasher.hash(&password, cost)?,
                None => hasher.hash_default(&password)?,
            };
            info!("hash (cost {})", hash.cost());
            if hash.cost().is_weak() {
                info!(
                    "cost {} is below the recommended {RECOMMENDED_COST}",
                    hash.cost()
                );
            }
            // Read the new hash back before handing it out.
            if !hasher.verify(hash.as_str(), &password)? {
                return Err(Error::Custom(
                    "generated hash does not verify against its password".to_string(),
                ));
            }
            Ok(Report::Hashed {
                password,
                hash: hash.into_string(),
            })
        }
        Commands::Match { password, hash } => {
            info!("match");
            let outcome = hasher.verify(&hash, &password)?;
            Ok(Report::Matched {
                password,
                hash,
                outcome,
            })
        }
        Commands::Cost { hash } => {
            info!("cost");
            let cost = PasswordHasher::extract_cost(&hash)?;
            Ok(Report::Cost { hash, cost })
        }
    }
}
