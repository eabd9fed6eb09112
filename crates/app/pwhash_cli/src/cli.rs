use std::ffi::OsString;

use clap::{Parser, Subcommand};

const AFTER_HELP: &str = "Note: your shell may need the hash escaped, i.e. wrapped in 'single quotes'.";

/// Hash bcrypt passwords, check them and inspect their cost.
#[derive(Parser, Debug)]
#[command(name = "pwhash", version = pwhash_core::version(), about, after_help = AFTER_HELP)]
pub struct Cli {
    /// Cost used by `hash` when none is given [env: PWHASH_DEFAULT_COST, default: 4]
    #[arg(long, global = true, value_name = "COST")]
    pub default_cost: Option<u32>,

    /// Minimum password length in characters [env: PWHASH_MIN_PASSWORD_LENGTH, default: 4]
    #[arg(long, global = true, value_name = "CHARS")]
    pub min_length: Option<usize>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Generate a hash for a password with an optional cost (4-31)
    Hash {
        #[arg(allow_hyphen_values = true)]
        password: String,
        cost: Option<u32>,
    },
    /// Check a password against a hash; outcome=true if it matches
    Match {
        #[arg(allow_hyphen_values = true)]
        password: String,
        hash: String,
    },
    /// Print the cost a hash was generated with
    Cost { hash: String },
}

const VERBS: [&str; 3] = ["hash", "match", "cost"];
const VALUE_FLAGS: [&str; 2] = ["--default-cost", "--min-length"];

/// Lowercase the subcommand so `HASH` and `Match` work like `hash` and `match`.
///
/// Only the first positional argument is touched; operands keep their case.
pub fn normalize_verb(mut args: Vec<OsString>) -> Vec<OsString> {
    let mut skip_value = false;
    for arg in args.iter_mut().skip(1) {
        if skip_value {
            skip_value = false;
            continue;
        }
        let Some(s) = arg.to_str() else { break };
        if VALUE_FLAGS.contains(&s) {
            skip_value = true;
            continue;
        }
        if s.starts_with('-') {
            continue;
        }
        if let Some(verb) = VERBS.iter().find(|v| v.eq_ignore_ascii_case(s)) {
            *arg = OsString::from(*verb);
        }
        break;
    }
    args
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn os(args: &[&str]) -> Vec<OsString> {
        args.iter().map(OsString::from).collect()
    }

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(normalize_verb(os(args))).unwrap()
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_hash_with_and_without_cost() {
        assert_eq!(
            parse(&["pwhash", "hash", "pass1234"]).command,
            Commands::Hash {
                password: "pass1234".into(),
                cost: None
            }
        );
        assert_eq!(
            parse(&["pwhash", "hash", "pass1234", "6"]).command,
            Commands::Hash {
                password: "pass1234".into(),
                cost: Some(6)
            }
        );
    }

    #[test]
    fn parses_match_and_cost() {
        assert_eq!(
            parse(&["pwhash", "match", "pw", "$2b$04$x"]).command,
            Commands::Match {
                password: "pw".into(),
                hash: "$2b$04$x".into()
            }
        );
        assert_eq!(
            parse(&["pwhash", "cost", "$2b$04$x"]).command,
            Commands::Cost {
                hash: "$2b$04$x".into()
            }
        );
    }

    #[test]
    fn match_requires_hash() {
        assert!(Cli::try_parse_from(os(&["pwhash", "match", "pass1234"])).is_err());
    }

    #[test]
    fn verbs_are_case_insensitive() {
        assert!(matches!(
            parse(&["pwhash", "HASH", "pass1234"]).command,
            Commands::Hash { .. }
        ));
        assert!(matches!(
            parse(&["pwhash", "--default-cost", "5", "Cost", "x"]).command,
            Commands::Cost { .. }
        ));
    }

    #[test]
    fn operands_keep_their_case() {
        assert_eq!(
            normalize_verb(os(&["pwhash", "match", "HASH", "x"])),
            os(&["pwhash", "match", "HASH", "x"])
        );
    }

    #[test]
    fn version_comes_from_core() {
        assert_eq!(
            Cli::command().get_version(),
            Some(pwhash_core::version())
        );
    }

    #[test]
    fn global_flags_parse() {
        let cli = parse(&["pwhash", "hash", "pass1234", "--default-cost", "7", "--min-length", "6"]);
        assert_eq!(cli.default_cost, Some(7));
        assert_eq!(cli.min_length, Some(6));
    }
}
