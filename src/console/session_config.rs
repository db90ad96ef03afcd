//! Session options read from the command line.

use crate::utils::fen_parser::parse_layout;

/// Environment variable holding the tracing filter (e.g. `debug`).
pub const LOG_ENV_VAR: &str = "PAWNS_LOG";
pub const DEFAULT_LOG_FILTER: &str = "warn";

pub const USAGE: &str = "usage: pawns_only_chess [--vs-random] [--seed <n>] [--record] [--layout \"<layout>\"]";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionConfig {
    /// Second player is the random engine instead of a human.
    pub vs_random: bool,
    pub seed: Option<u64>,
    /// Print a PGN-style record when the session ends.
    pub record: bool,
    pub layout: Option<String>,
}

impl SessionConfig {
    pub fn from_args<I>(args: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = SessionConfig::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--vs-random" => config.vs_random = true,
                "--record" => config.record = true,
                "--seed" => {
                    let value = args.next().ok_or("--seed needs a value")?;
                    let seed = value
                        .parse::<u64>()
                        .map_err(|_| format!("Invalid seed: {value}"))?;
                    config.seed = Some(seed);
                }
                "--layout" => {
                    let value = args.next().ok_or("--layout needs a value")?;
                    parse_layout(&value)?;
                    config.layout = Some(value);
                }
                "-h" | "--help" => return Err(USAGE.to_owned()),
                other => return Err(format!("Unknown argument: {other}\n{USAGE}")),
            }
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::SessionConfig;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn defaults_to_two_humans() {
        let config = SessionConfig::from_args(args(&[])).expect("empty args are fine");
        assert_eq!(config, SessionConfig::default());
        assert!(!config.vs_random);
    }

    #[test]
    fn reads_all_flags() {
        let config = SessionConfig::from_args(args(&[
            "--vs-random",
            "--seed",
            "42",
            "--record",
            "--layout",
            "8/8/8/8/8/8/4P3/8 w -",
        ]))
        .expect("flags should parse");
        assert!(config.vs_random);
        assert!(config.record);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.layout.as_deref(), Some("8/8/8/8/8/8/4P3/8 w -"));
    }

    #[test]
    fn rejects_bad_values() {
        assert!(SessionConfig::from_args(args(&["--seed"])).is_err());
        assert!(SessionConfig::from_args(args(&["--seed", "x"])).is_err());
        assert!(SessionConfig::from_args(args(&["--layout", "nonsense"])).is_err());
        assert!(SessionConfig::from_args(args(&["--fast"])).is_err());
    }
}
