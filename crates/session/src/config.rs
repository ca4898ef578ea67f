//! Runtime configuration.
//!
//! Values come from the environment first, then from command-line flags,
//! which override the environment.

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};

use crate::types::TICK_MS;

pub const ENV_SEED: &str = "FROGGER_SEED";
pub const ENV_TICK_MS: &str = "FROGGER_TICK_MS";
pub const ENV_JOURNAL_PATH: &str = "FROGGER_JOURNAL_PATH";
pub const ENV_JOURNAL_DISABLED: &str = "FROGGER_JOURNAL_DISABLED";

/// Session configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Seed for lane start offsets.
    pub seed: u32,
    /// Frame interval in milliseconds (at least 1).
    pub tick_ms: u32,
    /// Where to append outcome records, if anywhere.
    pub journal_path: Option<PathBuf>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            tick_ms: TICK_MS,
            journal_path: None,
        }
    }
}

impl SessionConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary key lookup (the environment, or a map in tests).
    ///
    /// Unparseable numbers fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let seed = lookup(ENV_SEED)
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.seed);

        let tick_ms = lookup(ENV_TICK_MS)
            .and_then(|s| s.trim().parse::<u32>().ok())
            .unwrap_or(defaults.tick_ms)
            .max(1);

        let disabled = lookup(ENV_JOURNAL_DISABLED)
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);

        let journal_path = lookup(ENV_JOURNAL_PATH)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty() && !disabled)
            .map(PathBuf::from);

        Self {
            seed,
            tick_ms,
            journal_path,
        }
    }

    /// Apply command-line flags on top of this configuration.
    ///
    /// Accepts `--seed N`, `--tick-ms N`, `--journal PATH` and `--no-journal`.
    pub fn apply_args(&mut self, args: &[String]) -> Result<()> {
        let mut i = 0usize;
        while i < args.len() {
            match args[i].as_str() {
                "--seed" => {
                    let v = flag_value(args, &mut i, "--seed")?;
                    self.seed = v
                        .parse::<u32>()
                        .with_context(|| format!("invalid --seed value: {}", v))?;
                }
                "--tick-ms" => {
                    let v = flag_value(args, &mut i, "--tick-ms")?;
                    let ms = v
                        .parse::<u32>()
                        .with_context(|| format!("invalid --tick-ms value: {}", v))?;
                    if ms == 0 {
                        return Err(anyhow!("--tick-ms must be at least 1"));
                    }
                    self.tick_ms = ms;
                }
                "--journal" => {
                    let v = flag_value(args, &mut i, "--journal")?;
                    self.journal_path = Some(PathBuf::from(v));
                }
                "--no-journal" => {
                    self.journal_path = None;
                }
                other => {
                    return Err(anyhow!("unknown argument: {}", other));
                }
            }
            i += 1;
        }
        Ok(())
    }
}

fn flag_value<'a>(args: &'a [String], i: &mut usize, flag: &str) -> Result<&'a str> {
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| anyhow!("missing value for {}", flag))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_defaults_without_env() {
        let cfg = SessionConfig::from_lookup(|_| None);
        assert_eq!(cfg, SessionConfig::default());
        assert_eq!(cfg.tick_ms, 16);
    }

    #[test]
    fn test_env_values() {
        let cfg = SessionConfig::from_lookup(lookup(&[
            (ENV_SEED, "42"),
            (ENV_TICK_MS, "33"),
            (ENV_JOURNAL_PATH, " /tmp/frogger.jsonl "),
        ]));
        assert_eq!(cfg.seed, 42);
        assert_eq!(cfg.tick_ms, 33);
        assert_eq!(cfg.journal_path, Some(PathBuf::from("/tmp/frogger.jsonl")));
    }

    #[test]
    fn test_bad_env_numbers_fall_back() {
        let cfg = SessionConfig::from_lookup(lookup(&[(ENV_SEED, "abc"), (ENV_TICK_MS, "0")]));
        assert_eq!(cfg.seed, 1);
        assert_eq!(cfg.tick_ms, 1);
    }

    #[test]
    fn test_journal_disabled_wins() {
        let cfg = SessionConfig::from_lookup(lookup(&[
            (ENV_JOURNAL_PATH, "/tmp/frogger.jsonl"),
            (ENV_JOURNAL_DISABLED, "TRUE"),
        ]));
        assert_eq!(cfg.journal_path, None);
    }

    #[test]
    fn test_args_override_env() {
        let mut cfg = SessionConfig::from_lookup(lookup(&[(ENV_SEED, "42")]));
        cfg.apply_args(&args(&["--seed", "7", "--tick-ms", "20", "--journal", "out.jsonl"]))
            .unwrap();
        assert_eq!(cfg.seed, 7);
        assert_eq!(cfg.tick_ms, 20);
        assert_eq!(cfg.journal_path, Some(PathBuf::from("out.jsonl")));

        cfg.apply_args(&args(&["--no-journal"])).unwrap();
        assert_eq!(cfg.journal_path, None);
    }

    #[test]
    fn test_bad_args_are_errors() {
        let mut cfg = SessionConfig::default();
        assert!(cfg.apply_args(&args(&["--seed"])).is_err());
        assert!(cfg.apply_args(&args(&["--seed", "x"])).is_err());
        assert!(cfg.apply_args(&args(&["--tick-ms", "0"])).is_err());
        let err = cfg.apply_args(&args(&["--fast"])).unwrap_err();
        assert!(err.to_string().contains("--fast"));
    }
}
