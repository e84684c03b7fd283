//! Runtime configuration for the terminal front end.
//!
//! Environment variables provide defaults, command-line flags override them.
//!
//! | Flag              | Env var            | Default   |
//! |-------------------|--------------------|-----------|
//! | `--seed N`        | `TUI2048_SEED`     | clock     |
//! | `--log FILTER`    | `TUI2048_LOG`      | `info`    |
//! | `--log-path PATH` | `TUI2048_LOG_PATH` | (off)     |
//! | `--no-mouse`      | `TUI2048_MOUSE=0`  | mouse on  |
//! | `--swipe-ms N`    | `TUI2048_SWIPE_MS` | `300`     |

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Result};

use crate::types::MOUSE_SWIPE_MAX_MS;

pub const USAGE: &str = "\
usage: tui-2048 [--seed N] [--log FILTER] [--log-path PATH] [--no-mouse] [--swipe-ms N]

keys: arrows / hjkl / wasd move, r restart, q or Esc quit
mouse: drag across the board to swipe";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Fixed RNG seed; `None` seeds from the clock.
    pub seed: Option<u64>,
    /// `tracing` filter directive.
    pub log_filter: String,
    /// Log file; logging stays off without one.
    pub log_path: Option<PathBuf>,
    pub mouse: bool,
    /// Longest mouse drag that still counts as a swipe.
    pub swipe_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: None,
            log_filter: "info".to_string(),
            log_path: None,
            mouse: true,
            swipe_ms: MOUSE_SWIPE_MAX_MS,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source. Unparseable values fall back
    /// to their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .and_then(|s| if s.is_empty() { None } else { Some(s) })
        };
        let defaults = Self::default();

        Self {
            seed: var("TUI2048_SEED").and_then(|s| s.parse().ok()),
            log_filter: var("TUI2048_LOG").unwrap_or(defaults.log_filter),
            log_path: var("TUI2048_LOG_PATH").map(PathBuf::from),
            mouse: var("TUI2048_MOUSE").map_or(defaults.mouse, |s| parse_flag(&s)),
            swipe_ms: var("TUI2048_SWIPE_MS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.swipe_ms),
        }
    }

    /// Apply command-line flags (without the program name).
    ///
    /// Returns `Ok(None)` when help was requested.
    pub fn parse_args(mut self, args: &[String]) -> Result<Option<Self>> {
        let mut i = 0usize;
        while i < args.len() {
            match args[i].as_str() {
                "-h" | "--help" => return Ok(None),
                "--seed" => {
                    let v = flag_value(args, &mut i, "--seed")?;
                    self.seed = Some(
                        v.parse::<u64>()
                            .map_err(|_| anyhow!("invalid --seed value: {}", v))?,
                    );
                }
                "--log" => {
                    self.log_filter = flag_value(args, &mut i, "--log")?.to_string();
                }
                "--log-path" => {
                    self.log_path = Some(PathBuf::from(flag_value(args, &mut i, "--log-path")?));
                }
                "--no-mouse" => self.mouse = false,
                "--swipe-ms" => {
                    let v = flag_value(args, &mut i, "--swipe-ms")?;
                    self.swipe_ms = v
                        .parse::<u32>()
                        .map_err(|_| anyhow!("invalid --swipe-ms value: {}", v))?;
                }
                other => return Err(anyhow!("unknown argument: {}", other)),
            }
            i += 1;
        }
        Ok(Some(self))
    }

    /// The configured seed, or one derived from the wall clock.
    pub fn seed_or_clock(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(1)
        })
    }
}

fn flag_value<'a>(args: &'a [String], i: &mut usize, flag: &str) -> Result<&'a str> {
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| anyhow!("missing value for {}", flag))
}

fn parse_flag(s: &str) -> bool {
    !matches!(
        s.to_ascii_lowercase().as_str(),
        "0" | "false" | "off" | "no"
    )
}
