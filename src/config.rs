//! Run configuration and command-line parsing.

use std::time::Duration;

use thiserror::Error;

use crate::grid::{check_dimensions, GridError};

pub const USAGE: &str = "\
Usage: conway_life [OPTIONS]

Options:
  --rows N           number of rows (default 20)
  --cols N           number of columns (default 50)
  --delay-ms N       milliseconds between generations (default 100)
  --seed N           seed the random generator for a reproducible run
  --generations N    stop after N generations
  --alive C          symbol for a live cell (default '#')
  --dead C           symbol for a dead cell (default '.')
  --plain            print to the console instead of the interactive view
  -h, --help         show this help

Logging goes to stderr (RUST_LOG=info|debug|trace). It is muted while the
interactive view is on screen; use --plain with 2>file to capture it.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown option {0:?}")]
    UnknownFlag(String),
    #[error("option {0} needs a value")]
    MissingValue(String),
    #[error("invalid value {value:?} for {flag}")]
    InvalidValue { flag: String, value: String },
    #[error("{0} must be greater than zero")]
    Zero(&'static str),
    #[error(transparent)]
    Dimensions(#[from] GridError),
    #[error("alive and dead symbols must differ, both are {0:?}")]
    SameSymbols(char),
    /// `--help` was given; not a failure, the caller prints [`USAGE`].
    #[error("help requested")]
    Help,
}

/// Everything the driver needs to run a simulation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Number of grid rows
    pub rows: usize,
    /// Number of grid columns
    pub cols: usize,
    /// Pause between generations.
    pub delay: Duration,
    /// Symbol drawn for a live cell
    pub alive: char,
    /// Symbol drawn for a dead cell
    pub dead: char,
    /// Seed for a reproducible run; entropy when absent
    pub seed: Option<u64>,
    /// Stop after this many generations instead of running until quit.
    pub generations: Option<u64>,
    /// Print to the console instead of the interactive view
    pub plain: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            rows: 20,
            cols: 50,
            delay: Duration::from_millis(100),
            alive: '#',
            dead: '.',
            seed: None,
            generations: None,
            plain: false,
        }
    }
}

impl Config {
    /// Parses command-line arguments, not including the program name.
    pub fn from_args<I, S>(args: I) -> Result<Config, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut config = Config::default();
        let mut args = args.into_iter().map(Into::into);

        while let Some(flag) = args.next() {
            match flag.as_str() {
                "-h" | "--help" => return Err(ConfigError::Help),
                "--plain" => config.plain = true,
                "--rows" => config.rows = number(&flag, args.next())?,
                "--cols" => config.cols = number(&flag, args.next())?,
                "--delay-ms" => {
                    config.delay = Duration::from_millis(number(&flag, args.next())?)
                }
                "--seed" => config.seed = Some(number(&flag, args.next())?),
                "--generations" => config.generations = Some(number(&flag, args.next())?),
                "--alive" => config.alive = symbol(&flag, args.next())?,
                "--dead" => config.dead = symbol(&flag, args.next())?,
                _ => return Err(ConfigError::UnknownFlag(flag)),
            }
        }

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 {
            return Err(ConfigError::Zero("--rows"));
        }
        if self.cols == 0 {
            return Err(ConfigError::Zero("--cols"));
        }
        check_dimensions(self.rows, self.cols)?;
        if self.alive == self.dead {
            return Err(ConfigError::SameSymbols(self.alive));
        }
        Ok(())
    }
}

fn value(flag: &str, value: Option<String>) -> Result<String, ConfigError> {
    value.ok_or_else(|| ConfigError::MissingValue(flag.to_string()))
}

fn number<T: std::str::FromStr>(flag: &str, raw: Option<String>) -> Result<T, ConfigError> {
    let raw = value(flag, raw)?;
    raw.parse().map_err(|_| ConfigError::InvalidValue {
        flag: flag.to_string(),
        value: raw,
    })
}

fn symbol(flag: &str, raw: Option<String>) -> Result<char, ConfigError> {
    let raw = value(flag, raw)?;
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(ConfigError::InvalidValue {
            flag: flag.to_string(),
            value: raw,
        }),
    }
}
