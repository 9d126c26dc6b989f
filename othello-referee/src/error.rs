//! Errors raised while configuring or running a match.

use derive_more::{Display, Error, From};
use othello_rules::{Color, InvalidMove, RegistryError};
use std::path::PathBuf;

/// Errors that can occur when loading a [`MatchConfig`](crate::MatchConfig).
#[derive(Debug, Display, Error, From)]
pub enum ConfigError {
    #[display(fmt = "failed to read config file {:?}: {}", path, source)]
    #[from(ignore)]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[display(fmt = "failed to parse TOML: {}", _0)]
    TomlParse(toml::de::Error),
    #[display(fmt = "config validation error: {}", _0)]
    #[from(ignore)]
    Validation(#[error(not(source))] String),
}

/// Errors that stop a match before it finishes.
#[derive(Debug, Display, Error, From)]
pub enum RefereeError {
    /// A seat kept offering moves the rules refuse.
    #[display(
        fmt = "{} made {} invalid moves in a row (last: {})",
        color,
        attempts,
        last
    )]
    #[from(ignore)]
    TooManyRejections {
        color: Color,
        attempts: u32,
        last: InvalidMove,
    },
    /// A seat with legal moves offered nothing.
    #[display(fmt = "{} offered no move despite having legal moves", color)]
    #[from(ignore)]
    SeatResigned { color: Color },
    #[display(fmt = "player registry error: {}", _0)]
    Registry(RegistryError),
    #[display(fmt = "{}", _0)]
    Config(ConfigError),
}
