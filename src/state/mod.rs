/// State management module
///
/// This module handles persisted board settings (config.rs): where the art
/// lives, display sizes, the candidate alphabet and the word list. It also
/// keeps the host's round bookkeeping (round.rs).

pub mod config;
pub mod round;

pub use config::{BoardConfig, ConfigError};
pub use round::{Outcome, Round};
