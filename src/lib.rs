//! Image-backed hangman board components.
//!
//! A `ProgressDisplay` shows the gallows for the number of wrong guesses (or the
//! win/lose picture) and a set of `GuessTile`s lets the player pick letters. Both
//! resolve their images through the naming contract in [`asset`] and paint through
//! the toolkit-neutral [`widget::Render`] capability; [`ui`] adapts them to iced.

pub mod asset;
pub mod logging;
pub mod state;
pub mod ui;
pub mod widget;

pub use asset::AssetError;
pub use state::BoardConfig;
pub use widget::{GuessTile, ProgressDisplay, Render, Size, Stage};
