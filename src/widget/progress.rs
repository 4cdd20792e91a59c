//! Gallows progress display
//!
//! Shows one image of a numbered series (`<base>_0`, `<base>_1`, ...) plus the
//! terminal `<base>_win` and `<base>_lose` images. The controller decides which
//! state to show; this component only resolves, loads and paints it.

use image::DynamicImage;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::{Render, Size, Surface};
use crate::asset::{self, AssetError};

/// Preferred size of the gallows image
pub const DEFAULT_SIZE: Size = Size::new(440, 255);

/// Visual state of the gallows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Number of wrong guesses so far
    Failure(u32),
    Win,
    Lose,
}

impl Default for Stage {
    fn default() -> Self {
        Stage::Failure(0)
    }
}

/// Formats as the state id, which doubles as the asset suffix
impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Failure(n) => write!(f, "{}", n),
            Stage::Win => f.write_str("win"),
            Stage::Lose => f.write_str("lose"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid stage id {0:?}: expected a non-negative integer, \"win\" or \"lose\"")]
pub struct StageParseError(pub String);

impl FromStr for Stage {
    type Err = StageParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "win" => Ok(Stage::Win),
            "lose" => Ok(Stage::Lose),
            _ if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) => s
                .parse()
                .map(Stage::Failure)
                .map_err(|_| StageParseError(s.to_string())),
            _ => Err(StageParseError(s.to_string())),
        }
    }
}

/// Image slot showing the current gallows stage
#[derive(Debug)]
pub struct ProgressDisplay {
    base_name: String,
    directory: String,
    extension: String,
    stage: Stage,
    path: PathBuf,
    image: DynamicImage,
    size: Size,
    redraws: u64,
}

impl ProgressDisplay {
    /// Create a display for the `base_name` series, showing stage 0.
    ///
    /// Fails if `<directory><base_name>_0<extension>` cannot be loaded.
    pub fn new(
        base_name: impl Into<String>,
        directory: impl Into<String>,
        extension: impl Into<String>,
    ) -> Result<Self, AssetError> {
        let base_name = base_name.into();
        let directory = directory.into();
        let extension = extension.into();

        let stage = Stage::default();
        let path = asset::resolve(&directory, &base_name, Some(&stage.to_string()), &extension);
        let image = asset::load(&path)?;

        tracing::debug!(path = %path.display(), "progress display created");

        Ok(Self {
            base_name,
            directory,
            extension,
            stage,
            path,
            image,
            size: DEFAULT_SIZE,
            redraws: 0,
        })
    }

    /// The classic `images/hangman_*.png` series
    pub fn open_default() -> Result<Self, AssetError> {
        Self::new("hangman", "images/", ".png")
    }

    /// Override the preferred size at construction time
    pub fn with_size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    /// Show failure stage `n`. Any stage may be requested at any time.
    pub fn advance_to_stage(&mut self, n: u32) -> Result<(), AssetError> {
        self.transition(Stage::Failure(n))
    }

    pub fn show_win(&mut self) -> Result<(), AssetError> {
        self.transition(Stage::Win)
    }

    pub fn show_lose(&mut self) -> Result<(), AssetError> {
        self.transition(Stage::Lose)
    }

    /// Load the asset for `stage`, then commit state, image and one redraw together.
    /// On failure nothing changes.
    fn transition(&mut self, stage: Stage) -> Result<(), AssetError> {
        let path = asset::resolve(
            &self.directory,
            &self.base_name,
            Some(&stage.to_string()),
            &self.extension,
        );
        let image = asset::load(&path)?;

        tracing::debug!(from = %self.stage, to = %stage, path = %path.display(), "progress transition");

        self.stage = stage;
        self.path = path;
        self.image = image;
        self.redraws += 1;
        Ok(())
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Current state id: the stage number, `"win"` or `"lose"`
    pub fn state_id(&self) -> String {
        self.stage.to_string()
    }

    /// Path of the currently loaded image
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn image(&self) -> &DynamicImage {
        &self.image
    }

    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    pub fn redraw_requests(&self) -> u64 {
        self.redraws
    }
}

impl Render for ProgressDisplay {
    fn preferred_size(&self) -> Size {
        self.size
    }

    fn revision(&self) -> u64 {
        self.redraws
    }

    fn render(&self, surface: &mut dyn Surface) {
        surface.draw_image(&self.image, (0, 0), self.size);
    }
}
