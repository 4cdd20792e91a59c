//! Letter tiles
//!
//! One tile per candidate letter. A tile shows `<letter><ext>` until it is
//! revealed, then `<letter>_guessed<ext>`, and reports at most one user guess.

use image::DynamicImage;
use std::fmt;
use std::path::{Path, PathBuf};

use super::{Render, Size, Surface};
use crate::asset::{self, AssetError};

/// Preferred size of a letter tile (square)
pub const DEFAULT_SIZE: Size = Size::new(50, 50);

/// Suffix of the image shown once a letter has been guessed
const GUESSED_SUFFIX: &str = "guessed";

/// Reaction to a tile interaction, called with the tile's letter
pub type GuessHandler = Box<dyn FnMut(char)>;

/// A clickable tile for one candidate letter.
///
/// The tile starts unrevealed (`<letter><ext>`). `reveal()` swaps in
/// `<letter>_guessed<ext>` and detaches the interaction handler, so a user can
/// guess each letter once.
pub struct GuessTile {
    letter: char,
    directory: String,
    extension: String,
    revealed: bool,
    handler: Option<GuessHandler>,
    path: PathBuf,
    image: DynamicImage,
    size: Size,
    redraws: u64,
}

impl GuessTile {
    /// Create an unrevealed tile. Fails if `<directory><letter><extension>` cannot be loaded.
    pub fn new(
        letter: char,
        directory: impl Into<String>,
        extension: impl Into<String>,
    ) -> Result<Self, AssetError> {
        let directory = directory.into();
        let extension = extension.into();

        let path = asset::resolve(&directory, &letter.to_string(), None, &extension);
        let image = asset::load(&path)?;

        Ok(Self {
            letter,
            directory,
            extension,
            revealed: false,
            handler: None,
            path,
            image,
            size: DEFAULT_SIZE,
            redraws: 0,
        })
    }

    /// The classic `images/e.png` tile
    pub fn open_default() -> Result<Self, AssetError> {
        Self::new('e', "images/", ".png")
    }

    /// Override the preferred size at construction time
    pub fn with_size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    /// Attach the interaction handler, replacing any previous one.
    ///
    /// A revealed tile never fires again, so registration after `reveal()` is dropped.
    pub fn register_interaction_handler<F>(&mut self, handler: F)
    where
        F: FnMut(char) + 'static,
    {
        if self.revealed {
            tracing::debug!(letter = %self.letter, "ignoring handler for revealed tile");
            return;
        }
        self.handler = Some(Box::new(handler));
    }

    /// Deliver a user interaction (click/tap). Returns whether a handler ran.
    pub fn interact(&mut self) -> bool {
        let letter = self.letter;
        match self.handler.as_mut() {
            Some(handler) => {
                handler(letter);
                true
            }
            None => false,
        }
    }

    /// Mark the letter as guessed and return it.
    ///
    /// The first call loads the guessed image, detaches the handler and requests a
    /// redraw. Later calls change nothing and just return the letter. If the guessed
    /// image is missing the tile stays unrevealed with its handler attached.
    pub fn reveal(&mut self) -> Result<char, AssetError> {
        if self.revealed {
            tracing::debug!(letter = %self.letter, "tile already revealed");
            return Ok(self.letter);
        }

        let path = asset::resolve(
            &self.directory,
            &self.letter.to_string(),
            Some(GUESSED_SUFFIX),
            &self.extension,
        );
        let image = asset::load(&path)?;

        tracing::debug!(letter = %self.letter, path = %path.display(), "tile revealed");

        self.handler.take();
        self.revealed = true;
        self.path = path;
        self.image = image;
        self.redraws += 1;
        Ok(self.letter)
    }

    pub fn letter(&self) -> char {
        self.letter
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn has_handler(&self) -> bool {
        self.handler.is_some()
    }

    /// Path of the currently loaded image
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn image(&self) -> &DynamicImage {
        &self.image
    }

    pub fn redraw_requests(&self) -> u64 {
        self.redraws
    }
}

impl Render for GuessTile {
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

impl fmt::Debug for GuessTile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GuessTile")
            .field("letter", &self.letter)
            .field("revealed", &self.revealed)
            .field("has_handler", &self.handler.is_some())
            .field("path", &self.path)
            .finish()
    }
}

/// Build one unrevealed tile per candidate letter, in order.
///
/// Stops at the first letter whose image is missing.
pub fn alphabet(letters: &str, directory: &str, extension: &str) -> Result<Vec<GuessTile>, AssetError> {
    letters
        .chars()
        .map(|letter| GuessTile::new(letter, directory, extension))
        .collect()
}
