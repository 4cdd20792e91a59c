/// Board components
///
/// Both components are leaves driven by an external controller:
/// - `ProgressDisplay` shows the gallows for a failure stage, win or lose (progress.rs)
/// - `GuessTile` shows one candidate letter and reports a guess once (tile.rs)
/// - `RasterSurface` paints any component into an RGBA buffer (surface.rs)

pub mod progress;
pub mod surface;
pub mod tile;

pub use progress::{ProgressDisplay, Stage, StageParseError};
pub use surface::RasterSurface;
pub use tile::GuessTile;

use image::DynamicImage;
use serde::{Deserialize, Serialize};

/// Fixed display dimensions in pixels
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Something that can paint images.
pub trait Surface {
    /// Paint `image` scaled to `size` with its top-left corner at `at`
    fn draw_image(&mut self, image: &DynamicImage, at: (i64, i64), size: Size);
}

/// A rectangular region of fixed preferred size that paints its bound image.
///
/// Hosts lay the component out at `preferred_size()` and call `render()` whenever
/// `revision()` differs from what they last painted.
pub trait Render {
    fn preferred_size(&self) -> Size;

    /// Number of redraw requests issued so far
    fn revision(&self) -> u64;

    fn render(&self, surface: &mut dyn Surface);
}
