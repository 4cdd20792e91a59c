use iced::widget::image::Handle;
use iced::widget::Image;
use iced::{ContentFit, Element, Length};

use crate::widget::{RasterSurface, Render, Size};

/// Last painted frame of a component, ready for iced
#[derive(Debug, Clone)]
pub struct Painted {
    revision: u64,
    size: Size,
    handle: Handle,
}

impl Painted {
    pub fn new(component: &dyn Render) -> Self {
        let size = component.preferred_size();
        let pixels = RasterSurface::snapshot(component).into_pixels();

        Self {
            revision: component.revision(),
            size,
            handle: Handle::from_rgba(size.width, size.height, pixels.into_raw()),
        }
    }

    /// Repaint if the component requested a redraw since the last paint.
    /// Returns whether a repaint happened.
    pub fn refresh(&mut self, component: &dyn Render) -> bool {
        if component.revision() == self.revision {
            return false;
        }
        *self = Self::new(component);
        true
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn handle(&self) -> &Handle {
        &self.handle
    }

    /// Fixed-size image widget showing the painted frame
    pub fn view<'a, Message: 'a>(&self) -> Element<'a, Message> {
        Image::<Handle>::new(self.handle.clone())
            .width(Length::Fixed(self.size.width as f32))
            .height(Length::Fixed(self.size.height as f32))
            .content_fit(ContentFit::Fill)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::fixtures::{dir_prefix, write_png};
    use crate::widget::{GuessTile, ProgressDisplay};

    #[test]
    fn test_refresh_only_after_redraw_request() {
        let dir = tempfile::tempdir().unwrap();
        write_png(dir.path(), "hangman_0.png", [255, 0, 0, 255]);
        write_png(dir.path(), "hangman_win.png", [0, 255, 0, 255]);
        let mut display = ProgressDisplay::new("hangman", dir_prefix(dir.path()), ".png").unwrap();

        let mut painted = Painted::new(&display);
        assert_eq!(painted.revision(), 0);
        assert!(!painted.refresh(&display));

        display.show_win().unwrap();
        assert!(painted.refresh(&display));
        assert_eq!(painted.revision(), 1);
        assert!(!painted.refresh(&display));
    }

    #[test]
    fn test_tile_frame_uses_preferred_size() {
        let dir = tempfile::tempdir().unwrap();
        write_png(dir.path(), "k.png", [10, 20, 30, 255]);
        let tile = GuessTile::new('k', dir_prefix(dir.path()), ".png")
            .unwrap()
            .with_size(Size::new(24, 24));

        let painted = Painted::new(&tile);
        assert_eq!(painted.size, Size::new(24, 24));
    }
}
