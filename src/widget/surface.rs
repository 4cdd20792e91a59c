use image::{imageops, imageops::FilterType, DynamicImage, RgbaImage};

use super::{Render, Size, Surface};

/// CPU-side RGBA canvas
#[derive(Debug, Clone)]
pub struct RasterSurface {
    canvas: RgbaImage,
}

impl RasterSurface {
    /// Create a fully transparent canvas
    pub fn new(size: Size) -> Self {
        Self {
            canvas: RgbaImage::new(size.width, size.height),
        }
    }

    /// Paint a component onto a canvas of its preferred size
    pub fn snapshot(component: &dyn Render) -> Self {
        let mut surface = Self::new(component.preferred_size());
        component.render(&mut surface);
        surface
    }

    pub fn size(&self) -> Size {
        Size::new(self.canvas.width(), self.canvas.height())
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.canvas
    }

    pub fn into_pixels(self) -> RgbaImage {
        self.canvas
    }
}

impl Surface for RasterSurface {
    fn draw_image(&mut self, image: &DynamicImage, at: (i64, i64), size: Size) {
        if size.width == 0 || size.height == 0 {
            return;
        }

        let scaled = if image.width() == size.width && image.height() == size.height {
            image.to_rgba8()
        } else {
            image
                .resize_exact(size.width, size.height, FilterType::Lanczos3)
                .to_rgba8()
        };

        imageops::overlay(&mut self.canvas, &scaled, at.0, at.1);
    }
}
