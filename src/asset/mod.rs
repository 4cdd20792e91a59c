/// Asset resolution and loading
///
/// This module owns the file naming contract shared by every board component:
/// - Resolving (directory, name, suffix, extension) to a path (resolver.rs)
/// - Loading an image from a resolved path (resolver.rs)
/// - Auditing an asset directory for missing files (audit.rs)

pub mod audit;
pub mod resolver;

pub use audit::{audit, discover_stages, AssetReport};
pub use resolver::{load, resolve};

use std::path::{Path, PathBuf};

/// The one error the board core can raise: a resolved asset could not be
/// loaded as an image.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("image at {} could not be loaded", path.display())]
    Missing {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

impl AssetError {
    /// Path that failed to load
    pub fn path(&self) -> &Path {
        match self {
            AssetError::Missing { path, .. } => path.as_path(),
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use image::{Rgba, RgbaImage};
    use std::path::Path;

    /// Write a small solid-colour PNG into `dir`
    pub fn write_png(dir: &Path, file_name: &str, color: [u8; 4]) {
        let img = RgbaImage::from_pixel(8, 8, Rgba(color));
        img.save(dir.join(file_name)).unwrap();
    }

    /// True when every channel is within a small resampling tolerance of `color`
    pub fn near(pixel: &Rgba<u8>, color: [u8; 4]) -> bool {
        pixel.0.iter().zip(color).all(|(a, b)| a.abs_diff(b) <= 2)
    }

    /// Directory string with the trailing separator the naming contract expects
    pub fn dir_prefix(dir: &Path) -> String {
        format!("{}/", dir.display())
    }
}
