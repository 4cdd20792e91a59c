use image::DynamicImage;
use std::path::{Path, PathBuf};

use super::AssetError;

/// Build the path of an asset.
///
/// The parts are concatenated verbatim: `directory + name + "_" + suffix + extension`,
/// with the `_suffix` part omitted when there is no suffix. `directory` is expected to
/// carry its own trailing separator and `extension` its leading period.
pub fn resolve(directory: &str, name: &str, suffix: Option<&str>, extension: &str) -> PathBuf {
    let mut path = String::with_capacity(
        directory.len() + name.len() + suffix.map_or(0, |s| s.len() + 1) + extension.len(),
    );
    path.push_str(directory);
    path.push_str(name);
    if let Some(suffix) = suffix {
        path.push('_');
        path.push_str(suffix);
    }
    path.push_str(extension);
    PathBuf::from(path)
}

/// Load and decode the image at `path`
pub fn load(path: &Path) -> Result<DynamicImage, AssetError> {
    image::open(path).map_err(|source| {
        tracing::warn!(path = %path.display(), error = %source, "asset could not be loaded");
        AssetError::Missing {
            path: path.to_path_buf(),
            source,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::fixtures::write_png;

    #[test]
    fn test_resolve_with_suffix() {
        let path = resolve("images/", "hangman", Some("3"), ".png");
        assert_eq!(path, PathBuf::from("images/hangman_3.png"));
    }

    #[test]
    fn test_resolve_without_suffix() {
        let path = resolve("images/", "e", None, ".png");
        assert_eq!(path, PathBuf::from("images/e.png"));
    }

    #[test]
    fn test_resolve_does_not_insert_separators() {
        // A directory without a trailing slash glues onto the name
        let path = resolve("images", "hangman", Some("win"), ".jpg");
        assert_eq!(path, PathBuf::from("imageshangman_win.jpg"));
    }

    #[test]
    fn test_load_existing_image() {
        let dir = tempfile::tempdir().unwrap();
        write_png(dir.path(), "a.png", [255, 0, 0, 255]);

        let img = load(&dir.path().join("a.png")).unwrap();
        assert_eq!((img.width(), img.height()), (8, 8));
    }

    #[test]
    fn test_load_missing_image() {
        let err = load(Path::new("/nonexistent/dir/hangman_0.png")).unwrap_err();
        assert_eq!(err.path(), Path::new("/nonexistent/dir/hangman_0.png"));
        assert!(err.to_string().contains("hangman_0.png"));
    }

    #[test]
    fn test_load_rejects_non_image_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("broken.png"), b"not a png").unwrap();

        assert!(load(&dir.path().join("broken.png")).is_err());
    }
}
