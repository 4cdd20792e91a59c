//! Packaging checks for an asset directory
//!
//! A missing asset is a packaging defect, so hosts can check the whole directory
//! up front instead of discovering holes one transition at a time.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::resolve;

/// Outcome of an asset directory audit
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssetReport {
    /// Number of files the audit expected
    pub checked: usize,
    /// Expected files that do not exist, in check order
    pub missing: Vec<PathBuf>,
}

impl AssetReport {
    /// True when every expected file is present
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Check that every asset a board needs is on disk.
///
/// Expected files are the failure stages `0..=max_stage`, the `win` and `lose`
/// images of the `base` series, and the plain and `_guessed` image of each letter.
pub fn audit(
    directory: &str,
    base: &str,
    extension: &str,
    max_stage: u32,
    letters: &str,
) -> AssetReport {
    let stages = (0..=max_stage)
        .map(|n| n.to_string())
        .chain(["win".to_string(), "lose".to_string()])
        .map(|suffix| resolve(directory, base, Some(&suffix), extension));

    let tiles = letters.chars().flat_map(|letter| {
        let name = letter.to_string();
        [
            resolve(directory, &name, None, extension),
            resolve(directory, &name, Some("guessed"), extension),
        ]
    });

    let mut report = AssetReport::default();
    for path in stages.chain(tiles) {
        report.checked += 1;
        if !path.is_file() {
            report.missing.push(path);
        }
    }

    if !report.is_complete() {
        tracing::warn!(
            missing = report.missing.len(),
            checked = report.checked,
            "asset directory is incomplete"
        );
    }

    report
}

/// Find the highest failure stage packaged for `base`.
///
/// Scans `directory` (not recursively) for `<base>_<n><extension>` files and returns
/// the last stage of the unbroken run starting at 0, or `None` when stage 0 is absent.
pub fn discover_stages(directory: &str, base: &str, extension: &str) -> Option<u32> {
    let root = if directory.is_empty() { "." } else { directory };
    let prefix = format!("{}_", base);

    let stages: BTreeSet<u32> = WalkDir::new(Path::new(root))
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| {
            let file_name = e.file_name().to_string_lossy().into_owned();
            let digits = file_name.strip_prefix(&prefix)?.strip_suffix(extension)?;
            let stage: u32 = digits.parse().ok()?;
            // "03" or "+3" would never be produced by resolve()
            (stage.to_string() == digits).then_some(stage)
        })
        .collect();

    let mut highest = None;
    for expected in 0.. {
        if !stages.contains(&expected) {
            break;
        }
        highest = Some(expected);
    }
    highest
}
