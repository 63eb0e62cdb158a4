//! Writing the atlas artifacts to disk.
//!
//! Both artifacts (PNG and JSON) are produced fully in memory, staged to
//! `.tmp` siblings, and then renamed into place. A run that fails partway
//! never leaves an updated image without its matching metadata document.

use crate::atlas::PackedAtlas;
use crate::error::Result;
use std::path::{Path, PathBuf};

/// Final artifact paths for one atlas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub png: PathBuf,
    pub json: PathBuf,
}

/// Write `{base_name}.png` and `{base_name}.json` into `dir`.
pub fn write_artifacts<P: AsRef<Path>>(
    dir: P,
    base_name: &str,
    atlas: &PackedAtlas,
) -> Result<ArtifactPaths> {
    let dir = dir.as_ref();
    let paths = ArtifactPaths {
        png: dir.join(format!("{}.png", base_name)),
        json: dir.join(format!("{}.json", base_name)),
    };

    // Encode everything before touching the filesystem.
    let png_bytes = atlas.to_png()?;
    let json_text = serde_json::to_string_pretty(&atlas.document)?;

    let png_tmp = dir.join(format!("{}.png.tmp", base_name));
    let json_tmp = dir.join(format!("{}.json.tmp", base_name));

    let staged = std::fs::write(&png_tmp, &png_bytes)
        .and_then(|_| std::fs::write(&json_tmp, json_text.as_bytes()))
        .and_then(|_| std::fs::rename(&png_tmp, &paths.png))
        .and_then(|_| std::fs::rename(&json_tmp, &paths.json));

    if let Err(e) = staged {
        let _ = std::fs::remove_file(&png_tmp);
        let _ = std::fs::remove_file(&json_tmp);
        return Err(e.into());
    }

    Ok(paths)
}
