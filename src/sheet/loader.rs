//! Loading source sheets from a directory of PNG files.

use super::{SourceSheet, SpriteImage};
use crate::error::Result;
use std::path::Path;

/// Load all PNG sheets from a directory, sorted by filename.
///
/// Files whose stem starts with `output_name` are skipped so a rerun does
/// not ingest the atlas it wrote previously. Non-PNG files are ignored.
pub fn load_from_directory<P: AsRef<Path>>(dir: P, output_name: &str) -> Result<Vec<SourceSheet>> {
    let mut sheets = Vec::new();

    for entry in std::fs::read_dir(dir.as_ref())? {
        let entry = entry?;
        let path = entry.path();

        if !path.extension().map(|e| e == "png").unwrap_or(false) {
            continue;
        }

        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        if stem.is_empty() {
            continue;
        }
        if !output_name.is_empty() && stem.starts_with(output_name) {
            continue;
        }

        let data = std::fs::read(&path)?;
        let image = decode_png(&data)?;
        sheets.push(SourceSheet::new(stem, image));
    }

    sheets.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(sheets)
}

/// Decode PNG bytes into an RGBA8 buffer.
pub fn decode_png(data: &[u8]) -> Result<SpriteImage> {
    let img = image::load_from_memory(data)?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(SpriteImage::new(width, height, rgba.into_raw()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::ImageEncoder;

    fn write_png(path: &Path, width: u32, height: u32) {
        let pixels = vec![128u8; (width * height * 4) as usize];
        let mut bytes = Vec::new();
        let encoder = image::codecs::png::PngEncoder::new(std::io::Cursor::new(&mut bytes));
        encoder
            .write_image(&pixels, width, height, image::ExtendedColorType::Rgba8)
            .unwrap();
        std::fs::write(path, bytes).unwrap();
    }

    #[test]
    fn test_load_sorted_and_filtered() {
        let dir = tempfile::tempdir().unwrap();
        write_png(&dir.path().join("Walk.png"), 8, 8);
        write_png(&dir.path().join("Idle.png"), 8, 8);
        write_png(&dir.path().join("MyAtlas.png"), 8, 8);
        std::fs::write(dir.path().join("notes.txt"), "x").unwrap();

        let sheets = load_from_directory(dir.path(), "MyAtlas").unwrap();
        let names: Vec<_> = sheets.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Idle", "Walk"]);
        assert_eq!(sheets[0].image.width, 8);
    }

    #[test]
    fn test_decode_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.png");
        write_png(&path, 4, 2);

        let data = std::fs::read(&path).unwrap();
        let img = decode_png(&data).unwrap();
        assert_eq!((img.width, img.height), (4, 2));
        assert_eq!(img.get_pixel(3, 1), [128, 128, 128, 128]);
    }
}
