//! Source sprite sheets and raw pixel buffers.

pub mod filename;
pub mod loader;

pub use filename::{FilenamePattern, ParsedName};

/// Decoded RGBA8 pixel buffer (4 bytes per pixel).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// RGBA8 pixel data, row-major.
    pub pixels: Vec<u8>,
}

impl SpriteImage {
    /// Create an image from existing RGBA data.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(pixels.len(), (width * height * 4) as usize);
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Create a fully transparent (zero-alpha) image.
    pub fn blank(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0u8; (width * height * 4) as usize],
        }
    }

    /// Get a pixel at (x, y).
    pub fn get_pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let idx = ((y * self.width + x) * 4) as usize;
        [
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ]
    }

    /// Copy out a sub-rectangle. The rectangle must lie within the image.
    pub fn crop(&self, x: u32, y: u32, w: u32, h: u32) -> SpriteImage {
        debug_assert!(x + w <= self.width && y + h <= self.height);
        let mut pixels = Vec::with_capacity((w * h * 4) as usize);
        for row in y..y + h {
            let start = ((row * self.width + x) * 4) as usize;
            let end = start + (w * 4) as usize;
            pixels.extend_from_slice(&self.pixels[start..end]);
        }
        SpriteImage {
            width: w,
            height: h,
            pixels,
        }
    }

    /// Copy another image into this one at (dx, dy), verbatim (no blending).
    /// The source must fit within this image.
    pub fn blit(&mut self, src: &SpriteImage, dx: u32, dy: u32) {
        debug_assert!(dx + src.width <= self.width && dy + src.height <= self.height);
        let row_bytes = (src.width * 4) as usize;
        for row in 0..src.height {
            let src_start = (row * src.width * 4) as usize;
            let dst_start = (((dy + row) * self.width + dx) * 4) as usize;
            self.pixels[dst_start..dst_start + row_bytes]
                .copy_from_slice(&src.pixels[src_start..src_start + row_bytes]);
        }
    }
}

/// One decoded source sheet, named by its file stem.
#[derive(Debug, Clone)]
pub struct SourceSheet {
    /// File stem (filename without extension).
    pub name: String,
    /// Decoded pixel data.
    pub image: SpriteImage,
}

impl SourceSheet {
    pub fn new(name: impl Into<String>, image: SpriteImage) -> Self {
        Self {
            name: name.into(),
            image,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_is_transparent() {
        let img = SpriteImage::blank(2, 2);
        assert_eq!(img.pixels.len(), 16);
        assert!(img.pixels.iter().all(|&b| b == 0));
    }

    #[test]
    fn test_crop() {
        // 2x2 image: red, green / blue, white
        let img = SpriteImage::new(
            2,
            2,
            vec![
                255, 0, 0, 255, 0, 255, 0, 255, //
                0, 0, 255, 255, 255, 255, 255, 255,
            ],
        );
        let cell = img.crop(1, 1, 1, 1);
        assert_eq!(cell.get_pixel(0, 0), [255, 255, 255, 255]);
    }

    #[test]
    fn test_blit_roundtrip() {
        let mut dst = SpriteImage::blank(4, 4);
        let src = SpriteImage::new(2, 2, vec![7u8; 16]);
        dst.blit(&src, 2, 2);
        assert_eq!(dst.get_pixel(2, 2), [7, 7, 7, 7]);
        assert_eq!(dst.get_pixel(3, 3), [7, 7, 7, 7]);
        assert_eq!(dst.get_pixel(0, 0), [0, 0, 0, 0]);
        assert_eq!(dst.crop(2, 2, 2, 2), src);
    }
}
