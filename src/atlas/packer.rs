//! Grid packing of extracted frames into a single atlas image.

use super::document::{
    AtlasDocument, AtlasMeta, AtlasSize, FrameRecord, UvRect, DOCUMENT_VERSION,
};
use crate::error::{AtlasError, Result};
use crate::extract::Extraction;
use crate::generator::{GeneratorConfig, SheetLayout};
use crate::sheet::SpriteImage;
use crate::types::Direction;
use image::ImageEncoder;
use indexmap::IndexMap;

/// A packed atlas: the pixel buffer and its metadata document.
#[derive(Debug)]
pub struct PackedAtlas {
    /// The packed RGBA image. Unused trailing cells are fully transparent.
    pub image: SpriteImage,
    /// Per-frame placement metadata and the animation table.
    pub document: AtlasDocument,
}

impl PackedAtlas {
    /// Encode the packed image as PNG bytes.
    pub fn to_png(&self) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        let cursor = std::io::Cursor::new(&mut bytes);
        let encoder = image::codecs::png::PngEncoder::new(cursor);

        encoder
            .write_image(
                &self.image.pixels,
                self.image.width,
                self.image.height,
                image::ExtendedColorType::Rgba8,
            )
            .map_err(|e| AtlasError::Encode(format!("Failed to encode PNG: {}", e)))?;

        Ok(bytes)
    }
}

/// Packs an ordered frame list into a grid bounded by `max_width`.
pub struct Packer<'a> {
    config: &'a GeneratorConfig,
}

impl<'a> Packer<'a> {
    pub fn new(config: &'a GeneratorConfig) -> Self {
        Self { config }
    }

    /// Pack all extracted frames, in the order they were extracted.
    ///
    /// Pure arithmetic plus buffer copies: extraction already guaranteed
    /// every frame is a well-formed `frame_size` square.
    pub fn pack(&self, extraction: &Extraction) -> Result<PackedAtlas> {
        let frame_count = extraction.frames.len() as u32;
        if frame_count == 0 {
            return Err(AtlasError::NoFrames);
        }

        let size = self.config.frame_size;
        // A frame wider than max_width still gets one column per row.
        let columns = (self.config.max_width / size).max(1);
        let rows = frame_count.div_ceil(columns);

        // Do not reserve trailing columns a short run never fills.
        let width = columns.min(frame_count) * size;
        let height = rows * size;

        let mut image = SpriteImage::blank(width, height);
        let mut frames: IndexMap<String, FrameRecord> = IndexMap::new();

        for (i, frame) in extraction.frames.iter().enumerate() {
            let col = i as u32 % columns;
            let row = i as u32 / columns;
            let x = col * size;
            let y = row * size;

            image.blit(&frame.image, x, y);

            let record = FrameRecord {
                x,
                y,
                w: size,
                h: size,
                animation: frame.animation.clone(),
                action: frame.action.clone(),
                direction: frame.direction,
                index: frame.index,
                uv: UvRect::for_cell(self.config.uv_origin, x, y, size, width, height),
            };
            if frames.insert(frame.name.clone(), record).is_some() {
                return Err(AtlasError::FrameCollision(format!(
                    "frame {:?} appears more than once",
                    frame.name
                )));
            }
        }

        let (character_type, directions) = match self.config.layout {
            SheetLayout::Strip => (None, None),
            SheetLayout::Directional { .. } => (
                Some("4-directional".to_string()),
                Some(Direction::ROW_ORDER.to_vec()),
            ),
        };

        let document = AtlasDocument {
            meta: AtlasMeta {
                version: DOCUMENT_VERSION.to_string(),
                size: AtlasSize {
                    w: width,
                    h: height,
                },
                frame_size: size,
                frame_count,
                character_type,
                directions,
            },
            frames,
            animations: extraction.animations.clone(),
        };

        Ok(PackedAtlas { image, document })
    }
}
