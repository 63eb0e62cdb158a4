//! Generation configuration and the run pipeline.

use crate::atlas::{PackedAtlas, Packer, UvOrigin};
use crate::error::Result;
use crate::extract::Extractor;
use crate::sheet::{FilenamePattern, SourceSheet};

/// How source sheets encode their animations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetLayout {
    /// One sheet is one animation: a single row of frames, named by the
    /// file stem.
    Strip,
    /// Each sheet row is one direction (Down, Left, Right, Up, top to
    /// bottom) of a shared action taken from the filename convention.
    Directional { pattern: FilenamePattern },
}

impl SheetLayout {
    /// Directional layout with the given filename prefix/suffix markers.
    pub fn directional(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        SheetLayout::Directional {
            pattern: FilenamePattern::new(prefix, suffix),
        }
    }
}

/// Generator configuration for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Fixed square cell dimension for every frame.
    pub frame_size: u32,
    /// Upper bound on atlas pixel width.
    pub max_width: u32,
    /// UV coordinate convention of the target renderer.
    pub uv_origin: UvOrigin,
    /// Sheet layout mode.
    pub layout: SheetLayout,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            frame_size: 64,
            max_width: 2048,
            uv_origin: UvOrigin::BottomLeft,
            layout: SheetLayout::Strip,
        }
    }
}

/// The atlas generation pipeline: extract frames, then pack them.
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    /// Create a generator with default configuration.
    pub fn new() -> Self {
        Self {
            config: GeneratorConfig::default(),
        }
    }

    /// Create a generator with custom configuration.
    pub fn with_config(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Get a reference to the configuration.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Run one generation pass over a set of source sheets.
    ///
    /// Either returns a complete atlas (pixels plus metadata) or fails
    /// before producing anything; there is no partial result.
    pub fn generate(&self, sheets: Vec<SourceSheet>) -> Result<PackedAtlas> {
        let extraction = Extractor::new(&self.config).extract(sheets)?;
        Packer::new(&self.config).pack(&extraction)
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheet::SpriteImage;
    use crate::types::Direction;

    #[test]
    fn test_directional_end_to_end() {
        // One 2-column, 4-row grid: 8 frames, one animation per direction.
        let size = 8u32;
        let sheet = SourceSheet::new(
            "Sword_Cast_full",
            SpriteImage::new(2 * size, 4 * size, vec![5; (2 * size * 4 * size * 4) as usize]),
        );
        let generator = Generator::with_config(GeneratorConfig {
            frame_size: size,
            layout: SheetLayout::directional("Sword", "full"),
            ..Default::default()
        });

        let atlas = generator.generate(vec![sheet]).unwrap();
        let doc = &atlas.document;

        assert_eq!(doc.meta.frame_count, 8);
        assert_eq!(doc.animations.len(), 4);
        for anim in doc.animations.values() {
            assert_eq!(anim.frame_count, 2);
            // "Cast" is not in the fps table.
            assert_eq!(anim.fps, crate::extract::DEFAULT_FPS);
        }
        assert_eq!(doc.meta.character_type.as_deref(), Some("4-directional"));
        assert_eq!(doc.meta.directions.as_deref(), Some(&Direction::ROW_ORDER[..]));

        let record = &doc.frames["Cast_Left_1"];
        assert_eq!(record.animation, "Cast_Left");
        assert_eq!(record.direction, Some(Direction::Left));
        assert_eq!(record.index, 1);
    }

    #[test]
    fn test_zero_frame_size_rejected() {
        let generator = Generator::with_config(GeneratorConfig {
            frame_size: 0,
            ..Default::default()
        });
        let sheet = SourceSheet::new("Idle", SpriteImage::blank(8, 8));
        assert!(generator.generate(vec![sheet]).is_err());
    }
}
