//! Frame extraction from source sheet grids.
//!
//! Slices each source sheet into fixed-size cells and tags every cell with
//! the animation it belongs to. Sheets are processed in filename order and
//! cells row-by-row, column-by-column, so the resulting frame list has one
//! deterministic total order regardless of how the sheets were collected.

pub mod fps;

pub use fps::{fps_for_action, DEFAULT_FPS};

use crate::error::{AtlasError, Result};
use crate::generator::{GeneratorConfig, SheetLayout};
use crate::sheet::{ParsedName, SourceSheet, SpriteImage};
use crate::types::Direction;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One extracted animation cell.
#[derive(Debug, Clone)]
pub struct Frame {
    /// Globally unique frame name, `{animation}_{index}`.
    pub name: String,
    /// Animation this frame belongs to.
    pub animation: String,
    /// Base action name (may contain underscores).
    pub action: String,
    /// Facing direction, absent for strip sheets.
    pub direction: Option<Direction>,
    /// Zero-based position within the animation.
    pub index: u32,
    /// Cropped pixel data, `frame_size` square.
    pub image: SpriteImage,
}

/// Named ordered frame sequence, as it appears in the atlas document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Animation {
    /// Frame names in playback order.
    pub frames: Vec<String>,
    /// Number of frames in the sequence.
    pub frame_count: u32,
    /// Playback rate from the action table.
    pub fps: u32,
    /// Base action name.
    pub action: String,
    /// Facing direction, omitted for strip sheets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,
}

/// Result of extracting all source sheets.
#[derive(Debug)]
pub struct Extraction {
    /// All frames in deterministic packing order.
    pub frames: Vec<Frame>,
    /// Animation table, keyed by animation id, in extraction order.
    pub animations: IndexMap<String, Animation>,
}

/// Slices source sheets into frames according to the configured layout.
pub struct Extractor<'a> {
    config: &'a GeneratorConfig,
}

impl<'a> Extractor<'a> {
    pub fn new(config: &'a GeneratorConfig) -> Self {
        Self { config }
    }

    /// Extract frames and the animation table from a set of source sheets.
    ///
    /// Sheets are re-sorted by name before slicing, so callers that collect
    /// them in parallel or in arbitrary directory order still get the same
    /// output.
    pub fn extract(&self, mut sheets: Vec<SourceSheet>) -> Result<Extraction> {
        if self.config.frame_size == 0 {
            return Err(AtlasError::Config("frame_size must be nonzero".to_string()));
        }

        sheets.sort_by(|a, b| a.name.cmp(&b.name));

        let mut extraction = Extraction {
            frames: Vec::new(),
            animations: IndexMap::new(),
        };

        for sheet in &sheets {
            match &self.config.layout {
                SheetLayout::Strip => self.extract_strip(sheet, &mut extraction)?,
                SheetLayout::Directional { pattern } => {
                    match pattern.parse(&sheet.name) {
                        ParsedName::Recognized { action } => {
                            self.extract_directional(sheet, &action, &mut extraction)?;
                        }
                        ParsedName::Skipped => {
                            eprintln!(
                                "Warning: skipping {:?}: does not match the naming convention",
                                sheet.name
                            );
                        }
                    }
                }
            }
        }

        if extraction.frames.is_empty() {
            return Err(AtlasError::NoFrames);
        }

        Ok(extraction)
    }

    /// Validate sheet dimensions and return (columns, rows).
    fn grid_of(&self, sheet: &SourceSheet) -> Result<(u32, u32)> {
        let size = self.config.frame_size;
        let (w, h) = (sheet.image.width, sheet.image.height);

        if w == 0 || h == 0 || w % size != 0 || h % size != 0 {
            return Err(AtlasError::MalformedSheet(format!(
                "{:?} is {}x{}, not a grid of {}px cells",
                sheet.name, w, h, size
            )));
        }

        Ok((w / size, h / size))
    }

    /// Strip layout: one sheet is one animation, a single row of frames.
    fn extract_strip(&self, sheet: &SourceSheet, out: &mut Extraction) -> Result<()> {
        let (columns, rows) = self.grid_of(sheet)?;
        if rows != 1 {
            return Err(AtlasError::MalformedSheet(format!(
                "{:?} has {} rows; strip sheets must have exactly one",
                sheet.name, rows
            )));
        }

        self.extract_row(sheet, &sheet.name, &sheet.name, None, 0, columns, out)
    }

    /// Directional layout: rows map to [Down, Left, Right, Up] top-to-bottom,
    /// one animation per row. Fewer than four rows means the remaining
    /// directions are simply absent.
    fn extract_directional(
        &self,
        sheet: &SourceSheet,
        action: &str,
        out: &mut Extraction,
    ) -> Result<()> {
        let (columns, rows) = self.grid_of(sheet)?;
        if rows as usize > Direction::ROW_ORDER.len() {
            return Err(AtlasError::MalformedSheet(format!(
                "{:?} has {} rows; directional sheets support at most {}",
                sheet.name,
                rows,
                Direction::ROW_ORDER.len()
            )));
        }

        for row in 0..rows {
            let direction = Direction::from_row(row as usize).unwrap();
            let animation = format!("{}_{}", action, direction);
            self.extract_row(sheet, action, &animation, Some(direction), row, columns, out)?;
        }
        Ok(())
    }

    /// Slice one sheet row into frames and record its animation.
    #[allow(clippy::too_many_arguments)]
    fn extract_row(
        &self,
        sheet: &SourceSheet,
        action: &str,
        animation: &str,
        direction: Option<Direction>,
        row: u32,
        columns: u32,
        out: &mut Extraction,
    ) -> Result<()> {
        let size = self.config.frame_size;

        let mut frame_names = Vec::with_capacity(columns as usize);
        for col in 0..columns {
            let image = sheet.image.crop(col * size, row * size, size, size);
            let name = format!("{}_{}", animation, col);
            frame_names.push(name.clone());
            out.frames.push(Frame {
                name,
                animation: animation.to_string(),
                action: action.to_string(),
                direction,
                index: col,
                image,
            });
        }

        let record = Animation {
            frames: frame_names,
            frame_count: columns,
            fps: fps_for_action(action),
            action: action.to_string(),
            direction,
        };
        if out.animations.insert(animation.to_string(), record).is_some() {
            return Err(AtlasError::FrameCollision(format!(
                "animation {:?} is produced by more than one source sheet",
                animation
            )));
        }
        Ok(())
    }
}
