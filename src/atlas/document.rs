//! Serialized atlas metadata document.
//!
//! The document is an order-preserving mapping: `frames` and `animations`
//! keep insertion order so the JSON output is stable across runs.

use crate::extract::Animation;
use crate::types::Direction;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Document format version.
pub const DOCUMENT_VERSION: &str = "1.0";

/// Which corner of the atlas UV space is (0, 0).
///
/// Renderers disagree on this: top-left matches pixel space directly,
/// bottom-left is used where V increases upward (Unity). Both are computed
/// by the same routine; the choice is configuration, never hardcoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UvOrigin {
    TopLeft,
    BottomLeft,
}

/// A normalized texture coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UvPoint {
    pub x: f32,
    pub y: f32,
}

/// A normalized sub-rectangle of the atlas, as a min/max coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UvRect {
    pub min: UvPoint,
    pub max: UvPoint,
}

impl UvRect {
    /// Compute the UV rect for a `size`-square pixel rect at (x, y) inside a
    /// `sheet_width` x `sheet_height` atlas, under the given origin.
    pub fn for_cell(
        origin: UvOrigin,
        x: u32,
        y: u32,
        size: u32,
        sheet_width: u32,
        sheet_height: u32,
    ) -> UvRect {
        let w = sheet_width as f32;
        let h = sheet_height as f32;
        let u_min = x as f32 / w;
        let u_max = (x + size) as f32 / w;
        let (v_min, v_max) = match origin {
            UvOrigin::TopLeft => (y as f32 / h, (y + size) as f32 / h),
            UvOrigin::BottomLeft => (1.0 - (y + size) as f32 / h, 1.0 - y as f32 / h),
        };
        UvRect {
            min: UvPoint { x: u_min, y: v_min },
            max: UvPoint { x: u_max, y: v_max },
        }
    }
}

/// Placement record for one frame.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FrameRecord {
    /// Pixel X of the frame's left edge in the atlas.
    pub x: u32,
    /// Pixel Y of the frame's top edge in the atlas.
    pub y: u32,
    /// Frame width in pixels.
    pub w: u32,
    /// Frame height in pixels.
    pub h: u32,
    /// Animation this frame belongs to.
    pub animation: String,
    /// Base action name.
    pub action: String,
    /// Facing direction, omitted for strip sheets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,
    /// Zero-based position within the animation.
    pub index: u32,
    /// Normalized texture coordinates under the configured origin.
    pub uv: UvRect,
}

/// Pixel dimensions of the packed atlas.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct AtlasSize {
    pub w: u32,
    pub h: u32,
}

/// Top-level metadata block.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AtlasMeta {
    /// Document format version.
    pub version: String,
    /// Atlas dimensions in pixels.
    pub size: AtlasSize,
    /// Fixed square cell dimension.
    pub frame_size: u32,
    /// Total number of packed frames.
    pub frame_count: u32,
    /// "4-directional" for directional sheets; omitted otherwise.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub character_type: Option<String>,
    /// Row-order direction list for directional sheets; omitted otherwise.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directions: Option<Vec<Direction>>,
}

/// The full atlas metadata document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AtlasDocument {
    pub meta: AtlasMeta,
    /// Frame name to placement, in packing order.
    pub frames: IndexMap<String, FrameRecord>,
    /// Animation id to sequence, in extraction order.
    pub animations: IndexMap<String, Animation>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uv_top_left_origin() {
        // 16px cell at (16, 32) in a 64x64 atlas.
        let uv = UvRect::for_cell(UvOrigin::TopLeft, 16, 32, 16, 64, 64);
        assert_eq!(uv.min, UvPoint { x: 0.25, y: 0.5 });
        assert_eq!(uv.max, UvPoint { x: 0.5, y: 0.75 });
    }

    #[test]
    fn test_uv_bottom_left_origin_flips_v() {
        let uv = UvRect::for_cell(UvOrigin::BottomLeft, 16, 32, 16, 64, 64);
        assert_eq!(uv.min, UvPoint { x: 0.25, y: 0.25 });
        assert_eq!(uv.max, UvPoint { x: 0.5, y: 0.5 });
    }

    #[test]
    fn test_uv_roundtrip_recovers_pixel_rect() {
        let (x, y, size, w, h) = (128u32, 192u32, 64u32, 1024u32, 256u32);

        let uv = UvRect::for_cell(UvOrigin::TopLeft, x, y, size, w, h);
        assert!((uv.min.x * w as f32 - x as f32).abs() < 0.01);
        assert!((uv.min.y * h as f32 - y as f32).abs() < 0.01);

        let uv = UvRect::for_cell(UvOrigin::BottomLeft, x, y, size, w, h);
        // Bottom-left: vMax maps back to the top edge of the pixel rect.
        assert!(((1.0 - uv.max.y) * h as f32 - y as f32).abs() < 0.01);
        assert!(((1.0 - uv.min.y) * h as f32 - (y + size) as f32).abs() < 0.01);
    }

    #[test]
    fn test_meta_serializes_camel_case() {
        let meta = AtlasMeta {
            version: DOCUMENT_VERSION.to_string(),
            size: AtlasSize { w: 64, h: 64 },
            frame_size: 64,
            frame_count: 1,
            character_type: None,
            directions: None,
        };
        let json = serde_json::to_value(&meta).unwrap();
        assert_eq!(json["frameSize"], 64);
        assert_eq!(json["frameCount"], 1);
        assert!(json.get("characterType").is_none());
    }
}
