//! Atlas packing and metadata.

pub mod document;
pub mod packer;

pub use document::{AtlasDocument, AtlasMeta, AtlasSize, FrameRecord, UvOrigin, UvPoint, UvRect};
pub use packer::{PackedAtlas, Packer};
