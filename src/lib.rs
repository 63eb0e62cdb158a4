//! # Sprite Atlas
//!
//! A Rust library for packing animation sprite strips into a texture atlas.
//!
//! ## Overview
//!
//! This library takes a set of fixed-cell sprite sheets (single-row strips
//! or 4-directional grids), slices them into individual frames, packs the
//! frames into one bounded-width atlas image, and emits a JSON document with
//! per-frame pixel rects, normalized UV rects, and an animation table.
//!
//! ## Quick Start
//!
//! ```ignore
//! use sprite_atlas::{generate_from_directory, write_artifacts, GeneratorConfig, SheetLayout};
//!
//! let config = GeneratorConfig {
//!     layout: SheetLayout::directional("Sword", "full"),
//!     ..Default::default()
//! };
//!
//! // Slice every matching sheet in the directory and pack the frames
//! let atlas = generate_from_directory("path/to/sheets", "PlayerAtlas", &config)?;
//!
//! // Write PlayerAtlas.png and PlayerAtlas.json together
//! write_artifacts("path/to/sheets", "PlayerAtlas", &atlas)?;
//! ```
//!
//! ## In-Memory Use
//!
//! The pipeline never requires a filesystem: hand `Generator::generate` a
//! list of decoded [`SourceSheet`]s and consume the returned [`PackedAtlas`]
//! (RGBA pixels plus document) however you like.

pub mod atlas;
pub mod error;
pub mod extract;
pub mod generator;
pub mod output;
pub mod sheet;
pub mod types;

// Re-export main types for convenience
pub use atlas::{AtlasDocument, AtlasMeta, FrameRecord, PackedAtlas, Packer, UvOrigin};
pub use error::{AtlasError, Result};
pub use extract::{Animation, Extraction, Extractor, Frame};
pub use generator::{Generator, GeneratorConfig, SheetLayout};
pub use output::{write_artifacts, ArtifactPaths};
pub use sheet::{FilenamePattern, ParsedName, SourceSheet, SpriteImage};
pub use types::Direction;

/// Load every sheet in a directory and run one generation pass.
///
/// `output_name` is the base name the artifacts will be written under;
/// existing files with that stem are not ingested as sources.
pub fn generate_from_directory<P: AsRef<std::path::Path>>(
    dir: P,
    output_name: &str,
    config: &GeneratorConfig,
) -> Result<PackedAtlas> {
    let sheets = sheet::loader::load_from_directory(dir, output_name)?;
    Generator::with_config(config.clone()).generate(sheets)
}
