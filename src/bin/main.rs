//! Sprite Atlas CLI
//!
//! Pack directional sprite strips into a texture atlas with frame metadata.

use clap::{Parser, Subcommand, ValueEnum};
use sprite_atlas::{
    generate_from_directory, write_artifacts, GeneratorConfig, SheetLayout, UvOrigin,
};
use std::collections::BTreeMap;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sprite-atlas")]
#[command(author, version, about = "Pack sprite strips into a texture atlas", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate an atlas PNG and JSON document from a directory of sheets
    Generate {
        /// Directory containing source sheet PNGs
        #[arg(short, long)]
        input: PathBuf,

        /// Base name for the output artifacts (.png and .json)
        #[arg(short, long, default_value = "Atlas")]
        name: String,

        /// Directory to write artifacts to (defaults to the input directory)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Square frame dimension in pixels
        #[arg(long, default_value = "64")]
        frame_size: u32,

        /// Maximum atlas width in pixels
        #[arg(long, default_value = "2048")]
        max_width: u32,

        /// Sheet layout mode
        #[arg(long, value_enum, default_value = "strip")]
        layout: LayoutArg,

        /// Filename prefix marker for directional sheets
        #[arg(long, default_value = "Sword")]
        prefix: String,

        /// Filename suffix marker for directional sheets
        #[arg(long, default_value = "full")]
        suffix: String,

        /// UV coordinate origin of the target renderer
        #[arg(long, value_enum, default_value = "bottom-left")]
        uv_origin: UvOriginArg,
    },

    /// Report what would be extracted without writing anything
    Info {
        /// Directory containing source sheet PNGs
        #[arg(short, long)]
        input: PathBuf,

        /// Square frame dimension in pixels
        #[arg(long, default_value = "64")]
        frame_size: u32,

        /// Sheet layout mode
        #[arg(long, value_enum, default_value = "strip")]
        layout: LayoutArg,

        /// Filename prefix marker for directional sheets
        #[arg(long, default_value = "Sword")]
        prefix: String,

        /// Filename suffix marker for directional sheets
        #[arg(long, default_value = "full")]
        suffix: String,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum LayoutArg {
    /// Single-row strips, one animation per file
    Strip,
    /// 4-row directional grids named {prefix}_{Action}_{suffix}.png
    Directional,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum UvOriginArg {
    /// V increases downward, matching pixel space
    TopLeft,
    /// V increases upward (Unity-style)
    BottomLeft,
}

impl From<UvOriginArg> for UvOrigin {
    fn from(arg: UvOriginArg) -> Self {
        match arg {
            UvOriginArg::TopLeft => UvOrigin::TopLeft,
            UvOriginArg::BottomLeft => UvOrigin::BottomLeft,
        }
    }
}

fn layout_for(arg: LayoutArg, prefix: &str, suffix: &str) -> SheetLayout {
    match arg {
        LayoutArg::Strip => SheetLayout::Strip,
        LayoutArg::Directional => SheetLayout::directional(prefix, suffix),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            input,
            name,
            output,
            frame_size,
            max_width,
            layout,
            prefix,
            suffix,
            uv_origin,
        } => {
            let config = GeneratorConfig {
                frame_size,
                max_width,
                uv_origin: uv_origin.into(),
                layout: layout_for(layout, &prefix, &suffix),
            };

            println!("Extracting frames from {:?}...", input);
            let atlas = generate_from_directory(&input, &name, &config)?;

            let doc = &atlas.document;
            println!(
                "  Packed {} frames into {}x{} ({} animations)",
                doc.meta.frame_count,
                doc.meta.size.w,
                doc.meta.size.h,
                doc.animations.len()
            );

            print_animation_summary(doc);

            let out_dir = output.unwrap_or(input);
            let paths = write_artifacts(&out_dir, &name, &atlas)?;
            println!("Wrote {:?}", paths.png);
            println!("Wrote {:?}", paths.json);
        }
        Commands::Info {
            input,
            frame_size,
            layout,
            prefix,
            suffix,
        } => {
            let config = GeneratorConfig {
                frame_size,
                layout: layout_for(layout, &prefix, &suffix),
                ..Default::default()
            };

            let atlas = generate_from_directory(&input, "", &config)?;
            let doc = &atlas.document;

            println!("Atlas info for {:?}:", input);
            println!("  Frames: {}", doc.meta.frame_count);
            println!("  Atlas size: {}x{}", doc.meta.size.w, doc.meta.size.h);
            println!("  Animations: {}", doc.animations.len());
            print_animation_summary(doc);
        }
    }

    Ok(())
}

/// Print animations grouped by action, each with frame count and fps.
fn print_animation_summary(doc: &sprite_atlas::AtlasDocument) {
    let mut by_action: BTreeMap<&str, Vec<(&str, &sprite_atlas::Animation)>> = BTreeMap::new();
    for (name, anim) in &doc.animations {
        by_action
            .entry(anim.action.as_str())
            .or_default()
            .push((name.as_str(), anim));
    }

    for (action, anims) in by_action {
        println!("  {}:", action);
        for (name, anim) in anims {
            println!(
                "    - {}: {} frames @ {} fps",
                name, anim.frame_count, anim.fps
            );
        }
    }
}
