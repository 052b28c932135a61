use clap::Parser;
use std::path::PathBuf;

use tilefuse::BlendCurve;

#[derive(Parser)]
#[command(name = "tilefuse", version, about = "TILEFUSE CLI")]
pub struct CliArgs {
    /// Input image (single file mode)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Input directory containing images (batch mode)
    #[arg(long)]
    pub input_dir: Option<PathBuf>,

    /// Output filename (single file mode)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output directory for batch processing (batch mode)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Maximum tile edge length in pixels (default 512)
    #[arg(long)]
    pub tile_size: Option<u32>,

    /// Overlap between adjacent tiles in pixels (default 16)
    #[arg(long)]
    pub overlap: Option<u32>,

    /// Integer upscale factor (default 1)
    #[arg(long)]
    pub scale: Option<u32>,

    /// Blend weight curve (linear or half-sin; default half-sin)
    #[arg(long, value_enum)]
    pub blend: Option<BlendCurve>,

    /// JSON preset with tiling parameters; explicit flags take precedence
    #[arg(long)]
    pub params: Option<PathBuf>,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,

    /// Batch mode: continue processing other files when one fails
    #[arg(long, default_value_t = false)]
    pub batch: bool,
}
