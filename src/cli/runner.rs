use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use tilefuse::TilingParams;
use tilefuse::api::upscale_image_to_path;

use super::args::CliArgs;
use super::errors::AppError;
use super::transform::ResizeTransform;

/// Resolves effective tiling parameters: defaults, overridden by a JSON
/// preset when given, overridden by explicit flags.
fn resolve_params(args: &CliArgs) -> Result<TilingParams, AppError> {
    let mut params = match &args.params {
        Some(path) => {
            let text = fs::read_to_string(path)?;
            serde_json::from_str(&text).map_err(|e| AppError::InvalidPreset {
                path: path.display().to_string(),
                message: e.to_string(),
            })?
        }
        None => TilingParams::default(),
    };

    if let Some(tile_size) = args.tile_size {
        params.tile_size = tile_size;
    }
    if let Some(overlap) = args.overlap {
        params.overlap = overlap;
    }
    if let Some(scale) = args.scale {
        params.scale = scale;
    }
    if let Some(blend) = args.blend {
        params.blend = blend;
    }

    Ok(params)
}

fn is_supported_image(path: &Path) -> bool {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_ascii_lowercase());
    matches!(ext.as_deref(), Some("png" | "jpg" | "jpeg"))
}

fn batch_output_path(output_dir: &Path, input: &Path) -> PathBuf {
    // Batch output keeps the input file name; format follows the extension.
    output_dir.join(input.file_name().unwrap_or_default())
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    let params = resolve_params(&args)?;
    let transform = ResizeTransform::new(params.scale)?;

    let batch_mode = args.batch || args.input_dir.is_some();

    if batch_mode {
        let input_dir = args.input_dir.ok_or(AppError::MissingArgument {
            arg: "--input-dir".to_string(),
        })?;
        let output_dir = args.output_dir.ok_or(AppError::MissingArgument {
            arg: "--output-dir".to_string(),
        })?;

        fs::create_dir_all(&output_dir)?;

        info!("Starting batch upscaling from directory: {:?}", input_dir);
        info!("Output directory: {:?}", output_dir);

        let mut processed = 0;
        let mut skipped = 0;
        let mut errors = 0;

        let mut entries: Vec<PathBuf> = fs::read_dir(&input_dir)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.is_file())
            .collect();
        entries.sort();

        for path in entries {
            if !is_supported_image(&path) {
                skipped += 1;
                continue;
            }
            let output_path = batch_output_path(&output_dir, &path);
            match upscale_image_to_path(&path, &output_path, &params, &transform) {
                Ok(()) => {
                    info!("Processed {:?}", path);
                    processed += 1;
                }
                Err(e) => {
                    warn!("Failed to process {:?}: {}", path, e);
                    errors += 1;
                }
            }
        }

        info!(
            "Batch complete: {} processed, {} skipped, {} errors",
            processed, skipped, errors
        );
        Ok(())
    } else {
        let input = args.input.ok_or(AppError::MissingArgument {
            arg: "--input".to_string(),
        })?;
        let output = args.output.ok_or(AppError::MissingArgument {
            arg: "--output".to_string(),
        })?;

        upscale_image_to_path(&input, &output, &params, &transform)?;
        Ok(())
    }
}
