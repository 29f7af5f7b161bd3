//! The `transform` command: one rescale/re-encode/rate-limit
//! invocation from source to destination.

use crate::cli::TransformArgs;
use anyhow::{Context, Result};
use vidutils_core::transform::{transform, TransformOptions};

pub fn run(args: TransformArgs) -> Result<()> {
    let options = TransformOptions {
        width: args.width,
        height: args.height,
        quality_level: args.quality_level,
        video_codec: args.video_codec,
        video_bitrate_kbps: args.video_bitrate,
        audio_bitrate_kbps: args.audio_bitrate,
        frame_rate: args.fps,
    };

    transform(&options, &args.src, &args.out)
        .with_context(|| format!("failed to transform '{}'", args.src.display()))?;

    log::info!("Wrote {}", args.out.display());
    Ok(())
}
