//! The `hlsify` command: build one segmented rendition per selected
//! quality preset and print the master playlist path.

use crate::cli::HlsifyArgs;
use anyhow::{Context, Result};
use vidutils_core::hls::{generate_hls_playlist, HlsRequest};

pub fn run(args: HlsifyArgs) -> Result<()> {
    let mut request = HlsRequest::new(&args.src, &args.out);
    request.segment_duration_secs = args.segment_duration;
    request.preset_names = args.quality_presets;

    let playlist_path = generate_hls_playlist(&request)
        .with_context(|| format!("failed to generate HLS playlist for '{}'", args.src.display()))?;

    println!("{}", playlist_path.display());
    Ok(())
}
