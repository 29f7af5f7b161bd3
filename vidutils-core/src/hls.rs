//! HLS playlist generation: one batched ffmpeg invocation producing a
//! segmented stream per selected quality preset, plus a master
//! playlist referencing the per-rendition sub-manifests.

use crate::error::{CoreError, CoreResult};
use crate::external::run_ffmpeg;
use crate::presets::{QualityPreset, PRESETS, PRESET_ORDER};
use std::collections::HashMap;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// Per-rendition rate-control ratios. The buffer approximates 1.5x
/// the video bitrate and the max rate leaves ~7% headroom; both are
/// empirical values carried over unchanged.
const BUFFER_SIZE_RATIO: f64 = 0.66666;
const MAX_RATE_RATIO: f64 = 0.934579;

/// Advertised bandwidth hint: video kilobits scaled by a fixed factor,
/// deliberately not a precise unit conversion.
const BANDWIDTH_FACTOR: i64 = 100;

/// Input for one playlist-generation request.
#[derive(Debug, Clone)]
pub struct HlsRequest {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub segment_duration_secs: i64,
    /// Names selected from the built-in catalog; every name must
    /// resolve or the whole request fails before any work starts.
    pub preset_names: Vec<String>,
    /// Per-name replacements for catalog entries. A name absent from
    /// the canonical order is never emitted, override or not.
    pub preset_overrides: HashMap<String, QualityPreset>,
}

impl HlsRequest {
    pub fn new(input: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output_dir: output_dir.into(),
            segment_duration_secs: 2,
            preset_names: Vec::new(),
            preset_overrides: HashMap::new(),
        }
    }
}

/// Generates the HLS rendition set and master playlist, returning the
/// path of the written master playlist file.
pub fn generate_hls_playlist(request: &HlsRequest) -> CoreResult<PathBuf> {
    fs::create_dir_all(&request.output_dir)?;

    let renditions = resolve_renditions(request)?;

    let mut args: Vec<OsString> = vec![
        "-max_error_rate".into(),
        "0.0".into(),
        "-y".into(),
        "-v".into(),
        "error".into(),
        "-hide_banner".into(),
        "-i".into(),
        request.input.clone().into(),
    ];
    for (name, preset) in &renditions {
        args.extend(rendition_args(
            name,
            preset,
            request.segment_duration_secs,
            &request.output_dir,
        ));
    }

    log::info!(
        "Generating HLS playlist with {} rendition(s) into {}",
        renditions.len(),
        request.output_dir.display()
    );
    run_ffmpeg(args)?;

    let playlist_path = request.output_dir.join("playlist.m3u8");
    fs::write(&playlist_path, master_playlist(&renditions))?;

    Ok(playlist_path)
}

/// Resolves the selection into (name, preset) pairs in canonical
/// catalog order, regardless of selection order.
///
/// Overrides replace the catalog value for their name; the working set
/// is keyed by name so selecting a preset twice emits it once.
fn resolve_renditions(request: &HlsRequest) -> CoreResult<Vec<(String, QualityPreset)>> {
    let mut working: HashMap<String, QualityPreset> = HashMap::new();

    for name in &request.preset_names {
        let preset = PRESETS
            .get(name.as_str())
            .ok_or_else(|| CoreError::UnknownPreset(name.clone()))?;
        working.insert(name.clone(), *preset);
    }
    for (name, preset) in &request.preset_overrides {
        working.insert(name.clone(), *preset);
    }

    let renditions: Vec<(String, QualityPreset)> = PRESET_ORDER
        .iter()
        .filter_map(|name| working.get(*name).map(|preset| (name.to_string(), *preset)))
        .collect();

    if renditions.is_empty() {
        return Err(CoreError::NoValidPresets);
    }
    Ok(renditions)
}

/// Derives (buffer size, max rate) in kilobits from the video bitrate.
fn derive_rates(video_bitrate_kbps: i64) -> (i64, i64) {
    let bitrate = video_bitrate_kbps as f64;
    (
        (bitrate / BUFFER_SIZE_RATIO).round() as i64,
        (bitrate / MAX_RATE_RATIO).round() as i64,
    )
}

/// Builds the ffmpeg argument block for one rendition: scaling,
/// encoder settings, segment timing, rate control, and the per-preset
/// segment/sub-manifest naming pattern.
fn rendition_args(
    name: &str,
    preset: &QualityPreset,
    segment_duration_secs: i64,
    output_dir: &Path,
) -> Vec<OsString> {
    let (buffer_size, max_rate) = derive_rates(preset.video_bitrate_kbps);

    vec![
        "-vf".into(),
        format!(
            "scale=w={}:h={}:force_original_aspect_ratio=decrease,fps={}",
            preset.width, preset.height, preset.frame_rate
        )
        .into(),
        "-c:a".into(),
        "aac".into(),
        "-ar".into(),
        "48000".into(),
        "-c:v".into(),
        "h264".into(),
        "-profile:v".into(),
        "main".into(),
        "-crf".into(),
        preset.quality_level.to_string().into(),
        "-sc_threshold".into(),
        "0".into(),
        "-g".into(),
        "48".into(),
        "-keyint_min".into(),
        "48".into(),
        "-hls_time".into(),
        segment_duration_secs.to_string().into(),
        "-hls_playlist_type".into(),
        "vod".into(),
        "-b:v".into(),
        format!("{}k", preset.video_bitrate_kbps).into(),
        "-maxrate".into(),
        format!("{max_rate}k").into(),
        "-bufsize".into(),
        format!("{buffer_size}k").into(),
        "-b:a".into(),
        format!("{}k", preset.audio_bitrate_kbps).into(),
        "-hls_segment_filename".into(),
        output_dir.join(format!("{name}_%09d.ts")).into(),
        output_dir.join(format!("{name}.m3u8")).into(),
    ]
}

/// Renders the master playlist: fixed header markers, then one
/// bandwidth/resolution descriptor and sub-manifest reference per
/// rendition, in the order given.
fn master_playlist(renditions: &[(String, QualityPreset)]) -> String {
    let mut lines = vec!["#EXTM3U".to_string(), "#EXT-X-VERSION:3".to_string()];
    for (name, preset) in renditions {
        lines.push(format!(
            "#EXT-X-STREAM-INF:BANDWIDTH={},RESOLUTION={}x{}",
            preset.video_bitrate_kbps * BANDWIDTH_FACTOR,
            preset.width,
            preset.height
        ));
        lines.push(format!("{name}.m3u8"));
    }
    lines.join("\n")
}
