//! Single-file transcoding: scale, re-encode, and rate-limit one
//! input into one output with a single ffmpeg invocation.

use crate::error::CoreResult;
use crate::external::run_ffmpeg;
use crate::presets::resolve_codec;
use std::ffi::OsString;
use std::path::Path;

/// Requested output properties for one transcoding run.
#[derive(Debug, Clone)]
pub struct TransformOptions {
    /// Target width in pixels; zero or negative preserves aspect.
    pub width: i64,
    /// Target height in pixels; zero or negative preserves aspect.
    pub height: i64,
    /// CRF value (2-52). Values of 1 or below mean "not specified".
    pub quality_level: i64,
    /// Logical codec name ("h264" or "h265"); empty omits the codec
    /// argument and leaves ffmpeg's default in charge.
    pub video_codec: String,
    /// Video rate limit in kilobits; non-positive values are omitted.
    pub video_bitrate_kbps: i64,
    /// Audio rate limit in kilobits; non-positive values are omitted.
    pub audio_bitrate_kbps: i64,
    /// Output frame rate; non-positive values fall back to 30.
    pub frame_rate: i64,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            width: -1,
            height: -1,
            quality_level: -1,
            video_codec: "h264".to_string(),
            video_bitrate_kbps: -1,
            audio_bitrate_kbps: -1,
            frame_rate: 30,
        }
    }
}

/// Builds the ffmpeg argument tokens for one transform invocation.
///
/// Argument order matters to ffmpeg and is fixed: input, scale+fps
/// filter, optional quality, optional codec, optional video bitrate,
/// optional audio bitrate, output. An unknown codec name fails here,
/// before anything is spawned.
pub fn build_transform_args(
    options: &TransformOptions,
    input: &Path,
    output: &Path,
) -> CoreResult<Vec<OsString>> {
    // Zero means "derive from the other dimension"; ffmpeg's scale
    // filter spells that -1.
    let width = if options.width == 0 { -1 } else { options.width };
    let height = if options.height == 0 { -1 } else { options.height };
    let frame_rate = if options.frame_rate < 1 { 30 } else { options.frame_rate };

    let mut args: Vec<OsString> = vec![
        "-max_error_rate".into(),
        "0.0".into(),
        "-y".into(),
        "-v".into(),
        "error".into(),
        "-hide_banner".into(),
        "-i".into(),
        input.into(),
        "-vf".into(),
        format!("scale={width}:{height}:force_original_aspect_ratio=decrease,fps={frame_rate}")
            .into(),
    ];

    if options.quality_level > 1 {
        args.push("-crf".into());
        args.push(options.quality_level.to_string().into());
    }

    if !options.video_codec.is_empty() {
        let encoder = resolve_codec(&options.video_codec)?;
        args.push("-vcodec".into());
        args.push(encoder.into());
    }

    if options.video_bitrate_kbps > 0 {
        args.push("-b:v".into());
        args.push(format!("{}k", options.video_bitrate_kbps).into());
    }

    if options.audio_bitrate_kbps > 0 {
        args.push("-b:a".into());
        args.push(format!("{}k", options.audio_bitrate_kbps).into());
    }

    args.push(output.into());
    Ok(args)
}

/// Runs one transcoding invocation. Success carries no payload; any
/// non-zero ffmpeg exit is an error embedding the tool's output.
pub fn transform(options: &TransformOptions, input: &Path, output: &Path) -> CoreResult<()> {
    let args = build_transform_args(options, input, output)?;
    run_ffmpeg(args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use std::path::PathBuf;

    fn args_as_strings(args: &[OsString]) -> Vec<String> {
        args.iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn test_full_argument_order() {
        let options = TransformOptions {
            width: 1280,
            height: 720,
            quality_level: 24,
            video_codec: "h265".to_string(),
            video_bitrate_kbps: 2850,
            audio_bitrate_kbps: 128,
            frame_rate: 60,
        };
        let args = build_transform_args(
            &options,
            &PathBuf::from("in.mp4"),
            &PathBuf::from("out.mp4"),
        )
        .unwrap();

        assert_eq!(
            args_as_strings(&args),
            vec![
                "-max_error_rate",
                "0.0",
                "-y",
                "-v",
                "error",
                "-hide_banner",
                "-i",
                "in.mp4",
                "-vf",
                "scale=1280:720:force_original_aspect_ratio=decrease,fps=60",
                "-crf",
                "24",
                "-vcodec",
                "libx265",
                "-b:v",
                "2850k",
                "-b:a",
                "128k",
                "out.mp4",
            ]
        );
    }

    #[test]
    fn test_zero_dimensions_use_aspect_sentinel() {
        let options = TransformOptions {
            width: 0,
            height: 0,
            ..Default::default()
        };
        let args = build_transform_args(
            &options,
            &PathBuf::from("in.mp4"),
            &PathBuf::from("out.mp4"),
        )
        .unwrap();
        let strings = args_as_strings(&args);
        assert!(strings
            .iter()
            .any(|a| a == "scale=-1:-1:force_original_aspect_ratio=decrease,fps=30"));
    }

    #[test]
    fn test_quality_at_or_below_one_is_omitted() {
        for quality in [0, 1, -1] {
            let options = TransformOptions {
                quality_level: quality,
                ..Default::default()
            };
            let args = build_transform_args(
                &options,
                &PathBuf::from("in.mp4"),
                &PathBuf::from("out.mp4"),
            )
            .unwrap();
            assert!(!args_as_strings(&args).contains(&"-crf".to_string()));
        }
    }

    #[test]
    fn test_nonpositive_bitrates_are_omitted() {
        let args = build_transform_args(
            &TransformOptions::default(),
            &PathBuf::from("in.mp4"),
            &PathBuf::from("out.mp4"),
        )
        .unwrap();
        let strings = args_as_strings(&args);
        assert!(!strings.contains(&"-b:v".to_string()));
        assert!(!strings.contains(&"-b:a".to_string()));
    }

    #[test]
    fn test_nonpositive_frame_rate_defaults_to_30() {
        let options = TransformOptions {
            frame_rate: 0,
            ..Default::default()
        };
        let args = build_transform_args(
            &options,
            &PathBuf::from("in.mp4"),
            &PathBuf::from("out.mp4"),
        )
        .unwrap();
        assert!(args_as_strings(&args)
            .iter()
            .any(|a| a.ends_with("fps=30")));
    }

    #[test]
    fn test_unknown_codec_fails_before_spawn() {
        let options = TransformOptions {
            video_codec: "vp9".to_string(),
            ..Default::default()
        };
        let result = build_transform_args(
            &options,
            &PathBuf::from("in.mp4"),
            &PathBuf::from("out.mp4"),
        );
        assert!(matches!(
            result,
            Err(CoreError::InvalidCodec(name)) if name == "vp9"
        ));
    }

    #[test]
    fn test_paths_with_spaces_stay_single_tokens() {
        let args = build_transform_args(
            &TransformOptions::default(),
            &PathBuf::from("my videos/in.mp4"),
            &PathBuf::from("my videos/out.mp4"),
        )
        .unwrap();
        let strings = args_as_strings(&args);
        assert!(strings.contains(&"my videos/in.mp4".to_string()));
        assert_eq!(strings.last().unwrap(), "my videos/out.mp4");
    }
}
