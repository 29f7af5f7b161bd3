// vidutils-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "vidutils: simple video utilities utilizing the power of ffmpeg",
    long_about = "Inspects, transcodes, and HLS-packages video files by \
                  shelling out to ffmpeg/ffprobe via the vidutils-core library."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch some information about the specified media file
    Inspect(InspectArgs),
    /// Scale, convert or change the media file quality
    Transform(TransformArgs),
    /// Generate a HLS playlist for the specified video
    Hlsify(HlsifyArgs),
}

#[derive(Parser, Debug)]
pub struct InspectArgs {
    /// The source file path
    #[arg(short = 's', long = "src", required = true, value_name = "SRC")]
    pub src: PathBuf,

    /// Also extract a single-frame thumbnail image
    #[arg(long)]
    pub thumbnail: bool,

    /// Seek offset for the thumbnail frame
    #[arg(long, value_name = "TIMESTAMP", default_value = "00:00:01")]
    pub thumbnail_time_offset: String,

    /// Thumbnail width in pixels
    #[arg(long, value_name = "PIXELS", default_value_t = 480)]
    pub thumbnail_width: i64,

    /// Thumbnail height in pixels
    #[arg(long, value_name = "PIXELS", default_value_t = 360)]
    pub thumbnail_height: i64,
}

#[derive(Parser, Debug)]
pub struct TransformArgs {
    /// The source file path
    #[arg(short = 's', long = "src", required = true, value_name = "SRC")]
    pub src: PathBuf,

    /// The output file path
    #[arg(short = 'o', long = "out", required = true, value_name = "OUT")]
    pub out: PathBuf,

    /// The new output width (-1 preserves aspect)
    #[arg(long, value_name = "PIXELS", default_value_t = -1, allow_hyphen_values = true)]
    pub width: i64,

    /// The new output height (-1 preserves aspect)
    #[arg(long, value_name = "PIXELS", default_value_t = -1, allow_hyphen_values = true)]
    pub height: i64,

    /// The new output video codec, currently h264 or h265
    #[arg(long, visible_alias = "vc", value_name = "CODEC", default_value = "h264")]
    pub video_codec: String,

    /// The new output quality level (CRF, 0-52; lower means higher quality)
    #[arg(
        short = 'q',
        long,
        visible_alias = "crf",
        value_name = "CRF",
        default_value_t = -1,
        allow_hyphen_values = true
    )]
    pub quality_level: i64,

    /// The new output video bitrate in kilobits
    #[arg(long, visible_alias = "vb", value_name = "KBPS", default_value_t = -1, allow_hyphen_values = true)]
    pub video_bitrate: i64,

    /// The new output audio bitrate in kilobits
    #[arg(long, visible_alias = "ab", value_name = "KBPS", default_value_t = -1, allow_hyphen_values = true)]
    pub audio_bitrate: i64,

    /// Frames per second
    #[arg(long, value_name = "FPS", default_value_t = 30)]
    pub fps: i64,
}

#[derive(Parser, Debug)]
pub struct HlsifyArgs {
    /// The source video file
    #[arg(long = "src", required = true, value_name = "SRC")]
    pub src: PathBuf,

    /// The output directory (created if missing)
    #[arg(long = "out", required = true, value_name = "OUT_DIR")]
    pub out: PathBuf,

    /// The segment duration in seconds
    #[arg(short = 'd', long, value_name = "SECONDS", default_value_t = 2)]
    pub segment_duration: i64,

    /// Quality preset name; repeatable (e.g. -q 144p -q 720p)
    #[arg(short = 'q', long = "quality-presets", required = true, value_name = "PRESET")]
    pub quality_presets: Vec<String>,
}
