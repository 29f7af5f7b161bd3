//! Media inspection: probes a file with ffprobe and projects the JSON
//! document into a typed report, optionally extracting a single-frame
//! thumbnail with ffmpeg.

use crate::error::CoreResult;
use crate::external::ffprobe::{self, ProbeDocument, ProbeStream};
use crate::external::run_ffmpeg;
use crate::temp_files;
use crate::utils::format_size;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Input for a single inspection request.
#[derive(Debug, Clone)]
pub struct InspectOptions {
    pub path: PathBuf,
    pub extract_thumbnail: bool,
    pub thumbnail_time_offset: String,
    pub thumbnail_width: i64,
    pub thumbnail_height: i64,
}

impl InspectOptions {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            extract_thumbnail: false,
            thumbnail_time_offset: "00:00:01".to_string(),
            thumbnail_width: 480,
            thumbnail_height: 360,
        }
    }
}

/// Classification of a probed stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StreamKind {
    Video,
    Audio,
    Subtitle,
    Other,
}

impl From<&str> for StreamKind {
    fn from(codec_type: &str) -> Self {
        match codec_type {
            "video" => StreamKind::Video,
            "audio" => StreamKind::Audio,
            "subtitle" => StreamKind::Subtitle,
            _ => StreamKind::Other,
        }
    }
}

/// One stream entry of the report, in probe order.
///
/// Fields ffprobe did not report are omitted from the JSON entirely
/// rather than rendered as zero.
#[derive(Debug, Clone, Serialize)]
pub struct StreamInfo {
    pub index: i64,
    #[serde(rename = "type")]
    pub kind: StreamKind,
    pub codec: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<String>,
    pub start_time: f64,
    pub duration: f64,
    pub bit_rate: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frames_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Container byte size, raw and human-readable.
#[derive(Debug, Clone, Serialize)]
pub struct SizeInfo {
    pub bytes: f64,
    pub human: String,
}

/// The inspection result, serialized as a single-line JSON object.
#[derive(Debug, Clone, Serialize)]
pub struct InspectReport {
    pub duration: f64,
    pub size: SizeInfo,
    pub bit_rate: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<PathBuf>,
    pub streams: Vec<StreamInfo>,
}

impl InspectReport {
    pub fn to_json(&self) -> CoreResult<String> {
        serde_json::to_string(self).map_err(|e| crate::error::CoreError::JsonParse {
            tool: "report".to_string(),
            message: e.to_string(),
        })
    }
}

/// Inspects a media file, returning its report.
///
/// Thumbnail extraction runs only when it was requested with a
/// non-empty time offset and positive dimensions; otherwise it is
/// silently skipped. A failed extraction fails the whole inspection,
/// no partial report is returned.
pub fn inspect(options: &InspectOptions) -> CoreResult<InspectReport> {
    let document = ffprobe::probe(&options.path)?;
    let mut report = project(&document);

    if options.extract_thumbnail
        && !options.thumbnail_time_offset.is_empty()
        && options.thumbnail_width > 0
        && options.thumbnail_height > 0
    {
        report.thumbnail = Some(extract_thumbnail(options)?);
    }

    Ok(report)
}

/// Projects a probe document into a report, preserving stream order.
fn project(document: &ProbeDocument) -> InspectReport {
    let size_bytes = parse_f64(document.format.size.as_deref());

    InspectReport {
        duration: parse_f64(document.format.duration.as_deref()),
        size: SizeInfo {
            bytes: size_bytes,
            human: format_size(size_bytes),
        },
        bit_rate: parse_i64(document.format.bit_rate.as_deref()),
        thumbnail: None,
        streams: document.streams.iter().map(project_stream).collect(),
    }
}

fn project_stream(stream: &ProbeStream) -> StreamInfo {
    StreamInfo {
        index: stream.index,
        kind: stream
            .codec_type
            .as_deref()
            .map(StreamKind::from)
            .unwrap_or(StreamKind::Other),
        codec: stream.codec_name.clone().unwrap_or_default(),
        width: stream.width,
        height: stream.height,
        aspect_ratio: stream.display_aspect_ratio.clone(),
        start_time: parse_f64(stream.start_time.as_deref()),
        duration: parse_f64(stream.duration.as_deref()),
        bit_rate: parse_i64(stream.bit_rate.as_deref()),
        frames_count: stream.nb_frames.as_deref().and_then(|f| f.parse().ok()),
        created_at: stream
            .tags
            .creation_time
            .as_deref()
            .and_then(|t| DateTime::parse_from_rfc3339(t).ok())
            .map(|t| t.with_timezone(&Utc)),
    }
}

/// Seeks to the configured offset and emits exactly one frame, scaled
/// to the requested dimensions, as a PNG in the OS temp directory.
fn extract_thumbnail(options: &InspectOptions) -> CoreResult<PathBuf> {
    let thumbnail_path =
        temp_files::create_temp_file_path(&std::env::temp_dir(), "thumbnail", "png");

    let mut args: Vec<std::ffi::OsString> = Vec::new();
    push_str_args(&mut args, &["-v", "error", "-hide_banner", "-i"]);
    args.push(options.path.clone().into());
    push_str_args(&mut args, &["-ss", &options.thumbnail_time_offset]);
    push_str_args(
        &mut args,
        &[
            "-s",
            &format!("{}x{}", options.thumbnail_width, options.thumbnail_height),
            "-vframes",
            "1",
            "-c:v",
            "png",
        ],
    );
    args.push(thumbnail_path.clone().into());

    run_ffmpeg(args)?;
    Ok(thumbnail_path)
}

fn push_str_args(args: &mut Vec<std::ffi::OsString>, tokens: &[&str]) {
    args.extend(tokens.iter().map(Into::into));
}

fn parse_f64(value: Option<&str>) -> f64 {
    value.and_then(|v| v.parse().ok()).unwrap_or_default()
}

fn parse_i64(value: Option<&str>) -> i64 {
    value.and_then(|v| v.parse().ok()).unwrap_or_default()
}
