//! Typed model of ffprobe's JSON output and the probe invocation.
//!
//! ffprobe reports most numeric fields as strings; the raw document
//! keeps them that way and the projection into a report happens in
//! the `inspect` module. Missing fields stay `None` so "not reported"
//! is never conflated with a legitimate zero value.

use crate::error::{command_failed_error, command_start_error, CoreError, CoreResult};
use crate::external::combined_output;
use serde::Deserialize;
use std::path::Path;
use std::process::Command;

/// Parsed `-show_error -show_format -show_streams` document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProbeDocument {
    #[serde(default)]
    pub format: ProbeFormat,
    #[serde(default)]
    pub streams: Vec<ProbeStream>,
    pub error: Option<ProbeError>,
}

/// Container-level metadata from `-show_format`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProbeFormat {
    pub duration: Option<String>,
    pub size: Option<String>,
    pub bit_rate: Option<String>,
}

/// One entry from `-show_streams`, in program stream index order.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProbeStream {
    #[serde(default)]
    pub index: i64,
    pub codec_name: Option<String>,
    pub codec_type: Option<String>,
    pub width: Option<i64>,
    pub height: Option<i64>,
    pub display_aspect_ratio: Option<String>,
    pub start_time: Option<String>,
    pub duration: Option<String>,
    pub bit_rate: Option<String>,
    pub nb_frames: Option<String>,
    #[serde(default)]
    pub tags: ProbeStreamTags,
}

/// Stream tag subset we project from.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProbeStreamTags {
    pub creation_time: Option<String>,
}

/// ffprobe's structured error payload from `-show_error`.
#[derive(Debug, Clone, Deserialize)]
pub struct ProbeError {
    #[serde(rename = "string")]
    pub message: String,
}

/// Probes a media file, returning the parsed document.
///
/// When ffprobe exits abnormally but still wrote a structured error
/// to its JSON output, that message is surfaced in preference to the
/// generic process failure.
pub fn probe(path: &Path) -> CoreResult<ProbeDocument> {
    log::debug!("Running ffprobe on: {}", path.display());

    let output = Command::new("ffprobe")
        .args([
            "-v",
            "error",
            "-print_format",
            "json",
            "-show_error",
            "-show_format",
            "-show_streams",
        ])
        .arg(path)
        .output()
        .map_err(|e| command_start_error("ffprobe", e))?;

    if !output.status.success() {
        if let Ok(document) = serde_json::from_slice::<ProbeDocument>(&output.stdout) {
            if let Some(error) = document.error {
                log::error!("ffprobe reported: {}", error.message);
                return Err(CoreError::ProbeReported(error.message));
            }
        }
        let combined = combined_output(&output.stdout, &output.stderr);
        log::error!("ffprobe failed with {}: {}", output.status, combined.trim_end());
        return Err(command_failed_error("ffprobe", output.status, combined));
    }

    serde_json::from_slice(&output.stdout).map_err(|e| CoreError::JsonParse {
        tool: "ffprobe".to_string(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_probe_document() {
        let raw = r#"{
            "streams": [
                {
                    "index": 0,
                    "codec_name": "h264",
                    "codec_type": "video",
                    "width": 1920,
                    "height": 1080,
                    "display_aspect_ratio": "16:9",
                    "start_time": "0.000000",
                    "duration": "10.000000",
                    "bit_rate": "1205959",
                    "nb_frames": "300",
                    "tags": { "creation_time": "2021-04-08T12:00:00.000000Z" }
                },
                {
                    "index": 1,
                    "codec_name": "aac",
                    "codec_type": "audio",
                    "start_time": "0.000000",
                    "duration": "10.000000",
                    "bit_rate": "128000"
                }
            ],
            "format": {
                "duration": "10.000000",
                "size": "1510218",
                "bit_rate": "1208174"
            }
        }"#;

        let document: ProbeDocument = serde_json::from_str(raw).unwrap();
        assert!(document.error.is_none());
        assert_eq!(document.format.duration.as_deref(), Some("10.000000"));
        assert_eq!(document.streams.len(), 2);
        assert_eq!(document.streams[0].width, Some(1920));
        assert_eq!(document.streams[1].width, None);
        assert_eq!(
            document.streams[0].tags.creation_time.as_deref(),
            Some("2021-04-08T12:00:00.000000Z")
        );
        assert!(document.streams[1].tags.creation_time.is_none());
    }

    #[test]
    fn test_deserialize_error_document() {
        let raw = r#"{"error": {"code": -2, "string": "No such file or directory"}}"#;
        let document: ProbeDocument = serde_json::from_str(raw).unwrap();
        assert_eq!(
            document.error.unwrap().message,
            "No such file or directory"
        );
    }
}
