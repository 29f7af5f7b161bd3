//! Constant lookup tables: the quality-preset catalog and the
//! supported video codec table.
//!
//! The catalog order is fixed and drives both the order of the
//! per-rendition ffmpeg argument blocks and the order of the entries
//! in the generated master playlist, so repeated runs with the same
//! selection produce identical output.

use crate::error::{CoreError, CoreResult};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// A named bundle of target resolution/bitrate/framerate/quality
/// values driving one rendition of an adaptive stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QualityPreset {
    pub width: i64,
    pub height: i64,
    pub video_bitrate_kbps: i64,
    pub audio_bitrate_kbps: i64,
    /// CRF value, lower is higher quality.
    pub quality_level: i64,
    pub frame_rate: i64,
}

/// Canonical preset emission order, low to high bitrate.
pub const PRESET_ORDER: &[&str] = &[
    "144p",
    "240p",
    "360p",
    "480p",
    "720p",
    "720p+60fps",
    "1080p",
    "1080p+60fps",
    "4k",
    "4k+60fps",
];

/// The built-in preset catalog.
///
/// The 1080p+60fps video bitrate (660 kbps) looks inverted next to
/// the 1080p/30fps entry (4900 kbps) but matches the historical
/// catalog; changing it would silently change stream output.
pub static PRESETS: Lazy<HashMap<&'static str, QualityPreset>> = Lazy::new(|| {
    HashMap::from([
        (
            "144p",
            QualityPreset {
                width: 256,
                height: 144,
                video_bitrate_kbps: 90,
                audio_bitrate_kbps: 32,
                quality_level: 24,
                frame_rate: 30,
            },
        ),
        (
            "240p",
            QualityPreset {
                width: 426,
                height: 240,
                video_bitrate_kbps: 300,
                audio_bitrate_kbps: 64,
                quality_level: 28,
                frame_rate: 30,
            },
        ),
        (
            "360p",
            QualityPreset {
                width: 640,
                height: 360,
                video_bitrate_kbps: 700,
                audio_bitrate_kbps: 96,
                quality_level: 24,
                frame_rate: 30,
            },
        ),
        (
            "480p",
            QualityPreset {
                width: 850,
                height: 480,
                video_bitrate_kbps: 1400,
                audio_bitrate_kbps: 128,
                quality_level: 24,
                frame_rate: 30,
            },
        ),
        (
            "720p",
            QualityPreset {
                width: 1280,
                height: 720,
                video_bitrate_kbps: 2850,
                audio_bitrate_kbps: 128,
                quality_level: 24,
                frame_rate: 30,
            },
        ),
        (
            "720p+60fps",
            QualityPreset {
                width: 1280,
                height: 720,
                video_bitrate_kbps: 3950,
                audio_bitrate_kbps: 128,
                quality_level: 20,
                frame_rate: 60,
            },
        ),
        (
            "1080p",
            QualityPreset {
                width: 1920,
                height: 1080,
                video_bitrate_kbps: 4900,
                audio_bitrate_kbps: 192,
                quality_level: 20,
                frame_rate: 30,
            },
        ),
        (
            "1080p+60fps",
            QualityPreset {
                width: 1920,
                height: 1080,
                video_bitrate_kbps: 660,
                audio_bitrate_kbps: 192,
                quality_level: 20,
                frame_rate: 60,
            },
        ),
        (
            "4k",
            QualityPreset {
                width: 3840,
                height: 2160,
                video_bitrate_kbps: 14000,
                audio_bitrate_kbps: 192,
                quality_level: 18,
                frame_rate: 30,
            },
        ),
        (
            "4k+60fps",
            QualityPreset {
                width: 3840,
                height: 2160,
                video_bitrate_kbps: 25000,
                audio_bitrate_kbps: 192,
                quality_level: 18,
                frame_rate: 60,
            },
        ),
    ])
});

/// Supported logical codec names mapped to ffmpeg encoder libraries.
pub static VIDEO_CODECS: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| HashMap::from([("h264", "libx264"), ("h265", "libx265")]));

/// Resolves a logical codec name to its encoder library identifier.
pub fn resolve_codec(name: &str) -> CoreResult<&'static str> {
    VIDEO_CODECS
        .get(name)
        .copied()
        .ok_or_else(|| CoreError::InvalidCodec(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_ordered_name_has_a_catalog_entry() {
        for name in PRESET_ORDER {
            assert!(PRESETS.contains_key(name), "missing preset: {name}");
        }
        assert_eq!(PRESET_ORDER.len(), PRESETS.len());
    }

    #[test]
    fn test_catalog_resolution_is_stable() {
        for name in PRESET_ORDER {
            assert_eq!(PRESETS.get(name), PRESETS.get(name));
        }
    }

    #[test]
    fn test_catalog_values_sample() {
        let preset = PRESETS["480p"];
        assert_eq!(preset.width, 850);
        assert_eq!(preset.height, 480);
        assert_eq!(preset.video_bitrate_kbps, 1400);
        assert_eq!(preset.audio_bitrate_kbps, 128);
        assert_eq!(preset.quality_level, 24);
        assert_eq!(preset.frame_rate, 30);
    }

    #[test]
    fn test_resolve_codec() {
        assert_eq!(resolve_codec("h264").unwrap(), "libx264");
        assert_eq!(resolve_codec("h265").unwrap(), "libx265");
        assert!(matches!(
            resolve_codec("vp9"),
            Err(CoreError::InvalidCodec(name)) if name == "vp9"
        ));
    }
}
