//! Core library for the vidutils media toolkit: inspecting,
//! transcoding, and HLS-packaging video files by shelling out to
//! ffmpeg and ffprobe.
//!
//! Three independent, stateless components:
//!
//! - [`inspect`] probes a file and projects the JSON output into a
//!   typed report, optionally extracting a thumbnail frame.
//! - [`transform`] runs one rescale/re-encode/rate-limit invocation.
//! - [`hls`] batches one multi-output invocation producing a
//!   segmented stream per quality preset plus a master playlist.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use vidutils_core::{HlsRequest, generate_hls_playlist};
//!
//! let mut request = HlsRequest::new("input.mp4", "out");
//! request.segment_duration_secs = 4;
//! request.preset_names = vec!["144p".to_string(), "720p".to_string()];
//!
//! let playlist = generate_hls_playlist(&request).unwrap();
//! println!("{}", playlist.display());
//! ```

pub mod error;
pub mod external;
pub mod hls;
pub mod inspect;
pub mod presets;
pub mod temp_files;
pub mod transform;
pub mod utils;

// Re-exports for public API
pub use error::{CoreError, CoreResult};
pub use external::check_dependency;
pub use hls::{generate_hls_playlist, HlsRequest};
pub use inspect::{inspect, InspectOptions, InspectReport, StreamInfo, StreamKind};
pub use presets::{QualityPreset, PRESETS, PRESET_ORDER};
pub use transform::{transform, TransformOptions};
pub use utils::format_size;
