//! Integration tests for playlist-generation failure handling: every
//! validation error must surface before ffmpeg is invoked and must
//! leave no manifest file behind.

use vidutils_core::{generate_hls_playlist, CoreError, HlsRequest};

#[test]
fn test_unknown_preset_creates_no_manifest() {
    let dir = tempfile::tempdir().unwrap();
    let mut request = HlsRequest::new("missing.mp4", dir.path());
    request.preset_names = vec!["480p".to_string(), "9000p".to_string()];

    let result = generate_hls_playlist(&request);
    assert!(matches!(
        result,
        Err(CoreError::UnknownPreset(name)) if name == "9000p"
    ));
    assert!(!dir.path().join("playlist.m3u8").exists());
}

#[test]
fn test_empty_selection_creates_no_manifest() {
    let dir = tempfile::tempdir().unwrap();
    let request = HlsRequest::new("missing.mp4", dir.path());

    let result = generate_hls_playlist(&request);
    assert!(matches!(result, Err(CoreError::NoValidPresets)));
    assert!(!dir.path().join("playlist.m3u8").exists());
}

#[test]
fn test_output_directory_is_created() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("streams").join("movie");
    let request = HlsRequest::new("missing.mp4", &nested);

    // Fails on the empty selection, but only after the directory
    // tree has been created.
    assert!(generate_hls_playlist(&request).is_err());
    assert!(nested.is_dir());
}
