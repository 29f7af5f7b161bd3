//! Temporary file path helpers.

use std::path::{Path, PathBuf};

/// Returns a collision-resistant file path with a random suffix inside
/// `dir`. Does not create the file; the caller hands the path to
/// ffmpeg as an output target.
pub fn create_temp_file_path(dir: &Path, prefix: &str, extension: &str) -> PathBuf {
    use rand::distributions::Alphanumeric;
    use rand::{thread_rng, Rng};

    let random_suffix: String = thread_rng()
        .sample_iter(&Alphanumeric)
        .take(12)
        .map(char::from)
        .collect();

    dir.join(format!("{prefix}-{random_suffix}.{extension}"))
}
