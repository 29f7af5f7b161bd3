//! Formatting helpers.

/// Formats a byte count with decimal (base-1000) units and two decimal
/// places, e.g. `1510218.0` -> `"1.51MB"`.
#[must_use]
pub fn format_size(bytes: f64) -> String {
    const UNITS: &[&str] = &["B", "kB", "MB", "GB", "TB", "PB"];

    let mut value = bytes;
    let mut unit = 0;
    while value.abs() >= 1000.0 && unit < UNITS.len() - 1 {
        value /= 1000.0;
        unit += 1;
    }
    format!("{:.2}{}", value, UNITS[unit])
}
