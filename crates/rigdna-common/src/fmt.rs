//! Human-readable size formatting.

/// Format a byte count for display.
///
/// Sizes below 1024 render as `"<n> B"`, below 1024*1024 as one-decimal
/// `"<x.y> KB"`, and anything larger as one-decimal `"<x.y> MB"`.
///
/// # Example
///
/// ```
/// use rigdna_common::format_size;
///
/// assert_eq!(format_size(1536), "1.5 KB");
/// ```
pub fn format_size(bytes: u64) -> String {
    const KIB: u64 = 1024;
    const MIB: u64 = 1024 * 1024;

    if bytes < KIB {
        format!("{} B", bytes)
    } else if bytes < MIB {
        format!("{:.1} KB", bytes as f64 / KIB as f64)
    } else {
        format!("{:.1} MB", bytes as f64 / MIB as f64)
    }
}
