//! Display formatting for byte counts and durations.

const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Largest unit keeping the value at or above 1, one decimal at most, trailing
/// zeros stripped. Zero renders as `-`.
pub fn format_bytes(bytes: u64) -> String {
    if bytes == 0 {
        return "-".to_string();
    }

    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }

    let formatted = format!("{size:.1}");
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    format!("{trimmed} {}", UNITS[unit])
}

/// Milliseconds below one second as `Nms`, otherwise seconds with two decimals.
pub fn format_ms(ms: u64) -> String {
    if ms < 1000 {
        return format!("{ms}ms");
    }
    format!("{:.2}s", ms as f64 / 1000.0)
}

/// Speedup factor with two decimals, e.g. `2.00x`.
pub fn format_speedup(factor: f64) -> String {
    format!("{factor:.2}x")
}
