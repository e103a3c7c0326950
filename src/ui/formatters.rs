// Human-readable value formatting for dashboard rows

const UNITS: [&str; 6] = ["B", "KB", "MB", "GB", "TB", "PB"];

/// Format a byte count with binary (1024) steps.
///
/// Plain bytes print as an integer; every larger unit gets one decimal.
pub fn format_bytes(bytes: u64) -> String {
    let mut size = bytes as f64;
    let mut unit = 0;

    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }

    if unit == 0 {
        format!("{} {}", bytes, UNITS[0])
    } else {
        format!("{:.1} {}", size, UNITS[unit])
    }
}

/// Right-aligned percentage, e.g. `" 42.0%"`
pub fn format_percent(percent: f64) -> String {
    format!("{:5.1}%", percent)
}

/// `"(used / total)"` byte pair shown after memory, disk and VRAM rows
pub fn format_usage_pair(used: u64, total: u64) -> String {
    format!("({} / {})", format_bytes(used), format_bytes(total))
}

pub fn format_temperature(celsius: i32) -> String {
    format!("{}°C", celsius)
}
