use termdash::core::system_monitor::{tier_for, Tier};
use termdash::ui::dashboard::layout::{bar_width, fit_label, title_padding, LABEL_WIDTH};
use termdash::ui::format_bytes;

#[test]
fn test_bar_width_table() {
    let cases = [(80, 32), (120, 72), (58, 10), (59, 11), (57, 10), (30, 10)];
    for (width, expected) in cases {
        assert_eq!(bar_width(width), expected, "terminal width {}", width);
    }
}

#[test]
fn test_title_centering() {
    let title = "System Dashboard";
    let padding = title_padding(100, title);
    // Bracketed title plus padding fits and is centered within one column
    let used = padding + title.len() + 4;
    assert!(used <= 100);
    assert!(100 - used - padding <= 1);
}

#[test]
fn test_long_mount_point_truncated() {
    let label = fit_label("/var/lib/docker");
    assert_eq!(label, "/var/lib~");
    assert_eq!(label.chars().count(), LABEL_WIDTH);
}

#[test]
fn test_tier_boundaries() {
    assert_eq!(tier_for(80.0, 80.0, 90.0), Tier::Warning);
    assert_eq!(tier_for(79.99, 80.0, 90.0), Tier::Normal);
    assert_eq!(tier_for(90.0, 80.0, 90.0), Tier::Critical);
}

#[test]
fn test_format_bytes_boundaries() {
    assert_eq!(format_bytes(1023), "1023 B");
    assert_eq!(format_bytes(1024 * 1024), "1.0 MB");
}
