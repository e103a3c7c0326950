//! Column layout math for dashboard rows.
//!
//! A row is `label graph  value  suffix`; everything except the graph has a
//! fixed budget, so the graph takes whatever width is left.

use unicode_width::UnicodeWidthStr;

/// Columns reserved for label, brackets, percentage and suffix text
pub const LINE_OVERHEAD: usize = 48;
/// Graphs never shrink below this many cells
pub const MIN_BAR_WIDTH: usize = 10;
/// Label column width
pub const LABEL_WIDTH: usize = 9;

const TRUNCATION_MARKER: char = '~';

/// Graph width for a terminal `term_width` columns wide
pub fn bar_width(term_width: usize) -> usize {
    term_width.saturating_sub(LINE_OVERHEAD).max(MIN_BAR_WIDTH)
}

/// Graph width honoring an explicit override from the config
pub fn resolve_bar_width(override_width: Option<usize>, term_width: usize) -> usize {
    override_width.unwrap_or_else(|| bar_width(term_width))
}

/// Leading spaces that center `"[ title ]"` in the terminal
pub fn title_padding(term_width: usize, title: &str) -> usize {
    term_width.saturating_sub(title.width() + 4) / 2
}

/// Fit an identifier into the label column.
///
/// Longer identifiers keep their first `LABEL_WIDTH - 1` characters plus `~`;
/// shorter ones are right-padded with spaces.
pub fn fit_label(label: &str) -> String {
    if label.chars().count() > LABEL_WIDTH {
        let mut cut: String = label.chars().take(LABEL_WIDTH - 1).collect();
        cut.push(TRUNCATION_MARKER);
        cut
    } else {
        format!("{:<width$}", label, width = LABEL_WIDTH)
    }
}
