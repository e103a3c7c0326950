use crossterm::style::Color;

use crate::core::config::ColorName;
use crate::core::system_monitor::{RingBuffer, Thresholds, Tier};

/// Sparkline glyphs from lowest to highest density
pub const SPARK_GLYPHS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Terminal color for a configured color name; `None` keeps the terminal default
pub fn term_color(name: ColorName) -> Option<Color> {
    match name {
        ColorName::Default => None,
        ColorName::Black => Some(Color::Black),
        ColorName::Red => Some(Color::DarkRed),
        ColorName::Green => Some(Color::DarkGreen),
        ColorName::Yellow => Some(Color::DarkYellow),
        ColorName::Blue => Some(Color::DarkBlue),
        ColorName::Magenta => Some(Color::DarkMagenta),
        ColorName::Cyan => Some(Color::DarkCyan),
        ColorName::White => Some(Color::Grey),
    }
}

/// Number of filled cells for `percent` in a bar `width` cells wide
pub fn filled_cells(percent: f64, width: usize) -> usize {
    let filled = (percent / 100.0 * width as f64) as i64;
    filled.clamp(0, width as i64) as usize
}

/// Fill/empty characters of a static bar, without brackets
pub fn bar_body(percent: f64, width: usize, fill: char, empty: char) -> String {
    let filled = filled_cells(percent, width);
    let mut body = String::with_capacity(width);
    body.extend(std::iter::repeat(fill).take(filled));
    body.extend(std::iter::repeat(empty).take(width - filled));
    body
}

/// Density level 0..=7 for a percentage
pub fn spark_level(value: f64) -> usize {
    let level = (value / 100.0 * 7.99).floor() as i64;
    level.clamp(0, 7) as usize
}

/// A sparkline ready to paint: leading blank cells, then one glyph per sample
#[derive(Debug, Clone, PartialEq)]
pub struct Sparkline {
    pub padding: usize,
    pub points: Vec<(char, Tier)>,
}

impl Sparkline {
    /// Build from the newest `width` samples of a channel, oldest first.
    ///
    /// Each glyph carries the tier of its own sample.
    pub fn from_history(history: &RingBuffer, width: usize, thresholds: &Thresholds) -> Self {
        let points: Vec<(char, Tier)> = history
            .latest(width)
            .map(|value| (SPARK_GLYPHS[spark_level(value)], thresholds.tier(value)))
            .collect();

        Self {
            padding: width - points.len(),
            points,
        }
    }

    pub fn width(&self) -> usize {
        self.padding + self.points.len()
    }

    pub fn glyphs(&self) -> String {
        self.points.iter().map(|(glyph, _)| *glyph).collect()
    }

    pub fn tiers(&self) -> Vec<Tier> {
        self.points.iter().map(|(_, tier)| *tier).collect()
    }
}
