use anyhow::{Context, Result};
use ini::{Ini, ParseOption};
use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::system_monitor::{Thresholds, Tier, MAX_DISKS};

pub const MIN_REFRESH_MS: u64 = 100;
pub const MAX_TITLE_LEN: usize = 63;
pub const MAX_DISK_PATHS: usize = MAX_DISKS;
pub const MIN_BAR_WIDTH_OVERRIDE: usize = 10;
pub const MAX_BAR_WIDTH_OVERRIDE: usize = 80;

#[cfg(windows)]
const DEFAULT_DISK_PATH: &str = "C:\\";
#[cfg(not(windows))]
const DEFAULT_DISK_PATH: &str = "/";

/// Named terminal color from the config file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorName {
    /// Leave the terminal's own color untouched
    #[default]
    Default,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl ColorName {
    /// Unknown names map to [`ColorName::Default`]
    pub fn parse(value: &str) -> Self {
        match value {
            "black" => ColorName::Black,
            "red" => ColorName::Red,
            "green" => ColorName::Green,
            "yellow" => ColorName::Yellow,
            "blue" => ColorName::Blue,
            "magenta" => ColorName::Magenta,
            "cyan" => ColorName::Cyan,
            "white" => ColorName::White,
            _ => ColorName::Default,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GraphStyle {
    /// Static filled/empty bar
    #[default]
    Bar,
    /// Sparkline over the metric's history
    Line,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Colors {
    pub bar: ColorName,
    pub title: ColorName,
    pub label: ColorName,
    pub value: ColorName,
    pub warning: ColorName,
    pub critical: ColorName,
}

impl Default for Colors {
    fn default() -> Self {
        Self {
            bar: ColorName::Green,
            title: ColorName::Cyan,
            label: ColorName::White,
            value: ColorName::Default,
            warning: ColorName::Yellow,
            critical: ColorName::Red,
        }
    }
}

/// Dashboard settings, read-only once loaded
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub refresh_ms: u64,
    pub title: String,

    pub show_cpu: bool,
    pub show_memory: bool,
    pub show_disk: bool,
    pub show_gpu: bool,
    pub show_temperature: bool,

    pub colors: Colors,
    pub thresholds: Thresholds,

    /// Mount points to sample, in display order
    pub disk_paths: Vec<String>,

    pub bar_fill: char,
    pub bar_empty: char,
    /// Fixed bar width; `None` adapts to the terminal width
    pub bar_width: Option<usize>,
    pub graph_style: GraphStyle,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            refresh_ms: 1000,
            title: "System Dashboard".to_string(),
            show_cpu: true,
            show_memory: true,
            show_disk: true,
            show_gpu: true,
            show_temperature: true,
            colors: Colors::default(),
            thresholds: Thresholds::default(),
            disk_paths: vec![DEFAULT_DISK_PATH.to_string()],
            bar_fill: '#',
            bar_empty: '-',
            bar_width: None,
            graph_style: GraphStyle::Bar,
        }
    }
}

impl Config {
    /// Read and parse an INI config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        Self::parse(&content).with_context(|| format!("Invalid config file: {:?}", path))
    }

    /// Parse INI text on top of the defaults.
    ///
    /// Syntax errors fail the whole file. Unknown keys are skipped and bad
    /// values keep their default.
    pub fn parse(content: &str) -> Result<Self> {
        let options = ParseOption {
            enabled_quote: true,
            // Windows mount points end in a backslash
            enabled_escape: false,
            ..ParseOption::default()
        };
        let ini = Ini::load_from_str_opt(content, options).context("Malformed INI")?;

        let mut config = Config::default();

        for (section, props) in ini.iter() {
            let Some(section) = section else {
                for (key, _) in props.iter() {
                    debug!("config: ignoring {} outside any section", key);
                }
                continue;
            };
            for (key, value) in props.iter() {
                config.apply(section, key, value.trim());
            }
        }

        // User paths replace the built-in default entirely
        let disk_paths: Vec<String> = ini
            .section(Some("disks"))
            .map(|disks| disks.get_all("path").map(|p| p.trim().to_string()).collect())
            .unwrap_or_default();
        if disk_paths.len() > MAX_DISK_PATHS {
            warn!(
                "Ignoring {} disk path(s): at most {} paths are supported",
                disk_paths.len() - MAX_DISK_PATHS,
                MAX_DISK_PATHS
            );
        }
        if !disk_paths.is_empty() {
            config.disk_paths = disk_paths.into_iter().take(MAX_DISK_PATHS).collect();
        }

        if config.thresholds.warning > config.thresholds.critical {
            warn!(
                "Warning threshold ({}) is above critical threshold ({})",
                config.thresholds.warning, config.thresholds.critical
            );
        }

        Ok(config)
    }

    fn apply(&mut self, section: &str, key: &str, value: &str) {
        match (section, key) {
            ("general", "refresh_ms") => {
                if let Some(ms) = parse_number::<i64>(key, value) {
                    self.refresh_ms = ms.max(MIN_REFRESH_MS as i64) as u64;
                }
            }
            ("general", "title") => {
                self.title = value.chars().take(MAX_TITLE_LEN).collect();
            }
            ("display", "show_cpu") => self.show_cpu = parse_bool(value),
            ("display", "show_memory") => self.show_memory = parse_bool(value),
            ("display", "show_disk") => self.show_disk = parse_bool(value),
            ("display", "show_gpu") => self.show_gpu = parse_bool(value),
            ("display", "show_temperature") => self.show_temperature = parse_bool(value),
            ("colors", "bar") => self.colors.bar = ColorName::parse(value),
            ("colors", "title") => self.colors.title = ColorName::parse(value),
            ("colors", "label") => self.colors.label = ColorName::parse(value),
            ("colors", "value") => self.colors.value = ColorName::parse(value),
            ("colors", "warning") => self.colors.warning = ColorName::parse(value),
            ("colors", "critical") => self.colors.critical = ColorName::parse(value),
            ("thresholds", "warning") => {
                if let Some(pct) = parse_number::<f64>(key, value) {
                    self.thresholds.warning = pct;
                }
            }
            ("thresholds", "critical") => {
                if let Some(pct) = parse_number::<f64>(key, value) {
                    self.thresholds.critical = pct;
                }
            }
            // Collected separately, all occurrences in order
            ("disks", "path") => {}
            ("style", "bar_fill") => {
                if let Some(c) = value.chars().next() {
                    self.bar_fill = c;
                }
            }
            ("style", "bar_empty") => {
                if let Some(c) = value.chars().next() {
                    self.bar_empty = c;
                }
            }
            ("style", "bar_width") => {
                if let Some(width) = parse_number::<i64>(key, value) {
                    self.bar_width = Some(width.clamp(
                        MIN_BAR_WIDTH_OVERRIDE as i64,
                        MAX_BAR_WIDTH_OVERRIDE as i64,
                    ) as usize);
                }
            }
            ("style", "graph_style") => {
                self.graph_style = match value {
                    "line" => GraphStyle::Line,
                    "bar" => GraphStyle::Bar,
                    other => {
                        warn!("Unknown graph_style {:?}, using bar", other);
                        GraphStyle::Bar
                    }
                };
            }
            (section, key) => debug!("config: ignoring [{}] {}", section, key),
        }
    }

    /// Platform default config location
    pub fn default_path() -> PathBuf {
        match dirs::config_dir() {
            Some(dir) => dir.join("termdash").join("config.ini"),
            None => PathBuf::from("./termdash.ini"),
        }
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_millis(self.refresh_ms.max(MIN_REFRESH_MS))
    }

    /// Display color for a threshold tier
    pub fn tier_color(&self, tier: Tier) -> ColorName {
        match tier {
            Tier::Normal => self.colors.bar,
            Tier::Warning => self.colors.warning,
            Tier::Critical => self.colors.critical,
        }
    }
}

fn parse_bool(value: &str) -> bool {
    matches!(value, "true" | "yes" | "1")
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> Option<T> {
    match value.parse::<T>() {
        Ok(v) => Some(v),
        Err(_) => {
            warn!("Invalid number for {}: {:?}", key, value);
            None
        }
    }
}
