use std::fs;

use tempfile::TempDir;
use termdash::core::config::{ColorName, Config, GraphStyle};

fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("config.ini");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_config_load_full_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(
        &temp_dir,
        r#"
# termdash settings
[general]
refresh_ms = 500
title = "Build Box"

[display]
show_gpu = no
show_temperature = 0

[colors]
bar = blue
value = "magenta"

[thresholds]
warning = 60
critical = 75

[disks]
path = /
path = /home

[style]
bar_fill = =
bar_empty = .
graph_style = line
"#,
    );

    let config = Config::load(&path).unwrap();

    assert_eq!(config.refresh_ms, 500);
    assert_eq!(config.title, "Build Box");
    assert!(config.show_cpu);
    assert!(!config.show_gpu);
    assert!(!config.show_temperature);
    assert_eq!(config.colors.bar, ColorName::Blue);
    assert_eq!(config.colors.value, ColorName::Magenta);
    assert_eq!(config.colors.critical, ColorName::Red);
    assert_eq!(config.thresholds.warning, 60.0);
    assert_eq!(config.thresholds.critical, 75.0);
    assert_eq!(config.disk_paths, vec!["/", "/home"]);
    assert_eq!(config.bar_fill, '=');
    assert_eq!(config.bar_empty, '.');
    assert_eq!(config.graph_style, GraphStyle::Line);
}

#[test]
fn test_config_load_missing_file_errors() {
    let temp_dir = TempDir::new().unwrap();
    let result = Config::load(&temp_dir.path().join("absent.ini"));
    assert!(result.is_err());
}

#[test]
fn test_config_empty_file_is_default() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(&temp_dir, "");
    assert_eq!(Config::load(&path).unwrap(), Config::default());
}

#[test]
fn test_config_low_refresh_clamped() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(&temp_dir, "[general]\nrefresh_ms = 10\n");
    let config = Config::load(&path).unwrap();
    assert_eq!(config.refresh_ms, 100);
    assert_eq!(config.refresh_interval().as_millis(), 100);
}

#[test]
fn test_config_default_path_names_the_app() {
    let path = Config::default_path();
    let text = path.to_string_lossy();
    assert!(text.contains("termdash"));
}

#[test]
fn test_config_load_malformed_file_errors() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(&temp_dir, "[general\nrefresh_ms = 400\n");
    assert!(Config::load(&path).is_err());
}

#[test]
fn test_config_repeated_disk_paths_keep_order() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(&temp_dir, "[disks]\npath = /var\npath = /\npath = /srv\n");
    let config = Config::load(&path).unwrap();
    assert_eq!(config.disk_paths, vec!["/var", "/", "/srv"]);
}
