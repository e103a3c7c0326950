use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, Command};
use colored::*;
use log::debug;

use termdash::core::config::Config;
use termdash::ui::run_dashboard;

/// Pause after a bad `--config` so the warning is readable before the first frame
const CONFIG_WARNING_PAUSE: Duration = Duration::from_secs(2);

fn cli() -> Command {
    Command::new("termdash")
        .about("A native terminal system monitor")
        .disable_version_flag(true)
        .after_help(format!(
            "Default config path: {}",
            Config::default_path().display()
        ))
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Path to configuration file")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("version")
                .short('v')
                .long("version")
                .help("Show version information")
                .action(ArgAction::SetTrue),
        )
}

/// Explicit paths warn on failure; the default path is optional and stays quiet
fn load_config(explicit: Option<&PathBuf>) -> Config {
    match explicit {
        Some(path) => match Config::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!(
                    "{} Could not load config file: {} ({:#})",
                    "Warning:".yellow().bold(),
                    path.display(),
                    e
                );
                eprintln!("{}", "Using default settings.".yellow());
                thread::sleep(CONFIG_WARNING_PAUSE);
                Config::default()
            }
        },
        None => {
            let path = Config::default_path();
            Config::load(&path).unwrap_or_else(|e| {
                debug!("No config at {}: {:#}", path.display(), e);
                Config::default()
            })
        }
    }
}

fn run() -> Result<()> {
    let matches = cli().get_matches();

    if matches.get_flag("version") {
        println!("Terminal Dashboard v{}", env!("CARGO_PKG_VERSION"));
        println!("A native terminal system monitor");
        return Ok(());
    }

    let config = load_config(matches.get_one::<PathBuf>("config"));

    let running = Arc::new(AtomicBool::new(true));
    let flag = Arc::clone(&running);
    ctrlc::set_handler(move || {
        flag.store(false, Ordering::Relaxed);
    })
    .context("Failed to install Ctrl+C handler")?;

    run_dashboard(config, running)?;

    println!("\nDashboard stopped.");
    Ok(())
}

fn main() {
    termdash::init_logging();

    if let Err(e) = run() {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}
