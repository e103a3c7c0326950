use std::collections::VecDeque;

use termdash::core::config::{Config, GraphStyle};
use termdash::core::system_monitor::{
    CpuTimes, DiskSnapshot, GpuSampler, HistoryChannel, MemorySnapshot, SystemBackend,
    Thresholds, Tier,
};
use termdash::ui::dashboard::widgets::Sparkline;
use termdash::ui::dashboard::DashboardApp;
use termdash::{DashError, Result};

/// Backend replaying cumulative CPU counters with fixed memory and disks
struct ReplayBackend {
    ticks: VecDeque<CpuTimes>,
    disks: Vec<DiskSnapshot>,
}

impl ReplayBackend {
    /// Counters whose per-cycle busy share is each entry of `busy_percents`
    fn with_busy_cycles(busy_percents: &[u64]) -> Self {
        let (mut user, mut idle) = (0u64, 0u64);
        let mut ticks = VecDeque::new();
        ticks.push_back(CpuTimes::Ticks {
            user,
            nice: 0,
            system: 0,
            idle,
        });
        for busy in busy_percents {
            user += busy;
            idle += 100 - busy;
            ticks.push_back(CpuTimes::Ticks {
                user,
                nice: 0,
                system: 0,
                idle,
            });
        }
        Self {
            ticks,
            disks: vec![DiskSnapshot::from_free("/", 1000, 100)],
        }
    }
}

impl SystemBackend for ReplayBackend {
    fn cpu_times(&mut self) -> Result<CpuTimes> {
        self.ticks
            .pop_front()
            .ok_or_else(|| DashError::metric_collection("counters exhausted"))
    }

    fn memory(&mut self) -> Result<MemorySnapshot> {
        Ok(MemorySnapshot::from_used(4096, 1024))
    }

    fn disk(&mut self, mount_point: &str) -> Result<DiskSnapshot> {
        self.disks
            .iter()
            .find(|d| d.mount_point == mount_point)
            .cloned()
            .ok_or_else(|| DashError::metric_collection("not mounted"))
    }
}

fn line_config() -> Config {
    Config {
        show_gpu: false,
        show_disk: false,
        graph_style: GraphStyle::Line,
        thresholds: Thresholds {
            warning: 80.0,
            critical: 90.0,
        },
        ..Config::default()
    }
}

#[test]
fn test_three_cycles_produce_tiered_sparkline() {
    let config = line_config();
    let thresholds = config.thresholds;
    let backend = ReplayBackend::with_busy_cycles(&[10, 85, 95]);
    let mut app = DashboardApp::new(config, backend, GpuSampler::unavailable()).unwrap();

    let mut tiers = Vec::new();
    let mut last_frame = Vec::new();
    for _ in 0..3 {
        let cpu = app.collect().cpu.unwrap();
        tiers.push(thresholds.tier(cpu.total_percent()));
    }
    assert_eq!(tiers, vec![Tier::Normal, Tier::Warning, Tier::Critical]);

    // Same scenario again, this time through the renderer
    let backend = ReplayBackend::with_busy_cycles(&[10, 85, 95]);
    let mut app = DashboardApp::new(line_config(), backend, GpuSampler::unavailable()).unwrap();
    for _ in 0..3 {
        last_frame.clear();
        app.tick(&mut last_frame, 80).unwrap();
    }

    let history = app.renderer().history();
    assert_eq!(history.count(HistoryChannel::Cpu), 3);
    assert!((history.get(HistoryChannel::Cpu, 0) - 95.0).abs() < 1e-9);

    let spark = Sparkline::from_history(history.channel(HistoryChannel::Cpu), 32, &thresholds);
    assert_eq!(spark.padding, 29);
    assert_eq!(spark.glyphs(), "▁▇█");
    assert_eq!(spark.tiers(), vec![Tier::Normal, Tier::Warning, Tier::Critical]);

    let text = String::from_utf8(last_frame).unwrap();
    // green, yellow, red glyphs in sample order
    let normal = text.find("\x1b[38;5;2m▁").unwrap();
    let warning = text.find("\x1b[38;5;3m▇").unwrap();
    let critical = text.find("\x1b[38;5;1m█").unwrap();
    assert!(normal < warning && warning < critical);
    assert!(!text.contains("VRAM"));
}

#[test]
fn test_bar_mode_frame_with_disk() {
    let config = Config {
        show_gpu: false,
        ..Config::default()
    };
    let backend = ReplayBackend::with_busy_cycles(&[50]);
    let mut app = DashboardApp::new(config, backend, GpuSampler::unavailable()).unwrap();

    let mut out = Vec::new();
    app.tick(&mut out, 80).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.contains("[ System Dashboard ]"));
    assert!(text.contains(" 50.0%"));
    assert!(text.contains("(1.0 KB / 4.0 KB)"));
    assert!(text.contains(" 90.0%"));
    assert!(text.contains("Press Ctrl+C to exit"));
    assert_eq!(app.renderer().history().count(HistoryChannel::Cpu), 0);
}

#[test]
fn test_unreadable_disk_omits_row_but_keeps_running() {
    let config = Config {
        show_gpu: false,
        disk_paths: vec!["/nowhere".to_string()],
        ..Config::default()
    };
    let backend = ReplayBackend::with_busy_cycles(&[20]);
    let mut app = DashboardApp::new(config, backend, GpuSampler::unavailable()).unwrap();

    let frame = app.collect();
    assert!(frame.disks.is_empty());
    assert!(frame.cpu.is_some());

    let mut out = Vec::new();
    app.tick(&mut out, 80).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(!text.contains("/nowhere"));
}
