use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

use anyhow::{Context, Result};
use log::debug;

use super::render::{FrameData, Renderer};
use super::terminal::{terminal_size, TerminalSession};
use crate::core::config::Config;
use crate::core::system_monitor::{GpuSampler, Sampler, SystemBackend};
use crate::platform::{get_gpu_provider, NativeBackend};

/// Dashboard state: sampler baseline, GPU capability and render history
pub struct DashboardApp<B: SystemBackend> {
    config: Config,
    sampler: Sampler<B>,
    gpu: GpuSampler,
    renderer: Renderer,
}

impl<B: SystemBackend> DashboardApp<B> {
    /// Initialise sampling; fails when CPU metrics, or memory metrics while
    /// shown, are unreadable
    pub fn new(config: Config, backend: B, gpu: GpuSampler) -> Result<Self> {
        let mut sampler = Sampler::new(backend);
        sampler
            .init(config.show_memory)
            .context("Failed to initialize metrics")?;

        Ok(Self {
            config,
            sampler,
            gpu,
            renderer: Renderer::new(),
        })
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn gpu_available(&self) -> bool {
        self.gpu.is_available()
    }

    /// Sample every enabled metric in fixed order: CPU, memory, disks, GPU.
    ///
    /// A metric whose sample fails this cycle is left out of the frame.
    pub fn collect(&mut self) -> FrameData {
        let mut frame = FrameData::default();

        if self.config.show_cpu {
            frame.cpu = self
                .sampler
                .sample_cpu()
                .map_err(|e| debug!("CPU sample skipped: {}", e))
                .ok();
        }

        if self.config.show_memory {
            frame.memory = self
                .sampler
                .sample_memory()
                .map_err(|e| debug!("Memory sample skipped: {}", e))
                .ok();
        }

        if self.config.show_disk {
            frame.disks = self
                .sampler
                .sample_disks(&self.config.disk_paths, self.config.disk_paths.len())
                .unwrap_or_else(|e| {
                    debug!("Disk samples skipped: {}", e);
                    Vec::new()
                });
        }

        if self.config.show_gpu && self.gpu.is_available() {
            frame.gpu = self
                .gpu
                .sample()
                .map_err(|e| debug!("GPU sample skipped: {}", e))
                .ok();
        }

        frame
    }

    /// One refresh cycle: sample then draw
    pub fn tick<W: Write>(&mut self, out: &mut W, term_width: usize) -> Result<()> {
        let frame = self.collect();
        self.renderer
            .render_frame(out, &self.config, &frame, term_width)
            .context("Failed to draw dashboard")
    }

    /// Refresh until `running` is cleared; the flag is checked once per cycle
    pub fn run<W: Write>(&mut self, out: &mut W, running: &AtomicBool) -> Result<()> {
        let interval = self.config.refresh_interval();

        while running.load(Ordering::Relaxed) {
            let (width, _) = terminal_size();
            self.tick(out, width as usize)?;
            thread::sleep(interval);
        }

        Ok(())
    }

    pub fn shutdown(&mut self) {
        self.gpu.shutdown();
    }
}

/// Run the dashboard on the native backend until `running` is cleared
pub fn run_dashboard(config: Config, running: Arc<AtomicBool>) -> Result<()> {
    let gpu = if config.show_gpu {
        GpuSampler::init_capability(get_gpu_provider)
    } else {
        GpuSampler::unavailable()
    };

    let mut app = DashboardApp::new(config, NativeBackend::new(), gpu)?;

    let mut session = TerminalSession::enter(io::stdout())?;
    let result = app.run(session.writer(), &running);
    session.restore().context("Failed to restore terminal")?;
    app.shutdown();

    result
}
