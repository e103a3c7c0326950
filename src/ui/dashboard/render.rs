//! Frame rendering.
//!
//! Each frame homes the cursor and overwrites the previous one row by row,
//! clearing to end of line after every row instead of clearing the screen.

use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Attribute, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{Clear, ClearType},
};

use super::layout::{fit_label, resolve_bar_width, title_padding};
use super::widgets::{bar_body, term_color, Sparkline};
use crate::core::config::{ColorName, Config, GraphStyle};
use crate::core::system_monitor::{
    temperature_tier, CpuSnapshot, DiskSnapshot, GpuSnapshot, HistoryChannel, MemorySnapshot,
    MetricsHistory,
};
use crate::ui::formatters::{format_percent, format_temperature, format_usage_pair};

const FOOTER: &str = "Press Ctrl+C to exit";

/// Everything sampled in one refresh cycle; `None` rows are omitted
#[derive(Debug, Clone, Default)]
pub struct FrameData {
    pub cpu: Option<CpuSnapshot>,
    pub memory: Option<MemorySnapshot>,
    pub disks: Vec<DiskSnapshot>,
    pub gpu: Option<GpuSnapshot>,
}

/// Stateful renderer; owns the sparkline history for the process lifetime
#[derive(Debug, Default)]
pub struct Renderer {
    history: MetricsHistory,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> &MetricsHistory {
        &self.history
    }

    /// Draw one full frame into `out`.
    ///
    /// In line mode the current percentages are appended to their history
    /// channels before the sparklines are drawn.
    pub fn render_frame<W: Write>(
        &mut self,
        out: &mut W,
        config: &Config,
        frame: &FrameData,
        term_width: usize,
    ) -> io::Result<()> {
        let width = resolve_bar_width(config.bar_width, term_width);

        queue!(out, MoveTo(0, 0))?;
        self.render_title(out, config, term_width)?;

        if config.show_cpu {
            if let Some(cpu) = &frame.cpu {
                self.render_cpu(out, config, cpu, width)?;
            }
        }
        if config.show_memory {
            if let Some(memory) = &frame.memory {
                self.render_memory(out, config, memory, width)?;
            }
        }

        let gpu = frame
            .gpu
            .as_ref()
            .filter(|gpu| config.show_gpu && gpu.available);
        if let Some(gpu) = gpu {
            if config.show_cpu || config.show_memory {
                end_line(out)?;
            }
            self.render_gpu(out, config, gpu, width)?;
        }

        if config.show_disk && !frame.disks.is_empty() {
            if config.show_cpu || config.show_memory || gpu.is_some() {
                end_line(out)?;
            }
            for disk in &frame.disks {
                self.render_disk(out, config, disk, width)?;
            }
        }

        end_line(out)?;
        set_color(out, ColorName::White)?;
        queue!(out, Print(FOOTER))?;
        reset_style(out)?;
        end_line(out)?;
        // Rows left over from a taller previous frame
        queue!(out, Clear(ClearType::FromCursorDown))?;

        out.flush()
    }

    fn render_title<W: Write>(&self, out: &mut W, config: &Config, term_width: usize) -> io::Result<()> {
        let padding = title_padding(term_width, &config.title);
        queue!(out, SetAttribute(Attribute::Bold))?;
        set_color(out, config.colors.title)?;
        queue!(
            out,
            Print(" ".repeat(padding)),
            Print(format!("[ {} ]", config.title))
        )?;
        reset_style(out)?;
        end_line(out)?;
        end_line(out)
    }

    fn render_cpu<W: Write>(
        &mut self,
        out: &mut W,
        config: &Config,
        cpu: &CpuSnapshot,
        width: usize,
    ) -> io::Result<()> {
        let total = cpu.total_percent();
        render_label(out, config, "CPU")?;
        self.render_graph(out, config, total, width, Some(HistoryChannel::Cpu))?;
        render_value(out, config, total)?;
        queue!(
            out,
            Print(format!(
                "  (usr: {:.1}% sys: {:.1}%)",
                cpu.user_percent, cpu.system_percent
            ))
        )?;
        if config.show_temperature {
            if let Some(celsius) = cpu.temperature_celsius {
                render_temperature(out, config, celsius)?;
            }
        }
        end_line(out)
    }

    fn render_memory<W: Write>(
        &mut self,
        out: &mut W,
        config: &Config,
        memory: &MemorySnapshot,
        width: usize,
    ) -> io::Result<()> {
        render_label(out, config, "Memory")?;
        self.render_graph(out, config, memory.used_percent, width, Some(HistoryChannel::Memory))?;
        render_value(out, config, memory.used_percent)?;
        queue!(
            out,
            Print("  "),
            Print(format_usage_pair(memory.used_bytes, memory.total_bytes))
        )?;
        end_line(out)
    }

    fn render_gpu<W: Write>(
        &mut self,
        out: &mut W,
        config: &Config,
        gpu: &GpuSnapshot,
        width: usize,
    ) -> io::Result<()> {
        let utilization = gpu.utilization_percent as f64;
        render_label(out, config, "GPU")?;
        self.render_graph(out, config, utilization, width, Some(HistoryChannel::GpuUtil))?;
        render_value(out, config, utilization)?;
        if config.show_temperature {
            if let Some(celsius) = gpu.temperature_celsius {
                render_temperature(out, config, celsius)?;
            }
        }
        if let Some(watts) = gpu.power_watts {
            queue!(out, Print(format!("  {}W", watts)))?;
        }
        end_line(out)?;

        render_label(out, config, "VRAM")?;
        self.render_graph(out, config, gpu.memory_percent, width, Some(HistoryChannel::GpuMem))?;
        render_value(out, config, gpu.memory_percent)?;
        queue!(
            out,
            Print("  "),
            Print(format_usage_pair(gpu.memory_used, gpu.memory_total))
        )?;
        end_line(out)
    }

    fn render_disk<W: Write>(
        &mut self,
        out: &mut W,
        config: &Config,
        disk: &DiskSnapshot,
        width: usize,
    ) -> io::Result<()> {
        render_label(out, config, &disk.mount_point)?;
        // Disks have no history channel and are always drawn as bars
        self.render_graph(out, config, disk.used_percent, width, None)?;
        render_value(out, config, disk.used_percent)?;
        queue!(
            out,
            Print("  "),
            Print(format_usage_pair(disk.used_bytes, disk.total_bytes))
        )?;
        end_line(out)
    }

    fn render_graph<W: Write>(
        &mut self,
        out: &mut W,
        config: &Config,
        percent: f64,
        width: usize,
        channel: Option<HistoryChannel>,
    ) -> io::Result<()> {
        match (config.graph_style, channel) {
            (GraphStyle::Line, Some(channel)) => {
                self.history.append(channel, percent);
                let spark =
                    Sparkline::from_history(self.history.channel(channel), width, &config.thresholds);
                render_sparkline(out, config, &spark)
            }
            _ => render_bar(out, config, percent, width),
        }
    }
}

fn render_bar<W: Write>(out: &mut W, config: &Config, percent: f64, width: usize) -> io::Result<()> {
    let color = config.tier_color(config.thresholds.tier(percent));
    queue!(out, Print("["))?;
    set_color(out, color)?;
    queue!(
        out,
        Print(bar_body(percent, width, config.bar_fill, config.bar_empty))
    )?;
    reset_style(out)?;
    queue!(out, Print("]"))
}

fn render_sparkline<W: Write>(out: &mut W, config: &Config, spark: &Sparkline) -> io::Result<()> {
    queue!(out, Print("["), Print(" ".repeat(spark.padding)))?;
    for (glyph, tier) in &spark.points {
        set_color(out, config.tier_color(*tier))?;
        queue!(out, Print(glyph))?;
        reset_style(out)?;
    }
    queue!(out, Print("]"))
}

fn render_label<W: Write>(out: &mut W, config: &Config, label: &str) -> io::Result<()> {
    set_color(out, config.colors.label)?;
    queue!(out, SetAttribute(Attribute::Bold), Print(fit_label(label)))?;
    reset_style(out)?;
    queue!(out, Print(" "))
}

fn render_value<W: Write>(out: &mut W, config: &Config, percent: f64) -> io::Result<()> {
    queue!(out, Print("  "))?;
    set_color(out, config.colors.value)?;
    queue!(out, Print(format_percent(percent)))?;
    reset_style(out)
}

fn render_temperature<W: Write>(out: &mut W, config: &Config, celsius: i32) -> io::Result<()> {
    let color = config.tier_color(temperature_tier(celsius));
    queue!(out, Print("  "))?;
    set_color(out, color)?;
    queue!(out, Print(format_temperature(celsius)))?;
    reset_style(out)
}

fn set_color<W: Write>(out: &mut W, name: ColorName) -> io::Result<()> {
    if let Some(color) = term_color(name) {
        queue!(out, SetForegroundColor(color))?;
    }
    Ok(())
}

fn reset_style<W: Write>(out: &mut W) -> io::Result<()> {
    queue!(out, SetAttribute(Attribute::Reset), ResetColor)
}

fn end_line<W: Write>(out: &mut W) -> io::Result<()> {
    queue!(out, Clear(ClearType::UntilNewLine), Print("\n"))
}
