/// Samples retained per history channel
pub const HISTORY_CAPACITY: usize = 128;

/// Independent time series kept for line-graph rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryChannel {
    Cpu,
    Memory,
    GpuUtil,
    GpuMem,
}

impl HistoryChannel {
    pub const ALL: [HistoryChannel; 4] = [
        HistoryChannel::Cpu,
        HistoryChannel::Memory,
        HistoryChannel::GpuUtil,
        HistoryChannel::GpuMem,
    ];

    fn index(self) -> usize {
        match self {
            HistoryChannel::Cpu => 0,
            HistoryChannel::Memory => 1,
            HistoryChannel::GpuUtil => 2,
            HistoryChannel::GpuMem => 3,
        }
    }
}

/// Fixed-capacity circular buffer of samples.
///
/// Values are stored as given; nothing is clamped to a percentage range.
#[derive(Debug, Clone)]
pub struct RingBuffer {
    data: [f64; HISTORY_CAPACITY],
    cursor: usize,
    count: usize,
}

impl RingBuffer {
    pub fn new() -> Self {
        Self {
            data: [0.0; HISTORY_CAPACITY],
            cursor: 0,
            count: 0,
        }
    }

    /// Write at the cursor, evicting the oldest sample once full
    pub fn push(&mut self, value: f64) {
        self.data[self.cursor] = value;
        self.cursor = (self.cursor + 1) % HISTORY_CAPACITY;
        if self.count < HISTORY_CAPACITY {
            self.count += 1;
        }
    }

    /// Value written `samples_ago` pushes back (0 = most recent).
    ///
    /// Returns 0.0 when there is no such sample. That is padding, not a measurement.
    pub fn get(&self, samples_ago: usize) -> f64 {
        if samples_ago >= self.count {
            return 0.0;
        }
        let idx = (self.cursor + HISTORY_CAPACITY - 1 - samples_ago) % HISTORY_CAPACITY;
        self.data[idx]
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn clear(&mut self) {
        self.count = 0;
        self.cursor = 0;
    }

    /// The newest `n` samples (or fewer), oldest first
    pub fn latest(&self, n: usize) -> impl Iterator<Item = f64> + '_ {
        let n = n.min(self.count);
        (0..n).rev().map(move |ago| self.get(ago))
    }
}

impl Default for RingBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// One ring buffer per [`HistoryChannel`]
#[derive(Debug, Clone, Default)]
pub struct MetricsHistory {
    channels: [RingBuffer; 4],
}

impl MetricsHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, channel: HistoryChannel, value: f64) {
        self.channels[channel.index()].push(value);
    }

    pub fn get(&self, channel: HistoryChannel, samples_ago: usize) -> f64 {
        self.channels[channel.index()].get(samples_ago)
    }

    pub fn count(&self, channel: HistoryChannel) -> usize {
        self.channels[channel.index()].len()
    }

    pub fn clear(&mut self, channel: HistoryChannel) {
        self.channels[channel.index()].clear();
    }

    pub fn channel(&self, channel: HistoryChannel) -> &RingBuffer {
        &self.channels[channel.index()]
    }
}
