use termdash::core::system_monitor::{HistoryChannel, MetricsHistory, HISTORY_CAPACITY};

#[test]
fn test_history_fifo_order() {
    let mut history = MetricsHistory::new();
    let values: Vec<f64> = (0..50).map(|i| i as f64).collect();
    for v in &values {
        history.append(HistoryChannel::Cpu, *v);
    }

    assert_eq!(history.count(HistoryChannel::Cpu), 50);
    for k in 0..50 {
        assert_eq!(history.get(HistoryChannel::Cpu, k), values[49 - k]);
    }
    assert_eq!(history.get(HistoryChannel::Cpu, 50), 0.0);
}

#[test]
fn test_history_wraparound_evicts_oldest() {
    let mut history = MetricsHistory::new();
    for i in 1..=130 {
        history.append(HistoryChannel::GpuMem, i as f64);
    }

    assert_eq!(history.count(HistoryChannel::GpuMem), HISTORY_CAPACITY);
    assert_eq!(history.get(HistoryChannel::GpuMem, 0), 130.0);
    assert_eq!(history.get(HistoryChannel::GpuMem, 127), 3.0);
}

#[test]
fn test_history_clear_then_reuse() {
    let mut history = MetricsHistory::new();
    history.append(HistoryChannel::Memory, 42.0);
    history.clear(HistoryChannel::Memory);

    assert_eq!(history.count(HistoryChannel::Memory), 0);
    assert_eq!(history.get(HistoryChannel::Memory, 0), 0.0);

    history.append(HistoryChannel::Memory, 7.0);
    assert_eq!(history.get(HistoryChannel::Memory, 0), 7.0);
}
