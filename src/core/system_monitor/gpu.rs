use log::{debug, info};

use super::metrics::GpuSnapshot;
use crate::error::Result;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GpuVendor {
    Nvidia,
    #[default]
    Unknown,
}

/// Trait for GPU metrics providers
///
/// Implementations live in the platform layer. How a provider finds its
/// vendor library is its own business; the dashboard only sees this contract.
pub trait GpuProvider {
    /// Get the vendor of the GPU
    fn vendor(&self) -> GpuVendor;

    /// Collect current GPU metrics. Fields the provider cannot measure stay `None`.
    fn sample(&mut self) -> Result<GpuSnapshot>;

    /// Release the vendor library. No further `sample` calls follow.
    fn shutdown(&mut self);
}

/// Optional GPU capability, detected once and cached for the process lifetime
pub struct GpuSampler {
    provider: Option<Box<dyn GpuProvider>>,
}

impl GpuSampler {
    /// Resolve the capability once. A failed discovery is permanent.
    pub fn init_capability<F>(discover: F) -> Self
    where
        F: FnOnce() -> Result<Box<dyn GpuProvider>>,
    {
        match discover() {
            Ok(provider) => {
                info!("GPU metrics provider available ({:?})", provider.vendor());
                Self {
                    provider: Some(provider),
                }
            }
            Err(e) => {
                info!("GPU metrics disabled: {}", e);
                Self::unavailable()
            }
        }
    }

    pub fn unavailable() -> Self {
        Self { provider: None }
    }

    pub fn is_available(&self) -> bool {
        self.provider.is_some()
    }

    /// Sample the provider; without a capability this returns an
    /// `available == false` snapshot and never touches any provider.
    pub fn sample(&mut self) -> Result<GpuSnapshot> {
        match self.provider.as_mut() {
            Some(provider) => {
                let mut snapshot = provider.sample()?;
                snapshot.available = true;
                Ok(snapshot)
            }
            None => Ok(GpuSnapshot::unavailable()),
        }
    }

    pub fn shutdown(&mut self) {
        if let Some(mut provider) = self.provider.take() {
            debug!("Shutting down GPU provider");
            provider.shutdown();
        }
    }
}

impl Drop for GpuSampler {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DashError;
    use std::cell::Cell;
    use std::rc::Rc;

    struct CountingProvider {
        samples: Rc<Cell<u32>>,
        shutdowns: Rc<Cell<u32>>,
    }

    impl GpuProvider for CountingProvider {
        fn vendor(&self) -> GpuVendor {
            GpuVendor::Nvidia
        }

        fn sample(&mut self) -> Result<GpuSnapshot> {
            self.samples.set(self.samples.get() + 1);
            Ok(GpuSnapshot {
                name: "Test GPU".to_string(),
                utilization_percent: 42,
                temperature_celsius: None,
                power_watts: None,
                ..Default::default()
            })
        }

        fn shutdown(&mut self) {
            self.shutdowns.set(self.shutdowns.get() + 1);
        }
    }

    #[test]
    fn test_failed_discovery_is_unavailable() {
        let mut gpu =
            GpuSampler::init_capability(|| Err(DashError::gpu_not_available("no driver")));
        assert!(!gpu.is_available());

        let snapshot = gpu.sample().unwrap();
        assert!(!snapshot.available);
    }

    #[test]
    fn test_available_provider_marks_snapshot() {
        let samples = Rc::new(Cell::new(0));
        let shutdowns = Rc::new(Cell::new(0));
        let provider = CountingProvider {
            samples: samples.clone(),
            shutdowns: shutdowns.clone(),
        };
        let mut gpu = GpuSampler::init_capability(move || Ok(Box::new(provider) as Box<dyn GpuProvider>));
        assert!(gpu.is_available());

        let snapshot = gpu.sample().unwrap();
        assert!(snapshot.available);
        assert_eq!(snapshot.utilization_percent, 42);
        assert_eq!(snapshot.temperature_celsius, None);
        assert_eq!(samples.get(), 1);
    }

    #[test]
    fn test_shutdown_once() {
        let samples = Rc::new(Cell::new(0));
        let shutdowns = Rc::new(Cell::new(0));
        let provider = CountingProvider {
            samples: samples.clone(),
            shutdowns: shutdowns.clone(),
        };
        let mut gpu = GpuSampler::init_capability(move || Ok(Box::new(provider) as Box<dyn GpuProvider>));

        gpu.shutdown();
        assert!(!gpu.is_available());
        drop(gpu);
        assert_eq!(shutdowns.get(), 1);
        assert_eq!(samples.get(), 0);
    }
}
