// Platform-specific code module

pub mod gpu;
pub mod system;

// Re-exports for clean imports
pub use gpu::get_gpu_provider;
pub use system::NativeBackend;
