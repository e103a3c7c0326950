// Native CPU, memory and disk backends, one per supported OS

#[cfg(unix)]
mod unix;

#[cfg(target_os = "linux")]
mod linux;
#[cfg(target_os = "linux")]
pub use linux::{parse_meminfo, parse_proc_stat, LinuxBackend as NativeBackend};

#[cfg(target_os = "macos")]
mod macos;
#[cfg(target_os = "macos")]
pub use macos::MacosBackend as NativeBackend;

#[cfg(windows)]
mod windows;
#[cfg(windows)]
pub use self::windows::WindowsBackend as NativeBackend;

#[cfg(not(any(target_os = "linux", target_os = "macos", windows)))]
compile_error!("termdash supports Linux, macOS and Windows only");
