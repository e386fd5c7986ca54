//! Process resident-set sampling for the performance harness.

use tracing::warn;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Current resident set size in bytes, if the platform exposes it.
#[cfg(target_os = "linux")]
pub fn resident_set_bytes() -> Option<u64> {
    let status = std::fs::read_to_string("/proc/self/status").ok()?;
    parse_vm_rss(&status)
}

#[cfg(target_os = "macos")]
pub fn resident_set_bytes() -> Option<u64> {
    use std::process::Command;

    let output = Command::new("ps")
        .args(["-o", "rss=", "-p", &std::process::id().to_string()])
        .output()
        .ok()?;
    let kb: u64 = String::from_utf8(output.stdout).ok()?.trim().parse().ok()?;
    Some(kb * 1024)
}

#[cfg(not(any(target_os = "linux", target_os = "macos")))]
pub fn resident_set_bytes() -> Option<u64> {
    None
}

/// Reads the `VmRSS:` line of a `/proc/<pid>/status` file. The kernel
/// reports it in kB whatever the page size.
pub fn parse_vm_rss(status: &str) -> Option<u64> {
    let line = status.lines().find(|line| line.starts_with("VmRSS:"))?;
    let mut fields = line["VmRSS:".len()..].split_whitespace();
    let value: u64 = fields.next()?.parse().ok()?;
    match fields.next() {
        Some("kB") | None => Some(value * 1024),
        Some(_) => None,
    }
}

/// RSS snapshot taken before a run.
#[derive(Debug, Clone, Copy)]
pub struct MemorySample {
    start: Option<u64>,
}

impl MemorySample {
    pub fn start() -> Self {
        let start = resident_set_bytes();
        if start.is_none() {
            warn!("resident set size unavailable, memory deltas will read 0");
        }
        Self { start }
    }

    /// Change since `start` in MB; negative when pages were released.
    pub fn delta_mb(&self) -> f64 {
        match (self.start, resident_set_bytes()) {
            (Some(before), Some(after)) => (after as f64 - before as f64) / BYTES_PER_MB,
            _ => 0.0,
        }
    }
}
