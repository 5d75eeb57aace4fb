//! Peak resident memory of the current process.

/// High-water mark of resident memory in bytes; 0 where unavailable.
#[cfg(target_os = "linux")]
pub fn peak_rss_bytes() -> u64 {
    std::fs::read_to_string("/proc/self/status")
        .ok()
        .and_then(|status| parse_vm_hwm(&status))
        .unwrap_or(0)
}

#[cfg(not(target_os = "linux"))]
pub fn peak_rss_bytes() -> u64 {
    0
}

/// Reads the `VmHWM:` line of `/proc/<pid>/status`, reported in kB.
pub fn parse_vm_hwm(status: &str) -> Option<u64> {
    let line = status.lines().find(|l| l.starts_with("VmHWM:"))?;
    let kb: u64 = line.split_whitespace().nth(1)?.parse().ok()?;
    Some(kb * 1024)
}
