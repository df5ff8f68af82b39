use std::time::Duration;

use crate::core::{Metric, StorageType, SystemFacts};
use crate::platform::probe_value;

pub fn detect(timeout: Duration) -> SystemFacts {
    SystemFacts {
        os_name: os_name(timeout),
        cpu_cores: cpu_cores(),
        cpu_model: cpu_model(),
        ram_gb: ram_gb(timeout),
        storage_free_gb: storage_free_gb(timeout),
        storage_type: storage_type(timeout),
    }
}

fn os_name(timeout: Duration) -> String {
    probe_value("wmic", &["os", "get", "Caption", "/value"], timeout)
        .and_then(|out| wmic_value(&out, "Caption"))
        .unwrap_or_else(|| "Windows".to_string())
}

fn cpu_cores() -> Metric {
    std::env::var("NUMBER_OF_PROCESSORS")
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
        .map(Metric::known)
        .unwrap_or_else(crate::platform::cpu_cores)
}

fn cpu_model() -> String {
    std::env::var("PROCESSOR_IDENTIFIER")
        .map(|v| v.trim().to_string())
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}

fn ram_gb(timeout: Duration) -> Metric {
    match probe_value(
        "wmic",
        &["ComputerSystem", "get", "TotalPhysicalMemory", "/value"],
        timeout,
    )
    .and_then(|out| wmic_value(&out, "TotalPhysicalMemory"))
    .and_then(|v| v.parse::<u64>().ok())
    {
        Some(bytes) => Metric::known(bytes / (1024 * 1024 * 1024)),
        None => Metric::UNKNOWN,
    }
}

fn storage_free_gb(timeout: Duration) -> Metric {
    match probe_value(
        "wmic",
        &[
            "LogicalDisk",
            "where",
            "DeviceID='C:'",
            "get",
            "FreeSpace",
            "/value",
        ],
        timeout,
    )
    .and_then(|out| wmic_value(&out, "FreeSpace"))
    .and_then(|v| v.parse::<u64>().ok())
    {
        Some(bytes) => Metric::known(bytes / (1024 * 1024 * 1024)),
        None => Metric::UNKNOWN,
    }
}

fn storage_type(timeout: Duration) -> StorageType {
    let media = probe_value(
        "powershell",
        &[
            "-NoProfile",
            "-Command",
            "(Get-PhysicalDisk | Select-Object -First 1).MediaType",
        ],
        timeout,
    );
    match media.as_deref().map(str::trim) {
        Some("SSD") => StorageType::Ssd,
        Some("HDD") => StorageType::Hdd,
        _ => StorageType::Unknown,
    }
}

fn wmic_value(stdout: &str, key: &str) -> Option<String> {
    for line in stdout.lines() {
        let line = line.trim();
        if let Some(value) = line.strip_prefix(key).and_then(|r| r.strip_prefix('=')) {
            let value = value.trim();
            if !value.is_empty() {
                return Some(value.to_string());
            }
        }
    }
    None
}
