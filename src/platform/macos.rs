use std::time::Duration;

use crate::core::{Metric, StorageType, SystemFacts};
use crate::platform::probe_value;

pub fn detect(timeout: Duration) -> SystemFacts {
    SystemFacts {
        os_name: os_name(timeout),
        cpu_cores: cpu_cores(timeout),
        cpu_model: cpu_model(timeout),
        ram_gb: ram_gb(timeout),
        storage_free_gb: crate::platform::free_space_gb("/"),
        storage_type: storage_type(timeout),
    }
}

fn os_name(timeout: Duration) -> String {
    match probe_value("sw_vers", &["-productVersion"], timeout) {
        Some(version) => format!("macOS {version}"),
        None => "macOS unknown".to_string(),
    }
}

fn cpu_cores(timeout: Duration) -> Metric {
    probe_value("sysctl", &["-n", "hw.ncpu"], timeout)
        .and_then(|s| s.parse::<u64>().ok())
        .map(Metric::known)
        .unwrap_or_else(crate::platform::cpu_cores)
}

fn cpu_model(timeout: Duration) -> String {
    probe_value("sysctl", &["-n", "machdep.cpu.brand_string"], timeout)
        .unwrap_or_else(|| "unknown".to_string())
}

fn ram_gb(timeout: Duration) -> Metric {
    match probe_value("sysctl", &["-n", "hw.memsize"], timeout)
        .and_then(|s| s.parse::<u64>().ok())
    {
        Some(bytes) => Metric::known(bytes / (1024 * 1024 * 1024)),
        None => Metric::UNKNOWN,
    }
}

fn storage_type(timeout: Duration) -> StorageType {
    let Ok(output) = crate::platform::run_command("diskutil", &["info", "/"], timeout) else {
        return StorageType::Unknown;
    };
    if output.exit_code != 0 {
        return StorageType::Unknown;
    }
    for line in output.stdout.lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        if key.trim() == "Solid State" {
            return match value.trim() {
                "Yes" => StorageType::Ssd,
                "No" => StorageType::Hdd,
                _ => StorageType::Unknown,
            };
        }
    }
    StorageType::Unknown
}
