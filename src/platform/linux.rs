use std::time::Duration;

use crate::core::{Metric, StorageType, SystemFacts};

pub fn detect(timeout: Duration) -> SystemFacts {
    let _ = timeout;
    SystemFacts {
        os_name: os_name(),
        cpu_cores: crate::platform::cpu_cores(),
        cpu_model: cpu_model(),
        ram_gb: ram_gb(),
        storage_free_gb: crate::platform::free_space_gb("/"),
        storage_type: storage_type(),
    }
}

fn os_name() -> String {
    if let Ok(s) = std::fs::read_to_string("/etc/os-release") {
        for line in s.lines() {
            if let Some(rest) = line.strip_prefix("PRETTY_NAME=") {
                let name = rest.trim().trim_matches('"');
                if !name.is_empty() {
                    return name.to_string();
                }
            }
        }
    }
    "Linux".to_string()
}

fn cpu_model() -> String {
    if let Ok(s) = std::fs::read_to_string("/proc/cpuinfo") {
        for line in s.lines() {
            if line.starts_with("model name") {
                if let Some((_, model)) = line.split_once(':') {
                    let model = model.trim();
                    if !model.is_empty() {
                        return model.to_string();
                    }
                }
            }
        }
    }
    "unknown".to_string()
}

fn ram_gb() -> Metric {
    let Ok(s) = std::fs::read_to_string("/proc/meminfo") else {
        return Metric::UNKNOWN;
    };
    for line in s.lines() {
        if let Some(rest) = line.strip_prefix("MemTotal:") {
            // "MemTotal:       16384000 kB"
            let kb = rest.split_whitespace().next().and_then(|v| v.parse::<u64>().ok());
            if let Some(kb) = kb {
                return Metric::known(kb / (1024 * 1024));
            }
        }
    }
    Metric::UNKNOWN
}

fn storage_type() -> StorageType {
    let Ok(entries) = std::fs::read_dir("/sys/block") else {
        return StorageType::Unknown;
    };

    let mut names: Vec<String> = entries
        .flatten()
        .map(|e| e.file_name().to_string_lossy().to_string())
        .filter(|name| {
            !["loop", "ram", "zram", "dm-", "sr", "md"]
                .iter()
                .any(|p| name.starts_with(p))
        })
        .collect();
    names.sort();

    for name in names {
        let Ok(flag) = std::fs::read_to_string(format!("/sys/block/{name}/queue/rotational"))
        else {
            continue;
        };
        match flag.trim() {
            "0" => return StorageType::Ssd,
            "1" => return StorageType::Hdd,
            _ => {}
        }
    }
    StorageType::Unknown
}
