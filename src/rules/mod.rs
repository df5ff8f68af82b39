use crate::core::{
    CapacityTier, InstallMethod, MORE_THAN_50_MIN, Metric, Recommendation, UP_TO_10_MIN,
    UP_TO_50_MIN,
};

const NATIVE_DISTROS: [&str; 4] = ["Ubuntu", "Debian", "CentOS", "Red Hat"];

pub fn classify(cores: Metric, ram_gb: Metric, storage_gb: Metric) -> CapacityTier {
    for (min, tier) in [
        (MORE_THAN_50_MIN, CapacityTier::MoreThan50),
        (UP_TO_50_MIN, CapacityTier::UpTo50),
        (UP_TO_10_MIN, CapacityTier::UpTo10),
    ] {
        if cores.meets(min.cpu_nucleos)
            && ram_gb.meets(min.ram_gb)
            && storage_gb.meets(min.almacenamiento_gb)
        {
            return tier;
        }
    }
    CapacityTier::Insufficient
}

pub fn base_method(os_name: &str) -> InstallMethod {
    if NATIVE_DISTROS.iter().any(|d| os_name.contains(d)) {
        InstallMethod::Native
    } else if os_name.contains("Windows") {
        InstallMethod::Wsl
    } else if os_name.contains("macOS") {
        InstallMethod::Container
    } else {
        InstallMethod::Web
    }
}

pub fn os_supported(os_name: &str) -> bool {
    base_method(os_name) != InstallMethod::Web
}

pub fn recommend(os_name: &str, tier: CapacityTier) -> Recommendation {
    if tier == CapacityTier::Insufficient {
        return Recommendation {
            method: InstallMethod::Web,
            setup_commands: "ローカルインストールは行わず、ホスティング版を利用してください: https://www.odoo.com/trial".to_string(),
            notes: "検出されたハードウェアは最小要件（2コア / RAM 2GB / 空き10GB）を満たしていません。ローカル導入は推奨しません。".to_string(),
            requires_web_fallback: true,
        };
    }

    let method = base_method(os_name);
    Recommendation {
        method,
        setup_commands: setup_commands(method),
        notes: tier_notes(tier),
        requires_web_fallback: method == InstallMethod::Web,
    }
}

fn setup_commands(method: InstallMethod) -> String {
    match method {
        InstallMethod::Native => "sudo apt update\n\
             sudo apt install -y postgresql\n\
             sudo apt install -y odoo"
            .to_string(),
        InstallMethod::Wsl => "wsl --install -d Ubuntu-22.04\n\
             # WSL 内で実行:\n\
             sudo apt update\n\
             sudo apt install -y postgresql odoo"
            .to_string(),
        InstallMethod::Container => "docker run -d --name odoo-db -e POSTGRES_USER=odoo -e POSTGRES_PASSWORD=odoo -e POSTGRES_DB=postgres postgres:15\n\
             docker run -d -p 8069:8069 --name odoo --link odoo-db:db odoo:17"
            .to_string(),
        InstallMethod::Web => {
            "ローカルインストールは不要です。https://www.odoo.com/trial から利用を開始してください。".to_string()
        }
    }
}

fn tier_notes(tier: CapacityTier) -> String {
    match tier {
        CapacityTier::UpTo10 => {
            "〜10ユーザー規模を想定した構成です。HDDでも動作しますが、応答性のためSSDを推奨します。".to_string()
        }
        CapacityTier::UpTo50 => {
            "〜50ユーザー規模を想定した構成です。PostgreSQLを同居させる場合はSSDを強く推奨します。".to_string()
        }
        CapacityTier::MoreThan50 => {
            "50ユーザー超の規模に対応できる構成です。NVMe SSDの利用とワーカー数の調整を推奨します。".to_string()
        }
        CapacityTier::Insufficient => {
            "最小要件を満たしていません。".to_string()
        }
    }
}
