use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CapacityTier {
    #[serde(rename = "insufficient")]
    Insufficient,
    #[serde(rename = "up_to_10")]
    UpTo10,
    #[serde(rename = "up_to_50")]
    UpTo50,
    #[serde(rename = "more_than_50")]
    MoreThan50,
}

impl CapacityTier {
    pub const fn as_str(self) -> &'static str {
        match self {
            CapacityTier::Insufficient => "insufficient",
            CapacityTier::UpTo10 => "up_to_10",
            CapacityTier::UpTo50 => "up_to_50",
            CapacityTier::MoreThan50 => "more_than_50",
        }
    }
}

impl fmt::Display for CapacityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierThresholds {
    pub cpu_nucleos: u64,
    pub ram_gb: u64,
    pub almacenamiento_gb: u64,
}

pub const UP_TO_10_MIN: TierThresholds = TierThresholds {
    cpu_nucleos: 2,
    ram_gb: 2,
    almacenamiento_gb: 10,
};

pub const UP_TO_50_MIN: TierThresholds = TierThresholds {
    cpu_nucleos: 4,
    ram_gb: 4,
    almacenamiento_gb: 20,
};

pub const MORE_THAN_50_MIN: TierThresholds = TierThresholds {
    cpu_nucleos: 8,
    ram_gb: 32,
    almacenamiento_gb: 50,
};
