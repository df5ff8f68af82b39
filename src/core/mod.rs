mod facts;
mod recommendation;
mod report;
mod tier;

pub use facts::{Metric, StorageType, SystemFacts};
pub use recommendation::{InstallMethod, Recommendation};
pub use report::{
    CpuReport, HardwareReport, InstallRecommendation, MinimumRequirements, OsReport, Report,
    RequirementChecks, StorageReport, WebCredentials, WebSetup,
};
pub use tier::{CapacityTier, MORE_THAN_50_MIN, TierThresholds, UP_TO_10_MIN, UP_TO_50_MIN};
