use serde::{Deserialize, Serialize};

use crate::core::{CapacityTier, InstallMethod, Metric, StorageType, TierThresholds};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub fecha_analisis: String,
    pub sistema_operativo: OsReport,
    pub hardware: HardwareReport,
    pub categoria_usuarios: CapacityTier,
    pub requisitos_minimos: MinimumRequirements,
    pub recomendacion_instalacion: InstallRecommendation,
    pub configuracion_web: WebSetup,
    pub cumple_requisitos: RequirementChecks,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OsReport {
    pub nombre: String,
    pub compatible: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HardwareReport {
    pub cpu: CpuReport,
    pub ram_gb: Metric,
    pub almacenamiento: StorageReport,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CpuReport {
    pub nucleos: Metric,
    pub modelo: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageReport {
    pub espacio_libre_gb: Metric,
    pub tipo: StorageType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinimumRequirements {
    pub up_to_10: TierThresholds,
    pub up_to_50: TierThresholds,
    pub more_than_50: TierThresholds,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallRecommendation {
    pub metodo: InstallMethod,
    pub requiere_wsl: bool,
    pub usar_web: bool,
    pub comandos_instalacion: String,
    pub notas: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebSetup {
    pub necesaria: bool,
    pub url_sugerida: String,
    pub credenciales: WebCredentials,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebCredentials {
    pub usuario: String,
    #[serde(rename = "contraseña")]
    pub contrasena: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementChecks {
    pub cpu: bool,
    pub ram: bool,
    pub almacenamiento: bool,
    pub os: bool,
}
