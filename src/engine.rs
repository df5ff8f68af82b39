use std::time::Duration;

use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::core::{
    CpuReport, HardwareReport, InstallMethod, InstallRecommendation, MORE_THAN_50_MIN,
    MinimumRequirements, OsReport, Report, RequirementChecks, StorageReport, SystemFacts,
    UP_TO_10_MIN, UP_TO_50_MIN, WebCredentials, WebSetup,
};
use crate::platform;
use crate::rules;

#[derive(Debug, Clone)]
pub struct EngineOptions {
    pub timeout: Duration,
    pub web_url: String,
    pub show_progress: bool,
}

#[derive(Debug, Clone)]
pub struct Engine {
    opts: EngineOptions,
}

impl Engine {
    pub fn new(opts: EngineOptions) -> Self {
        Self { opts }
    }

    pub fn analyze(&self) -> Report {
        use std::io::IsTerminal;
        let progress_enabled = self.opts.show_progress && std::io::stderr().is_terminal();
        let pb = if progress_enabled {
            let pb = indicatif::ProgressBar::new_spinner();
            pb.set_draw_target(indicatif::ProgressDrawTarget::stderr());
            pb.set_message("ホスト環境を検査中...");
            pb.enable_steady_tick(Duration::from_millis(120));
            Some(pb)
        } else {
            None
        };

        let facts = platform::detect(self.opts.timeout);

        if let Some(pb) = pb {
            pb.finish_and_clear();
        }

        let fecha_analisis = OffsetDateTime::now_utc()
            .format(&Rfc3339)
            .unwrap_or_else(|_| "unknown".to_string());

        build_report(&facts, fecha_analisis, &self.opts.web_url)
    }
}

pub fn build_report(facts: &SystemFacts, fecha_analisis: String, web_url: &str) -> Report {
    let tier = rules::classify(facts.cpu_cores, facts.ram_gb, facts.storage_free_gb);
    let rec = rules::recommend(&facts.os_name, tier);
    let os_supported = rules::os_supported(&facts.os_name);
    let usar_web = rec.method == InstallMethod::Web;

    Report {
        fecha_analisis,
        sistema_operativo: OsReport {
            nombre: facts.os_name.clone(),
            compatible: os_supported,
        },
        hardware: HardwareReport {
            cpu: CpuReport {
                nucleos: facts.cpu_cores,
                modelo: facts.cpu_model.clone(),
            },
            ram_gb: facts.ram_gb,
            almacenamiento: StorageReport {
                espacio_libre_gb: facts.storage_free_gb,
                tipo: facts.storage_type,
            },
        },
        categoria_usuarios: tier,
        requisitos_minimos: MinimumRequirements {
            up_to_10: UP_TO_10_MIN,
            up_to_50: UP_TO_50_MIN,
            more_than_50: MORE_THAN_50_MIN,
        },
        recomendacion_instalacion: InstallRecommendation {
            metodo: rec.method,
            requiere_wsl: rec.method == InstallMethod::Wsl,
            usar_web,
            comandos_instalacion: rec.setup_commands,
            notas: rec.notes,
        },
        configuracion_web: WebSetup {
            necesaria: usar_web,
            url_sugerida: web_url.to_string(),
            credenciales: WebCredentials {
                usuario: "admin".to_string(),
                contrasena: "admin".to_string(),
            },
        },
        cumple_requisitos: RequirementChecks {
            cpu: facts.cpu_cores.meets(UP_TO_10_MIN.cpu_nucleos),
            ram: facts.ram_gb.meets(UP_TO_10_MIN.ram_gb),
            almacenamiento: facts.storage_free_gb.meets(UP_TO_10_MIN.almacenamiento_gb),
            os: os_supported,
        },
    }
}
