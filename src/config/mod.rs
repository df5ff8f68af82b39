use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct EffectiveConfig {
    pub ui: UiConfig,
    pub report: ReportConfig,
    pub web: WebConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_path: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct UiConfig {
    pub color: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportConfig {
    pub output_path: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct WebConfig {
    pub url: String,
}

impl Default for EffectiveConfig {
    fn default() -> Self {
        Self {
            ui: UiConfig { color: true },
            report: ReportConfig {
                output_path: "odoo_system_analysis.json".to_string(),
            },
            web: WebConfig {
                url: "https://www.odoo.com/trial".to_string(),
            },
            config_path: None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawConfig {
    ui: Option<RawUiConfig>,
    report: Option<RawReportConfig>,
    web: Option<RawWebConfig>,
}

#[derive(Debug, Deserialize)]
struct RawUiConfig {
    color: Option<bool>,
}

#[derive(Debug, Deserialize)]
struct RawReportConfig {
    output_path: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawWebConfig {
    url: Option<String>,
}

pub fn default_config_path(home_dir: &Path) -> PathBuf {
    home_dir.join(".config/odoofit/config.toml")
}

pub fn load(config_path: Option<&Path>, home_dir: &Path) -> Result<EffectiveConfig> {
    let mut cfg = EffectiveConfig::default();

    let path = config_path
        .map(ToOwned::to_owned)
        .unwrap_or_else(|| default_config_path(home_dir));

    if path.exists() {
        let s = std::fs::read_to_string(&path)
            .with_context(|| format!("設定ファイルの読み取りに失敗しました: {}", path.display()))?;
        let raw: RawConfig =
            toml::from_str(&s).context("設定ファイル(TOML)の解析に失敗しました")?;
        apply_raw_config(&mut cfg, raw);
        cfg.config_path = Some(path.display().to_string());
    }

    apply_env_overrides(&mut cfg)?;

    Ok(cfg)
}

fn apply_raw_config(cfg: &mut EffectiveConfig, raw: RawConfig) {
    if let Some(ui) = raw.ui {
        if let Some(color) = ui.color {
            cfg.ui.color = color;
        }
    }

    if let Some(report) = raw.report {
        if let Some(output_path) = report.output_path {
            cfg.report.output_path = output_path;
        }
    }

    if let Some(web) = raw.web {
        if let Some(url) = web.url {
            cfg.web.url = url;
        }
    }
}

fn apply_env_overrides(cfg: &mut EffectiveConfig) -> Result<()> {
    if let Ok(v) = std::env::var("ODOOFIT_UI_COLOR") {
        cfg.ui.color = parse_bool(&v).with_context(|| "ODOOFIT_UI_COLOR")?;
    }
    if let Ok(v) = std::env::var("ODOOFIT_REPORT_OUTPUT_PATH") {
        let v = v.trim();
        if !v.is_empty() {
            cfg.report.output_path = v.to_string();
        }
    }
    if let Ok(v) = std::env::var("ODOOFIT_WEB_URL") {
        let v = v.trim();
        if !v.is_empty() {
            cfg.web.url = v.to_string();
        }
    }

    Ok(())
}

fn parse_bool(s: &str) -> Result<bool> {
    let s = s.trim().to_ascii_lowercase();
    match s.as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(anyhow::anyhow!(
            "真偽値が不正です: {s}（true|false|1|0|yes|no|on|off を指定してください）"
        )),
    }
}
