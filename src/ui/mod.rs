use anyhow::Error;
use std::io::{self, Write};
use unicode_width::UnicodeWidthChar;

use crate::core::{Metric, Report, StorageType};

#[derive(Debug, Clone)]
pub struct UiConfig {
    pub color: bool,
    pub stderr_is_tty: bool,
    pub quiet: bool,
    pub verbose: bool,
}

pub fn eprintln_error(err: &Error) {
    let mut stderr = io::stderr().lock();
    let _ = writeln!(stderr, "エラー:");
    let _ = writeln!(stderr, "  {err}");

    let mut causes = err.chain().skip(1).peekable();
    if causes.peek().is_some() {
        let _ = writeln!(stderr, "原因:");
        for cause in causes {
            let _ = writeln!(stderr, "  - {cause}");
        }
    }

    let _ = writeln!(stderr, "次に:");
    let _ = writeln!(
        stderr,
        "  - 詳細を見るには `--verbose` を付けて再実行してください"
    );
    let _ = writeln!(
        stderr,
        "  - 利用可能なコマンド/オプションは `odoofit --help` を参照してください"
    );
}

pub fn print_summary(report: &Report, cfg: &UiConfig) {
    if cfg.quiet {
        return;
    }

    let cpu = format!(
        "{} コア（{}）",
        format_metric(report.hardware.cpu.nucleos),
        report.hardware.cpu.modelo
    );
    let ram = format!("{} GB", format_metric(report.hardware.ram_gb));
    let storage = format!(
        "空き {} GB（{}）",
        format_metric(report.hardware.almacenamiento.espacio_libre_gb),
        storage_type_label(report.hardware.almacenamiento.tipo)
    );

    let rows: [(&str, &str); 6] = [
        ("OS", report.sistema_operativo.nombre.as_str()),
        ("CPU", cpu.as_str()),
        ("RAM", ram.as_str()),
        ("ディスク", storage.as_str()),
        ("利用規模", report.categoria_usuarios.as_str()),
        ("導入方法", report.recomendacion_instalacion.metodo.as_str()),
    ];

    let label_w = rows
        .iter()
        .map(|(label, _)| visible_width_ansi(label))
        .max()
        .unwrap_or(0);

    let mut out = io::stdout().lock();
    let _ = writeln!(out, "解析結果:");
    for (label, value) in rows {
        let _ = writeln!(out, "  {}  {}", pad_end_display(label, label_w), value);
    }

    let checks = &report.cumple_requisitos;
    let _ = writeln!(
        out,
        "要件チェック: CPU {} / RAM {} / ディスク {} / OS {}",
        format_check(checks.cpu, cfg.color),
        format_check(checks.ram, cfg.color),
        format_check(checks.almacenamiento, cfg.color),
        format_check(checks.os, cfg.color)
    );

    if !report.recomendacion_instalacion.notas.is_empty() {
        let _ = writeln!(out, "- {}", report.recomendacion_instalacion.notas);
    }

    if cfg.verbose {
        let _ = writeln!(out);
        let _ = writeln!(out, "導入コマンド:");
        for line in report.recomendacion_instalacion.comandos_instalacion.lines() {
            let _ = writeln!(out, "  {line}");
        }
    }

    if report.recomendacion_instalacion.usar_web {
        let _ = writeln!(out);
        let _ = writeln!(out, "警告: このホストへのローカル導入は推奨されません。");
        let _ = writeln!(
            out,
            "- ホスティング版の利用を推奨します: {}",
            report.configuracion_web.url_sugerida
        );
        let _ = writeln!(
            out,
            "- 初回アクセス時に管理者の認証情報（ユーザー名/パスワード）を作成してください。"
        );
    }
}

pub fn format_metric(metric: Metric) -> String {
    match metric.value() {
        Some(v) => v.to_string(),
        None => "不明".to_string(),
    }
}

fn storage_type_label(tipo: StorageType) -> &'static str {
    match tipo {
        StorageType::Ssd => "SSD",
        StorageType::Hdd => "HDD",
        StorageType::Unknown => "種別不明",
    }
}

fn format_check(ok: bool, color: bool) -> String {
    let s = if ok { "OK" } else { "NG" };
    if !color {
        return s.to_string();
    }
    let code = if ok { "32" } else { "31" };
    format!("\x1b[{code}m{s}\x1b[0m")
}

fn pad_end_display(s: &str, width: usize) -> String {
    let w = visible_width_ansi(s);
    if w >= width {
        return s.to_string();
    }
    format!("{s}{}", " ".repeat(width - w))
}

fn visible_width_ansi(s: &str) -> usize {
    let mut width: usize = 0;
    let mut chars = s.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '\x1b' {
            if chars.peek() == Some(&'[') {
                let _ = chars.next();
                for ch2 in chars.by_ref() {
                    if ch2 == 'm' {
                        break;
                    }
                }
                continue;
            }
        }
        width = width.saturating_add(UnicodeWidthChar::width(ch).unwrap_or(0));
    }
    width
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pad_accounts_for_double_width_labels() {
        assert_eq!(visible_width_ansi("OS"), 2);
        assert_eq!(visible_width_ansi("ディスク"), 8);
        assert_eq!(pad_end_display("OS", 8), "OS      ");
    }

    #[test]
    fn visible_width_skips_ansi_sequences() {
        assert_eq!(visible_width_ansi("\x1b[32mOK\x1b[0m"), 2);
    }

    #[test]
    fn unknown_metric_renders_as_placeholder() {
        assert_eq!(format_metric(Metric::UNKNOWN), "不明");
        assert_eq!(format_metric(Metric::known(32)), "32");
    }
}
