use std::io;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Result;
use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::core::Report;
use crate::engine::{Engine, EngineOptions};
use crate::ui::UiConfig;

#[derive(Debug, Parser)]
#[command(
    name = "odoofit",
    version,
    about = "ホストのOS/CPU/RAM/ディスクを検査し、Odooの導入方法（native/wsl/container/web）をJSONレポートとして提案する"
)]
pub struct Cli {
    #[arg(long, global = true)]
    pub json: bool,
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,
    #[arg(long, global = true)]
    pub verbose: bool,
    #[arg(long, global = true)]
    pub quiet: bool,
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    #[arg(long, default_value_t = 30, global = true)]
    pub timeout: u64,
    #[arg(long, global = true)]
    pub dry_run: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    Analyze(AnalyzeArgs),
    Completion(CompletionArgs),
    Config(ConfigArgs),
}

#[derive(Debug, Default, Args)]
pub struct AnalyzeArgs {
    #[arg(long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct CompletionArgs {
    pub shell: String,
}

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[arg(long)]
    pub show: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let stdout_is_tty = io::stdout().is_terminal();
    let stderr_is_tty = io::stderr().is_terminal();

    let home_dir = crate::platform::effective_home_dir()?;

    let env_config_path = std::env::var_os("ODOOFIT_CONFIG").map(PathBuf::from);
    let cfg = crate::config::load(
        cli.config.as_deref().or(env_config_path.as_deref()),
        &home_dir,
    )
    .map_err(crate::exit::invalid_args_err)?;

    let color = stdout_is_tty && cfg.ui.color && !cli.no_color;

    let ui_cfg = UiConfig {
        color,
        stderr_is_tty,
        quiet: cli.quiet,
        verbose: cli.verbose,
    };

    let engine = Engine::new(EngineOptions {
        timeout: Duration::from_secs(cli.timeout),
        web_url: cfg.web.url.clone(),
        show_progress: ui_cfg.stderr_is_tty && !cli.quiet && !cli.json,
    });

    match cli.command.unwrap_or(Commands::Analyze(AnalyzeArgs::default())) {
        Commands::Analyze(args) => {
            let report = engine.analyze();

            let output_path = args
                .output
                .unwrap_or_else(|| PathBuf::from(&cfg.report.output_path));

            if cli.dry_run {
                if !ui_cfg.quiet && !cli.json {
                    println!(
                        "dry-run: レポートは書き出しません（出力先: {}）",
                        output_path.display()
                    );
                }
            } else {
                write_report_file(&output_path, &report)?;
            }

            if cli.json {
                write_json(&report)?;
            } else {
                crate::ui::print_summary(&report, &ui_cfg);
                if !ui_cfg.quiet {
                    if !cli.dry_run {
                        println!("レポートを書き出しました: {}", output_path.display());
                    }
                    println!();
                    write_json(&report)?;
                }
            }
        }
        Commands::Completion(args) => {
            let shell = parse_shell(&args.shell)?;
            let mut cmd = Cli::command();
            let mut out = std::io::stdout().lock();
            clap_complete::generate(shell, &mut cmd, "odoofit", &mut out);
        }
        Commands::Config(args) => {
            if args.show {
                if cli.json {
                    let stdout = std::io::stdout();
                    serde_json::to_writer_pretty(stdout.lock(), &cfg)?;
                } else {
                    println!("{}", toml::to_string_pretty(&cfg)?);
                }
            } else if !ui_cfg.quiet {
                eprintln!("config: `odoofit config --show` を使用してください");
            }
        }
    }

    Ok(())
}

fn write_report_file(path: &Path, report: &Report) -> Result<()> {
    let mut buf = serde_json::to_vec_pretty(report)?;
    buf.push(b'\n');
    std::fs::write(path, &buf).map_err(|err| {
        crate::exit::report_write(format!(
            "レポートの書き込みに失敗しました: {}: {err}",
            path.display()
        ))
    })?;
    Ok(())
}

fn write_json(report: &Report) -> Result<()> {
    use std::io::Write;

    let buf = serde_json::to_vec_pretty(report)?;

    let mut stdout = std::io::stdout().lock();
    match stdout.write_all(&buf) {
        Ok(()) => {}
        Err(err) if err.kind() == std::io::ErrorKind::BrokenPipe => return Ok(()),
        Err(err) => return Err(err.into()),
    }
    match stdout.write_all(b"\n") {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == std::io::ErrorKind::BrokenPipe => Ok(()),
        Err(err) => Err(err.into()),
    }
}

fn parse_shell(s: &str) -> Result<clap_complete::Shell> {
    let s = s.trim().to_ascii_lowercase();
    match s.as_str() {
        "bash" => Ok(clap_complete::Shell::Bash),
        "zsh" => Ok(clap_complete::Shell::Zsh),
        "fish" => Ok(clap_complete::Shell::Fish),
        other => Err(crate::exit::invalid_args(format!(
            "未対応のシェルです: {other}（bash|zsh|fish を指定してください）"
        ))),
    }
}
