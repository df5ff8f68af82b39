use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::sync::atomic::{AtomicU64, Ordering};

fn odoofit_cmd(home: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_odoofit"));
    cmd.current_dir(home);
    cmd.env("HOME", home);
    cmd.env_remove("SUDO_UID");
    cmd.env_remove("SUDO_GID");
    cmd.env_remove("SUDO_USER");
    cmd.env_remove("ODOOFIT_CONFIG");
    cmd.env_remove("ODOOFIT_UI_COLOR");
    cmd.env_remove("ODOOFIT_REPORT_OUTPUT_PATH");
    cmd.env_remove("ODOOFIT_WEB_URL");
    cmd
}

fn run(home: &Path, args: &[&str]) -> Output {
    odoofit_cmd(home).args(args).output().expect("run odoofit")
}

fn make_temp_home() -> PathBuf {
    static HOME_SEQ: AtomicU64 = AtomicU64::new(0);
    let seq = HOME_SEQ.fetch_add(1, Ordering::Relaxed);
    let home = std::env::temp_dir().join(format!("odoofit-exit-test-{}-{seq}", std::process::id()));
    let _ = std::fs::remove_dir_all(&home);
    std::fs::create_dir_all(&home).expect("create home");
    home
}

#[test]
fn completion_unknown_shell_exits_2() {
    let home = make_temp_home();
    let out = run(&home, &["completion", "nope"]);
    assert_eq!(out.status.code(), Some(2));
    let _ = std::fs::remove_dir_all(&home);
}

#[test]
fn completion_bash_succeeds() {
    let home = make_temp_home();
    let out = run(&home, &["completion", "bash"]);
    assert!(out.status.success());
    assert!(!out.stdout.is_empty());
    let _ = std::fs::remove_dir_all(&home);
}

#[test]
fn analyze_dry_run_exits_0() {
    let home = make_temp_home();
    let out = run(&home, &["--dry-run", "analyze"]);
    assert!(out.status.success());
    let _ = std::fs::remove_dir_all(&home);
}

#[test]
fn bare_invocation_defaults_to_analyze() {
    let home = make_temp_home();
    let out = run(&home, &["--dry-run"]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("解析結果:"), "stdout={stdout}");
    let _ = std::fs::remove_dir_all(&home);
}

#[test]
fn quiet_dry_run_prints_nothing() {
    let home = make_temp_home();
    let out = run(&home, &["--quiet", "--dry-run", "analyze"]);
    assert!(out.status.success());
    assert!(out.stdout.is_empty());
    let _ = std::fs::remove_dir_all(&home);
}

#[test]
fn analyze_unwritable_output_exits_20() {
    let home = make_temp_home();
    let missing_dir = home.join("no-such-dir").join("r.json");
    let out = run(
        &home,
        &["analyze", "--output", missing_dir.to_str().expect("utf-8 path")],
    );
    assert_eq!(out.status.code(), Some(20));
    let _ = std::fs::remove_dir_all(&home);
}

#[test]
fn config_without_show_exits_0() {
    let home = make_temp_home();
    let out = run(&home, &["config"]);
    assert!(out.status.success());
    let _ = std::fs::remove_dir_all(&home);
}
