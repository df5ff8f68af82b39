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

fn make_temp_home() -> PathBuf {
    static HOME_SEQ: AtomicU64 = AtomicU64::new(0);
    let seq = HOME_SEQ.fetch_add(1, Ordering::Relaxed);
    let home = std::env::temp_dir().join(format!("odoofit-env-test-{}-{seq}", std::process::id()));
    let _ = std::fs::remove_dir_all(&home);
    std::fs::create_dir_all(&home).expect("create home");
    home
}

fn write_file(path: &Path, bytes: &[u8]) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("mkdirs");
    }
    std::fs::write(path, bytes).expect("write");
}

#[test]
fn env_override_beats_config_file() {
    let home = make_temp_home();
    write_file(
        home.join(".config/odoofit/config.toml").as_path(),
        br#"
[report]
output_path = "from_file.json"
"#,
    );

    let out = odoofit_cmd(&home)
        .env("ODOOFIT_REPORT_OUTPUT_PATH", "from_env.json")
        .args(["--quiet", "analyze"])
        .output()
        .expect("run odoofit");
    assert!(out.status.success());
    assert!(home.join("from_env.json").exists());
    assert!(!home.join("from_file.json").exists());

    let _ = std::fs::remove_dir_all(&home);
}

#[test]
fn cli_output_flag_beats_env_override() {
    let home = make_temp_home();

    let out = odoofit_cmd(&home)
        .env("ODOOFIT_REPORT_OUTPUT_PATH", "from_env.json")
        .args(["--quiet", "analyze", "--output", "from_flag.json"])
        .output()
        .expect("run odoofit");
    assert!(out.status.success());
    assert!(home.join("from_flag.json").exists());
    assert!(!home.join("from_env.json").exists());

    let _ = std::fs::remove_dir_all(&home);
}

#[test]
fn env_config_path_selects_config_file() {
    let home = make_temp_home();
    let alt = home.join("alt.toml");
    write_file(
        alt.as_path(),
        br#"
[report]
output_path = "from_env_config.json"
"#,
    );

    let out = odoofit_cmd(&home)
        .env("ODOOFIT_CONFIG", alt.as_os_str())
        .args(["--quiet", "analyze"])
        .output()
        .expect("run odoofit");
    assert!(out.status.success());
    assert!(home.join("from_env_config.json").exists());

    let _ = std::fs::remove_dir_all(&home);
}

#[test]
fn invalid_env_bool_exits_2() {
    let home = make_temp_home();

    let out = odoofit_cmd(&home)
        .env("ODOOFIT_UI_COLOR", "maybe")
        .args(["--quiet", "analyze"])
        .output()
        .expect("run odoofit");
    assert_eq!(out.status.code(), Some(2));

    let _ = std::fs::remove_dir_all(&home);
}
