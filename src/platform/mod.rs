use std::io::Read;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use wait_timeout::ChildExt;

use crate::core::{Metric, SystemFacts};

#[derive(Debug, Clone)]
pub struct CommandOutput {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

pub fn run_command(cmd: &str, args: &[&str], timeout: Duration) -> Result<CommandOutput> {
    let mut child = Command::new(cmd)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .with_context(|| format!("プロセス起動に失敗しました: {cmd}"))?;

    let status = match child
        .wait_timeout(timeout)
        .with_context(|| format!("プロセス待機に失敗しました: {cmd}"))?
    {
        Some(status) => status,
        None => {
            let _ = child.kill();
            let _ = child.wait();
            return Err(anyhow!("タイムアウトしました（{timeout:?}）: {cmd}"));
        }
    };

    let mut stdout = String::new();
    if let Some(mut out) = child.stdout.take() {
        let _ = out.read_to_string(&mut stdout);
    }
    let mut stderr = String::new();
    if let Some(mut err) = child.stderr.take() {
        let _ = err.read_to_string(&mut stderr);
    }

    Ok(CommandOutput {
        exit_code: status.code().unwrap_or(-1),
        stdout,
        stderr,
    })
}

pub fn probe_value(cmd: &str, args: &[&str], timeout: Duration) -> Option<String> {
    match run_command(cmd, args, timeout) {
        Ok(output) if output.exit_code == 0 => {
            let s = output.stdout.trim().to_string();
            if s.is_empty() { None } else { Some(s) }
        }
        _ => None,
    }
}

pub fn effective_home_dir() -> Result<PathBuf> {
    if let Ok(uid) = std::env::var("SUDO_UID") {
        if let Some(home) = uid.parse::<u32>().ok().and_then(home_dir_for_uid) {
            return Ok(home);
        }
    }
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
        .ok_or_else(|| anyhow!("環境変数 HOME が設定されていません"))
}

#[cfg(unix)]
fn home_dir_for_uid(uid: u32) -> Option<PathBuf> {
    use std::ffi::CStr;

    unsafe {
        let bufsize = libc::sysconf(libc::_SC_GETPW_R_SIZE_MAX);
        let bufsize = if bufsize <= 0 {
            16 * 1024
        } else {
            bufsize as usize
        };
        let mut buf = vec![0u8; bufsize];
        let mut pwd: libc::passwd = std::mem::zeroed();
        let mut result: *mut libc::passwd = std::ptr::null_mut();

        let rc = libc::getpwuid_r(
            uid as libc::uid_t,
            &mut pwd,
            buf.as_mut_ptr() as *mut libc::c_char,
            buf.len(),
            &mut result,
        );
        if rc != 0 || result.is_null() {
            return None;
        }
        if pwd.pw_dir.is_null() {
            return None;
        }

        let dir = CStr::from_ptr(pwd.pw_dir).to_string_lossy().to_string();
        if dir.trim().is_empty() {
            return None;
        }
        Some(PathBuf::from(dir))
    }
}

#[cfg(not(unix))]
fn home_dir_for_uid(_uid: u32) -> Option<PathBuf> {
    None
}

pub fn detect(timeout: Duration) -> SystemFacts {
    #[cfg(target_os = "linux")]
    {
        return linux::detect(timeout);
    }

    #[cfg(target_os = "macos")]
    {
        return macos::detect(timeout);
    }

    #[cfg(target_os = "windows")]
    {
        return windows::detect(timeout);
    }

    #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
    {
        let _ = timeout;
        SystemFacts {
            os_name: "unknown".to_string(),
            cpu_cores: cpu_cores(),
            cpu_model: "unknown".to_string(),
            ram_gb: Metric::UNKNOWN,
            storage_free_gb: Metric::UNKNOWN,
            storage_type: crate::core::StorageType::Unknown,
        }
    }
}

pub(crate) fn cpu_cores() -> Metric {
    match std::thread::available_parallelism() {
        Ok(n) => Metric::known(n.get() as u64),
        Err(_) => Metric::UNKNOWN,
    }
}

#[cfg(unix)]
pub(crate) fn free_space_gb(path: &str) -> Metric {
    use std::ffi::CString;

    let Ok(c_path) = CString::new(path) else {
        return Metric::UNKNOWN;
    };

    unsafe {
        let mut st: libc::statvfs = std::mem::zeroed();
        if libc::statvfs(c_path.as_ptr(), &mut st) != 0 {
            return Metric::UNKNOWN;
        }
        let free = (st.f_bavail as u64).saturating_mul(st.f_frsize as u64);
        Metric::known(free / (1024 * 1024 * 1024))
    }
}

#[cfg(target_os = "linux")]
pub mod linux;

#[cfg(target_os = "macos")]
pub mod macos;

#[cfg(target_os = "windows")]
pub mod windows;
