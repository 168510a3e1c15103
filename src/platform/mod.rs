// HFC Alerts platform abstraction
// Opening URLs in the system browser, locating the icon asset, and signal setup.
//
// Uses `cfg(target_os)` for conditional compilation to pick the per-OS
// implementation at compile time.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::thread;

use tracing::debug;

use crate::types::config::ICON_RELATIVE_PATH;
use crate::types::errors::ShellError;

#[cfg(target_os = "linux")]
mod linux;

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "windows")]
mod windows;

/// Hands `url` to the host's default browser without waiting for it.
///
/// - **Linux**: `xdg-open`
/// - **macOS**: `open`
/// - **Windows**: `rundll32 url.dll,FileProtocolHandler`
pub fn open_url(url: &str) -> Result<(), ShellError> {
    #[cfg(target_os = "linux")]
    {
        linux::open_url(url)
    }
    #[cfg(target_os = "macos")]
    {
        macos::open_url(url)
    }
    #[cfg(target_os = "windows")]
    {
        windows::open_url(url)
    }
}

/// Spawns `cmd` with null stdio and returns without waiting for it.
///
/// The child is reaped on a background thread so repeated launches over a
/// long session leave no zombie processes behind.
pub(crate) fn spawn_detached(mut cmd: Command, label: &'static str) -> Result<(), ShellError> {
    let mut child = cmd
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| ShellError::Open(format!("{}: {}", label, e)))?;

    thread::Builder::new()
        .name("url-launcher-reaper".into())
        .spawn(move || match child.wait() {
            Ok(status) if !status.success() => debug!(%status, launcher = label, "launcher exited"),
            Ok(_) => {}
            Err(e) => debug!(error = %e, launcher = label, "launcher wait failed"),
        })
        .map(|_| ())
        .map_err(|e| ShellError::Open(format!("{}: {}", label, e)))
}

/// Puts SIGINT back to the OS default so Ctrl+C kills the process outright,
/// whatever the window state. No-op where there is no SIGINT disposition.
pub fn restore_default_interrupt() {
    #[cfg(unix)]
    {
        // SAFETY: installing SIG_DFL registers no Rust handler.
        unsafe {
            libc::signal(libc::SIGINT, libc::SIG_DFL);
        }
    }
}

/// Returns the icon asset path next to the running executable.
///
/// Prefers the first candidate that exists; otherwise returns the primary
/// candidate so the caller can report where it looked.
pub fn icon_asset_path() -> Option<PathBuf> {
    let exe = std::env::current_exe().ok()?;
    let exe_dir = exe.parent()?;
    let candidates = icon_candidates(exe_dir);
    candidates
        .iter()
        .find(|p| p.is_file())
        .or_else(|| candidates.first())
        .cloned()
}

/// Candidate icon locations for an executable living in `exe_dir`.
pub fn icon_candidates(exe_dir: &Path) -> Vec<PathBuf> {
    #[allow(unused_mut)]
    let mut candidates = vec![exe_dir.join(ICON_RELATIVE_PATH)];
    #[cfg(target_os = "macos")]
    candidates.push(macos::bundle_resources_dir(exe_dir).join(ICON_RELATIVE_PATH));
    candidates
}
