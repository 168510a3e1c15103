// HFC Alerts platform glue for macOS
// System browser: open(1)
// Assets may also live in the app bundle: Foo.app/Contents/Resources

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::types::errors::ShellError;

pub fn open_url(url: &str) -> Result<(), ShellError> {
    let mut cmd = Command::new("open");
    cmd.arg(url);
    super::spawn_detached(cmd, "open")
}

/// `Contents/Resources` for an executable in `Contents/MacOS`.
pub fn bundle_resources_dir(exe_dir: &Path) -> PathBuf {
    exe_dir
        .parent()
        .map(|contents| contents.join("Resources"))
        .unwrap_or_else(|| exe_dir.to_path_buf())
}
