// HFC Alerts platform glue for Linux
// System browser: xdg-open (freedesktop default-application lookup)

use std::process::Command;

use crate::types::errors::ShellError;

/// Launches `xdg-open <url>` detached from our stdio.
pub fn open_url(url: &str) -> Result<(), ShellError> {
    let mut cmd = Command::new("xdg-open");
    cmd.arg(url);
    super::spawn_detached(cmd, "xdg-open")
}
