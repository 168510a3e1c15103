// HFC Alerts platform glue for Windows
// System browser: url.dll FileProtocolHandler (avoids cmd.exe quoting of `&`)

use std::process::Command;

use crate::types::errors::ShellError;

pub fn open_url(url: &str) -> Result<(), ShellError> {
    let mut cmd = Command::new("rundll32");
    cmd.arg("url.dll,FileProtocolHandler").arg(url);
    super::spawn_detached(cmd, "rundll32")
}
