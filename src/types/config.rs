use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application version shown in the title, tooltip, banner and version label.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// The single page this shell exists to display.
pub const HFC_URL: &str = "https://www.oref.org.il/eng/alerts-history";

/// Icon asset location, relative to the directory holding the executable.
pub const ICON_RELATIVE_PATH: &str = "assets/icon.png";

pub const DISCLAIMER_TEXT: &str = "This is NOT an official Home Front Command utility. \
It is provided merely as an additional way to receive notifications. No warranty is offered. \
Do NOT rely upon this as your sole means of alert - always rely on official channels first.";

/// Immutable shell configuration, built once at startup.
///
/// `ShellConfig::default()` is the production configuration. Nothing is read
/// from disk or the environment; tests derive variants with struct update syntax.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShellConfig {
    pub version: String,
    pub url: String,
    /// Absolute path to the optional icon asset, or `None` when the
    /// executable's directory could not be determined.
    pub icon_path: Option<PathBuf>,
    pub window_width: f64,
    pub window_height: f64,
    pub disclaimer: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            version: APP_VERSION.to_string(),
            url: HFC_URL.to_string(),
            icon_path: crate::platform::icon_asset_path(),
            window_width: 1000.0,
            window_height: 800.0,
            disclaimer: DISCLAIMER_TEXT.to_string(),
        }
    }
}

impl ShellConfig {
    /// Window title, also used as the tray tooltip.
    pub fn title(&self) -> String {
        format!("HFC Alerts (Unofficial) v{}", self.version)
    }

    pub fn tooltip(&self) -> String {
        self.title()
    }

    /// `Version x.y.z`, shown under the disclaimer in the control bar.
    pub fn version_label(&self) -> String {
        format!("Version {}", self.version)
    }

    /// The three startup lines printed to stdout before the GUI loop starts.
    pub fn banner_lines(&self) -> [String; 3] {
        [
            format!("HFC Alerts Wrapper v{}", self.version),
            "Unofficial Home Front Command Alerts Wrapper".to_string(),
            format!("Monitoring URL: {}", self.url),
        ]
    }
}
