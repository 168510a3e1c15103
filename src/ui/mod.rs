//! HFC Alerts UI layer.
//!
//! Uses `wry` for the embedded browser surface:
//! - Windows: WebView2
//! - Linux: WebKitGTK
//! - macOS: WKWebView
//!
//! `tao` provides the window and event loop, `tray-icon` the notification
//! area icon. Everything here is a thin adapter around `crate::app::AppShell`.

pub mod control_bar;
pub mod shell_window;
pub mod tray;
