//! Trigger-to-action table.
//!
//! Every toolkit callback is reduced to a [`Trigger`]; [`action_for`] maps it
//! to the [`ShellAction`] the shell performs. Menu ids and control-bar IPC
//! commands are parsed here so the UI layer only forwards strings.

use serde::Deserialize;

pub const TRAY_MENU_SHOW_HIDE: &str = "tray.show_hide";
pub const TRAY_MENU_REFRESH: &str = "tray.refresh";
pub const TRAY_MENU_OPEN_IN_BROWSER: &str = "tray.open_in_browser";
pub const TRAY_MENU_QUIT: &str = "tray.quit";

/// Something the user did to a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trigger {
    /// Native close control of the main window.
    WindowCloseRequested,
    /// Left-click / activate on the tray icon.
    TrayActivated,
    MenuShowHide,
    MenuRefresh,
    MenuOpenInBrowser,
    MenuQuit,
    ButtonOpenInBrowser,
    ButtonRefresh,
}

/// What the shell does in response to a trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShellAction {
    ToggleWindow,
    HideWindow,
    Refresh,
    OpenInBrowser,
    Quit,
}

/// The complete binding table. Window-only mode overrides the close binding
/// in [`action_for`].
pub const BINDINGS: &[(Trigger, ShellAction)] = &[
    (Trigger::WindowCloseRequested, ShellAction::HideWindow),
    (Trigger::TrayActivated, ShellAction::ToggleWindow),
    (Trigger::MenuShowHide, ShellAction::ToggleWindow),
    (Trigger::MenuRefresh, ShellAction::Refresh),
    (Trigger::MenuOpenInBrowser, ShellAction::OpenInBrowser),
    (Trigger::MenuQuit, ShellAction::Quit),
    (Trigger::ButtonOpenInBrowser, ShellAction::OpenInBrowser),
    (Trigger::ButtonRefresh, ShellAction::Refresh),
];

/// Looks up the action bound to `trigger`.
///
/// Without a tray icon a hidden window could never come back, so the close
/// control quits instead of hiding.
pub fn action_for(trigger: Trigger, tray_available: bool) -> Option<ShellAction> {
    if trigger == Trigger::WindowCloseRequested && !tray_available {
        return Some(ShellAction::Quit);
    }
    BINDINGS
        .iter()
        .find(|(t, _)| *t == trigger)
        .map(|(_, action)| *action)
}

pub fn trigger_from_menu_id(menu_id: &str) -> Option<Trigger> {
    match menu_id {
        TRAY_MENU_SHOW_HIDE => Some(Trigger::MenuShowHide),
        TRAY_MENU_REFRESH => Some(Trigger::MenuRefresh),
        TRAY_MENU_OPEN_IN_BROWSER => Some(Trigger::MenuOpenInBrowser),
        TRAY_MENU_QUIT => Some(Trigger::MenuQuit),
        _ => None,
    }
}

/// Messages posted by the injected control bar via `window.ipc.postMessage`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum ControlCommand {
    OpenInBrowser,
    Refresh,
}

impl ControlCommand {
    pub fn trigger(&self) -> Trigger {
        match self {
            ControlCommand::OpenInBrowser => Trigger::ButtonOpenInBrowser,
            ControlCommand::Refresh => Trigger::ButtonRefresh,
        }
    }
}

/// Parses an IPC body from the page into a trigger.
///
/// The IPC channel is reachable from the remote page, so anything other than
/// the two control-bar commands is dropped. In particular there is no way to
/// quit from page content.
pub fn trigger_from_ipc(body: &str) -> Option<Trigger> {
    serde_json::from_str::<ControlCommand>(body)
        .ok()
        .map(|cmd| cmd.trigger())
}
