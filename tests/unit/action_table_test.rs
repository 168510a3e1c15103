//! Table-driven tests for the trigger-to-action bindings and the
//! string-level inputs (menu ids, control bar IPC).

use hfc_alerts::types::action::*;
use rstest::rstest;

#[rstest]
#[case(Trigger::WindowCloseRequested, ShellAction::HideWindow)]
#[case(Trigger::TrayActivated, ShellAction::ToggleWindow)]
#[case(Trigger::MenuShowHide, ShellAction::ToggleWindow)]
#[case(Trigger::MenuRefresh, ShellAction::Refresh)]
#[case(Trigger::MenuOpenInBrowser, ShellAction::OpenInBrowser)]
#[case(Trigger::MenuQuit, ShellAction::Quit)]
#[case(Trigger::ButtonOpenInBrowser, ShellAction::OpenInBrowser)]
#[case(Trigger::ButtonRefresh, ShellAction::Refresh)]
fn test_binding_with_tray(#[case] trigger: Trigger, #[case] expected: ShellAction) {
    assert_eq!(action_for(trigger, true), Some(expected));
}

#[rstest]
#[case(Trigger::WindowCloseRequested, ShellAction::Quit)]
#[case(Trigger::MenuRefresh, ShellAction::Refresh)]
#[case(Trigger::ButtonOpenInBrowser, ShellAction::OpenInBrowser)]
fn test_binding_window_only(#[case] trigger: Trigger, #[case] expected: ShellAction) {
    assert_eq!(action_for(trigger, false), Some(expected));
}

#[test]
fn test_quit_is_only_reachable_from_menu() {
    let quit_triggers: Vec<Trigger> = BINDINGS
        .iter()
        .filter(|(_, action)| *action == ShellAction::Quit)
        .map(|(trigger, _)| *trigger)
        .collect();
    assert_eq!(quit_triggers, vec![Trigger::MenuQuit]);
}

#[rstest]
#[case(TRAY_MENU_SHOW_HIDE, Some(Trigger::MenuShowHide))]
#[case(TRAY_MENU_REFRESH, Some(Trigger::MenuRefresh))]
#[case(TRAY_MENU_OPEN_IN_BROWSER, Some(Trigger::MenuOpenInBrowser))]
#[case(TRAY_MENU_QUIT, Some(Trigger::MenuQuit))]
#[case("", None)]
#[case("tray.version", None)]
fn test_trigger_from_menu_id(#[case] id: &str, #[case] expected: Option<Trigger>) {
    assert_eq!(trigger_from_menu_id(id), expected);
}

#[rstest]
#[case(r#"{"cmd":"open_in_browser"}"#, Some(Trigger::ButtonOpenInBrowser))]
#[case(r#"{"cmd":"refresh"}"#, Some(Trigger::ButtonRefresh))]
#[case(r#"{"cmd":"refresh","extra":1}"#, Some(Trigger::ButtonRefresh))]
#[case(r#"{"cmd":"quit"}"#, None)]
#[case(r#"{"cmd":"navigate","url":"https://example.com"}"#, None)]
#[case(r#"{}"#, None)]
#[case("refresh", None)]
fn test_trigger_from_ipc(#[case] body: &str, #[case] expected: Option<Trigger>) {
    assert_eq!(trigger_from_ipc(body), expected);
}
