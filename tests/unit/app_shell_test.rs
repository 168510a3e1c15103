//! Unit tests for AppShell wiring, driven through in-memory capabilities.

#[path = "../common/mod.rs"]
mod common;

use common::{new_shell, test_config, FakeOpener, FakeSurface, FakeWindow};
use hfc_alerts::app::{AppShell, Dispatch};
use hfc_alerts::types::action::{ShellAction, Trigger};
use hfc_alerts::types::config::HFC_URL;
use hfc_alerts::types::visibility::WindowVisibility;

#[test]
fn test_new_shell_targets_fixed_url() {
    let shell = new_shell();
    assert_eq!(shell.current_url().as_deref(), Some(HFC_URL));
    assert_eq!(shell.surface().loads, vec![HFC_URL.to_string()]);
}

#[test]
fn test_new_shell_shows_window() {
    let shell = new_shell();
    assert!(shell.window().visible);
    assert_eq!(shell.visibility(), WindowVisibility::Visible);
}

#[test]
fn test_close_hides_and_keeps_running() {
    let mut shell = new_shell();
    let dispatch = shell.handle(Trigger::WindowCloseRequested);

    assert_eq!(dispatch, Dispatch::Continue);
    assert_eq!(shell.visibility(), WindowVisibility::Hidden);
    assert!(!shell.window().visible);
}

#[test]
fn test_tray_activate_after_close_shows_and_raises() {
    let mut shell = new_shell();
    shell.handle(Trigger::WindowCloseRequested);
    shell.handle(Trigger::TrayActivated);

    assert_eq!(shell.visibility(), WindowVisibility::Visible);
    assert!(shell.window().visible);
    assert_eq!(shell.window().focus_calls, 1);
}

#[test]
fn test_tray_activate_hides_visible_window() {
    let mut shell = new_shell();
    shell.handle(Trigger::TrayActivated);
    assert_eq!(shell.visibility(), WindowVisibility::Hidden);
    assert_eq!(shell.window().focus_calls, 0);
}

#[test]
fn test_closing_hidden_window_is_noop() {
    let mut shell = new_shell();
    shell.handle(Trigger::WindowCloseRequested);
    shell.handle(Trigger::WindowCloseRequested);
    assert_eq!(shell.visibility(), WindowVisibility::Hidden);
}

#[test]
fn test_quit_exits_once() {
    let mut shell = new_shell();
    assert_eq!(shell.handle(Trigger::MenuQuit), Dispatch::Exit);
    assert_eq!(shell.handle(Trigger::MenuQuit), Dispatch::Ignored);
    assert_eq!(shell.visibility(), WindowVisibility::Terminated);
}

#[test]
fn test_quit_from_hidden_state() {
    let mut shell = new_shell();
    shell.handle(Trigger::WindowCloseRequested);
    assert_eq!(shell.handle(Trigger::MenuQuit), Dispatch::Exit);
}

#[test]
fn test_triggers_after_quit_are_ignored() {
    let mut shell = new_shell();
    shell.handle(Trigger::MenuQuit);

    assert_eq!(shell.handle(Trigger::TrayActivated), Dispatch::Ignored);
    assert_eq!(shell.handle(Trigger::ButtonRefresh), Dispatch::Ignored);
    assert_eq!(shell.surface().reloads, 0);
}

#[test]
fn test_refresh_reloads_same_url() {
    let mut shell = new_shell();
    shell.handle(Trigger::ButtonRefresh);
    shell.handle(Trigger::MenuRefresh);

    assert_eq!(shell.surface().reloads, 2);
    assert_eq!(shell.current_url().as_deref(), Some(HFC_URL));
    assert_eq!(shell.surface().loads.len(), 1);
}

#[test]
fn test_reload_failure_is_not_fatal() {
    let surface = FakeSurface {
        fail_reload: true,
        ..FakeSurface::default()
    };
    let mut shell =
        AppShell::new(test_config(), surface, FakeWindow::default(), FakeOpener::default())
            .unwrap();

    assert_eq!(shell.perform(ShellAction::Refresh), Dispatch::Continue);
}

#[test]
fn test_open_in_browser_hands_fixed_url_to_opener() {
    let mut shell = new_shell();
    shell.handle(Trigger::ButtonOpenInBrowser);
    shell.handle(Trigger::MenuOpenInBrowser);

    let opened = shell.opener().opened.borrow();
    assert_eq!(*opened, vec![HFC_URL.to_string(), HFC_URL.to_string()]);
}

#[test]
fn test_open_failure_is_not_fatal() {
    let opener = FakeOpener {
        fail: true,
        ..FakeOpener::default()
    };
    let mut shell =
        AppShell::new(test_config(), FakeSurface::default(), FakeWindow::default(), opener)
            .unwrap();

    assert_eq!(shell.handle(Trigger::MenuOpenInBrowser), Dispatch::Continue);
}

#[test]
fn test_open_external_passes_arbitrary_url() {
    let shell = new_shell();
    shell.open_external("https://www.oref.org.il/eng");
    assert_eq!(
        *shell.opener().opened.borrow(),
        vec!["https://www.oref.org.il/eng".to_string()]
    );
}

#[test]
fn test_window_only_mode_close_quits() {
    let mut shell = new_shell();
    shell.set_tray_available(false);

    assert!(!shell.tray_available());
    assert_eq!(shell.handle(Trigger::WindowCloseRequested), Dispatch::Exit);
    assert_eq!(shell.visibility(), WindowVisibility::Terminated);
}

#[test]
fn test_perform_toggle_directly() {
    let mut shell = new_shell();
    shell.perform(ShellAction::ToggleWindow);
    shell.perform(ShellAction::ToggleWindow);
    assert_eq!(shell.visibility(), WindowVisibility::Visible);
    assert!(shell.window().visible);
}
