//! Tray icon and its popup menu.
//!
//! Events from `tray-icon` arrive on its own callbacks; they are forwarded
//! into the tao loop as [`UserEvent`]s so all shell state stays on the loop
//! thread.

use tao::event_loop::EventLoopProxy;
use tracing::debug;
use tray_icon::menu::{Menu, MenuEvent, MenuItem, PredefinedMenuItem};
use tray_icon::{Icon, MouseButton, MouseButtonState, TrayIcon, TrayIconBuilder, TrayIconEvent};

use crate::services::icon_loader::IconImage;
use crate::types::action::{
    Trigger, TRAY_MENU_OPEN_IN_BROWSER, TRAY_MENU_QUIT, TRAY_MENU_REFRESH, TRAY_MENU_SHOW_HIDE,
};
use crate::types::config::ShellConfig;
use crate::types::errors::TrayError;
use crate::ui::shell_window::UserEvent;

/// Show/Hide, Refresh, Open in Browser, separator, Quit.
pub fn build_popup_menu() -> Result<Menu, TrayError> {
    let menu = Menu::new();
    let show_hide = MenuItem::with_id(TRAY_MENU_SHOW_HIDE, "Show/Hide", true, None);
    let refresh = MenuItem::with_id(TRAY_MENU_REFRESH, "Refresh", true, None);
    let open = MenuItem::with_id(TRAY_MENU_OPEN_IN_BROWSER, "Open in Browser", true, None);
    let quit = MenuItem::with_id(TRAY_MENU_QUIT, "Quit", true, None);

    menu.append_items(&[
        &show_hide,
        &refresh,
        &open,
        &PredefinedMenuItem::separator(),
        &quit,
    ])
    .map_err(|e| TrayError::Menu(e.to_string()))?;

    Ok(menu)
}

/// Creates the tray icon. Fails when the host desktop has no tray support.
///
/// The menu opens on secondary click only; primary click is delivered as a
/// [`Trigger::TrayActivated`] by [`forward_tray_events`].
pub fn build_tray(config: &ShellConfig, image: &IconImage) -> Result<TrayIcon, TrayError> {
    let icon = Icon::from_rgba(image.rgba.clone(), image.width, image.height)
        .map_err(|e| TrayError::Icon(e.to_string()))?;
    let menu = build_popup_menu()?;

    TrayIconBuilder::new()
        .with_menu(Box::new(menu))
        .with_menu_on_left_click(false)
        .with_tooltip(config.tooltip())
        .with_icon(icon)
        .build()
        .map_err(|e| TrayError::Build(e.to_string()))
}

/// Routes tray clicks and menu selections into the event loop.
pub fn forward_tray_events(proxy: EventLoopProxy<UserEvent>) {
    let menu_proxy = proxy.clone();
    MenuEvent::set_event_handler(Some(move |event: MenuEvent| {
        debug!(id = %event.id.0, "tray menu");
        let _ = menu_proxy.send_event(UserEvent::MenuItem(event.id.0));
    }));

    TrayIconEvent::set_event_handler(Some(move |event: TrayIconEvent| {
        if let TrayIconEvent::Click {
            button: MouseButton::Left,
            button_state: MouseButtonState::Up,
            ..
        } = event
        {
            let _ = proxy.send_event(UserEvent::Trigger(Trigger::TrayActivated));
        }
    }));
}
