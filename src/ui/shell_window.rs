//! Main window using `wry` + `tao`.
//!
//! Architecture:
//! - `GuiContext` owns the tao event loop. It is constructed explicitly by
//!   `main` and torn down when the loop exits; nothing else touches toolkit
//!   globals.
//! - The alerts page is loaded into a wry WebView. The control bar is injected
//!   with `with_initialization_script` on every page load.
//! - Tray clicks, tray menu selections, control bar IPC and new-window
//!   requests all become `UserEvent`s handled on the loop thread by `AppShell`.

use tao::dpi::LogicalSize;
use tao::event::{Event, StartCause, WindowEvent};
use tao::event_loop::{ControlFlow, EventLoop, EventLoopBuilder, EventLoopProxy};
use tao::window::{Icon as WindowIcon, Window, WindowBuilder};
use tracing::{debug, info, warn};
use wry::{WebView, WebViewBuilder};

use crate::app::{AppShell, BrowserSurface, Dispatch, ShellWindow, UrlOpener};
use crate::platform;
use crate::services::icon_loader::{IconOrigin, IconPlan};
use crate::types::action::{trigger_from_ipc, trigger_from_menu_id, Trigger};
use crate::types::config::ShellConfig;
use crate::types::errors::ShellError;
use crate::ui::{control_bar, tray};

#[derive(Debug)]
pub enum UserEvent {
    Trigger(Trigger),
    /// Raw tray menu id, resolved by `trigger_from_menu_id`.
    MenuItem(String),
    /// A page asked for a new window; the URL goes to the system browser.
    OpenExternal(String),
}

// ─── Capability adapters ───

pub struct WryBrowser {
    webview: WebView,
}

impl BrowserSurface for WryBrowser {
    fn load(&mut self, url: &str) -> Result<(), ShellError> {
        self.webview
            .load_url(url)
            .map_err(|e| ShellError::Browser(e.to_string()))
    }

    fn reload(&mut self) -> Result<(), ShellError> {
        self.webview
            .reload()
            .map_err(|e| ShellError::Browser(e.to_string()))
    }

    fn current_url(&self) -> Option<String> {
        self.webview.url().ok().filter(|u| !u.is_empty())
    }
}

pub struct TaoWindow {
    window: Window,
}

impl ShellWindow for TaoWindow {
    fn is_visible(&self) -> bool {
        self.window.is_visible()
    }

    fn set_visible(&mut self, visible: bool) {
        self.window.set_visible(visible);
    }

    fn focus(&mut self) {
        self.window.set_minimized(false);
        self.window.set_focus();
    }
}

pub struct SystemBrowser;

impl UrlOpener for SystemBrowser {
    fn open(&self, url: &str) -> Result<(), ShellError> {
        platform::open_url(url)
    }
}

type RealShell = AppShell<WryBrowser, TaoWindow, SystemBrowser>;

// ─── GUI context ───

/// Process-wide GUI state, made explicit.
pub struct GuiContext {
    event_loop: EventLoop<UserEvent>,
}

impl GuiContext {
    pub fn new() -> Self {
        let event_loop: EventLoop<UserEvent> = EventLoopBuilder::with_user_event().build();
        Self { event_loop }
    }

    pub fn proxy(&self) -> EventLoopProxy<UserEvent> {
        self.event_loop.create_proxy()
    }

    /// Builds the window, webview and shell, then runs the event loop.
    ///
    /// Only returns on setup failure. A successful run ends the process with
    /// exit code 0 when the shell dispatches `Quit`.
    pub fn run(self, config: ShellConfig) -> Result<(), ShellError> {
        let icons = IconPlan::resolve(config.icon_path.as_deref());
        if icons.origin == IconOrigin::Fallback {
            info!("icon asset not found, using generic tray icon");
        }

        let window_icon = match &icons.window {
            Some(image) => match WindowIcon::from_rgba(image.rgba.clone(), image.width, image.height) {
                Ok(icon) => Some(icon),
                Err(e) => {
                    warn!(error = %e, "window icon rejected");
                    None
                }
            },
            None => None,
        };

        let window = WindowBuilder::new()
            .with_title(config.title())
            .with_inner_size(LogicalSize::new(config.window_width, config.window_height))
            .with_window_icon(window_icon)
            .build(&self.event_loop)
            .map_err(|e| ShellError::Window(e.to_string()))?;

        let webview = build_webview(&window, &config, self.proxy())?;

        let mut shell: RealShell = AppShell::new(
            config,
            WryBrowser { webview },
            TaoWindow { window },
            SystemBrowser,
        )?;

        let proxy = self.proxy();
        let mut tray_icon = None;

        self.event_loop.run(move |event, _, control_flow| {
            *control_flow = ControlFlow::Wait;

            let dispatch = match event {
                // Tray icons must be created once the loop is running (macOS).
                Event::NewEvents(StartCause::Init) => {
                    match tray::build_tray(shell.config(), &icons.tray) {
                        Ok(icon) => {
                            tray::forward_tray_events(proxy.clone());
                            tray_icon = Some(icon);
                            shell.set_tray_available(true);
                        }
                        Err(e) => {
                            warn!(error = %e, "tray icon setup failed");
                            shell.set_tray_available(false);
                        }
                    }
                    Dispatch::Continue
                }

                Event::WindowEvent {
                    event: WindowEvent::CloseRequested,
                    ..
                } => shell.handle(Trigger::WindowCloseRequested),

                Event::UserEvent(UserEvent::Trigger(trigger)) => shell.handle(trigger),

                Event::UserEvent(UserEvent::MenuItem(id)) => match trigger_from_menu_id(&id) {
                    Some(trigger) => shell.handle(trigger),
                    None => Dispatch::Ignored,
                },

                Event::UserEvent(UserEvent::OpenExternal(url)) => {
                    shell.open_external(&url);
                    Dispatch::Continue
                }

                _ => Dispatch::Continue,
            };

            if dispatch == Dispatch::Exit {
                // Drop the tray icon first so it leaves the notification area.
                tray_icon.take();
                *control_flow = ControlFlow::Exit;
            }
        })
    }
}

impl Default for GuiContext {
    fn default() -> Self {
        Self::new()
    }
}

fn build_webview(
    window: &Window,
    config: &ShellConfig,
    proxy: EventLoopProxy<UserEvent>,
) -> Result<WebView, ShellError> {
    let ipc_proxy = proxy.clone();
    let nw_proxy = proxy;

    let builder = WebViewBuilder::new()
        .with_initialization_script(control_bar::control_bar_script(config))
        .with_autoplay(true)
        .with_ipc_handler(move |msg: wry::http::Request<String>| {
            match trigger_from_ipc(msg.body()) {
                Some(trigger) => {
                    let _ = ipc_proxy.send_event(UserEvent::Trigger(trigger));
                }
                None => debug!("ignored page IPC message"),
            }
        })
        .with_new_window_req_handler(move |url, _features| {
            if url.starts_with("http://") || url.starts_with("https://") {
                let _ = nw_proxy.send_event(UserEvent::OpenExternal(url));
            }
            wry::NewWindowResponse::Deny
        })
        .with_devtools(cfg!(debug_assertions));

    #[cfg(target_os = "linux")]
    let webview = {
        use tao::platform::unix::WindowExtUnix;
        use wry::WebViewBuilderExtUnix;
        let vbox = window
            .default_vbox()
            .ok_or_else(|| ShellError::Window("GTK vbox unavailable".to_string()))?;
        builder.build_gtk(vbox)
    };

    #[cfg(not(target_os = "linux"))]
    let webview = builder.build(window);

    webview.map_err(|e| ShellError::Browser(e.to_string()))
}
