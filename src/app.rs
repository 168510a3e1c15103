//! App Core for the HFC Alerts shell.
//!
//! `AppShell` owns the only mutable state (window visibility) and turns
//! triggers into actions. It talks to the toolkit exclusively through the
//! capability traits below, so it can be driven without a real window.

use tracing::{debug, info, warn};

use crate::types::action::{action_for, ShellAction, Trigger};
use crate::types::config::ShellConfig;
use crate::types::errors::ShellError;
use crate::types::visibility::WindowVisibility;

/// Opaque embedded browser engine.
pub trait BrowserSurface {
    fn load(&mut self, url: &str) -> Result<(), ShellError>;
    fn reload(&mut self) -> Result<(), ShellError>;
    fn current_url(&self) -> Option<String>;
}

/// The native main window.
pub trait ShellWindow {
    fn is_visible(&self) -> bool;
    fn set_visible(&mut self, visible: bool);
    /// Raises the window and gives it keyboard focus.
    fn focus(&mut self);
}

/// Hands a URL to the host's default browser.
pub trait UrlOpener {
    fn open(&self, url: &str) -> Result<(), ShellError>;
}

/// Outcome of dispatching a trigger, consumed by the event loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// Keep running.
    Continue,
    /// Stop the event loop now. Returned at most once per shell.
    Exit,
    /// The shell already terminated or the trigger is unbound.
    Ignored,
}

/// The orchestration component: one window, one browser surface, one URL.
pub struct AppShell<B, W, O> {
    config: ShellConfig,
    surface: B,
    window: W,
    opener: O,
    visibility: WindowVisibility,
    tray_available: bool,
}

impl<B, W, O> AppShell<B, W, O>
where
    B: BrowserSurface,
    W: ShellWindow,
    O: UrlOpener,
{
    /// Points the surface at the configured URL and shows the window.
    pub fn new(
        config: ShellConfig,
        mut surface: B,
        mut window: W,
        opener: O,
    ) -> Result<Self, ShellError> {
        surface.load(&config.url)?;
        window.set_visible(true);
        info!(url = %config.url, "shell started");

        Ok(Self {
            config,
            surface,
            window,
            opener,
            visibility: WindowVisibility::Visible,
            tray_available: true,
        })
    }

    /// Records whether a tray icon exists. Without one the shell runs
    /// window-only and the close control quits.
    pub fn set_tray_available(&mut self, available: bool) {
        if !available {
            warn!("no tray icon available, running in window-only mode");
        }
        self.tray_available = available;
    }

    pub fn tray_available(&self) -> bool {
        self.tray_available
    }

    pub fn visibility(&self) -> WindowVisibility {
        self.visibility
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    pub fn surface(&self) -> &B {
        &self.surface
    }

    pub fn window(&self) -> &W {
        &self.window
    }

    pub fn opener(&self) -> &O {
        &self.opener
    }

    pub fn current_url(&self) -> Option<String> {
        self.surface.current_url()
    }

    /// Maps a trigger through the binding table and performs the result.
    pub fn handle(&mut self, trigger: Trigger) -> Dispatch {
        if self.visibility.is_terminated() {
            debug!(?trigger, "ignored after quit");
            return Dispatch::Ignored;
        }
        match action_for(trigger, self.tray_available) {
            Some(action) => {
                debug!(?trigger, ?action, "dispatch");
                self.perform(action)
            }
            None => Dispatch::Ignored,
        }
    }

    /// Performs an action directly, bypassing the binding table.
    pub fn perform(&mut self, action: ShellAction) -> Dispatch {
        if self.visibility.is_terminated() {
            return Dispatch::Ignored;
        }

        match action {
            ShellAction::ToggleWindow => {
                self.sync_with_window();
                let next = self.visibility.toggled();
                self.apply_visibility(next);
                Dispatch::Continue
            }
            ShellAction::HideWindow => {
                let next = self.visibility.closed();
                self.apply_visibility(next);
                Dispatch::Continue
            }
            ShellAction::Refresh => {
                if let Err(e) = self.surface.reload() {
                    warn!(error = %e, "reload failed");
                }
                Dispatch::Continue
            }
            ShellAction::OpenInBrowser => {
                let url = self.config.url.clone();
                self.open_external(&url);
                Dispatch::Continue
            }
            ShellAction::Quit => {
                self.visibility = self.visibility.quit();
                info!("quit requested");
                Dispatch::Exit
            }
        }
    }

    /// Hands an arbitrary URL to the system browser. Used for the fixed URL
    /// and for new-window requests coming from the page.
    pub fn open_external(&self, url: &str) {
        if let Err(e) = self.opener.open(url) {
            warn!(url = %url, error = %e, "open in system browser failed");
        }
    }

    /// The window manager can hide or show the window behind our back; the
    /// toggle acts on what is actually on screen.
    fn sync_with_window(&mut self) {
        self.visibility = if self.window.is_visible() {
            WindowVisibility::Visible
        } else {
            WindowVisibility::Hidden
        };
    }

    fn apply_visibility(&mut self, next: WindowVisibility) {
        if next == self.visibility {
            return;
        }
        match next {
            WindowVisibility::Visible => {
                self.window.set_visible(true);
                self.window.focus();
            }
            WindowVisibility::Hidden => self.window.set_visible(false),
            WindowVisibility::Terminated => {}
        }
        debug!(from = ?self.visibility, to = ?next, "visibility");
        self.visibility = next;
    }
}
