/// Visibility of the main window over the life of the process.
///
/// `Terminated` is terminal: once the shell has quit, no transition leaves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowVisibility {
    #[default]
    Visible,
    Hidden,
    Terminated,
}

impl WindowVisibility {
    pub fn is_visible(self) -> bool {
        self == WindowVisibility::Visible
    }

    pub fn is_terminated(self) -> bool {
        self == WindowVisibility::Terminated
    }

    /// Tray activation: hide if visible, show if hidden.
    pub fn toggled(self) -> Self {
        match self {
            WindowVisibility::Visible => WindowVisibility::Hidden,
            WindowVisibility::Hidden => WindowVisibility::Visible,
            WindowVisibility::Terminated => WindowVisibility::Terminated,
        }
    }

    /// Native close control.
    pub fn closed(self) -> Self {
        match self {
            WindowVisibility::Terminated => WindowVisibility::Terminated,
            _ => WindowVisibility::Hidden,
        }
    }

    pub fn quit(self) -> Self {
        WindowVisibility::Terminated
    }
}
