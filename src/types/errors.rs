use std::fmt;

// === IconError ===

/// Errors related to loading the optional icon asset.
#[derive(Debug, Clone, PartialEq)]
pub enum IconError {
    /// The asset exists but could not be read.
    Io(String),
    /// The asset could not be decoded as an image.
    Decode(String),
    /// A zero dimension, or a pixel buffer whose length is not `width * height * 4`.
    InvalidDimensions(u32, u32),
}

impl fmt::Display for IconError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IconError::Io(msg) => write!(f, "Icon I/O error: {}", msg),
            IconError::Decode(msg) => write!(f, "Icon decode error: {}", msg),
            IconError::InvalidDimensions(w, h) => {
                write!(f, "Invalid icon dimensions: {}x{}", w, h)
            }
        }
    }
}

impl std::error::Error for IconError {}

// === TrayError ===

/// Errors related to creating the tray icon and its popup menu.
#[derive(Debug, Clone, PartialEq)]
pub enum TrayError {
    /// A popup menu item could not be created or appended.
    Menu(String),
    /// The tray icon pixels were rejected by the toolkit.
    Icon(String),
    /// The host desktop refused to create a tray icon.
    Build(String),
}

impl fmt::Display for TrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrayError::Menu(msg) => write!(f, "Tray menu error: {}", msg),
            TrayError::Icon(msg) => write!(f, "Tray icon image error: {}", msg),
            TrayError::Build(msg) => write!(f, "Tray icon unavailable: {}", msg),
        }
    }
}

impl std::error::Error for TrayError {}

// === ShellError ===

/// Errors surfaced by the application shell.
#[derive(Debug)]
pub enum ShellError {
    /// The native window could not be created.
    Window(String),
    /// The embedded browser surface failed an operation.
    Browser(String),
    /// Handing a URL to the system browser failed.
    Open(String),
    /// Tray icon setup failed.
    Tray(TrayError),
    /// Icon asset handling failed.
    Icon(IconError),
}

impl fmt::Display for ShellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShellError::Window(msg) => write!(f, "Window error: {}", msg),
            ShellError::Browser(msg) => write!(f, "Browser surface error: {}", msg),
            ShellError::Open(msg) => write!(f, "Failed to open system browser: {}", msg),
            ShellError::Tray(e) => write!(f, "{}", e),
            ShellError::Icon(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ShellError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ShellError::Tray(e) => Some(e),
            ShellError::Icon(e) => Some(e),
            _ => None,
        }
    }
}

impl From<TrayError> for ShellError {
    fn from(e: TrayError) -> Self {
        ShellError::Tray(e)
    }
}

impl From<IconError> for ShellError {
    fn from(e: IconError) -> Self {
        ShellError::Icon(e)
    }
}
