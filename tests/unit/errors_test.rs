use std::error::Error;

use hfc_alerts::types::errors::*;

// === IconError Tests ===

#[test]
fn icon_error_display_variants() {
    assert_eq!(
        IconError::Io("permission denied".to_string()).to_string(),
        "Icon I/O error: permission denied"
    );
    assert_eq!(
        IconError::Decode("bad header".to_string()).to_string(),
        "Icon decode error: bad header"
    );
    assert_eq!(
        IconError::InvalidDimensions(0, 16).to_string(),
        "Invalid icon dimensions: 0x16"
    );
}

// === TrayError Tests ===

#[test]
fn tray_error_display_variants() {
    assert_eq!(
        TrayError::Menu("append failed".to_string()).to_string(),
        "Tray menu error: append failed"
    );
    assert_eq!(
        TrayError::Icon("bad rgba".to_string()).to_string(),
        "Tray icon image error: bad rgba"
    );
    assert_eq!(
        TrayError::Build("no status notifier".to_string()).to_string(),
        "Tray icon unavailable: no status notifier"
    );
}

// === ShellError Tests ===

#[test]
fn shell_error_display_variants() {
    assert_eq!(
        ShellError::Window("no display".to_string()).to_string(),
        "Window error: no display"
    );
    assert_eq!(
        ShellError::Browser("webkit crashed".to_string()).to_string(),
        "Browser surface error: webkit crashed"
    );
    assert_eq!(
        ShellError::Open("xdg-open: not found".to_string()).to_string(),
        "Failed to open system browser: xdg-open: not found"
    );
}

#[test]
fn shell_error_wraps_tray_error() {
    let err: ShellError = TrayError::Build("unsupported".to_string()).into();
    assert_eq!(err.to_string(), "Tray icon unavailable: unsupported");
    assert!(err.source().is_some());
}

#[test]
fn shell_error_wraps_icon_error() {
    let err: ShellError = IconError::Decode("truncated".to_string()).into();
    assert_eq!(err.to_string(), "Icon decode error: truncated");
    assert!(err.source().is_some());
}

#[test]
fn shell_error_leaf_variants_have_no_source() {
    let err: Box<dyn Error> = Box::new(ShellError::Window("x".to_string()));
    assert!(err.source().is_none());
}
