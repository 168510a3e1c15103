//! HFC Alerts — an unofficial desktop wrapper for the Home Front Command
//! alerts history page.
//!
//! Entry point: prints the startup banner, then runs the tray-backed shell window.
//! When built without the `gui` feature, only the banner is printed.

use hfc_alerts::services::logging;
use hfc_alerts::types::config::ShellConfig;

fn print_banner(config: &ShellConfig) {
    for line in config.banner_lines() {
        println!("{}", line);
    }
}

#[cfg(feature = "gui")]
fn main() {
    use hfc_alerts::platform;
    use hfc_alerts::ui::shell_window::GuiContext;

    let config = ShellConfig::default();
    print_banner(&config);
    logging::init();
    platform::restore_default_interrupt();

    if let Err(e) = GuiContext::new().run(config) {
        tracing::error!(error = %e, "failed to start");
        eprintln!("HFC Alerts failed to start: {}", e);
        std::process::exit(1);
    }
}

#[cfg(not(feature = "gui"))]
fn main() {
    let config = ShellConfig::default();
    print_banner(&config);
    logging::init();
    tracing::warn!("built without the `gui` feature, nothing to display");
}
