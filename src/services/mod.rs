// HFC Alerts services
// Stateless helpers used at startup: icon loading and logging setup.

pub mod icon_loader;
pub mod logging;
