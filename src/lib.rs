//! HFC Alerts — an unofficial desktop wrapper for the Home Front Command
//! alerts history page.
//!
//! This library crate exposes all modules for use by the binary and integration tests.

pub mod app;
pub mod platform;
pub mod services;
pub mod types;

#[cfg(feature = "gui")]
pub mod ui;
