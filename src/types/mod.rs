// HFC Alerts shared types
// Configuration, errors, the trigger-to-action table and window visibility.

pub mod action;
pub mod config;
pub mod errors;
pub mod visibility;
