//! `brewbot-notifier` library crate.
//!
//! Re-exports the configuration and dispatch modules for integration
//! testing. The binary entrypoint lives in `main.rs`.

pub mod config;
pub mod dispatcher;

pub use config::{ConfigError, NotifierConfig};
pub use dispatcher::{DispatchOutcome, Dispatcher, SendPolicy};
