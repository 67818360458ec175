//! CampusBuddy Student Assistant
//!
//! A rule-based chat core for campus support hubs. This library provides
//! the dialogue responder (intent classification with a single-slot
//! conversational context), the reply catalog, per-session state storage,
//! and a terminal presentation shell.

#![allow(non_snake_case)]

pub mod config;
pub mod catalog;
pub mod shell;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{CampusBuddyError, Result};

// Re-export main components for easy access
pub use catalog::ReplyCatalog;
pub use shell::ChatShell;
pub use state::{DialogueResponder, DialogueState, Reply, SessionStore, Topic};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
