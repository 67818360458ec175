//! State management module
//!
//! This module handles dialogue state, turn classification, and per-session
//! state storage

pub mod context;
pub mod responder;
pub mod storage;

// Re-export commonly used state components
pub use context::{DialogueState, Topic};
pub use responder::{DialogueResponder, Intent, QuotePicker, Reply};
pub use storage::{SessionEntry, SessionStore};
