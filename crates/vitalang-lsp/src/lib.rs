//! Vitalang language server
//!
//! Hosts the completion engine from `vitalang-lsp-core` behind the Language
//! Server Protocol:
//! - Code completion for keywords and `$`/`£` variables
//! - Auto-trigger of suggestions after a typed letter (`vitalang/triggerSuggest`)

pub mod capabilities;
pub mod config;
pub mod document;
pub mod handlers;
pub mod notifications;
pub mod server;

pub use config::{ConfigError, ServerConfig};
pub use server::Backend;
