//! Core completion engine for the Vitalang language
//!
//! This crate holds the editor-independent logic behind Vitalang
//! autocompletion. It is shared by the LSP server and the CLI.
//!
//! # Features
//!
//! - **Keywords**: The static table of Vitalang keyword phrases
//! - **Scanner**: Discovers `$` and `£` variables used anywhere in a document
//! - **Context**: Detects whether the cursor sits right after a sigil
//! - **Ranges**: Computes the span a suggestion overwrites
//! - **Composer**: Builds the final, deduplicated suggestion list
//! - **Trigger**: Decides when an edit should reopen the suggestion list
//!
//! # Example
//!
//! ```
//! use vitalang_lsp_core::{resolve_completions, CompletionRequest};
//!
//! let text = "sweet $count\n$";
//! let request = CompletionRequest::new(text, "$", 1, 1);
//! let result = resolve_completions(&request);
//!
//! assert_eq!(result.items.len(), 1);
//! assert_eq!(result.items[0].insert_text, "$count");
//! ```

pub mod composer;
pub mod context;
pub mod engine;
pub mod keywords;
pub mod language;
pub mod range;
pub mod scanner;
pub mod sigil;
pub mod trigger;

// Re-export main types for convenience
pub use composer::{compose_suggestions, SuggestionItem, SuggestionKind, SuggestionResult};
pub use context::{resolve_context, CursorContext};
pub use engine::{on_document_changed, resolve_completions, CompletionEngine, CompletionRequest};
pub use keywords::{Keyword, KeywordRole, KEYWORDS};
pub use language::{LanguageConfiguration, LANGUAGE};
pub use range::{replacement_range, resolve_range, LineCursor, RangeRule, ReplacementRange};
pub use scanner::{find_identifiers, scan_identifiers, IdentifierMatch, ScannedIdentifiers};
pub use sigil::SigilClass;
pub use trigger::{should_retrigger, ChangeEvent};
