//! Auto-trigger heuristic for document edits

use serde::{Deserialize, Serialize};

/// One edit to a document
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeEvent {
    pub inserted_text: String,
    /// Number of characters the edit replaced
    pub removed_length: usize,
}

impl ChangeEvent {
    pub fn new(inserted_text: impl Into<String>, removed_length: usize) -> Self {
        Self {
            inserted_text: inserted_text.into(),
            removed_length,
        }
    }
}

/// Whether an edit should reopen the suggestion list
///
/// Only a pure insertion of a single ASCII letter qualifies. Pastes and
/// accepted suggestions insert several characters; sigils are handled by the
/// editor's trigger characters.
pub fn should_retrigger(event: &ChangeEvent) -> bool {
    if event.removed_length != 0 {
        return false;
    }

    let mut chars = event.inserted_text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => c.is_ascii_alphabetic(),
        _ => false,
    }
}
