use tower_lsp::lsp_types::{Position, TextDocumentContentChangeEvent};
use vitalang_lsp_core::{ChangeEvent, CompletionEngine, LANGUAGE};

use crate::document::Document;

/// Describe a content change in the terms the trigger heuristic uses
///
/// Must be called before the change is applied to `doc`.
pub fn change_event(doc: &Document, change: &TextDocumentContentChangeEvent) -> ChangeEvent {
    let removed_length = match change.range_length {
        Some(length) => length as usize,
        None => doc.replaced_text(change).encode_utf16().count(),
    };
    ChangeEvent::new(change.text.clone(), removed_length)
}

/// Where to reopen suggestions after `changes`, if anywhere
///
/// Only the first change of a notification is considered, and only for
/// Vitalang documents. Must be called before the changes are applied.
pub fn retrigger_position(
    engine: &CompletionEngine,
    doc: &Document,
    changes: &[TextDocumentContentChangeEvent],
) -> Option<Position> {
    if doc.language_id() != LANGUAGE.language_id {
        return None;
    }

    let change = changes.first()?;
    let range = change.range?;
    if !engine.on_document_changed(&change_event(doc, change)) {
        return None;
    }

    // The inserted character is an ASCII letter: one UTF-16 unit
    Some(Position::new(range.start.line, range.start.character + 1))
}
