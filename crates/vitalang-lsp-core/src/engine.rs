//! Entry points used by editors

use crate::composer::{compose_suggestions, SuggestionResult};
use crate::context::resolve_context;
use crate::keywords::{Keyword, KEYWORDS};
use crate::range::{replacement_range, LineCursor};
use crate::scanner::scan_identifiers;
use crate::trigger::{should_retrigger, ChangeEvent};

/// Read-only view of the editor state for one completion request
#[derive(Clone, Copy, Debug)]
pub struct CompletionRequest<'a> {
    pub document_text: &'a str,
    pub line_text: &'a str,
    /// Zero-based line of the cursor
    pub line: u32,
    /// Zero-based cursor column, in characters
    pub character: u32,
}

impl<'a> CompletionRequest<'a> {
    pub fn new(document_text: &'a str, line_text: &'a str, line: u32, character: u32) -> Self {
        Self {
            document_text,
            line_text,
            line,
            character,
        }
    }

    /// Build a request, taking the line text from the document itself
    ///
    /// A line past the end of the document reads as empty.
    pub fn at(document_text: &'a str, line: u32, character: u32) -> Self {
        let line_text = document_text
            .split('\n')
            .nth(line as usize)
            .map(|l| l.strip_suffix('\r').unwrap_or(l))
            .unwrap_or("");
        Self::new(document_text, line_text, line, character)
    }

    pub fn cursor(&self) -> LineCursor<'a> {
        LineCursor::new(self.line_text, self.line, self.character as usize)
    }
}

/// Completion engine bound to a keyword table
#[derive(Clone, Copy, Debug)]
pub struct CompletionEngine {
    keywords: &'static [Keyword],
}

impl Default for CompletionEngine {
    fn default() -> Self {
        Self::new(&KEYWORDS)
    }
}

impl CompletionEngine {
    pub fn new(keywords: &'static [Keyword]) -> Self {
        Self { keywords }
    }

    pub fn keywords(&self) -> &'static [Keyword] {
        self.keywords
    }

    /// Suggestions for the cursor position in `request`
    ///
    /// The whole document is rescanned on every call.
    pub fn resolve_completions(&self, request: &CompletionRequest<'_>) -> SuggestionResult {
        let identifiers = scan_identifiers(request.document_text);
        let cursor = request.cursor();
        let context = resolve_context(cursor.prefix());
        let range = replacement_range(&cursor);

        compose_suggestions(context, self.keywords, &identifiers, range)
    }

    /// Whether `event` should reopen the suggestion list
    pub fn on_document_changed(&self, event: &ChangeEvent) -> bool {
        should_retrigger(event)
    }
}

/// Resolve completions against the built-in keyword table
pub fn resolve_completions(request: &CompletionRequest<'_>) -> SuggestionResult {
    CompletionEngine::default().resolve_completions(request)
}

pub fn on_document_changed(event: &ChangeEvent) -> bool {
    CompletionEngine::default().on_document_changed(event)
}
