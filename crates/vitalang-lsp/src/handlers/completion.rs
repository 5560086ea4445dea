use tower_lsp::lsp_types::*;
use vitalang_lsp_core::{
    CompletionEngine, CompletionRequest, ReplacementRange, SuggestionItem, SuggestionKind,
};

use crate::document::Document;

/// Get the completion list for a position in the document
pub fn get_completions(
    engine: &CompletionEngine,
    doc: &Document,
    position: Position,
) -> CompletionResponse {
    let line_text = doc.line(position.line).unwrap_or("");
    let request = CompletionRequest::new(
        doc.text(),
        line_text,
        position.line,
        doc.char_column(position) as u32,
    );
    let result = engine.resolve_completions(&request);

    CompletionResponse::List(CompletionList {
        is_incomplete: result.is_incomplete,
        items: result
            .items
            .iter()
            .map(|item| convert_to_lsp_completion(doc, item))
            .collect(),
    })
}

/// Convert a core suggestion to an LSP completion item
fn convert_to_lsp_completion(doc: &Document, item: &SuggestionItem) -> CompletionItem {
    let kind = match item.kind {
        SuggestionKind::Keyword => CompletionItemKind::KEYWORD,
        SuggestionKind::Variable => CompletionItemKind::VARIABLE,
    };

    // Keywords keep the editor's default insertion range
    let (insert_text, text_edit) = match item.replacement_range {
        Some(range) => (
            None,
            Some(CompletionTextEdit::Edit(TextEdit {
                range: to_lsp_range(doc, range),
                new_text: item.insert_text.clone(),
            })),
        ),
        None => (Some(item.insert_text.clone()), None),
    };

    CompletionItem {
        label: item.label.clone(),
        kind: Some(kind),
        detail: Some(item.detail.clone()),
        filter_text: Some(item.filter_text.clone()),
        sort_text: Some(item.sort_key.clone()),
        insert_text,
        insert_text_format: Some(InsertTextFormat::PLAIN_TEXT),
        text_edit,
        ..Default::default()
    }
}

fn to_lsp_range(doc: &Document, range: ReplacementRange) -> Range {
    Range {
        start: Position {
            line: range.start_line,
            character: doc.utf16_column(range.start_line, range.start_column),
        },
        end: Position {
            line: range.end_line,
            character: doc.utf16_column(range.end_line, range.end_column),
        },
    }
}
