use tower_lsp::lsp_types::*;
use vitalang_lsp_core::LANGUAGE;

/// Define the server capabilities for the Vitalang LSP
pub fn server_capabilities() -> ServerCapabilities {
    ServerCapabilities {
        // Incremental sync, so each edit can be inspected by the trigger heuristic
        text_document_sync: Some(TextDocumentSyncCapability::Kind(
            TextDocumentSyncKind::INCREMENTAL,
        )),

        // Open suggestions on letters, sigils and '.'
        completion_provider: Some(CompletionOptions {
            trigger_characters: Some(LANGUAGE.trigger_characters()),
            resolve_provider: Some(false),
            ..Default::default()
        }),

        ..Default::default()
    }
}
