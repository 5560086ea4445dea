//! Tests driving the language server through its `LanguageServer` methods

use std::time::Duration;

use serde_json::{json, Value};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tower_lsp::lsp_types::*;
use tower_lsp::{LanguageServer, LspService, Server};
use vitalang_lsp::Backend;

fn uri() -> Url {
    Url::parse("file:///workspace/main.vita").unwrap()
}

async fn open(backend: &Backend, text: &str) {
    backend
        .did_open(DidOpenTextDocumentParams {
            text_document: TextDocumentItem {
                uri: uri(),
                language_id: "vitalang".to_string(),
                version: 1,
                text: text.to_string(),
            },
        })
        .await;
}

async fn insert(backend: &Backend, line: u32, character: u32, text: &str) {
    let at = Position::new(line, character);
    backend
        .did_change(DidChangeTextDocumentParams {
            text_document: VersionedTextDocumentIdentifier {
                uri: uri(),
                version: 2,
            },
            content_changes: vec![TextDocumentContentChangeEvent {
                range: Some(Range::new(at, at)),
                range_length: None,
                text: text.to_string(),
            }],
        })
        .await;
}

async fn complete_at(backend: &Backend, line: u32, character: u32) -> Option<Vec<CompletionItem>> {
    let params = CompletionParams {
        text_document_position: TextDocumentPositionParams {
            text_document: TextDocumentIdentifier { uri: uri() },
            position: Position::new(line, character),
        },
        work_done_progress_params: WorkDoneProgressParams::default(),
        partial_result_params: PartialResultParams::default(),
        context: None,
    };

    match backend.completion(params).await.unwrap() {
        Some(CompletionResponse::List(list)) => Some(list.items),
        Some(CompletionResponse::Array(items)) => Some(items),
        None => None,
    }
}

#[tokio::test]
async fn test_initialize_reads_options() {
    let (service, _socket) = LspService::new(|client| Backend::new(client, false));
    let backend = service.inner();

    let result = backend
        .initialize(InitializeParams {
            initialization_options: Some(json!({ "autoTrigger": false })),
            ..Default::default()
        })
        .await
        .unwrap();

    assert!(!backend.config().auto_trigger);
    assert!(!backend.config().debug);
    assert!(result.capabilities.completion_provider.is_some());
    assert_eq!(result.server_info.map(|i| i.name).as_deref(), Some("vitalang-lsp"));
}

#[tokio::test]
async fn test_bad_options_fall_back_to_defaults() {
    let (service, _socket) = LspService::new(|client| Backend::new(client, false));
    let backend = service.inner();

    let result = backend
        .initialize(InitializeParams {
            initialization_options: Some(json!({ "autoTrigger": 3 })),
            ..Default::default()
        })
        .await;

    assert!(result.is_ok());
    assert!(backend.config().auto_trigger);
}

#[tokio::test]
async fn test_completion_after_sigil() {
    let (service, _socket) = LspService::new(|client| Backend::new(client, false));
    let backend = service.inner();

    open(backend, "sweet $count\nowners £total\nanywho $").await;
    let items = complete_at(backend, 2, 8).await.unwrap();

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].label, "count");
    assert_eq!(items[0].kind, Some(CompletionItemKind::VARIABLE));
}

#[tokio::test]
async fn test_completion_general_context() {
    let (service, _socket) = LspService::new(|client| Backend::new(client, false));
    let backend = service.inner();

    open(backend, "sweet $count\nsw").await;
    let items = complete_at(backend, 1, 2).await.unwrap();

    assert!(items.iter().any(|i| i.label == "sweet but stout"));
    assert!(items.iter().any(|i| i.label == "count"));
}

#[tokio::test]
async fn test_edits_are_applied_before_completion() {
    let (service, _socket) = LspService::new(|client| Backend::new(client, false));
    let backend = service.inner();

    open(backend, "sweet \n").await;
    insert(backend, 0, 6, "£").await;
    insert(backend, 0, 7, "n").await;
    insert(backend, 1, 0, "£").await;

    assert_eq!(backend.document_text(&uri()).as_deref(), Some("sweet £n\n£"));
    assert_eq!(backend.document_version(&uri()), Some(2));

    let items = complete_at(backend, 1, 1).await.unwrap();
    let labels: Vec<&str> = items.iter().map(|i| i.label.as_str()).collect();
    assert_eq!(labels, vec!["n"]);
}

#[tokio::test]
async fn test_unknown_and_closed_documents() {
    let (service, _socket) = LspService::new(|client| Backend::new(client, false));
    let backend = service.inner();

    assert!(complete_at(backend, 0, 0).await.is_none());

    open(backend, "$a").await;
    assert!(complete_at(backend, 0, 2).await.is_some());

    backend
        .did_close(DidCloseTextDocumentParams {
            text_document: TextDocumentIdentifier { uri: uri() },
        })
        .await;
    assert!(complete_at(backend, 0, 2).await.is_none());
}

// ============================================================================
// FULL SESSIONS OVER A STREAM
// ============================================================================

async fn send<W: AsyncWrite + Unpin>(writer: &mut W, message: Value) {
    let body = message.to_string();
    let frame = format!("Content-Length: {}\r\n\r\n{}", body.len(), body);
    writer.write_all(frame.as_bytes()).await.unwrap();
}

async fn receive<R: AsyncBufRead + Unpin>(reader: &mut R) -> Value {
    let mut length = 0;
    loop {
        let mut header = String::new();
        reader.read_line(&mut header).await.unwrap();
        let header = header.trim_end();
        if header.is_empty() {
            break;
        }
        if let Some(value) = header.strip_prefix("Content-Length: ") {
            length = value.parse().unwrap();
        }
    }

    let mut body = vec![0; length];
    reader.read_exact(&mut body).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}

/// Open `sw`, type `e` after it, then ask for completions at the new cursor.
/// Returns every message the server wrote.
async fn type_letter_session(initialization_options: Option<Value>) -> Vec<Value> {
    let (service, socket) = LspService::new(|client| Backend::new(client, false));
    let (mut client_writer, server_reader) = tokio::io::duplex(64 * 1024);
    let (server_writer, client_reader) = tokio::io::duplex(64 * 1024);
    let server = Server::new(server_reader, server_writer, socket).serve(service);

    let session = async move {
        let mut reader = BufReader::new(client_reader);
        let mut messages = Vec::new();

        let mut initialize = json!({ "processId": null, "capabilities": {} });
        if let Some(options) = initialization_options {
            initialize["initializationOptions"] = options;
        }
        send(
            &mut client_writer,
            json!({ "jsonrpc": "2.0", "id": 1, "method": "initialize", "params": initialize }),
        )
        .await;
        loop {
            let message = receive(&mut reader).await;
            let done = message["id"] == 1;
            messages.push(message);
            if done {
                break;
            }
        }

        send(
            &mut client_writer,
            json!({ "jsonrpc": "2.0", "method": "initialized", "params": {} }),
        )
        .await;
        send(
            &mut client_writer,
            json!({
                "jsonrpc": "2.0",
                "method": "textDocument/didOpen",
                "params": { "textDocument": {
                    "uri": "file:///a.vita", "languageId": "vitalang", "version": 1, "text": "sw"
                } }
            }),
        )
        .await;
        send(
            &mut client_writer,
            json!({
                "jsonrpc": "2.0",
                "method": "textDocument/didChange",
                "params": {
                    "textDocument": { "uri": "file:///a.vita", "version": 2 },
                    "contentChanges": [{
                        "range": {
                            "start": { "line": 0, "character": 2 },
                            "end": { "line": 0, "character": 2 }
                        },
                        "text": "e"
                    }]
                }
            }),
        )
        .await;
        send(
            &mut client_writer,
            json!({
                "jsonrpc": "2.0",
                "id": 2,
                "method": "textDocument/completion",
                "params": {
                    "textDocument": { "uri": "file:///a.vita" },
                    "position": { "line": 0, "character": 3 }
                }
            }),
        )
        .await;

        loop {
            let message = receive(&mut reader).await;
            let done = message["id"] == 2;
            messages.push(message);
            if done {
                break;
            }
        }

        // Collect anything still in flight once the server goes quiet
        while let Ok(message) =
            tokio::time::timeout(Duration::from_millis(300), receive(&mut reader)).await
        {
            messages.push(message);
        }

        messages
    };

    let session = tokio::time::timeout(Duration::from_secs(10), session);
    tokio::select! {
        _ = server => panic!("server stopped before the session finished"),
        messages = session => messages.expect("session timed out"),
    }
}

fn trigger_notifications(messages: &[Value]) -> Vec<&Value> {
    messages
        .iter()
        .filter(|m| m["method"] == "vitalang/triggerSuggest")
        .collect()
}

#[tokio::test]
async fn test_typed_letter_sends_trigger_notification() {
    let messages = type_letter_session(None).await;

    let triggers = trigger_notifications(&messages);
    assert_eq!(triggers.len(), 1);
    assert_eq!(
        triggers[0]["params"],
        json!({ "uri": "file:///a.vita", "position": { "line": 0, "character": 3 } })
    );

    let completion = messages.iter().find(|m| m["id"] == 2).unwrap();
    let items = completion["result"]["items"].as_array().unwrap();
    assert!(items.iter().any(|i| i["label"] == "sweet but stout"));
}

#[tokio::test]
async fn test_auto_trigger_can_be_switched_off() {
    let messages = type_letter_session(Some(json!({ "autoTrigger": false }))).await;

    assert!(trigger_notifications(&messages).is_empty());
    assert!(messages.iter().any(|m| m["id"] == 2));
}
