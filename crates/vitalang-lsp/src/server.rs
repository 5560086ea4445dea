use std::sync::atomic::{AtomicBool, Ordering};

use dashmap::DashMap;
use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::*;
use tower_lsp::{Client, LanguageServer};
use vitalang_lsp_core::CompletionEngine;

use crate::capabilities;
use crate::config::ServerConfig;
use crate::document::Document;
use crate::handlers;
use crate::notifications::{TriggerSuggest, TriggerSuggestParams};

pub struct Backend {
    client: Client,
    documents: DashMap<Url, Document>,
    engine: CompletionEngine,
    auto_trigger: AtomicBool,
    debug: AtomicBool,
}

impl Backend {
    pub fn new(client: Client, debug: bool) -> Self {
        Self {
            client,
            documents: DashMap::new(),
            engine: CompletionEngine::default(),
            auto_trigger: AtomicBool::new(true),
            debug: AtomicBool::new(debug),
        }
    }

    pub fn config(&self) -> ServerConfig {
        ServerConfig {
            auto_trigger: self.auto_trigger.load(Ordering::Relaxed),
            debug: self.debug.load(Ordering::Relaxed),
        }
    }

    fn apply_config(&self, config: &ServerConfig) {
        self.auto_trigger.store(config.auto_trigger, Ordering::Relaxed);
        // The --debug flag cannot be switched off by the client
        self.debug.fetch_or(config.debug, Ordering::Relaxed);
    }

    /// Text of an open document, if any
    pub fn document_text(&self, uri: &Url) -> Option<String> {
        self.documents.get(uri).map(|doc| doc.text().to_string())
    }

    /// Last version the client reported for an open document
    pub fn document_version(&self, uri: &Url) -> Option<i32> {
        self.documents.get(uri).map(|doc| doc.version())
    }

    async fn log_debug(&self, message: &str) {
        tracing::debug!("{}", message);
        if self.debug.load(Ordering::Relaxed) {
            self.client
                .log_message(MessageType::INFO, format!("[DEBUG] {}", message))
                .await;
        }
    }
}

#[tower_lsp::async_trait]
impl LanguageServer for Backend {
    async fn initialize(&self, params: InitializeParams) -> Result<InitializeResult> {
        match ServerConfig::from_initialization_options(params.initialization_options.as_ref()) {
            Ok(config) => self.apply_config(&config),
            Err(err) => tracing::warn!("{}; using default settings", err),
        }

        self.log_debug(&format!("Initializing Vitalang LSP server with {:?}", self.config()))
            .await;

        Ok(InitializeResult {
            capabilities: capabilities::server_capabilities(),
            server_info: Some(ServerInfo {
                name: "vitalang-lsp".to_string(),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            }),
        })
    }

    async fn initialized(&self, _: InitializedParams) {
        tracing::info!("Vitalang LSP server initialized");
        self.client
            .log_message(MessageType::INFO, "Vitalang LSP server initialized")
            .await;
    }

    async fn shutdown(&self) -> Result<()> {
        self.log_debug("Shutting down server").await;
        Ok(())
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        let item = params.text_document;

        self.log_debug(&format!("Document opened: {}", item.uri)).await;

        let document = Document::new(item.text, item.language_id, item.version);
        self.documents.insert(item.uri, document);
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        let uri = params.text_document.uri;
        let version = params.text_document.version;

        let retrigger = match self.documents.get_mut(&uri) {
            Some(mut doc) => {
                let position =
                    handlers::trigger::retrigger_position(&self.engine, &doc, &params.content_changes);
                for change in &params.content_changes {
                    doc.apply_change(change);
                }
                doc.set_version(version);
                position
            }
            None => {
                tracing::warn!("Change for unknown document: {}", uri);
                return;
            }
        };

        self.log_debug(&format!("Document changed: {} (version {})", uri, version))
            .await;

        if let Some(position) = retrigger {
            if self.auto_trigger.load(Ordering::Relaxed) {
                self.log_debug(&format!("Retriggering suggestions at {:?}", position))
                    .await;
                self.client
                    .send_notification::<TriggerSuggest>(TriggerSuggestParams { uri, position })
                    .await;
            }
        }
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        let uri = params.text_document.uri;
        self.log_debug(&format!("Document closed: {}", uri)).await;
        self.documents.remove(&uri);
    }

    async fn completion(&self, params: CompletionParams) -> Result<Option<CompletionResponse>> {
        let uri = &params.text_document_position.text_document.uri;
        let position = params.text_document_position.position;

        self.log_debug(&format!("Completion request at {:?}", position))
            .await;

        let response = self
            .documents
            .get(uri)
            .map(|doc| handlers::completion::get_completions(&self.engine, &doc, position));

        Ok(response)
    }
}
