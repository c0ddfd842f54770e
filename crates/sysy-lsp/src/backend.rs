//! The `LanguageServer` implementation.
//!
//! Requests answer `null` for documents the client never opened. Position errors from the
//! IDE layer become `InvalidParams`; anything wrong with a notification is logged and
//! dropped.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};

use dashmap::DashMap;
use sysy_ide::{Document, OffsetEncoding, semantic_tokens_legend};
use tower_lsp_server::jsonrpc::{self, Result};
use tower_lsp_server::lsp_types::{
    CompletionOptions, CompletionParams, CompletionResponse, DidChangeTextDocumentParams,
    DidCloseTextDocumentParams, DidOpenTextDocumentParams, DocumentSymbolParams,
    DocumentSymbolResponse, GotoDefinitionParams, GotoDefinitionResponse, Hover, HoverParams,
    HoverProviderCapability, InitializeParams, InitializeResult, InitializedParams, Location,
    OneOf, ReferenceParams, SemanticTokensFullOptions, SemanticTokensOptions,
    SemanticTokensParams, SemanticTokensResult, SemanticTokensServerCapabilities,
    ServerCapabilities, ServerInfo, TextDocumentSyncCapability, TextDocumentSyncKind,
    TextDocumentSyncOptions, Uri, WorkDoneProgressOptions,
};
use tower_lsp_server::{Client, LanguageServer};

use crate::Exit;
use crate::config::ServerConfig;

/// What `initialize` settled for the rest of the session.
#[derive(Debug, Clone, Default)]
struct Settings {
    config: ServerConfig,
    encoding: OffsetEncoding,
}

/// State that outlives the service, read once the connection closes.
#[derive(Debug, Default)]
pub(crate) struct Session {
    shut_down: AtomicBool,
}

impl Session {
    pub(crate) fn exit_status(&self) -> Exit {
        if self.shut_down.load(Ordering::Acquire) {
            Exit::Clean
        } else {
            Exit::Unclean
        }
    }
}

pub struct Backend {
    client: Client,
    documents: DashMap<Uri, Document>,
    settings: OnceLock<Settings>,
    session: Arc<Session>,
}

fn invalid_params(err: sysy_ide::Error) -> jsonrpc::Error {
    jsonrpc::Error::invalid_params(err.to_string())
}

pub(crate) fn capabilities(encoding: OffsetEncoding) -> ServerCapabilities {
    ServerCapabilities {
        position_encoding: Some(encoding.to_lsp()),
        text_document_sync: Some(TextDocumentSyncCapability::Options(
            TextDocumentSyncOptions {
                open_close: Some(true),
                change: Some(TextDocumentSyncKind::INCREMENTAL),
                ..Default::default()
            },
        )),
        hover_provider: Some(HoverProviderCapability::Simple(true)),
        definition_provider: Some(OneOf::Left(true)),
        references_provider: Some(OneOf::Left(true)),
        completion_provider: Some(CompletionOptions::default()),
        document_symbol_provider: Some(OneOf::Left(true)),
        semantic_tokens_provider: Some(SemanticTokensServerCapabilities::SemanticTokensOptions(
            SemanticTokensOptions {
                work_done_progress_options: WorkDoneProgressOptions::default(),
                legend: semantic_tokens_legend(),
                range: Some(false),
                full: Some(SemanticTokensFullOptions::Bool(true)),
            },
        )),
        ..Default::default()
    }
}

impl Backend {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            documents: DashMap::new(),
            settings: OnceLock::new(),
            session: Arc::default(),
        }
    }

    pub(crate) fn session(&self) -> &Arc<Session> {
        &self.session
    }

    /// How the session ends if the connection closes now.
    pub fn exit_status(&self) -> Exit {
        self.session.exit_status()
    }

    fn settings(&self) -> Settings {
        self.settings.get().cloned().unwrap_or_default()
    }

    async fn publish_diagnostics(&self, uri: Uri) {
        let include_semantic = self.settings().config.semantic_diagnostics;
        // The map guard must not live across the send
        let computed = self
            .documents
            .get(&uri)
            .map(|doc| (doc.diagnostics(&uri, include_semantic), doc.version()));
        let Some((diagnostics, version)) = computed else {
            return;
        };
        match diagnostics {
            Ok(diagnostics) => {
                self.client
                    .publish_diagnostics(uri, diagnostics, Some(version))
                    .await;
            }
            Err(err) => tracing::warn!(uri = uri.as_str(), %err, "cannot compute diagnostics"),
        }
    }
}

impl LanguageServer for Backend {
    async fn initialize(&self, params: InitializeParams) -> Result<InitializeResult> {
        let offered = params
            .capabilities
            .general
            .and_then(|general| general.position_encodings)
            .unwrap_or_default();
        let settings = Settings {
            config: ServerConfig::from_initialization_options(params.initialization_options),
            encoding: OffsetEncoding::negotiate(&offered),
        };
        tracing::info!(encoding = ?settings.encoding, config = ?settings.config, "initialized");
        let capabilities = capabilities(settings.encoding);
        if self.settings.set(settings).is_err() {
            tracing::warn!("keeping the settings of the first initialize");
        }

        Ok(InitializeResult {
            capabilities,
            server_info: Some(ServerInfo {
                name: env!("CARGO_PKG_NAME").to_owned(),
                version: Some(env!("CARGO_PKG_VERSION").to_owned()),
            }),
        })
    }

    async fn initialized(&self, _: InitializedParams) {
        tracing::info!("client initialized");
    }

    async fn shutdown(&self) -> Result<()> {
        tracing::info!("shutdown requested");
        self.session.shut_down.store(true, Ordering::Release);
        Ok(())
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        let item = params.text_document;
        match Document::new(item.text, item.version, self.settings().encoding) {
            Ok(doc) => {
                tracing::debug!(uri = item.uri.as_str(), version = item.version, "opened");
                self.documents.insert(item.uri.clone(), doc);
                self.publish_diagnostics(item.uri).await;
            }
            Err(err) => tracing::warn!(uri = item.uri.as_str(), %err, "cannot open document"),
        }
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        let uri = params.text_document.uri;
        {
            let Some(mut doc) = self.documents.get_mut(&uri) else {
                tracing::warn!(uri = uri.as_str(), "change for a document that is not open");
                return;
            };
            for change in &params.content_changes {
                if let Err(err) = doc.apply_change(change.range, &change.text) {
                    // Later changes are relative to the rejected one
                    tracing::warn!(uri = uri.as_str(), %err, "rejected edit");
                    break;
                }
            }
            doc.set_version(params.text_document.version);
        }
        self.publish_diagnostics(uri).await;
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        let uri = params.text_document.uri;
        if self.documents.remove(&uri).is_none() {
            return;
        }
        tracing::debug!(uri = uri.as_str(), "closed");
        self.client.publish_diagnostics(uri, Vec::new(), None).await;
    }

    async fn hover(&self, params: HoverParams) -> Result<Option<Hover>> {
        let at = params.text_document_position_params;
        let max_length = self.settings().config.hover_max_length;
        let Some(doc) = self.documents.get(&at.text_document.uri) else {
            return Ok(None);
        };
        doc.hover(at.position, max_length).map_err(invalid_params)
    }

    async fn goto_definition(
        &self,
        params: GotoDefinitionParams,
    ) -> Result<Option<GotoDefinitionResponse>> {
        let at = params.text_document_position_params;
        let Some(doc) = self.documents.get(&at.text_document.uri) else {
            return Ok(None);
        };
        let definition = doc.find_definition(at.position).map_err(invalid_params)?;
        Ok(definition.map(|def| {
            GotoDefinitionResponse::Scalar(Location::new(at.text_document.uri.clone(), def.range))
        }))
    }

    async fn references(&self, params: ReferenceParams) -> Result<Option<Vec<Location>>> {
        let at = params.text_document_position;
        let Some(doc) = self.documents.get(&at.text_document.uri) else {
            return Ok(None);
        };
        let ranges = doc
            .references(at.position, params.context.include_declaration)
            .map_err(invalid_params)?;
        let locations = ranges
            .into_iter()
            .map(|range| Location::new(at.text_document.uri.clone(), range))
            .collect();
        Ok(Some(locations))
    }

    async fn completion(&self, params: CompletionParams) -> Result<Option<CompletionResponse>> {
        let at = params.text_document_position;
        let keywords = self.settings().config.keyword_completion;
        let Some(doc) = self.documents.get(&at.text_document.uri) else {
            return Ok(None);
        };
        let items = doc
            .completion(at.position, keywords)
            .map_err(invalid_params)?;
        Ok(Some(CompletionResponse::Array(items)))
    }

    async fn document_symbol(
        &self,
        params: DocumentSymbolParams,
    ) -> Result<Option<DocumentSymbolResponse>> {
        let Some(doc) = self.documents.get(&params.text_document.uri) else {
            return Ok(None);
        };
        let symbols = doc.document_symbols().map_err(invalid_params)?;
        Ok(Some(DocumentSymbolResponse::Nested(symbols)))
    }

    async fn semantic_tokens_full(
        &self,
        params: SemanticTokensParams,
    ) -> Result<Option<SemanticTokensResult>> {
        let Some(doc) = self.documents.get(&params.text_document.uri) else {
            return Ok(None);
        };
        let tokens = doc.semantic_tokens().map_err(invalid_params)?;
        Ok(Some(SemanticTokensResult::Tokens(tokens)))
    }
}
