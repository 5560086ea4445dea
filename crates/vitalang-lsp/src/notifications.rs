//! Custom notifications sent to the client

use serde::{Deserialize, Serialize};
use tower_lsp::lsp_types::notification::Notification;
use tower_lsp::lsp_types::{Position, Url};

/// Asks the client to open its suggestion list at a position
///
/// LSP has no standard way for a server to open completion, so editors
/// bind this to their own trigger-suggest command.
#[derive(Debug)]
pub enum TriggerSuggest {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriggerSuggestParams {
    pub uri: Url,
    pub position: Position,
}

impl Notification for TriggerSuggest {
    type Params = TriggerSuggestParams;
    const METHOD: &'static str = "vitalang/triggerSuggest";
}
