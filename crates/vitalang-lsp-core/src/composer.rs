//! Assembly of the suggestion list

use serde::Serialize;

use crate::context::CursorContext;
use crate::keywords::Keyword;
use crate::range::ReplacementRange;
use crate::scanner::ScannedIdentifiers;
use crate::sigil::SigilClass;

/// The kind of suggestion item
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum SuggestionKind {
    Keyword,
    Variable,
}

impl SuggestionKind {
    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            SuggestionKind::Keyword => "keyword",
            SuggestionKind::Variable => "variable",
        }
    }
}

/// One entry of the suggestion list
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SuggestionItem {
    /// Text shown in the list (variables are shown without their sigil)
    pub label: String,
    pub insert_text: String,
    pub kind: SuggestionKind,
    pub detail: String,
    /// `None` leaves the insertion range to the editor
    pub replacement_range: Option<ReplacementRange>,
    pub filter_text: String,
    pub sort_key: String,
}

impl SuggestionItem {
    pub fn keyword(keyword: &Keyword) -> Self {
        Self {
            label: keyword.literal.to_string(),
            insert_text: keyword.literal.to_string(),
            kind: SuggestionKind::Keyword,
            detail: format!("keyword ({})", keyword.role.as_str()),
            replacement_range: None,
            filter_text: keyword.literal.to_string(),
            sort_key: keyword.literal.to_string(),
        }
    }

    /// `token` is the full variable text, sigil included
    pub fn variable(token: &str, class: SigilClass, range: ReplacementRange) -> Self {
        let name = &token[class.as_char().len_utf8()..];
        Self {
            label: name.to_string(),
            insert_text: token.to_string(),
            kind: SuggestionKind::Variable,
            detail: format!("{} variable", class.as_str()),
            replacement_range: Some(range),
            filter_text: token.to_string(),
            sort_key: name.to_string(),
        }
    }

    /// Sigil class of a variable item
    pub fn sigil_class(&self) -> Option<SigilClass> {
        match self.kind {
            SuggestionKind::Variable => SigilClass::of_token(&self.insert_text),
            SuggestionKind::Keyword => None,
        }
    }
}

/// The complete answer to one completion request
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SuggestionResult {
    pub items: Vec<SuggestionItem>,
    /// Always false: the list never needs to be re-requested while typing
    pub is_incomplete: bool,
}

impl SuggestionResult {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Build the suggestion list for a context
///
/// Keywords come first in table order, then `$` variables, then `£`
/// variables, each in discovery order. `range` is applied to every variable.
pub fn compose_suggestions(
    context: CursorContext,
    keywords: &[Keyword],
    identifiers: &ScannedIdentifiers,
    range: ReplacementRange,
) -> SuggestionResult {
    let mut items = Vec::new();

    if context.allows_keywords() {
        items.extend(keywords.iter().map(SuggestionItem::keyword));
    }

    for class in SigilClass::ALL {
        if !context.allows_class(class) {
            continue;
        }
        items.extend(
            identifiers
                .of_class(class)
                .iter()
                .map(|token| SuggestionItem::variable(token, class, range)),
        );
    }

    SuggestionResult {
        items,
        is_incomplete: false,
    }
}
