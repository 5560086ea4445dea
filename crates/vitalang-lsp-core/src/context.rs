//! Cursor context classification

use serde::Serialize;

use crate::sigil::SigilClass;

/// What the cursor is positioned on, as far as completion cares
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum CursorContext {
    /// Right after a sigil: only variables of that class make sense
    VariableOnly(SigilClass),
    /// Anywhere else: keywords and every variable
    General,
}

impl CursorContext {
    pub fn allows_keywords(&self) -> bool {
        matches!(self, CursorContext::General)
    }

    pub fn allows_class(&self, class: SigilClass) -> bool {
        match self {
            CursorContext::VariableOnly(only) => *only == class,
            CursorContext::General => true,
        }
    }
}

/// Classify the cursor from the line text before it
///
/// Only the character immediately before the cursor is inspected.
pub fn resolve_context(line_prefix: &str) -> CursorContext {
    match line_prefix.chars().next_back().and_then(SigilClass::from_char) {
        Some(class) => CursorContext::VariableOnly(class),
        None => CursorContext::General,
    }
}
