//! Replacement range calculation
//!
//! When a suggestion is accepted, the editor overwrites whatever part of it
//! the user already typed. The span is chosen by a fixed chain of rules; the
//! first rule that produces a range wins and the last one always does.
//!
//! All columns are counted in characters, not bytes.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::language::LANGUAGE;
use crate::sigil::{is_sigil, is_word_char};

static PREFIX_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[$£]?[A-Za-z_][A-Za-z0-9_]*$").expect("prefix pattern is a valid regex")
});

static WORD_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(LANGUAGE.word_pattern).expect("word pattern is a valid regex"));

/// Span of text on a single line that an inserted suggestion replaces
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct ReplacementRange {
    pub start_line: u32,
    pub start_column: u32,
    pub end_line: u32,
    pub end_column: u32,
}

impl ReplacementRange {
    pub fn on_line(line: u32, start_column: usize, end_column: usize) -> Self {
        Self {
            start_line: line,
            start_column: start_column as u32,
            end_line: line,
            end_column: end_column as u32,
        }
    }

    /// Zero-width range: nothing is overwritten
    pub fn empty_at(line: u32, column: usize) -> Self {
        Self::on_line(line, column, column)
    }

    pub fn is_empty(&self) -> bool {
        self.start_line == self.end_line && self.start_column == self.end_column
    }

    pub fn len(&self) -> usize {
        self.end_column.saturating_sub(self.start_column) as usize
    }
}

/// A cursor on one line of text
#[derive(Clone, Copy, Debug)]
pub struct LineCursor<'a> {
    line_text: &'a str,
    line: u32,
    column: usize,
}

impl<'a> LineCursor<'a> {
    /// `column` past the end of the line is clamped to the line's end
    pub fn new(line_text: &'a str, line: u32, column: usize) -> Self {
        let column = column.min(line_text.chars().count());
        Self {
            line_text,
            line,
            column,
        }
    }

    pub fn line_text(&self) -> &'a str {
        self.line_text
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }

    /// Line text before the cursor
    pub fn prefix(&self) -> &'a str {
        &self.line_text[..byte_offset(self.line_text, self.column)]
    }

    fn range_to_cursor(&self, start_column: usize) -> ReplacementRange {
        ReplacementRange::on_line(self.line, start_column, self.column)
    }
}

/// The rules of the range chain, in evaluation order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum RangeRule {
    /// Nearest sigil on the line, followed only by word characters
    ActiveSigil,
    /// An identifier ending exactly at the cursor
    BarePrefix,
    /// A word touching the cursor, clipped at the cursor
    ///
    /// Any word that starts before the cursor is already taken by
    /// `BarePrefix`, so within the chain this rule only ever yields a
    /// zero-width range at the start of a word under the cursor.
    WordAtCursor,
    /// Nothing to overwrite
    Insertion,
}

impl RangeRule {
    pub const ORDER: [RangeRule; 4] = [
        RangeRule::ActiveSigil,
        RangeRule::BarePrefix,
        RangeRule::WordAtCursor,
        RangeRule::Insertion,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RangeRule::ActiveSigil => "active-sigil",
            RangeRule::BarePrefix => "bare-prefix",
            RangeRule::WordAtCursor => "word-at-cursor",
            RangeRule::Insertion => "insertion",
        }
    }

    pub fn apply(&self, cursor: &LineCursor<'_>) -> Option<ReplacementRange> {
        match self {
            RangeRule::ActiveSigil => active_sigil(cursor),
            RangeRule::BarePrefix => bare_prefix(cursor),
            RangeRule::WordAtCursor => word_at_cursor(cursor),
            RangeRule::Insertion => Some(ReplacementRange::empty_at(cursor.line, cursor.column)),
        }
    }
}

/// Range a suggestion inserted at `cursor` should overwrite
pub fn replacement_range(cursor: &LineCursor<'_>) -> ReplacementRange {
    resolve_range(cursor).1
}

/// Like [`replacement_range`], also reporting which rule produced the range
pub fn resolve_range(cursor: &LineCursor<'_>) -> (RangeRule, ReplacementRange) {
    RangeRule::ORDER
        .iter()
        .find_map(|rule| rule.apply(cursor).map(|range| (*rule, range)))
        .unwrap_or((
            RangeRule::Insertion,
            ReplacementRange::empty_at(cursor.line, cursor.column),
        ))
}

// When several sigils precede the cursor only the nearest one is examined.
fn active_sigil(cursor: &LineCursor<'_>) -> Option<ReplacementRange> {
    let chars: Vec<char> = cursor.prefix().chars().collect();
    let sigil_at = chars.iter().rposition(|c| is_sigil(*c))?;

    if chars[sigil_at + 1..].iter().all(|c| is_word_char(*c)) {
        Some(cursor.range_to_cursor(sigil_at))
    } else {
        None
    }
}

fn bare_prefix(cursor: &LineCursor<'_>) -> Option<ReplacementRange> {
    let prefix = cursor.prefix();
    let found = PREFIX_PATTERN.find(prefix)?;
    Some(cursor.range_to_cursor(char_column(prefix, found.start())))
}

fn word_at_cursor(cursor: &LineCursor<'_>) -> Option<ReplacementRange> {
    let text = cursor.line_text;
    WORD_PATTERN.find_iter(text).find_map(|word| {
        let start = char_column(text, word.start());
        let end = char_column(text, word.end());
        (start <= cursor.column && cursor.column <= end).then(|| cursor.range_to_cursor(start))
    })
}

fn byte_offset(text: &str, column: usize) -> usize {
    text.char_indices()
        .nth(column)
        .map(|(offset, _)| offset)
        .unwrap_or(text.len())
}

fn char_column(text: &str, byte_offset: usize) -> usize {
    text[..byte_offset].chars().count()
}
