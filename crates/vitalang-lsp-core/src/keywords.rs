//! Vitalang keyword table
//! Every keyword is a fixed phrase; the table order is the order keywords are offered in

use serde::Serialize;

/// A keyword phrase together with the grammatical role it plays
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Keyword {
    pub literal: &'static str,
    pub role: KeywordRole,
}

/// Grammatical role of a keyword, mirroring the lexer's token types
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum KeywordRole {
    Define,
    Assign,
    EndOfAssign,
    If,
    Else,
    ElseIf,
    For,
    While,
    Break,
    Continue,
    Yield,
    Import,
    ImportAll,
    Try,
    Catch,
    Comment,
    BlockCommentStart,
    BlockCommentEnd,
}

impl KeywordRole {
    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            KeywordRole::Define => "define",
            KeywordRole::Assign => "assign",
            KeywordRole::EndOfAssign => "end of assign",
            KeywordRole::If => "if",
            KeywordRole::Else => "else",
            KeywordRole::ElseIf => "else if",
            KeywordRole::For => "for",
            KeywordRole::While => "while",
            KeywordRole::Break => "break",
            KeywordRole::Continue => "continue",
            KeywordRole::Yield => "yield",
            KeywordRole::Import => "import",
            KeywordRole::ImportAll => "import all",
            KeywordRole::Try => "try",
            KeywordRole::Catch => "catch",
            KeywordRole::Comment => "line comment",
            KeywordRole::BlockCommentStart => "block comment start",
            KeywordRole::BlockCommentEnd => "block comment end",
        }
    }
}

const fn kw(literal: &'static str, role: KeywordRole) -> Keyword {
    Keyword { literal, role }
}

/// All Vitalang keywords
pub static KEYWORDS: [Keyword; 18] = [
    kw("I would love to own a plot of land in the 1800s called", KeywordRole::Define),
    kw("and lease it to", KeywordRole::Assign),
    kw("sweet but stout", KeywordRole::ElseIf),
    kw("American", KeywordRole::ImportAll),
    kw("owners", KeywordRole::EndOfAssign),
    kw("scammy", KeywordRole::Import),
    kw("sweet", KeywordRole::If),
    kw("stout", KeywordRole::Else),
    kw("lolsie", KeywordRole::For),
    kw("yarp'", KeywordRole::While),
    kw("jump off the bandwagon", KeywordRole::Break),
    kw("get back to work boy", KeywordRole::Continue),
    kw("anywho", KeywordRole::Yield),
    kw("sir, would there happen to be any extension work?", KeywordRole::Try),
    kw("yay, homework!", KeywordRole::Catch),
    kw("europe ->", KeywordRole::Comment),
    kw("asia ->", KeywordRole::BlockCommentStart),
    kw("<- asia", KeywordRole::BlockCommentEnd),
];

/// Look up the keyword playing a given role
pub fn keyword_for(role: KeywordRole) -> Option<&'static Keyword> {
    KEYWORDS.iter().find(|k| k.role == role)
}
