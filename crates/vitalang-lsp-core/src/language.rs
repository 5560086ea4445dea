//! Lexical metadata editors need for Vitalang

use serde::Serialize;

/// Language-level settings handed to the host editor
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageConfiguration {
    pub language_id: &'static str,
    pub file_extensions: &'static [&'static str],
    /// Pattern describing one word, with an optional sigil prefix
    pub word_pattern: &'static str,
    pub line_comment: &'static str,
    pub block_comment: (&'static str, &'static str),
    /// Characters that open the suggestion list as soon as they are typed
    pub trigger_characters: &'static [&'static str],
}

pub static LANGUAGE: LanguageConfiguration = LanguageConfiguration {
    language_id: "vitalang",
    file_extensions: &[".vita"],
    word_pattern: r"[$£]?[A-Za-z_][A-Za-z0-9_]*",
    line_comment: "europe ->",
    block_comment: ("asia ->", "<- asia"),
    trigger_characters: &[
        "a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l", "m", "n", "o", "p", "q", "r",
        "s", "t", "u", "v", "w", "x", "y", "z", "A", "B", "C", "D", "E", "F", "G", "H", "I", "J",
        "K", "L", "M", "N", "O", "P", "Q", "R", "S", "T", "U", "V", "W", "X", "Y", "Z", "$", "£",
        ".",
    ],
};

impl LanguageConfiguration {
    pub fn trigger_characters(&self) -> Vec<String> {
        self.trigger_characters.iter().map(|s| s.to_string()).collect()
    }
}
