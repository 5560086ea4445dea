//! Discovery of sigil-prefixed variables in document text

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::sigil::SigilClass;

/// A variable is only recognised at the start of the text or after a
/// non-word character, so `foo$bar` does not yield `$bar`.
static VARIABLE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:^|[^A-Za-z0-9_])([$£][A-Za-z_][A-Za-z0-9_]*)")
        .expect("variable pattern is a valid regex")
});

/// One variable mention found in the text
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct IdentifierMatch<'a> {
    /// The mention including its sigil, e.g. `$total`
    pub text: &'a str,
    pub class: SigilClass,
    /// Byte offset of the sigil
    pub start: usize,
    /// Byte offset one past the last character
    pub end: usize,
}

impl IdentifierMatch<'_> {
    /// The variable name without its sigil
    pub fn name(&self) -> &str {
        let sigil_len = self.class.as_char().len_utf8();
        &self.text[sigil_len..]
    }
}

/// Distinct variables of each class, in the order they first appear
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ScannedIdentifiers {
    pub dollar: Vec<String>,
    pub pound: Vec<String>,
}

impl ScannedIdentifiers {
    pub fn of_class(&self, class: SigilClass) -> &[String] {
        match class {
            SigilClass::Dollar => &self.dollar,
            SigilClass::Pound => &self.pound,
        }
    }

    pub fn len(&self) -> usize {
        self.dollar.len() + self.pound.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dollar.is_empty() && self.pound.is_empty()
    }
}

/// Every variable mention in `text`, left to right, duplicates included
pub fn find_identifiers(text: &str) -> Vec<IdentifierMatch<'_>> {
    VARIABLE_PATTERN
        .captures_iter(text)
        .filter_map(|caps| {
            let m = caps.get(1)?;
            let class = SigilClass::of_token(m.as_str())?;
            Some(IdentifierMatch {
                text: m.as_str(),
                class,
                start: m.start(),
                end: m.end(),
            })
        })
        .collect()
}

/// Distinct variables used in `text`, partitioned by sigil class
pub fn scan_identifiers(text: &str) -> ScannedIdentifiers {
    let mut seen = HashSet::new();
    let mut scanned = ScannedIdentifiers::default();

    for found in find_identifiers(text) {
        if !seen.insert(found.text) {
            continue;
        }
        match found.class {
            SigilClass::Dollar => scanned.dollar.push(found.text.to_string()),
            SigilClass::Pound => scanned.pound.push(found.text.to_string()),
        }
    }

    scanned
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document() {
        let scanned = scan_identifiers("");
        assert!(scanned.is_empty());
        assert!(find_identifiers("").is_empty());
    }

    #[test]
    fn test_duplicates_collapse() {
        let scanned = scan_identifiers("$foo and lease it to $foo\nsweet $foo");
        assert_eq!(scanned.dollar, vec!["$foo"]);
        assert!(scanned.pound.is_empty());
    }

    #[test]
    fn test_partition_by_class_in_discovery_order() {
        let scanned = scan_identifiers("£zeta $beta £alpha $alpha");
        assert_eq!(scanned.dollar, vec!["$beta", "$alpha"]);
        assert_eq!(scanned.pound, vec!["£zeta", "£alpha"]);
        assert_eq!(scanned.len(), 4);
    }

    #[test]
    fn test_same_name_different_sigils_are_distinct() {
        let scanned = scan_identifiers("$x £x");
        assert_eq!(scanned.of_class(SigilClass::Dollar), &["$x".to_string()]);
        assert_eq!(scanned.of_class(SigilClass::Pound), &["£x".to_string()]);
    }

    #[test]
    fn test_case_sensitive() {
        let scanned = scan_identifiers("$Name $name");
        assert_eq!(scanned.dollar, vec!["$Name", "$name"]);
    }

    #[test]
    fn test_digits_and_underscores_after_first_char() {
        let scanned = scan_identifiers("$_tmp $a1_b2 $9lives");
        assert_eq!(scanned.dollar, vec!["$_tmp", "$a1_b2"]);
    }

    #[test]
    fn test_sigil_glued_to_word_is_ignored() {
        let scanned = scan_identifiers("foo$bar 12£baz _$qux");
        assert!(scanned.is_empty(), "{:?}", scanned);
    }

    #[test]
    fn test_punctuation_before_sigil() {
        let scanned = scan_identifiers("($a,£b)\n$c;");
        assert_eq!(scanned.dollar, vec!["$a", "$c"]);
        assert_eq!(scanned.pound, vec!["£b"]);
    }

    #[test]
    fn test_adjacent_variables_match_left_to_right() {
        // The `$` of `$b` directly follows the word character `a`
        let scanned = scan_identifiers("$a$b");
        assert_eq!(scanned.dollar, vec!["$a"]);

        let scanned = scan_identifiers("$$a");
        assert_eq!(scanned.dollar, vec!["$a"]);
    }

    #[test]
    fn test_match_positions_are_byte_offsets() {
        let text = "x £ab $cd";
        let found = find_identifiers(text);
        assert_eq!(found.len(), 2);

        assert_eq!(found[0].text, "£ab");
        assert_eq!(found[0].class, SigilClass::Pound);
        assert_eq!(&text[found[0].start..found[0].end], "£ab");
        assert_eq!(found[0].name(), "ab");

        assert_eq!(found[1].text, "$cd");
        assert_eq!(found[1].start, 7);
        assert_eq!(found[1].name(), "cd");
    }

    #[test]
    fn test_bare_sigils_are_not_variables() {
        assert!(scan_identifiers("$ £ $1 £-").is_empty());
    }
}
