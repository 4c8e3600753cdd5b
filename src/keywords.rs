//! Keyword table for the Sanskritam language
//!
//! Every keyword has two surface forms — a Roman transliteration and a
//! Devanagari spelling — mapped to one semantic [`KeywordRole`]. The table is
//! loaded once into an immutable lookup structure; lookups always check both
//! forms, regardless of the requested [`ScriptMode`].

use std::fmt;
use std::sync::OnceLock;

use rustc_hash::FxHashMap;
use serde::Serialize;

/// Which surface alphabet the caller is editing in.
///
/// Does not change program semantics — keyword matching accepts both scripts
/// in either mode. Carried through so diagnostics can name the script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScriptMode {
    Roman,
    Devanagari,
}

impl fmt::Display for ScriptMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptMode::Roman => write!(f, "Roman"),
            ScriptMode::Devanagari => write!(f, "Devanagari"),
        }
    }
}

/// Semantic category of a keyword, independent of surface form.
///
/// The interpreter executes only a subset of these (declaration, print,
/// conditional, block end). The rest are recognized by the lexer and rendered
/// by the code generator but consumed without effect at execution time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum KeywordRole {
    Value,
    Print,
    If,
    Then,
    Else,
    End,
    True,
    False,
    Null,
    While,
    For,
    Function,
    Return,
    Break,
    Continue,
    Try,
    Catch,
    Throw,
    Class,
    Import,
}

/// One keyword: both surface spellings plus the role they map to.
#[derive(Debug, Clone, Copy)]
pub struct KeywordEntry {
    pub roman: &'static str,
    pub devanagari: &'static str,
    pub role: KeywordRole,
}

/// The full keyword table. Static, never mutated at runtime.
pub const KEYWORDS: &[KeywordEntry] = &[
    KeywordEntry { roman: "mulyam", devanagari: "मूल्यम्", role: KeywordRole::Value },
    KeywordEntry { roman: "vadatu", devanagari: "वदतु", role: KeywordRole::Print },
    KeywordEntry { roman: "yadi", devanagari: "यदि", role: KeywordRole::If },
    KeywordEntry { roman: "tarhi", devanagari: "तर्हि", role: KeywordRole::Then },
    KeywordEntry { roman: "anyatha", devanagari: "अन्यथा", role: KeywordRole::Else },
    KeywordEntry { roman: "samaptam", devanagari: "समाप्तम्", role: KeywordRole::End },
    KeywordEntry { roman: "satyam", devanagari: "सत्यम्", role: KeywordRole::True },
    KeywordEntry { roman: "asatyam", devanagari: "असत्यम्", role: KeywordRole::False },
    KeywordEntry { roman: "shunyam", devanagari: "शून्यम्", role: KeywordRole::Null },
    KeywordEntry { roman: "yavat", devanagari: "यावत्", role: KeywordRole::While },
    KeywordEntry { roman: "krte", devanagari: "कृते", role: KeywordRole::For },
    KeywordEntry { roman: "karyam", devanagari: "कार्यम्", role: KeywordRole::Function },
    KeywordEntry { roman: "phalam", devanagari: "फलम्", role: KeywordRole::Return },
    KeywordEntry { roman: "viram", devanagari: "विरम", role: KeywordRole::Break },
    KeywordEntry { roman: "agre", devanagari: "अग्रे", role: KeywordRole::Continue },
    KeywordEntry { roman: "prayatna", devanagari: "प्रयत्न", role: KeywordRole::Try },
    KeywordEntry { roman: "grahana", devanagari: "ग्रहण", role: KeywordRole::Catch },
    KeywordEntry { roman: "kshipatu", devanagari: "क्षिपतु", role: KeywordRole::Throw },
    KeywordEntry { roman: "varga", devanagari: "वर्ग", role: KeywordRole::Class },
    KeywordEntry { roman: "anayatu", devanagari: "आनयतु", role: KeywordRole::Import },
];

static LOOKUP: OnceLock<FxHashMap<&'static str, KeywordRole>> = OnceLock::new();

fn lookup() -> &'static FxHashMap<&'static str, KeywordRole> {
    LOOKUP.get_or_init(|| {
        let mut map = FxHashMap::default();
        for entry in KEYWORDS {
            map.insert(entry.roman, entry.role);
            map.insert(entry.devanagari, entry.role);
        }
        map
    })
}

/// Resolve a word to its keyword role, checking both surface forms.
pub fn role_of(word: &str) -> Option<KeywordRole> {
    lookup().get(word).copied()
}

/// True if the word is a keyword in either script.
pub fn is_keyword(word: &str) -> bool {
    lookup().contains_key(word)
}

/// True if the word is one of the two surface forms of `role`.
pub fn matches_role(word: &str, role: KeywordRole) -> bool {
    role_of(word) == Some(role)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_forms_resolve_to_same_role() {
        assert_eq!(role_of("mulyam"), Some(KeywordRole::Value));
        assert_eq!(role_of("मूल्यम्"), Some(KeywordRole::Value));
        assert_eq!(role_of("vadatu"), Some(KeywordRole::Print));
        assert_eq!(role_of("वदतु"), Some(KeywordRole::Print));
    }

    #[test]
    fn test_non_keywords_are_rejected() {
        assert_eq!(role_of("x"), None);
        assert_eq!(role_of("mulya"), None);
        assert!(!is_keyword("value"));
    }

    #[test]
    fn test_every_entry_resolves_in_both_scripts() {
        for entry in KEYWORDS {
            assert_eq!(role_of(entry.roman), Some(entry.role));
            assert_eq!(role_of(entry.devanagari), Some(entry.role));
        }
    }
}
