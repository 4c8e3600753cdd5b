//! Lexer (tokenizer) for Sanskritam source code
//!
//! Converts raw source text into a flat [`Token`] stream consumed by both the
//! statement interpreter and the code generator. The scan never aborts:
//! unexpected characters are recorded as [`SanskritamError`]s and skipped, so
//! a single pass can surface every lexical problem in the file.
//!
//! Both scripts are handled in one scan. Devanagari digits are normalized to
//! their ASCII equivalents at lex time; the token does not remember which
//! numeral script produced it.

use std::fmt;

use serde::Serialize;

use crate::keywords;

/// Token categories produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TokenKind {
    Keyword,
    Identifier,
    Number,
    String,
    Operator,
    Punctuation,
}

/// One lexed token. Immutable once produced.
///
/// `line` and `column` are 1-based and point at the token's first character.
/// For `Number` tokens, `text` holds the decimal-normalized spelling; for
/// `String` tokens it holds the contents without the surrounding quotes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub line: usize,
    pub column: usize,
}

impl Token {
    fn new(kind: TokenKind, text: impl Into<String>, line: usize, column: usize) -> Self {
        Token {
            kind,
            text: text.into(),
            line,
            column,
        }
    }

    /// Keyword role of this token, if it is a keyword.
    pub fn role(&self) -> Option<keywords::KeywordRole> {
        if self.kind == TokenKind::Keyword {
            keywords::role_of(&self.text)
        } else {
            None
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Keyword => write!(f, "keyword '{}'", self.text),
            TokenKind::Identifier => write!(f, "identifier '{}'", self.text),
            TokenKind::Number => write!(f, "number {}", self.text),
            TokenKind::String => write!(f, "string \"{}\"", self.text),
            TokenKind::Operator => write!(f, "'{}'", self.text),
            TokenKind::Punctuation => write!(f, "'{}'", self.text),
        }
    }
}

/// Lexical error: the only error kind this engine reports.
///
/// Errors are collected, not thrown — lexing continues past each one.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SanskritamError {
    pub line: usize,
    pub column: usize,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offending_word: Option<String>,
}

impl fmt::Display for SanskritamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Lexical error at line {}, column {}: {}",
            self.line, self.column, self.message
        )
    }
}

impl std::error::Error for SanskritamError {}

/// Single-character operators; `= < > !` combine with a following `=`.
const OPERATOR_CHARS: &[char] = &['+', '-', '*', '/', '%', '=', '<', '>', '!', '&', '|'];

/// Fixed translation table for the Devanagari digit block.
const DEVANAGARI_DIGITS: [(char, char); 10] = [
    ('०', '0'),
    ('१', '1'),
    ('२', '2'),
    ('३', '3'),
    ('४', '4'),
    ('५', '5'),
    ('६', '6'),
    ('७', '7'),
    ('८', '8'),
    ('९', '9'),
];

fn to_ascii_digit(ch: char) -> Option<char> {
    if ch.is_ascii_digit() {
        return Some(ch);
    }
    DEVANAGARI_DIGITS
        .iter()
        .find(|(deva, _)| *deva == ch)
        .map(|(_, ascii)| *ascii)
}

fn is_digit(ch: char) -> bool {
    to_ascii_digit(ch).is_some()
}

fn is_devanagari(ch: char) -> bool {
    ('\u{0900}'..='\u{097F}').contains(&ch)
}

/// Word-start characters. Devanagari digits never reach this check because
/// the digit branch runs first in the scan.
fn is_word_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_' || is_devanagari(ch)
}

fn is_word_continue(ch: char) -> bool {
    is_word_start(ch) || ch.is_ascii_digit()
}

/// Lexer for Sanskritam source code
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    line: usize,
    column: usize,
}

impl Lexer {
    /// Create a new lexer for the given source string.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Tokenize the entire input, collecting errors instead of aborting.
    pub fn tokenize(&mut self) -> (Vec<Token>, Vec<SanskritamError>) {
        let mut tokens = Vec::new();
        let mut errors = Vec::new();

        loop {
            self.skip_whitespace_and_comments();

            if self.is_at_end() {
                break;
            }

            let line = self.line;
            let column = self.column;
            let ch = match self.advance() {
                Some(ch) => ch,
                None => break,
            };

            if ch == '"' {
                tokens.push(self.string_literal(line, column));
            } else if is_digit(ch) {
                tokens.push(self.number_literal(ch, line, column));
            } else if is_word_start(ch) {
                tokens.push(self.word(ch, line, column));
            } else if OPERATOR_CHARS.contains(&ch) {
                tokens.push(self.operator(ch, line, column));
            } else if ch == '(' || ch == ')' || ch == ',' {
                tokens.push(Token::new(TokenKind::Punctuation, ch, line, column));
            } else {
                // Record and keep scanning; lexing never aborts on error.
                errors.push(SanskritamError {
                    line,
                    column,
                    message: format!("Unexpected character: '{}'", ch),
                    offending_word: Some(ch.to_string()),
                });
            }
        }

        (tokens, errors)
    }

    /// Parse string literal. No escape sequences; an unterminated string
    /// silently consumes to end of input.
    fn string_literal(&mut self, line: usize, column: usize) -> Token {
        let mut string = String::new();

        while let Some(ch) = self.peek() {
            self.advance();
            if ch == '"' {
                break;
            }
            string.push(ch);
        }

        Token::new(TokenKind::String, string, line, column)
    }

    /// Parse numeric literal: digit run in either numeral script, plus an
    /// embedded `.`. Devanagari digits are stored as their ASCII equivalents.
    fn number_literal(&mut self, first_digit: char, line: usize, column: usize) -> Token {
        let mut num_str = String::new();
        // to_ascii_digit is total over the digit branch
        num_str.push(to_ascii_digit(first_digit).unwrap_or(first_digit));

        while let Some(ch) = self.peek() {
            if let Some(ascii) = to_ascii_digit(ch) {
                num_str.push(ascii);
                self.advance();
            } else if ch == '.' {
                num_str.push('.');
                self.advance();
            } else {
                break;
            }
        }

        Token::new(TokenKind::Number, num_str, line, column)
    }

    /// Parse a word: keyword if it matches either surface form in the
    /// keyword table, identifier otherwise.
    fn word(&mut self, first_char: char, line: usize, column: usize) -> Token {
        let mut word = String::new();
        word.push(first_char);

        while let Some(ch) = self.peek() {
            if is_word_continue(ch) {
                word.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        let kind = if keywords::is_keyword(&word) {
            TokenKind::Keyword
        } else {
            TokenKind::Identifier
        };

        Token::new(kind, word, line, column)
    }

    /// Parse an operator; `= < > !` followed by `=` form a two-character
    /// token (`==`, `<=`, `>=`, `!=`). No other combinations are recognized.
    fn operator(&mut self, first_char: char, line: usize, column: usize) -> Token {
        let mut op = String::new();
        op.push(first_char);

        if matches!(first_char, '=' | '<' | '>' | '!') && self.peek() == Some('=') {
            self.advance();
            op.push('=');
        }

        Token::new(TokenKind::Operator, op, line, column)
    }

    /// Skip whitespace and `//` line comments
    fn skip_whitespace_and_comments(&mut self) {
        loop {
            match self.peek() {
                Some(ch) if ch.is_whitespace() => {
                    self.advance();
                }
                Some('/') if self.peek_ahead(1) == Some('/') => {
                    self.skip_line_comment();
                }
                _ => break,
            }
        }
    }

    /// Skip single-line comment (// ...)
    fn skip_line_comment(&mut self) {
        while let Some(ch) = self.peek() {
            self.advance();
            if ch == '\n' {
                break;
            }
        }
    }

    /// Peek at current character without consuming
    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    /// Peek ahead n characters
    fn peek_ahead(&self, n: usize) -> Option<char> {
        self.input.get(self.position + n).copied()
    }

    /// Advance to next character, tracking line and column
    fn advance(&mut self) -> Option<char> {
        let ch = self.input.get(self.position).copied()?;
        self.position += 1;

        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Some(ch)
    }

    /// Check if at end of input
    fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(source: &str) -> (Vec<Token>, Vec<SanskritamError>) {
        Lexer::new(source).tokenize()
    }

    #[test]
    fn test_simple_statement() {
        let (tokens, errors) = lex("mulyam x = 10");
        assert!(errors.is_empty());

        assert_eq!(tokens[0].kind, TokenKind::Keyword);
        assert_eq!(tokens[0].text, "mulyam");
        assert_eq!(tokens[1].kind, TokenKind::Identifier);
        assert_eq!(tokens[1].text, "x");
        assert_eq!(tokens[2].kind, TokenKind::Operator);
        assert_eq!(tokens[2].text, "=");
        assert_eq!(tokens[3].kind, TokenKind::Number);
        assert_eq!(tokens[3].text, "10");
    }

    #[test]
    fn test_devanagari_statement() {
        let (tokens, errors) = lex("मूल्यम् फल = ५");
        assert!(errors.is_empty());

        assert_eq!(tokens[0].kind, TokenKind::Keyword);
        assert_eq!(tokens[0].text, "मूल्यम्");
        assert_eq!(tokens[1].kind, TokenKind::Identifier);
        assert_eq!(tokens[3].kind, TokenKind::Number);
        assert_eq!(tokens[3].text, "5");
    }

    #[test]
    fn test_digit_normalization_round_trip() {
        let (deva, _) = lex("५");
        let (ascii, _) = lex("5");
        assert_eq!(deva[0].text, ascii[0].text);
        assert_eq!(deva[0].text, "5");
    }

    #[test]
    fn test_decimal_number() {
        let (tokens, errors) = lex("३.१४");
        assert!(errors.is_empty());
        assert_eq!(tokens[0].kind, TokenKind::Number);
        assert_eq!(tokens[0].text, "3.14");
    }

    #[test]
    fn test_two_char_operators() {
        let (tokens, errors) = lex("== <= >= != = < >");
        assert!(errors.is_empty());

        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["==", "<=", ">=", "!=", "=", "<", ">"]);
        assert!(tokens.iter().all(|t| t.kind == TokenKind::Operator));
    }

    #[test]
    fn test_comments_and_whitespace_only() {
        let (tokens, errors) = lex("  // nothing here\n\t// or here\n");
        assert!(tokens.is_empty());
        assert!(errors.is_empty());
    }

    #[test]
    fn test_comment_consumed_to_end_of_line() {
        let (tokens, errors) = lex("vadatu 1 // vadatu 2\nvadatu 3");
        assert!(errors.is_empty());
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["vadatu", "1", "vadatu", "3"]);
    }

    #[test]
    fn test_string_literal() {
        let (tokens, errors) = lex("vadatu \"namaste\"");
        assert!(errors.is_empty());
        assert_eq!(tokens[1].kind, TokenKind::String);
        assert_eq!(tokens[1].text, "namaste");
    }

    #[test]
    fn test_unterminated_string_consumes_to_end() {
        // Known limitation: no error is reported, the rest of the input
        // becomes the string contents.
        let (tokens, errors) = lex("vadatu \"open 1 2");
        assert!(errors.is_empty());
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[1].kind, TokenKind::String);
        assert_eq!(tokens[1].text, "open 1 2");
    }

    #[test]
    fn test_unexpected_character_is_collected_not_fatal() {
        let (tokens, errors) = lex("mulyam x = 1\n@ mulyam y = 2");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].line, 2);
        assert_eq!(errors[0].column, 1);
        assert_eq!(errors[0].offending_word.as_deref(), Some("@"));

        // Scanning continued past the error
        assert!(tokens.iter().any(|t| t.text == "y"));
    }

    #[test]
    fn test_multiple_errors_in_one_pass() {
        let (_, errors) = lex("@ # $");
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_line_and_column_tracking() {
        let (tokens, _) = lex("vadatu 1\n  vadatu 2");
        assert_eq!(tokens[0].line, 1);
        assert_eq!(tokens[0].column, 1);
        assert_eq!(tokens[2].line, 2);
        assert_eq!(tokens[2].column, 3);
        assert_eq!(tokens[3].line, 2);
        assert_eq!(tokens[3].column, 10);
    }

    #[test]
    fn test_punctuation() {
        let (tokens, errors) = lex("(a, b)");
        assert!(errors.is_empty());
        assert_eq!(tokens[0].kind, TokenKind::Punctuation);
        assert_eq!(tokens[2].kind, TokenKind::Punctuation);
        assert_eq!(tokens[2].text, ",");
        assert_eq!(tokens[4].kind, TokenKind::Punctuation);
    }
}
