//! Expression evaluator
//!
//! Resolves a span of tokens from one source line into a [`Value`].
//! Reduction is strictly left-to-right with no operator precedence:
//! `2 + 3 * 4` is 20, not 14.
//!
//! The evaluator never fails to its caller. Any malformed span, unsupported
//! operator, or type mismatch degrades to numeric zero — including lookups of
//! identifiers that were never bound. The debugger-facing contract depends on
//! this: execution always proceeds to the end of the program.

use crate::keywords::KeywordRole;
use crate::lexer::{Token, TokenKind};
use crate::runtime::environment::Environment;
use crate::runtime::value::Value;

/// Evaluate a token span into a value. Empty span yields null.
pub fn evaluate(tokens: &[Token], env: &Environment) -> Value {
    match tokens {
        [] => Value::Null,
        [single] => literal_or_lookup(single, env),
        _ => reduce(tokens, env).unwrap_or(Value::Number(0.0)),
    }
}

/// Single-token resolution, with the literal fallback chain for words:
/// environment binding, then the TRUE / FALSE / NULL keyword forms, then
/// numeric zero for anything unknown.
fn literal_or_lookup(token: &Token, env: &Environment) -> Value {
    match token.kind {
        TokenKind::Number => Value::Number(parse_number(&token.text)),
        TokenKind::String => Value::Str(token.text.clone()),
        TokenKind::Identifier | TokenKind::Keyword => {
            if let Some(value) = env.get(&token.text) {
                return value.clone();
            }
            match crate::keywords::role_of(&token.text) {
                Some(KeywordRole::True) => Value::Bool(true),
                Some(KeywordRole::False) => Value::Bool(false),
                Some(KeywordRole::Null) => Value::Null,
                _ => Value::Number(0.0),
            }
        }
        _ => Value::Number(0.0),
    }
}

/// Primitive value of a token inside a reduction: number, string, or an
/// environment lookup that silently becomes zero when the name is absent.
fn primitive(token: &Token, env: &Environment) -> Value {
    match token.kind {
        TokenKind::Number => Value::Number(parse_number(&token.text)),
        TokenKind::String => Value::Str(token.text.clone()),
        TokenKind::Identifier | TokenKind::Keyword => env
            .get(&token.text)
            .cloned()
            .unwrap_or(Value::Number(0.0)),
        _ => Value::Number(0.0),
    }
}

/// Left-to-right reduction: start from token 0, then repeatedly take the
/// next (operator, operand) pair. `None` means the whole span degrades to
/// zero.
fn reduce(tokens: &[Token], env: &Environment) -> Option<Value> {
    let mut acc = primitive(&tokens[0], env);
    let mut i = 1;

    while i < tokens.len() {
        let op = &tokens[i];
        let operand = tokens.get(i + 1)?;
        if op.kind != TokenKind::Operator {
            return None;
        }
        acc = apply(&acc, &op.text, &primitive(operand, env))?;
        i += 2;
    }

    Some(acc)
}

/// Apply one binary operator. Only `+ - * /` and `== < > <= >=` are
/// evaluated; everything else (including `%`, `!=` and the logical
/// operators the lexer accepts) is unsupported here and degrades the span
/// to zero.
fn apply(lhs: &Value, op: &str, rhs: &Value) -> Option<Value> {
    match op {
        "+" => add(lhs, rhs),
        "-" => Some(Value::Number(lhs.as_number()? - rhs.as_number()?)),
        "*" => Some(Value::Number(lhs.as_number()? * rhs.as_number()?)),
        // Division follows IEEE float semantics; x / 0 is infinity, not an error
        "/" => Some(Value::Number(lhs.as_number()? / rhs.as_number()?)),
        "==" => Some(Value::Bool(values_equal(lhs, rhs))),
        "<" => Some(Value::Bool(lhs.as_number()? < rhs.as_number()?)),
        ">" => Some(Value::Bool(lhs.as_number()? > rhs.as_number()?)),
        "<=" => Some(Value::Bool(lhs.as_number()? <= rhs.as_number()?)),
        ">=" => Some(Value::Bool(lhs.as_number()? >= rhs.as_number()?)),
        _ => None,
    }
}

/// `+` adds numbers and concatenates when either side is a string.
fn add(lhs: &Value, rhs: &Value) -> Option<Value> {
    match (lhs, rhs) {
        (Value::Number(a), Value::Number(b)) => Some(Value::Number(a + b)),
        (Value::Str(_), _) | (_, Value::Str(_)) => {
            Some(Value::Str(format!("{}{}", lhs, rhs)))
        }
        _ => None,
    }
}

/// Same-tag equality; values of different tags are never equal.
fn values_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(a), Value::Number(b)) => a == b,
        (Value::Str(a), Value::Str(b)) => a == b,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Null, Value::Null) => true,
        _ => false,
    }
}

fn parse_number(text: &str) -> f64 {
    text.parse().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Lexer;

    fn eval(source: &str, env: &Environment) -> Value {
        let (tokens, errors) = Lexer::new(source).tokenize();
        assert!(errors.is_empty(), "lex errors in test source: {:?}", errors);
        evaluate(&tokens, env)
    }

    #[test]
    fn test_empty_span_is_null() {
        assert_eq!(evaluate(&[], &Environment::new()), Value::Null);
    }

    #[test]
    fn test_single_literals() {
        let env = Environment::new();
        assert_eq!(eval("42", &env), Value::Number(42.0));
        assert_eq!(eval("\"om\"", &env), Value::Str("om".to_string()));
        assert_eq!(eval("satyam", &env), Value::Bool(true));
        assert_eq!(eval("asatyam", &env), Value::Bool(false));
        assert_eq!(eval("shunyam", &env), Value::Null);
        assert_eq!(eval("शून्यम्", &env), Value::Null);
    }

    #[test]
    fn test_unknown_identifier_falls_back_to_zero() {
        let env = Environment::new();
        assert_eq!(eval("nirdishta", &env), Value::Number(0.0));
    }

    #[test]
    fn test_environment_lookup_wins_over_keyword_fallback() {
        let mut env = Environment::new();
        env.set("x", Value::Str("bound".to_string()));
        assert_eq!(eval("x", &env), Value::Str("bound".to_string()));
    }

    #[test]
    fn test_no_operator_precedence() {
        let env = Environment::new();
        assert_eq!(eval("2 + 3 * 4", &env), Value::Number(20.0));
        assert_eq!(eval("10 - 2 - 3", &env), Value::Number(5.0));
    }

    #[test]
    fn test_comparisons_produce_booleans() {
        let env = Environment::new();
        assert_eq!(eval("1 < 2", &env), Value::Bool(true));
        assert_eq!(eval("2 <= 2", &env), Value::Bool(true));
        assert_eq!(eval("3 > 4", &env), Value::Bool(false));
        assert_eq!(eval("1 == 1", &env), Value::Bool(true));
    }

    #[test]
    fn test_string_concatenation() {
        let env = Environment::new();
        assert_eq!(
            eval("\"a\" + \"b\" + 1", &env),
            Value::Str("ab1".to_string())
        );
    }

    #[test]
    fn test_unsupported_operators_degrade_to_zero() {
        let env = Environment::new();
        // The lexer produces these operator tokens, but the reduction has
        // no case for them.
        assert_eq!(eval("7 % 3", &env), Value::Number(0.0));
        assert_eq!(eval("1 != 2", &env), Value::Number(0.0));
        assert_eq!(eval("1 & 1", &env), Value::Number(0.0));
    }

    #[test]
    fn test_type_mismatch_degrades_to_zero() {
        let env = Environment::new();
        assert_eq!(eval("\"a\" * 2", &env), Value::Number(0.0));
    }

    #[test]
    fn test_word_operands_in_reductions_resolve_env_or_zero() {
        // Inside a reduction the literal fallback chain does not apply:
        // an unbound word contributes zero, even a boolean keyword form.
        let env = Environment::new();
        assert_eq!(eval("satyam + 1", &env), Value::Number(1.0));
        assert_eq!(eval("10 - nirdishta", &env), Value::Number(10.0));
    }

    #[test]
    fn test_dangling_operator_degrades_to_zero() {
        let env = Environment::new();
        assert_eq!(eval("1 +", &env), Value::Number(0.0));
    }

    #[test]
    fn test_division_by_zero_is_infinity() {
        let env = Environment::new();
        assert_eq!(eval("1 / 0", &env), Value::Number(f64::INFINITY));
    }
}
