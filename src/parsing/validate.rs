//! # Well-Formedness Scanning
//!
//! [`is_well_formed`] answers "is this document syntactically valid?"
//! without building a value tree: tokens stream out of the shared
//! [`JsonTokenizer`](crate::parsing::json::JsonTokenizer) and a small state
//! machine checks structural placement, tracking open groupings on an
//! explicit stack.
//!
//! The scanner enforces the same rules as the parser (token grammar,
//! `,`/`:` placement, depth limit, exactly one value per document), so it
//! returns `false` for precisely the inputs the parser rejects with a
//! syntax error. Semantic concerns (kinds, schemas) are invisible at this
//! layer; a well-formed document can still fail to decode with a type
//! mismatch.
//!
//! Designed as a cheap pre-check: no value tree, no record instances, and
//! string allocation only for literals that contain escapes.

use crate::config::MAX_DOCUMENT_DEPTH;
use crate::error::DecodeError;
use crate::parsing::json::{JsonToken, JsonTokenizer};
use smallvec::SmallVec;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scope {
    Object,
    Array,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// A value must start here (document start, after ':', after '[' was
    /// handled, after ',' in an array).
    Value,
    /// Inside a fresh object: key or '}'.
    ObjectKeyOrEnd,
    /// Inside an object after ',': key required.
    ObjectKey,
    /// After an object key: ':' required.
    Colon,
    /// Inside a fresh array: value or ']'.
    ArrayValueOrEnd,
    /// A value just completed: ',' or the closing delimiter of the
    /// enclosing scope.
    AfterValue,
    /// The single document value completed; only whitespace may remain.
    Done,
}

/// Syntactic validation of a document. Pure and idempotent.
pub fn is_well_formed(document: &str) -> bool {
    scan(document).is_ok()
}

fn scan(document: &str) -> Result<(), DecodeError> {
    let mut tokenizer = JsonTokenizer::new(document);
    let mut scopes: SmallVec<[Scope; 16]> = SmallVec::new();
    let mut state = State::Value;

    loop {
        let token = tokenizer.next_token()?;
        let position = tokenizer.position();

        let Some(token) = token else {
            return match state {
                State::Done => Ok(()),
                _ => Err(DecodeError::syntax(position, "unexpected end of input")),
            };
        };

        state = match state {
            State::Value => begin_value(token, &mut scopes, position)?,
            State::ObjectKeyOrEnd => match token {
                JsonToken::String(_) => State::Colon,
                JsonToken::ObjectEnd => close_scope(&mut scopes),
                _ => {
                    return Err(DecodeError::syntax(position, "expected string key or '}'"));
                }
            },
            State::ObjectKey => match token {
                JsonToken::String(_) => State::Colon,
                _ => {
                    return Err(DecodeError::syntax(position, "expected string key after ','"));
                }
            },
            State::Colon => match token {
                JsonToken::Colon => State::Value,
                _ => {
                    return Err(DecodeError::syntax(position, "expected ':' after object key"));
                }
            },
            State::ArrayValueOrEnd => match token {
                JsonToken::ArrayEnd => close_scope(&mut scopes),
                other => begin_value(other, &mut scopes, position)?,
            },
            State::AfterValue => match (scopes.last(), token) {
                (Some(Scope::Object), JsonToken::Comma) => State::ObjectKey,
                (Some(Scope::Object), JsonToken::ObjectEnd) => close_scope(&mut scopes),
                (Some(Scope::Array), JsonToken::Comma) => State::Value,
                (Some(Scope::Array), JsonToken::ArrayEnd) => close_scope(&mut scopes),
                (Some(Scope::Object), _) => {
                    return Err(DecodeError::syntax(
                        position,
                        "expected ',' or '}' after object member",
                    ));
                }
                (Some(Scope::Array), _) => {
                    return Err(DecodeError::syntax(
                        position,
                        "expected ',' or ']' in array",
                    ));
                }
                // AfterValue with no open scope is unreachable: completing
                // the last scope transitions to Done.
                (None, _) => {
                    return Err(DecodeError::syntax(position, "unexpected token"));
                }
            },
            State::Done => {
                return Err(DecodeError::syntax(
                    position,
                    "trailing characters after document",
                ));
            }
        };
    }
}

fn begin_value(
    token: JsonToken<'_>,
    scopes: &mut SmallVec<[Scope; 16]>,
    position: usize,
) -> Result<State, DecodeError> {
    match token {
        JsonToken::Null | JsonToken::Bool(_) | JsonToken::Number(_) | JsonToken::String(_) => {
            Ok(after_value(scopes))
        }
        JsonToken::ObjectStart => {
            push_scope(scopes, Scope::Object, position)?;
            Ok(State::ObjectKeyOrEnd)
        }
        JsonToken::ArrayStart => {
            push_scope(scopes, Scope::Array, position)?;
            Ok(State::ArrayValueOrEnd)
        }
        _ => Err(DecodeError::syntax(position, "expected a value")),
    }
}

fn push_scope(
    scopes: &mut SmallVec<[Scope; 16]>,
    scope: Scope,
    position: usize,
) -> Result<(), DecodeError> {
    if scopes.len() >= MAX_DOCUMENT_DEPTH {
        return Err(DecodeError::syntax(
            position,
            format!("document nesting exceeds {MAX_DOCUMENT_DEPTH} levels"),
        ));
    }
    scopes.push(scope);
    Ok(())
}

fn close_scope(scopes: &mut SmallVec<[Scope; 16]>) -> State {
    scopes.pop();
    after_value(scopes)
}

fn after_value(scopes: &SmallVec<[Scope; 16]>) -> State {
    if scopes.is_empty() {
        State::Done
    } else {
        State::AfterValue
    }
}

#[cfg(test)]
mod tests {
    use super::is_well_formed;
    use crate::config::MAX_DOCUMENT_DEPTH;
    use crate::parsing::json::parse_document;

    #[test]
    fn accepts_all_value_shapes() {
        for doc in [
            "null",
            "true",
            "-3.25",
            "0",
            r#""text""#,
            "[]",
            "[1, [2, [3]]]",
            "{}",
            r#"{"a": 1, "b": {"c": [true, null]}}"#,
            "  {\n}  ",
        ] {
            assert!(is_well_formed(doc), "should accept {doc:?}");
        }
    }

    #[test]
    fn rejects_structural_violations() {
        for doc in [
            "",
            "   ",
            "{",
            "}",
            "[1, 2",
            "[1,]",
            r#"{"a": 1,}"#,
            r#"{"a" 1}"#,
            r#"{"a":}"#,
            r#"{message": "hi"}"#,
            r#"{"a": 1} extra"#,
            "[1 2]",
            "{,}",
        ] {
            assert!(!is_well_formed(doc), "should reject {doc:?}");
        }
    }

    #[test]
    fn rejects_token_level_violations() {
        for doc in [
            r#""unterminated"#,
            "01",
            "1.",
            "1e",
            "tru",
            "\"a\nb\"",
            r#""bad \x escape""#,
        ] {
            assert!(!is_well_formed(doc), "should reject {doc:?}");
        }
    }

    #[test]
    fn validation_is_idempotent() {
        let doc = r#"{"a": [1, 2, 3]}"#;
        assert_eq!(is_well_formed(doc), is_well_formed(doc));
        let bad = "[1,";
        assert_eq!(is_well_formed(bad), is_well_formed(bad));
    }

    #[test]
    fn depth_limit_matches_the_parser() {
        for depth in [MAX_DOCUMENT_DEPTH, MAX_DOCUMENT_DEPTH + 1] {
            let mut doc = String::with_capacity(depth * 2 + 1);
            for _ in 0..depth {
                doc.push('[');
            }
            doc.push('1');
            for _ in 0..depth {
                doc.push(']');
            }
            assert_eq!(is_well_formed(&doc), parse_document(&doc).is_ok());
        }
    }

    #[test]
    fn agrees_with_the_parser_on_a_corpus() {
        let corpus = [
            r#"{"a":1,"b":"ok"}"#,
            r#"[1,2,3,{"x":true}]"#,
            r#"{"nested":{"arr":[{"k":"v"}]}}"#,
            r#"{"unicode":"☃"}"#,
            r#"{"a":1,"a":2}"#,
            "{]",
            "[}",
            "nul",
            r#"{"a": "\ud800"}"#,
            "-0",
            "-0.5e+10",
            "5x",
            "[[]]]",
        ];
        for doc in corpus {
            assert_eq!(
                is_well_formed(doc),
                parse_document(doc).is_ok(),
                "validator and parser disagree on {doc:?}"
            );
        }
    }
}
