//! The coercion engine: turns an ordered sequence of raw tokens into typed
//! values according to a parallel sequence of [`TypeSpec`]s.
//!
//! Every reportable condition goes through the device policy
//! (`InputDevice::report`): raise mode aborts the call, warn mode prints and
//! falls back, silent mode just falls back. The fallback at any skipped
//! position is the original raw string, so the output stays parallel to the
//! input, except after an iterable-syntax failure, which returns the
//! in-progress sequence immediately.

use crate::cast::{ScalarKind, TypeSpec, Value};
use crate::device::{InputDevice, LineSource};
use crate::error::{InputError, Result};

impl<S: LineSource> InputDevice<S> {
    /// Casts every token against the position-matched spec.
    ///
    /// A single spec broadcasts to all tokens, as does a longer spec slice
    /// whose entries are all the same scalar kind. A spec count that is
    /// neither 1 nor the token count is reported as a type-list mismatch
    /// and, when not raising, the raw tokens pass through unchanged.
    ///
    /// Iterable specs expect the token to be a bracketed literal (`(..)`,
    /// `[..]` or `{..}`, interchangeably) whose interior splits on
    /// `iter_separator`. A token without the bracket envelope ends the call
    /// early, returning whatever was coerced so far.
    pub fn cast_tokens(
        &self,
        tokens: &[String],
        specs: &[TypeSpec],
        iter_separator: &str,
    ) -> Result<Vec<Value>> {
        if specs.len() != tokens.len() && specs.len() != 1 {
            self.report(InputError::TypeList(format!(
                "Invalid number of values: expected {}, got {}",
                specs.len(),
                tokens.len()
            )))?;
            return Ok(tokens.iter().map(|token| Value::Str(token.clone())).collect());
        }

        if let Some(kind) = TypeSpec::uniform_scalar(specs) {
            return self.cast_broadcast(tokens, kind);
        }

        let mut values = Vec::with_capacity(tokens.len());
        for (i, token) in tokens.iter().enumerate() {
            let spec = if specs.len() == 1 { &specs[0] } else { &specs[i] };
            match spec {
                TypeSpec::Scalar(kind) => match kind.cast(token) {
                    Ok(value) => values.push(value),
                    Err(failure) => {
                        self.report(InputError::ValueCast(failure.to_string()))?;
                        values.push(Value::Str(token.clone()));
                    }
                },
                TypeSpec::Iterable(kinds) if kinds.is_empty() => {
                    self.report(InputError::TypeList(format!(
                        "Couldn't cast the value ({}) because the type list was empty",
                        token
                    )))?;
                    values.push(Value::Str(token.clone()));
                }
                TypeSpec::Iterable(kinds) => {
                    let trimmed = token.trim();
                    let Some(interior) = strip_envelope(trimmed) else {
                        if self.raise_errors {
                            return Err(InputError::IterableSyntax(trimmed.to_string()));
                        }
                        if self.warnings {
                            println!("Warning: Invalid iterable syntax <{}> [returning]", trimmed);
                        }
                        return Ok(values);
                    };

                    let pieces: Vec<&str> = interior.split(iter_separator).collect();
                    match cast_pieces(&pieces, kinds) {
                        Ok(items) => values.push(Value::List(items)),
                        Err(PieceFailure::Cast(detail)) => {
                            self.report(InputError::TypeList(format!(
                                "Couldn't cast {} to {} due an error... {}",
                                token,
                                kinds_label(kinds),
                                detail
                            )))?;
                            values.push(Value::Str(token.clone()));
                        }
                        Err(PieceFailure::Arity) => {
                            self.report(InputError::TypeList(format!(
                                "Couldn't cast {} because the type list was invalid",
                                token
                            )))?;
                            values.push(Value::Str(token.clone()));
                        }
                    }
                }
            }
        }
        Ok(values)
    }

    fn cast_broadcast(&self, tokens: &[String], kind: ScalarKind) -> Result<Vec<Value>> {
        let mut values = Vec::with_capacity(tokens.len());
        for token in tokens {
            match kind.cast(token) {
                Ok(value) => values.push(value),
                Err(failure) => {
                    self.report(InputError::ValueCast(failure.to_string()))?;
                    values.push(Value::Str(token.clone()));
                }
            }
        }
        Ok(values)
    }
}

enum PieceFailure {
    Cast(String),
    Arity,
}

/// Casts the pieces of one iterable literal: a single kind applies to every
/// piece, a longer kind list pairs up position by position.
fn cast_pieces(pieces: &[&str], kinds: &[ScalarKind]) -> std::result::Result<Vec<Value>, PieceFailure> {
    if kinds.len() == 1 {
        let kind = kinds[0];
        return pieces
            .iter()
            .map(|piece| kind.cast(piece).map_err(|e| PieceFailure::Cast(e.detail)))
            .collect();
    }

    if pieces.len() != kinds.len() {
        return Err(PieceFailure::Arity);
    }
    pieces
        .iter()
        .zip(kinds)
        .map(|(piece, kind)| kind.cast(piece).map_err(|e| PieceFailure::Cast(e.detail)))
        .collect()
}

/// Strips one matching bracket pair off `token`, if present.
fn strip_envelope(token: &str) -> Option<&str> {
    for (open, close) in [('(', ')'), ('[', ']'), ('{', '}')] {
        if let Some(interior) = token
            .strip_prefix(open)
            .and_then(|rest| rest.strip_suffix(close))
        {
            return Some(interior);
        }
    }
    None
}

fn kinds_label(kinds: &[ScalarKind]) -> String {
    if kinds.len() == 1 {
        return kinds[0].to_string();
    }
    format!(
        "[{}]",
        kinds
            .iter()
            .map(|kind| kind.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::Kit;
    use crate::device::source::StdinSource;

    fn device(warnings: bool, raise_errors: bool) -> InputDevice<StdinSource> {
        InputDevice::new(warnings, raise_errors, None, Kit::default())
    }

    fn strings(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|token| token.to_string()).collect()
    }

    #[test]
    fn test_broadcast_single_spec() {
        let values = device(false, false)
            .cast_tokens(
                &strings(&["1", "2", "3"]),
                &[TypeSpec::Scalar(ScalarKind::I64)],
                ",",
            )
            .unwrap();
        assert_eq!(values, vec![Value::I64(1), Value::I64(2), Value::I64(3)]);
    }

    #[test]
    fn test_broadcast_identical_specs() {
        let specs = vec![TypeSpec::Scalar(ScalarKind::F64); 3];
        let values = device(false, false)
            .cast_tokens(&strings(&["1.5", "2.5", "3.5"]), &specs, ",")
            .unwrap();
        assert_eq!(
            values,
            vec![Value::F64(1.5), Value::F64(2.5), Value::F64(3.5)]
        );
    }

    #[test]
    fn test_broadcast_failure_keeps_raw_and_continues() {
        let values = device(false, false)
            .cast_tokens(
                &strings(&["1", "x", "3"]),
                &[TypeSpec::Scalar(ScalarKind::I64)],
                ",",
            )
            .unwrap();
        assert_eq!(
            values,
            vec![Value::I64(1), Value::Str("x".to_string()), Value::I64(3)]
        );
    }

    #[test]
    fn test_broadcast_failure_raises() {
        let err = device(false, true)
            .cast_tokens(
                &strings(&["1", "x", "3"]),
                &[TypeSpec::Scalar(ScalarKind::I64)],
                ",",
            )
            .unwrap_err();
        assert_eq!(format!("{}", err), "Couldn't cast the value (x) to i64");
    }

    #[test]
    fn test_heterogeneous_specs() {
        let specs = [
            TypeSpec::Scalar(ScalarKind::I64),
            TypeSpec::Scalar(ScalarKind::F64),
            TypeSpec::Scalar(ScalarKind::Str),
        ];
        let values = device(false, false)
            .cast_tokens(&strings(&["1", "2.5", "x"]), &specs, ",")
            .unwrap();
        assert_eq!(
            values,
            vec![Value::I64(1), Value::F64(2.5), Value::Str("x".to_string())]
        );
    }

    #[test]
    fn test_iterable_literal_single_kind() {
        let values = device(false, false)
            .cast_tokens(
                &strings(&["(1,2,3)"]),
                &[TypeSpec::Iterable(vec![ScalarKind::I64])],
                ",",
            )
            .unwrap();
        assert_eq!(
            values,
            vec![Value::List(vec![
                Value::I64(1),
                Value::I64(2),
                Value::I64(3)
            ])]
        );
    }

    #[test]
    fn test_iterable_literal_all_bracket_pairs() {
        let dev = device(false, false);
        for token in ["(1,2)", "[1,2]", "{1,2}"] {
            let values = dev
                .cast_tokens(
                    &strings(&[token]),
                    &[TypeSpec::Iterable(vec![ScalarKind::I64])],
                    ",",
                )
                .unwrap();
            assert_eq!(
                values,
                vec![Value::List(vec![Value::I64(1), Value::I64(2)])]
            );
        }
    }

    #[test]
    fn test_iterable_literal_mismatched_brackets_are_syntax_errors() {
        let err = device(false, true)
            .cast_tokens(
                &strings(&["(1,2]"]),
                &[TypeSpec::Iterable(vec![ScalarKind::I64])],
                ",",
            )
            .unwrap_err();
        assert_eq!(format!("{}", err), "Invalid iterable syntax <(1,2]>");
    }

    #[test]
    fn test_iterable_literal_position_matched() {
        let specs = [TypeSpec::Iterable(vec![
            ScalarKind::Str,
            ScalarKind::I64,
            ScalarKind::F64,
        ])];
        let values = device(false, false)
            .cast_tokens(&strings(&["{a,2,3.5}"]), &specs, ",")
            .unwrap();
        assert_eq!(
            values,
            vec![Value::List(vec![
                Value::Str("a".to_string()),
                Value::I64(2),
                Value::F64(3.5)
            ])]
        );
    }

    #[test]
    fn test_iterable_syntax_failure_early_returns() {
        // No bracket envelope on the first token: the whole call returns the
        // sequence built so far, later positions untouched.
        let specs = [
            TypeSpec::Iterable(vec![ScalarKind::I64]),
            TypeSpec::Iterable(vec![ScalarKind::I64]),
        ];
        let values = device(false, false)
            .cast_tokens(&strings(&["1,2,3", "(4,5)"]), &specs, ",")
            .unwrap();
        assert!(values.is_empty());
    }

    #[test]
    fn test_iterable_syntax_failure_mid_sequence() {
        let specs = [
            TypeSpec::Scalar(ScalarKind::I64),
            TypeSpec::Iterable(vec![ScalarKind::I64]),
            TypeSpec::Scalar(ScalarKind::I64),
        ];
        let values = device(false, false)
            .cast_tokens(&strings(&["7", "4,5", "9"]), &specs, ",")
            .unwrap();
        assert_eq!(values, vec![Value::I64(7)]);
    }

    #[test]
    fn test_iterable_syntax_failure_raises() {
        let err = device(false, true)
            .cast_tokens(
                &strings(&["1,2,3"]),
                &[TypeSpec::Iterable(vec![ScalarKind::I64])],
                ",",
            )
            .unwrap_err();
        assert_eq!(format!("{}", err), "Invalid iterable syntax <1,2,3>");
    }

    #[test]
    fn test_iterable_element_failure_keeps_raw_and_continues() {
        // A piece failing to cast is not an early return: the token keeps
        // its raw text and the next position is still processed.
        let specs = [
            TypeSpec::Iterable(vec![ScalarKind::I64]),
            TypeSpec::Scalar(ScalarKind::I64),
        ];
        let values = device(false, false)
            .cast_tokens(&strings(&["(1,x)", "5"]), &specs, ",")
            .unwrap();
        assert_eq!(
            values,
            vec![Value::Str("(1,x)".to_string()), Value::I64(5)]
        );
    }

    #[test]
    fn test_iterable_element_failure_raises_type_list() {
        let err = device(false, true)
            .cast_tokens(
                &strings(&["(1,x)"]),
                &[TypeSpec::Iterable(vec![ScalarKind::I64])],
                ",",
            )
            .unwrap_err();
        assert!(matches!(err, InputError::TypeList(_)));
        assert!(format!("{}", err).starts_with("Couldn't cast (1,x) to i64 due an error..."));
    }

    #[test]
    fn test_iterable_arity_mismatch_is_invalid_type_list() {
        let specs = [TypeSpec::Iterable(vec![ScalarKind::I64, ScalarKind::I64])];
        let err = device(false, true)
            .cast_tokens(&strings(&["(1,2,3)"]), &specs, ",")
            .unwrap_err();
        assert_eq!(
            format!("{}", err),
            "Couldn't cast (1,2,3) because the type list was invalid"
        );
    }

    #[test]
    fn test_empty_type_list_reported() {
        let specs = [
            TypeSpec::Iterable(vec![]),
            TypeSpec::Scalar(ScalarKind::I64),
        ];
        let values = device(false, false)
            .cast_tokens(&strings(&["(1,2)", "3"]), &specs, ",")
            .unwrap();
        assert_eq!(
            values,
            vec![Value::Str("(1,2)".to_string()), Value::I64(3)]
        );
    }

    #[test]
    fn test_count_mismatch_reports_and_passes_through() {
        let specs = vec![TypeSpec::Scalar(ScalarKind::I64); 3];
        let values = device(false, false)
            .cast_tokens(&strings(&["1", "2"]), &specs, ",")
            .unwrap();
        assert_eq!(
            values,
            vec![Value::Str("1".to_string()), Value::Str("2".to_string())]
        );
    }

    #[test]
    fn test_count_mismatch_raises() {
        let specs = vec![TypeSpec::Scalar(ScalarKind::I64); 3];
        let err = device(false, true)
            .cast_tokens(&strings(&["1", "2"]), &specs, ",")
            .unwrap_err();
        assert_eq!(
            format!("{}", err),
            "Invalid number of values: expected 3, got 2"
        );
    }

    #[test]
    fn test_single_iterable_spec_broadcasts_to_every_token() {
        let values = device(false, false)
            .cast_tokens(
                &strings(&["(1,2)", "(3,4)"]),
                &[TypeSpec::Iterable(vec![ScalarKind::I64])],
                ",",
            )
            .unwrap();
        assert_eq!(
            values,
            vec![
                Value::List(vec![Value::I64(1), Value::I64(2)]),
                Value::List(vec![Value::I64(3), Value::I64(4)]),
            ]
        );
    }

    #[test]
    fn test_iterable_token_surrounding_whitespace_trimmed() {
        let values = device(false, false)
            .cast_tokens(
                &strings(&["  (1, 2)  "]),
                &[TypeSpec::Iterable(vec![ScalarKind::I64])],
                ",",
            )
            .unwrap();
        assert_eq!(
            values,
            vec![Value::List(vec![Value::I64(1), Value::I64(2)])]
        );
    }

    #[test]
    fn test_empty_tokens_and_specs() {
        let values = device(false, false).cast_tokens(&[], &[], ",").unwrap();
        assert_eq!(values, Vec::<Value>::new());
    }

    #[test]
    fn test_strip_envelope() {
        assert_eq!(strip_envelope("(1,2)"), Some("1,2"));
        assert_eq!(strip_envelope("[1,2]"), Some("1,2"));
        assert_eq!(strip_envelope("{1,2}"), Some("1,2"));
        assert_eq!(strip_envelope("1,2"), None);
        assert_eq!(strip_envelope("("), None);
        assert_eq!(strip_envelope("()"), Some(""));
    }
}
