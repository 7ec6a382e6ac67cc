//! Per-position type specifications.
//!
//! A [`TypeSpec`] tells the coercion engine what one token should become:
//! a single scalar, or an iterable literal (`(..)`, `[..]` or `{..}`) whose
//! pieces are cast against a list of scalar kinds. The scalar-vs-iterable
//! decision is made here, at spec construction, not by inspecting values at
//! cast time.

use crate::cast::ScalarKind;

/// What one token position should be cast into.
///
/// - `Scalar`: the token is a single value of the given kind.
/// - `Iterable`: the token is a bracketed literal; its pieces are cast with
///   the listed kinds: one kind applied to every piece when the list has a
///   single entry, position-matched otherwise. The list must be non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde-dep", derive(serde::Serialize, serde::Deserialize))]
pub enum TypeSpec {
    Scalar(ScalarKind),
    Iterable(Vec<ScalarKind>),
}

impl TypeSpec {
    /// Returns the kind shared by every spec, if the whole slice is the same
    /// scalar repeated (or a single scalar spec).
    ///
    /// This is the dispatch point for the broadcast fast path: a uniform
    /// slice casts every token with one kind, anything else goes through
    /// per-position dispatch.
    pub fn uniform_scalar(specs: &[TypeSpec]) -> Option<ScalarKind> {
        let TypeSpec::Scalar(kind) = specs.first()? else {
            return None;
        };
        specs
            .iter()
            .all(|spec| matches!(spec, TypeSpec::Scalar(k) if k == kind))
            .then_some(*kind)
    }
}

impl From<ScalarKind> for TypeSpec {
    fn from(kind: ScalarKind) -> Self {
        TypeSpec::Scalar(kind)
    }
}
