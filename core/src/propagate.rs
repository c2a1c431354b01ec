use crate::{diagnostic::Diagnostic, outcome::Outcome, typed::TypedOutcome};
use log::trace;

/// Trait implemented by every outcome type that a failure can be
/// propagated into.
///
/// Continuation-taking combinators are generic over `R: Propagate`, so the
/// same `then` serves continuations returning `Outcome` and ones returning
/// `TypedOutcome<U>`. A failed antecedent is turned into `R` with its
/// diagnostic untouched and the continuation is never called.
pub trait Propagate: Sized {
    fn from_diagnostic(diagnostic: Diagnostic) -> Self;
}

impl Propagate for Outcome {
    fn from_diagnostic(diagnostic: Diagnostic) -> Self {
        Outcome::from_diagnostic(diagnostic)
    }
}

impl<T> Propagate for TypedOutcome<T> {
    fn from_diagnostic(diagnostic: Diagnostic) -> Self {
        TypedOutcome::from_diagnostic(diagnostic)
    }
}

/// Converts a failure met by `combinator` into `R`, keeping the diagnostic.
pub(crate) fn short_circuit<R: Propagate>(combinator: &str, diagnostic: Diagnostic) -> R {
    trace!("{} short-circuited on failure: {}", combinator, diagnostic);
    R::from_diagnostic(diagnostic)
}
