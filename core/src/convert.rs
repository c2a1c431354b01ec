use crate::{
    diagnostic::{Diagnostic, CONDITION_IS_FALSE, VALUE_IS_NONE},
    outcome::Outcome,
    typed::TypedOutcome,
};

/// Entry point from plain values into outcomes.
///
/// Nothing else in the crate converts raw values implicitly.
///
/// ```
/// use outcome_core::ToOutcome;
///
/// let missing: Option<String> = None;
/// assert_eq!(missing.to_outcome_or("missing").diagnostic(), Some("missing"));
///
/// let found = Some("hi").to_outcome();
/// assert_eq!(found.value_or_default(), "hi");
///
/// assert!((2 > 1).to_outcome().succeeded());
/// ```
pub trait ToOutcome: Sized {
    type Output;

    /// Converts with the default diagnostic.
    fn to_outcome(self) -> Self::Output;

    /// Converts with `message` as the diagnostic, panics if it is blank.
    fn to_outcome_or<M: Into<String>>(self, message: M) -> Self::Output;
}

impl<T> ToOutcome for Option<T> {
    type Output = TypedOutcome<T>;

    fn to_outcome(self) -> Self::Output {
        self.to_outcome_or(VALUE_IS_NONE)
    }

    fn to_outcome_or<M: Into<String>>(self, message: M) -> Self::Output {
        match self {
            Some(value) => TypedOutcome::success(value),
            None => TypedOutcome::from_diagnostic(Diagnostic::new(message)),
        }
    }
}

impl ToOutcome for bool {
    type Output = Outcome;

    fn to_outcome(self) -> Self::Output {
        self.to_outcome_or(CONDITION_IS_FALSE)
    }

    fn to_outcome_or<M: Into<String>>(self, message: M) -> Self::Output {
        if self {
            Outcome::success()
        } else {
            Outcome::from_diagnostic(Diagnostic::new(message))
        }
    }
}
