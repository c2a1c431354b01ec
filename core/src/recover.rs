//! Error transformation: Otherwise / MapError.
//!
//! The only combinators allowed to replace a diagnostic. Successes pass
//! through untouched and the mapper is not called.

use crate::{diagnostic::Diagnostic, outcome::Outcome, typed::TypedOutcome};
use log::trace;
use std::future::Future;

/// Validates the mapper's output, panics if it is blank.
fn replacement<M: Into<String>>(message: M) -> Diagnostic {
    let message = message.into();
    trace!("replaced with {:?}", message);
    Diagnostic::new(message)
}

impl Outcome {
    /// Replaces the diagnostic of a failure with `mapper(diagnostic)`.
    ///
    /// Panics if the mapper returns a blank message.
    ///
    /// ```
    /// use outcome_core::Outcome;
    ///
    /// let r = Outcome::failure("a").otherwise(|m| format!("{}!", m));
    /// assert_eq!(r.diagnostic(), Some("a!"));
    ///
    /// assert!(Outcome::success().otherwise(|_| "x").succeeded());
    /// ```
    pub fn otherwise<M, F>(self, mapper: F) -> Self
    where
        M: Into<String>,
        F: FnOnce(Diagnostic) -> M,
    {
        match self.inner {
            Ok(()) => Self::success(),
            Err(d) => {
                trace!("replacing diagnostic {:?}", d.as_str());
                Self::from_diagnostic(replacement(mapper(d)))
            }
        }
    }

    /// Alias of `otherwise`.
    pub fn map_error<M, F>(self, mapper: F) -> Self
    where
        M: Into<String>,
        F: FnOnce(Diagnostic) -> M,
    {
        self.otherwise(mapper)
    }

    pub async fn otherwise_async<M, F, Fut>(self, mapper: F) -> Self
    where
        M: Into<String>,
        F: FnOnce(Diagnostic) -> Fut,
        Fut: Future<Output = M>,
    {
        match self.inner {
            Ok(()) => Self::success(),
            Err(d) => {
                trace!("replacing diagnostic {:?}", d.as_str());
                Self::from_diagnostic(replacement(mapper(d).await))
            }
        }
    }

    pub async fn map_error_async<M, F, Fut>(self, mapper: F) -> Self
    where
        M: Into<String>,
        F: FnOnce(Diagnostic) -> Fut,
        Fut: Future<Output = M>,
    {
        self.otherwise_async(mapper).await
    }
}

impl<T> TypedOutcome<T> {
    /// Replaces the diagnostic of a failure with `mapper(diagnostic)`.
    ///
    /// Panics if the mapper returns a blank message.
    pub fn otherwise<M, F>(self, mapper: F) -> Self
    where
        M: Into<String>,
        F: FnOnce(Diagnostic) -> M,
    {
        match self.inner {
            Ok(value) => Self::success(value),
            Err(d) => {
                trace!("replacing diagnostic {:?}", d.as_str());
                Self::from_diagnostic(replacement(mapper(d)))
            }
        }
    }

    /// Alias of `otherwise`.
    pub fn map_error<M, F>(self, mapper: F) -> Self
    where
        M: Into<String>,
        F: FnOnce(Diagnostic) -> M,
    {
        self.otherwise(mapper)
    }

    pub async fn otherwise_async<M, F, Fut>(self, mapper: F) -> Self
    where
        M: Into<String>,
        F: FnOnce(Diagnostic) -> Fut,
        Fut: Future<Output = M>,
    {
        match self.inner {
            Ok(value) => Self::success(value),
            Err(d) => {
                trace!("replacing diagnostic {:?}", d.as_str());
                Self::from_diagnostic(replacement(mapper(d).await))
            }
        }
    }

    pub async fn map_error_async<M, F, Fut>(self, mapper: F) -> Self
    where
        M: Into<String>,
        F: FnOnce(Diagnostic) -> Fut,
        Fut: Future<Output = M>,
    {
        self.otherwise_async(mapper).await
    }
}

#[cfg(test)]
mod tests {
    use crate::{Outcome, TypedOutcome};
    use futures_executor::block_on;
    use std::cell::Cell;

    #[test]
    fn test_success_passes_through() {
        let calls = Cell::new(0);

        let r = TypedOutcome::success(1).map_error(|_| {
            calls.set(calls.get() + 1);
            "never"
        });
        assert_eq!(r, TypedOutcome::success(1));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_failure_diagnostic_replaced() {
        let r = TypedOutcome::<u8>::failure("connection reset")
            .otherwise(|d| format!("fetching profile: {}", d));
        assert_eq!(r.diagnostic(), Some("fetching profile: connection reset"));

        let r = Outcome::failure("a").map_error(|m| format!("{}!", m));
        assert_eq!(r, Outcome::failure("a!"));
    }

    #[test]
    fn test_mapper_owns_original_diagnostic() {
        let r = Outcome::failure("timeout").otherwise(|d| d);
        assert_eq!(r, Outcome::failure("timeout"));

        let r = TypedOutcome::<u8>::failure("timeout")
            .map_error(|d| d.into_string() + " after 3s");
        assert_eq!(r.diagnostic(), Some("timeout after 3s"));

        let r = block_on(Outcome::failure("eof").otherwise_async(|d| async move { d }));
        assert_eq!(r, Outcome::failure("eof"));
    }

    #[test]
    #[should_panic(expected = "must not be empty")]
    fn test_blank_replacement_panics() {
        let _ = Outcome::failure("a").otherwise(|_| "  ");
    }

    #[test]
    fn test_async_forms() {
        let r = block_on(
            TypedOutcome::<u8>::failure("disk")
                .otherwise_async(|d| async move { format!("{} full", d) }),
        );
        assert_eq!(r.diagnostic(), Some("disk full"));

        let r = block_on(Outcome::success().map_error_async(|_| async { "unused" }));
        assert_eq!(r, Outcome::success());
    }
}
