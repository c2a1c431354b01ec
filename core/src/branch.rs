//! Exhaustive two-way dispatch.
//!
//! An outcome is exactly one of succeeded or failed, so exactly one branch
//! runs. The branches decide the result type; nothing else is transformed.

use crate::{diagnostic::Diagnostic, outcome::Outcome, typed::TypedOutcome};
use std::future::Future;

impl Outcome {
    pub fn match_with<R, S, F>(self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce() -> R,
        F: FnOnce(Diagnostic) -> R,
    {
        match self.inner {
            Ok(()) => on_success(),
            Err(d) => on_failure(d),
        }
    }

    pub async fn match_with_async<R, S, SFut, F, FFut>(self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce() -> SFut,
        SFut: Future<Output = R>,
        F: FnOnce(Diagnostic) -> FFut,
        FFut: Future<Output = R>,
    {
        match self.inner {
            Ok(()) => on_success().await,
            Err(d) => on_failure(d).await,
        }
    }
}

impl<T> TypedOutcome<T> {
    /// Dispatches on the state, passing the value or the diagnostic.
    ///
    /// ```
    /// use outcome_core::TypedOutcome;
    ///
    /// let r = TypedOutcome::success(5).match_with(|s| s * 2, |_| -1);
    /// assert_eq!(r, 10);
    /// ```
    pub fn match_with<R, S, F>(self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce(T) -> R,
        F: FnOnce(Diagnostic) -> R,
    {
        match self.inner {
            Ok(value) => on_success(value),
            Err(d) => on_failure(d),
        }
    }

    pub async fn match_with_async<R, S, SFut, F, FFut>(self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce(T) -> SFut,
        SFut: Future<Output = R>,
        F: FnOnce(Diagnostic) -> FFut,
        FFut: Future<Output = R>,
    {
        match self.inner {
            Ok(value) => on_success(value).await,
            Err(d) => on_failure(d).await,
        }
    }
}
