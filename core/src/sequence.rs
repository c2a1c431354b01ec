//! Then / Map family.
//!
//! Success hands control to the continuation. Failure hands over the
//! diagnostic and nothing else; the continuation is never invoked.

use crate::{
    outcome::Outcome,
    propagate::{short_circuit, Propagate},
    typed::TypedOutcome,
};
use std::future::Future;

impl Outcome {
    /// Runs `next` if self succeeded, otherwise propagates the diagnostic.
    ///
    /// `next` may return `Outcome` or any `TypedOutcome<U>`.
    ///
    /// ```
    /// use outcome_core::Outcome;
    ///
    /// let chained = Outcome::success()
    ///     .then(|| Outcome::failure("step2 failed"))
    ///     .then(|| Outcome::success());
    ///
    /// assert_eq!(chained.diagnostic(), Some("step2 failed"));
    /// ```
    pub fn then<R, F>(self, next: F) -> R
    where
        R: Propagate,
        F: FnOnce() -> R,
    {
        match self.inner {
            Ok(()) => next(),
            Err(d) => short_circuit("then", d),
        }
    }

    pub async fn then_async<R, F, Fut>(self, next: F) -> R
    where
        R: Propagate,
        F: FnOnce() -> Fut,
        Fut: Future<Output = R>,
    {
        match self.inner {
            Ok(()) => next().await,
            Err(d) => short_circuit("then_async", d),
        }
    }

    /// Same rule as `then`, named for call sites that switch outcome type.
    pub fn map<R, F>(self, next: F) -> R
    where
        R: Propagate,
        F: FnOnce() -> R,
    {
        self.then(next)
    }

    pub async fn map_async<R, F, Fut>(self, next: F) -> R
    where
        R: Propagate,
        F: FnOnce() -> Fut,
        Fut: Future<Output = R>,
    {
        self.then_async(next).await
    }
}

impl<T> TypedOutcome<T> {
    /// Runs `next` if self succeeded, discarding the carried value.
    pub fn then<R, F>(self, next: F) -> R
    where
        R: Propagate,
        F: FnOnce() -> R,
    {
        match self.inner {
            Ok(_) => next(),
            Err(d) => short_circuit("then", d),
        }
    }

    pub async fn then_async<R, F, Fut>(self, next: F) -> R
    where
        R: Propagate,
        F: FnOnce() -> Fut,
        Fut: Future<Output = R>,
    {
        match self.inner {
            Ok(_) => next().await,
            Err(d) => short_circuit("then_async", d),
        }
    }

    /// Passes the carried value to `next` if self succeeded.
    ///
    /// ```
    /// use outcome_core::TypedOutcome;
    ///
    /// fn parse(s: &str) -> TypedOutcome<u16> {
    ///     match s.parse() {
    ///         Ok(port) => TypedOutcome::success(port),
    ///         Err(_) => TypedOutcome::failure(format!("not a port: {}", s)),
    ///     }
    /// }
    ///
    /// let port = TypedOutcome::success("8080").and_then(parse);
    /// assert_eq!(port, TypedOutcome::success(8080));
    /// ```
    pub fn and_then<R, F>(self, next: F) -> R
    where
        R: Propagate,
        F: FnOnce(T) -> R,
    {
        match self.inner {
            Ok(value) => next(value),
            Err(d) => short_circuit("and_then", d),
        }
    }

    pub async fn and_then_async<R, F, Fut>(self, next: F) -> R
    where
        R: Propagate,
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = R>,
    {
        match self.inner {
            Ok(value) => next(value).await,
            Err(d) => short_circuit("and_then_async", d),
        }
    }

    /// Wraps `mapper(value)` in a new success, or propagates the failure.
    pub fn map<U, F>(self, mapper: F) -> TypedOutcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self.inner {
            Ok(value) => TypedOutcome::success(mapper(value)),
            Err(d) => short_circuit("map", d),
        }
    }

    pub async fn map_async<U, F, Fut>(self, mapper: F) -> TypedOutcome<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        match self.inner {
            Ok(value) => TypedOutcome::success(mapper(value).await),
            Err(d) => short_circuit("map_async", d),
        }
    }
}
