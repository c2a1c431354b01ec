//! Side-effecting combinators.
//!
//! Every member of this family returns the original outcome untouched.
//! Effects get shared references only, so they cannot alter the status,
//! the diagnostic or the carried value.

use crate::{diagnostic::Diagnostic, outcome::Outcome, typed::TypedOutcome};
use std::future::Future;

impl Outcome {
    pub fn on_success<F>(self, effect: F) -> Self
    where
        F: FnOnce(),
    {
        if self.inner.is_ok() {
            effect();
        }
        self
    }

    pub fn on_failure<F>(self, effect: F) -> Self
    where
        F: FnOnce(&Diagnostic),
    {
        if let Err(d) = &self.inner {
            effect(d);
        }
        self
    }

    pub fn on_both<F>(self, effect: F) -> Self
    where
        F: FnOnce(&Self),
    {
        effect(&self);
        self
    }

    /// Alias of `on_success`.
    pub fn tap<F: FnOnce()>(self, effect: F) -> Self {
        self.on_success(effect)
    }

    /// Alias of `on_failure`.
    pub fn tap_error<F: FnOnce(&Diagnostic)>(self, effect: F) -> Self {
        self.on_failure(effect)
    }

    pub async fn on_success_async<F, Fut>(self, effect: F) -> Self
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = ()>,
    {
        if self.inner.is_ok() {
            effect().await;
        }
        self
    }

    pub async fn on_failure_async<F, Fut>(self, effect: F) -> Self
    where
        F: FnOnce(&Diagnostic) -> Fut,
        Fut: Future<Output = ()>,
    {
        if let Err(d) = &self.inner {
            effect(d).await;
        }
        self
    }

    pub async fn on_both_async<F, Fut>(self, effect: F) -> Self
    where
        F: FnOnce(&Self) -> Fut,
        Fut: Future<Output = ()>,
    {
        effect(&self).await;
        self
    }

    pub async fn tap_async<F, Fut>(self, effect: F) -> Self
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = ()>,
    {
        self.on_success_async(effect).await
    }

    pub async fn tap_error_async<F, Fut>(self, effect: F) -> Self
    where
        F: FnOnce(&Diagnostic) -> Fut,
        Fut: Future<Output = ()>,
    {
        self.on_failure_async(effect).await
    }
}

impl<T> TypedOutcome<T> {
    /// Runs `effect` with the carried value if self succeeded.
    ///
    /// ```
    /// use outcome_core::TypedOutcome;
    ///
    /// let mut seen = None;
    /// let r = TypedOutcome::success(3).on_success(|v| seen = Some(*v));
    ///
    /// assert_eq!(seen, Some(3));
    /// assert_eq!(r, TypedOutcome::success(3));
    /// ```
    pub fn on_success<F>(self, effect: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Ok(value) = &self.inner {
            effect(value);
        }
        self
    }

    pub fn on_failure<F>(self, effect: F) -> Self
    where
        F: FnOnce(&Diagnostic),
    {
        if let Err(d) = &self.inner {
            effect(d);
        }
        self
    }

    pub fn on_both<F>(self, effect: F) -> Self
    where
        F: FnOnce(&Self),
    {
        effect(&self);
        self
    }

    /// Alias of `on_success`.
    pub fn tap<F: FnOnce(&T)>(self, effect: F) -> Self {
        self.on_success(effect)
    }

    /// Alias of `on_failure`.
    pub fn tap_error<F: FnOnce(&Diagnostic)>(self, effect: F) -> Self {
        self.on_failure(effect)
    }

    /// The future returned by `effect` cannot borrow the value; clone what
    /// it needs.
    pub async fn on_success_async<F, Fut>(self, effect: F) -> Self
    where
        F: FnOnce(&T) -> Fut,
        Fut: Future<Output = ()>,
    {
        if let Ok(value) = &self.inner {
            effect(value).await;
        }
        self
    }

    pub async fn on_failure_async<F, Fut>(self, effect: F) -> Self
    where
        F: FnOnce(&Diagnostic) -> Fut,
        Fut: Future<Output = ()>,
    {
        if let Err(d) = &self.inner {
            effect(d).await;
        }
        self
    }

    pub async fn on_both_async<F, Fut>(self, effect: F) -> Self
    where
        F: FnOnce(&Self) -> Fut,
        Fut: Future<Output = ()>,
    {
        effect(&self).await;
        self
    }

    pub async fn tap_async<F, Fut>(self, effect: F) -> Self
    where
        F: FnOnce(&T) -> Fut,
        Fut: Future<Output = ()>,
    {
        self.on_success_async(effect).await
    }

    pub async fn tap_error_async<F, Fut>(self, effect: F) -> Self
    where
        F: FnOnce(&Diagnostic) -> Fut,
        Fut: Future<Output = ()>,
    {
        self.on_failure_async(effect).await
    }
}
