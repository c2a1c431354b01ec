//! Outcome algebra with an observation layer.
//!
//! Re-exports everything from `outcome_core` and adds [`observe`], which
//! plugs logging and other observers into outcome chains.

pub mod observe;

pub use outcome_core::*;

/// Glob-importable set of the types and traits most call sites need.
///
/// ```
/// use outcome::prelude::*;
///
/// let r = Some(3)
///     .to_outcome_or("no retries configured")
///     .observe("retries", &LogObserver::new())
///     .map(|n| n * 2);
///
/// assert_eq!(r, TypedOutcome::success(6));
/// ```
pub mod prelude {
    pub use crate::observe::{LogObserver, Observe, Observer};
    pub use outcome_core::{Diagnostic, Outcome, ToOutcome, TypedOutcome};
}
