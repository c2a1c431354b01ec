//! Outcomes as values.
//!
//! [`Outcome`] and [`TypedOutcome`] model the result of an operation as
//! either a success (optionally carrying a value) or a failure carrying a
//! human-readable [`Diagnostic`]. Combinators chain, transform, inspect and
//! reconcile outcomes without panicking or early-returning on expected
//! failure paths.
//!
//! Every combinator has a synchronous form and an `*_async` form that
//! awaits the supplied computation and then applies the same rule.
//!
//! ```
//! use outcome_core::{Outcome, ToOutcome, TypedOutcome};
//!
//! fn lookup(id: u32) -> Option<&'static str> {
//!     (id == 7).then_some("ada")
//! }
//!
//! let greeting = Outcome::success()
//!     .then(|| lookup(7).to_outcome_or("no such user"))
//!     .map(|name| format!("hello, {}", name))
//!     .match_with(|s| s, |d| d.into_string());
//!
//! assert_eq!(greeting, "hello, ada");
//! ```

mod branch;
mod convert;
mod diagnostic;
mod inspect;
mod outcome;
mod propagate;
mod recover;
mod sequence;
mod typed;

pub use convert::ToOutcome;
pub use diagnostic::{Diagnostic, CONDITION_IS_FALSE, VALUE_IS_NONE};
pub use outcome::Outcome;
pub use propagate::Propagate;
pub use typed::{Presence, TypedOutcome};
