#![allow(dead_code)]
use std::cell::RefCell;

/// Records which continuations, branches and effects ran, in order.
///
/// Handing out closures from a single Recorder lets a test assert both
/// "was this invoked" and "in which order" for a whole chain.
#[derive(Default)]
pub struct Recorder {
    calls: RefCell<Vec<String>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record<T: ToString>(&self, name: T) {
        self.calls.borrow_mut().push(name.to_string());
    }

    /// Zero-arg continuation that records `name` and returns `value`.
    pub fn step<'a, R: 'a>(&'a self, name: &'a str, value: R) -> impl FnOnce() -> R + 'a {
        move || {
            self.record(name);
            value
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, name: &str) -> usize {
        self.calls.borrow().iter().filter(|c| *c == name).count()
    }
}

/// Builder for a table of outcomes that every law is checked against.
pub struct Samples<T> {
    values: Vec<T>,
    diagnostics: Vec<String>,
}

impl<T: Clone> Samples<T> {
    pub fn new() -> Self {
        Self {
            values: vec![],
            diagnostics: vec![],
        }
    }

    pub fn value(mut self, value: T) -> Self {
        self.values.push(value);
        self
    }

    pub fn diagnostic<D: ToString>(mut self, diagnostic: D) -> Self {
        self.diagnostics.push(diagnostic.to_string());
        self
    }

    pub fn typed(&self) -> Vec<outcome_core::TypedOutcome<T>> {
        let successes = self
            .values
            .iter()
            .cloned()
            .map(outcome_core::TypedOutcome::success);
        let failures = self
            .diagnostics
            .iter()
            .map(|d| outcome_core::TypedOutcome::failure(d.as_str()));
        successes.chain(failures).collect()
    }

    pub fn untyped(&self) -> Vec<outcome_core::Outcome> {
        std::iter::once(outcome_core::Outcome::success())
            .chain(
                self.diagnostics
                    .iter()
                    .map(|d| outcome_core::Outcome::failure(d.as_str())),
            )
            .collect()
    }
}
