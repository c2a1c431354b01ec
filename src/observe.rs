use log::{log, Level};
use outcome_core::{Outcome, TypedOutcome};

/// Hooks run when an outcome is observed. Both default to no-ops, so an
/// observer only implements the side it cares about.
///
/// `label` names the call site that observed the outcome.
pub trait Observer: Send + Sync {
    /// Functionality that is being run for every observed success.
    fn on_success(&self, _label: &str) {}

    /// Functionality that is being run for every observed failure.
    fn on_failure(&self, _label: &str, _diagnostic: &str) {}
}

/// Observer that reports outcomes through the `log` facade.
///
/// ```
/// use outcome::observe::{LogObserver, Observe};
/// use outcome::Outcome;
///
/// let observer = LogObserver::new().failure_level(log::Level::Error);
/// let r = Outcome::failure("file not found").observe("load config", &observer);
///
/// assert_eq!(r.diagnostic(), Some("file not found"));
/// ```
#[derive(Debug, Clone)]
pub struct LogObserver {
    success_level: Level,
    failure_level: Level,
}

impl LogObserver {
    /// Creates new LogObserver, successes are logged at debug and failures
    /// at warn level.
    pub fn new() -> Self {
        Self {
            success_level: Level::Debug,
            failure_level: Level::Warn,
        }
    }

    /// Sets level used for successes.
    pub fn success_level(mut self, level: Level) -> Self {
        self.success_level = level;
        self
    }

    /// Sets level used for failures.
    pub fn failure_level(mut self, level: Level) -> Self {
        self.failure_level = level;
        self
    }
}

impl Default for LogObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl Observer for LogObserver {
    fn on_success(&self, label: &str) {
        log!(self.success_level, "{} - succeeded", label);
    }

    fn on_failure(&self, label: &str, diagnostic: &str) {
        log!(self.failure_level, "{} - failed: {}", label, diagnostic);
    }
}

fn dispatch<O: Observer + ?Sized>(observer: &O, label: &str, diagnostic: Option<&str>) {
    match diagnostic {
        None => observer.on_success(label),
        Some(d) => observer.on_failure(label, d),
    }
}

/// Runs an `Observer` against an outcome and hands the outcome back unchanged.
pub trait Observe: Sized {
    fn observe<O: Observer + ?Sized>(self, label: &str, observer: &O) -> Self;
}

impl Observe for Outcome {
    fn observe<O: Observer + ?Sized>(self, label: &str, observer: &O) -> Self {
        self.on_both(|o| dispatch(observer, label, o.diagnostic()))
    }
}

impl<T> Observe for TypedOutcome<T> {
    fn observe<O: Observer + ?Sized>(self, label: &str, observer: &O) -> Self {
        self.on_both(|o| dispatch(observer, label, o.diagnostic()))
    }
}
