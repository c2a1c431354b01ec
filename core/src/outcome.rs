use crate::diagnostic::Diagnostic;
use anyhow::{anyhow, bail};
use log::error;
use std::fmt;

/// Result of an operation that produces no value.
///
/// An `Outcome` is either a success or a failure explained by a
/// [`Diagnostic`]. There is no third state and no way to attach a
/// diagnostic to a success.
///
/// ```
/// use outcome_core::Outcome;
///
/// let ok = Outcome::success();
/// let bad = Outcome::failure("disk full");
///
/// assert!(ok.succeeded());
/// assert_eq!(bad.diagnostic(), Some("disk full"));
/// ```
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Outcome {
    pub(crate) inner: Result<(), Diagnostic>,
}

impl Outcome {
    pub fn success() -> Self {
        Self { inner: Ok(()) }
    }

    /// Creates failed Outcome, panics if `message` is blank.
    pub fn failure<M: Into<String>>(message: M) -> Self {
        Self::from_diagnostic(Diagnostic::new(message))
    }

    /// Non-panicking variant of `failure` for messages that are not known
    /// to be well-formed.
    pub fn try_failure<M: Into<String>>(message: M) -> anyhow::Result<Self> {
        Ok(Self::from_diagnostic(Diagnostic::try_from(message.into())?))
    }

    pub(crate) fn from_diagnostic(diagnostic: Diagnostic) -> Self {
        Self {
            inner: Err(diagnostic),
        }
    }

    pub fn succeeded(&self) -> bool {
        self.inner.is_ok()
    }

    pub fn failed(&self) -> bool {
        self.inner.is_err()
    }

    /// Diagnostic of a failure, `None` on success.
    pub fn diagnostic(&self) -> Option<&str> {
        self.inner.as_ref().err().map(Diagnostic::as_str)
    }

    /// Splits Outcome into `(succeeded, diagnostic)`.
    ///
    /// ```
    /// use outcome_core::Outcome;
    ///
    /// let (succeeded, diagnostic) = Outcome::failure("nope").into_parts();
    /// assert!(!succeeded);
    /// assert_eq!(diagnostic.unwrap(), "nope");
    /// ```
    pub fn into_parts(self) -> (bool, Option<Diagnostic>) {
        match self.inner {
            Ok(()) => (true, None),
            Err(d) => (false, Some(d)),
        }
    }

    /// Converts into `anyhow::Result`, the diagnostic becomes the error message.
    pub fn into_result(self) -> anyhow::Result<()> {
        self.inner.map_err(|d| anyhow!(d.into_string()))
    }

    /// Returns if succeeded, panics with the diagnostic otherwise.
    ///
    /// Meant for call sites that already proved success, e.g. after
    /// validation. Expected failures should be matched instead.
    pub fn ok_or_panic(self) {
        if let Err(d) = self.inner {
            error!("ok_or_panic called on failed outcome: {}", d);
            panic!("{}", d);
        }
    }
}

impl TryFrom<(bool, Option<String>)> for Outcome {
    type Error = anyhow::Error;

    /// Rebuilds Outcome from the parts produced by `into_parts`.
    fn try_from((succeeded, diagnostic): (bool, Option<String>)) -> Result<Self, Self::Error> {
        match (succeeded, diagnostic) {
            (true, None) => Ok(Self::success()),
            (true, Some(d)) => bail!("successful outcome cannot carry a diagnostic: {}", d),
            (false, Some(d)) => Self::try_failure(d),
            (false, None) => bail!("failed outcome requires a diagnostic"),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner {
            Ok(()) => write!(f, "success"),
            Err(d) => write!(f, "failure: {}", d),
        }
    }
}
