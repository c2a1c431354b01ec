use anyhow::bail;
use std::{fmt, ops::Deref};

/// Default diagnostic for `ToOutcome` on an empty `Option`.
pub const VALUE_IS_NONE: &str = "Value is null.";

/// Default diagnostic for `ToOutcome` on `false`.
pub const CONDITION_IS_FALSE: &str = "Condition is false.";

/// Human-readable explanation carried by every failure.
///
/// A `Diagnostic` is never empty and never whitespace only, so a failure
/// can always be explained.
///
/// ```
/// use outcome_core::Diagnostic;
///
/// let d = Diagnostic::try_from("disk full").unwrap();
/// assert_eq!(d, "disk full");
/// assert!(Diagnostic::try_from("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Diagnostic(String);

impl Diagnostic {
    /// Creates new Diagnostic, panics if `message` is blank.
    ///
    /// Blank messages are caller bugs, not business failures. Use
    /// `Diagnostic::try_from` when the message comes from untrusted input.
    pub fn new<M: Into<String>>(message: M) -> Self {
        match Self::try_from(message.into()) {
            Ok(diagnostic) => diagnostic,
            Err(e) => panic!("{}", e),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for Diagnostic {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.trim().is_empty() {
            bail!("failure diagnostic must not be empty or whitespace")
        }
        Ok(Self(value))
    }
}

impl TryFrom<&str> for Diagnostic {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::try_from(value.to_string())
    }
}

impl Deref for Diagnostic {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for Diagnostic {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for Diagnostic {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl<'a> PartialEq<&'a str> for Diagnostic {
    fn eq(&self, other: &&'a str) -> bool {
        self.0 == *other
    }
}

impl From<Diagnostic> for String {
    fn from(d: Diagnostic) -> Self {
        d.0
    }
}
