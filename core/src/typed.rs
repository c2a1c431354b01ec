use crate::{diagnostic::Diagnostic, outcome::Outcome};
use anyhow::{anyhow, bail};
use log::error;
use std::{
    borrow::Cow,
    cell::{Cell, RefCell},
    cmp::Ordering,
    collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque},
    ffi::{OsStr, OsString},
    fmt,
    net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr},
    path::{Path, PathBuf},
    rc::Rc,
    sync::{Arc, Mutex, RwLock},
    time::{Duration, Instant, SystemTime},
};

/// Tells whether a carried value is the "empty" representation of its type.
///
/// A successful outcome can still have no value when the carried type is
/// nullable, e.g. `TypedOutcome<Option<u32>>` holding `None`. Types that
/// have no empty representation report `true`.
///
/// Implement it with an empty block for your own types:
///
/// ```
/// use outcome_core::Presence;
///
/// struct User;
/// impl Presence for User {}
/// ```
pub trait Presence {
    fn is_present(&self) -> bool {
        true
    }
}

impl<T> Presence for Option<T> {
    fn is_present(&self) -> bool {
        self.is_some()
    }
}

/// References report the presence of what they point to, so
/// `TypedOutcome::as_ref` keeps the answer of the owned outcome.
impl<T: Presence + ?Sized> Presence for &T {
    fn is_present(&self) -> bool {
        (**self).is_present()
    }
}

impl<T: Presence + ?Sized> Presence for &mut T {
    fn is_present(&self) -> bool {
        (**self).is_present()
    }
}

/// Macro for types that are always present.
macro_rules! always_present {
    ($($ty:ty),* $(,)?) => {
        $(impl Presence for $ty {})*
    };
}

always_present!(
    (), bool, char, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64,
    str, String, Path, PathBuf, OsStr, OsString, Duration, Instant, SystemTime, IpAddr, Ipv4Addr,
    Ipv6Addr, SocketAddr, Ordering, Diagnostic, Outcome,
);

macro_rules! always_present_generic {
    ($($ty:ident<$($param:ident),+>),* $(,)?) => {
        $(impl<$($param),+> Presence for $ty<$($param),+> {})*
    };
}

always_present_generic!(
    Vec<T>,
    VecDeque<T>,
    LinkedList<T>,
    BinaryHeap<T>,
    HashMap<K, V, S>,
    HashSet<T, S>,
    BTreeMap<K, V>,
    BTreeSet<T>,
    Result<T, E>,
    Cell<T>,
    RefCell<T>,
    Mutex<T>,
    RwLock<T>,
    TypedOutcome<T>,
);

/// Macro for owning pointers, which are present even when unsized.
macro_rules! always_present_pointer {
    ($($ty:ident),* $(,)?) => {
        $(impl<T: ?Sized> Presence for $ty<T> {})*
    };
}

always_present_pointer!(Box, Rc, Arc);

impl<T> Presence for [T] {}

impl<T, const N: usize> Presence for [T; N] {}

impl<B: ToOwned + ?Sized> Presence for Cow<'_, B> {}

macro_rules! always_present_tuple {
    ($($param:ident),+) => {
        impl<$($param),+> Presence for ($($param,)+) {}
    };
}

always_present_tuple!(A);
always_present_tuple!(A, B);
always_present_tuple!(A, B, C);
always_present_tuple!(A, B, C, D);
always_present_tuple!(A, B, C, D, E);
always_present_tuple!(A, B, C, D, E, F);
always_present_tuple!(A, B, C, D, E, F, G);
always_present_tuple!(A, B, C, D, E, F, G, H);
always_present_tuple!(A, B, C, D, E, F, G, H, I);
always_present_tuple!(A, B, C, D, E, F, G, H, I, J);
always_present_tuple!(A, B, C, D, E, F, G, H, I, J, K);
always_present_tuple!(A, B, C, D, E, F, G, H, I, J, K, L);

/// Result of an operation that produces a value of type `T` on success.
///
/// Failure semantics are the same as [`Outcome`]: a failure always carries
/// a non-blank [`Diagnostic`] and never a value.
///
/// ```
/// use outcome_core::TypedOutcome;
///
/// let doubled = TypedOutcome::success(42).map(|v| v * 2);
/// assert_eq!(doubled.value_or_default(), 84);
///
/// let failed = TypedOutcome::<i32>::failure("bad input").map(|v| v * 2);
/// assert_eq!(failed.diagnostic(), Some("bad input"));
/// ```
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypedOutcome<T> {
    pub(crate) inner: Result<T, Diagnostic>,
}

impl<T> TypedOutcome<T> {
    pub fn success(value: T) -> Self {
        Self { inner: Ok(value) }
    }

    /// Creates failed TypedOutcome, panics if `message` is blank.
    pub fn failure<M: Into<String>>(message: M) -> Self {
        Self::from_diagnostic(Diagnostic::new(message))
    }

    /// Non-panicking variant of `failure`.
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

    /// True only for a success whose value is not empty.
    ///
    /// ```
    /// use outcome_core::TypedOutcome;
    ///
    /// assert!(TypedOutcome::success(Some(1)).has_value());
    /// assert!(!TypedOutcome::<Option<i32>>::success(None).has_value());
    /// assert!(!TypedOutcome::<i32>::failure("x").has_value());
    /// ```
    pub fn has_value(&self) -> bool
    where
        T: Presence,
    {
        matches!(&self.inner, Ok(value) if value.is_present())
    }

    /// Carried value of a success.
    ///
    /// Panics when called on a failure: reading the value of a failed
    /// outcome is a caller bug. Use `try_get_value` or `match_with` when
    /// failure is an expected path.
    pub fn value(&self) -> &T {
        match &self.inner {
            Ok(value) => value,
            Err(d) => {
                error!("value accessed on failed outcome: {}", d);
                panic!("cannot access value of a failed outcome: {}", d)
            }
        }
    }

    /// Returns `(true, Some(value))` on success and `(false, None)` on failure.
    pub fn try_get_value(&self) -> (bool, Option<&T>) {
        match &self.inner {
            Ok(value) => (true, Some(value)),
            Err(_) => (false, None),
        }
    }

    /// Owned counterpart of `try_get_value`.
    pub fn into_value(self) -> (bool, Option<T>) {
        match self.inner {
            Ok(value) => (true, Some(value)),
            Err(_) => (false, None),
        }
    }

    /// Carried value on success, `T::default()` on failure.
    pub fn value_or_default(self) -> T
    where
        T: Default,
    {
        self.inner.unwrap_or_default()
    }

    /// Returns the value, panics with the diagnostic text on failure.
    ///
    /// Meant for call sites that already established success, e.g. after
    /// validation.
    pub fn value_or_panic(self) -> T {
        match self.inner {
            Ok(value) => value,
            Err(d) => {
                error!("value_or_panic called on failed outcome: {}", d);
                panic!("{}", d)
            }
        }
    }

    /// Splits TypedOutcome into `(succeeded, diagnostic, value)`.
    pub fn into_parts(self) -> (bool, Option<Diagnostic>, Option<T>) {
        match self.inner {
            Ok(value) => (true, None, Some(value)),
            Err(d) => (false, Some(d), None),
        }
    }

    /// Converts into `anyhow::Result`, the diagnostic becomes the error message.
    pub fn into_result(self) -> anyhow::Result<T> {
        self.inner.map_err(|d| anyhow!(d.into_string()))
    }

    /// Drops the carried value and keeps status and diagnostic.
    pub fn erase(self) -> Outcome {
        match self.inner {
            Ok(_) => Outcome::success(),
            Err(d) => Outcome::from_diagnostic(d),
        }
    }

    pub fn as_ref(&self) -> TypedOutcome<&T> {
        TypedOutcome {
            inner: self.inner.as_ref().map_err(Clone::clone),
        }
    }
}

impl<T> TryFrom<(bool, Option<String>, Option<T>)> for TypedOutcome<T> {
    type Error = anyhow::Error;

    /// Rebuilds TypedOutcome from the parts produced by `into_parts`.
    fn try_from(
        (succeeded, diagnostic, value): (bool, Option<String>, Option<T>),
    ) -> Result<Self, Self::Error> {
        match (succeeded, diagnostic, value) {
            (true, None, Some(value)) => Ok(Self::success(value)),
            (true, None, None) => bail!("successful outcome requires a value"),
            (true, Some(d), _) => bail!("successful outcome cannot carry a diagnostic: {}", d),
            (false, _, Some(_)) => bail!("failed outcome cannot carry a value"),
            (false, Some(d), None) => Self::try_failure(d),
            (false, None, None) => bail!("failed outcome requires a diagnostic"),
        }
    }
}

impl<T> From<TypedOutcome<T>> for Outcome {
    fn from(outcome: TypedOutcome<T>) -> Self {
        outcome.erase()
    }
}

impl<T: fmt::Debug> fmt::Display for TypedOutcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner {
            Ok(value) => write!(f, "success({:?})", value),
            Err(d) => write!(f, "failure: {}", d),
        }
    }
}
