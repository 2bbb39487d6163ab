//! Owning holder for an error payload.
//!
//! [`Error`] carries exactly one value of a caller-defined type and nothing
//! else. It exists so that a producer can say "this is the failure side"
//! when building a [`Result`](crate::Result):
//!
//! ```
//! use rail_result::{make_error, Result};
//!
//! fn parse_port(raw: &str) -> Result<u16, String> {
//!     match raw.parse::<u16>() {
//!         Ok(port) => Result::from_val(port),
//!         Err(e) => make_error(e.to_string()).into(),
//!     }
//! }
//!
//! assert!(parse_port("8080").has_val());
//! assert!(parse_port("http").has_err());
//! ```
use core::fmt;
use core::ops::{Deref, DerefMut};

/// A typed error payload holder.
///
/// Construct it from a payload with [`Error::new`] (or `From`), from a
/// default payload with [`Default`], or lazily with [`Error::new_with`].
/// Access is infallible: the payload always exists once constructed.
#[must_use]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Error<E>(E);

impl<E> Error<E> {
    /// Wraps an error payload.
    ///
    /// # Examples
    ///
    /// ```
    /// use rail_result::Error;
    ///
    /// let e = Error::new(404);
    /// assert_eq!(*e.get(), 404);
    /// ```
    #[inline]
    pub const fn new(error: E) -> Self {
        Self(error)
    }

    /// Builds the payload in place from a constructor closure.
    ///
    /// # Examples
    ///
    /// ```
    /// use rail_result::Error;
    ///
    /// let e = Error::new_with(|| String::from("disk full"));
    /// assert_eq!(e.get(), "disk full");
    /// ```
    #[inline]
    pub fn new_with<F>(f: F) -> Self
    where
        F: FnOnce() -> E,
    {
        Self(f())
    }

    /// Returns a shared reference to the payload.
    #[must_use]
    #[inline]
    pub const fn get(&self) -> &E {
        &self.0
    }

    /// Returns a mutable reference to the payload.
    #[must_use]
    #[inline]
    pub fn get_mut(&mut self) -> &mut E {
        &mut self.0
    }

    /// Consumes the wrapper, returning the payload.
    #[must_use]
    #[inline]
    pub fn into_inner(self) -> E {
        self.0
    }

    /// Replaces the payload with `error`, converted into `E`.
    ///
    /// The previous payload is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use rail_result::Error;
    ///
    /// let mut e: Error<i64> = Error::new(1);
    /// e.set(50_i32);
    /// assert_eq!(*e, 50);
    /// ```
    #[inline]
    pub fn set<U>(&mut self, error: U) -> &mut Self
    where
        U: Into<E>,
    {
        self.0 = error.into();
        self
    }

    /// Exchanges payloads with `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rail_result::Error;
    ///
    /// let mut a = Error::new(1);
    /// let mut b = Error::new(2);
    /// a.swap(&mut b);
    /// assert_eq!((*a, *b), (2, 1));
    /// ```
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(&mut self.0, &mut other.0);
    }

    /// Transforms the payload, producing a wrapper of a new error type.
    #[inline]
    pub fn map<F, G>(self, f: F) -> Error<G>
    where
        F: FnOnce(E) -> G,
    {
        Error(f(self.0))
    }

    /// Normalizes the payload into another error type via `Into`.
    #[inline]
    pub fn convert<F>(self) -> Error<F>
    where
        E: Into<F>,
    {
        Error(self.0.into())
    }
}

/// Wraps `error` in an [`Error`].
///
/// Reads better than `Error::new` at return sites:
///
/// ```
/// use rail_result::{make_error, Result};
///
/// let r: Result<(), &str> = make_error("unreachable host").into();
/// assert_eq!(*r.err(), "unreachable host");
/// ```
#[inline]
pub const fn make_error<E>(error: E) -> Error<E> {
    Error::new(error)
}

impl<E> From<E> for Error<E> {
    #[inline]
    fn from(error: E) -> Self {
        Self(error)
    }
}

impl<E> Deref for Error<E> {
    type Target = E;

    #[inline]
    fn deref(&self) -> &E {
        &self.0
    }
}

impl<E> DerefMut for Error<E> {
    #[inline]
    fn deref_mut(&mut self) -> &mut E {
        &mut self.0
    }
}

impl<E> AsRef<E> for Error<E> {
    #[inline]
    fn as_ref(&self) -> &E {
        &self.0
    }
}

impl<E: fmt::Display> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(feature = "std")]
impl<E: std::error::Error> std::error::Error for Error<E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}
