//! The two-state fallible value.
//!
//! [`Result`] holds either a value (`Val`, discriminant 0) or an error
//! payload (`Err`, discriminant 1). Construction and assignment always
//! select a whole alternative; the combinators in [`combinators`] chain
//! fallible steps without manual branching.
//!
//! Accessors follow a single checked policy: reading the wrong
//! alternative through a panicking accessor raises
//! [`BadResultAccess`](crate::BadResultAccess) as a panic, and every
//! panicking accessor has a `try_*` twin that returns it instead.
//!
//! # Examples
//!
//! ```
//! use rail_result::{Error, Result};
//!
//! let mut r: Result<i32, i32> = Result::from_val(5);
//! assert!(r.has_val());
//! assert_eq!(*r, 5);
//!
//! r.assign(Error::new(-1));
//! assert!(r.has_err());
//! assert_eq!(*r.err(), -1);
//! ```
use crate::types::access::{access_failed, BadResultAccess};
use crate::types::error::Error;

pub mod combinators;
mod traits;

/// A value of type `V` or an error payload of type `E`.
///
/// Exactly one alternative is active at any time. The enum owns its
/// active payload; dropping the `Result` drops only that payload.
///
/// # Variants
///
/// * `Val(V)` - the success alternative
/// * `Err(E)` - the error alternative
#[must_use]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Result<V, E> {
    Val(V),
    Err(E),
}

impl<V, E> Result<V, E> {
    /// Builds the value alternative from anything convertible into `V`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rail_result::Result;
    ///
    /// let r: Result<f64, ()> = Result::from_val(3_i32);
    /// assert_eq!(*r, 3.0);
    /// ```
    #[inline]
    pub fn from_val<U>(value: U) -> Self
    where
        U: Into<V>,
    {
        Self::Val(value.into())
    }

    /// Builds the error alternative from anything convertible into `E`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rail_result::Result;
    ///
    /// let r: Result<(), String> = Result::from_err("timeout");
    /// assert_eq!(r.err(), "timeout");
    /// ```
    #[inline]
    pub fn from_err<U>(error: U) -> Self
    where
        U: Into<E>,
    {
        Self::Err(error.into())
    }

    /// Replaces the active alternative with `source`.
    ///
    /// The previous payload is dropped before the new one is moved in,
    /// even when both belong to the same alternative.
    ///
    /// # Examples
    ///
    /// ```
    /// use rail_result::{Error, Result};
    ///
    /// let mut r: Result<i32, &str> = Result::from_val(1);
    /// r.assign(Error::new("gone"));
    /// assert!(r.has_err());
    ///
    /// r.assign(Result::<i32, &str>::from_val(100));
    /// assert_eq!(*r, 100);
    /// ```
    #[inline]
    pub fn assign<S>(&mut self, source: S) -> &mut Self
    where
        S: Into<Self>,
    {
        *self = source.into();
        self
    }

    /// Replaces the active alternative with a value.
    #[inline]
    pub fn set_val<U>(&mut self, value: U) -> &mut Self
    where
        U: Into<V>,
    {
        *self = Self::Val(value.into());
        self
    }

    /// Replaces the active alternative with an error payload.
    #[inline]
    pub fn set_err<U>(&mut self, error: U) -> &mut Self
    where
        U: Into<E>,
    {
        *self = Self::Err(error.into());
        self
    }

    /// Replaces the active alternative with the payload of an [`Error`].
    #[inline]
    pub fn set_error<U>(&mut self, error: Error<U>) -> &mut Self
    where
        U: Into<E>,
    {
        self.set_err(error.into_inner())
    }

    /// Returns `true` if the value alternative is active.
    #[must_use]
    #[inline]
    pub const fn has_val(&self) -> bool {
        matches!(self, Self::Val(_))
    }

    /// Returns `true` if the error alternative is active.
    #[must_use]
    #[inline]
    pub const fn has_err(&self) -> bool {
        !self.has_val()
    }

    /// Returns the discriminant: `0` for a value, `1` for an error.
    #[must_use]
    #[inline]
    pub const fn index(&self) -> usize {
        match self {
            Self::Val(_) => 0,
            Self::Err(_) => 1,
        }
    }

    /// Borrows the value, or reports that the error alternative is active.
    ///
    /// # Examples
    ///
    /// ```
    /// use rail_result::{BadResultAccess, Result};
    ///
    /// let r: Result<i32, &str> = Result::from_err("nope");
    /// assert_eq!(r.try_val(), Err(BadResultAccess::MissingValue));
    /// ```
    #[inline]
    pub fn try_val(&self) -> core::result::Result<&V, BadResultAccess> {
        match self {
            Self::Val(value) => Ok(value),
            Self::Err(_) => Err(BadResultAccess::MissingValue),
        }
    }

    /// Mutably borrows the value, or reports that the error alternative is active.
    #[inline]
    pub fn try_val_mut(&mut self) -> core::result::Result<&mut V, BadResultAccess> {
        match self {
            Self::Val(value) => Ok(value),
            Self::Err(_) => Err(BadResultAccess::MissingValue),
        }
    }

    /// Takes the value, or reports that the error alternative is active.
    #[inline]
    pub fn try_into_val(self) -> core::result::Result<V, BadResultAccess> {
        match self {
            Self::Val(value) => Ok(value),
            Self::Err(_) => Err(BadResultAccess::MissingValue),
        }
    }

    /// Borrows the error payload, or reports that the value alternative is active.
    #[inline]
    pub fn try_err(&self) -> core::result::Result<&E, BadResultAccess> {
        match self {
            Self::Err(error) => Ok(error),
            Self::Val(_) => Err(BadResultAccess::MissingError),
        }
    }

    /// Mutably borrows the error payload, or reports that the value alternative is active.
    #[inline]
    pub fn try_err_mut(&mut self) -> core::result::Result<&mut E, BadResultAccess> {
        match self {
            Self::Err(error) => Ok(error),
            Self::Val(_) => Err(BadResultAccess::MissingError),
        }
    }

    /// Takes the error payload, or reports that the value alternative is active.
    #[inline]
    pub fn try_into_err(self) -> core::result::Result<E, BadResultAccess> {
        match self {
            Self::Err(error) => Ok(error),
            Self::Val(_) => Err(BadResultAccess::MissingError),
        }
    }

    /// Borrows the value.
    ///
    /// # Panics
    ///
    /// Panics with `bad result access: missing value` if the error
    /// alternative is active.
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn val(&self) -> &V {
        match self.try_val() {
            Ok(value) => value,
            Err(kind) => access_failed(kind),
        }
    }

    /// Mutably borrows the value.
    ///
    /// # Panics
    ///
    /// Panics if the error alternative is active.
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn val_mut(&mut self) -> &mut V {
        match self.try_val_mut() {
            Ok(value) => value,
            Err(kind) => access_failed(kind),
        }
    }

    /// Takes the value.
    ///
    /// # Panics
    ///
    /// Panics if the error alternative is active.
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn into_val(self) -> V {
        match self.try_into_val() {
            Ok(value) => value,
            Err(kind) => access_failed(kind),
        }
    }

    /// Borrows the error payload.
    ///
    /// # Panics
    ///
    /// Panics with `bad result access: missing error` if the value
    /// alternative is active.
    ///
    /// # Examples
    ///
    /// ```
    /// use rail_result::{Error, Result};
    ///
    /// let r: Result<i32, i32> = Error::new(-1).into();
    /// assert_eq!(*r.err(), -1);
    /// ```
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn err(&self) -> &E {
        match self.try_err() {
            Ok(error) => error,
            Err(kind) => access_failed(kind),
        }
    }

    /// Mutably borrows the error payload.
    ///
    /// # Panics
    ///
    /// Panics if the value alternative is active.
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn err_mut(&mut self) -> &mut E {
        match self.try_err_mut() {
            Ok(error) => error,
            Err(kind) => access_failed(kind),
        }
    }

    /// Takes the error payload.
    ///
    /// # Panics
    ///
    /// Panics if the value alternative is active.
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn into_err(self) -> E {
        match self.try_into_err() {
            Ok(error) => error,
            Err(kind) => access_failed(kind),
        }
    }

    /// Converts `&Result<V, E>` into `Result<&V, &E>`.
    #[inline]
    pub const fn as_ref(&self) -> Result<&V, &E> {
        match self {
            Self::Val(value) => Result::Val(value),
            Self::Err(error) => Result::Err(error),
        }
    }

    /// Converts `&mut Result<V, E>` into `Result<&mut V, &mut E>`.
    #[inline]
    pub fn as_mut(&mut self) -> Result<&mut V, &mut E> {
        match self {
            Self::Val(value) => Result::Val(value),
            Self::Err(error) => Result::Err(error),
        }
    }

    /// Returns the value as an `Option`, discarding any error.
    #[must_use]
    #[inline]
    pub fn ok(self) -> Option<V> {
        match self {
            Self::Val(value) => Some(value),
            Self::Err(_) => None,
        }
    }

    /// Returns the error payload as an `Option`, discarding any value.
    #[must_use]
    #[inline]
    pub fn err_opt(self) -> Option<E> {
        match self {
            Self::Val(_) => None,
            Self::Err(error) => Some(error),
        }
    }

    /// Converts into the standard library's `Result`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rail_result::Result;
    ///
    /// let r: Result<i32, &str> = Result::from_val(7);
    /// assert_eq!(r.into_std(), Ok(7));
    /// ```
    #[inline]
    pub fn into_std(self) -> core::result::Result<V, E> {
        match self {
            Self::Val(value) => Ok(value),
            Self::Err(error) => Err(error),
        }
    }

    /// Exchanges the whole state (discriminant and payload) with `other`.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(self, other);
    }

    /// Iterates over the value, yielding nothing for the error alternative.
    #[inline]
    pub fn iter(&self) -> core::option::IntoIter<&V> {
        self.as_ref().ok().into_iter()
    }

    /// Mutably iterates over the value, yielding nothing for the error alternative.
    #[inline]
    pub fn iter_mut(&mut self) -> core::option::IntoIter<&mut V> {
        self.as_mut().ok().into_iter()
    }
}
