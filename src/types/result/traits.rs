use core::ops::{Deref, DerefMut};

use crate::types::error::Error;
use crate::types::result::Result;

/// An [`Error`] lifts into the error alternative, converting its payload.
impl<V, E, U> From<Error<U>> for Result<V, E>
where
    U: Into<E>,
{
    #[inline]
    fn from(error: Error<U>) -> Self {
        Self::Err(error.into_inner().into())
    }
}

impl<V, E> From<core::result::Result<V, E>> for Result<V, E> {
    #[inline]
    fn from(result: core::result::Result<V, E>) -> Self {
        match result {
            Ok(value) => Self::Val(value),
            Err(error) => Self::Err(error),
        }
    }
}

impl<V, E> From<Result<V, E>> for core::result::Result<V, E> {
    #[inline]
    fn from(result: Result<V, E>) -> Self {
        result.into_std()
    }
}

/// Boolean view of a result: `true` exactly when a value is held.
impl<V, E> From<&Result<V, E>> for bool {
    #[inline]
    fn from(result: &Result<V, E>) -> Self {
        result.has_val()
    }
}

impl<V: Default, E> Default for Result<V, E> {
    #[inline]
    fn default() -> Self {
        Self::Val(V::default())
    }
}

/// Checked dereference to the held value.
///
/// Panics with `bad result access: missing value` on the error alternative.
impl<V, E> Deref for Result<V, E> {
    type Target = V;

    #[inline]
    #[track_caller]
    fn deref(&self) -> &V {
        self.val()
    }
}

impl<V, E> DerefMut for Result<V, E> {
    #[inline]
    #[track_caller]
    fn deref_mut(&mut self) -> &mut V {
        self.val_mut()
    }
}

impl<V, E> IntoIterator for Result<V, E> {
    type Item = V;
    type IntoIter = core::option::IntoIter<V>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.ok().into_iter()
    }
}

impl<'a, V, E> IntoIterator for &'a Result<V, E> {
    type Item = &'a V;
    type IntoIter = core::option::IntoIter<&'a V>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, V, E> IntoIterator for &'a mut Result<V, E> {
    type Item = &'a mut V;
    type IntoIter = core::option::IntoIter<&'a mut V>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// Fail-fast collection: stops at the first error and returns it.
///
/// # Examples
///
/// ```
/// use rail_result::Result;
///
/// let all: Result<Vec<i32>, &str> =
///     vec![Result::<i32, &str>::from_val(1), Result::from_val(2)].into_iter().collect();
/// assert_eq!(*all, vec![1, 2]);
///
/// let first_bad: Result<Vec<i32>, &str> =
///     vec![Result::<i32, &str>::from_val(1), Result::from_err("a"), Result::from_err("b")]
///         .into_iter()
///         .collect();
/// assert_eq!(*first_bad.err(), "a");
/// ```
impl<V, E, C> FromIterator<Result<V, E>> for Result<C, E>
where
    C: FromIterator<V>,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Result<V, E>>,
    {
        let mut failure = None;
        let collected: C = iter
            .into_iter()
            .map_while(|item| match item {
                Result::Val(value) => Some(value),
                Result::Err(error) => {
                    failure = Some(error);
                    None
                },
            })
            .collect();

        match failure {
            Some(error) => Self::Err(error),
            None => Self::Val(collected),
        }
    }
}
