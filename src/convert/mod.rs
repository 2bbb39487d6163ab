//! Conversion helpers between the standard `Result`, rail [`Result`], and
//! batches of results.
//!
//! These adapters make it straightforward to adopt `rail-result` at the
//! edges of an existing codebase and to fold many fallible outcomes into
//! one.
//!
//! # Examples
//!
//! ```
//! use rail_result::convert::*;
//! use rail_result::Result;
//!
//! let std_ok: core::result::Result<i32, &str> = Ok(42);
//! let rail = from_std(std_ok);
//! assert!(rail.has_val());
//! assert_eq!(into_std(rail), Ok(42));
//!
//! let batch = vec![Result::<i32, &str>::from_val(1), Result::from_err("bad"), Result::from_val(3)];
//! let (vals, errs) = partition_results(batch);
//! assert_eq!(vals.as_slice(), &[1, 3]);
//! assert_eq!(errs.as_slice(), &["bad"]);
//! ```

use crate::types::alloc_type::Vec;
use crate::types::{ErrorVec, Result, ValueVec};

/// Converts a standard `Result` into a rail [`Result`].
///
/// # Examples
///
/// ```
/// use rail_result::convert::from_std;
///
/// let err: core::result::Result<i32, &str> = Err("failed");
/// assert_eq!(*from_std(err).err(), "failed");
/// ```
#[inline]
pub fn from_std<V, E>(result: core::result::Result<V, E>) -> Result<V, E> {
    result.into()
}

/// Converts a rail [`Result`] into a standard `Result`.
#[inline]
pub fn into_std<V, E>(result: Result<V, E>) -> core::result::Result<V, E> {
    result.into_std()
}

/// Collects values until the first error, which is returned instead.
///
/// Items after the first error are not pulled from the iterator.
///
/// # Examples
///
/// ```
/// use rail_result::convert::collect_vals;
/// use rail_result::Result;
///
/// let all = collect_vals([Result::<i32, &str>::from_val(1), Result::from_val(2)]);
/// assert_eq!(*all, vec![1, 2]);
///
/// let failed = collect_vals([Result::<i32, &str>::from_err("x"), Result::from_val(2)]);
/// assert_eq!(*failed.err(), "x");
/// ```
#[inline]
pub fn collect_vals<I, V, E>(results: I) -> Result<Vec<V>, E>
where
    I: IntoIterator<Item = Result<V, E>>,
{
    results.into_iter().collect()
}

/// Splits results into the held values and the held errors, each in
/// input order.
///
/// # Examples
///
/// ```
/// use rail_result::convert::partition_results;
/// use rail_result::Result;
///
/// let (vals, errs) = partition_results([
///     Result::<i32, &str>::from_err("a"),
///     Result::from_val(2),
///     Result::from_err("b"),
/// ]);
/// assert_eq!(vals.as_slice(), &[2]);
/// assert_eq!(errs.as_slice(), &["a", "b"]);
/// ```
pub fn partition_results<I, V, E>(results: I) -> (ValueVec<V>, ErrorVec<E>)
where
    I: IntoIterator<Item = Result<V, E>>,
{
    let mut values = ValueVec::new();
    let mut errors = ErrorVec::new();

    for result in results {
        match result {
            Result::Val(value) => values.push(value),
            Result::Err(error) => errors.push(error),
        }
    }

    (values, errors)
}

/// Folds gathered errors back into one result holding the first error,
/// or `Val(())` when there are none.
///
/// # Examples
///
/// ```
/// use rail_result::convert::first_error;
/// use rail_result::ErrorVec;
///
/// let none: ErrorVec<&str> = ErrorVec::new();
/// assert!(first_error(none).has_val());
///
/// let some: ErrorVec<&str> = ["first", "second"].into_iter().collect();
/// assert_eq!(*first_error(some).err(), "first");
/// ```
#[inline]
pub fn first_error<E>(errors: ErrorVec<E>) -> Result<(), E> {
    match errors.into_iter().next() {
        Some(error) => Result::Err(error),
        None => Result::Val(()),
    }
}
