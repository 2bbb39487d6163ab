use crate::traits::WithError;
use crate::types::Result;

/// Lifts plain values and errors into a result-like container.
///
/// `lift` is the unit of the monad laws that [`Result::bind`] satisfies:
/// `lift(a).bind(f)` equals `f(a)`, and `m.bind(lift)` equals `m`.
///
/// # Examples
///
/// ```
/// use rail_result::traits::ErrorCategory;
/// use rail_result::Result;
///
/// let ok: Result<i32, String> = <Result<(), String>>::lift(42);
/// assert_eq!(*ok, 42);
///
/// let err: Result<i32, String> = <Result<(), String>>::handle_error("boom".to_string());
/// assert_eq!(err.err(), "boom");
/// ```
pub trait ErrorCategory<E> {
    type ErrorFunctor<T>: WithError<E, Success = T>;

    fn lift<T>(value: T) -> Self::ErrorFunctor<T>;

    fn handle_error<T>(error: E) -> Self::ErrorFunctor<T>;
}

impl<E> ErrorCategory<E> for Result<(), E> {
    type ErrorFunctor<T> = Result<T, E>;

    #[inline]
    fn lift<T>(value: T) -> Result<T, E> {
        Result::Val(value)
    }

    #[inline]
    fn handle_error<T>(error: E) -> Result<T, E> {
        Result::Err(error)
    }
}

impl<E> ErrorCategory<E> for core::result::Result<(), E> {
    type ErrorFunctor<T> = core::result::Result<T, E>;

    #[inline]
    fn lift<T>(value: T) -> core::result::Result<T, E> {
        Ok(value)
    }

    #[inline]
    fn handle_error<T>(error: E) -> core::result::Result<T, E> {
        Err(error)
    }
}
