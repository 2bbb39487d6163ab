use crate::types::Result;

/// Abstraction over types that carry an error variant which can be remapped.
///
/// # Type Parameters
///
/// * `E` - The current error type contained in the implementor
///
/// # Associated Types
///
/// * `Success` - The success value type when no error is present
/// * `ErrorOutput<G>` - The output type after mapping the error to type `G`
///
/// # Examples
///
/// ```
/// use rail_result::traits::WithError;
/// use rail_result::Result;
///
/// let r: Result<i32, u32> = Result::from_err(404_u32);
/// let mapped = r.fmap_error(|code| format!("HTTP {}", code));
/// assert_eq!(mapped.err(), "HTTP 404");
/// ```
pub trait WithError<E> {
    type Success;

    type ErrorOutput<G>;

    /// Maps the error value using `f`, producing a new container with error type `G`.
    ///
    /// The success case is left untouched.
    fn fmap_error<F, G>(self, f: F) -> Self::ErrorOutput<G>
    where
        F: FnOnce(E) -> G;

    /// Converts the container into the standard library's `Result`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rail_result::traits::WithError;
    /// use rail_result::Result;
    ///
    /// let r: Result<i32, &str> = Result::from_val(42);
    /// assert_eq!(r.to_result(), Ok(42));
    /// ```
    fn to_result(self) -> core::result::Result<Self::Success, E>;
}

impl<V, E> WithError<E> for Result<V, E> {
    type Success = V;
    type ErrorOutput<G> = Result<V, G>;

    #[inline]
    fn fmap_error<F, G>(self, f: F) -> Self::ErrorOutput<G>
    where
        F: FnOnce(E) -> G,
    {
        self.map_err(f)
    }

    #[inline]
    fn to_result(self) -> core::result::Result<V, E> {
        self.into_std()
    }
}

impl<T, E> WithError<E> for core::result::Result<T, E> {
    type Success = T;
    type ErrorOutput<G> = core::result::Result<T, G>;

    #[inline]
    fn fmap_error<F, G>(self, f: F) -> Self::ErrorOutput<G>
    where
        F: FnOnce(E) -> G,
    {
        self.map_err(f)
    }

    #[inline]
    fn to_result(self) -> core::result::Result<T, E> {
        self
    }
}
