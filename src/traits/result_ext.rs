//! Extension trait bridging the standard library's `Result` onto the rail.
//!
//! # Examples
//!
//! ```
//! use rail_result::traits::ResultExt;
//! use rail_result::Result;
//!
//! fn parse(raw: &str) -> Result<i32, String> {
//!     raw.parse::<i32>()
//!         .map_err(|e| e.to_string())
//!         .rail_bind(|n| if n >= 0 { Result::from_val(n) } else { Result::from_err("negative") })
//! }
//!
//! assert_eq!(*parse("12"), 12);
//! assert_eq!(parse("-3").err(), "negative");
//! assert!(parse("x").has_err());
//! ```

use crate::types::Result;

/// Extension methods on `core::result::Result` that produce a rail [`Result`].
pub trait ResultExt<T, E> {
    /// Converts into a rail [`Result`], keeping the active alternative.
    fn into_rail(self) -> Result<T, E>;

    /// Chains a rail step onto a standard result.
    ///
    /// `f` runs only for `Ok`; an `Err` is carried over unchanged.
    fn rail_bind<U, F>(self, f: F) -> Result<U, E>
    where
        F: FnOnce(T) -> Result<U, E>;
}

impl<T, E> ResultExt<T, E> for core::result::Result<T, E> {
    #[inline]
    fn into_rail(self) -> Result<T, E> {
        Result::from(self)
    }

    #[inline]
    fn rail_bind<U, F>(self, f: F) -> Result<U, E>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        self.into_rail().bind(f)
    }
}
