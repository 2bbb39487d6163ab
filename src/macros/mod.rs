//! Early-return macros for functions that produce a rail [`Result`](crate::Result).
//!
//! The `?` operator only works with the standard library's `Result`, so
//! these macros cover the same ground:
//!
//! - [`macro@crate::rail`] - yields the held value, or returns the held
//!   error from the enclosing function.
//! - [`macro@crate::fail`] - returns an error from the enclosing function.
//!
//! # Examples
//!
//! ```
//! use rail_result::{fail, rail, Result};
//!
//! fn checked_div(a: i32, b: i32) -> Result<i32, String> {
//!     if b == 0 {
//!         fail!("division by zero");
//!     }
//!     Result::from_val(a / b)
//! }
//!
//! fn ratio_sum(a: i32, b: i32, c: i32) -> Result<i32, String> {
//!     let x = rail!(checked_div(a, b));
//!     let y = rail!(checked_div(a, c));
//!     Result::from_val(x + y)
//! }
//!
//! assert_eq!(*ratio_sum(12, 3, 4), 7);
//! assert_eq!(ratio_sum(12, 0, 4).err(), "division by zero");
//! ```

/// Unwraps the value of a rail [`Result`](crate::Result), or returns its
/// error from the enclosing function.
///
/// The error payload is converted with `Into`, so a step may use a
/// narrower error type than the function it is called from.
///
/// # Syntax
///
/// - `rail!(expr)` - `expr` must evaluate to a `Result<V, E>`
///
/// # Examples
///
/// ```rust
/// use rail_result::{rail, Result};
///
/// fn step(x: u32) -> Result<u32, &'static str> {
///     if x > 10 { Result::from_err("too large") } else { Result::from_val(x * 2) }
/// }
///
/// fn pipeline(x: u32) -> Result<u32, String> {
///     let once = rail!(step(x));
///     let twice = rail!(step(once));
///     Result::from_val(twice)
/// }
///
/// assert_eq!(*pipeline(2), 8);
/// assert_eq!(pipeline(6).err(), "too large");
/// ```
#[macro_export]
macro_rules! rail {
    ($expr:expr $(,)?) => {
        match $expr {
            $crate::Result::Val(value) => value,
            $crate::Result::Err(error) => {
                return $crate::Result::Err(::core::convert::Into::into(error));
            },
        }
    };
}

/// Returns the error alternative from the enclosing function.
///
/// # Examples
///
/// ```rust
/// use rail_result::{fail, Result};
///
/// fn require_even(x: i32) -> Result<i32, String> {
///     if x % 2 != 0 {
///         fail!(format!("{} is odd", x));
///     }
///     Result::from_val(x)
/// }
///
/// assert!(require_even(3).has_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($error:expr $(,)?) => {
        return $crate::Result::from_err($error)
    };
}
