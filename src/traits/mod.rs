//! Traits layered on top of [`Result`](crate::Result).
//!
//! - [`ErrorCategory`]: lifts plain values and errors into a container
//! - [`WithError`]: remaps the error side of a container
//! - [`ResultExt`]: bridges `core::result::Result` onto the rail
//! - `TraceExt`: logs the error track (requires the `tracing` feature)
//!
//! # Examples
//!
//! ```
//! use rail_result::traits::{ErrorCategory, WithError};
//! use rail_result::Result;
//!
//! let lifted: Result<i32, &str> = <Result<(), &str>>::lift(7);
//! let remapped: Result<i32, usize> = lifted.fmap_error(str::len);
//! assert_eq!(*remapped, 7);
//! ```

pub mod error_category;
pub mod result_ext;
#[cfg(feature = "tracing")]
pub mod trace;
pub mod with_error;

pub use error_category::ErrorCategory;
pub use result_ext::ResultExt;
#[cfg(feature = "tracing")]
pub use trace::TraceExt;
pub use with_error::WithError;
