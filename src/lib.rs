//! A two-state fallible value with railway-oriented combinators.
//!
//! [`Result<V, E>`](Result) holds either a value or an error payload;
//! [`Error<E>`](Error) marks a payload as the failure side when building
//! one. Each submodule re-exports its public surface from here, so
//! consumers can simply depend on `rail_result::*` or pick focused pieces
//! as needed.
//!
//! # Examples
//!
//! ## Construction and Access
//!
//! ```
//! use rail_result::{Error, Result};
//!
//! let r: Result<i32, i32> = Result::from_val(5);
//! assert!(r.has_val());
//! assert_eq!(*r, 5);
//!
//! let e: Result<i32, i32> = Error::new(-1).into();
//! assert!(e.has_err());
//! assert_eq!(*e.err(), -1);
//! ```
//!
//! ## Railway Composition
//!
//! ```
//! use rail_result::{make_error, Result};
//!
//! fn square(i: i32) -> Result<i32, &'static str> {
//!     if i <= 0 {
//!         return make_error("square of a non-positive number").into();
//!     }
//!     Result::from_val(i * i)
//! }
//!
//! assert_eq!(square(0).bind(square).fmap(|x| x + 5).or_value(|| 100), 100);
//! assert_eq!(square(5).fmap(|x| x + 5).bind(square).or_value(|| 100), 900);
//! ```
//!
//! ## Checked Access
//!
//! ```should_panic
//! use rail_result::Result;
//!
//! let r: Result<i32, &str> = Result::from_err("offline");
//! let v: i32 = *r; // panics: bad result access: missing value
//! # let _ = v;
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Conversions between standard results, rail results, and batches
pub mod convert;
/// Early-return macros
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Traits for lifting, remapping, and logging results
pub mod traits;
/// Error wrapper, result type, and access failure
pub mod types;

pub use traits::*;
pub use types::{make_error, BadResultAccess, Error, ErrorVec, Result, ValueVec};
