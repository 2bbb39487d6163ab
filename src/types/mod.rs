//! Core types: the [`Error`] payload holder, the [`Result`] tagged union,
//! and the [`BadResultAccess`] failure raised by checked accessors.
//!
//! # Examples
//!
//! ```
//! use rail_result::{Error, Result};
//!
//! let ok: Result<i32, i32> = Result::from_val(5);
//! assert!(ok.has_val() && *ok == 5);
//!
//! let failed: Result<i32, i32> = Error::new(-1).into();
//! assert!(failed.has_err() && *failed.err() == -1);
//! ```
use smallvec::SmallVec;

pub mod access;
pub(crate) mod alloc_type;
pub mod error;
pub mod result;

pub use access::BadResultAccess;
pub use error::{make_error, Error};
pub use result::Result;

/// SmallVec-backed collection used when gathering error payloads.
///
/// Uses inline storage for one element, the common case where a batch
/// fails at a single item.
pub type ErrorVec<E> = SmallVec<[E; 1]>;

/// SmallVec-backed collection used when gathering values.
pub type ValueVec<V> = SmallVec<[V; 4]>;
