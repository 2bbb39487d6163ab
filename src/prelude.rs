//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use rail_result::prelude::*;
//!
//! fn lookup(id: u32) -> Result<&'static str, String> {
//!     match id {
//!         1 => Result::from_val("root"),
//!         _ => fail!(format!("no user {id}")),
//!     }
//! }
//!
//! assert_eq!(lookup(1).or_value(|| "guest"), "root");
//! assert_eq!(lookup(7).or_value(|| "guest"), "guest");
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`rail!`], [`fail!`]
//! - **Types**: [`Result`], [`Error`], [`BadResultAccess`]
//! - **Functions**: [`make_error`]
//! - **Traits**: [`ErrorCategory`], [`ResultExt`], [`WithError`]

// Macros
pub use crate::{fail, rail};

// Core types
pub use crate::types::{make_error, BadResultAccess, Error, Result};

// Traits
pub use crate::traits::{ErrorCategory, ResultExt, WithError};
#[cfg(feature = "tracing")]
pub use crate::traits::TraceExt;
