//! The single failure kind intrinsic to [`Result`](crate::Result).
//!
//! Every checked accessor either returns the requested payload or reports
//! which alternative was missing. The panicking accessors (`val`, `err`,
//! `Deref`, ...) turn a [`BadResultAccess`] into a panic; the `try_*`
//! accessors hand it back as a value.
//!
//! # Examples
//!
//! ```
//! use rail_result::{BadResultAccess, Error, Result};
//!
//! let r: Result<i32, &str> = Error::new("boom").into();
//! assert_eq!(r.try_val(), Err(BadResultAccess::MissingValue));
//! assert_eq!(BadResultAccess::MissingValue.to_string(), "missing value");
//! ```
use core::fmt;

/// Wrong-alternative access on a [`Result`](crate::Result).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BadResultAccess {
    /// A value accessor was used while the error alternative is active.
    MissingValue,
    /// An error accessor was used while the value alternative is active.
    MissingError,
}

impl BadResultAccess {
    /// Short human-readable description of the misuse.
    #[must_use]
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MissingValue => "missing value",
            Self::MissingError => "missing error",
        }
    }
}

impl fmt::Display for BadResultAccess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BadResultAccess {}

/// Raises the hard failure for a checked accessor.
#[cold]
#[track_caller]
pub(crate) fn access_failed(kind: BadResultAccess) -> ! {
    #[cfg(feature = "tracing")]
    tracing::error!(kind = kind.as_str(), "bad result access");

    panic!("bad result access: {}", kind)
}
