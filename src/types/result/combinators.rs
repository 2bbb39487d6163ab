//! Railway-oriented combinators for [`Result`].
//!
//! `fmap` and `bind` run only on the value track; once a result holds an
//! error, every later step passes it along untouched and the supplied
//! closures are never called. `or_value`/`val_or`/`err_or` leave the
//! railway with a plain value.
//!
//! # Examples
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
//! let short = square(0).bind(square).fmap(|x| x + 5).or_value(|| 100);
//! assert_eq!(short, 100);
//!
//! let long = square(5).fmap(|x| x + 5).bind(square).or_value(|| 100);
//! assert_eq!(long, 900);
//! ```
use crate::types::result::Result;

impl<V, E> Result<V, E> {
    /// Replaces a held value with `f(value)`; leaves an error untouched.
    ///
    /// The result of `f` is converted into `V`, so the value type never
    /// changes. Use [`Result::map`] to change it.
    ///
    /// # Examples
    ///
    /// ```
    /// use rail_result::Result;
    ///
    /// let r: Result<i32, &str> = Result::from_val(20);
    /// assert_eq!(*r.fmap(|x| x + 1).fmap(|x| x * 2), 42);
    ///
    /// let e: Result<i32, &str> = Result::from_err("down");
    /// assert!(e.fmap(|x| x + 1).has_err());
    /// ```
    #[inline]
    pub fn fmap<F, U>(self, f: F) -> Self
    where
        F: FnOnce(V) -> U,
        U: Into<V>,
    {
        match self {
            Self::Val(value) => Self::Val(f(value).into()),
            Self::Err(error) => Self::Err(error),
        }
    }

    /// In-place [`fmap`](Result::fmap): rewrites a held value through a
    /// reference and returns `&mut Self` for chaining.
    ///
    /// # Examples
    ///
    /// ```
    /// use rail_result::Result;
    ///
    /// let mut r: Result<String, ()> = Result::from_val("rail");
    /// r.fmap_in_place(|s| s.to_uppercase()).fmap_in_place(|s| format!("{s}!"));
    /// assert_eq!(r.val(), "RAIL!");
    /// ```
    #[inline]
    pub fn fmap_in_place<F, U>(&mut self, f: F) -> &mut Self
    where
        F: FnOnce(&V) -> U,
        U: Into<V>,
    {
        if let Self::Val(value) = self {
            *value = f(value).into();
        }
        self
    }

    /// Chains a fallible step that keeps the same error type.
    ///
    /// With a value, returns `f(value)`. With an error, returns that error
    /// unchanged and never calls `f`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rail_result::Result;
    ///
    /// fn half(x: i32) -> Result<i32, String> {
    ///     if x % 2 == 0 {
    ///         Result::from_val(x / 2)
    ///     } else {
    ///         Result::from_err(format!("{x} is odd"))
    ///     }
    /// }
    ///
    /// assert_eq!(*Result::<i32, String>::from_val(8).bind(half).bind(half), 2);
    /// assert_eq!(Result::<i32, String>::from_val(6).bind(half).bind(half).err(), "3 is odd");
    /// ```
    #[inline]
    pub fn bind<V2, F>(self, f: F) -> Result<V2, E>
    where
        F: FnOnce(V) -> Result<V2, E>,
    {
        match self {
            Self::Val(value) => f(value),
            Self::Err(error) => Result::Err(error),
        }
    }

    /// Alias of [`bind`](Result::bind) under the standard library's name.
    #[inline]
    pub fn and_then<V2, F>(self, f: F) -> Result<V2, E>
    where
        F: FnOnce(V) -> Result<V2, E>,
    {
        self.bind(f)
    }

    /// Maps the value to a possibly different type.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Result<U, E>
    where
        F: FnOnce(V) -> U,
    {
        match self {
            Self::Val(value) => Result::Val(f(value)),
            Self::Err(error) => Result::Err(error),
        }
    }

    /// Maps the error payload to a possibly different type.
    #[inline]
    pub fn map_err<G, F>(self, f: F) -> Result<V, G>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Self::Val(value) => Result::Val(value),
            Self::Err(error) => Result::Err(f(error)),
        }
    }

    /// Recovers from an error by running `f` on it; a value passes through.
    ///
    /// # Examples
    ///
    /// ```
    /// use rail_result::Result;
    ///
    /// let r: Result<u8, &str> = Result::from_err("cache miss");
    /// let recovered: Result<u8, ()> = r.or_else(|_| Result::Val(0));
    /// assert_eq!(*recovered, 0);
    /// ```
    #[inline]
    pub fn or_else<G, F>(self, f: F) -> Result<V, G>
    where
        F: FnOnce(E) -> Result<V, G>,
    {
        match self {
            Self::Val(value) => Result::Val(value),
            Self::Err(error) => f(error),
        }
    }

    /// Calls `f` with a reference to the held value, then returns `self`.
    #[inline]
    pub fn inspect<F>(self, f: F) -> Self
    where
        F: FnOnce(&V),
    {
        if let Self::Val(value) = &self {
            f(value);
        }
        self
    }

    /// Calls `f` with a reference to the held error, then returns `self`.
    #[inline]
    pub fn inspect_err<F>(self, f: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Self::Err(error) = &self {
            f(error);
        }
        self
    }

    /// Returns a copy of the held value, or the supplier's result.
    ///
    /// The receiver is only borrowed. The supplier runs only when the
    /// error alternative is active.
    ///
    /// # Examples
    ///
    /// ```
    /// use rail_result::Result;
    ///
    /// let r: Result<f32, &str> = Result::from_err("no reading");
    /// assert_eq!(r.or_value(|| 0.0_f32), 0.0);
    /// assert!(r.has_err());
    /// ```
    #[must_use]
    #[inline]
    pub fn or_value<F, U>(&self, f: F) -> V
    where
        V: Clone,
        F: FnOnce() -> U,
        U: Into<V>,
    {
        match self {
            Self::Val(value) => value.clone(),
            Self::Err(_) => f().into(),
        }
    }

    /// Consuming form of [`or_value`](Result::or_value); needs no `Clone`.
    #[must_use]
    #[inline]
    pub fn val_or<F, U>(self, f: F) -> V
    where
        F: FnOnce() -> U,
        U: Into<V>,
    {
        match self {
            Self::Val(value) => value,
            Self::Err(_) => f().into(),
        }
    }

    /// Returns a copy of the held error, or the supplier's result.
    ///
    /// Mirror of [`or_value`](Result::or_value) for the error side.
    #[must_use]
    #[inline]
    pub fn err_or<F, U>(&self, f: F) -> E
    where
        E: Clone,
        F: FnOnce() -> U,
        U: Into<E>,
    {
        match self {
            Self::Err(error) => error.clone(),
            Self::Val(_) => f().into(),
        }
    }

    /// Consuming form of [`err_or`](Result::err_or).
    #[must_use]
    #[inline]
    pub fn into_err_or<F, U>(self, f: F) -> E
    where
        F: FnOnce() -> U,
        U: Into<E>,
    {
        match self {
            Self::Err(error) => error,
            Self::Val(_) => f().into(),
        }
    }
}

impl<V, E> Result<Result<V, E>, E> {
    /// Collapses one level of nesting; equivalent to `bind` with the identity.
    ///
    /// # Examples
    ///
    /// ```
    /// use rail_result::Result;
    ///
    /// let nested: Result<Result<i32, &str>, &str> = Result::Val(Result::Val(3));
    /// assert_eq!(*nested.flatten(), 3);
    /// ```
    #[inline]
    pub fn flatten(self) -> Result<V, E> {
        self.bind(|inner| inner)
    }
}
