//! Borrowed view over one link of an error chain.

use core::fmt;
use std::error::Error;

use crate::traits::Structured;
use crate::types::{Cause, StructuredError};

/// One link of an error chain, classified up front.
///
/// Traversal functions match on this instead of probing error types at run
/// time. A structured link exposes its pairs and cause; an opaque link only
/// continues through [`Error::source`].
#[derive(Clone, Copy)]
pub enum ErrorRef<'a> {
    Structured(&'a dyn Structured),
    Opaque(&'a (dyn Error + 'static)),
}

impl<'a> ErrorRef<'a> {
    /// Views an arbitrary error as a link.
    ///
    /// A [`StructuredError`] behind `error` is recognized and viewed as a
    /// structured link; anything else is opaque.
    #[inline]
    pub fn from_dyn(error: &'a (dyn Error + 'static)) -> Self {
        match error.downcast_ref::<StructuredError>() {
            Some(structured) => Self::Structured(structured),
            None => Self::Opaque(error),
        }
    }

    /// Whether this link carries pairs and a structured cause.
    #[inline]
    pub fn is_structured(&self) -> bool {
        matches!(self, Self::Structured(_))
    }

    /// Returns the structured link, if this is one.
    #[inline]
    pub fn as_structured(&self) -> Option<&'a dyn Structured> {
        match *self {
            Self::Structured(s) => Some(s),
            Self::Opaque(_) => None,
        }
    }

    /// Borrows the link as a plain `dyn Error`.
    #[inline]
    pub fn as_error(&self) -> &'a (dyn Error + 'static) {
        match *self {
            Self::Structured(s) => s.as_dyn_error(),
            Self::Opaque(e) => e,
        }
    }

    /// The next link: a structured cause, or the source of an opaque error.
    pub fn cause(&self) -> Option<ErrorRef<'a>> {
        match *self {
            Self::Structured(s) => s.cause_ref().map(Cause::as_error_ref),
            Self::Opaque(e) => e.source().map(ErrorRef::from_dyn),
        }
    }

    /// Iterates from this link down to the last one.
    #[inline]
    pub fn chain(&self) -> Chain<'a> {
        Chain { next: Some(*self) }
    }

    /// Downcasts this link to a concrete error type.
    #[inline]
    pub fn downcast_ref<T: Error + 'static>(&self) -> Option<&'a T> {
        self.as_error().downcast_ref::<T>()
    }
}

impl fmt::Debug for ErrorRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Structured(s) => f.debug_tuple("Structured").field(s).finish(),
            Self::Opaque(e) => f.debug_tuple("Opaque").field(e).finish(),
        }
    }
}

impl fmt::Display for ErrorRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_error(), f)
    }
}

impl<'a> From<&'a StructuredError> for ErrorRef<'a> {
    #[inline]
    fn from(error: &'a StructuredError) -> Self {
        Self::Structured(error)
    }
}

impl<'a> From<&'a dyn Structured> for ErrorRef<'a> {
    #[inline]
    fn from(error: &'a dyn Structured) -> Self {
        Self::Structured(error)
    }
}

impl<'a> From<&'a (dyn Error + 'static)> for ErrorRef<'a> {
    #[inline]
    fn from(error: &'a (dyn Error + 'static)) -> Self {
        Self::from_dyn(error)
    }
}

impl<'a> From<&'a Cause> for ErrorRef<'a> {
    #[inline]
    fn from(cause: &'a Cause) -> Self {
        cause.as_error_ref()
    }
}

/// Iterator over the links of an error chain, outermost first.
///
/// Created by [`ErrorRef::chain`].
#[derive(Debug, Clone)]
pub struct Chain<'a> {
    next: Option<ErrorRef<'a>>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = ErrorRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.cause();
        Some(current)
    }
}
