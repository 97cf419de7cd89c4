//! The cause held by a structured error.

use core::fmt;
use std::error::Error;
use std::sync::Arc;

use crate::traits::Structured;
use crate::types::{ErrorRef, StructuredError};

/// Either a structured error that continues key/value traversal, or an opaque
/// error that ends it.
///
/// Causes are reference counted, so the same cause can be wrapped by several
/// errors without cloning it.
#[derive(Debug, Clone)]
pub enum Cause {
    Structured(Arc<dyn Structured>),
    Opaque(Arc<dyn Error + Send + Sync + 'static>),
}

impl Cause {
    /// Wraps an error implementing [`Structured`].
    #[inline]
    pub fn structured<S: Structured>(error: S) -> Self {
        Self::Structured(Arc::new(error))
    }

    /// Wraps any other error. Key/value traversal stops at this cause.
    ///
    /// A [`StructuredError`] passed here, directly or behind a box, is still
    /// stored as a structured cause so its pairs stay reachable.
    #[inline]
    pub fn opaque<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self::from(Box::new(error) as Box<dyn Error + Send + Sync + 'static>)
    }

    /// Whether key/value traversal continues through this cause.
    #[inline]
    pub fn is_structured(&self) -> bool {
        matches!(self, Self::Structured(_))
    }

    /// Borrows the cause as an [`ErrorRef`].
    #[inline]
    pub fn as_error_ref(&self) -> ErrorRef<'_> {
        match self {
            Self::Structured(s) => ErrorRef::Structured(&**s),
            Self::Opaque(e) => ErrorRef::Opaque(&**e),
        }
    }

    /// Borrows the cause as a plain `dyn Error`.
    #[inline]
    pub fn as_error(&self) -> &(dyn Error + 'static) {
        self.as_error_ref().as_error()
    }
}

impl fmt::Display for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Structured(s) => fmt::Display::fmt(s, f),
            Self::Opaque(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl From<StructuredError> for Cause {
    #[inline]
    fn from(error: StructuredError) -> Self {
        Self::Structured(Arc::new(error))
    }
}

impl From<Arc<StructuredError>> for Cause {
    #[inline]
    fn from(error: Arc<StructuredError>) -> Self {
        Self::Structured(error)
    }
}

impl From<Arc<dyn Structured>> for Cause {
    #[inline]
    fn from(error: Arc<dyn Structured>) -> Self {
        Self::Structured(error)
    }
}

impl From<Box<dyn Error + Send + Sync + 'static>> for Cause {
    #[inline]
    fn from(error: Box<dyn Error + Send + Sync + 'static>) -> Self {
        match error.downcast::<StructuredError>() {
            Ok(structured) => Self::Structured(Arc::<StructuredError>::from(structured)),
            Err(error) => Self::Opaque(Arc::from(error)),
        }
    }
}

impl From<Arc<dyn Error + Send + Sync + 'static>> for Cause {
    #[inline]
    fn from(error: Arc<dyn Error + Send + Sync + 'static>) -> Self {
        // Clones the wrapper only; its own cause stays shared.
        match error.downcast_ref::<StructuredError>() {
            Some(structured) => Self::Structured(Arc::new(structured.clone())),
            None => Self::Opaque(error),
        }
    }
}
