// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

/// Error returned while setting up the tracer provider.
///
/// Wraps any source error; sampling and exporting never produce one.
#[repr(transparent)]
pub struct Error {
    inner: anyhow::Error,
}

impl Error {
    /// An error carrying only a message
    pub fn msg<M>(message: M) -> Self
    where
        M: fmt::Display + fmt::Debug + Send + Sync + 'static,
    {
        Self {
            inner: anyhow::Error::msg(message),
        }
    }

    /// Wraps the error with a higher level description of what failed
    #[must_use]
    pub fn context<C>(self, context: C) -> Self
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        Self {
            inner: self.inner.context(context),
        }
    }

    /// The lowest level cause of this error
    pub fn root_cause(&self) -> &(dyn std::error::Error + 'static) {
        self.inner.root_cause()
    }
}

impl<E> From<E> for Error
where
    E: std::error::Error + Sync + Send + 'static,
{
    fn from(error: E) -> Self {
        Self {
            inner: anyhow::Error::new(error),
        }
    }
}

impl From<Error> for Box<dyn std::error::Error + Send + Sync> {
    fn from(error: Error) -> Box<dyn std::error::Error + Send + Sync> {
        error.inner.into()
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.inner.fmt(f)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The alternate form includes the chain of causes
        if f.alternate() {
            write!(f, "{:#}", self.inner)
        } else {
            fmt::Display::fmt(&self.inner, f)
        }
    }
}
