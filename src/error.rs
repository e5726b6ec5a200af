//! Error handling for the `try-catch` crate.
//!
//! Two kinds of failure exist and they are deliberately kept apart:
//!
//! * A *governed* operation failing (panicking) is the normal case this
//!   crate exists to absorb. It is never raised to the caller; it is
//!   returned as data, as a [`CaughtPanic`] inside an
//!   [`Outcome::Failure`](crate::Outcome::Failure) slot.
//! * The combinator itself being handed a structurally invalid input is a
//!   programmer error, reported eagerly through the [`Error`] enum before
//!   any governed operation runs. All public, fallible APIs return a
//!   [`Result<T, Error>`].

use std::any::Any;
use std::fmt;

/// Error type for this crate.
#[non_exhaustive]
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// The input does not form a valid governed batch.
    ///
    /// The only shape violation the type system cannot rule out is two
    /// batch tasks registered under the same name, which would make it
    /// impossible to attribute each result to exactly one entry. This is
    /// raised synchronously, before any task is invoked, and is never
    /// folded into a [`BatchOutcome`](crate::BatchOutcome).
    #[error("invalid governed input: duplicate task name `{0}`")]
    InvalidInput(String),
}

/// Convenient alias used throughout the crate.
///
/// This corresponds to `core::result::Result<T, try_catch::Error>`.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// The verbatim payload of a panic caught from a governed operation.
///
/// The payload box is carried exactly as `std::panic::catch_unwind`
/// delivered it, so callers that need the original value (including
/// non-string panic payloads) can recover it with [`into_payload`]. The
/// common `panic!("...")` payloads are a `&str` or a `String`; those are
/// surfaced through [`message`] and used for `Display`.
///
/// [`into_payload`]: CaughtPanic::into_payload
/// [`message`]: CaughtPanic::message
pub struct CaughtPanic {
    payload: Box<dyn Any + Send + 'static>,
}

impl CaughtPanic {
    pub(crate) fn new(payload: Box<dyn Any + Send + 'static>) -> Self {
        Self { payload }
    }

    /// The panic message, when the payload is one of the conventional
    /// string types produced by `panic!`.
    pub fn message(&self) -> Option<&str> {
        if let Some(s) = self.payload.downcast_ref::<&str>() {
            Some(s)
        } else {
            self.payload.downcast_ref::<String>().map(String::as_str)
        }
    }

    /// Borrow the raw panic payload.
    pub fn payload(&self) -> &(dyn Any + Send + 'static) {
        &*self.payload
    }

    /// Consume the caught panic, handing back the payload box exactly as
    /// the unwind machinery produced it.
    pub fn into_payload(self) -> Box<dyn Any + Send + 'static> {
        self.payload
    }
}

impl fmt::Display for CaughtPanic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.message() {
            Some(msg) => write!(f, "governed operation panicked: {msg}"),
            None => f.write_str("governed operation panicked with a non-string payload"),
        }
    }
}

impl fmt::Debug for CaughtPanic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CaughtPanic")
            .field("message", &self.message())
            .finish_non_exhaustive()
    }
}

impl std::error::Error for CaughtPanic {}
