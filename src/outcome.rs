//! The paired success/failure value the combinators produce instead of
//! letting a panic unwind through the caller.
//!
//! [`Outcome`] is a two-variant sum type, so the central invariant (exactly
//! one of the value/error slots is present, never both, never neither) is
//! enforced by construction rather than by discipline. An `Outcome` is plain
//! immutable data: inspecting it any number of times yields the same answer,
//! and an `Outcome` nested inside another one is ordinary payload, never
//! flattened.
//!
//! # Example
//!
//! ```
//! use try_catch::try_catch;
//!
//! let (value, error) = try_catch(|| "it worked").into_parts();
//! assert_eq!(value, Some("it worked"));
//! assert!(error.is_none());
//! ```

use crate::error::CaughtPanic;

/// The result of a single governed operation.
///
/// Produced by [`try_catch`](crate::try_catch) and
/// [`try_catch_future`](crate::try_catch_future) with the default error
/// type, and convertible from any [`Result`] for callers that want the same
/// shape for non-panicking failures.
#[must_use = "an Outcome carries the governed operation's failure; check it before using the value"]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome<T, E = CaughtPanic> {
    /// The governed operation completed and returned a value.
    ///
    /// A unit return is still a success: `Success(())` is a present value,
    /// not an absent one. Absence is reserved for the slot that does not
    /// apply.
    Success(T),
    /// The governed operation failed; the failure value is carried verbatim.
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    /// Whether the value slot is the present one.
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// Whether the error slot is the present one.
    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }

    /// Borrow the success value, if this is a success.
    pub fn value(&self) -> Option<&T> {
        match self {
            Outcome::Success(value) => Some(value),
            Outcome::Failure(_) => None,
        }
    }

    /// Borrow the failure value, if this is a failure.
    pub fn error(&self) -> Option<&E> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(error) => Some(error),
        }
    }

    /// Consume the outcome, keeping the success value if present.
    pub fn into_value(self) -> Option<T> {
        match self {
            Outcome::Success(value) => Some(value),
            Outcome::Failure(_) => None,
        }
    }

    /// Consume the outcome, keeping the failure value if present.
    pub fn into_error(self) -> Option<E> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(error) => Some(error),
        }
    }

    /// Split into the `(value, error)` pair, exactly one side of which is
    /// `Some`.
    ///
    /// # Example
    ///
    /// ```
    /// use try_catch::try_catch;
    ///
    /// let (value, error) = try_catch(|| 1 + 1).into_parts();
    /// assert_eq!(value, Some(2));
    /// assert!(error.is_none());
    /// ```
    pub fn into_parts(self) -> (Option<T>, Option<E>) {
        match self {
            Outcome::Success(value) => (Some(value), None),
            Outcome::Failure(error) => (None, Some(error)),
        }
    }

    /// Convert into the standard [`Result`] type.
    pub fn into_result(self) -> Result<T, E> {
        self.into()
    }

    /// Map the success value, leaving a failure untouched.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Outcome<U, E> {
        match self {
            Outcome::Success(value) => Outcome::Success(f(value)),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Map the failure value, leaving a success untouched.
    pub fn map_failure<D, F: FnOnce(E) -> D>(self, f: F) -> Outcome<T, D> {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => Outcome::Failure(f(error)),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::Success(value),
            Err(error) => Outcome::Failure(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(error),
        }
    }
}
