//! This crate converts panicking calls, pending futures, and batches of
//! named tasks into explicit [`Outcome`] values, so a governed operation's
//! failure is returned as data instead of unwinding through the caller.
//!
//! # Usage
//!
//! Add this to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! try-catch = "0.1"
//! ```
//!
//! This crate offers the following features:
//!
//! * `futures`: Enabled by default. Provides [`try_catch_future`] for
//!   wrapping an in-flight [`Future`], via
//!   [futures-util](https://crates.io/crates/futures-util). Disable the
//!   default features for a synchronous-only build.
//!
//! # Examples
//!
//! Wrap a single call:
//! ```
//! use try_catch::{try_catch, Outcome};
//!
//! let outcome: Outcome<i32> = try_catch(|| "not a number".parse().unwrap());
//! assert!(outcome.is_failure());
//! ```
//!
//! Wrap an in-flight future:
//! ```
//! # async fn demo() {
//! let outcome = try_catch::try_catch_future(async { fetch_config().await }).await;
//! match outcome.into_parts() {
//!     (Some(config), None) => apply(config),
//!     (None, Some(panic)) => eprintln!("config task died: {panic}"),
//!     _ => unreachable!(),
//! }
//! # }
//! # async fn fetch_config() -> u32 { 0 }
//! # fn apply(_: u32) {}
//! ```
//!
//! Run a batch of named tasks, collecting every failure instead of
//! stopping at the first:
//! ```
//! use try_catch::{try_catch_all, Batch};
//!
//! let outcome = try_catch_all(
//!     Batch::new()
//!         .task("width", || "12".parse::<u32>().unwrap())
//!         .task("height", || "oops".parse::<u32>().unwrap()),
//! )
//! .unwrap();
//!
//! assert_eq!(outcome.value("width"), Some(&12));
//! assert!(outcome.error("height").is_some());
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

use std::collections::HashMap;
use std::panic::AssertUnwindSafe;

use itertools::{Either, Itertools};

pub mod error;
pub use error::{CaughtPanic, Error, Result};

pub mod outcome;
pub use outcome::Outcome;

pub mod batch;
pub use batch::{Batch, BatchOutcome};

#[cfg(feature = "futures")]
use std::future::Future;

/// Invoke a zero-argument callable, catching any panic it raises.
///
/// The callable runs immediately on the calling thread; this never
/// suspends. A normal return becomes [`Outcome::Success`] and a panic
/// becomes [`Outcome::Failure`] carrying the payload verbatim as a
/// [`CaughtPanic`]. A `()` return is still a present success value, not an
/// absent one.
///
/// The callable is asserted unwind-safe; state it shared with the caller
/// may have been left mid-update by the panic, and travels back alongside
/// the returned failure.
///
/// # Examples
///
/// ```
/// let outcome = try_catch::try_catch(|| 21 * 2);
/// assert_eq!(outcome.into_value(), Some(42));
/// ```
pub fn try_catch<T, F>(f: F) -> Outcome<T>
where
    F: FnOnce() -> T,
{
    match std::panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => Outcome::Success(value),
        Err(payload) => Outcome::Failure(CaughtPanic::new(payload)),
    }
}

/// Await an in-flight future, catching any panic raised while polling it.
///
/// This attaches a panic-catching continuation to the given future and
/// otherwise adds no suspension point of its own: the returned future
/// settles exactly when the wrapped one does, to [`Outcome::Success`] with
/// its output or [`Outcome::Failure`] with the verbatim panic payload. If
/// the wrapped future never settles, neither does this one; there is no
/// internal timeout. Cancellation is likewise the wrapped future's concern:
/// dropping the returned future drops it.
///
/// # Examples
///
/// ```
/// # async fn demo() {
/// let outcome = try_catch::try_catch_future(async { "done" }).await;
/// assert_eq!(outcome.into_value(), Some("done"));
/// # }
/// ```
#[cfg(feature = "futures")]
pub async fn try_catch_future<F>(future: F) -> Outcome<F::Output>
where
    F: Future,
{
    use futures_util::future::FutureExt;

    match AssertUnwindSafe(future).catch_unwind().await {
        Ok(value) => Outcome::Success(value),
        Err(payload) => Outcome::Failure(CaughtPanic::new(payload)),
    }
}

/// Run every task in a [`Batch`], fail-soft, in registration order.
///
/// Tasks run strictly one after another on the calling thread. A panicking
/// task is recorded under its name in the error mapping and does not stop
/// the tasks after it: every entry is attempted. Successes land in the
/// value mapping under the same names; when nothing failed the error
/// mapping is absent entirely, per [`BatchOutcome`].
///
/// # Errors
///
/// Returns [`Error::InvalidInput`], before invoking anything, when two
/// tasks were registered under the same name, since such a batch cannot
/// attribute each result to exactly one entry.
///
/// # Examples
///
/// ```
/// use try_catch::{try_catch_all, Batch};
///
/// let outcome = try_catch_all(
///     Batch::new()
///         .task("a", || 1)
///         .task("b", || panic!("boom"))
///         .task("c", || 3),
/// )
/// .unwrap();
///
/// assert_eq!(outcome.value("a"), Some(&1));
/// assert_eq!(outcome.value("c"), Some(&3));
/// assert_eq!(outcome.error("b").unwrap().message(), Some("boom"));
/// ```
pub fn try_catch_all<T>(batch: Batch<'_, T>) -> Result<BatchOutcome<T>> {
    if let Some(name) = batch.duplicate_name() {
        return Err(Error::InvalidInput(name.to_owned()));
    }

    // partition_map drives the iterator lazily, so tasks still run one at
    // a time in registration order.
    let (values, errors): (HashMap<_, _>, HashMap<_, _>) = batch
        .into_tasks()
        .into_iter()
        .map(|(name, task)| (name, try_catch(task)))
        .partition_map(|(name, outcome)| match outcome {
            Outcome::Success(value) => Either::Left((name, value)),
            Outcome::Failure(error) => Either::Right((name, error)),
        });

    Ok(BatchOutcome::new(values, errors))
}

#[cfg(test)]
mod tests;
