//! The batch form of the combinator: a named collection of tasks run
//! fail-soft, in registration order.
//!
//! [`Batch`] is the input, an ordered list of `(name, closure)` pairs, and
//! [`BatchOutcome`] is the output, splitting the names into a value
//! mapping and an error mapping. The batch form is deliberately a separate
//! entry point ([`try_catch_all`](crate::try_catch_all)) rather than an
//! overload of [`try_catch`](crate::try_catch): a collection of callables
//! is its own call shape, not something to guess from the argument.
//!
//! # Example
//!
//! ```
//! use try_catch::{try_catch_all, Batch};
//!
//! let batch = Batch::new()
//!     .task("parse", || "7".parse::<i32>().unwrap())
//!     .task("boom", || panic!("invalid"))
//!     .task("add", || 1 + 2);
//! let outcome = try_catch_all(batch).unwrap();
//!
//! assert_eq!(outcome.value("parse"), Some(&7));
//! assert_eq!(outcome.value("add"), Some(&3));
//! assert!(outcome.errors().is_some());
//! ```

use std::collections::HashMap;

use crate::error::CaughtPanic;

/// A task registered in a [`Batch`]. Boxed so tasks with different closure
/// types can share one collection; `'a` lets tasks borrow from the caller.
type Task<'a, T> = Box<dyn FnOnce() -> T + 'a>;

/// An ordered, named collection of zero-argument tasks.
///
/// Tasks run strictly one after another in the order they were registered,
/// so a later task may observe the side effects of an earlier one, and
/// diagnostics are deterministic. Registering two tasks under the same name
/// is rejected by [`try_catch_all`](crate::try_catch_all) before anything
/// runs.
#[must_use = "a Batch does nothing until passed to try_catch_all"]
#[derive(Default)]
pub struct Batch<'a, T> {
    tasks: Vec<(String, Task<'a, T>)>,
}

impl<'a, T> Batch<'a, T> {
    /// Create an empty batch.
    pub fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Register a named task, preserving registration order.
    pub fn task<F>(mut self, name: impl Into<String>, f: F) -> Self
    where
        F: FnOnce() -> T + 'a,
    {
        self.tasks.push((name.into(), Box::new(f)));
        self
    }

    /// Number of registered tasks.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether no tasks have been registered.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// First name registered more than once, if any.
    pub(crate) fn duplicate_name(&self) -> Option<&str> {
        let mut seen = std::collections::HashSet::new();
        self.tasks
            .iter()
            .find(|(name, _)| !seen.insert(name.as_str()))
            .map(|(name, _)| name.as_str())
    }

    pub(crate) fn into_tasks(self) -> Vec<(String, Task<'a, T>)> {
        self.tasks
    }
}

impl<T> std::fmt::Debug for Batch<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.tasks.iter().map(|(name, _)| name.as_str()).collect();
        f.debug_struct("Batch").field("tasks", &names).finish()
    }
}

/// The result of running a [`Batch`]: every registered name lands in
/// exactly one of the two mappings.
///
/// When no task failed, [`errors`](BatchOutcome::errors) is `None` rather
/// than an empty map, so callers can treat the error slot's presence itself
/// as the failure signal.
#[must_use = "a BatchOutcome carries the per-task failures; check it before using the values"]
#[derive(Debug)]
pub struct BatchOutcome<T> {
    values: HashMap<String, T>,
    errors: Option<HashMap<String, CaughtPanic>>,
}

impl<T> BatchOutcome<T> {
    /// Normalizes an empty error map into an absent one.
    pub(crate) fn new(values: HashMap<String, T>, errors: HashMap<String, CaughtPanic>) -> Self {
        let errors = if errors.is_empty() {
            None
        } else {
            Some(errors)
        };
        Self { values, errors }
    }

    /// The successful tasks' values, keyed by task name.
    pub fn values(&self) -> &HashMap<String, T> {
        &self.values
    }

    /// The failed tasks' panics, keyed by task name; `None` when every
    /// task succeeded.
    pub fn errors(&self) -> Option<&HashMap<String, CaughtPanic>> {
        self.errors.as_ref()
    }

    /// The value produced by the named task, if it succeeded.
    pub fn value(&self, name: &str) -> Option<&T> {
        self.values.get(name)
    }

    /// The panic caught from the named task, if it failed.
    pub fn error(&self, name: &str) -> Option<&CaughtPanic> {
        self.errors.as_ref().and_then(|errors| errors.get(name))
    }

    /// Whether any task failed.
    pub fn has_errors(&self) -> bool {
        self.errors.is_some()
    }

    /// Split into the `(values, errors)` pair.
    #[allow(clippy::type_complexity)]
    pub fn into_parts(self) -> (HashMap<String, T>, Option<HashMap<String, CaughtPanic>>) {
        (self.values, self.errors)
    }
}
