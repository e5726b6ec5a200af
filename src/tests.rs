use std::cell::{Cell, RefCell};
use std::panic::panic_any;

use crate::{try_catch, try_catch_all, Batch, CaughtPanic, Error, Outcome};

#[test]
fn sync_success() {
    let outcome = try_catch(|| 42);
    assert!(outcome.is_success());
    assert_eq!(outcome.value(), Some(&42));
    assert!(outcome.error().is_none());
}

#[test]
fn sync_failure_carries_message_verbatim() {
    let outcome: Outcome<i32> = try_catch(|| panic!("oops"));
    assert!(outcome.is_failure());
    assert_eq!(outcome.value(), None);
    assert_eq!(outcome.error().unwrap().message(), Some("oops"));
}

#[test]
fn unit_return_is_a_present_success() {
    let outcome = try_catch(|| ());
    assert_eq!(outcome.value(), Some(&()));
    assert!(outcome.error().is_none());
}

#[test]
fn nested_outcome_is_opaque_payload() {
    let outcome = try_catch(|| Outcome::<i32, String>::Failure("inner".to_owned()));
    // The outer call succeeded; the inner failure is ordinary data.
    assert!(outcome.is_success());
    assert_eq!(
        outcome.into_value(),
        Some(Outcome::Failure("inner".to_owned()))
    );
}

#[test]
fn re_inspection_is_idempotent() {
    let outcome = try_catch(|| "stable");
    assert_eq!(outcome.value(), outcome.value());
    assert_eq!(outcome.value(), Some(&"stable"));
    assert!(outcome.error().is_none());
    assert!(outcome.error().is_none());

    let failed: Outcome<i32> = try_catch(|| panic!("still here"));
    assert_eq!(failed.error().unwrap().message(), Some("still here"));
    assert_eq!(failed.error().unwrap().message(), Some("still here"));
}

#[test]
fn into_parts_yields_exactly_one_side() {
    let (value, error) = try_catch(|| 7).into_parts();
    assert_eq!(value, Some(7));
    assert!(error.is_none());

    let failed: Outcome<i32> = try_catch(|| panic!("split"));
    let (value, error) = failed.into_parts();
    assert!(value.is_none());
    assert_eq!(error.unwrap().message(), Some("split"));
}

#[test]
fn bridges_to_and_from_result() {
    let outcome = Outcome::from(Err::<i32, &str>("nope"));
    assert_eq!(outcome, Outcome::Failure("nope"));
    assert_eq!(outcome.into_result(), Err("nope"));

    let outcome = Outcome::from(Ok::<i32, &str>(5));
    assert_eq!(Result::from(outcome), Ok(5));
}

#[test]
fn map_and_map_failure() {
    let outcome = Outcome::<i32, &str>::Success(10).map(|v| v * 2);
    assert_eq!(outcome, Outcome::Success(20));

    let outcome = Outcome::<i32, &str>::Failure("e").map_failure(str::to_uppercase);
    assert_eq!(outcome, Outcome::Failure("E".to_owned()));
}

#[test]
fn non_string_panic_payload_is_recoverable() {
    let outcome: Outcome<()> = try_catch(|| panic_any(42_i32));
    let caught = outcome.into_error().unwrap();
    assert_eq!(caught.message(), None);
    assert_eq!(caught.payload().downcast_ref::<i32>(), Some(&42));
    assert_eq!(
        caught.to_string(),
        "governed operation panicked with a non-string payload"
    );
}

#[test]
fn caught_panic_display_uses_the_message() {
    let outcome: Outcome<()> = try_catch(|| panic!("kaput"));
    let caught: CaughtPanic = outcome.into_error().unwrap();
    assert_eq!(caught.to_string(), "governed operation panicked: kaput");
}

#[test]
fn batch_is_fail_soft() {
    let invoked = RefCell::new(Vec::new());
    let outcome = try_catch_all(
        Batch::new()
            .task("a", || {
                invoked.borrow_mut().push("a");
                1
            })
            .task("b", || {
                invoked.borrow_mut().push("b");
                panic!("kaboom")
            })
            .task("c", || {
                invoked.borrow_mut().push("c");
                3
            }),
    )
    .unwrap();

    // Every task ran despite b's panic.
    assert_eq!(*invoked.borrow(), vec!["a", "b", "c"]);
    assert_eq!(outcome.value("a"), Some(&1));
    assert_eq!(outcome.value("c"), Some(&3));
    assert_eq!(outcome.value("b"), None);
    assert_eq!(outcome.error("b").unwrap().message(), Some("kaboom"));
    assert_eq!(outcome.values().len(), 2);
    assert_eq!(outcome.errors().unwrap().len(), 1);
}

#[test]
fn batch_without_failures_has_absent_errors() {
    let outcome = try_catch_all(Batch::new().task("a", || 1)).unwrap();
    assert!(!outcome.has_errors());
    assert!(outcome.errors().is_none());
    assert_eq!(outcome.value("a"), Some(&1));
}

#[test]
fn empty_batch_is_valid() {
    let batch: Batch<'_, i32> = Batch::new();
    assert!(batch.is_empty());
    let outcome = try_catch_all(batch).unwrap();
    assert!(outcome.values().is_empty());
    assert!(outcome.errors().is_none());
}

#[test]
fn batch_runs_in_registration_order() {
    let log = RefCell::new(Vec::new());
    let push = |name: &'static str| {
        let log = &log;
        move || {
            log.borrow_mut().push(name);
        }
    };
    let outcome = try_catch_all(
        Batch::new()
            .task("first", push("first"))
            .task("second", push("second"))
            .task("third", push("third")),
    )
    .unwrap();
    assert!(!outcome.has_errors());
    assert_eq!(*log.borrow(), vec!["first", "second", "third"]);
}

#[test]
fn duplicate_task_name_is_rejected_before_anything_runs() {
    let ran = Cell::new(false);
    let err = try_catch_all(
        Batch::new()
            .task("x", || {
                ran.set(true);
                1
            })
            .task("y", || 2)
            .task("x", || {
                ran.set(true);
                3
            }),
    )
    .unwrap_err();

    assert_eq!(err, Error::InvalidInput("x".to_owned()));
    assert!(!ran.get());
}

#[cfg(feature = "futures")]
mod futures {
    use crate::{try_catch_future, Outcome};

    #[tokio::test]
    async fn async_success() {
        let outcome = try_catch_future(async { "done" }).await;
        assert_eq!(outcome.value(), Some(&"done"));
        assert!(outcome.error().is_none());
    }

    #[tokio::test]
    async fn async_failure_carries_message_verbatim() {
        let outcome: Outcome<i32> = try_catch_future(async { panic!("boom") }).await;
        assert!(outcome.value().is_none());
        assert_eq!(outcome.into_error().unwrap().message(), Some("boom"));
    }

    #[tokio::test]
    async fn async_panic_after_a_suspension_point() {
        let outcome: Outcome<i32> = try_catch_future(async {
            tokio::task::yield_now().await;
            panic!("late")
        })
        .await;
        assert_eq!(outcome.into_error().unwrap().message(), Some("late"));
    }
}
