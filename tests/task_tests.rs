#![cfg(feature = "concurrent")]
//! Behavior of `Task` as seen from plain threads and from async code.
//!
//! The synchronous tests run outside any runtime, so tasks go to the shared
//! multi-threaded runtime and blocking on them is allowed.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::Duration;

use functour::concurrent::{Latch, Task, TaskConfig};
use functour::control::{Failure, Try};
use rstest::rstest;

const GENEROUS: Duration = Duration::from_secs(10);

// =============================================================================
// Blocking callers
// =============================================================================

#[rstest]
fn submitted_work_completes_with_its_value() {
    let task = Task::submit(|| 6 * 7);
    assert_eq!(task.wait().ok(), Some(42));
    assert_eq!(task.to_string(), "Task(Success(42))");
}

#[rstest]
fn panicking_work_completes_with_a_failure() {
    let task: Task<i32> = Task::submit(|| panic!("illegal thread state"));
    match task.wait() {
        Try::Failure(failure) => {
            assert!(failure.is_panic());
            assert_eq!(failure.to_string(), "illegal thread state");
        }
        Try::Success(value) => panic!("expected a failure, got {value}"),
    }
}

#[rstest]
fn every_listener_fires_exactly_once() {
    let fired = Arc::new(AtomicUsize::new(0));
    let latch = Latch::new(3);
    let task = Task::submit(|| "done".to_string());

    for _ in 0..3 {
        let fired = Arc::clone(&fired);
        let latch = latch.clone();
        task.on_complete(move |_| {
            fired.fetch_add(1, Ordering::SeqCst);
            latch.count_down();
        });
    }

    latch.wait_timeout(GENEROUS).unwrap();
    assert_eq!(fired.load(Ordering::SeqCst), 3);
}

#[rstest]
fn listener_added_after_completion_fires_immediately() {
    let task = Task::completed(Try::success(1));
    let seen = Arc::new(AtomicUsize::new(0));
    let observer = Arc::clone(&seen);

    task.on_success(move |value| {
        observer.store(*value, Ordering::SeqCst);
    });

    assert_eq!(seen.load(Ordering::SeqCst), 1);
}

#[rstest]
fn on_failure_is_skipped_for_a_success() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);

    Task::completed(Try::success(5)).on_failure(move |_: &Failure| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[rstest]
fn a_panicking_listener_does_not_poison_the_task() {
    let task = Task::completed(Try::success(3));
    task.on_complete(|_| panic!("listener blew up"));
    assert_eq!(task.value().and_then(Try::ok), Some(3));
}

#[rstest]
fn slow_work_misses_its_deadline() {
    let config = TaskConfig::default()
        .timeout(Duration::from_millis(20))
        .name("slow");
    let task = Task::submit_with(config, || {
        thread::sleep(Duration::from_millis(500));
        1
    });

    match task.wait() {
        Try::Failure(failure) => assert!(failure.is_timeout()),
        Try::Success(_) => panic!("the deadline should have been missed"),
    }
}

#[rstest]
fn wait_timeout_reports_a_pending_task() {
    let gate = Latch::new(1);
    let opener = gate.clone();
    let task = Task::submit(move || {
        gate.wait();
        7
    });

    let error = task.wait_timeout(Duration::from_millis(20)).unwrap_err();
    assert_eq!(error.duration, Duration::from_millis(20));
    assert!(!task.is_completed());

    opener.count_down();
    assert_eq!(task.wait().ok(), Some(7));
}

// =============================================================================
// Async callers
// =============================================================================

#[rstest]
#[tokio::test]
async fn join_yields_the_outcome_of_an_async_task() {
    let task = Task::submit_async(async { "joined".to_string() });
    assert_eq!(task.join().await.ok(), Some("joined".to_string()));
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn async_task_past_its_deadline_times_out() {
    let config = TaskConfig::default().timeout(Duration::from_secs(2));
    let task = Task::submit_async_with(config, async {
        tokio::time::sleep(Duration::from_secs(5)).await;
        "late"
    });

    let outcome = task.join().await;
    assert!(matches!(outcome, Try::Failure(ref failure) if failure.is_timeout()));
}

#[rstest]
#[tokio::test]
async fn panic_while_polling_is_captured() {
    let task: Task<u8> = Task::submit_async(async { panic!("poll failed") });
    let outcome = task.join().await;
    assert!(outcome.is_failure());
}
