//! The tour, one function per feature.
//!
//! Every step returns the lines it wants printed. [`run_all`] drives the
//! steps in narrative order.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use std::sync::atomic::{AtomicI32, AtomicU32, Ordering};
use std::thread;

use functour::compose::{Tuple2Ext, lift_option2, lift_try2, memoize};
use functour::concurrent::{Latch, Task, TaskConfig};
use functour::control::{Failure, Lazy, Try};
use functour::matching::Match;
use functour::matching::patterns::{any, failure, left, right, some, success, tuple2, when};
use functour::persistent::{PersistentList, PersistentQueue, PersistentSortedSet, Stream};
use functour::typeclass::Functor;
use functour::{compose, curry3, partial};
use proptest::prop_assert_eq;
use proptest::test_runner::{Config, TestRunner};

use crate::chemistry::{ErrorState, SuccessState, TASK_INPUTS, perform_task};
use crate::config::TourConfig;
use crate::event::{Event, describe};
use crate::person::{Person, PersonValidator};

/// Runs every step in order, handing each title and its lines to `emit`.
pub fn run_all<E>(config: &TourConfig, mut emit: E)
where
    E: FnMut(&str, Vec<String>),
{
    emit("List", lists());
    emit("Queue", queues());
    emit("SortedSet", sorted_sets());
    emit("Stream", streams());
    emit("Tuple", tuples());
    emit("Functions", functions());
    emit("Option", options());
    emit("Try", tries());
    emit("Lazy", lazies());
    emit("Either", eithers());
    emit("Future", futures(config));
    emit("Validation", validations());
    emit("Timeout", timeouts(config));
    emit("Property", properties(config));
    emit("Pattern", events());
}

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

/// Appending returns a new list; the original keeps its contents and hash.
pub fn lists() -> Vec<String> {
    let list = PersistentList::of([1, 2, 3]);
    let hash_before = hash_of(&list);
    let appended = list.append(0);
    vec![
        format!("{list} has hash {hash_before}"),
        format!("{appended} has hash {}", hash_of(&appended)),
        format!("original untouched: {}", hash_of(&list) == hash_before),
    ]
}

/// Dequeuing yields the head together with the remaining queue.
pub fn queues() -> Vec<String> {
    let queue = PersistentQueue::of([1, 2, 3]);
    let line = Match::of(&queue.dequeue())
        .case(some(tuple2(any(), any())), |(head, rest): (i32, PersistentQueue<i32>)| {
            format!("dequeued {head}, remaining {rest}")
        })
        .otherwise(|_| "queue was empty".to_string());
    vec![line]
}

/// A comparator on the name decides both order and identity.
pub fn sorted_sets() -> Vec<String> {
    let people = PersistentSortedSet::with_comparator(|a: &Person, b: &Person| a.name.cmp(&b.name))
        .insert(Person::new("name2", 20))
        .insert(Person::new("name1", 30))
        .insert(Person::new("name1", 99));
    vec![people.to_string()]
}

/// Only the head of a stream is evaluated until more is asked for.
pub fn streams() -> Vec<String> {
    let numbers = Stream::of(vec![1, 2, 3]).map(|n| n.to_string());
    let sentence = Stream::of(vec!["one", "two", "three"])
        .intersperse(", ")
        .fold_left(String::new(), |buffer, word| buffer + word);
    vec![numbers.to_string(), sentence]
}

/// Pairs can be mapped as a whole or collapsed into one value.
pub fn tuples() -> Vec<String> {
    let java8 = ("Java", 8);
    let vavr2 = java8.map_pair(|name, version| (name.replace("Java", "Vavr"), version / 4));
    let described = vavr2.clone().apply(|name, version| format!("{name} {version}"));
    vec![format!("{java8:?} mapped to {vavr2:?}"), described]
}

/// Composition, lifting, currying, partial application and memoization.
pub fn functions() -> Vec<String> {
    let sum = |a: i32, b: i32| a + b;
    let sum_then_double = compose!(|n: i32| n * 2, |(a, b): (i32, i32)| sum(a, b));

    let divide = |a: i32, b: i32| a / b;
    let safe_divide = lift_option2(divide);
    let tried_divide = lift_try2(divide);

    let sum3 = |a: i32, b: i32, c: i32| a + b + c;
    let sum_after_one = partial!(sum3, 1, __, __);

    let random = memoize(|()| rand::random::<f64>());

    vec![
        format!("sum(1, 2) = {}", sum(1, 2)),
        format!("sum then double (1, 2) = {}", sum_then_double((1, 2))),
        format!("lifted divide(1, 0) = {:?}", safe_divide(1, 0)),
        format!("try-lifted divide(1, 0) = {}", tried_divide(1, 0)),
        format!("curried sum3(1)(2)(3) = {}", curry3!(sum3)(1)(2)(3)),
        format!("sum3(1, _, _)(2, 3) = {}", sum_after_one(2, 3)),
        format!("memoized random is stable: {}", random.apply(()) == random.apply(())),
    ]
}

/// Absence propagates through a chain without any null checks.
pub fn options() -> Vec<String> {
    let chained = Some("value")
        .map(str::to_uppercase)
        .and_then(|_| None::<String>)
        .map(|upper| upper.len());
    vec![
        format!("Some(\"value\") mapped into absence = {chained:?}"),
        format!("fmap over Some(2) = {:?}", Some(2).fmap(|n| n * 10)),
    ]
}

#[derive(Debug, thiserror::Error)]
#[error("{0}")]
struct IllegalThreadState(&'static str);

/// A raised error is captured as a value and observed by `on_failure`.
pub fn tries() -> Vec<String> {
    let mut lines = Vec::new();
    let attempt: Try<i32> = Try::of_fallible(|| Err(IllegalThreadState("thread illegal state")))
        .on_failure(|failure| lines.push(format!("on_failure saw: {failure}")));
    lines.push(format!("captured: {attempt}"));
    lines.push(format!("recovered: {}", attempt.recover(|_| -1)));
    lines
}

/// The producer runs on first access only.
pub fn lazies() -> Vec<String> {
    let lazy = Lazy::new(rand::random::<f64>);
    let evaluated_before = lazy.is_evaluated();
    let first = *lazy.get();
    let second = *lazy.get();
    vec![
        format!("evaluated before get: {evaluated_before}"),
        format!("same value on every get: {}", first.to_bits() == second.to_bits()),
    ]
}

/// The caller branches on the side of the `Either`.
pub fn eithers() -> Vec<String> {
    [1, 2]
        .into_iter()
        .map(|input| {
            Match::of(&perform_task(input))
                .case(left(any()), |error: ErrorState| {
                    format!("perform_task({input}) failed: {}", error.message)
                })
                .case(right(any()), |state: SuccessState| {
                    format!("perform_task({input}) succeeded: {}", state.value)
                })
                .otherwise(|other| format!("perform_task({input}) returned {other}"))
        })
        .collect()
}

/// A listener sees the result of background work; the caller blocks on a
/// latch until it has.
pub fn futures(config: &TourConfig) -> Vec<String> {
    let delay = config.future_delay;
    let task = Task::submit(move || {
        thread::sleep(delay);
        42
    });

    let latch = Latch::new(1);
    let observed = Arc::new(AtomicI32::new(0));
    {
        let latch = latch.clone();
        let observed = Arc::clone(&observed);
        task.on_complete(move |outcome| {
            let value = Match::of(outcome)
                .case(success(any()), |value: i32| value)
                .case(failure(any()), |_: Failure| -42)
                .otherwise(|_| -42);
            observed.store(value, Ordering::SeqCst);
            latch.count_down();
        });
    }

    let submitted = format!("submitted, completed yet: {}", task.is_completed());
    tracing::debug!(?delay, "waiting for the future step");
    latch.wait();
    vec![
        submitted,
        format!("listener observed {}", observed.load(Ordering::SeqCst)),
    ]
}

/// Both fields are checked and every broken rule is reported.
pub fn validations() -> Vec<String> {
    let validator = PersonValidator;
    vec![
        validator.validate("John Doe", 30).to_string(),
        validator.validate("John? Doe!4", -1).to_string(),
    ]
}

/// Work that outlives its deadline completes the task with a timeout.
pub fn timeouts(config: &TourConfig) -> Vec<String> {
    let slow = config.slow_task;
    let task = Task::submit_with(
        TaskConfig::default().name("slow-task").timeout(config.deadline),
        move || {
            thread::sleep(slow);
            "finished"
        },
    );
    let outcome = task.wait();
    let line = Match::of(&outcome)
        .case(success(any()), |value: &str| format!("completed: {value}"))
        .case(failure(when(Failure::is_timeout)), |timeout: Failure| {
            format!("gave up: {timeout}")
        })
        .otherwise(|other| format!("failed: {other}"));
    vec![line]
}

/// Checks `perform_task` against generated inputs at run time.
pub fn properties(config: &TourConfig) -> Vec<String> {
    let name = "perform_task(i) is Left exactly when i == 1";
    let mut runner = TestRunner::new(Config {
        cases: config.property_cases,
        failure_persistence: None,
        ..Config::default()
    });
    let passed = AtomicU32::new(0);
    let verdict = runner.run(&TASK_INPUTS, |input| {
        prop_assert_eq!(perform_task(input).is_left(), input == 1);
        passed.fetch_add(1, Ordering::Relaxed);
        Ok(())
    });
    let line = match verdict {
        Ok(()) => format!(
            "{name}: OK, passed {} tests.",
            passed.load(Ordering::Relaxed)
        ),
        Err(error) => format!("{name}: FAILED, {error}"),
    };
    vec![line]
}

/// One pattern reaches through event, game and outcome.
pub fn events() -> Vec<String> {
    vec![
        describe(&Event::decided("Derby", "City vs United", "home win", 1.85)),
        describe(&Event::announced("Charity match")),
    ]
}
