//! A guided tour of the `functour` primitives.
//!
//! Each function in [`steps`] exercises one feature and returns the lines the
//! `tour` binary prints for it. The small domain used along the way lives in
//! its own modules:
//!
//! - [`person`]: a validated `Person` record
//! - [`chemistry`]: a task that either fails with an error state or succeeds
//! - [`event`]: a three-level `Event` / `Game` / `Outcome` graph with a
//!   user-defined projection
//! - [`config`]: timings and case counts read from the environment

pub mod chemistry;
pub mod config;
pub mod event;
pub mod person;
pub mod steps;

pub use config::{ConfigError, TourConfig};
