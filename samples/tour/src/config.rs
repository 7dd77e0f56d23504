//! Tour configuration.
//!
//! The tour's timings are read from environment variables (a `.env` file is
//! honoured) so that the slow steps can be shortened:
//!
//! | Variable               | Default | Meaning                                   |
//! |------------------------|---------|-------------------------------------------|
//! | `TOUR_FUTURE_DELAY_MS` | 2000    | how long the future step's work sleeps     |
//! | `TOUR_SLOW_TASK_MS`    | 5000    | how long the timed-out task's work sleeps  |
//! | `TOUR_DEADLINE_MS`     | 2000    | deadline given to the timed-out task       |
//! | `TOUR_PROPERTY_CASES`  | 100     | cases generated by the property step       |

use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Errors raised while reading the configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A variable is set but cannot be parsed.
    #[error("Invalid value for {key}: {message}")]
    InvalidValue {
        /// The variable name.
        key: String,
        /// Why the value was rejected.
        message: String,
    },
}

/// Timings and sizes used by the tour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TourConfig {
    /// Sleep inside the future step before it yields 42.
    pub future_delay: Duration,
    /// Sleep inside the task that is expected to time out.
    pub slow_task: Duration,
    /// Deadline given to that task.
    pub deadline: Duration,
    /// Number of generated inputs for the property step.
    pub property_cases: u32,
}

impl Default for TourConfig {
    fn default() -> Self {
        Self {
            future_delay: Duration::from_millis(2000),
            slow_task: Duration::from_millis(5000),
            deadline: Duration::from_millis(2000),
            property_cases: 100,
        }
    }
}

impl TourConfig {
    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if a variable is set to something
    /// that is not a non-negative integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads the configuration through `lookup`; unset keys keep their
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for unparsable values.
    pub fn from_lookup<L>(lookup: L) -> Result<Self, ConfigError>
    where
        L: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Ok(Self {
            future_delay: millis(&lookup, "TOUR_FUTURE_DELAY_MS", defaults.future_delay)?,
            slow_task: millis(&lookup, "TOUR_SLOW_TASK_MS", defaults.slow_task)?,
            deadline: millis(&lookup, "TOUR_DEADLINE_MS", defaults.deadline)?,
            property_cases: parsed(&lookup, "TOUR_PROPERTY_CASES", defaults.property_cases)?,
        })
    }
}

fn millis<L>(lookup: &L, key: &str, default: Duration) -> Result<Duration, ConfigError>
where
    L: Fn(&str) -> Option<String>,
{
    let default_millis = u64::try_from(default.as_millis()).unwrap_or(u64::MAX);
    parsed(lookup, key, default_millis).map(Duration::from_millis)
}

fn parsed<L, T>(lookup: &L, key: &str, default: T) -> Result<T, ConfigError>
where
    L: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    lookup(key).map_or(Ok(default), |raw| {
        raw.trim().parse().map_err(|error: T::Err| ConfigError::InvalidValue {
            key: key.to_string(),
            message: error.to_string(),
        })
    })
}
