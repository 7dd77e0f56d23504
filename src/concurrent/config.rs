use std::time::Duration;

/// Options applied to a single [`Task`](super::Task).
///
/// ```rust
/// use functour::concurrent::TaskConfig;
/// use std::time::Duration;
///
/// let config = TaskConfig::default()
///     .name("slow-report")
///     .timeout(Duration::from_secs(2));
/// assert_eq!(config.deadline(), Some(Duration::from_secs(2)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskConfig {
    timeout: Option<Duration>,
    name: Option<String>,
}

impl TaskConfig {
    /// Completes the task with a timeout failure if the work has not finished
    /// within `duration`. The work itself keeps running.
    #[must_use]
    pub const fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Labels the task in log output.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The configured deadline, if any.
    #[inline]
    pub const fn deadline(&self) -> Option<Duration> {
        self.timeout
    }

    /// The configured label, or `"task"`.
    #[inline]
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or("task")
    }
}
