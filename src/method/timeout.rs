use std::time::Duration;

/// A wait bound, either supplied per call at a declared timeout
/// parameter position or configured as the connection default.
///
/// Read at dispatch time only; never stored by the engine.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Timeout {
    duration: Duration,
}

impl Timeout {
    pub fn from_duration(duration: Duration) -> Self {
        Self { duration }
    }

    pub fn from_millis(millis: u64) -> Self {
        Self {
            duration: Duration::from_millis(millis),
        }
    }

    pub fn from_secs(secs: u64) -> Self {
        Self {
            duration: Duration::from_secs(secs),
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }
}

impl From<Duration> for Timeout {
    fn from(duration: Duration) -> Self {
        Self { duration }
    }
}
