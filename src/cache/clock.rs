//! Injectable time source for TTL checks

use chrono::{DateTime, Utc};

/// Time source abstraction so TTL expiry is testable without sleeping
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
