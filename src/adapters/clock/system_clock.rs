use chrono::{DateTime, Utc};

use crate::core::usecases::ports::Clock;

/// `Clock` implementation backed by the OS wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
