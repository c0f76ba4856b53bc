//! Port for time abstraction.
//!
//! Abstracts time access so cache versioning, session expiry, and token
//! claim checks are deterministic under test.
//!
//! Adapters must implement this trait to provide concrete time sources.

use chrono::{DateTime, Utc};

/// Contract for time abstraction.
pub trait Clock: Send + Sync {
	/// Returns the current UTC time.
	fn now(&self) -> DateTime<Utc>;
}
