// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Source of "now" for storage engines that stamp rows themselves.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
