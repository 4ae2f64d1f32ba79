//! Integration test harness.
//!
//! Exercises the public API end to end: the worked scoring scenarios,
//! the tier ladder, and shared use across threads.

mod concurrency;
mod scenarios;
