//! Running searches off the caller's thread.
//!
//! The rules engine and search are single-threaded and synchronous. A user
//! interface that must stay responsive while the computer thinks hands the
//! position to a [`SearchJob`] and polls it.

mod controller;

pub use controller::SearchJob;
