//! Recache Session
//!
//! Holds the current store for a host and moves it forward one command at
//! a time. Every successful change is journaled, so the current store can
//! always be rebuilt from the initial one.

mod error;
mod session;

pub use error::{SessionError, SessionResult};
pub use session::{Generation, Session};
