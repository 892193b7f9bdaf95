//! Caller-side game flow
//!
//! Owns the current round and talks to the word source.

mod session;

pub use session::{Session, SessionError};
